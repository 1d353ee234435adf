//! Best-effort course image resolution
//!
//! External collaborator, fully isolated from the engine: given a course
//! name, try to scrape a representative image URL from Bing image
//! search. Every failure path (network error, timeout, no matching tag)
//! resolves to a placeholder URL; nothing here ever propagates an error
//! into the recommendation flow.

use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use tracing::debug;

use courserec_domain::error::{Error, Result};

/// Placeholder shown when no image can be resolved
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x200?text=No+Image+Available";

/// Request timeout for image lookups; generous enough for a search page,
/// short enough not to stall result rendering noticeably
const IMAGE_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Best-effort image resolver
pub struct ImageResolver {
    client: Client,
    image_tag: Regex,
}

impl ImageResolver {
    /// Create a resolver; fails only if the HTTP client or the tag
    /// pattern cannot be constructed
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(IMAGE_LOOKUP_TIMEOUT)
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| Error::network_with_source("failed to build image search client", e))?;

        // First result image on the search page carries the `mimg` class
        let image_tag = Regex::new(r#"<img[^>]+class="[^"]*\bmimg\b[^"]*"[^>]+src="([^"]+)""#)
            .map_err(|e| Error::internal(format!("invalid image tag pattern: {e}")))?;

        Ok(Self { client, image_tag })
    }

    /// Resolve a display image URL for a course name.
    ///
    /// Never fails: any lookup problem yields the placeholder.
    pub async fn resolve(&self, course_name: &str) -> String {
        match self.fetch_first_image(course_name).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(course_name, "no image found, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
            Err(error) => {
                debug!(course_name, %error, "image lookup failed, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }

    async fn fetch_first_image(&self, course_name: &str) -> Result<Option<String>> {
        let query = course_name.replace(' ', "+");
        let url = format!("https://www.bing.com/images/search?q={query}+course+image");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(format!("image search request failed: {e}")))?;
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("image search response unreadable: {e}")))?;

        Ok(self
            .image_tag
            .captures(&body)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string()))
    }
}
