//! Error extension utilities
//!
//! Context extension methods converting foreign errors into the domain
//! error type while attaching a description of what was being attempted.

use std::fmt;

use courserec_domain::error::{Error, Result};

/// Extension trait for adding context to fallible calls
///
/// # Example
///
/// ```ignore
/// use courserec_infrastructure::error_ext::ErrorContext;
///
/// let config: AppConfig = figment
///     .extract()
///     .config_context("failed to extract configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context, converting the error into a domain internal error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context, converting the error into a configuration error
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::internal(format!("{context}: {err}")))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}"), err))
    }
}
