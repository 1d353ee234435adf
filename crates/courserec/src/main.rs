//! Course Recommendation Engine - Entry Point
//!
//! Builds the engine from configuration, then either answers a single
//! query or runs a configuration and provider health check.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;

use courserec::domain::EmbeddingProvider;
use courserec::images::ImageResolver;
use courserec::infrastructure::{ConfigLoader, build_embedding_provider, build_engine};
use courserec::{AppConfig, CourseRecord, RankedCourse, init_logging};

/// Command line interface for the course recommendation engine
#[derive(Parser, Debug)]
#[command(name = "courserec")]
#[command(about = "Course recommendation engine - semantic search over a course catalog")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the dataset path from configuration
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend courses for a free-text query
    Recommend {
        /// The search query
        query: String,

        /// Number of recommendations to return (config default: 10)
        #[arg(long)]
        top_n: Option<usize>,

        /// Emit the recommended records as JSON
        #[arg(long)]
        json: bool,

        /// Resolve a display image for records without one (best effort)
        #[arg(long)]
        images: bool,
    },

    /// Validate configuration and embedding provider health
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }

    init_logging(&config.logging)?;

    match cli.command {
        Command::Recommend {
            query,
            top_n,
            json,
            images,
        } => run_recommend(&config, &query, top_n, json, images).await,
        Command::Check => run_check(&config).await,
    }
}

async fn run_recommend(
    config: &AppConfig,
    query: &str,
    top_n: Option<usize>,
    json: bool,
    images: bool,
) -> anyhow::Result<()> {
    let engine = build_engine(config).await?;
    let ranked = engine
        .recommend(query, top_n.unwrap_or_else(|| engine.top_n()))
        .await?;

    if ranked.is_empty() {
        println!("No courses matched \"{query}\".");
        return Ok(());
    }

    if json {
        let records: Vec<&CourseRecord> = ranked.iter().map(|r| &r.course).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    // Image resolution is best effort; a resolver that cannot even be
    // constructed just disables the flag
    let resolver = if images {
        match ImageResolver::new() {
            Ok(resolver) => Some(resolver),
            Err(error) => {
                warn!(%error, "image resolver unavailable");
                None
            }
        }
    } else {
        None
    };

    for (rank, item) in ranked.iter().enumerate() {
        print_recommendation(rank + 1, item, resolver.as_ref()).await;
    }
    Ok(())
}

async fn print_recommendation(rank: usize, item: &RankedCourse, resolver: Option<&ImageResolver>) {
    let course = &item.course;
    println!("{rank:>2}. {}  (distance {:.4})", course.name, item.distance);
    println!("    {}", course.url);
    if !course.description.is_empty() {
        println!("    {}", truncate(&course.description, 160));
    }

    let image_url = match resolver {
        Some(resolver) if course.image_url.is_empty() => resolver.resolve(&course.name).await,
        _ => course.image_url.clone(),
    };
    if !image_url.is_empty() {
        println!("    image: {image_url}");
    }
}

async fn run_check(config: &AppConfig) -> anyhow::Result<()> {
    let provider = build_embedding_provider(config)?;
    provider.health_check().await?;
    println!(
        "ok: provider '{}' is healthy ({} dimensions), dataset {}",
        provider.provider_name(),
        provider.dimensions(),
        config.dataset.path.display()
    );
    Ok(())
}

/// Truncate to at most `max` characters on a char boundary
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}
