use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod utils;

use blog_content::{BlogService, PostId};
use commands::{categories, enhance, posts};
use utils::env_config::BlogConfig;

/// Blog CLI - Command line preview of blog posts, categories and enhanced article HTML
#[derive(Parser)]
#[command(name = "blogc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List blog posts
    Posts {
        /// Only show featured posts
        #[arg(long)]
        featured: bool,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show a single post with enhanced content
    Post {
        /// Post slug
        slug: String,

        /// Output format (json, html, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the posts of a category
    Category {
        /// Category slug (e.g., "waermepumpe")
        slug: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List all categories with post counts
    Categories {
        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show posts related to a post
    Related {
        /// Post id
        id: PostId,

        /// Maximum number of posts (defaults to BLOG_RELATED_LIMIT or 3)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print the enhanced version of an HTML file
    Enhance {
        /// HTML file to enhance
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides --verbose, stdout is reserved for command output
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Posts { featured, format } => {
            let service = load_service().await?;
            posts::list(&service, featured, format).await?;
        }
        Commands::Post { slug, format } => {
            let service = load_service().await?;
            posts::show(&service, slug, format).await?;
        }
        Commands::Category { slug, format } => {
            let service = load_service().await?;
            posts::by_category(&service, slug, format).await?;
        }
        Commands::Categories { format } => {
            let service = load_service().await?;
            categories::list(&service, format).await?;
        }
        Commands::Related { id, limit, format } => {
            let service = load_service().await?;
            posts::related(&service, id, limit, format).await?;
        }
        Commands::Enhance { file } => {
            // enhancing a file needs no content source
            enhance::execute(file).await?;
        }
    }

    Ok(())
}

/// Load the configuration and build the service for its content source
async fn load_service() -> Result<BlogService> {
    let config = BlogConfig::load()?;
    commands::build_service(&config).await
}
