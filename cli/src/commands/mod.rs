use crate::utils::env_config::BlogConfig;
use anyhow::{Context, Result};
use blog_content::{BlogService, JsonFileSource};
use tracing::debug;

pub mod categories;
pub mod enhance;
pub mod posts;

/// Build the blog service for the configured content source
pub async fn build_service(config: &BlogConfig) -> Result<BlogService> {
    let service = match &config.content_path {
        Some(path) => {
            let source = JsonFileSource::open(path)
                .await
                .with_context(|| format!("Failed to open content file {}", path.display()))?;
            BlogService::new(source)
        }
        None => BlogService::mock(),
    };

    debug!("Using {} content source", service.source_name());

    Ok(service.with_related_limit(config.related_limit))
}
