use anyhow::{Context, Result};
use blog_content::enhance_content;
use std::path::PathBuf;

/// Print the display version of an HTML file
pub async fn execute(file: PathBuf) -> Result<()> {
    let html = tokio::fs::read_to_string(&file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    println!("{}", enhance_content(&html));

    Ok(())
}
