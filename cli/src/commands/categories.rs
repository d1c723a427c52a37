use anyhow::Result;
use blog_content::BlogService;
use colored::*;

/// List all categories with their post counts
pub async fn list(service: &BlogService, format: String) -> Result<()> {
    let categories = service.get_all_categories().await;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        _ => {
            println!("{}", "=== Blog Categories ===".bold());
            println!();

            if categories.is_empty() {
                println!("{}", "No categories found".yellow());
                return Ok(());
            }

            for category in &categories {
                println!(
                    "{} {} {}",
                    category.name.bold(),
                    format!("({})", category.count).green(),
                    category.slug.cyan()
                );
                println!("    {}", category.description);
            }
        }
    }

    Ok(())
}
