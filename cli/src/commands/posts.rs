use anyhow::{anyhow, Result};
use blog_content::{BlogPost, BlogService, PostId};
use colored::*;

/// List all posts, or only featured ones
pub async fn list(service: &BlogService, featured: bool, format: String) -> Result<()> {
    let posts = if featured {
        service.get_featured_posts().await
    } else {
        service.get_all_blog_posts().await
    };

    let heading = if featured {
        "Featured Posts"
    } else {
        "Blog Posts"
    };
    print_posts(heading, &posts, &format)
}

/// Show a single post with its enhanced content
pub async fn show(service: &BlogService, slug: String, format: String) -> Result<()> {
    let post = service
        .get_blog_post_by_slug(&slug)
        .await
        .ok_or_else(|| anyhow!("No blog post with slug '{}'", slug))?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&post)?);
        }
        "html" => {
            println!("{}", post.content);
        }
        _ => {
            print_post_detail(&post);
        }
    }

    Ok(())
}

/// List the posts of one category
pub async fn by_category(service: &BlogService, slug: String, format: String) -> Result<()> {
    let posts = service.get_blog_posts_by_category(&slug).await;

    let heading = match service.get_category_by_slug(&slug).await {
        Some(category) => category.name,
        None if posts.is_empty() => return Err(anyhow!("Unknown category '{}'", slug)),
        None => slug,
    };

    print_posts(&heading, &posts, &format)
}

/// List posts related to the given post
pub async fn related(
    service: &BlogService,
    post_id: PostId,
    limit: Option<usize>,
    format: String,
) -> Result<()> {
    let posts = service.get_related_posts(post_id, limit).await;
    print_posts(&format!("Related to post {}", post_id), &posts, &format)
}

fn print_posts(heading: &str, posts: &[BlogPost], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(posts)?);
        }
        _ => {
            print_posts_text(heading, posts);
        }
    }

    Ok(())
}

fn print_posts_text(heading: &str, posts: &[BlogPost]) {
    println!("{}", format!("=== {} ===", heading).bold());
    println!();

    if posts.is_empty() {
        println!("{}", "No posts found".yellow());
        return;
    }

    for post in posts {
        let marker = if post.is_featured() {
            "★".yellow()
        } else {
            " ".normal()
        };
        println!(
            "{} {} {}",
            marker,
            format!("[{}]", post.id).dimmed(),
            post.title.bold()
        );
        println!(
            "    {} · {} · {} · {} min",
            post.slug.cyan(),
            post.category,
            post.date,
            post.reading_time
        );
    }

    println!();
    println!("{}", format!("Total posts: {}", posts.len()).green());
}

fn print_post_detail(post: &BlogPost) {
    println!("{}", post.title.bold());
    println!(
        "{} {} · {} · {} min",
        "By".dimmed(),
        post.author,
        post.date,
        post.reading_time
    );
    if let Some(bio) = &post.author_bio {
        println!("{}", bio.dimmed());
    }
    println!("{}: {}", "Category".bold(), post.category.cyan());
    if !post.tags.is_empty() {
        println!("{}: {}", "Tags".bold(), post.tags.join(", "));
    }
    println!();
    println!("{}", post.excerpt.italic());
    println!();
    println!("{}", post.content);
}
