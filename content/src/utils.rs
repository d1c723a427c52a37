//! Slug and text helpers for blog content

use crate::error::ContentError;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static PARAGRAPH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("constant selector should parse"));

/// Average reading speed used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Normalize a free-text category label into its URL slug
///
/// The label is lower-cased, German umlauts and sharp s are transliterated
/// (`ä` → `ae`, `ö` → `oe`, `ü` → `ue`, `ß` → `ss`) and each run of
/// whitespace becomes a single hyphen.
///
/// # Arguments
///
/// * `label` - The category label as written by an author
///
/// # Returns
///
/// The slug used in category URLs
///
/// # Example
///
/// ```rust
/// use blog_content::category_slug;
///
/// assert_eq!(category_slug("Wärmepumpe"), "waermepumpe");
/// assert_eq!(category_slug("Förderung & Finanzierung"), "foerderung-&-finanzierung");
/// ```
pub fn category_slug(label: &str) -> String {
    transliterate(&label.to_lowercase())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn transliterate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ä' => result.push_str("ae"),
            'ö' => result.push_str("oe"),
            'ü' => result.push_str("ue"),
            'ß' => result.push_str("ss"),
            _ => result.push(c),
        }
    }
    result
}

/// Truncate a string to a maximum number of characters, adding ellipsis if truncated
///
/// # Arguments
///
/// * `text` - The text to truncate
/// * `max_length` - Maximum number of characters of the result
///
/// # Returns
///
/// The truncated string with ellipsis if it was truncated
pub fn truncate_with_ellipsis(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else if max_length <= 3 {
        text.chars().take(max_length).collect()
    } else {
        format!(
            "{}...",
            text.chars().take(max_length - 3).collect::<String>()
        )
    }
}

/// Extract a plain-text summary from HTML content
///
/// Uses the text of the first non-empty `<p>` element, including the text
/// around inline elements, falling back to the whole document when there are
/// no paragraphs.
///
/// # Arguments
///
/// * `html` - The article HTML
/// * `max_length` - Maximum number of characters of the summary
///
/// # Returns
///
/// A whitespace-normalized summary string
pub fn extract_summary(html: &str, max_length: usize) -> String {
    let fragment = Html::parse_fragment(html);
    let first_paragraph = fragment
        .select(&PARAGRAPH)
        .map(|paragraph| normalize_whitespace(&paragraph.text().collect::<String>()))
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| strip_html_tags(html));

    truncate_with_ellipsis(&first_paragraph, max_length)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip HTML tags from content
///
/// Basic tag removal for plain text extraction. Does not decode entities.
pub fn strip_html_tags(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                // keep words on either side of a tag apart
                result.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    normalize_whitespace(&result)
}

/// Estimate reading time in whole minutes, never less than one
///
/// # Arguments
///
/// * `html` - The article HTML
///
/// # Returns
///
/// Minutes at [`WORDS_PER_MINUTE`], rounded up
pub fn estimate_reading_time(html: &str) -> u32 {
    let words = strip_html_tags(html).split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Validate that a string is a valid slug format
///
/// Valid slugs contain only lowercase letters, numbers, and hyphens.
///
/// # Arguments
///
/// * `slug` - The slug to validate
///
/// # Returns
///
/// `Ok(())` if valid, `Err(ContentError::ValidationError)` otherwise
pub fn validate_slug_format(slug: &str) -> Result<(), ContentError> {
    if slug.is_empty() {
        return Err(ContentError::ValidationError("Slug cannot be empty".to_string()));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ContentError::ValidationError(format!(
            "Slug '{slug}' can only contain lowercase letters, numbers, and hyphens"
        )));
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(ContentError::ValidationError(format!(
            "Slug '{slug}' cannot start or end with hyphen"
        )));
    }

    if slug.contains("--") {
        return Err(ContentError::ValidationError(format!(
            "Slug '{slug}' cannot contain consecutive hyphens"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Wärmepumpe"), "waermepumpe");
        assert_eq!(category_slug("Förderung"), "foerderung");
        assert_eq!(category_slug("Heizung & Klima"), "heizung-&-klima");
        assert_eq!(category_slug("Solarthermie"), "solarthermie");
        assert_eq!(category_slug("  Große   Übersicht "), "grosse-uebersicht");
        assert_eq!(category_slug("ÄÖÜ"), "aeoeue");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Short", 10), "Short");
        assert_eq!(
            truncate_with_ellipsis("This is a long string", 10),
            "This is..."
        );
        assert_eq!(truncate_with_ellipsis("Test", 4), "Test");
        assert_eq!(truncate_with_ellipsis("Test", 3), "Tes");
        // counts characters, not bytes
        assert_eq!(truncate_with_ellipsis("Wärme", 5), "Wärme");
    }

    #[test]
    fn test_extract_summary() {
        let html = "<h2>Titel</h2>\n<p>Erster Absatz.</p>\n<p>Zweiter Absatz.</p>";
        assert_eq!(extract_summary(html, 40), "Erster Absatz.");

        let long = "<p>This is a very long first paragraph that should be truncated.</p>";
        assert_eq!(extract_summary(long, 20), "This is a very lo...");

        assert_eq!(extract_summary("Nur Text", 20), "Nur Text");
    }

    #[test]
    fn test_extract_summary_skips_empty_paragraphs() {
        let html = r#"<p class="lead"></p><p class="lead">Mit <em>Klasse</em></p>"#;
        assert_eq!(extract_summary(html, 40), "Mit Klasse");
    }

    #[test]
    fn test_extract_summary_keeps_text_around_inline_elements() {
        let html = r#"<p>Einleitung mit Bild <picture><img src="a.png"></picture> und Text.</p>"#;
        assert_eq!(extract_summary(html, 160), "Einleitung mit Bild und Text.");

        let html = "<pre>kein Absatz</pre><p>Erster <a href=\"/x\">Link</a> hier.</p>";
        assert_eq!(extract_summary(html, 160), "Erster Link hier.");
    }

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("<p>Hello <b>World</b></p>"), "Hello World");
        assert_eq!(strip_html_tags("No tags here"), "No tags here");
        assert_eq!(strip_html_tags("<li>eins</li><li>zwei</li>"), "eins zwei");
    }

    #[test]
    fn test_estimate_reading_time() {
        assert_eq!(estimate_reading_time(""), 1);
        assert_eq!(estimate_reading_time("<p>kurz</p>"), 1);

        let words = vec!["wort"; 401].join(" ");
        assert_eq!(estimate_reading_time(&format!("<p>{words}</p>")), 3);
    }

    #[test]
    fn test_validate_slug_format() {
        assert!(validate_slug_format("valid-slug-123").is_ok());
        assert!(validate_slug_format("").is_err());
        assert!(validate_slug_format("-starts-with-hyphen").is_err());
        assert!(validate_slug_format("ends-with-hyphen-").is_err());
        assert!(validate_slug_format("has--double--hyphen").is_err());
        assert!(validate_slug_format("has_underscore").is_err());
        assert!(validate_slug_format("wärmepumpe").is_err());
    }
}
