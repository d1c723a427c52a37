//! Presentational post-processing of article HTML
//!
//! Article bodies are hand-written HTML. Before display they get dividers
//! between sections, styled callout boxes for labelled hint paragraphs and a
//! blockquote for the closing summary. Input is trusted and assumed to be
//! well formed; malformed markup may simply not match.
//!
//! The transform is not idempotent. Feeding its output back in inserts the
//! section dividers a second time, so callers must keep raw and enhanced
//! content apart (see [`crate::service::BlogService`]).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

/// Divider placed before every section heading except the first
pub const DIVIDER: &str = r#"<hr class="blog-divider" />"#;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<h2[\s>]").expect("constant pattern should parse"));

static CALLOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<p>\s*<strong>(Wichtig|Hinweis|Tipp|Achtung):</strong>(.*?)</p>")
        .expect("constant pattern should parse")
});

static NESTED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(?:p|h[1-6])[\s>/]").expect("constant pattern should parse"));

static LIST_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(?:ul|ol)>").expect("constant pattern should parse"));

static SUMMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<p>\s*<strong>(Zusammenfassung|Fazit):</strong>(.*?)</p>")
        .expect("constant pattern should parse")
});

/// Kind of callout box, selected by the bold label opening a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutKind {
    Important,
    Note,
    Tip,
    Warning,
}

impl CalloutKind {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Wichtig" => Some(Self::Important),
            "Hinweis" => Some(Self::Note),
            "Tipp" => Some(Self::Tip),
            "Achtung" => Some(Self::Warning),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Important => "Wichtig",
            Self::Note => "Hinweis",
            Self::Tip => "Tipp",
            Self::Warning => "Achtung",
        }
    }

    /// CSS modifier used on the callout container
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Important => "important",
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Warning => "warning",
        }
    }
}

/// Apply all display enhancements to raw article HTML
///
/// Steps run in a fixed order, each on the output of the previous one:
/// trim, section dividers, callout boxes, spacing after lists, summary
/// blockquotes.
pub fn enhance_content(html: &str) -> String {
    let html = html.trim();

    let headings = HEADING.find_iter(html).count();
    debug!("Enhancing content with {} h2 headings", headings);

    let (html, dividers) = insert_dividers(html);
    debug!("Inserted {} section dividers", dividers);

    let (html, callouts) = wrap_callouts(&html);
    let html = space_lists(&html);
    let (html, summaries) = wrap_summaries(&html);

    debug!(
        "Enhanced content: {} callouts, {} summaries, {} bytes",
        callouts,
        summaries,
        html.len()
    );

    html
}

fn insert_dividers(html: &str) -> (String, usize) {
    let mut result = String::with_capacity(html.len());
    let mut copied_up_to = 0;
    let mut inserted = 0;

    // the page must not open with a divider
    for heading in HEADING.find_iter(html).skip(1) {
        result.push_str(&html[copied_up_to..heading.start()]);
        result.push_str(DIVIDER);
        result.push('\n');
        copied_up_to = heading.start();
        inserted += 1;
    }
    result.push_str(&html[copied_up_to..]);

    (result, inserted)
}

fn wrap_callouts(html: &str) -> (String, usize) {
    let mut wrapped = 0;

    let result = CALLOUT.replace_all(html, |caps: &Captures| {
        let body = caps[2].trim();
        let Some(kind) = CalloutKind::from_label(&caps[1]) else {
            return caps[0].to_string();
        };
        if NESTED_BLOCK.is_match(body) {
            return caps[0].to_string();
        }

        wrapped += 1;
        format!(
            "<div class=\"blog-callout blog-callout--{}\">\n\
             <p class=\"blog-callout__label\"><strong>{}:</strong></p>\n\
             <p class=\"blog-callout__body\">{}</p>\n\
             </div>",
            kind.css_modifier(),
            kind.label(),
            body
        )
    });

    (result.into_owned(), wrapped)
}

fn space_lists(html: &str) -> String {
    LIST_END
        .replace_all(html, |caps: &Captures| format!("{}\n\n", &caps[0]))
        .into_owned()
}

fn wrap_summaries(html: &str) -> (String, usize) {
    let mut wrapped = 0;

    let result = SUMMARY.replace_all(html, |caps: &Captures| {
        wrapped += 1;
        format!(
            "<blockquote class=\"blog-summary\">\n\
             <p class=\"blog-summary__title\"><strong>{}</strong></p>\n\
             <p>{}</p>\n\
             </blockquote>",
            &caps[1],
            caps[2].trim()
        )
    });

    (result.into_owned(), wrapped)
}
