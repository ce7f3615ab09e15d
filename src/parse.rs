//! Document parsing: one post's raw text → one [`Post`] record.
//!
//! The parser is infallible by contract. A post with no front matter, a
//! malformed metadata block, a bad date, or null optional fields still
//! produces a record; each field falls back to its documented default. One
//! malformed document must never abort the whole build, and nothing here is
//! logged per document. Infrastructure failures (reading the file in the
//! first place) are the builder's problem.

use crate::frontmatter;
use crate::markdown::MarkdownEngine;
use crate::types::Post;
use chrono::NaiveDate;

/// Display date used when front matter carries no `date` at all.
const DEFAULT_DATE: &str = "1970-01-01";

/// Parse one document into a [`Post`].
///
/// `slug` is the filename stem; it doubles as the title fallback. The
/// markdown `engine` is owned by the caller and reused across documents.
///
/// Field defaults:
/// - `title`: the slug
/// - `date`: `"1970-01-01"`; non-string scalars are coerced to string form
/// - `date_key`: `date` parsed as an ISO calendar date, Unix epoch on any
///   parse failure (ordering silently degrades rather than erroring)
/// - `tags`: empty for absent or null
/// - `summary`: empty for absent or null
pub fn parse_post(slug: &str, text: &str, engine: &mut MarkdownEngine) -> Post {
    let (meta, body) = frontmatter::parse(text);
    let body_html = engine.convert(body);

    let title = meta.str("title").unwrap_or(slug).to_string();
    let date = meta
        .scalar_string("date")
        .unwrap_or_else(|| DEFAULT_DATE.to_string());
    let date_key = date.parse::<NaiveDate>().unwrap_or_default();
    let tags = meta.string_seq("tags");
    let summary = meta.str("summary").unwrap_or_default().to_string();

    Post {
        title,
        date,
        date_key,
        tags,
        summary,
        slug: slug.to_string(),
        body_html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
    }

    fn parse(slug: &str, text: &str) -> Post {
        let mut engine = MarkdownEngine::new();
        parse_post(slug, text, &mut engine)
    }

    #[test]
    fn no_front_matter_gets_all_defaults() {
        let post = parse("my-post", "Just a **body**.\n");

        assert_eq!(post.title, "my-post");
        assert_eq!(post.date, "1970-01-01");
        assert_eq!(post.date_key, epoch());
        assert!(post.tags.is_empty());
        assert!(post.summary.is_empty());
        assert_eq!(post.slug, "my-post");
        assert!(post.body_html.contains("<strong>body</strong>"));
    }

    #[test]
    fn front_matter_fields_populate_record() {
        let text = "---\n\
                    title: First\n\
                    date: \"2024-01-01\"\n\
                    tags: [x, y]\n\
                    summary: A summary\n\
                    ---\n\n\
                    Body text.\n";
        let post = parse("a", text);

        assert_eq!(post.title, "First");
        assert_eq!(post.date, "2024-01-01");
        assert_eq!(post.date_key, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(post.tags, vec!["x", "y"]);
        assert_eq!(post.summary, "A summary");
        assert!(post.body_html.contains("Body text."));
    }

    #[test]
    fn unquoted_date_survives_yaml_decoding() {
        let post = parse("a", "---\ndate: 2024-06-01\n---\nBody");
        assert_eq!(post.date, "2024-06-01");
        assert_eq!(post.date_key, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn invalid_date_falls_back_to_epoch() {
        let post = parse("a", "---\ndate: next tuesday\n---\nBody");
        assert_eq!(post.date, "next tuesday");
        assert_eq!(post.date_key, epoch());
    }

    #[test]
    fn numeric_date_is_coerced_to_string() {
        // A decoder may hand back a native scalar; display keeps its string
        // form, ordering degrades to the sentinel.
        let post = parse("a", "---\ndate: 20240101\n---\nBody");
        assert_eq!(post.date, "20240101");
        assert_eq!(post.date_key, epoch());
    }

    #[test]
    fn non_scalar_date_is_treated_as_absent() {
        let post = parse("a", "---\ndate: [2024, 1, 1]\n---\nBody");
        assert_eq!(post.date, "1970-01-01");
        assert_eq!(post.date_key, epoch());
    }

    #[test]
    fn null_tags_and_summary_default_to_empty() {
        let post = parse("a", "---\ntitle: T\ntags: null\nsummary: null\n---\nBody");
        assert!(post.tags.is_empty());
        assert!(post.summary.is_empty());
    }

    #[test]
    fn malformed_front_matter_still_yields_record() {
        let post = parse("broken", "---\ntitle: [unclosed\n---\nBody here.\n");

        assert_eq!(post.title, "broken");
        assert_eq!(post.date_key, epoch());
        assert!(post.body_html.contains("Body here."));
    }

    #[test]
    fn dangling_delimiter_is_rendered_as_body() {
        let post = parse("a", "---\ntitle: never closed\n");
        assert_eq!(post.title, "a");
        assert!(post.body_html.contains("title: never closed"));
    }

    #[test]
    fn horizontal_rule_after_block_stays_in_body() {
        let post = parse("a", "---\ntitle: T\n---\n\n---\n\nAfter.\n");
        assert_eq!(post.title, "T");
        assert!(post.body_html.contains("<hr />"));
        assert!(post.body_html.contains("After."));
    }
}
