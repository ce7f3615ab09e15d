//! HTML fragment rendering.
//!
//! Each post becomes one `<article class="post-card">` block: title heading,
//! date caption, summary paragraph (only when non-empty), then the rendered
//! body verbatim. The fragments are meant to be embedded in a surrounding
//! page, so there is no document shell here, no `<head>`, no styles.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time templating. Title,
//! date, and summary are auto-escaped; only `body_html`, which the markdown
//! engine already produced as markup, is inserted pre-escaped.

use crate::types::Post;
use maud::{Markup, PreEscaped, html};

/// Render one post as an article fragment.
pub fn render_post(post: &Post) -> Markup {
    html! {
        article.post-card {
            h3 { (post.title) }
            p.post-meta { (post.date) }
            @if !post.summary.is_empty() {
                p { (post.summary) }
            }
            (PreEscaped(&post.body_html))
        }
    }
}

/// Render all posts, in the order given, joined by a blank line.
///
/// The caller is responsible for ordering; [`crate::build`] passes posts
/// newest first.
pub fn render_posts(posts: &[Post]) -> String {
    posts
        .iter()
        .map(|p| render_post(p).into_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
