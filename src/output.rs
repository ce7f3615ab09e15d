//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every post is its
//! title and date, with the source filename as indented context. Each concern
//! has a `format_*` function returning `Vec<String>` (pure, testable) and a
//! `print_*` wrapper that writes to stdout.
//!
//! ```text
//! Posts
//! 001 New Post (2024-06-01)
//!     Source: new-post.md
//!     Tags: rust, blog
//! 002 Old Post (2023-01-01)
//!     Source: old-post.md
//!
//! Wrote 2 posts to generated/posts.html
//! ```

use crate::build::BuildResult;
use crate::types::Post;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the post listing: header plus one entry per post, newest first.
pub fn format_post_list(posts: &[Post]) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    for (idx, post) in posts.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(idx + 1),
            post.title,
            post.date
        ));
        lines.push(format!("    Source: {}.md", post.slug));
        if !post.tags.is_empty() {
            lines.push(format!("    Tags: {}", post.tags.join(", ")));
        }
    }
    lines
}

/// Format the full build report: listing plus the completion line.
pub fn format_build_output(result: &BuildResult) -> Vec<String> {
    let mut lines = format_post_list(&result.posts);
    lines.push(String::new());
    lines.push(format!(
        "Wrote {} posts to {}",
        result.posts.len(),
        result.html_path.display()
    ));
    lines
}

pub fn print_build_output(result: &BuildResult) {
    for line in format_build_output(result) {
        println!("{}", line);
    }
}

pub fn print_check_output(posts: &[Post]) {
    for line in format_post_list(posts) {
        println!("{}", line);
    }
}
