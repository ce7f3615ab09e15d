//! Post discovery, ordering, and artifact emission.
//!
//! The builder is the fallible half of the pipeline. It discovers `*.md`
//! files directly under the source directory (no recursion), parses each via
//! [`crate::parse`], orders the records newest first, and writes two fixed
//! artifacts into the output directory:
//!
//! ```text
//! generated/
//! ├── posts.html    # concatenated article fragments, newest first
//! └── posts.json    # display metadata index, same order
//! ```
//!
//! Only infrastructure failures surface: an unlistable source directory or an
//! unwritable output location aborts the run. Content problems never do; the
//! parser absorbs those into field defaults. There is no partial-output
//! cleanup, so a failed write can leave a stale artifact from a previous run.

use crate::markdown::MarkdownEngine;
use crate::parse;
use crate::render;
use crate::types::{IndexEntry, Post};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed filename of the HTML fragment artifact.
pub const POSTS_HTML: &str = "posts.html";
/// Fixed filename of the JSON index artifact.
pub const POSTS_JSON: &str = "posts.json";

/// Outcome of a full build, for reporting.
#[derive(Debug)]
pub struct BuildResult {
    /// All parsed posts, newest first
    pub posts: Vec<Post>,
    pub html_path: PathBuf,
    pub index_path: PathBuf,
}

/// Discover and parse every post under `source`, newest first.
///
/// Files are read in lexical filename order; the date sort is stable, so
/// posts sharing a `date_key` (including all undated posts) keep that order.
pub fn collect_posts(source: &Path) -> Result<Vec<Post>, BuildError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(source)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();

    md_files.sort();

    let mut engine = MarkdownEngine::new();
    let mut posts = Vec::with_capacity(md_files.len());
    for path in &md_files {
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let text = fs::read_to_string(path)?;
        posts.push(parse::parse_post(&slug, &text, &mut engine));
    }

    posts.sort_by(|a, b| b.date_key.cmp(&a.date_key));
    Ok(posts)
}

/// Run the whole pipeline: parse everything under `source`, write both
/// artifacts under `output` (created if absent, parents included).
pub fn build(source: &Path, output: &Path) -> Result<BuildResult, BuildError> {
    let posts = collect_posts(source)?;

    fs::create_dir_all(output)?;

    let html_path = output.join(POSTS_HTML);
    fs::write(&html_path, render::render_posts(&posts))?;

    let index: Vec<IndexEntry> = posts.iter().map(Post::index_entry).collect();
    let index_path = output.join(POSTS_JSON);
    fs::write(&index_path, serde_json::to_string_pretty(&index)?)?;

    Ok(BuildResult {
        posts,
        html_path,
        index_path,
    })
}
