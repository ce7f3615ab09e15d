//! Shared fixtures for unit tests.

use std::fs;
use std::path::Path;

/// Write a file into `dir` (post or otherwise; callers pick the extension).
pub fn write_post(dir: &Path, filename: &str, contents: &str) {
    fs::write(dir.join(filename), contents).unwrap();
}

/// A minimal well-formed post with a front-matter block.
pub fn front_matter_post(title: &str, date: &str, body: &str) -> String {
    format!("---\ntitle: {title}\ndate: \"{date}\"\n---\n\n{body}\n")
}
