//! # Postpress
//!
//! A minimal static blog builder. Your filesystem is the data source: a flat
//! directory of markdown posts, each optionally carrying a YAML front-matter
//! block, becomes one concatenated HTML fragment plus a JSON index that a
//! surrounding static site can consume.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Parse   content/posts/*.md  →  Post records   (front matter + markdown → data)
//! 2. Build   records             →  generated/      (posts.html + posts.json)
//! ```
//!
//! The parser handles one document at a time and is deliberately infallible:
//! missing front matter, unparsable dates, and null metadata fields all
//! degrade to documented defaults rather than failing the document. Only
//! infrastructure problems (an unreadable content directory, an unwritable
//! output location) abort a build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Splits the leading `---` block from a document and decodes it as YAML |
//! | [`markdown`] | Markdown-to-HTML conversion via a reusable, explicitly-reset engine |
//! | [`parse`] | One document's text → one normalized [`types::Post`] record |
//! | [`render`] | Maud fragments: one `<article>` per post, newest first |
//! | [`build`] | Discovery, date ordering, and emission of both output artifacts |
//! | [`output`] | CLI output formatting for build and check runs |
//! | [`types`] | The [`types::Post`] record and its JSON-facing [`types::IndexEntry`] |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Fragments are generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system. Malformed markup is a build error, template
//! variables are Rust expressions, and all interpolation is auto-escaped.
//! Only the already-rendered markdown body is inserted pre-escaped.
//!
//! ## Defaults Over Failures
//!
//! A blog with one badly-dated post should still build. Every per-document
//! malformation has a defined fallback (filename stem for the title, the Unix
//! epoch for the sort key, empty tags and summary), so a run either processes
//! every discovered post or aborts on an infrastructure error, never
//! something in between.
//!
//! ## Newest First, Stable
//!
//! Posts are ordered by their parsed date, descending. The sort is stable
//! over the lexical filename order of discovery, so undated posts (which all
//! share the epoch sentinel) keep a deterministic relative order.

pub mod build;
pub mod frontmatter;
pub mod markdown;
pub mod output;
pub mod parse;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
