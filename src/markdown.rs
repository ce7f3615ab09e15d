//! Markdown-to-HTML conversion.
//!
//! One [`MarkdownEngine`] is created by the builder and reused for every
//! document in a run. Reuse keeps the configured options and output buffer in
//! one place, and the engine resets itself after every conversion so nothing
//! carries over between documents. If the pipeline ever grows parallelism,
//! each worker gets its own engine; the instance is not shared.
//!
//! Enabled markdown features:
//!
//! - Fenced code blocks (CommonMark default). The info string becomes a
//!   `language-*` class on the `<code>` element, which is the hook a
//!   client-side highlighter needs.
//! - Tables ([`Options::ENABLE_TABLES`]).

use pulldown_cmark::{Options, Parser, html};

/// Reusable markdown converter with a fixed option set.
pub struct MarkdownEngine {
    options: Options,
    buffer: String,
}

impl MarkdownEngine {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        MarkdownEngine {
            options,
            buffer: String::new(),
        }
    }

    /// Convert one document body to HTML.
    ///
    /// The internal buffer is reset after every conversion, so consecutive
    /// calls are fully independent.
    pub fn convert(&mut self, body: &str) -> String {
        let parser = Parser::new_ext(body, self.options);
        html::push_html(&mut self.buffer, parser);
        let rendered = self.buffer.clone();
        self.reset();
        rendered
    }

    /// Clear all per-document state.
    fn reset(&mut self) {
        self.buffer.clear();
    }
}

impl Default for MarkdownEngine {
    fn default() -> Self {
        Self::new()
    }
}
