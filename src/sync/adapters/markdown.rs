//! CommonMark renderer adapter.

use crate::sync::ports::MarkdownRenderer;
use pulldown_cmark::{Parser, html};

/// Renders markdown descriptions to HTML with `pulldown-cmark`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkRenderer;

impl CommonMarkRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MarkdownRenderer for CommonMarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut rendered = String::new();
        html::push_html(&mut rendered, parser);
        rendered
    }
}
