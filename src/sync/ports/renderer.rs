//! Markdown rendering port.

/// Renders markdown text to HTML.
///
/// The exact rendering ruleset is an external capability; the transformer
/// only requires a pure text transform.
pub trait MarkdownRenderer: Send + Sync {
    /// Renders the given markdown source to HTML.
    fn render(&self, markdown: &str) -> String;
}
