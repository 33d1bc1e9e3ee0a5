//! Snippet rendering for CLI diagnostics.
//!
//! The stable error format is the single-line `error (line L, col C): …`
//! Display on each stage error; this module adds the annotated source
//! excerpt shown under it.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// Renders `message` against `source` with a caret at `offset`.
pub fn render_snippet(source: &str, path: Option<&str>, offset: u32, message: &str) -> String {
    let range = adjust_range(offset as usize, source.len());

    let mut snippet = Snippet::source(source).line_start(1).annotation(
        AnnotationKind::Primary.span(range).label(message),
    );
    if let Some(path) = path {
        snippet = snippet.path(path);
    }

    let report: Vec<Group> = vec![Level::ERROR.primary_title(message).element(snippet)];
    Renderer::plain().render(&report).to_string()
}

/// Widens a zero-width position into a one-byte span, clamped to the source.
fn adjust_range(offset: usize, limit: usize) -> std::ops::Range<usize> {
    let start = offset.min(limit);
    start..(start + 1).min(limit).max(start)
}
