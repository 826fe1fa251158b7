//! Markup to HTML fragment renderer.
//!
//! # Responsibility
//! - Convert the supported markup subset (headings, flat lists, paragraphs,
//!   code/strong/emphasis spans) into an HTML fragment.
//!
//! # Invariants
//! - `render` is total: malformed markup degrades to paragraph text.
//! - Output never contains live markup from user text; all text is escaped
//!   before inline spans are applied.
//! - Blank lines and non-list lines close an open list container.
//!
//! Output is a fragment, not a document. Callers embedding it in a privileged
//! context should sanitize it further.

pub mod block;
pub mod inline;

pub use block::{classify_line, Block, BlockKind, ListState};
pub use inline::{escape_html, render_inline};

/// Renders `markup` into an HTML fragment, one block per line.
pub fn render(markup: &str) -> String {
    let mut chunks: Vec<String> = Vec::new();
    let mut list = ListState::Idle;

    for line in split_lines(markup) {
        if is_blank(line) {
            chunks.extend(list.flush());
            continue;
        }

        let block = classify_line(line);
        if block.kind == BlockKind::ListItem {
            list.push(block.to_html());
            continue;
        }

        chunks.extend(list.flush());
        chunks.push(block.to_html());
    }
    chunks.extend(list.flush());

    chunks.join("\n")
}

/// Whitespace-only test with the same character set as a JavaScript
/// `trim()`: U+FEFF counts as blank, U+0085 does not.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|ch| ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}'))
}

/// Splits on `\n`, dropping one `\r` before each terminator.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::{is_blank, render, split_lines};

    #[test]
    fn split_lines_handles_crlf_and_trailing_newline() {
        let lines: Vec<&str> = split_lines("a\r\nb\n").collect();
        assert_eq!(lines, vec!["a", "b", ""]);
    }

    #[test]
    fn blank_detection_counts_bom_but_not_next_line() {
        assert!(is_blank(" \t\u{feff}\u{a0}\u{2028}"));
        assert!(!is_blank("\u{85}"));
        assert_eq!(
            render("- a\n\u{feff}\n- b"),
            "<ul><li>a</li></ul>\n<ul><li>b</li></ul>"
        );
        assert_eq!(render("\u{85}"), "<p>\u{85}</p>");
    }

    #[test]
    fn headings_render_in_order() {
        assert_eq!(
            render("# A\n## B\n### C"),
            "<h1>A</h1>\n<h2>B</h2>\n<h3>C</h3>"
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        assert_eq!(
            render("- a\n- b\n\n- c"),
            "<ul><li>a</li><li>b</li></ul>\n<ul><li>c</li></ul>"
        );
    }

    #[test]
    fn paragraph_closes_open_list() {
        assert_eq!(
            render("- a\ntext\n- b"),
            "<ul><li>a</li></ul>\n<p>text</p>\n<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn blank_only_document_renders_empty() {
        assert_eq!(render(""), "");
        assert_eq!(render("\n   \n\t\r\n"), "");
    }

    #[test]
    fn escaping_runs_before_emphasis() {
        assert_eq!(
            render("<b>*x*</b>"),
            "<p>&lt;b&gt;<em>x</em>&lt;/b&gt;</p>"
        );
    }
}
