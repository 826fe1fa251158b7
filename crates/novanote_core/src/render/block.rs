//! Line classification and list grouping.
//!
//! # Responsibility
//! - Map one source line to a block kind with its prefix stripped.
//! - Group adjacent list items into one container via [`ListState`].
//!
//! # Invariants
//! - Prefix checks run `### `, `## `, `# `, `- ` in that order.
//! - A list container is only emitted on flush, never while accumulating.

use crate::render::inline::render_inline;

/// Block kind assigned to one non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `h1`-`h3`; the payload is the level.
    Heading(u8),
    ListItem,
    Paragraph,
}

/// Classified line with its markup prefix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}

impl Block<'_> {
    /// Renders this block as one HTML element.
    pub fn to_html(&self) -> String {
        let inner = render_inline(self.text);
        match self.kind {
            BlockKind::Heading(level) => format!("<h{level}>{inner}</h{level}>"),
            BlockKind::ListItem => format!("<li>{inner}</li>"),
            BlockKind::Paragraph => format!("<p>{inner}</p>"),
        }
    }
}

const LINE_PREFIXES: &[(&str, BlockKind)] = &[
    ("### ", BlockKind::Heading(3)),
    ("## ", BlockKind::Heading(2)),
    ("# ", BlockKind::Heading(1)),
    ("- ", BlockKind::ListItem),
];

/// Classifies one line; first matching prefix wins, otherwise paragraph.
pub fn classify_line(line: &str) -> Block<'_> {
    for (prefix, kind) in LINE_PREFIXES {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block { kind: *kind, text };
        }
    }
    Block {
        kind: BlockKind::Paragraph,
        text: line,
    }
}

/// Two-state automaton collecting adjacent list items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Idle,
    /// Rendered `<li>` fragments waiting for a flush.
    Accumulating(Vec<String>),
}

impl ListState {
    /// Appends one rendered list item, entering `Accumulating` if needed.
    pub fn push(&mut self, item: String) {
        match self {
            Self::Idle => *self = Self::Accumulating(vec![item]),
            Self::Accumulating(items) => items.push(item),
        }
    }

    /// Returns the pending `<ul>` container, if any, and resets to `Idle`.
    pub fn flush(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Accumulating(items) => Some(format!("<ul>{}</ul>", items.concat())),
        }
    }

    pub fn is_accumulating(&self) -> bool {
        matches!(self, Self::Accumulating(_))
    }
}
