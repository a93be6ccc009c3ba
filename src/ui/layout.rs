//! Scrollback layout
//!
//! Turns session lines into display rows of at most `width` columns. Pure
//! functions only, so the renderer stays a thin drawing pass.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::{Line, Reveal};

/// Prompt glyph in front of echoed commands and the input row
pub const PROMPT: &str = "❯ ";
/// Indent of output text
pub const OUTPUT_INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Echoed command; the text excludes the prompt glyph
    Input,
    Output,
}

/// One display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub text: String,
}

/// Lay out every line, wrapping to `width` columns
pub fn scrollback_rows(lines: &[Line], width: usize) -> Vec<Row> {
    let mut rows = Vec::new();
    for line in lines {
        match line {
            Line::Input(text) => {
                let avail = width.saturating_sub(PROMPT.width());
                rows.extend(wrap(text, avail).into_iter().map(|text| Row {
                    kind: RowKind::Input,
                    text,
                }));
            }
            Line::Output { text, reveal } => {
                let shown = match reveal {
                    Reveal::Visible => usize::MAX,
                    Reveal::Revealing { shown, .. } => *shown,
                };
                let avail = width.saturating_sub(OUTPUT_INDENT.len());
                for sub in text.split('\n').take(shown) {
                    rows.extend(wrap(sub, avail).into_iter().map(|chunk| Row {
                        kind: RowKind::Output,
                        text: format!("{}{}", OUTPUT_INDENT, chunk),
                    }));
                }
            }
        }
    }
    rows
}

/// Split `text` into pieces no wider than `width` columns.
///
/// Always returns at least one piece. A width of zero disables wrapping.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.width() <= width {
        return vec![text.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }
    pieces.push(current);
    pieces
}

/// Cut `text` to at most `width` columns
pub fn clip(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Largest useful scroll offset for `total` rows in a `height`-row viewport
pub fn max_scroll(total: usize, height: usize) -> usize {
    total.saturating_sub(height)
}

/// Rows visible in a `height`-row viewport, `scroll` rows up from the tail
pub fn window(rows: &[Row], height: usize, scroll: usize) -> &[Row] {
    let scroll = scroll.min(max_scroll(rows.len(), height));
    let end = rows.len() - scroll;
    let start = end.saturating_sub(height);
    &rows[start..end]
}
