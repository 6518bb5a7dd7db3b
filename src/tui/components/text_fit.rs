//! Column fitting helpers for fixed-width terminal rows.
//!
//! Widths are measured in terminal columns, not Unicode scalar counts, so
//! wide glyphs such as CJK product names and the rupee sign line up.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Truncates `text` to `max_width` columns, ending with `...` when cut.
///
/// Widths of three columns or fewer fall back to dots only.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(ELLIPSIS.len());
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Truncates or pads `text` on the right so it fills exactly `width`
/// columns.
pub(crate) fn fit_left(text: &str, width: usize) -> String {
    let mut fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    fitted.push_str(&" ".repeat(padding));
    fitted
}

/// Truncates or pads `text` on the left so it fills exactly `width`
/// columns.
pub(crate) fn fit_right(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let padding = width.saturating_sub(fitted.width());
    format!("{}{fitted}", " ".repeat(padding))
}
