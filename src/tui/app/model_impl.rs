//! `Model` trait implementation for the catalogue TUI application.
//!
//! This module contains the `bubbletea_rs::Model` implementation for
//! `CatalogApp` along with frame normalisation to terminal dimensions.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::CatalogApp;
use crate::tui::components::{
    ProductDetailComponent, ProductDetailViewContext, ProductListViewContext,
};
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

const ANSI_RESET: &str = "\x1b[0m";

impl Model for CatalogApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(crate::tui::get_app_options());

        // Loading starts when `AppMsg::Initialized` is handled so the first
        // frame renders before the fetch begins.
        (model, Some(Self::immediate_init_cmd()))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            return map_key_to_message(key_msg).and_then(|mapped| self.handle_message(&mapped));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            return self.handle_message(&AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_controls_bar());
        output.push('\n');

        if let Some(failure) = &self.failure {
            output.push_str(&format!("  {}\n", failure.message()));
        } else if self.session.is_none() {
            output.push_str("  Loading catalogue...\n");
        } else {
            output.push_str(&self.render_body());
        }

        output.push_str(&self.render_status_bar());
        self.normalise_viewport(&output)
    }
}

impl CatalogApp {
    fn render_body(&self) -> String {
        let terminal_width = (self.width as usize).max(1);
        let list_ctx = ProductListViewContext {
            cards: self.cards(),
            cursor_position: self.list_state.cursor_position,
            scroll_offset: self.list_state.scroll_offset,
            visible_height: self.calculate_list_height(),
            max_width: terminal_width,
            no_color: self.options.no_color,
        };
        let mut body = self.product_list.view(&list_ctx);

        let detail_ctx = ProductDetailViewContext {
            card: self.selected_card(),
            max_width: terminal_width,
            max_height: self.calculate_detail_height(),
            no_color: self.options.no_color,
        };
        if detail_ctx.max_height > 0 {
            body.push_str(&ProductDetailComponent::view(&detail_ctx));
        }
        body
    }

    /// Clamps the frame to the terminal so stale cells from a previous,
    /// larger frame are overwritten.
    ///
    /// Rows stop one column short of the terminal width to avoid autowrap.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let width = (self.width.max(1) as usize).saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut rows: Vec<String> = output
            .lines()
            .take(height)
            .map(|line| fit_row(line, width))
            .collect();
        let blank = " ".repeat(width);
        rows.resize(height, blank);

        let mut frame = rows.join("\n");
        frame.push('\n');
        frame
    }
}

/// Truncates or pads `line` to exactly `width` visible columns.
///
/// ANSI escape sequences are copied through without counting towards the
/// width, and a reset is appended when styling is still open at the cut.
fn fit_row(line: &str, width: usize) -> String {
    let mut row = String::with_capacity(line.len());
    let mut visible = 0usize;
    let mut escape = EscapeTracker::default();

    for ch in line.chars() {
        if escape.consume(ch, &mut row) {
            continue;
        }
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible.saturating_add(char_width) > width {
            break;
        }
        row.push(ch);
        visible = visible.saturating_add(char_width);
    }

    row.push_str(&" ".repeat(width.saturating_sub(visible)));
    if escape.style_open {
        row.push_str(ANSI_RESET);
    }
    row
}

/// Tracks CSI escape sequences while a row is copied.
#[derive(Debug, Default)]
struct EscapeTracker {
    sequence: Option<String>,
    style_open: bool,
}

impl EscapeTracker {
    /// Copies `ch` into `row` when it belongs to an escape sequence.
    ///
    /// Returns `false` for visible characters.
    fn consume(&mut self, ch: char, row: &mut String) -> bool {
        if let Some(sequence) = self.sequence.as_mut() {
            sequence.push(ch);
            row.push(ch);
            if ch.is_ascii_alphabetic() {
                self.style_open = sequence.as_str() != ANSI_RESET && ch == 'm';
                self.sequence = None;
            }
            return true;
        }
        if ch == '\x1b' {
            self.sequence = Some(String::from(ch));
            row.push(ch);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::fit_row;

    #[rstest]
    #[case::pads_short_rows("abc", 5, "abc  ")]
    #[case::truncates_long_rows("abcdef", 4, "abcd")]
    #[case::keeps_currency_symbol("₹ 10", 3, "₹ 1")]
    fn fits_plain_rows(#[case] line: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_row(line, width), expected);
    }

    #[test]
    fn escape_sequences_do_not_count_towards_width() {
        let line = "\x1b[32min stock\x1b[0m";

        assert_eq!(fit_row(line, 10), "\x1b[32min stock\x1b[0m  ");
    }

    #[test]
    fn closes_styling_cut_mid_sequence() {
        let line = "\x1b[31mout of stock\x1b[0m";

        assert_eq!(fit_row(line, 3), "\x1b[31mout\x1b[0m");
    }
}
