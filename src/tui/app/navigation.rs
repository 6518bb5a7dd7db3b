//! Navigation handlers and cursor management.
//!
//! Every navigation message moves the cursor, keeps it visible, and counts
//! as a scroll event: it takes a fresh debounce ticket and arms a timer that
//! reports back with `AppMsg::ScrollSettled`.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::browse::DebounceTicket;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let count = self.card_count();
        let page_size = self.product_list.visible_height().max(1);
        match msg {
            AppMsg::CursorUp => self.list_state.move_up(1),
            AppMsg::CursorDown => self.list_state.move_down(1, count),
            AppMsg::PageUp => self.list_state.move_up(page_size),
            AppMsg::PageDown => self.list_state.move_down(page_size, count),
            AppMsg::Home => self.list_state.reset(),
            AppMsg::End => self.list_state.move_down(count, count),
            _ => {
                // Unreachable: caller filters to navigation messages.
                return None;
            }
        }
        self.adjust_scroll_to_cursor();
        self.on_scroll()
    }

    /// Records a scroll event and arms its debounce timer.
    ///
    /// Nothing is armed before the catalogue has loaded.
    fn on_scroll(&mut self) -> Option<Cmd> {
        self.session.as_ref()?;
        let ticket = self.trigger.on_scroll();
        Some(self.arm_scroll_timer(ticket))
    }

    /// Creates a command that reports `ticket` once the debounce delay has
    /// passed.
    pub(super) fn arm_scroll_timer(&self, ticket: DebounceTicket) -> Cmd {
        let delay = self.trigger.delay();
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            Some(Box::new(AppMsg::ScrollSettled(ticket)) as Box<dyn Any + Send>)
        })
    }
}
