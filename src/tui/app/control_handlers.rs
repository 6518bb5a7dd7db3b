//! Sort and category control handlers.
//!
//! Each control change recomputes the view, clears the rendered cards, and
//! renders the initial page from the top of the list.

use bubbletea_rs::Cmd;

use super::CatalogApp;
use crate::browse::ControlChange;
use crate::tui::messages::AppMsg;

impl CatalogApp {
    /// Dispatches control messages to their handlers.
    pub(super) fn handle_control_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let change = self.control_change(msg)?;
        let session = self.session.as_mut()?;
        session.apply_change(change);
        self.list_state.reset();
        self.record_page_rendered();
        None
    }

    /// Resolves a control message against the current selections.
    ///
    /// Returns `None` before the catalogue loads, and for a category clear
    /// when no category is selected.
    fn control_change(&self, msg: &AppMsg) -> Option<ControlChange> {
        let session = self.session.as_ref()?;
        let state = session.view_state();
        match msg {
            AppMsg::CycleNameSort => Some(ControlChange::NameSort(state.name_sort.cycle())),
            AppMsg::CyclePriceSort => Some(ControlChange::PriceSort(state.price_sort.cycle())),
            AppMsg::CycleCategory => {
                let next = session
                    .categories()
                    .next_after(state.selected_category())
                    .map(str::to_owned);
                Some(ControlChange::Category(next))
            }
            AppMsg::ClearCategory => state
                .selected_category()
                .is_some()
                .then_some(ControlChange::Category(None)),
            _ => {
                // Unreachable: caller filters to control messages.
                None
            }
        }
    }
}
