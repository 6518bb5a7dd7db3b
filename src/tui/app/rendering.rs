//! Rendering logic for the catalogue TUI application.
//!
//! These are pure query methods that read state without modification.

use super::CatalogApp;

/// Terminal width at or below which the short status hints are shown.
const NARROW_WIDTH: u16 = 80;

impl CatalogApp {
    /// Renders the header bar with the category options once loaded.
    pub(super) fn render_header(&self) -> String {
        let title = "Storefront - Product Catalogue";
        let loading_indicator = if self.loading { " [Loading...]" } else { "" };
        let categories = self.session.as_ref().map_or_else(String::new, |session| {
            format!("  [All | {}]", session.categories().as_slice().join(" | "))
        });
        format!("{title}{loading_indicator}{categories}\n")
    }

    /// Renders the controls bar with the current selections and paging
    /// progress.
    pub(super) fn render_controls_bar(&self) -> String {
        let Some(session) = &self.session else {
            return "Name: -  Price: -  Category: All\n".to_owned();
        };
        let state = session.view_state();
        format!(
            "Name: {}  Price: {}  Category: {} ({}/{})\n",
            state.name_sort.label(),
            state.price_sort.label(),
            state.category_label(),
            session.rendered(),
            session.view().len()
        )
    }

    /// Renders the status bar with the last cart request or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(status) = &self.cart_status {
            return format!("{status}\n");
        }
        format!("{}\n", self.status_hints())
    }

    const fn status_hints(&self) -> &'static str {
        if self.width <= NARROW_WIDTH {
            "q:quit  ?:help  j/k:move  n/p:sort  c:category  a:cart"
        } else {
            "j/k:move  n:name sort  p:price sort  c:category  Esc:all  a:add to cart  ?:help  q:quit"
        }
    }

    /// Renders the help overlay, listing the loaded categories.
    pub(super) fn render_help_overlay(&self) -> String {
        let categories = self.session.as_ref().map_or_else(
            || "(not loaded)".to_owned(),
            |session| session.categories().as_slice().join(", "),
        );

        format!(
            r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first product
  End, G     Go to last product

Controls:
  n          Cycle name sort (-/asc/desc)
  p          Cycle price sort (-/asc/desc)
  c          Cycle category
  Esc        Show all categories

Other:
  a, Enter   Add selected product to cart
  ?          Toggle this help
  q          Quit

Categories: {categories}

Press any key to close this help.
"
        )
    }
}
