//! Incremental browsing of a loaded catalogue.
//!
//! [`BrowseSession`] drives the sort, filter, page and render pipeline. The
//! supporting pieces are independent and usable on their own: [`PageCursor`]
//! slices a view into pages, [`Renderer`] turns products into cards, and
//! [`ScrollTrigger`] decides when scrolling should load more.

pub mod pager;
pub mod render;
pub mod scroll;
pub mod session;

pub use pager::{PageCursor, PageRequest, PageSizes};
pub use render::{CartAction, OutputSurface, ProductCard, Renderer, StockTone};
pub use scroll::{DebounceTicket, Debouncer, ScrollMetrics, ScrollTrigger};
pub use session::{BrowseSession, BrowseSettings, ControlChange};
