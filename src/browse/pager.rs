//! Incremental paging over a computed view.

/// Default number of products rendered after a load or control change.
pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 12;

/// Default number of products appended per scroll trigger.
pub const DEFAULT_SCROLL_PAGE_SIZE: usize = 4;

/// Page sizes for initial and scroll-triggered loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    /// Products rendered on the first page of a view.
    pub initial: usize,
    /// Products appended on each scroll trigger.
    pub scroll: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL_PAGE_SIZE,
            scroll: DEFAULT_SCROLL_PAGE_SIZE,
        }
    }
}

impl PageSizes {
    /// Returns the page length for `request`.
    #[must_use]
    pub const fn for_request(self, request: PageRequest) -> usize {
        match request {
            PageRequest::Initial => self.initial,
            PageRequest::Scroll => self.scroll,
        }
    }
}

/// Which kind of page is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// First page after a load or control change.
    Initial,
    /// Additional page after the scroll trigger fires.
    Scroll,
}

/// Tracks how much of the current view has been rendered.
///
/// The cursor never exceeds the length of the view it was advanced over.
/// Advancing past the end yields empty slices rather than panicking.
///
/// # Examples
///
/// ```
/// use storefront::browse::{PageCursor, PageRequest, PageSizes};
///
/// let view = [1, 2, 3, 4, 5];
/// let mut cursor = PageCursor::new(PageSizes { initial: 3, scroll: 1 });
///
/// assert_eq!(cursor.next_slice(&view, PageRequest::Initial), &[1, 2, 3]);
/// assert_eq!(cursor.next_slice(&view, PageRequest::Scroll), &[4]);
/// assert_eq!(cursor.rendered(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    sizes: PageSizes,
    rendered: usize,
}

impl PageCursor {
    /// Creates a cursor at the start of a view.
    #[must_use]
    pub const fn new(sizes: PageSizes) -> Self {
        Self { sizes, rendered: 0 }
    }

    /// Moves the cursor back to the start of the view.
    pub const fn reset(&mut self) {
        self.rendered = 0;
    }

    /// Returns the number of view items already rendered.
    #[must_use]
    pub const fn rendered(&self) -> usize {
        self.rendered
    }

    /// Returns true when every item of a view of `view_len` is rendered.
    #[must_use]
    pub const fn is_exhausted(&self, view_len: usize) -> bool {
        self.rendered >= view_len
    }

    /// Returns the next page of `view` and advances past it.
    ///
    /// The slice starts at the rendered count and is clipped to the end of
    /// the view. The cursor advances by the number of items returned.
    pub fn next_slice<'v, T>(&mut self, view: &'v [T], request: PageRequest) -> &'v [T] {
        let start = self.rendered.min(view.len());
        let end = start
            .saturating_add(self.sizes.for_request(request))
            .min(view.len());
        let page = view.get(start..end).unwrap_or(&[]);
        self.rendered = end;
        page
    }
}
