//! The pagination state machine.
//!
//! [`PaginationState`] tracks the current page, the page size, the total row
//! count and the derived total page count. It holds no rendering state; the
//! [`pagination`](crate::pagination) control drives it from key messages, and
//! applications can drive it directly.
//!
//! Pages are 1-indexed. After every transition the following hold:
//!
//! - `page_size >= 1`
//! - `total_pages == ceil(total_rows / page_size)` (zero when there are no rows)
//! - `1 <= page <= max(total_pages, 1)`, except that while there are no rows
//!   [`jump_to_page`](PaginationState::jump_to_page) accepts any positive page
//!   (the row count may not be known yet)
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_pagination::PaginationState;
//!
//! let mut state = PaginationState::new();
//! state.set_total_rows(95);
//! assert_eq!(state.total_pages(), 10);
//! assert_eq!(state.page(), 1);
//!
//! assert!(state.next());
//! assert_eq!(state.page(), 2);
//!
//! state.jump_to_page(10).unwrap();
//! assert!(!state.next()); // already on the last page
//! assert!(state.jump_to_page(11).is_err());
//! ```

use std::fmt;

use crate::config::{Config, DEFAULT_PAGE_SIZE, FIRST_PAGE};
use crate::error::{parse_integer, Result, ValidationError};

/// Callback invoked with `(page, page_size)` after a successful change.
///
/// `Send` is required because `bubbletea-rs` models must be `Send`.
pub type OnChange = Box<dyn FnMut(usize, usize) + Send>;

/// Current page, page size and row totals, with change notification.
pub struct PaginationState {
    page: usize,
    page_size: usize,
    total_rows: usize,
    total_pages: usize,
    default_page_size: usize,
    on_change: Option<OnChange>,
}

impl fmt::Debug for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationState")
            .field("page", &self.page)
            .field("page_size", &self.page_size)
            .field("total_rows", &self.total_rows)
            .field("total_pages", &self.total_pages)
            .field("default_page_size", &self.default_page_size)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Default for PaginationState {
    /// Page 1, 10 rows per page, no rows.
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total_rows: 0,
            total_pages: 0,
            default_page_size: DEFAULT_PAGE_SIZE,
            on_change: None,
        }
    }
}

impl PaginationState {
    /// Creates a state with default settings.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let state = PaginationState::new();
    /// assert_eq!(state.page(), 1);
    /// assert_eq!(state.page_size(), 10);
    /// assert_eq!(state.total_rows(), 0);
    /// assert_eq!(state.total_pages(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from a configuration.
    ///
    /// Fails when the configured default page size is zero.
    ///
    /// ```rust
    /// use bubbletea_pagination::{Config, PaginationState};
    ///
    /// let state = PaginationState::with_config(&Config::new().with_default_page_size(20)).unwrap();
    /// assert_eq!(state.page_size(), 20);
    /// assert_eq!(state.default_page_size(), 20);
    ///
    /// assert!(PaginationState::with_config(&Config::new().with_default_page_size(0)).is_err());
    /// ```
    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut state = Self::default();
        state.default_page_size = config.default_page_size;
        state.reset();
        Ok(state)
    }

    /// Registers the change callback (builder pattern).
    pub fn with_on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.set_on_change(f);
        self
    }

    /// Registers the change callback, replacing any previous one.
    ///
    /// The callback receives `(page, page_size)` synchronously after each
    /// successful `set_total_rows`, `previous`, `next`, `jump_to_page` and
    /// `set_page_size`. It is not called for no-ops or rejected input.
    pub fn set_on_change<F>(&mut self, f: F)
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.on_change = Some(Box::new(f));
    }

    /// Removes the change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// The current page, starting at 1.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total number of rows being paginated.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// `ceil(total_rows / page_size)`, zero when there are no rows.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The page size restored by [`reset`](Self::reset).
    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Returns to the first page and the default page size.
    ///
    /// Does not notify; hosts call this before loading a new result set.
    pub fn reset(&mut self) {
        self.page = FIRST_PAGE;
        self.page_size = self.default_page_size;
        self.recompute_total_pages();
        log::trace!("pagination reset to page size {}", self.page_size);
    }

    /// Sets the default page size and applies it immediately.
    ///
    /// Does not notify.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(100);
    /// state.set_default_page_size(25).unwrap();
    /// assert_eq!(state.page_size(), 25);
    /// assert_eq!(state.total_pages(), 4);
    ///
    /// state.set_page_size(50).unwrap();
    /// state.reset();
    /// assert_eq!(state.page_size(), 25);
    /// ```
    pub fn set_default_page_size(&mut self, size: usize) -> Result<()> {
        if size < 1 {
            log::debug!("rejected default page size {}", size);
            return Err(ValidationError::PageSizeTooSmall { size: 0 }.into());
        }
        self.default_page_size = size;
        self.page_size = size;
        self.recompute_total_pages();
        self.page = self.page.min(self.last_page());
        log::debug!("default page size set to {}", size);
        Ok(())
    }

    /// Loads a new row count: resets, recomputes the page count and notifies.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(40);
    /// state.jump_to_page(3).unwrap();
    ///
    /// state.set_total_rows(95);
    /// assert_eq!(state.page(), 1);
    /// assert_eq!(state.total_pages(), 10);
    /// ```
    pub fn set_total_rows(&mut self, total: usize) {
        self.reset();
        self.total_rows = total;
        self.recompute_total_pages();
        log::debug!(
            "total rows set to {} ({} pages of {})",
            total,
            self.total_pages,
            self.page_size
        );
        self.notify();
    }

    /// Moves to the previous page and notifies.
    ///
    /// Returns false, without notifying, when already on page 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(30);
    /// state.jump_to_page(2).unwrap();
    ///
    /// assert!(state.previous());
    /// assert_eq!(state.page(), 1);
    /// assert!(!state.previous());
    /// assert_eq!(state.page(), 1);
    /// ```
    pub fn previous(&mut self) -> bool {
        if self.page <= FIRST_PAGE {
            log::trace!("previous ignored on first page");
            return false;
        }
        self.page -= 1;
        log::debug!("moved to page {}", self.page);
        self.notify();
        true
    }

    /// Moves to the next page and notifies.
    ///
    /// Returns false, without notifying, on the last page or when there are
    /// no rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// assert!(!state.next()); // no rows yet
    ///
    /// state.set_total_rows(15);
    /// assert!(state.next());
    /// assert_eq!(state.page(), 2);
    /// assert!(!state.next());
    /// ```
    pub fn next(&mut self) -> bool {
        if self.page >= self.total_pages {
            log::trace!("next ignored on last page {}", self.page);
            return false;
        }
        self.page += 1;
        log::debug!("moved to page {}", self.page);
        self.notify();
        true
    }

    /// Jumps to `target` and notifies, even when `target` is the current page.
    ///
    /// Fails without changing anything when `target` is 0 or, if there are
    /// any pages, larger than [`total_pages`](Self::total_pages).
    ///
    /// # Arguments
    ///
    /// * `target` - The page to show, starting at 1
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::{Error, PaginationState, ValidationError};
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(95);
    ///
    /// state.jump_to_page(4).unwrap();
    /// assert_eq!(state.page(), 4);
    ///
    /// let err = state.jump_to_page(11).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     Error::Validation(ValidationError::PageBeyondLast { page: 11, total_pages: 10 })
    /// );
    /// assert_eq!(state.page(), 4);
    /// ```
    pub fn jump_to_page(&mut self, target: usize) -> Result<()> {
        self.check_page(target)?;
        self.page = target;
        log::debug!("jumped to page {}", target);
        self.notify();
        Ok(())
    }

    /// Changes the page size, recomputes the page count, returns to page 1
    /// and notifies. Fails without changing anything when `size` is 0.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(95);
    /// state.jump_to_page(3).unwrap();
    ///
    /// state.set_page_size(5).unwrap();
    /// assert_eq!(state.page(), 1);
    /// assert_eq!(state.total_pages(), 19);
    /// ```
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        Self::check_page_size(size)?;
        self.page_size = size;
        self.recompute_total_pages();
        self.page = FIRST_PAGE;
        log::debug!("page size set to {} ({} pages)", size, self.total_pages);
        self.notify();
        Ok(())
    }

    /// Parses and validates page text without changing anything.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(30);
    /// assert_eq!(state.parse_page(" 2 ").unwrap(), 2);
    /// assert!(state.parse_page("two").unwrap_err().is_parse());
    /// assert!(state.parse_page("-1").unwrap_err().validation().is_some());
    /// assert!(state.parse_page("4").is_err());
    /// ```
    pub fn parse_page(&self, input: &str) -> Result<usize> {
        let value = parse_integer(input)?;
        if value < FIRST_PAGE as i64 {
            return Err(ValidationError::PageBelowFirst { page: value }.into());
        }
        let page = usize::try_from(value).map_err(|_| ValidationError::OutOfRange)?;
        self.check_page(page)?;
        Ok(page)
    }

    /// Parses and validates page-size text without changing anything.
    pub fn parse_page_size(&self, input: &str) -> Result<usize> {
        let value = parse_integer(input)?;
        if value < 1 {
            return Err(ValidationError::PageSizeTooSmall { size: value }.into());
        }
        let size = usize::try_from(value).map_err(|_| ValidationError::OutOfRange)?;
        Ok(size)
    }

    /// Parses `input` and jumps to that page.
    pub fn jump_to_page_str(&mut self, input: &str) -> Result<()> {
        let page = self.parse_page(input).inspect_err(|e| {
            log::debug!("rejected page input {:?}: {}", input, e);
        })?;
        self.jump_to_page(page)
    }

    /// Parses `input` and applies it as the page size.
    pub fn set_page_size_str(&mut self, input: &str) -> Result<()> {
        let size = self.parse_page_size(input).inspect_err(|e| {
            log::debug!("rejected page size input {:?}: {}", input, e);
        })?;
        self.set_page_size(size)
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == FIRST_PAGE
    }

    /// Returns true when there is no next page.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Zero-based index of the first row on the current page.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(95);
    /// state.jump_to_page(3).unwrap();
    /// assert_eq!(state.offset(), 20);
    /// ```
    pub fn offset(&self) -> usize {
        (self.page - FIRST_PAGE).saturating_mul(self.page_size)
    }

    /// Start (inclusive) and end (exclusive) indices of the current page
    /// within a slice of `len` rows. Both are clamped to `len`.
    ///
    /// ```rust
    /// use bubbletea_pagination::PaginationState;
    ///
    /// let rows: Vec<u32> = (1..=95).collect();
    /// let mut state = PaginationState::new();
    /// state.set_total_rows(rows.len());
    /// state.jump_to_page(10).unwrap();
    ///
    /// let (start, end) = state.slice_bounds(rows.len());
    /// assert_eq!(&rows[start..end], &[91, 92, 93, 94, 95]);
    /// ```
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = self.offset().min(len);
        let end = start.saturating_add(self.page_size).min(len);
        (start, end)
    }

    /// Number of rows on the current page within a slice of `len` rows.
    pub fn items_on_page(&self, len: usize) -> usize {
        let (start, end) = self.slice_bounds(len);
        end - start
    }

    fn last_page(&self) -> usize {
        self.total_pages.max(FIRST_PAGE)
    }

    fn recompute_total_pages(&mut self) {
        self.total_pages = self.total_rows.div_ceil(self.page_size);
    }

    fn check_page(&self, page: usize) -> std::result::Result<(), ValidationError> {
        if page < FIRST_PAGE {
            return Err(ValidationError::PageBelowFirst { page: 0 });
        }
        // With no rows any positive page is accepted.
        if self.total_pages > 0 && page > self.total_pages {
            return Err(ValidationError::PageBeyondLast {
                page: i64::try_from(page).unwrap_or(i64::MAX),
                total_pages: self.total_pages,
            });
        }
        Ok(())
    }

    fn check_page_size(size: usize) -> std::result::Result<(), ValidationError> {
        if size < 1 {
            return Err(ValidationError::PageSizeTooSmall { size: 0 });
        }
        Ok(())
    }

    fn notify(&mut self) {
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(self.page, self.page_size);
        }
    }
}
