//! Construction-time configuration for the pagination state and control.
//!
//! A [`Config`] replaces process-wide defaults: every control gets its own
//! default page size and labels, passed in when it is built.
//!
//! ```rust
//! use bubbletea_pagination::Config;
//!
//! let config = Config::new()
//!     .with_default_page_size(25)
//!     .with_show_total_rows(false);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.default_page_size, 25);
//! ```

use crate::error::{Result, ValidationError};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The first page. Pages are 1-indexed.
pub const FIRST_PAGE: usize = 1;

/// Text shown next to the control's fields and totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label in front of the page-size field.
    pub page_size: String,
    /// Label in front of the total page count.
    pub total_pages: String,
    /// Label in front of the total row count.
    pub total_rows: String,
    /// Previous-page button.
    pub prev: String,
    /// Next-page button.
    pub next: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            page_size: "Size".to_string(),
            total_pages: "TotalPages".to_string(),
            total_rows: "TotalRows".to_string(),
            prev: "‹".to_string(),
            next: "›".to_string(),
        }
    }
}

/// Configuration passed to [`PaginationState`](crate::PaginationState) and
/// the pagination control at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page size restored by `reset`. Must be at least 1.
    pub default_page_size: usize,
    /// Labels for the rendered control.
    pub labels: Labels,
    /// Whether the control renders the total page count.
    pub show_total_pages: bool,
    /// Whether the control renders the total row count.
    pub show_total_rows: bool,
    /// Minimum display width of the page and page-size fields.
    pub field_width: usize,
    /// Maximum number of characters a field accepts.
    pub field_char_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            labels: Labels::default(),
            show_total_pages: true,
            show_total_rows: true,
            field_width: 3,
            field_char_limit: 9,
        }
    }
}

impl Config {
    /// Creates a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default page size (builder pattern).
    ///
    /// The value is checked by [`Config::validate`], not here, so that a
    /// zero coming from user configuration is reported instead of clamped.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Replaces the labels (builder pattern).
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Shows or hides the total page count (builder pattern).
    pub fn with_show_total_pages(mut self, show: bool) -> Self {
        self.show_total_pages = show;
        self
    }

    /// Shows or hides the total row count (builder pattern).
    pub fn with_show_total_rows(mut self, show: bool) -> Self {
        self.show_total_rows = show;
        self
    }

    /// Sets the minimum field width (builder pattern).
    pub fn with_field_width(mut self, width: usize) -> Self {
        self.field_width = width;
        self
    }

    /// Sets the field character limit (builder pattern). Zero means unlimited.
    pub fn with_field_char_limit(mut self, limit: usize) -> Self {
        self.field_char_limit = limit;
        self
    }

    /// Checks the configuration for values the state machine cannot hold.
    ///
    /// ```rust
    /// use bubbletea_pagination::{Config, Error, ValidationError};
    ///
    /// let err = Config::new().with_default_page_size(0).validate().unwrap_err();
    /// assert_eq!(err, Error::Validation(ValidationError::PageSizeTooSmall { size: 0 }));
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size < 1 {
            return Err(ValidationError::PageSizeTooSmall {
                size: self.default_page_size as i64,
            }
            .into());
        }
        Ok(())
    }
}
