//! Pagination control for Bubble Tea applications.
//!
//! The control renders previous/next buttons, an editable page field, an
//! editable page-size field and the row/page totals, and drives a
//! [`PaginationState`](crate::PaginationState) from key messages:
//!
//! ```text
//!  ‹  [3  ]  ›  Size [10 ] TotalPages 10 TotalRows 95
//! ```
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pagination::pagination::{ChangedMsg, Model};
//!
//! let mut pager = Model::new();
//! pager.set_on_change(|page, page_size| {
//!     // re-run the query for rows (page - 1) * page_size ..
//!     let _ = (page, page_size);
//! });
//! pager.set_total_rows(95);
//! assert_eq!(pager.total_pages(), 10);
//! ```
//!
//! Forward messages from your own `update` to [`Model::update`]. Every change
//! made through the keyboard calls the callback and also returns a command
//! that resolves to a [`ChangedMsg`].
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `pgup` / `alt+←` | previous page |
//! | `pgdown` / `alt+→` | next page |
//! | `tab` / `shift+tab` | move focus between buttons and fields |
//! | `enter` | press the focused button or submit the focused field |
//! | `space` | press the focused button |
//! | `esc` | discard the edit in the focused field |

pub mod keymap;
pub mod model;
pub mod styles;
pub mod view;

#[cfg(test)]
mod tests;

pub use keymap::PaginationKeyMap;
pub use model::{ChangedMsg, Focus, Model};
pub use styles::Styles;
