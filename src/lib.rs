#![warn(missing_docs)]

//! # bubbletea-pagination
//!
//! A pagination control for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The crate is split in two layers:
//!
//! - [`PaginationState`]: a plain state machine tracking the current page,
//!   page size, total rows and total pages. It validates every transition
//!   and calls a change callback with `(page, page_size)` after each
//!   successful one.
//! - [`pagination::Model`]: the terminal control. It renders previous/next
//!   buttons, editable page and page-size fields and the totals, and drives
//!   the state from key messages in the usual `update()` / `view()` style.
//!
//! ## Using the state directly
//!
//! ```rust
//! use bubbletea_pagination::PaginationState;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut state = PaginationState::new().with_on_change(move |page, size| {
//!     sink.lock().unwrap().push((page, size));
//! });
//! state.set_total_rows(95);
//! state.next();
//! assert!(state.jump_to_page(0).is_err());
//!
//! assert_eq!(*seen.lock().unwrap(), vec![(1, 10), (2, 10)]);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_pagination::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     pager: Pagination,
//!     rows: Vec<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let rows: Vec<String> = (1..=95).map(|i| format!("Row {}", i)).collect();
//!         let mut pager = Pagination::new();
//!         pager.set_total_rows(rows.len());
//!         pager.focus();
//!         (Self { pager, rows }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(changed) = msg.downcast_ref::<PaginationChangedMsg>() {
//!             // reload rows for changed.page / changed.page_size here
//!             let _ = changed;
//!             return None;
//!         }
//!         self.pager.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         let (start, end) = self.pager.state().slice_bounds(self.rows.len());
//!         format!("{}\n\n{}", self.rows[start..end].join("\n"), self.pager.view())
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! Fallible operations return [`Result`]. Text that is not a whole number
//! gives [`Error::Parse`]; an out-of-range page or page size gives
//! [`Error::Validation`]. A failed operation never changes the state.
//!
//! ## Logging
//!
//! Transitions are logged through the [`log`](https://docs.rs/log) facade at
//! `debug` level and ignored navigation at `trace` level. The crate does not
//! install a logger.

pub mod config;
pub mod error;
pub mod field;
pub mod help;
pub mod key;
pub mod pagination;
pub mod state;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command for
///   initialization.
/// - `blur()` unsets the focused state.
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_pagination::prelude::*;
///
/// fn toggle<T: Component>(c: &mut T) {
///     if c.focused() {
///         c.blur();
///     } else {
///         let _ = c.focus();
///     }
/// }
///
/// let mut pager = Pagination::new();
/// toggle(&mut pager);
/// assert!(Component::focused(&pager));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use config::{Config, Labels, DEFAULT_PAGE_SIZE, FIRST_PAGE};
pub use error::{Error, Result, ValidationError};
pub use help::Model as HelpModel;
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyPress,
};
pub use pagination::{
    ChangedMsg as PaginationChangedMsg, Focus as PaginationFocus, Model as Pagination,
    PaginationKeyMap, Styles as PaginationStyles,
};
pub use state::{OnChange, PaginationState};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pagination::prelude::*;
///
/// let mut pager = Pagination::new();
/// pager.set_total_rows(10);
/// assert_eq!(pager.total_pages(), 1);
/// ```
pub mod prelude {
    pub use crate::config::{Config, Labels};
    pub use crate::error::{Error, ValidationError};
    pub use crate::help::Model as HelpModel;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::pagination::{
        ChangedMsg as PaginationChangedMsg, Focus as PaginationFocus, Model as Pagination,
        PaginationKeyMap, Styles as PaginationStyles,
    };
    pub use crate::state::PaginationState;
    pub use crate::Component;
}
