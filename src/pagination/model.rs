//! Core model and key handling for the pagination control.

use super::keymap::PaginationKeyMap;
use super::styles::Styles;
use crate::config::{Config, Labels};
use crate::error::Result;
use crate::field;
use crate::state::PaginationState;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

/// Sent (through the command returned by [`Model::update`]) after the user
/// changed the page or page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedMsg {
    /// The new page, starting at 1.
    pub page: usize,
    /// The new page size.
    pub page_size: usize,
}

impl From<ChangedMsg> for Msg {
    fn from(msg: ChangedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// The part of the control that receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The previous-page button.
    Prev,
    /// The page field.
    #[default]
    Page,
    /// The next-page button.
    Next,
    /// The page-size field.
    PageSize,
}

impl Focus {
    /// The next stop in the focus ring, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Focus::Prev => Focus::Page,
            Focus::Page => Focus::Next,
            Focus::Next => Focus::PageSize,
            Focus::PageSize => Focus::Prev,
        }
    }

    /// The previous stop in the focus ring, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Focus::Prev => Focus::PageSize,
            Focus::Page => Focus::Prev,
            Focus::Next => Focus::Page,
            Focus::PageSize => Focus::Next,
        }
    }
}

/// The pagination control.
///
/// Owns a [`PaginationState`] and renders it with buttons and editable
/// fields. The state is only reachable through `&` so the fields can never
/// show stale numbers; use the forwarding methods to change it.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::pagination::Model;
/// use bubbletea_pagination::Config;
///
/// let mut pager = Model::with_config(Config::new().with_default_page_size(20)).unwrap();
/// pager.set_total_rows(95);
/// assert_eq!(pager.page_size(), 20);
/// assert_eq!(pager.total_pages(), 5);
/// assert_eq!(pager.page_input(), "1");
/// assert_eq!(pager.page_size_input(), "20");
/// ```
pub struct Model {
    /// Key bindings.
    pub keymap: PaginationKeyMap,
    /// Styles.
    pub styles: Styles,
    /// Labels for the rendered control.
    pub labels: Labels,
    /// Whether the total page count is rendered.
    pub show_total_pages: bool,
    /// Whether the total row count is rendered.
    pub show_total_rows: bool,

    pub(super) state: PaginationState,
    pub(super) page_field: field::Model,
    pub(super) size_field: field::Model,
    pub(super) focus: Focus,
    pub(super) focused: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("state", &self.state)
            .field("page_input", &self.page_field.value())
            .field("page_size_input", &self.size_field.value())
            .field("focus", &self.focus)
            .field("focused", &self.focused)
            .finish()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::build(&Config::default(), PaginationState::default())
    }
}

impl Model {
    /// Creates a control with default settings: page 1, 10 rows per page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a control from a configuration.
    ///
    /// Fails when the configured default page size is zero.
    pub fn with_config(config: Config) -> Result<Self> {
        let state = PaginationState::with_config(&config)?;
        Ok(Self::build(&config, state))
    }

    fn build(config: &Config, state: PaginationState) -> Self {
        let mut page_field = field::new();
        page_field.width = config.field_width;
        page_field.char_limit = config.field_char_limit;
        let mut size_field = page_field.clone();

        page_field.set_value(&state.page().to_string());
        size_field.set_value(&state.page_size().to_string());

        Self {
            keymap: PaginationKeyMap::default(),
            styles: Styles::default(),
            labels: config.labels.clone(),
            show_total_pages: config.show_total_pages,
            show_total_rows: config.show_total_rows,
            state,
            page_field,
            size_field,
            focus: Focus::default(),
            focused: false,
        }
    }

    /// Registers the change callback (builder pattern).
    pub fn with_on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.state.set_on_change(f);
        self
    }

    /// Registers the change callback, called with `(page, page_size)`.
    pub fn set_on_change<F>(&mut self, f: F)
    where
        F: FnMut(usize, usize) + Send + 'static,
    {
        self.state.set_on_change(f);
    }

    /// Removes the change callback.
    pub fn clear_on_change(&mut self) {
        self.state.clear_on_change();
    }

    /// Read access to the underlying state.
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// The current page, starting at 1.
    pub fn page(&self) -> usize {
        self.state.page()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    /// Total pages for the current row count and page size.
    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    /// Total rows.
    pub fn total_rows(&self) -> usize {
        self.state.total_rows()
    }

    /// Loads a new row count, resetting page and page size. Notifies.
    pub fn set_total_rows(&mut self, total: usize) {
        self.state.set_total_rows(total);
        self.sync_fields();
    }

    /// Sets and applies the default page size.
    pub fn set_default_page_size(&mut self, size: usize) -> Result<()> {
        self.state.set_default_page_size(size)?;
        self.sync_fields();
        Ok(())
    }

    /// Returns to page 1 and the default page size.
    pub fn reset(&mut self) {
        self.state.reset();
        self.sync_fields();
    }

    /// Text currently in the page field.
    pub fn page_input(&self) -> String {
        self.page_field.value()
    }

    /// Text currently in the page-size field.
    pub fn page_size_input(&self) -> String {
        self.size_field.value()
    }

    /// Which part of the control has focus.
    pub fn focus_target(&self) -> Focus {
        self.focus
    }

    /// Moves focus to `target`, discarding any unsubmitted field edit.
    pub fn set_focus_target(&mut self, target: Focus) {
        self.sync_fields();
        self.focus = target;
        self.apply_field_focus();
    }

    /// Validation failure shown inline, if the focused field holds one.
    pub fn error(&self) -> Option<&crate::Error> {
        match self.focus {
            Focus::Page => self.page_field.err.as_ref(),
            Focus::PageSize => self.size_field.err.as_ref(),
            Focus::Prev | Focus::Next => None,
        }
    }

    /// Gives the control key input.
    pub fn focus(&mut self) {
        self.focused = true;
        self.apply_field_focus();
    }

    /// Takes key input away, discarding any unsubmitted field edit.
    pub fn blur(&mut self) {
        self.focused = false;
        self.sync_fields();
        self.apply_field_focus();
    }

    /// Whether the control receives key input.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Handles a message.
    ///
    /// Returns a command resolving to [`ChangedMsg`] when the page or page
    /// size changed. Messages are ignored while the control is blurred.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process; only key messages are handled
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pagination::pagination::Model;
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut pager = Model::new();
    /// pager.set_total_rows(95);
    ///
    /// let pgdown = || -> Msg {
    ///     Box::new(KeyMsg { key: KeyCode::PageDown, modifiers: KeyModifiers::NONE })
    /// };
    ///
    /// // blurred controls ignore input
    /// assert!(pager.update(pgdown()).is_none());
    /// assert_eq!(pager.page(), 1);
    ///
    /// pager.focus();
    /// assert!(pager.update(pgdown()).is_some());
    /// assert_eq!(pager.page(), 2);
    /// assert_eq!(pager.page_input(), "2");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focused {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    fn handle_key(&mut self, msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.next_focus.matches(msg) {
            self.set_focus_target(self.focus.next());
            return None;
        }
        if self.keymap.prev_focus.matches(msg) {
            self.set_focus_target(self.focus.prev());
            return None;
        }
        if self.keymap.prev_page.matches(msg) {
            let moved = self.state.previous();
            return self.changed(moved);
        }
        if self.keymap.next_page.matches(msg) {
            let moved = self.state.next();
            return self.changed(moved);
        }

        match self.focus {
            Focus::Prev | Focus::Next => {
                if self.keymap.submit.matches(msg) || self.keymap.press.matches(msg) {
                    let moved = if self.focus == Focus::Prev {
                        self.state.previous()
                    } else {
                        self.state.next()
                    };
                    return self.changed(moved);
                }
                None
            }
            Focus::Page | Focus::PageSize => {
                if self.keymap.submit.matches(msg) {
                    return self.submit_field();
                }
                if self.keymap.cancel.matches(msg) {
                    self.sync_fields();
                    return None;
                }
                if self.focused_field_mut().handle_key(msg) {
                    self.validate_focused_field();
                }
                None
            }
        }
    }

    fn submit_field(&mut self) -> Option<Cmd> {
        let result = match self.focus {
            Focus::Page => {
                let input = self.page_field.value();
                self.state.jump_to_page_str(&input)
            }
            Focus::PageSize => {
                let input = self.size_field.value();
                self.state.set_page_size_str(&input)
            }
            Focus::Prev | Focus::Next => return None,
        };

        match result {
            Ok(()) => self.changed(true),
            Err(err) => {
                self.focused_field_mut().err = Some(err);
                None
            }
        }
    }

    fn validate_focused_field(&mut self) {
        let input = self.focused_field_mut().value();
        let outcome = match self.focus {
            Focus::Page => self.state.parse_page(&input).err(),
            Focus::PageSize => self.state.parse_page_size(&input).err(),
            Focus::Prev | Focus::Next => None,
        };
        self.focused_field_mut().err = outcome;
    }

    fn changed(&mut self, changed: bool) -> Option<Cmd> {
        if !changed {
            return None;
        }
        self.sync_fields();
        let msg = ChangedMsg {
            page: self.state.page(),
            page_size: self.state.page_size(),
        };
        let cmd: Cmd = Box::pin(async move { Some(Box::new(msg) as Msg) });
        Some(cmd)
    }

    fn focused_field_mut(&mut self) -> &mut field::Model {
        match self.focus {
            Focus::PageSize => &mut self.size_field,
            _ => &mut self.page_field,
        }
    }

    /// Rewrites both fields from the state and clears validation errors.
    pub(super) fn sync_fields(&mut self) {
        self.page_field.set_value(&self.state.page().to_string());
        self.page_field.err = None;
        self.size_field.set_value(&self.state.page_size().to_string());
        self.size_field.err = None;
    }

    fn apply_field_focus(&mut self) {
        let page = self.focused && self.focus == Focus::Page;
        let size = self.focused && self.focus == Focus::PageSize;
        if page {
            self.page_field.focus();
        } else {
            self.page_field.blur();
        }
        if size {
            self.size_field.focus();
        } else {
            self.size_field.blur();
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::new();
        model.focus();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
