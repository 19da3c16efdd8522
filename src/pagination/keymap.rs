//! Key bindings for the pagination control.

use crate::key::{self, KeyMap as KeyMapTrait};

/// Key bindings for different actions within the pagination control.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pagination::pagination::PaginationKeyMap;
/// use bubbletea_pagination::key;
///
/// let keymap = PaginationKeyMap {
///     prev_page: key::new_binding(vec![
///         key::with_keys_str(&["pgup", "["]),
///         key::with_help("[", "prev page"),
///     ]),
///     next_page: key::new_binding(vec![
///         key::with_keys_str(&["pgdown", "]"]),
///         key::with_help("]", "next page"),
///     ]),
///     ..PaginationKeyMap::default()
/// };
/// assert_eq!(keymap.next_page.keys().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PaginationKeyMap {
    /// Go to the previous page, whatever has focus.
    pub prev_page: key::Binding,
    /// Go to the next page, whatever has focus.
    pub next_page: key::Binding,
    /// Move focus to the next button or field.
    pub next_focus: key::Binding,
    /// Move focus to the previous button or field.
    pub prev_focus: key::Binding,
    /// Press the focused button or submit the focused field.
    pub submit: key::Binding,
    /// Press the focused button. Inside a field the key is typed instead.
    pub press: key::Binding,
    /// Discard the edit in the focused field.
    pub cancel: key::Binding,
}

impl Default for PaginationKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "alt+left"]),
                key::with_help("pgup", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "alt+right"]),
                key::with_help("pgdn", "next page"),
            ]),
            next_focus: key::new_binding(vec![
                key::with_keys_str(&["tab"]),
                key::with_help("tab", "next field"),
            ]),
            prev_focus: key::new_binding(vec![
                key::with_keys_str(&["shift+tab"]),
                key::with_help("shift+tab", "prev field"),
            ]),
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "apply"),
            ]),
            press: key::new_binding(vec![
                key::with_keys_str(&["space"]),
                key::with_help("space", "press"),
            ]),
            cancel: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "discard edit"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginationKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page, &self.next_focus, &self.submit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.next_focus, &self.prev_focus],
            vec![&self.submit, &self.press, &self.cancel],
        ]
    }
}
