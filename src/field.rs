//! Single-line editable field used for the page and page-size inputs.
//!
//! The field accepts any printable text; whether the text is a valid page is
//! decided by the owner, which stores the outcome in [`Model::err`]. This keeps
//! the field ignorant of pagination rules and lets it show a non-number while
//! the user is still typing.
//!
//! ```rust
//! use bubbletea_pagination::field;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut f = field::new();
//! f.set_value("12");
//! f.focus();
//!
//! let changed = f.handle_key(&KeyMsg { key: KeyCode::Char('3'), modifiers: KeyModifiers::NONE });
//! assert!(changed);
//! assert_eq!(f.value(), "123");
//! ```

use crate::error::Error;
use crate::key::{new_binding, with_keys_str, Binding};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Editing keys for the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Delete from start of line to cursor.
    pub delete_before_cursor: Binding,
    /// Delete from cursor to end of line.
    pub delete_after_cursor: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
            character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
            line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
            line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
            delete_character_backward: new_binding(vec![with_keys_str(&[
                "backspace",
                "ctrl+h",
            ])]),
            delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
            delete_before_cursor: new_binding(vec![with_keys_str(&["ctrl+u"])]),
            delete_after_cursor: new_binding(vec![with_keys_str(&["ctrl+k"])]),
        }
    }
}

/// An editable single-line field.
#[derive(Debug, Clone)]
pub struct Model {
    /// The latest validation outcome set by the owner, if it failed.
    pub err: Option<Error>,
    /// Minimum display width; shorter values are padded with spaces.
    pub width: usize,
    /// Maximum number of characters the user can type. Zero means unlimited.
    pub char_limit: usize,
    /// Style of the text.
    pub text_style: Style,
    /// Style of the character under the cursor while focused.
    pub cursor_style: Style,
    /// Editing keys.
    pub key_map: KeyMap,

    value: Vec<char>,
    pos: usize,
    focus: bool,
}

/// Creates an empty, unfocused field.
pub fn new() -> Model {
    Model {
        err: None,
        width: 0,
        char_limit: 0,
        text_style: Style::new(),
        cursor_style: Style::new().reverse(true),
        key_map: KeyMap::default(),
        value: Vec::new(),
        pos: 0,
        focus: false,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Replaces the text and moves the cursor to the end.
    ///
    /// `char_limit` only restricts typing; text set here is kept whole.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// The current text.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Returns true when the owner marked the text invalid.
    pub fn is_invalid(&self) -> bool {
        self.err.is_some()
    }

    /// Whether the field receives key input.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the field key input and moves the cursor to the end.
    pub fn focus(&mut self) {
        self.focus = true;
        self.pos = self.value.len();
    }

    /// Takes key input away from the field.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Forwards a message to the field. Returns true if the text changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        match msg.downcast_ref::<KeyMsg>() {
            Some(key_msg) => self.handle_key(key_msg),
            None => false,
        }
    }

    /// Applies an editing key. Returns true if the text changed.
    ///
    /// Unfocused fields ignore all keys.
    pub fn handle_key(&mut self, msg: &KeyMsg) -> bool {
        if !self.focus {
            return false;
        }

        let km = &self.key_map;
        if km.character_forward.matches(msg) {
            self.set_cursor(self.pos + 1);
        } else if km.character_backward.matches(msg) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if km.line_start.matches(msg) {
            self.pos = 0;
        } else if km.line_end.matches(msg) {
            self.pos = self.value.len();
        } else if km.delete_character_backward.matches(msg) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
                return true;
            }
        } else if km.delete_character_forward.matches(msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
                return true;
            }
        } else if km.delete_before_cursor.matches(msg) {
            if self.pos > 0 {
                self.value.drain(..self.pos);
                self.pos = 0;
                return true;
            }
        } else if km.delete_after_cursor.matches(msg) {
            if self.pos < self.value.len() {
                self.value.truncate(self.pos);
                return true;
            }
        } else if let KeyCode::Char(c) = msg.key {
            let plain = !msg
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
            if plain && !c.is_control() {
                return self.insert(c);
            }
        }
        false
    }

    fn insert(&mut self, c: char) -> bool {
        if self.char_limit > 0 && self.value.len() >= self.char_limit {
            return false;
        }
        self.value.insert(self.pos, c);
        self.pos += 1;
        true
    }

    /// Renders the text, the cursor when focused, and padding up to `width`.
    pub fn view(&self) -> String {
        let text = self.value();
        let mut v = String::new();

        if self.focus {
            let before: String = self.value[..self.pos].iter().collect();
            let under = self.value.get(self.pos).copied().unwrap_or(' ');
            let after: String = self.value.get(self.pos + 1..).unwrap_or(&[]).iter().collect();
            v.push_str(&self.text_style.render(&before));
            v.push_str(&self.cursor_style.render(&under.to_string()));
            v.push_str(&self.text_style.render(&after));
        } else {
            v.push_str(&self.text_style.render(&text));
        }

        // The cursor cell past the end takes one column.
        let mut shown = UnicodeWidthStr::width(text.as_str());
        if self.focus && self.pos == self.value.len() {
            shown += 1;
        }
        if shown < self.width {
            v.push_str(&self.text_style.render(&" ".repeat(self.width - shown)));
        }
        v
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

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    fn press(f: &mut Model, key: KeyCode) -> bool {
        f.handle_key(&KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_str(f: &mut Model, s: &str) {
        for c in s.chars() {
            press(f, KeyCode::Char(c));
        }
    }

    fn focused_field(value: &str) -> Model {
        let mut f = new();
        f.set_value(value);
        f.focus();
        f
    }

    #[test]
    fn test_new_default_values() {
        let f = new();
        assert_eq!(f.value(), "");
        assert_eq!(f.position(), 0);
        assert!(!f.focused());
        assert!(!f.is_invalid());
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut f = new();
        f.set_value("5");
        assert!(!press(&mut f, KeyCode::Char('1')));
        assert!(!press(&mut f, KeyCode::Backspace));
        assert_eq!(f.value(), "5");
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut f = focused_field("");
        type_str(&mut f, "120");
        assert_eq!(f.value(), "120");
        assert!(press(&mut f, KeyCode::Backspace));
        assert_eq!(f.value(), "12");
        assert_eq!(f.position(), 2);
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut f = focused_field("13");
        press(&mut f, KeyCode::Left);
        assert_eq!(f.position(), 1);
        type_str(&mut f, "2");
        assert_eq!(f.value(), "123");

        press(&mut f, KeyCode::Home);
        assert_eq!(f.position(), 0);
        assert!(!press(&mut f, KeyCode::Backspace));
        assert!(press(&mut f, KeyCode::Delete));
        assert_eq!(f.value(), "23");

        press(&mut f, KeyCode::End);
        press(&mut f, KeyCode::Right);
        assert_eq!(f.position(), 2);
    }

    #[test]
    fn test_delete_before_and_after_cursor() {
        let mut f = focused_field("12345");
        f.set_cursor(2);
        let ctrl_k = KeyMsg {
            key: KeyCode::Char('k'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(f.handle_key(&ctrl_k));
        assert_eq!(f.value(), "12");

        let ctrl_u = KeyMsg {
            key: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(f.handle_key(&ctrl_u));
        assert_eq!(f.value(), "");
        assert_eq!(f.position(), 0);
    }

    #[test]
    fn test_control_chords_are_not_inserted() {
        let mut f = focused_field("1");
        let ctrl_x = KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(!f.handle_key(&ctrl_x));
        assert_eq!(f.value(), "1");
    }

    #[test]
    fn test_char_limit_restricts_typing_only() {
        let mut f = new();
        f.char_limit = 3;
        f.focus();
        type_str(&mut f, "12");
        assert!(press(&mut f, KeyCode::Char('3')));
        assert!(!press(&mut f, KeyCode::Char('4')));
        assert_eq!(f.value(), "123");

        f.set_value("12345");
        assert_eq!(f.value(), "12345");
        assert!(!press(&mut f, KeyCode::Char('6')));
        assert!(press(&mut f, KeyCode::Backspace));
        assert_eq!(f.value(), "1234");
    }

    #[test]
    fn test_view_pads_to_width() {
        let mut f = new();
        f.width = 4;
        f.set_value("7");
        assert_eq!(lipgloss::strip_ansi(&f.view()), "7   ");

        f.focus();
        // cursor cell after the text counts towards the width
        assert_eq!(lipgloss::strip_ansi(&f.view()), "7   ");
    }

    #[test]
    fn test_update_ignores_other_messages() {
        let mut f = focused_field("1");
        let msg: Msg = Box::new(42u32);
        assert!(!f.update(&msg));
        let key: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('2'),
            modifiers: KeyModifiers::NONE,
        });
        assert!(f.update(&key));
        assert_eq!(f.value(), "12");
    }

    #[test]
    fn test_component_focus() {
        let mut f = new();
        assert!(Component::focus(&mut f).is_none());
        assert!(Component::focused(&f));
        Component::blur(&mut f);
        assert!(!Component::focused(&f));
    }
}
