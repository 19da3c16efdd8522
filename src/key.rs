//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es with the help text shown
//! for them. Bindings can be built directly or with the option-style
//! constructor [`new_binding`]:
//!
//! ```rust
//! use bubbletea_pagination::key::{self, Binding};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = key::new_binding(vec![
//!     key::with_keys_str(&["pgdown", "alt+right"]),
//!     key::with_help("pgdn", "next page"),
//! ]);
//! assert_eq!(next.keys().len(), 2);
//!
//! let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "quit");
//! assert!(quit.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifier keys held with it.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Shift is folded into the character (or into `BackTab`) by the
    /// terminal, so it is ignored when comparing those keys.
    fn normalized(code: KeyCode, mods: KeyModifiers) -> (KeyCode, KeyModifiers) {
        match code {
            KeyCode::Char(_) | KeyCode::BackTab => (code, mods.difference(KeyModifiers::SHIFT)),
            _ => (code, mods),
        }
    }

    /// Returns true if the key message is this key combination.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        Self::normalized(self.code, self.mods) == Self::normalized(msg.key, msg.modifiers)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"pgdn"`.
    pub key: String,
    /// What the key does, e.g. `"next page"`.
    pub desc: String,
}

/// A set of keys that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys with empty help.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Marks the binding as disabled (builder pattern).
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The keys bound to this action.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and one of its keys matches.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// An option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the keys of a binding from key strings such as `"pgup"` or `"alt+left"`.
///
/// Strings that do not name a key are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key_str(k)).collect();
    with_keys(parsed)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Parses a key string like `"ctrl+a"`, `"pgdown"` or `"shift+tab"`.
///
/// ```rust
/// use bubbletea_pagination::key::parse_key_str;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let k = parse_key_str("alt+left").unwrap();
/// assert_eq!(k.code, KeyCode::Left);
/// assert_eq!(k.mods, KeyModifiers::ALT);
/// assert!(parse_key_str("nonsense").is_none());
/// ```
pub fn parse_key_str(s: &str) -> Option<KeyPress> {
    if s == "shift+tab" {
        return Some(KeyPress::from((KeyCode::BackTab, KeyModifiers::SHIFT)));
    }

    let mut mods = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" | " " => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress::from((code, mods)))
}

/// Returns true if any of the bindings matches the key message.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Key bindings a component exposes for help rendering.
pub trait KeyMap {
    /// Bindings for the single-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the full help view, one inner vector per column.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
