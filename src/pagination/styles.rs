//! Styles for the pagination control.

use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Lip Gloss styles applied to each part of the control.
///
/// ```rust
/// use bubbletea_pagination::pagination::{Model, Styles};
/// use lipgloss_extras::prelude::*;
///
/// let mut pager = Model::new();
/// pager.styles = Styles {
///     focused_button: Style::new().bold(true).foreground(Color::from("#FF6B6B")),
///     ..Styles::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    /// Enabled, unfocused button.
    pub button: Style,
    /// Button with keyboard focus.
    pub focused_button: Style,
    /// Previous on the first page, next on the last page.
    pub disabled_button: Style,
    /// Brackets around an unfocused field.
    pub field: Style,
    /// Brackets around the focused field.
    pub focused_field: Style,
    /// Brackets around a field holding invalid text.
    pub invalid_field: Style,
    /// Static labels (`Size`, `TotalPages`, `TotalRows`).
    pub label: Style,
    /// Total values.
    pub value: Style,
    /// Inline validation message.
    pub error: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subtle = AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        };
        let highlight = AdaptiveColor {
            Light: "#874BFD",
            Dark: "#7D56F4",
        };
        let warning = AdaptiveColor {
            Light: "#D70000",
            Dark: "#FF5F87",
        };

        Self {
            button: Style::new().bold(true),
            focused_button: Style::new()
                .bold(true)
                .foreground(Color::from("230"))
                .background(Color::from("62")),
            disabled_button: Style::new().faint(true),
            field: Style::new().foreground(subtle.clone()),
            focused_field: Style::new().foreground(highlight),
            invalid_field: Style::new().foreground(warning.clone()),
            label: Style::new().foreground(subtle),
            value: Style::new().bold(true),
            error: Style::new().foreground(warning).italic(true),
        }
    }
}
