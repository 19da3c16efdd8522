//! View rendering for the pagination control.

use super::model::{Focus, Model};
use crate::field;
use crate::help;

impl Model {
    /// Renders the control on one line, followed by the inline validation
    /// message on a second line when the focused field holds invalid text.
    ///
    /// ```rust
    /// use bubbletea_pagination::pagination::Model;
    /// use lipgloss_extras::lipgloss;
    ///
    /// let mut pager = Model::new();
    /// pager.set_total_rows(95);
    /// let plain = lipgloss::strip_ansi(&pager.view());
    /// assert!(plain.contains("TotalPages 10"));
    /// assert!(plain.contains("TotalRows 95"));
    /// ```
    pub fn view(&self) -> String {
        let line = self.controls_view();
        match self.error_view() {
            Some(err) => format!("{}\n{}", line, err),
            None => line,
        }
    }

    /// Renders the buttons, fields and totals without the error line.
    pub fn controls_view(&self) -> String {
        let mut parts = vec![
            self.button_view(Focus::Prev, &self.labels.prev, self.state.on_first_page()),
            self.field_view(Focus::Page, &self.page_field),
            self.button_view(Focus::Next, &self.labels.next, self.state.on_last_page()),
            self.styles.label.render(&self.labels.page_size),
            self.field_view(Focus::PageSize, &self.size_field),
        ];
        if self.show_total_pages {
            parts.push(self.total_view(&self.labels.total_pages, self.state.total_pages()));
        }
        if self.show_total_rows {
            parts.push(self.total_view(&self.labels.total_rows, self.state.total_rows()));
        }
        parts.join(" ")
    }

    /// Renders the inline validation message, if any.
    pub fn error_view(&self) -> Option<String> {
        if !self.focused {
            return None;
        }
        self.error()
            .map(|err| self.styles.error.render(&err.to_string()))
    }

    /// Renders the short key help for the control.
    pub fn help_view(&self) -> String {
        help::Model::new().view(&self.keymap)
    }

    fn has_focus(&self, target: Focus) -> bool {
        self.focused && self.focus == target
    }

    fn button_view(&self, target: Focus, label: &str, disabled: bool) -> String {
        let style = if self.has_focus(target) {
            &self.styles.focused_button
        } else if disabled {
            &self.styles.disabled_button
        } else {
            &self.styles.button
        };
        style.render(&format!(" {} ", label))
    }

    fn field_view(&self, target: Focus, f: &field::Model) -> String {
        let bracket = if f.is_invalid() {
            &self.styles.invalid_field
        } else if self.has_focus(target) {
            &self.styles.focused_field
        } else {
            &self.styles.field
        };
        format!(
            "{}{}{}",
            bracket.render("["),
            f.view(),
            bracket.render("]")
        )
    }

    fn total_view(&self, label: &str, value: usize) -> String {
        format!(
            "{} {}",
            self.styles.label.render(label),
            self.styles.value.render(&value.to_string())
        )
    }
}
