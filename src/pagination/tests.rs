//! Tests for the pagination control.

use super::*;
use crate::config::{Config, Labels};
use crate::error::{Error, ValidationError};
use crate::key::KeyMap;
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use std::sync::{Arc, Mutex};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers,
    })
}

fn type_str(m: &mut Model, s: &str) {
    for c in s.chars() {
        assert!(m.update(key(KeyCode::Char(c))).is_none());
    }
}

fn clear_field(m: &mut Model) {
    let ctrl_u = key_with(KeyCode::Char('u'), KeyModifiers::CONTROL);
    m.update(ctrl_u);
}

/// A focused control over 95 rows, recording callback invocations.
fn focused_pager() -> (Model, Arc<Mutex<Vec<(usize, usize)>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let mut m = Model::new().with_on_change(move |page, size| {
        sink.lock().unwrap().push((page, size));
    });
    m.set_total_rows(95);
    m.focus();
    calls.lock().unwrap().clear();
    (m, calls)
}

async fn changed(cmd: Option<bubbletea_rs::Cmd>) -> ChangedMsg {
    let cmd = cmd.expect("expected a change command");
    let msg = cmd.await.expect("command should produce a message");
    *msg.downcast_ref::<ChangedMsg>()
        .expect("message should be ChangedMsg")
}

fn plain(s: &str) -> String {
    lipgloss::strip_ansi(s)
}

#[test]
fn test_new_default_values() {
    let m = Model::new();
    assert_eq!(m.page(), 1);
    assert_eq!(m.page_size(), 10);
    assert_eq!(m.total_rows(), 0);
    assert_eq!(m.total_pages(), 0);
    assert_eq!(m.page_input(), "1");
    assert_eq!(m.page_size_input(), "10");
    assert_eq!(m.focus_target(), Focus::Page);
    assert!(!m.focused());
    assert!(m.error().is_none());
}

#[test]
fn test_with_config_rejects_zero_page_size() {
    let err = Model::with_config(Config::new().with_default_page_size(0)).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(ValidationError::PageSizeTooSmall { size: 0 })
    );
}

#[test]
fn test_blurred_control_ignores_keys() {
    let (mut m, calls) = focused_pager();
    m.blur();
    assert!(m.update(key(KeyCode::PageDown)).is_none());
    assert_eq!(m.page(), 1);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_non_key_messages_are_ignored() {
    let (mut m, _) = focused_pager();
    let msg: Msg = Box::new("tick");
    assert!(m.update(msg).is_none());
}

#[tokio::test]
async fn test_page_keys_navigate_and_emit_changes() {
    let (mut m, calls) = focused_pager();

    let msg = changed(m.update(key(KeyCode::PageDown))).await;
    assert_eq!(msg, ChangedMsg { page: 2, page_size: 10 });
    assert_eq!(m.page_input(), "2");

    let msg = changed(m.update(key_with(KeyCode::Right, KeyModifiers::ALT))).await;
    assert_eq!(msg.page, 3);

    let msg = changed(m.update(key(KeyCode::PageUp))).await;
    assert_eq!(msg.page, 2);

    assert_eq!(*calls.lock().unwrap(), vec![(2, 10), (3, 10), (2, 10)]);
}

#[test]
fn test_prev_on_first_page_is_silent() {
    let (mut m, calls) = focused_pager();
    assert!(m.update(key(KeyCode::PageUp)).is_none());
    assert_eq!(m.page(), 1);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_next_on_last_page_is_silent() {
    let (mut m, calls) = focused_pager();
    for _ in 0..20 {
        m.update(key(KeyCode::PageDown));
    }
    assert_eq!(m.page(), 10);
    // nine moves, then no-ops
    assert_eq!(calls.lock().unwrap().len(), 9);
}

#[test]
fn test_focus_ring() {
    let (mut m, _) = focused_pager();
    assert_eq!(m.focus_target(), Focus::Page);

    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_target(), Focus::Next);
    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_target(), Focus::PageSize);
    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_target(), Focus::Prev);
    m.update(key(KeyCode::Tab));
    assert_eq!(m.focus_target(), Focus::Page);

    m.update(key_with(KeyCode::BackTab, KeyModifiers::SHIFT));
    assert_eq!(m.focus_target(), Focus::Prev);
}

#[tokio::test]
async fn test_buttons_press_with_enter_and_space() {
    let (mut m, _) = focused_pager();
    m.set_focus_target(Focus::Next);

    let msg = changed(m.update(key(KeyCode::Enter))).await;
    assert_eq!(msg.page, 2);
    let msg = changed(m.update(key(KeyCode::Char(' ')))).await;
    assert_eq!(msg.page, 3);

    m.set_focus_target(Focus::Prev);
    let msg = changed(m.update(key(KeyCode::Enter))).await;
    assert_eq!(msg.page, 2);
}

#[tokio::test]
async fn test_page_field_submit_jumps() {
    let (mut m, calls) = focused_pager();
    clear_field(&mut m);
    type_str(&mut m, "7");
    assert_eq!(m.page_input(), "7");
    assert!(m.error().is_none());
    // typing alone does not change the page
    assert_eq!(m.page(), 1);

    let msg = changed(m.update(key(KeyCode::Enter))).await;
    assert_eq!(msg, ChangedMsg { page: 7, page_size: 10 });
    assert_eq!(m.page(), 7);
    assert_eq!(*calls.lock().unwrap(), vec![(7, 10)]);
}

#[test]
fn test_page_field_out_of_range_is_rejected() {
    let (mut m, calls) = focused_pager();
    clear_field(&mut m);
    type_str(&mut m, "11");

    assert_eq!(
        m.error(),
        Some(&Error::Validation(ValidationError::PageBeyondLast {
            page: 11,
            total_pages: 10
        }))
    );
    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert_eq!(m.page(), 1);
    assert!(m.error().is_some());
    assert!(calls.lock().unwrap().is_empty());

    let shown = plain(&m.view());
    assert!(shown.contains("page should not be bigger than total pages 10 (got 11)"));
}

#[test]
fn test_page_field_zero_is_rejected() {
    let (mut m, _) = focused_pager();
    clear_field(&mut m);
    type_str(&mut m, "0");
    assert_eq!(
        m.error(),
        Some(&Error::Validation(ValidationError::PageBelowFirst { page: 0 }))
    );
    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert_eq!(m.page(), 1);
}

#[test]
fn test_page_field_non_number_is_parse_error() {
    let (mut m, _) = focused_pager();
    clear_field(&mut m);
    type_str(&mut m, "x");
    assert!(m.error().is_some_and(|e| e.is_parse()));
    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert_eq!(m.page(), 1);
}

#[test]
fn test_escape_discards_edit() {
    let (mut m, _) = focused_pager();
    type_str(&mut m, "99");
    assert_eq!(m.page_input(), "199");
    assert!(m.error().is_some());

    m.update(key(KeyCode::Esc));
    assert_eq!(m.page_input(), "1");
    assert!(m.error().is_none());
}

#[test]
fn test_leaving_field_discards_edit() {
    let (mut m, _) = focused_pager();
    clear_field(&mut m);
    type_str(&mut m, "5");
    m.update(key(KeyCode::Tab));
    assert_eq!(m.page_input(), "1");
    assert_eq!(m.page(), 1);
}

#[tokio::test]
async fn test_page_size_field_resets_page() {
    let (mut m, calls) = focused_pager();
    m.update(key(KeyCode::PageDown));
    m.update(key(KeyCode::PageDown));
    assert_eq!(m.page(), 3);

    m.set_focus_target(Focus::PageSize);
    clear_field(&mut m);
    type_str(&mut m, "5");
    let msg = changed(m.update(key(KeyCode::Enter))).await;

    assert_eq!(msg, ChangedMsg { page: 1, page_size: 5 });
    assert_eq!(m.total_pages(), 19);
    assert_eq!(m.page_input(), "1");
    assert_eq!(m.page_size_input(), "5");
    assert_eq!(calls.lock().unwrap().last(), Some(&(1, 5)));
}

#[test]
fn test_page_size_field_rejects_zero() {
    let (mut m, calls) = focused_pager();
    m.set_focus_target(Focus::PageSize);
    clear_field(&mut m);
    type_str(&mut m, "0");
    assert_eq!(
        m.error(),
        Some(&Error::Validation(ValidationError::PageSizeTooSmall { size: 0 }))
    );
    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert_eq!(m.page_size(), 10);
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_fields_show_numbers_longer_than_char_limit() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let config = Config::new()
        .with_field_char_limit(2)
        .with_default_page_size(100);
    let mut m = Model::with_config(config)
        .unwrap()
        .with_on_change(move |page, size| sink.lock().unwrap().push((page, size)));
    m.set_total_rows(1000);
    m.focus();
    assert_eq!(m.page_size_input(), "100");

    // submitting the untouched field keeps the size it shows
    m.set_focus_target(Focus::PageSize);
    let msg = changed(m.update(key(KeyCode::Enter))).await;
    assert_eq!(msg, ChangedMsg { page: 1, page_size: 100 });
    assert_eq!(m.page_size(), 100);
    assert_eq!(calls.lock().unwrap().last(), Some(&(1, 100)));

    // typing is still capped
    type_str(&mut m, "5");
    assert_eq!(m.page_size_input(), "100");
}

#[test]
fn test_set_total_rows_resyncs_fields() {
    let (mut m, calls) = focused_pager();
    m.update(key(KeyCode::PageDown));
    m.set_total_rows(12);
    assert_eq!(m.page(), 1);
    assert_eq!(m.total_pages(), 2);
    assert_eq!(m.page_input(), "1");
    assert_eq!(calls.lock().unwrap().last(), Some(&(1, 10)));
}

#[test]
fn test_default_page_size_and_reset() {
    let (mut m, _) = focused_pager();
    m.set_default_page_size(20).unwrap();
    assert_eq!(m.page_size_input(), "20");
    assert_eq!(m.total_pages(), 5);
    assert!(m.set_default_page_size(0).is_err());

    m.update(key(KeyCode::PageDown));
    m.reset();
    assert_eq!((m.page(), m.page_size()), (1, 20));
    assert_eq!(m.page_input(), "1");
}

#[test]
fn test_view_layout() {
    let mut m = Model::new();
    m.set_total_rows(95);
    assert_eq!(
        plain(&m.view()),
        " ‹  [1  ]  ›  Size [10 ] TotalPages 10 TotalRows 95"
    );
}

#[test]
fn test_view_hides_totals_and_uses_labels() {
    let config = Config::new()
        .with_labels(Labels {
            page_size: "Per page".to_string(),
            ..Labels::default()
        })
        .with_show_total_pages(false)
        .with_show_total_rows(false);
    let m = Model::with_config(config).unwrap();
    let shown = plain(&m.view());
    assert!(shown.contains("Per page"));
    assert!(!shown.contains("TotalPages"));
    assert!(!shown.contains("TotalRows"));
}

#[test]
fn test_error_only_shown_while_focused() {
    let (mut m, _) = focused_pager();
    clear_field(&mut m);
    type_str(&mut m, "abc");
    assert!(m.error_view().is_some());
    assert_eq!(plain(&m.view()).lines().count(), 2);

    m.blur();
    assert!(m.error_view().is_none());
    assert_eq!(plain(&m.view()).lines().count(), 1);
}

#[test]
fn test_help_view_lists_page_keys() {
    let m = Model::new();
    let help = plain(&m.help_view());
    assert!(help.contains("prev page"));
    assert!(help.contains("next page"));
    assert_eq!(m.keymap.full_help().len(), 3);
}

#[test]
fn test_component_trait() {
    let mut m = Model::new();
    assert!(Component::focus(&mut m).is_none());
    assert!(Component::focused(&m));
    Component::blur(&mut m);
    assert!(!Component::focused(&m));
}

#[test]
fn test_focus_ring_wraps() {
    assert_eq!(Focus::PageSize.next(), Focus::Prev);
    assert_eq!(Focus::Prev.prev(), Focus::PageSize);
    for f in [Focus::Prev, Focus::Page, Focus::Next, Focus::PageSize] {
        assert_eq!(f.next().prev(), f);
    }
}
