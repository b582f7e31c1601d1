//! Tests for the table state container.

use super::*;
use crate::Severity;
use crate::api::fake::FakeSource;

fn loaded(source: &FakeSource, rows: u32) -> TableState {
    let mut state = TableState::new(rows);
    assert!(state.load_page(source, 1));
    state
}

#[test]
fn test_load_page_updates_rows_and_totals() {
    let source = FakeSource::with_ids(30);
    let mut state = loaded(&source, 12);

    assert_eq!(state.total_records(), 30);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.artworks().len(), 12);

    assert!(state.load_page(&source, 3));
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.first(), 24);
    assert_eq!(state.artworks().len(), 6);
    assert!(!state.is_loading());
}

#[test]
fn test_failed_load_keeps_rows_and_notifies() {
    let source = FakeSource::with_ids(30).failing_on(2);
    let mut state = loaded(&source, 10);

    assert!(!state.next_page(&source));
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.artworks()[0].id, 1);

    let notes = state.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Error);
    assert!(notes[0].detail.starts_with("Failed to fetch artworks."));
    assert!(state.notifications().is_empty());
}

#[test]
fn test_paginator_change_and_bounds() {
    let source = FakeSource::with_ids(25);
    let mut state = loaded(&source, 10);

    assert!(!state.prev_page(&source));
    assert!(state.change_page(&source, 20, 10));
    assert_eq!(state.current_page(), 3);
    assert!(!state.next_page(&source));
    assert_eq!(source.requested(), vec![1, 3]);

    // Switching to 5 rows keeps row 21 on screen
    assert!(state.set_rows(&source, 5));
    assert_eq!(state.current_page(), 5);
    assert_eq!(state.artworks()[0].id, 21);
}

#[test]
fn test_toggle_row_only_on_current_page() {
    let source = FakeSource::with_ids(30);
    let mut state = loaded(&source, 10);

    assert_eq!(state.toggle_row(3), Some(true));
    assert_eq!(state.toggle_row(3), Some(false));
    assert_eq!(state.toggle_row(25), None);
    assert!(state.selection().is_empty());
}

#[test]
fn test_select_all_on_page_counts_new_rows() {
    let source = FakeSource::with_ids(30);
    let mut state = loaded(&source, 10);

    state.toggle_row(4);
    assert_eq!(state.select_all_on_page(), 9);
    assert_eq!(state.selection().len(), 10);
    state.clear_selection();
    assert!(state.selection().is_empty());
}

#[test]
fn test_select_multiple_adds_across_pages_and_notifies() {
    let source = FakeSource::with_ids(20);
    let mut state = loaded(&source, 10);
    state.toggle_row(2);

    let result = state.select_multiple(&source, 15).unwrap();
    assert_eq!(result.added, 15);
    assert_eq!(state.selection().len(), 16);
    assert_eq!(state.max_selectable(), 4);

    let notes = state.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Success);
    assert_eq!(notes[0].detail, "Selected 15 new artworks");
}

#[test]
fn test_select_multiple_clamps_to_remaining() {
    let source = FakeSource::with_ids(12);
    let mut state = loaded(&source, 10);

    let result = state.select_multiple(&source, 1000).unwrap();
    assert_eq!(result.requested, 12);
    assert_eq!(state.selection().len(), 12);

    assert!(state.select_multiple(&source, 1).is_none());
    let notes = state.take_notifications();
    assert_eq!(notes.last().unwrap().severity, Severity::Info);
}

#[test]
fn test_select_multiple_failure_keeps_partial_selection() {
    let source = FakeSource::with_ids(30).failing_on(2);
    let mut state = loaded(&source, 10);

    let result = state.select_multiple(&source, 25).unwrap();
    assert_eq!(result.added, 10);
    assert_eq!(state.selection().len(), 10);

    let notes = state.take_notifications();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].is_error());
    assert!(notes[0].detail.starts_with("Failed to select multiple rows."));
}

#[test]
fn test_failed_page_size_change_keeps_position() {
    let source = FakeSource::with_ids(50).failing_on(5);
    let mut state = TableState::new(10);
    assert!(state.load_page(&source, 3));

    // Row 21 at 5 rows per page is page 5, which fails
    assert!(!state.set_rows(&source, 5));
    assert_eq!(state.rows(), 10);
    assert_eq!(state.first(), 20);
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.total_pages(), 5);
    assert_eq!(state.artworks()[0].id, 21);

    assert!(state.next_page(&source));
    assert_eq!(state.current_page(), 4);
    assert_eq!(state.artworks()[0].id, 31);
    assert_eq!(source.requested(), vec![3, 5, 4]);
}

#[test]
fn test_failed_paginator_change_keeps_position() {
    let source = FakeSource::with_ids(50).failing_on(2);
    let mut state = TableState::new(10);
    assert!(state.load_page(&source, 1));

    assert!(!state.change_page(&source, 25, 25));
    assert_eq!(state.rows(), 10);
    assert_eq!(state.first(), 0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_select_multiple_before_first_load() {
    let source = FakeSource::with_ids(20);
    let mut state = TableState::new(10);

    assert!(state.select_multiple(&source, 5).is_none());
    assert!(source.requested().is_empty());

    let notes = state.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].severity, Severity::Info);
    assert_eq!(notes[0].detail, "Nothing loaded yet");
}
