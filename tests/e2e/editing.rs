//! E2E tests for typing, line breaks and deletion

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;

#[test]
fn test_basic_editing_workflow() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.assert_buffer_content("");
    harness.assert_screen_contains("[No Name] - 0 lines");

    harness.type_text("hello").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("world").unwrap();

    harness.assert_buffer_content("hello\nworld\n");
    let cursor = harness.cursor();
    assert_eq!((cursor.row, cursor.col), (1, 5));
    harness.assert_screen_contains("hello");
    harness.assert_screen_contains("[No Name] - 2 lines (modified)");
    assert_eq!(harness.screen_cursor_position(), (1, 5));
}

#[test]
fn test_enter_splits_line_at_cursor() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("abcd").unwrap();
    harness
        .send_key_repeat(KeyCode::Left, KeyModifiers::NONE, 2)
        .unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    harness.assert_buffer_content("ab\ncd\n");
    let cursor = harness.cursor();
    assert_eq!((cursor.row, cursor.col), (1, 0));
}

#[test]
fn test_backspace_at_line_start_joins_lines() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("ab").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("cd").unwrap();
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();

    harness.assert_buffer_content("abcd\n");
    let cursor = harness.cursor();
    assert_eq!((cursor.row, cursor.col), (0, 2));
}

#[test]
fn test_ctrl_h_erases_like_backspace() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("abc").unwrap();
    harness
        .send_key(KeyCode::Char('h'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_buffer_content("ab\n");
}

#[test]
fn test_delete_removes_char_under_cursor() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("abc").unwrap();
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("bc\n");

    // at the end of the last row there is nothing to delete
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content("bc\n");
}

#[test]
fn test_backspace_at_document_start_is_noop() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("x").unwrap();
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    harness.assert_buffer_content("x\n");
}

#[test]
fn test_tab_expands_on_screen_only() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.send_key(KeyCode::Tab, KeyModifiers::NONE).unwrap();
    harness.type_text("x").unwrap();

    harness.assert_buffer_content("\tx\n");
    assert!(harness.screen_row(0).starts_with("    x"));
    assert_eq!(harness.cursor().col, 2);
    assert_eq!(harness.cursor().render_col, 5);
    assert_eq!(harness.screen_cursor_position(), (0, 5));
}

#[test]
fn test_escape_and_ctrl_l_do_nothing() {
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.type_text("a").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Char('l'), KeyModifiers::CONTROL)
        .unwrap();
    harness.assert_buffer_content("a\n");
}

#[test]
fn test_open_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("notes.txt");
    std::fs::write(&file_path, "first\r\nsecond\n").unwrap();

    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.open_file(&file_path).unwrap();

    harness.assert_buffer_content("first\nsecond\n");
    harness.assert_screen_contains(" - 2 lines");
    harness.assert_screen_not_contains("(modified)");
    assert!(!harness.editor().state().document.is_dirty());
}

#[test]
fn test_open_missing_file_starts_empty_with_name() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("new.py");

    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.open_file(&file_path).unwrap();

    harness.assert_buffer_content("");
    assert_eq!(
        harness.editor().state().filename.as_deref(),
        Some(file_path.as_path())
    );
    assert_eq!(harness.editor().state().document.filetype(), Some("py"));
    assert!(!file_path.exists());
}
