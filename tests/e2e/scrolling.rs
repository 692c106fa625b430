//! E2E tests for cursor movement and viewport scrolling

use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;

/// 40x10 terminal (8 text rows) showing a file of `count` numbered lines
fn numbered_lines(count: usize) -> (EditorTestHarness, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("lines.txt");
    let content: String = (0..count).map(|i| format!("line {i}\n")).collect();
    std::fs::write(&file_path, content).unwrap();
    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.open_file(&file_path).unwrap();
    (harness, temp_dir)
}

#[test]
fn test_arrow_down_scrolls_one_row_at_a_time() {
    let (mut harness, _dir) = numbered_lines(30);
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 10)
        .unwrap();

    assert_eq!(harness.cursor().row, 10);
    assert_eq!(harness.editor().state().viewport.row_offset, 3);
    assert!(harness.screen_row(0).starts_with("line 3 "));
    assert_eq!(harness.screen_cursor_position(), (7, 0));
}

#[test]
fn test_page_down_and_up() {
    let (mut harness, _dir) = numbered_lines(30);

    harness
        .send_key(KeyCode::PageDown, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.cursor().row, 15);
    assert_eq!(harness.editor().state().viewport.row_offset, 8);
    assert!(harness.screen_row(0).starts_with("line 8 "));

    harness.send_key(KeyCode::PageUp, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor().row, 0);
    assert_eq!(harness.editor().state().viewport.row_offset, 0);
}

#[test]
fn test_page_down_stops_at_virtual_end_row() {
    let (mut harness, _dir) = numbered_lines(5);
    harness
        .send_key(KeyCode::PageDown, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.cursor().row, 5);
    assert_eq!(harness.editor().state().viewport.row_offset, 0);
}

#[test]
fn test_up_at_top_stays() {
    let (mut harness, _dir) = numbered_lines(3);
    harness.send_key(KeyCode::Up, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor().row, 0);
}

#[test]
fn test_horizontal_scroll_follows_cursor() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("wide.txt");
    let line: String = (0..60).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    std::fs::write(&file_path, format!("{line}\nshort\n")).unwrap();

    let mut harness = EditorTestHarness::new(40, 10).unwrap();
    harness.open_file(&file_path).unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();

    assert_eq!(harness.cursor().col, 60);
    assert_eq!(harness.editor().state().viewport.col_offset, 21);
    assert!(harness.screen_row(0).starts_with(&line[21..]));
    assert_eq!(harness.screen_cursor_position(), (0, 39));

    // moving down clamps the column to the shorter row and scrolls back
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.cursor().col, 5);
    assert_eq!(harness.editor().state().viewport.col_offset, 5);
}

#[test]
fn test_right_at_line_end_wraps_to_next_row() {
    let (mut harness, _dir) = numbered_lines(3);
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    let cursor = harness.cursor();
    assert_eq!((cursor.row, cursor.col), (1, 0));

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    let cursor = harness.cursor();
    assert_eq!((cursor.row, cursor.col), (0, 6));
}

#[test]
fn test_resize_changes_text_area() {
    let (mut harness, _dir) = numbered_lines(30);
    harness.queue_resize(40, 6);
    harness
        .send_key_repeat(KeyCode::Down, KeyModifiers::NONE, 5)
        .unwrap();

    let viewport = harness.editor().state().viewport;
    assert_eq!(viewport.rows, 4);
    assert_eq!(viewport.cols, 40);
    assert_eq!(viewport.row_offset, 2);
    assert!(harness.screen_row(0).starts_with("line 2 "));
    assert!(harness.screen_row(4).contains(" - 30 lines"));
}
