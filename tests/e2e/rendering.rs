//! E2E tests for the drawn frame: banner, colors, status and message bars

use crate::common::harness::{layout, EditorTestHarness};
use crossterm::event::{KeyCode, KeyModifiers};
use rem::config::Config;
use tempfile::TempDir;
use vt100::Color;

fn open(content: &str, name: &str, width: u16) -> (EditorTestHarness, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join(name);
    std::fs::write(&file_path, content).unwrap();
    let mut harness = EditorTestHarness::new(width, 10).unwrap();
    harness.open_file(&file_path).unwrap();
    (harness, temp_dir)
}

#[test]
fn test_empty_document_shows_banner_and_help() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains(&format!(
        "Rem Terminal Editor | v{}",
        env!("CARGO_PKG_VERSION")
    ));
    harness.assert_screen_contains("HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find");
    assert!(harness.screen_row(0).starts_with('~'));
    assert_eq!(harness.screen_cursor_position(), (0, 0));
}

#[test]
fn test_banner_goes_away_once_text_is_typed() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.type_text("x").unwrap();
    harness.assert_screen_not_contains("Rem Terminal Editor");
}

#[test]
fn test_rows_past_end_show_filler() {
    let (harness, _dir) = open("one\ntwo\n", "a.txt", 40);
    assert!(harness.screen_row(0).starts_with("one"));
    assert!(harness.screen_row(1).starts_with("two"));
    for row in 2..8 {
        assert_eq!(harness.screen_row(row).trim_end(), "~");
    }
}

#[test]
fn test_c_keywords_numbers_and_strings_are_colored() {
    let (harness, _dir) = open("int x = 42; if (\"s\")\n", "main.c", 40);

    // int
    assert_eq!(harness.cell(0, 0).unwrap().fgcolor(), Color::Idx(9));
    // x
    assert_eq!(harness.cell(0, 4).unwrap().fgcolor(), Color::Default);
    // 42
    assert_eq!(harness.cell(0, 8).unwrap().fgcolor(), Color::Idx(5));
    assert_eq!(harness.cell(0, 9).unwrap().fgcolor(), Color::Idx(5));
    // if
    assert_eq!(harness.cell(0, 12).unwrap().fgcolor(), Color::Idx(13));
    // "s"
    assert_eq!(harness.cell(0, 16).unwrap().fgcolor(), Color::Idx(11));
    assert_eq!(harness.cell(0, 18).unwrap().fgcolor(), Color::Idx(11));
}

#[test]
fn test_block_comment_spans_rows() {
    let (harness, _dir) = open("/* a\nb */ int\nint\n", "main.c", 40);

    assert_eq!(harness.cell(0, 0).unwrap().fgcolor(), Color::Idx(6));
    assert_eq!(harness.cell(1, 0).unwrap().fgcolor(), Color::Idx(6));
    assert_eq!(harness.cell(1, 3).unwrap().fgcolor(), Color::Idx(6));
    assert_eq!(harness.cell(1, 5).unwrap().fgcolor(), Color::Idx(9));
    assert_eq!(harness.cell(2, 0).unwrap().fgcolor(), Color::Idx(9));
}

#[test]
fn test_opening_a_block_comment_recolors_following_rows() {
    let (mut harness, _dir) = open("x\nint\n", "main.c", 40);
    assert_eq!(harness.cell(1, 0).unwrap().fgcolor(), Color::Idx(9));

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness.type_text("/*").unwrap();
    assert_eq!(harness.cell(1, 0).unwrap().fgcolor(), Color::Idx(6));

    harness
        .send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, 1)
        .unwrap();
    assert_eq!(harness.cell(1, 0).unwrap().fgcolor(), Color::Idx(9));
}

#[test]
fn test_line_comment_is_colored() {
    let (harness, _dir) = open("x // note\n", "main.rs", 40);
    assert_eq!(harness.cell(0, 0).unwrap().fgcolor(), Color::Default);
    assert_eq!(harness.cell(0, 2).unwrap().fgcolor(), Color::Idx(6));
    assert_eq!(harness.cell(0, 8).unwrap().fgcolor(), Color::Idx(6));
}

#[test]
fn test_plain_text_is_uncolored() {
    let (harness, _dir) = open("int 42\n", "notes.txt", 40);
    assert_eq!(harness.cell(0, 0).unwrap().fgcolor(), Color::Default);
    assert_eq!(harness.cell(0, 4).unwrap().fgcolor(), Color::Default);
}

#[test]
fn test_highlighting_can_be_turned_off() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("main.c");
    std::fs::write(&file_path, "int x;\n").unwrap();

    let mut config = Config::default();
    config.editor.syntax_highlighting = false;
    let mut harness = EditorTestHarness::with_config(40, 10, config).unwrap();
    harness.open_file(&file_path).unwrap();

    assert_eq!(harness.cell(0, 0).unwrap().fgcolor(), Color::Default);
    harness.assert_screen_contains("no ft | 1/1");
}

#[test]
fn test_status_bar_layout() {
    let (mut harness, _dir) = open("a\nb\nc\n", "main.c", 60);
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();

    let status = harness.screen_row(layout::status_bar_row(10) as u16);
    assert!(status.contains(" - 3 lines"), "status bar: {status:?}");
    assert!(status.ends_with("c | 2/3"), "status bar: {status:?}");
    assert!(harness.cell(8, 0).unwrap().inverse());
}

#[test]
fn test_control_characters_drawn_inverse() {
    let (harness, _dir) = open("a\u{1}b\n", "a.txt", 40);
    assert!(harness.screen_row(0).starts_with("aAb"));
    assert!(harness.cell(0, 1).unwrap().inverse());
    assert!(!harness.cell(0, 2).unwrap().inverse());
}

#[test]
fn test_message_expires() {
    let mut config = Config::default();
    config.editor.message_timeout_secs = 0;
    let mut harness = EditorTestHarness::with_config(80, 10, config).unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("HELP:");
}
