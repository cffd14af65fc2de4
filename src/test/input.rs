use std::{fs, path::PathBuf};

use tempfile::{TempDir, tempdir};

use crate::input::*;

fn day_with_input(contents: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(INPUT_FILE_NAME), contents).unwrap();
    let location = dir.path().join("mod.rs");
    (dir, location)
}

#[test]
fn resolves_input_next_to_module() {
    let path = input_path("/puzzles/day03/mod.rs");
    assert_eq!(path, PathBuf::from("/puzzles/day03/input.txt"));
}

#[test]
fn macro_resolves_to_calling_file() {
    let path = crate::input_path!();
    assert!(path.ends_with("src/test/input.txt"), "{}", path.display());
}

#[test]
fn trims_surrounding_whitespace_only() {
    let (_dir, location) = day_with_input(b"  42\n");
    assert_eq!(read_input(&location).unwrap(), "42");

    let (_dir, location) = day_with_input(b"\n 1  2\t3 \r\n\n");
    assert_eq!(read_input(&location).unwrap(), "1  2\t3");
}

#[test]
fn strips_byte_order_mark() {
    let (_dir, location) = day_with_input("\u{feff}abc\n".as_bytes());
    assert_eq!(read_input(&location).unwrap(), "abc");
}

#[test]
fn reading_twice_gives_the_same_text() {
    let (_dir, location) = day_with_input(b"3   4\n4   3\n2   5\n");
    let first = read_input(&location).unwrap();
    let second = read_input(&location).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_input_is_not_found() {
    let dir = tempdir().unwrap();
    let err = read_input(dir.path().join("mod.rs")).unwrap_err();

    match err {
        InputError::NotFound { path } => assert_eq!(path, dir.path().join(INPUT_FILE_NAME)),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_is_a_decode_error() {
    let (_dir, location) = day_with_input(&[b'o', b'k', 0xff, 0xfe]);
    let err = read_input(&location).unwrap_err();
    assert!(matches!(err, InputError::Decode { .. }), "{err:?}");
}

#[test]
fn input_that_is_a_directory_is_an_io_error() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(INPUT_FILE_NAME)).unwrap();

    let err = read_input(dir.path().join("mod.rs")).unwrap_err();
    assert!(!matches!(err, InputError::NotFound { .. }), "{err:?}");
}

#[test]
fn splits_lines() {
    let (_dir, location) = day_with_input(b"a\nb\nc");
    assert_eq!(read_lines(&location).unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn no_trailing_empty_line() {
    let (_dir, location) = day_with_input(b"a\nb\n\n");
    assert_eq!(read_lines(&location).unwrap(), vec!["a", "b"]);
}

#[test]
fn keeps_blank_lines_between_groups() {
    let (_dir, location) = day_with_input(b"1\n2\n\n3\n");
    assert_eq!(read_lines(&location).unwrap(), vec!["1", "2", "", "3"]);
}

#[test]
fn empty_input_is_one_empty_line() {
    let (_dir, location) = day_with_input(b"");
    assert_eq!(read_lines(&location).unwrap(), vec![String::new()]);

    let (_dir, location) = day_with_input(b" \n\n ");
    assert_eq!(read_lines(&location).unwrap(), vec![""]);
}

#[test]
fn read_lines_propagates_not_found() {
    let dir = tempdir().unwrap();
    let err = read_lines(dir.path().join("mod.rs")).unwrap_err();
    assert!(matches!(err, InputError::NotFound { .. }));
}
