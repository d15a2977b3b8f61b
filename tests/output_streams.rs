//! Tests for input/output stream selection.

use std::fs;
use std::io::{Read, Write};

use ip_locate::{open_input, open_output, SetupError};
use tempfile::TempDir;

#[test]
fn test_no_input_path_falls_back_to_stdin() {
    assert!(open_input(None).is_ok());
}

#[test]
fn test_no_output_path_falls_back_to_stdout() {
    assert!(open_output(None).is_ok());
}

#[test]
fn test_input_file_contents_are_readable() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let input_file = temp_dir.path().join("addresses.txt");
    fs::write(&input_file, "8.8.8.8\n192.168.1.1\n").expect("failed to write file");

    let mut reader = open_input(Some(&input_file)).expect("open should succeed");
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .expect("read should succeed");
    assert_eq!(contents, "8.8.8.8\n192.168.1.1\n");
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let err = open_input(Some(&temp_dir.path().join("missing.txt")))
        .err()
        .expect("open should fail");
    assert!(matches!(err, SetupError::Input { .. }));
}

#[test]
fn test_output_file_is_created_and_writable() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let output_file = temp_dir.path().join("rows.csv");

    {
        let mut writer = open_output(Some(&output_file)).expect("create should succeed");
        writer.write_all(b"8.8.8.8,a,b,c\n").expect("write");
        writer.flush().expect("flush");
    }

    let contents = fs::read_to_string(&output_file).expect("read back");
    assert_eq!(contents, "8.8.8.8,a,b,c\n");
}

#[test]
fn test_existing_output_file_is_refused_and_untouched() {
    let temp_dir = TempDir::new().expect("failed to create temp directory");
    let output_file = temp_dir.path().join("rows.csv");
    fs::write(&output_file, "precious prior results\n").expect("failed to write file");

    let err = open_output(Some(&output_file))
        .err()
        .expect("create should fail");
    assert!(matches!(err, SetupError::Output { .. }));

    // The refusal must not have altered the file.
    let contents = fs::read_to_string(&output_file).expect("read back");
    assert_eq!(contents, "precious prior results\n");
}
