use std::io::Write;
use std::path::Path;

use lcsdiff::{DiffError, DifferBuilder};
use tempfile::NamedTempFile;

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn two_files_pair_by_position() {
    let left = write_lines(&["The cat sat on the mat", "hello world"]);
    let right = write_lines(&["the dog sat on a mat", "Hello there"]);
    let differ = DifferBuilder::new().build();
    let diffs = differ.diff_files(left.path(), Some(right.path())).unwrap();
    let rendered: Vec<String> = diffs.iter().map(|d| differ.render(d)).collect();
    assert_eq!(
        rendered,
        vec![
            "the^ cat# sat^ on^ the# mat^\nthe^ dog# sat^ on^ a# mat^",
            "hello^ world#\nhello^ there#",
        ]
    );
}

#[test]
fn one_file_pairs_adjacent_lines() {
    let input = write_lines(&["a b c", "a c", "x", "y"]);
    let differ = DifferBuilder::new().build();
    let diffs = differ.diff_files(input.path(), None).unwrap();
    assert_eq!(diffs.len(), 2);
    assert_eq!(differ.render(&diffs[0]), "a^ b# c^\na^ c^");
    assert_eq!(differ.render(&diffs[1]), "x#\ny#");
}

#[test]
fn keep_case_and_custom_markers() {
    let input = write_lines(&["Hello world", "hello world"]);
    let differ = DifferBuilder::new()
        .fold_case(false)
        .matched_marker("+")
        .unmatched_marker("-")
        .build();
    let diffs = differ.diff_files(input.path(), None).unwrap();
    assert_eq!(differ.render(&diffs[0]), "Hello- world+\nhello- world+");
}

#[test]
fn mismatched_sentence_counts_are_reported() {
    let left = write_lines(&["a", "b"]);
    let right = write_lines(&["a"]);
    let err = DifferBuilder::new()
        .build()
        .diff_files(left.path(), Some(right.path()))
        .unwrap_err();
    assert!(matches!(
        err,
        DiffError::SentenceCountMismatch { left: 2, right: 1 }
    ));
}

#[test]
fn odd_sentence_count_is_reported() {
    let input = write_lines(&["a", "b", "c"]);
    let err = DifferBuilder::new()
        .build()
        .diff_files(input.path(), None)
        .unwrap_err();
    assert!(matches!(err, DiffError::OddSentenceCount { count: 3 }));
}

#[test]
fn missing_file_is_reported() {
    let present = write_lines(&["a"]);
    let err = DifferBuilder::new()
        .build()
        .diff_files(present.path(), Some(Path::new("/no/such/lcsdiff-input.txt")))
        .unwrap_err();
    match err {
        DiffError::Io { path, .. } => assert_eq!(path, Path::new("/no/such/lcsdiff-input.txt")),
        other => panic!("unexpected error: {other}"),
    }
}
