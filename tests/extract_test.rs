//! Integration tests for file-to-file extraction.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run};
use tempfile::TempDir;
use undocx::{extract, extract_text, parse_file, Error};

/// Write a `.docx` with one paragraph per entry; `""` becomes an empty paragraph.
fn write_docx(path: &Path, texts: &[&str]) {
    let mut docx = Docx::new();
    for text in texts {
        let para = if text.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(*text))
        };
        docx = docx.add_paragraph(para);
    }
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    fs::write(path, buf.into_inner()).unwrap();
}

#[test]
fn test_title_and_body_scenario() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("report.docx");
    let dest = dir.path().join("doc_content.txt");
    write_docx(&source, &["Title", "", "  ", "Body text."]);

    extract(&source, &dest).unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "Title\nBody text.\n");
}

#[test]
fn test_line_count_and_order() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("long.docx");
    let dest = dir.path().join("long.txt");

    let texts: Vec<String> = (0..50)
        .map(|i| {
            if i % 3 == 0 {
                String::new()
            } else {
                format!("Paragraph {}", i)
            }
        })
        .collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    write_docx(&source, &refs);

    extract(&source, &dest).unwrap();

    let output = fs::read_to_string(&dest).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    let expected: Vec<&str> = refs.iter().copied().filter(|t| !t.trim().is_empty()).collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_untrimmed_text_survives_extraction() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("indent.docx");
    let dest = dir.path().join("indent.txt");
    write_docx(&source, &["  Indented ", "", "Plain"]);

    extract(&source, &dest).unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "  Indented \nPlain\n");
}

#[test]
fn test_empty_document_gives_empty_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("empty.docx");
    let dest = dir.path().join("empty.txt");
    write_docx(&source, &[]);

    extract(&source, &dest).unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), "");
}

#[test]
fn test_all_blank_document_gives_empty_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("blank.docx");
    let dest = dir.path().join("blank.txt");
    write_docx(&source, &["", "   ", ""]);

    extract(&source, &dest).unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), "");
}

#[test]
fn test_missing_source_reports_cause_and_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("missing.docx");
    let dest = dir.path().join("out.txt");

    let err = extract(&source, &dest).unwrap_err();

    assert!(!err.cause.is_empty());
    assert!(err.cause.starts_with("I/O error"));
    assert!(!dest.exists());
}

#[test]
fn test_corrupt_source_leaves_existing_output_untouched() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("corrupt.docx");
    let dest = dir.path().join("out.txt");
    fs::write(&source, b"this is not a word document").unwrap();
    fs::write(&dest, "previous run\n").unwrap();

    let err = extract(&source, &dest).unwrap_err();

    assert!(err.cause.contains("not a valid DOCX"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "previous run\n");
}

#[test]
fn test_unwritable_destination() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("report.docx");
    write_docx(&source, &["Title"]);
    let dest = dir.path().join("no_such_dir").join("out.txt");

    let err = extract(&source, &dest).unwrap_err();
    assert!(err.cause.starts_with("I/O error"));
}

#[test]
fn test_extraction_is_idempotent_and_truncates() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("report.docx");
    let dest = dir.path().join("out.txt");
    write_docx(&source, &["Alpha", "", "Beta"]);
    fs::write(&dest, "a much longer leftover file\nwith several\nlines\n").unwrap();

    extract(&source, &dest).unwrap();
    let first = fs::read_to_string(&dest).unwrap();
    extract(&source, &dest).unwrap();
    let second = fs::read_to_string(&dest).unwrap();

    assert_eq!(first, "Alpha\nBeta\n");
    assert_eq!(first, second);
}

#[test]
fn test_extract_text_matches_file_output() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("report.docx");
    let dest = dir.path().join("out.txt");
    write_docx(&source, &["One", "", "Two"]);

    extract(&source, &dest).unwrap();
    let text = extract_text(&source).unwrap();
    assert_eq!(text, fs::read_to_string(&dest).unwrap());
}

#[test]
fn test_parse_file_keeps_blank_paragraphs() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("report.docx");
    write_docx(&source, &["Title", "", "Body"]);

    let doc = parse_file(&source).unwrap();
    assert_eq!(doc.paragraph_count(), 3);
    assert_eq!(doc.non_blank_paragraphs().count(), 2);
}

#[test]
fn test_parse_file_rejects_other_formats() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("fake.docx");
    fs::write(&source, b"%PDF-1.7\n").unwrap();

    assert!(matches!(parse_file(&source), Err(Error::UnknownFormat)));
}
