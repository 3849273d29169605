// SPDX-License-Identifier: Apache-2.0

// Document API coverage over the public entry points.

use picoini::{BuildError, Document, MAX_LINE_LENGTH};

#[test]
fn test_empty_content_fails() {
    assert_eq!(Document::parse("").unwrap_err(), BuildError::EmptyInput);
}

#[test]
fn test_content_without_structure_fails() {
    let content = "\n; only a comment\n# and another\n\n";
    assert_eq!(
        Document::parse(content).unwrap_err(),
        BuildError::NoStructuredContent
    );
}

#[test]
fn test_parses_basic_structure() {
    let content = "[section1]\nkey1=value1\n[section2]\nkey2=value2\n";
    let doc = Document::parse(content).unwrap();

    assert!(doc.has_section("section1"));
    assert!(doc.has_section("section2"));
    assert!(!doc.has_section("section3"));
}

#[test]
fn test_handles_whitespace() {
    let content = "  [  section1  ]  \n  key1  =  value1  \nkey2=  \n";
    let doc = Document::parse(content).unwrap();

    assert!(doc.has_section("section1"));
    assert_eq!(doc.get_value("section1", "key1"), Some("value1"));

    assert!(doc.has_key("section1", "key2"));
    assert!(!doc.has_value("section1", "key2"));
}

#[test]
fn test_handles_comments_and_empty_lines() {
    let content = "\n; Comment line\n# Another comment\n[section1]\n\
                   key1=value1 ; inline comment\n\n[section2]\n";
    let doc = Document::parse(content).unwrap();

    assert!(doc.has_section("section1"));
    assert!(doc.has_section("section2"));
    // inline comment markers are part of the value
    assert_eq!(
        doc.get_value("section1", "key1"),
        Some("value1 ; inline comment")
    );
}

#[test]
fn test_case_insensitive_by_default() {
    let content = "[Section1]\nKey1=Value1\n";
    let doc = Document::parse(content).unwrap();

    assert!(doc.has_section("sEcTiOn1"));
    assert!(doc.has_key("SECTION1", "kEy1"));
    assert_eq!(doc.get_value("section1", "KEY1"), Some("Value1"));
}

#[test]
fn test_handles_special_characters() {
    let content = "[section!@#]\nkey$%^=value&*()\nescaped_key=\"quoted value\"\n";
    let doc = Document::parse(content).unwrap();

    assert_eq!(doc.get_value("section!@#", "key$%^"), Some("value&*()"));
    assert_eq!(
        doc.get_value("section!@#", "escaped_key"),
        Some("\"quoted value\"")
    );
}

#[test]
fn test_duplicate_keys_last_one_wins() {
    let content = "[section1]\nkey1=first\nkey1=second\n";
    let doc = Document::parse(content).unwrap();

    assert_eq!(doc.get_value("section1", "key1"), Some("second"));
    assert!(doc.has_key("section1", "key1"));
}

#[test]
fn test_handles_long_lines() {
    // stays under the line cap: fully preserved
    let long_key = "a".repeat(MAX_LINE_LENGTH - 10);
    let long_value = "b".repeat(MAX_LINE_LENGTH - 10);
    let content = format!("[section1]\n{long_key}={long_value}\n");
    let doc = Document::parse(&content).unwrap();

    // the key/value line exceeds the cap, so it is cut at the cap; the key
    // survives intact and the value keeps what fit on the logical line
    assert!(doc.has_key("section1", &long_key));
}

#[test]
fn test_over_long_line_is_truncated_not_rejected() {
    let long_value = "v".repeat(MAX_LINE_LENGTH * 2);
    let content = format!("[s]\nkey={long_value}\nnext=1\n");
    let doc = Document::parse(&content).unwrap();

    let got = doc.get_value("s", "key").unwrap();
    assert_eq!(got.len(), MAX_LINE_LENGTH - 1 - "key=".len());
    // scanning resumes cleanly after the truncated line
    assert_eq!(doc.get_value("s", "next"), Some("1"));
}

#[test]
fn test_get_value_into_truncates_never_overruns() {
    let content = "[section1]\nkey1=value1\n";
    let doc = Document::parse(content).unwrap();

    let mut buf = [0u8; 3];
    let n = doc.get_value_into("section1", "key1", &mut buf).unwrap();
    assert_eq!(&buf[..n], b"val");

    let mut big = [0u8; 64];
    let n = doc.get_value_into("section1", "key1", &mut big).unwrap();
    assert_eq!(&big[..n], b"value1");

    let mut empty = [0u8; 0];
    assert_eq!(doc.get_value_into("section1", "key1", &mut empty), Some(0));

    assert_eq!(doc.get_value_into("section1", "missing", &mut big), None);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let content = "[section1\nkey1\n=value1\nkey2:value2\n[section2]\nkey3=value3\n";
    let doc = Document::parse(content).unwrap();

    // unclosed bracket never became a section
    assert!(!doc.has_section("section1"));
    assert!(doc.has_section("section2"));
    assert_eq!(doc.get_value("section2", "key3"), Some("value3"));
}

#[test]
fn test_colon_separator() {
    let doc = Document::parse("[s]\nhost: example.org\n").unwrap();
    assert_eq!(doc.get_value("s", "host"), Some("example.org"));
}

#[test]
fn test_empty_values() {
    let content = "[section1]\nempty1=\nempty2=  \nvalid=value\n";
    let doc = Document::parse(content).unwrap();

    assert!(doc.has_key("section1", "empty1"));
    assert!(!doc.has_value("section1", "empty1"));

    assert!(doc.has_key("section1", "empty2"));
    assert!(!doc.has_value("section1", "empty2"));

    assert!(doc.has_value("section1", "valid"));
}

#[test]
fn test_multi_section_operations() {
    let content = "[sectionA]\nkey1=value1\n[sectionB]\nkey1=value2\n";
    let doc = Document::parse(content).unwrap();

    assert_eq!(doc.get_value("sectionA", "key1"), Some("value1"));
    assert_eq!(doc.get_value("sectionB", "key1"), Some("value2"));
}

#[test]
fn test_crlf_and_lf_parse_identically() {
    let lf = Document::parse("[s]\nk=v\n").unwrap();
    let crlf = Document::parse("[s]\r\nk=v\r\n").unwrap();

    for doc in [&lf, &crlf] {
        assert_eq!(doc.sections().count(), 1);
        let section = doc.sections().next().unwrap();
        assert_eq!(section.name(), "s");
        assert_eq!(section.entries().collect::<Vec<_>>(), [("k", "v")]);
    }
}

#[test]
fn test_release_twice_is_safe() {
    let mut doc = Document::parse("[s]\nk=v\n").unwrap();
    doc.clear();
    doc.clear();
    assert!(!doc.has_section("s"));
}
