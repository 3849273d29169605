// SPDX-License-Identifier: Apache-2.0

//! Line classification shared by the document builder and the stream
//! dispatcher.

/// One classified logical line.
///
/// All payloads borrow from the input line; classification allocates
/// nothing.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// Whitespace only.
    Empty,
    /// A `;` or `#` line; the payload is the whole original line, marker
    /// included.
    Comment(&'a str),
    /// A bracketed header; the payload is the trimmed section name.
    Section(&'a str),
    /// A key/value pair, both sides trimmed. The value keeps inline
    /// comment markers and any separators after the first one verbatim.
    KeyValue { key: &'a str, value: &'a str },
    /// A line that fits no category; the raw line is kept for reporting.
    Invalid(&'a str),
}

/// Classifies one logical line (terminators already stripped).
///
/// Category order: empty, comment, section, key/value. A section needs a
/// closing `]` on the same line and a non-empty trimmed name. A key/value
/// splits at the first `=` or `:`, whichever comes first, and needs a
/// non-empty trimmed key.
pub(crate) fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Line::Empty;
    }
    match trimmed.as_bytes()[0] {
        b';' | b'#' => Line::Comment(line),
        b'[' => {
            let body = &trimmed[1..];
            match body.find(']') {
                Some(end) => {
                    let name = body[..end].trim();
                    if name.is_empty() {
                        Line::Invalid(line)
                    } else {
                        Line::Section(name)
                    }
                }
                // No forgiving partial match: an unclosed bracket is a
                // bad line, not a section.
                None => Line::Invalid(line),
            }
        }
        _ => match trimmed.find(['=', ':']) {
            Some(sep) => {
                let key = trimmed[..sep].trim();
                if key.is_empty() {
                    return Line::Invalid(line);
                }
                let value = trimmed[sep + 1..].trim();
                if cfg!(feature = "reject-empty-values") && value.is_empty() {
                    return Line::Invalid(line);
                }
                Line::KeyValue { key, value }
            }
            None => Line::Invalid(line),
        },
    }
}
