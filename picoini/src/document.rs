// SPDX-License-Identifier: Apache-2.0

//! The in-memory document model and its builder.

use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::case_fold::{names_equal, CaseMode};
use crate::classifier::{classify, Line};
use crate::line_scanner::{floor_char_boundary, LineScanner};
use crate::parse_error::BuildError;

/// One key/value pair. The value may be empty; the key never is.
#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
}

/// A named group of key/value pairs, in insertion order.
#[derive(Debug)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    /// The trimmed section name, as it first appeared in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates the section's `(key, value)` pairs in source order.
    /// Duplicate keys appear as often as they occurred.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.key.as_str(), e.value.as_str()))
    }
}

/// An INI document: an ordered sequence of [`Section`]s.
///
/// Duplicate section headers are appended as separate nodes, never merged;
/// name lookup resolves the first match. Within a section, duplicate keys
/// are all kept and value lookup resolves the last one.
///
/// A fully built `Document` is immutable apart from [`clear`](Self::clear),
/// so concurrent read-only queries are safe.
#[derive(Debug)]
pub struct Document {
    sections: Vec<Section>,
    case_mode: CaseMode,
}

impl Document {
    /// Parses a whole buffer into a document, comparing names with
    /// [`CaseMode::DEFAULT`].
    ///
    /// Comment, empty and malformed lines are skipped; key/value lines
    /// seen before any section header are parsed and discarded. Fails if
    /// the input is empty or contributes no section and no attachable
    /// key/value pair.
    pub fn parse(input: &str) -> Result<Self, BuildError> {
        Self::parse_with_case(input, CaseMode::DEFAULT)
    }

    /// Like [`parse`](Self::parse) with an explicit comparison mode.
    pub fn parse_with_case(input: &str, case_mode: CaseMode) -> Result<Self, BuildError> {
        if input.is_empty() {
            return Err(BuildError::EmptyInput);
        }
        let mut sections: Vec<Section> = Vec::new();
        let mut structured = false;
        for line in LineScanner::new(input) {
            match classify(line) {
                Line::Section(name) => {
                    sections.try_reserve(1)?;
                    sections.push(Section {
                        name: try_owned(name)?,
                        entries: Vec::new(),
                    });
                    structured = true;
                }
                Line::KeyValue { key, value } => {
                    // The current section is always the most recently
                    // appended one.
                    match sections.last_mut() {
                        Some(current) => {
                            current.entries.try_reserve(1)?;
                            current.entries.push(Entry {
                                key: try_owned(key)?,
                                value: try_owned(value)?,
                            });
                            structured = true;
                        }
                        None => {
                            debug!("discarding key {key:?} before first section");
                        }
                    }
                }
                Line::Invalid(raw) => {
                    debug!("skipping malformed line {raw:?}");
                }
                Line::Comment(_) | Line::Empty => {}
            }
        }
        if !structured {
            return Err(BuildError::NoStructuredContent);
        }
        Ok(Document { sections, case_mode })
    }

    /// Parses from raw bytes, validating UTF-8 first.
    pub fn from_slice(input: &[u8]) -> Result<Self, BuildError> {
        Self::parse(core::str::from_utf8(input)?)
    }

    /// True iff a section with this name exists.
    pub fn has_section(&self, name: &str) -> bool {
        self.find_section(name).is_some()
    }

    /// True iff the named section exists and holds at least one pair with
    /// this key.
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.find_section(section)
            .is_some_and(|s| s.entries.iter().any(|e| self.key_matches(e, key)))
    }

    /// Looks up a value. With duplicate keys the last-inserted pair wins.
    ///
    /// Returns `None` both when the section is missing and when the key is
    /// missing inside an existing section; the two are not distinguished.
    pub fn get_value(&self, section: &str, key: &str) -> Option<&str> {
        let s = self.find_section(section)?;
        s.entries
            .iter()
            .rev()
            .find(|e| self.key_matches(e, key))
            .map(|e| e.value.as_str())
    }

    /// Copies the looked-up value into `out`, truncating to fit (at a
    /// character boundary) and never overrunning. Returns the number of
    /// bytes written, or `None` when the lookup fails.
    pub fn get_value_into(&self, section: &str, key: &str, out: &mut [u8]) -> Option<usize> {
        let value = self.get_value(section, key)?;
        let n = floor_char_boundary(value, out.len());
        out[..n].copy_from_slice(&value.as_bytes()[..n]);
        Some(n)
    }

    /// True iff the key resolves and its value is non-empty after trimming.
    pub fn has_value(&self, section: &str, key: &str) -> bool {
        self.get_value(section, key)
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Iterates sections in order of first appearance.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Releases the whole section tree in one pass, leaving an empty
    /// document behind. Safe to call any number of times; dropping the
    /// document releases it implicitly.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| names_equal(&s.name, name, self.case_mode))
    }

    fn key_matches(&self, entry: &Entry, key: &str) -> bool {
        names_equal(&entry.key, key, self.case_mode)
    }
}

/// Copies a borrowed slice into an owned string without aborting on
/// allocation failure.
fn try_owned(s: &str) -> Result<String, BuildError> {
    let mut out = String::new();
    out.try_reserve(s.len())?;
    out.push_str(s);
    Ok(out)
}
