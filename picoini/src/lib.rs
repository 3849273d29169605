// SPDX-License-Identifier: Apache-2.0

//! A resource-constrained INI parser.
//!
//! Two consumers share one line-classification core:
//! - [`Document`] parses a whole buffer into a queryable in-memory model
//!   (ordered sections, each an ordered list of key/value pairs).
//! - [`dispatch`] streams classified lines to a caller-supplied handler
//!   without retaining anything, allocation-free.
//!
//! Logical lines are bounded by [`MAX_LINE_LENGTH`]; over-long lines are
//! truncated, never rejected, so memory use stays predictable regardless
//! of input.
//!
//! # Example
//! ```
//! use picoini::Document;
//!
//! let doc = Document::parse("[server]\nhost = example.org\n").unwrap();
//! assert_eq!(doc.get_value("server", "host"), Some("example.org"));
//! ```

#![cfg_attr(not(test), no_std)]

// The document tree is the only heap consumer; scanning, classification
// and streaming dispatch all run on borrowed slices.
extern crate alloc;

mod case_fold;
pub use case_fold::CaseMode;

mod line_scanner;
pub use line_scanner::MAX_LINE_LENGTH;

mod classifier;

mod parse_error;
pub use parse_error::BuildError;

mod document;
pub use document::{Document, Section};

mod stream;
pub use stream::{dispatch, dispatch_from_slice, Dispatch, StreamEvent};
