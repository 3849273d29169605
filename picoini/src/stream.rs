// SPDX-License-Identifier: Apache-2.0

//! Streaming dispatch: classify lines and hand them to a caller-supplied
//! handler without building a model. The whole pass is one bounded linear
//! scan and allocates nothing.

use crate::classifier::{classify, Line};
use crate::line_scanner::LineScanner;

/// One streamed parse event. All payloads borrow from the input buffer.
#[derive(Debug, PartialEq, Eq)]
pub enum StreamEvent<'a> {
    /// A section header; `name` also becomes the current section for
    /// subsequent key/value events.
    Section { name: &'a str },
    /// A key/value pair. `section` is the most recent section header, or
    /// `""` when none has been seen yet.
    KeyValue {
        section: &'a str,
        key: &'a str,
        value: &'a str,
    },
    /// A comment line, marker included, untrimmed.
    Comment { raw: &'a str },
    /// A malformed line, reported verbatim. The handler decides whether
    /// to carry on.
    Error { raw: &'a str },
}

/// Outcome of a streaming pass.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Every line was scanned.
    Completed,
    /// The handler returned `false`; scanning stopped immediately.
    Aborted,
}

/// Scans `input` line by line and invokes `handler` for every classified
/// line except empty ones.
///
/// The handler returns `true` to continue; `false` halts the scan before
/// the next line is read and yields [`Dispatch::Aborted`]. Empty input
/// completes trivially with zero handler invocations.
///
/// The current-section state lives only for the duration of the call;
/// separate dispatches are independent.
///
/// # Example
/// ```
/// use picoini::{dispatch, Dispatch, StreamEvent};
///
/// let mut keys = 0;
/// let result = dispatch("[s]\na=1\nb=2\n", |event| {
///     if let StreamEvent::KeyValue { .. } = event {
///         keys += 1;
///     }
///     true
/// });
/// assert_eq!(result, Dispatch::Completed);
/// assert_eq!(keys, 2);
/// ```
pub fn dispatch<F>(input: &str, mut handler: F) -> Dispatch
where
    F: FnMut(StreamEvent<'_>) -> bool,
{
    let mut current_section = "";
    for line in LineScanner::new(input) {
        let event = match classify(line) {
            Line::Empty => continue,
            Line::Section(name) => {
                current_section = name;
                StreamEvent::Section { name }
            }
            Line::KeyValue { key, value } => StreamEvent::KeyValue {
                section: current_section,
                key,
                value,
            },
            Line::Comment(raw) => StreamEvent::Comment { raw },
            Line::Invalid(raw) => StreamEvent::Error { raw },
        };
        if !handler(event) {
            return Dispatch::Aborted;
        }
    }
    Dispatch::Completed
}

/// [`dispatch`] over raw bytes; the buffer is UTF-8 validated up front.
pub fn dispatch_from_slice<F>(
    input: &[u8],
    handler: F,
) -> Result<Dispatch, core::str::Utf8Error>
where
    F: FnMut(StreamEvent<'_>) -> bool,
{
    Ok(dispatch(core::str::from_utf8(input)?, handler))
}
