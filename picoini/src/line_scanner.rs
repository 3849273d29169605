// SPDX-License-Identifier: Apache-2.0

/// Maximum size of one logical line in bytes, terminator included.
///
/// A logical line therefore carries at most `MAX_LINE_LENGTH - 1` bytes of
/// content. Input past the cap is not rejected: the line is cut at the cap
/// and the remainder continues as the next logical line.
pub const MAX_LINE_LENGTH: usize = 256;

const LINE_CAP: usize = MAX_LINE_LENGTH - 1;

/// Splits a buffer into logical lines.
///
/// A logical line ends at `\n`, `\r\n`, a lone `\r`, or the line cap.
/// Terminators are not part of the yielded line. The scanner never looks
/// past the end of the input and holds no state besides the unscanned tail,
/// so it is cheap to restart by constructing a fresh one.
#[derive(Debug, Clone)]
pub(crate) struct LineScanner<'a> {
    rest: &'a str,
}

impl<'a> LineScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let window = floor_char_boundary(self.rest, LINE_CAP);
        let bytes = self.rest.as_bytes();
        for (i, &b) in bytes[..window].iter().enumerate() {
            if b == b'\n' || b == b'\r' {
                let line = &self.rest[..i];
                // \r\n counts as one terminator
                let skip = if b == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = &self.rest[i + skip..];
                return Some(line);
            }
        }
        // No terminator inside the window: either the whole input is one
        // line, or the cap delimits it and the tail becomes the next line.
        let line = &self.rest[..window];
        let mut rest = &self.rest[window..];
        // a terminator sitting right at the cap still belongs to this line
        let tail = rest.as_bytes();
        if tail.first() == Some(&b'\r') && tail.get(1) == Some(&b'\n') {
            rest = &rest[2..];
        } else if matches!(tail.first(), Some(&b'\n') | Some(&b'\r')) {
            rest = &rest[1..];
        }
        self.rest = rest;
        Some(line)
    }
}

/// Largest index `<= max` that falls on a UTF-8 character boundary of `s`.
pub(crate) fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    let mut i = max;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
