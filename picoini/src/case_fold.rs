// SPDX-License-Identifier: Apache-2.0

/// How section and key names are compared.
///
/// The default is picked at compile time by the `case-sensitive` cargo
/// feature, but the mode is always threaded through explicitly; nothing in
/// the crate consults the feature behind a comparison's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    /// Byte-wise ASCII case-insensitive comparison. Non-ASCII bytes must
    /// match exactly; there is no Unicode folding.
    Insensitive,
    /// Byte-exact comparison.
    Sensitive,
}

impl CaseMode {
    /// Compile-time default: [`CaseMode::Sensitive`] iff the
    /// `case-sensitive` feature is enabled.
    pub const DEFAULT: CaseMode = if cfg!(feature = "case-sensitive") {
        CaseMode::Sensitive
    } else {
        CaseMode::Insensitive
    };
}

impl Default for CaseMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Compares two names under the given mode.
pub(crate) fn names_equal(a: &str, b: &str, mode: CaseMode) -> bool {
    match mode {
        CaseMode::Sensitive => a == b,
        CaseMode::Insensitive => a.eq_ignore_ascii_case(b),
    }
}
