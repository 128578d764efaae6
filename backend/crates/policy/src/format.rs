//! Password Format Rules
//!
//! Hard format checks: length 9-16, upper/lower/digit/symbol required,
//! no whitespace, printable ASCII only. Each condition is exposed as a
//! separate flag so form UIs can hint at the first unmet rule.

/// 記号として許可する文字
pub const ALLOWED_SYMBOLS: &str = "^$+-*/|()[]{}<>.,?!_=&@~%#:;'\"";

/// Minimum candidate length in characters
pub const MIN_LENGTH: usize = 9;

/// Maximum candidate length in characters
pub const MAX_LENGTH: usize = 16;

/// Result of the character-class scan
///
/// The candidate is format-valid only when every flag holds. There is
/// no partial credit; flags exist for UI hinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCheck {
    /// Length is within 9-16 characters
    pub length_ok: bool,
    /// At least one ASCII uppercase letter
    pub has_upper: bool,
    /// At least one ASCII lowercase letter
    pub has_lower: bool,
    /// At least one decimal digit
    pub has_digit: bool,
    /// At least one symbol from [`ALLOWED_SYMBOLS`]
    pub has_symbol: bool,
    /// No whitespace of any kind
    pub no_space: bool,
    /// Printable ASCII only; any other character is an automatic reject
    pub ascii_only: bool,
}

impl FormatCheck {
    pub fn is_valid(&self) -> bool {
        self.length_ok
            && self.has_upper
            && self.has_lower
            && self.has_digit
            && self.has_symbol
            && self.no_space
            && self.ascii_only
    }
}

/// Scan a candidate against the hard format rules
///
/// Pure character-class scan with no locale sensitivity; letter, digit
/// and symbol classes are ASCII-only.
pub fn check_format(candidate: &str) -> FormatCheck {
    let len = candidate.chars().count();
    FormatCheck {
        length_ok: (MIN_LENGTH..=MAX_LENGTH).contains(&len),
        has_upper: candidate.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: candidate.chars().any(|c| c.is_ascii_lowercase()),
        has_digit: candidate.chars().any(|c| c.is_ascii_digit()),
        has_symbol: candidate.chars().any(|c| ALLOWED_SYMBOLS.contains(c)),
        no_space: !candidate.chars().any(|c| c.is_whitespace()),
        ascii_only: kernel::text::is_printable_ascii(candidate),
    }
}
