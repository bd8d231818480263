//! Text normalization for search comparisons.
//!
//! Every comparison in this crate happens between normalized strings:
//! lowercase ASCII letters, digits and spaces, with Latin diacritics folded
//! to their base letter ("Bambú" becomes "bambu").

use std::fmt;
use std::ops::{Deref, RangeInclusive};
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block, dropped after NFD decomposition.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Text in canonical comparable form.
///
/// Invariants: only `[a-z0-9 ]` characters, no leading or trailing space.
/// Runs of internal spaces are kept as they were in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Borrow the normalized string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split on single spaces, the way word matching sees the text.
    ///
    /// Consecutive spaces yield empty words, which is intentional: the
    /// normalizer does not collapse whitespace and neither does scoring.
    pub fn words(&self) -> std::str::Split<'_, char> {
        self.0.split(' ')
    }

    /// Consume into the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NormalizedText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Normalize arbitrary text for comparison.
///
/// Steps, in order: lowercase, NFD with combining marks removed, drop
/// anything outside `[a-z0-9 ]`, trim. Never fails; empty in, empty out.
///
/// # Example
/// ```
/// use ecrist_search::normalize;
///
/// assert_eq!(normalize("Cepillo de Bambú"), "cepillo de bambu");
/// assert_eq!(normalize("  ¡Café!  "), "cafe");
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' '))
        .collect();

    NormalizedText(folded.trim().to_string())
}
