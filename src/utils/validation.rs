//! Centralized limits and small input helpers.

use std::borrow::Cow;

/// Maximum number of verses a single-chapter citation may request
pub const MAX_VERSES_PER_CITATION: u32 = 1_000;

/// Maximum number of chapters a cross-chapter citation may cross.
///
/// The longest book (Psalms) has 151 chapters.
pub const MAX_CHAPTERS_PER_CITATION: u32 = 151;

/// Whether a split-off segment is a bare number left over from a malformed field.
///
/// # Examples
///
/// ```
/// use orthofetch::utils::validation::is_numeric_artifact;
///
/// assert!(is_numeric_artifact("17"));
/// assert!(!is_numeric_artifact("17:1"));
/// assert!(!is_numeric_artifact(""));
/// ```
#[must_use]
pub fn is_numeric_artifact(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Check whether a single-chapter span fits the verse limit.
///
/// Returns an error message if the span is too long, None if acceptable.
#[must_use]
pub fn check_verse_span(start_verse: u32, end_verse: u32) -> Option<String> {
    let count = end_verse.saturating_sub(start_verse).saturating_add(1);
    if count > MAX_VERSES_PER_CITATION {
        Some(format!(
            "Range of {count} verses exceeds maximum of {MAX_VERSES_PER_CITATION}"
        ))
    } else {
        None
    }
}

/// Check whether a cross-chapter span fits the chapter limit.
///
/// Returns an error message if the span is too long, None if acceptable.
#[must_use]
pub fn check_chapter_span(start_chapter: u32, end_chapter: u32) -> Option<String> {
    let count = end_chapter.saturating_sub(start_chapter).saturating_add(1);
    if count > MAX_CHAPTERS_PER_CITATION {
        Some(format!(
            "Span of {count} chapters exceeds maximum of {MAX_CHAPTERS_PER_CITATION}"
        ))
    } else {
        None
    }
}

/// Replace en and em dashes with ASCII hyphens
#[must_use]
pub fn normalize_dashes(s: &str) -> Cow<'_, str> {
    if s.contains(['–', '—']) {
        Cow::Owned(s.replace(['–', '—'], "-"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Collapse runs of whitespace to single spaces and trim
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
