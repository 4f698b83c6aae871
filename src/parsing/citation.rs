//! Citation grammar.
//!
//! A citation is a book name followed by a locator. Locators are matched
//! against an ordered table of notations; the first notation whose pattern
//! matches *and* whose builder accepts the numbers wins:
//!
//! | Notation | Locator | Example |
//! |----------|---------|---------|
//! | [`Notation::CrossChapter`] | `C:V-C:V` (end chapter later) | `Job 2:13-4:3` |
//! | [`Notation::SameChapterSpan`] | `C:V-C:V` (same chapter) | `Job 2:1-2:5` |
//! | [`Notation::ChapterVerse`] | `C:V` or `C:V-V` | `Genesis 3:1-8` |
//! | [`Notation::VerseToChapter`] | `V-C:V` (continuations only) | `32-12:2` |
//! | [`Notation::VerseOnly`] | `V` or `V-V` (continuations only) | `10`, `12-14` |
//!
//! Before matching, `3[1] Kings` numbering is rewritten, `.` between digits
//! becomes `:`, and en/em dashes become `-`. Comma (or semicolon) separated
//! parts after the first inherit its book and chapter. Each part parses on
//! its own, so one bad part does not cost its siblings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::debug;

use crate::catalog::registry::{rewrite_alternate_numbering, BookRegistry};
use crate::core::reference::{CanonicalReference, CitationContext, RawCitation};
use crate::utils::validation::{
    check_chapter_span, check_verse_span, collapse_whitespace, normalize_dashes,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Could not parse citation '{0}'")]
    Unrecognized(String),

    #[error("Citation '{0}' has no book name")]
    MissingBook(String),

    #[error("Invalid range in '{citation}': {reason}")]
    InvalidRange { citation: String, reason: String },
}

impl ParseError {
    /// The substring that failed to parse
    pub fn fragment(&self) -> &str {
        match self {
            Self::Unrecognized(s) | Self::MissingBook(s) => s,
            Self::InvalidRange { citation, .. } => citation,
        }
    }
}

/// Surface syntax of a locator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    CrossChapter,
    SameChapterSpan,
    ChapterVerse,
    VerseToChapter,
    VerseOnly,
}

/// Chapter/verse bounds of a locator, before a book is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Locator {
    start_chapter: u32,
    start_verse: u32,
    end_chapter: u32,
    end_verse: u32,
}

/// One entry of the grammar: pattern, notation and builder.
///
/// The builder receives the chapter inherited from context, if any. Rules
/// that need it are skipped for citations without context.
struct Rule {
    notation: Notation,
    needs_context: bool,
    pattern: &'static Lazy<Regex>,
    build: fn(&Captures<'_>, Option<u32>) -> Option<Locator>,
}

static TWO_CHAPTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)-(\d+):(\d+)$").unwrap());
static CHAPTER_VERSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+):(\d+)(?:-(\d+))?$").unwrap());
static VERSE_TO_CHAPTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+):(\d+)$").unwrap());
static VERSE_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)(?:-(\d+))?$").unwrap());

static PERIOD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\s*\.\s*(\d)").unwrap());

/// Book name and locator for names the registry does not know
static PERMISSIVE_BOOK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d*\s*\p{L}[\p{L}\d\s]*?)\s*(\d[\d:\-\s]*)$").unwrap());

/// Priority-ordered grammar; the first row whose builder accepts wins.
static RULES: &[Rule] = &[
    Rule {
        notation: Notation::CrossChapter,
        needs_context: false,
        pattern: &TWO_CHAPTER,
        build: build_cross_chapter,
    },
    Rule {
        notation: Notation::SameChapterSpan,
        needs_context: false,
        pattern: &TWO_CHAPTER,
        build: build_same_chapter_span,
    },
    Rule {
        notation: Notation::ChapterVerse,
        needs_context: false,
        pattern: &CHAPTER_VERSE,
        build: build_chapter_verse,
    },
    Rule {
        notation: Notation::VerseToChapter,
        needs_context: true,
        pattern: &VERSE_TO_CHAPTER,
        build: build_verse_to_chapter,
    },
    Rule {
        notation: Notation::VerseOnly,
        needs_context: true,
        pattern: &VERSE_ONLY,
        build: build_verse_only,
    },
];

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

fn build_cross_chapter(caps: &Captures<'_>, _: Option<u32>) -> Option<Locator> {
    let (c1, v1, c2, v2) = (number(caps, 1)?, number(caps, 2)?, number(caps, 3)?, number(caps, 4)?);
    (c2 > c1).then_some(Locator {
        start_chapter: c1,
        start_verse: v1,
        end_chapter: c2,
        end_verse: v2,
    })
}

fn build_same_chapter_span(caps: &Captures<'_>, _: Option<u32>) -> Option<Locator> {
    let (c1, v1, c2, v2) = (number(caps, 1)?, number(caps, 2)?, number(caps, 3)?, number(caps, 4)?);
    (c2 == c1).then_some(Locator {
        start_chapter: c1,
        start_verse: v1,
        end_chapter: c1,
        end_verse: v2,
    })
}

fn build_chapter_verse(caps: &Captures<'_>, _: Option<u32>) -> Option<Locator> {
    let chapter = number(caps, 1)?;
    let start = number(caps, 2)?;
    let end = match caps.get(3) {
        Some(_) => number(caps, 3)?,
        None => start,
    };
    Some(Locator {
        start_chapter: chapter,
        start_verse: start,
        end_chapter: chapter,
        end_verse: end,
    })
}

fn build_verse_to_chapter(caps: &Captures<'_>, chapter: Option<u32>) -> Option<Locator> {
    let chapter = chapter?;
    let (start, end_chapter, end) = (number(caps, 1)?, number(caps, 2)?, number(caps, 3)?);
    (end_chapter >= chapter).then_some(Locator {
        start_chapter: chapter,
        start_verse: start,
        end_chapter,
        end_verse: end,
    })
}

fn build_verse_only(caps: &Captures<'_>, chapter: Option<u32>) -> Option<Locator> {
    let chapter = chapter?;
    let start = number(caps, 1)?;
    let end = match caps.get(2) {
        Some(_) => number(caps, 2)?,
        None => start,
    };
    Some(Locator {
        start_chapter: chapter,
        start_verse: start,
        end_chapter: chapter,
        end_verse: end,
    })
}

/// Apply the alternate-numbering rewrite and separator normalization
#[must_use]
pub fn normalize_citation(citation: &str) -> String {
    let rewritten = rewrite_alternate_numbering(citation);
    let dashed = normalize_dashes(&rewritten);
    let coloned = PERIOD_SEPARATOR.replace_all(&dashed, "$1:$2");
    collapse_whitespace(&coloned)
}

fn has_book_name(part: &str) -> bool {
    part.chars().any(char::is_alphabetic)
}

/// Parses citations into canonical references against a book registry
pub struct CitationParser<'a> {
    registry: &'a BookRegistry,
}

impl<'a> CitationParser<'a> {
    pub fn new(registry: &'a BookRegistry) -> Self {
        Self { registry }
    }

    /// Parse a citation, which may be a comma-joined series.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` carrying the first offending part if any part
    /// of the series does not match the grammar. Use
    /// [`CitationParser::parse_parts`] to keep the parts that did parse.
    pub fn parse(&self, citation: &str) -> Result<Vec<CanonicalReference>, ParseError> {
        self.parse_series(citation, None).into_iter().collect()
    }

    /// Parse a citation that may lack a book name and fall back on its
    /// inherited context.
    ///
    /// # Errors
    ///
    /// Same as [`CitationParser::parse`]; `ParseError::MissingBook` if the
    /// citation has no book name and no context.
    pub fn parse_raw(&self, raw: &RawCitation) -> Result<Vec<CanonicalReference>, ParseError> {
        self.parse_parts(raw).into_iter().collect()
    }

    /// Parse every part of a series on its own, in order.
    ///
    /// A part that fails yields its `ParseError` in place; later parts keep
    /// the context of the last part that parsed.
    pub fn parse_parts(&self, raw: &RawCitation) -> Vec<Result<CanonicalReference, ParseError>> {
        self.parse_series(&raw.text, raw.context.clone())
    }

    /// Parse one chapter-less (or chapter-changing) part of a series.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the part matches no notation.
    pub fn parse_continuation(
        &self,
        part: &str,
        context: &CitationContext,
    ) -> Result<CanonicalReference, ParseError> {
        let locator: String = normalize_citation(part).split_whitespace().collect();
        let bounds = match_locator(&locator, Some(context.chapter), part)?;
        build_reference(&context.book, bounds, part)
    }

    /// Parse a single citation with a book name and no commas
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if no book name or locator can be extracted.
    pub fn parse_single(&self, citation: &str) -> Result<CanonicalReference, ParseError> {
        let normalized = normalize_citation(citation);
        let (book, locator) = self.split_book(&normalized)?;
        let bounds = match_locator(&locator, None, citation)?;
        build_reference(&book, bounds, citation)
    }

    fn parse_series(
        &self,
        citation: &str,
        mut context: Option<CitationContext>,
    ) -> Vec<Result<CanonicalReference, ParseError>> {
        let parts: Vec<&str> = citation
            .split([',', ';'])
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            return vec![Err(ParseError::Unrecognized(citation.trim().to_string()))];
        }

        let mut results = Vec::with_capacity(parts.len());
        for part in parts {
            let result = if has_book_name(part) {
                self.parse_single(part)
            } else if let Some(ctx) = &context {
                self.parse_continuation(part, ctx)
            } else {
                Err(ParseError::MissingBook(part.to_string()))
            };

            if let Ok(reference) = &result {
                context = Some(reference.context());
            }
            results.push(result);
        }

        debug!(
            citation = citation,
            parts = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "Parsed citation"
        );
        results
    }

    /// Split normalized text into (book name, locator without spaces).
    ///
    /// Tries the longest leading run of tokens first so multi-word names
    /// like "Song of Solomon" or "1 Kings" win over shorter prefixes.
    fn split_book(&self, text: &str) -> Result<(String, String), ParseError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        for n in (1..tokens.len()).rev() {
            let candidate = tokens[..n].join(" ");
            if let Ok(book) = self.registry.resolve(&candidate) {
                return Ok((book.name.clone(), tokens[n..].concat()));
            }
        }

        let caps = PERMISSIVE_BOOK
            .captures(text)
            .ok_or_else(|| ParseError::Unrecognized(text.to_string()))?;
        let raw_book = caps[1].trim();
        let locator: String = caps[2].split_whitespace().collect();

        // Registry may still know it when the locator was glued on ("Genesis3:1")
        let book = self
            .registry
            .resolve(raw_book)
            .map_or_else(|_| raw_book.to_string(), |b| b.name.clone());

        Ok((book, locator))
    }
}

fn match_locator(
    locator: &str,
    inherited_chapter: Option<u32>,
    citation: &str,
) -> Result<Locator, ParseError> {
    let invalid = |reason: String| ParseError::InvalidRange {
        citation: citation.trim().to_string(),
        reason,
    };
    let mut matched = None;

    for rule in RULES {
        if rule.needs_context && inherited_chapter.is_none() {
            continue;
        }
        let Some(caps) = rule.pattern.captures(locator) else {
            continue;
        };
        if let Some(n) = caps.iter().skip(1).flatten().find(|m| m.as_str().parse::<u32>().is_err()) {
            return Err(invalid(format!("number {} out of range", n.as_str())));
        }
        matched = Some(rule.notation);
        if let Some(bounds) = (rule.build)(&caps, inherited_chapter) {
            return Ok(bounds);
        }
    }

    match matched {
        Some(notation) => Err(invalid(format!("bounds out of order for {notation:?} notation"))),
        None => Err(ParseError::Unrecognized(citation.trim().to_string())),
    }
}

fn build_reference(
    book: &str,
    bounds: Locator,
    citation: &str,
) -> Result<CanonicalReference, ParseError> {
    let invalid = |reason: String| ParseError::InvalidRange {
        citation: citation.trim().to_string(),
        reason,
    };

    let reference = CanonicalReference::new(
        book,
        bounds.start_chapter,
        bounds.start_verse,
        bounds.end_chapter,
        bounds.end_verse,
    )
    .ok_or_else(|| invalid("chapters and verses must be positive and ascending".to_string()))?;

    let too_long = if reference.spans_chapters() {
        check_chapter_span(reference.start_chapter, reference.end_chapter)
    } else {
        check_verse_span(reference.start_verse, reference.end_verse)
    };
    if let Some(reason) = too_long {
        return Err(invalid(reason));
    }

    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BookRegistry {
        BookRegistry::load_embedded().unwrap()
    }

    fn reference(book: &str, c1: u32, v1: u32, c2: u32, v2: u32) -> CanonicalReference {
        CanonicalReference::new(book, c1, v1, c2, v2).unwrap()
    }

    #[test]
    fn test_parse_point_and_range() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Genesis 3:1").unwrap(),
            vec![reference("Genesis", 3, 1, 3, 1)]
        );
        assert_eq!(
            parser.parse("Genesis 3:1-8").unwrap(),
            vec![reference("Genesis", 3, 1, 3, 8)]
        );
    }

    #[test]
    fn test_parse_cross_chapter() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Job 2:13-4:3").unwrap(),
            vec![reference("Job", 2, 13, 4, 3)]
        );
    }

    #[test]
    fn test_same_chapter_span_is_single_chapter_range() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Job 2:1-2:5").unwrap(),
            vec![reference("Job", 2, 1, 2, 5)]
        );
    }

    #[test]
    fn test_alternate_kings_numbering_and_period_separator() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("3[1] Kings 2.6-14").unwrap(),
            parser.parse("1 Kings 2:6-14").unwrap()
        );
        assert_eq!(
            parser.parse("3[1] Kings 2.6-14").unwrap(),
            vec![reference("1 Kings", 2, 6, 2, 14)]
        );
    }

    #[test]
    fn test_multi_word_books() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Song of Solomon 2:8-14").unwrap(),
            vec![reference("Song of Solomon", 2, 8, 2, 14)]
        );
        assert_eq!(
            parser.parse("1 John 4:7").unwrap(),
            vec![reference("1 John", 4, 7, 4, 7)]
        );
        assert_eq!(
            parser.parse("Wisdom 3:1-9").unwrap(),
            vec![reference("Wisdom of Solomon", 3, 1, 3, 9)]
        );
    }

    #[test]
    fn test_comma_continuation() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Genesis 3:1-8, 10, 12-14").unwrap(),
            vec![
                reference("Genesis", 3, 1, 3, 8),
                reference("Genesis", 3, 10, 3, 10),
                reference("Genesis", 3, 12, 3, 14),
            ]
        );
    }

    #[test]
    fn test_comma_continuation_changes_chapter() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Matthew 10:1, 5-8, 11.1-3, 7").unwrap(),
            vec![
                reference("Matthew", 10, 1, 10, 1),
                reference("Matthew", 10, 5, 10, 8),
                reference("Matthew", 11, 1, 11, 3),
                reference("Matthew", 11, 7, 11, 7),
            ]
        );
    }

    #[test]
    fn test_continuation_after_cross_chapter_uses_end_chapter() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Job 2:13-4:3, 7").unwrap(),
            vec![reference("Job", 2, 13, 4, 3), reference("Job", 4, 7, 4, 7)]
        );
    }

    #[test]
    fn test_comma_part_with_new_book() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Genesis 1:1, Exodus 2:3").unwrap(),
            vec![reference("Genesis", 1, 1, 1, 1), reference("Exodus", 2, 3, 2, 3)]
        );
    }

    #[test]
    fn test_dashes_and_spacing() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Isaiah  1:1 – 20").unwrap(),
            vec![reference("Isaiah", 1, 1, 1, 20)]
        );
    }

    #[test]
    fn test_unknown_book_is_kept_for_resolution() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(parser.parse("Foo 1:1").unwrap(), vec![reference("Foo", 1, 1, 1, 1)]);
    }

    #[test]
    fn test_glued_locator() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Genesis3:1").unwrap(),
            vec![reference("Genesis", 3, 1, 3, 1)]
        );
    }

    #[test]
    fn test_parse_failures() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert!(matches!(
            parser.parse("Genesis"),
            Err(ParseError::Unrecognized(_))
        ));
        assert!(matches!(
            parser.parse("Genesis three"),
            Err(ParseError::Unrecognized(_))
        ));
        assert!(matches!(
            parser.parse("3:1-8"),
            Err(ParseError::MissingBook(_))
        ));
        assert!(matches!(
            parser.parse("Genesis 3:8-1"),
            Err(ParseError::InvalidRange { .. })
        ));
        assert!(matches!(
            parser.parse("Job 4:1-2:3"),
            Err(ParseError::InvalidRange { .. })
        ));
        assert!(matches!(
            parser.parse("Genesis 0:1"),
            Err(ParseError::InvalidRange { .. })
        ));
        assert!(matches!(
            parser.parse("Psalms 1:1-5000"),
            Err(ParseError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_oversized_numbers_and_spans() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        let err = parser.parse("Genesis 3:99999999999").unwrap_err();
        assert!(
            matches!(&err, ParseError::InvalidRange { reason, .. } if reason == "number 99999999999 out of range"),
            "{err:?}"
        );

        for citation in ["Psalms 1:1-4000000000:1", "Psalms 1:1-200:1"] {
            assert!(
                matches!(parser.parse(citation), Err(ParseError::InvalidRange { .. })),
                "{citation}"
            );
        }
        assert_eq!(
            parser.parse("Psalms 1:1-151:7").unwrap(),
            vec![reference("Psalms", 1, 1, 151, 7)]
        );
    }

    #[test]
    fn test_continuation_into_later_chapter() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        assert_eq!(
            parser.parse("Hebrews 11:24-26, 32-12:2").unwrap(),
            vec![
                reference("Hebrews", 11, 24, 11, 26),
                reference("Hebrews", 11, 32, 12, 2),
            ]
        );
        // Needs a chapter to start from
        assert!(matches!(
            parser.parse("Hebrews 32-12:2"),
            Err(ParseError::Unrecognized(_))
        ));
        assert!(matches!(
            parser.parse("Hebrews 11:1, 32-10:2"),
            Err(ParseError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_bad_part_keeps_its_siblings() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        let parts = parser.parse_parts(&RawCitation::new("Genesis 3:1-8, x:y, 10"));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], Ok(reference("Genesis", 3, 1, 3, 8)));
        assert_eq!(parts[1], Err(ParseError::Unrecognized("x:y".to_string())));
        assert_eq!(parts[2], Ok(reference("Genesis", 3, 10, 3, 10)));
    }

    #[test]
    fn test_failure_carries_fragment() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        let err = parser.parse("Genesis 3:1-8, 10, x:y").unwrap_err();
        assert_eq!(err.fragment(), "x:y");
    }

    #[test]
    fn test_parse_raw_with_context() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        let raw = RawCitation::new("5:1-3").with_context(CitationContext {
            book: "Isaiah".to_string(),
            chapter: 4,
        });
        assert_eq!(
            parser.parse_raw(&raw).unwrap(),
            vec![reference("Isaiah", 5, 1, 5, 3)]
        );

        let raw = RawCitation::new("7").with_context(CitationContext {
            book: "Isaiah".to_string(),
            chapter: 4,
        });
        assert_eq!(
            parser.parse_raw(&raw).unwrap(),
            vec![reference("Isaiah", 4, 7, 4, 7)]
        );
    }

    #[test]
    fn test_header_round_trip() {
        let registry = registry();
        let parser = CitationParser::new(&registry);

        for citation in ["Genesis 3:1", "Genesis 3:1-8", "Song of Solomon 2:8-14", "3[1] Kings 2.6-14"] {
            let parsed = parser.parse(citation).unwrap();
            let header = parsed[0].to_string();
            assert_eq!(parser.parse(&header).unwrap(), parsed, "{citation}");
        }
    }
}
