use serde::{Deserialize, Serialize};

/// A normalized scripture reference: a contiguous run of verses in one book.
///
/// The header form produced by `Display` parses back to the same reference:
///
/// | Shape | Header |
/// |-------|--------|
/// | point | `Genesis 3:1` |
/// | single-chapter range | `Genesis 3:1-8` |
/// | cross-chapter span | `Job 2:13-4:3` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalReference {
    /// Registry name of the book (or the raw name when it was not recognized)
    pub book: String,
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
}

impl CanonicalReference {
    /// Build a reference, returning `None` if the bounds are not ordered or
    /// any number is zero.
    #[must_use]
    pub fn new(
        book: impl Into<String>,
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
    ) -> Option<Self> {
        if start_chapter == 0 || start_verse == 0 || end_chapter == 0 || end_verse == 0 {
            return None;
        }
        if end_chapter < start_chapter
            || (end_chapter == start_chapter && end_verse < start_verse)
        {
            return None;
        }

        Some(Self {
            book: book.into(),
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        })
    }

    /// A single verse
    #[must_use]
    pub fn point(book: impl Into<String>, chapter: u32, verse: u32) -> Option<Self> {
        Self::new(book, chapter, verse, chapter, verse)
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start_chapter == self.end_chapter && self.start_verse == self.end_verse
    }

    #[must_use]
    pub fn spans_chapters(&self) -> bool {
        self.end_chapter > self.start_chapter
    }

    /// Number of verses requested, for single-chapter references only
    #[must_use]
    pub fn verse_count(&self) -> Option<u32> {
        if self.spans_chapters() {
            None
        } else {
            Some(self.end_verse - self.start_verse + 1)
        }
    }

    /// The (book, chapter) a following comma continuation inherits
    #[must_use]
    pub fn context(&self) -> CitationContext {
        CitationContext {
            book: self.book.clone(),
            chapter: self.end_chapter,
        }
    }
}

impl std::fmt::Display for CanonicalReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.spans_chapters() {
            write!(
                f,
                "{} {}:{}-{}:{}",
                self.book, self.start_chapter, self.start_verse, self.end_chapter, self.end_verse
            )
        } else if self.is_point() {
            write!(f, "{} {}:{}", self.book, self.start_chapter, self.start_verse)
        } else {
            write!(
                f,
                "{} {}:{}-{}",
                self.book, self.start_chapter, self.start_verse, self.end_verse
            )
        }
    }
}

/// Book and chapter carried forward from the previous citation in a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationContext {
    pub book: String,
    pub chapter: u32,
}

/// A citation substring together with the context it may inherit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCitation {
    pub text: String,
    pub context: Option<CitationContext>,
}

impl RawCitation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: CitationContext) -> Self {
        self.context = Some(context);
        self
    }
}
