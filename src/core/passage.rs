use serde::{Deserialize, Serialize};

/// Placeholder emitted for a requested verse that the store does not have
pub const VERSE_NOT_FOUND: &str = "[verse not found]";

/// One verse of a chapter as held in the verse store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

/// All verses of one book and chapter, in store order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterRecord {
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

impl ChapterRecord {
    pub fn new(chapter: u32, verses: Vec<Verse>) -> Self {
        Self { chapter, verses }
    }

    /// Text of the first verse carrying this number
    pub fn verse(&self, number: u32) -> Option<&str> {
        self.verses
            .iter()
            .find(|v| v.number == number)
            .map(|v| v.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}

/// A single output line of a resolved passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseLine {
    /// Chapter the verse belongs to
    pub chapter: u32,

    pub verse: u32,

    /// Verse text, `None` if the store lacks the verse
    pub text: Option<String>,
}

impl VerseLine {
    pub fn found(chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            chapter,
            verse,
            text: Some(text.into()),
        }
    }

    pub fn missing(chapter: u32, verse: u32) -> Self {
        Self {
            chapter,
            verse,
            text: None,
        }
    }

    /// Verse text, or the not-found placeholder
    pub fn text_or_placeholder(&self) -> &str {
        self.text.as_deref().unwrap_or(VERSE_NOT_FOUND)
    }
}

impl std::fmt::Display for VerseLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.verse, self.text_or_placeholder())
    }
}

/// The verse text a canonical reference denotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPassage {
    pub header: String,
    pub lines: Vec<VerseLine>,
}

impl ResolvedPassage {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            lines: Vec::new(),
        }
    }

    /// Number of lines carrying the not-found placeholder
    pub fn missing_count(&self) -> usize {
        self.lines.iter().filter(|l| l.text.is_none()).count()
    }
}

impl std::fmt::Display for ResolvedPassage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
