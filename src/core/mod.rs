//! Core data types for citation resolution.
//!
//! - [`CanonicalReference`]: book, start chapter/verse and end chapter/verse
//! - [`CitationContext`], [`RawCitation`]: book/chapter carried between citations
//! - [`BookEntry`]: a registry book with its short code and verse-store key
//! - [`ChapterRecord`]: the verses of one chapter, as read from the store
//! - [`ResolvedPassage`], [`VerseLine`]: resolver output
//!
//! [`CanonicalReference`]: reference::CanonicalReference
//! [`CitationContext`]: reference::CitationContext
//! [`RawCitation`]: reference::RawCitation
//! [`BookEntry`]: book::BookEntry
//! [`ChapterRecord`]: passage::ChapterRecord
//! [`ResolvedPassage`]: passage::ResolvedPassage
//! [`VerseLine`]: passage::VerseLine

pub mod book;
pub mod passage;
pub mod reference;
