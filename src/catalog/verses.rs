use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::core::passage::{ChapterRecord, Verse};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Book '{0}' is not present in the verse store")]
    BookMissing(String),

    #[error("Failed to read verse store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed verse store file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to per-book verse data
pub trait VerseStore {
    /// All verses of one chapter, or `None` if the book has no such chapter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::BookMissing` if the store has no data for the
    /// book, or an I/O or format error if its data cannot be read.
    fn chapter(&self, store_key: &str, chapter: u32) -> Result<Option<ChapterRecord>, StoreError>;

    /// Sorted chapter numbers present for a book.
    ///
    /// # Errors
    ///
    /// Same conditions as [`VerseStore::chapter`].
    fn chapters(&self, store_key: &str) -> Result<Vec<u32>, StoreError>;
}

/// On-disk format of one book: `<store_key>.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,

    /// Chapter records in file order; a chapter may appear in several records
    pub chapters: Vec<ChapterData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterData {
    pub chapter: u32,
    pub verses: Vec<VerseData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseData {
    pub verse: u32,
    pub text: String,
}

impl BookFile {
    /// Merge every record for `chapter`, preserving file order
    pub fn collect_chapter(&self, chapter: u32) -> Option<ChapterRecord> {
        let mut found = false;
        let mut verses = Vec::new();

        for record in self.chapters.iter().filter(|c| c.chapter == chapter) {
            found = true;
            verses.extend(record.verses.iter().map(|v| Verse {
                number: v.verse,
                text: v.text.clone(),
            }));
        }

        found.then(|| ChapterRecord::new(chapter, verses))
    }

    pub fn chapter_numbers(&self) -> Vec<u32> {
        self.chapters
            .iter()
            .map(|c| c.chapter)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Verse store backed by a directory of per-book JSON files.
///
/// Files are re-read on every request; nothing is cached between citations.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a book's data file
    pub fn book_path(&self, store_key: &str) -> PathBuf {
        self.root.join(format!("{store_key}.json"))
    }

    fn load_book(&self, store_key: &str) -> Result<BookFile, StoreError> {
        let path = self.book_path(store_key);
        debug!(path = %path.display(), "Reading verse store file");

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::BookMissing(store_key.to_string()));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed { path, source })
    }
}

impl VerseStore for DirectoryStore {
    fn chapter(&self, store_key: &str, chapter: u32) -> Result<Option<ChapterRecord>, StoreError> {
        Ok(self.load_book(store_key)?.collect_chapter(chapter))
    }

    fn chapters(&self, store_key: &str) -> Result<Vec<u32>, StoreError> {
        Ok(self.load_book(store_key)?.chapter_numbers())
    }
}

/// In-memory verse store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    books: HashMap<String, BookFile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chapter record to a book, creating the book if needed
    pub fn add_chapter<S: Into<String>>(
        &mut self,
        store_key: &str,
        chapter: u32,
        verses: impl IntoIterator<Item = (u32, S)>,
    ) {
        let book = self
            .books
            .entry(store_key.to_string())
            .or_insert_with(|| BookFile {
                book: None,
                chapters: Vec::new(),
            });

        book.chapters.push(ChapterData {
            chapter,
            verses: verses
                .into_iter()
                .map(|(verse, text)| VerseData {
                    verse,
                    text: text.into(),
                })
                .collect(),
        });
    }

    #[must_use]
    pub fn with_chapter<S: Into<String>>(
        mut self,
        store_key: &str,
        chapter: u32,
        verses: impl IntoIterator<Item = (u32, S)>,
    ) -> Self {
        self.add_chapter(store_key, chapter, verses);
        self
    }

    fn book(&self, store_key: &str) -> Result<&BookFile, StoreError> {
        self.books
            .get(store_key)
            .ok_or_else(|| StoreError::BookMissing(store_key.to_string()))
    }
}

impl VerseStore for MemoryStore {
    fn chapter(&self, store_key: &str, chapter: u32) -> Result<Option<ChapterRecord>, StoreError> {
        Ok(self.book(store_key)?.collect_chapter(chapter))
    }

    fn chapters(&self, store_key: &str) -> Result<Vec<u32>, StoreError> {
        Ok(self.book(store_key)?.chapter_numbers())
    }
}
