use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::core::book::BookEntry;
use crate::utils::validation::collapse_whitespace;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read book registry: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse book registry: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Book not found: {0}")]
    NotFound(String),
}

/// Registry version for compatibility checking
pub const REGISTRY_VERSION: &str = "1.0.0";

/// `3[1] Kings` style numbering: the outer number follows the Septuagint
/// "Kingdoms" count, the bracketed inner number the modern one.
static ALTERNATE_NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s*\[(\d+)\]\s*(Kings|Samuel)\b").unwrap());

/// Rewrite `<outer>[<inner>] Kings` to `<inner> Kings` (same for Samuel).
///
/// # Examples
///
/// ```
/// use orthofetch::catalog::registry::rewrite_alternate_numbering;
///
/// assert_eq!(rewrite_alternate_numbering("3[1] Kings 2.6-14"), "1 Kings 2.6-14");
/// assert_eq!(rewrite_alternate_numbering("Genesis 1:1"), "Genesis 1:1");
/// ```
#[must_use]
pub fn rewrite_alternate_numbering(text: &str) -> Cow<'_, str> {
    ALTERNATE_NUMBERING.replace_all(text, "$1 $2")
}

/// Serializable registry format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryData {
    pub version: String,
    pub books: Vec<BookEntry>,
}

/// Static table of books: canonical name, short code and verse-store key
#[derive(Debug)]
pub struct BookRegistry {
    /// All books, in canonical order
    pub books: Vec<BookEntry>,

    /// Index: canonical name -> index in books vec
    name_to_index: HashMap<String, usize>,

    /// Index: alias -> index in books vec
    alias_to_index: HashMap<String, usize>,
}

impl BookRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            name_to_index: HashMap::new(),
            alias_to_index: HashMap::new(),
        }
    }

    /// Load the embedded default registry
    pub fn load_embedded() -> Result<Self, RegistryError> {
        // Validated at compile time by build.rs
        const EMBEDDED_REGISTRY: &str = include_str!("../../catalogs/books.json");
        Self::from_json(EMBEDDED_REGISTRY)
    }

    /// Load registry from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse registry from JSON string
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let data: RegistryData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != REGISTRY_VERSION {
            warn!(
                expected = REGISTRY_VERSION,
                found = %data.version,
                "Book registry version mismatch"
            );
        }

        let mut registry = Self::new();
        for book in data.books {
            registry.add_book(book);
        }

        Ok(registry)
    }

    /// Add a book to the registry
    pub fn add_book(&mut self, book: BookEntry) {
        let index = self.books.len();

        self.name_to_index.insert(book.name.clone(), index);
        for alias in &book.aliases {
            self.alias_to_index.insert(alias.clone(), index);
        }

        self.books.push(book);
    }

    /// Get a book by exact canonical name
    pub fn get(&self, name: &str) -> Option<&BookEntry> {
        self.name_to_index.get(name).map(|&idx| &self.books[idx])
    }

    /// Resolve a book name as written in a citation.
    ///
    /// Applies the alternate Kings/Samuel numbering rewrite and alias table,
    /// then matches case-sensitively against canonical names.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no book matches.
    pub fn resolve(&self, name: &str) -> Result<&BookEntry, RegistryError> {
        let rewritten = rewrite_alternate_numbering(name);
        let normalized = collapse_whitespace(&rewritten);

        self.name_to_index
            .get(&normalized)
            .or_else(|| self.alias_to_index.get(&normalized))
            .map(|&idx| &self.books[idx])
            .ok_or_else(|| RegistryError::NotFound(name.trim().to_string()))
    }

    /// Number of books in registry
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
