//! # orthofetch
//!
//! A library for resolving liturgical scripture citations into verse text.
//!
//! Lectionary calendars cite readings in a compact, ad-hoc dialect:
//! "Genesis 3:1-8, 10, 12-14", "Job 2:13-4:3", "3[1] Kings 2.6-14", or whole
//! lists such as "Composite 1 - Genesis 3:1-8 • Psalms 1:1-2; John 1:1".
//!
//! `orthofetch` splits such a field into citations, parses each into a
//! canonical (book, chapter, verse, chapter, verse) reference, and reads the
//! verses from a per-book verse store.
//!
//! ## Features
//!
//! - **Single verses and ranges**: `Genesis 3:1`, `Genesis 3:1-8`
//! - **Cross-chapter spans**: `Job 2:13-4:3`
//! - **Comma continuations**: `Genesis 3:1-8, 10, 12-14` inherits book and chapter
//! - **Alternate numbering**: `3[1] Kings` reads as `1 Kings`
//! - **Per-citation failures**: an unknown book or bad citation never aborts a batch
//!
//! ## Example
//!
//! ```rust
//! use orthofetch::{BatchResolver, BookRegistry, MemoryStore};
//!
//! let registry = BookRegistry::load_embedded().unwrap();
//! let store = MemoryStore::new().with_chapter("john", 1, [(1, "In the beginning was the Word")]);
//!
//! let batch = BatchResolver::new(&registry, &store);
//! let results = batch.resolve_readings("John 1:1-2 • Foo 1:1");
//!
//! let passage = results[0].outcome.as_ref().unwrap();
//! assert_eq!(passage.header, "John 1:1-2");
//! assert_eq!(passage.lines.len(), 2);
//! assert!(results[1].outcome.is_err());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Book registry and verse store access
//! - [`core`]: Canonical references, chapters and passages
//! - [`parsing`]: Readings splitter, citation grammar and calendar parser
//! - [`resolution`]: Reference resolution and batch processing
//! - [`config`]: Data file locations
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod parsing;
pub mod resolution;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::registry::BookRegistry;
pub use crate::catalog::verses::{DirectoryStore, MemoryStore, VerseStore};
pub use crate::core::book::BookEntry;
pub use crate::core::passage::{ResolvedPassage, VerseLine};
pub use crate::core::reference::CanonicalReference;
pub use crate::parsing::citation::CitationParser;
pub use crate::resolution::{BatchResolver, Resolver};
