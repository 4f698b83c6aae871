//! Book registry and verse store access.
//!
//! The registry maps canonical book names (plus aliases such as "Wisdom" and
//! the alternate "3[1] Kings" numbering) to a short code and a verse-store key.
//! An embedded registry is compiled into the binary from `catalogs/books.json`;
//! a custom one can be loaded from a JSON file of the same shape.
//!
//! ## Example
//!
//! ```rust,no_run
//! use orthofetch::catalog::registry::BookRegistry;
//! use orthofetch::catalog::verses::{DirectoryStore, VerseStore};
//! use std::path::Path;
//!
//! let registry = BookRegistry::load_embedded().unwrap();
//! let book = registry.resolve("3[1] Kings").unwrap();
//! assert_eq!(book.name, "1 Kings");
//!
//! let store = DirectoryStore::new(Path::new("data/bible"));
//! let chapter = store.chapter(&book.store_key, 2).unwrap();
//! ```
//!
//! ## Verse store layout
//!
//! One JSON file per book, named `<store_key>.json`:
//!
//! ```text
//! {"book": "Job", "chapters": [{"chapter": 2, "verses": [{"verse": 13, "text": "..."}]}]}
//! ```
//!
//! A chapter may be split over several records; they are joined in file order.

pub mod registry;
pub mod verses;
