//! Turning canonical references into verse text.
//!
//! - [`Resolver`]: resolves one reference against the registry and a verse store
//! - [`BatchResolver`]: splits, parses and resolves whole readings fields,
//!   keeping each citation's failure to itself
//!
//! ## Example
//!
//! ```rust,no_run
//! use orthofetch::catalog::registry::BookRegistry;
//! use orthofetch::catalog::verses::DirectoryStore;
//! use orthofetch::resolution::BatchResolver;
//!
//! let registry = BookRegistry::load_embedded().unwrap();
//! let store = DirectoryStore::new("data/bible");
//! let batch = BatchResolver::new(&registry, &store);
//!
//! for result in batch.resolve_readings("Job 2:13-4:3 • Foo 1:1") {
//!     match &result.outcome {
//!         Ok(passage) => println!("{passage}"),
//!         Err(e) => println!("{}: {e}", result.citation),
//!     }
//! }
//! ```

pub mod batch;
pub mod engine;

pub use batch::{BatchResolver, ReadingError, ReadingResult};
pub use engine::{ResolveError, Resolver};
