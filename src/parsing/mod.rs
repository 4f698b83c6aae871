//! Parsers for calendar text and scripture citations.
//!
//! - **splitter**: Split a readings field into citations (bullets, composites, semicolons)
//! - **citation**: Parse one citation into canonical references
//! - **calendar**: Parse the calendar file into dated entries
//!
//! ## Example
//!
//! ```rust
//! use orthofetch::catalog::registry::BookRegistry;
//! use orthofetch::parsing::citation::CitationParser;
//! use orthofetch::parsing::splitter::split_readings;
//!
//! let registry = BookRegistry::load_embedded().unwrap();
//! let parser = CitationParser::new(&registry);
//!
//! for citation in split_readings("Genesis 3:1-8, 10 • 3[1] Kings 2.6-14") {
//!     for reference in parser.parse(&citation).unwrap() {
//!         println!("{reference}");
//!     }
//! }
//! ```

pub mod calendar;
pub mod citation;
pub mod splitter;
