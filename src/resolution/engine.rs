use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::registry::BookRegistry;
use crate::catalog::verses::{StoreError, VerseStore};
use crate::core::book::BookEntry;
use crate::core::passage::{ChapterRecord, ResolvedPassage, VerseLine};
use crate::core::reference::CanonicalReference;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("Chapter not found: {book} {chapter}")]
    ChapterNotFound { book: String, chapter: u32 },

    #[error("Error reading verse store: {0}")]
    Store(StoreError),
}

/// Resolves canonical references to verse text
pub struct Resolver<'a, S: VerseStore> {
    registry: &'a BookRegistry,
    store: &'a S,
}

impl<'a, S: VerseStore> Resolver<'a, S> {
    pub fn new(registry: &'a BookRegistry, store: &'a S) -> Self {
        Self { registry, store }
    }

    /// Emit the verses a reference denotes, headed by its citation form.
    ///
    /// Single-chapter references yield exactly one line per requested verse,
    /// with a placeholder for verses the store lacks. Cross-chapter references
    /// yield only the verses present, and skip absent inner chapters.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::BookNotFound` if neither the registry nor the
    /// store knows the book, `ResolveError::ChapterNotFound` if the chapter
    /// (or, for a span, every chapter) is absent, or `ResolveError::Store`
    /// if the store data cannot be read.
    pub fn resolve(&self, reference: &CanonicalReference) -> Result<ResolvedPassage, ResolveError> {
        let book = self
            .registry
            .resolve(&reference.book)
            .map_err(|_| ResolveError::BookNotFound(reference.book.clone()))?;

        debug!(reference = %reference, store_key = %book.store_key, "Resolving reference");

        let mut passage = ResolvedPassage::new(reference.to_string());
        if reference.spans_chapters() {
            self.resolve_span(book, reference, &mut passage)?;
        } else {
            self.resolve_single_chapter(book, reference, &mut passage)?;
        }

        Ok(passage)
    }

    fn resolve_single_chapter(
        &self,
        book: &BookEntry,
        reference: &CanonicalReference,
        passage: &mut ResolvedPassage,
    ) -> Result<(), ResolveError> {
        let chapter = self
            .load_chapter(book, reference.start_chapter)?
            .ok_or_else(|| ResolveError::ChapterNotFound {
                book: book.name.clone(),
                chapter: reference.start_chapter,
            })?;

        for verse in reference.start_verse..=reference.end_verse {
            let line = match chapter.verse(verse) {
                Some(text) => VerseLine::found(chapter.chapter, verse, text),
                None => VerseLine::missing(chapter.chapter, verse),
            };
            passage.lines.push(line);
        }

        if passage.missing_count() > 0 {
            warn!(
                reference = %reference,
                missing = passage.missing_count(),
                "Some requested verses are not in the store"
            );
        }

        Ok(())
    }

    // Only verses actually present are emitted; no placeholders, and the
    // end verse is not checked against the real chapter length. Only the
    // chapters the store lists are visited.
    fn resolve_span(
        &self,
        book: &BookEntry,
        reference: &CanonicalReference,
        passage: &mut ResolvedPassage,
    ) -> Result<(), ResolveError> {
        let wanted = reference.start_chapter..=reference.end_chapter;
        let present: Vec<u32> = self
            .store
            .chapters(&book.store_key)
            .map_err(|e| store_error(book, e))?
            .into_iter()
            .filter(|c| wanted.contains(c))
            .collect();

        debug!(
            reference = %reference,
            present = present.len(),
            "Chapters of span present in store"
        );

        let mut any_chapter = false;
        for number in present {
            let Some(chapter) = self.load_chapter(book, number)? else {
                continue;
            };
            any_chapter = true;

            let in_range = |verse: u32| {
                (number > reference.start_chapter || verse >= reference.start_verse)
                    && (number < reference.end_chapter || verse <= reference.end_verse)
            };

            passage.lines.extend(
                chapter
                    .verses
                    .iter()
                    .filter(|v| in_range(v.number))
                    .map(|v| VerseLine::found(number, v.number, v.text.clone())),
            );
        }

        if any_chapter {
            Ok(())
        } else {
            Err(ResolveError::ChapterNotFound {
                book: book.name.clone(),
                chapter: reference.start_chapter,
            })
        }
    }

    fn load_chapter(
        &self,
        book: &BookEntry,
        chapter: u32,
    ) -> Result<Option<ChapterRecord>, ResolveError> {
        self.store
            .chapter(&book.store_key, chapter)
            .map_err(|e| store_error(book, e))
    }
}

fn store_error(book: &BookEntry, error: StoreError) -> ResolveError {
    match error {
        StoreError::BookMissing(_) => ResolveError::BookNotFound(book.name.clone()),
        e => ResolveError::Store(e),
    }
}
