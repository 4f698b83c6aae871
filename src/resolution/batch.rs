use thiserror::Error;
use tracing::warn;

use crate::catalog::registry::BookRegistry;
use crate::catalog::verses::VerseStore;
use crate::core::passage::ResolvedPassage;
use crate::core::reference::{CanonicalReference, CitationContext, RawCitation};
use crate::parsing::citation::{CitationParser, ParseError};
use crate::parsing::splitter::split_readings;
use crate::resolution::engine::{ResolveError, Resolver};

/// Why one citation produced no passage
#[derive(Error, Debug)]
pub enum ReadingError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl ReadingError {
    /// Stable machine-readable kind, used in JSON and TSV output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse_failure",
            Self::Resolve(ResolveError::BookNotFound(_)) => "book_not_found",
            Self::Resolve(ResolveError::ChapterNotFound { .. }) => "chapter_not_found",
            Self::Resolve(ResolveError::Store(_)) => "store_read_error",
        }
    }
}

/// Outcome for one canonical reference, or for a citation that failed to parse
#[derive(Debug)]
pub struct ReadingResult {
    /// Citation text as it appeared in the input
    pub citation: String,

    /// Parsed reference, absent when parsing failed
    pub reference: Option<CanonicalReference>,

    pub outcome: Result<ResolvedPassage, ReadingError>,
}

impl ReadingResult {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Parses and resolves whole citation lists, one citation at a time.
///
/// Failures are confined to the citation that caused them.
pub struct BatchResolver<'a, S: VerseStore> {
    parser: CitationParser<'a>,
    resolver: Resolver<'a, S>,
}

impl<'a, S: VerseStore> BatchResolver<'a, S> {
    pub fn new(registry: &'a BookRegistry, store: &'a S) -> Self {
        Self {
            parser: CitationParser::new(registry),
            resolver: Resolver::new(registry, store),
        }
    }

    /// Resolve one citation, which may be a comma-joined series
    pub fn resolve_citation(&self, citation: &str) -> Vec<ReadingResult> {
        let mut results = Vec::new();
        self.resolve_raw(&RawCitation::new(citation), &mut results);
        results
    }

    /// Split a readings field and resolve every citation in order.
    ///
    /// A citation without a book name inherits book and chapter from the
    /// citation before it; a citation none of whose parts parsed clears that
    /// context.
    pub fn resolve_readings(&self, field: &str) -> Vec<ReadingResult> {
        let mut results = Vec::new();
        let mut context: Option<CitationContext> = None;

        for citation in split_readings(field) {
            let mut raw = RawCitation::new(citation);
            if let Some(ctx) = context.take() {
                raw = raw.with_context(ctx);
            }
            context = self.resolve_raw(&raw, &mut results);
        }

        results
    }

    /// Parse and resolve one raw citation part by part, returning the
    /// context left by its last part that parsed
    fn resolve_raw(
        &self,
        raw: &RawCitation,
        results: &mut Vec<ReadingResult>,
    ) -> Option<CitationContext> {
        let mut context = None;

        for part in self.parser.parse_parts(raw) {
            let reference = match part {
                Ok(reference) => reference,
                Err(e) => {
                    warn!(citation = %raw.text, error = %e, "Skipping unparseable citation");
                    results.push(ReadingResult {
                        citation: raw.text.clone(),
                        reference: None,
                        outcome: Err(e.into()),
                    });
                    continue;
                }
            };

            let outcome = self.resolver.resolve(&reference).map_err(ReadingError::from);
            if let Err(e) = &outcome {
                warn!(reference = %reference, error = %e, "Failed to resolve reference");
            }
            context = Some(reference.context());
            results.push(ReadingResult {
                citation: raw.text.clone(),
                reference: Some(reference),
                outcome,
            });
        }

        context
    }
}
