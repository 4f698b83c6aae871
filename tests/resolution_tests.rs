//! End-to-end resolution against an on-disk verse store.

mod common;

use orthofetch::parsing::splitter::split_readings;
use orthofetch::resolution::ReadingError;
use orthofetch::{
    BatchResolver, BookRegistry, CanonicalReference, CitationParser, DirectoryStore, Resolver,
};

#[test]
fn test_point_reference_yields_one_line() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    for (citation, found) in [("Genesis 3:5", true), ("John 1:3", false), ("Genesis 3:99", false)] {
        let results = batch.resolve_citation(citation);
        assert_eq!(results.len(), 1);

        let passage = results[0].outcome.as_ref().unwrap();
        assert_eq!(passage.header, citation);
        assert_eq!(passage.lines.len(), 1);
        assert_eq!(passage.lines[0].text.is_some(), found, "{citation}");
    }
}

#[test]
fn test_single_chapter_range_never_omits_lines() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    let results = batch.resolve_citation("John 1:1-6");
    let passage = results[0].outcome.as_ref().unwrap();

    let verses: Vec<u32> = passage.lines.iter().map(|l| l.verse).collect();
    assert_eq!(verses, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(passage.lines[0].text.as_deref(), Some("text of 1:1"));
    assert!(passage.lines[2].text.is_none());
    assert!(passage.lines[5].text.is_none());
    assert_eq!(passage.missing_count(), 2);
}

#[test]
fn test_cross_chapter_span_over_split_chapter() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    let results = batch.resolve_citation("Job 2:13-4:3");
    let passage = results[0].outcome.as_ref().unwrap();
    assert_eq!(passage.header, "Job 2:13-4:3");

    let positions: Vec<(u32, u32)> = passage.lines.iter().map(|l| (l.chapter, l.verse)).collect();
    let mut expected = vec![(2, 13)];
    expected.extend((1..=26).map(|v| (3, v)));
    expected.extend((1..=3).map(|v| (4, v)));
    assert_eq!(positions, expected);
}

#[test]
fn test_alternate_kings_numbering_resolves_like_modern() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let parser = CitationParser::new(&registry);
    let batch = BatchResolver::new(&registry, &store);

    assert_eq!(
        parser.parse("3[1] Kings 2.6-14").unwrap(),
        parser.parse("1 Kings 2:6-14").unwrap()
    );

    let results = batch.resolve_citation("3[1] Kings 2.6-14");
    let passage = results[0].outcome.as_ref().unwrap();
    assert_eq!(passage.header, "1 Kings 2:6-14");
    assert_eq!(passage.lines.len(), 9);
    assert_eq!(passage.missing_count(), 0);
}

#[test]
fn test_comma_series_parses_to_three_references() {
    let registry = BookRegistry::load_embedded().unwrap();
    let parser = CitationParser::new(&registry);

    let references = parser.parse("Genesis 3:1-8, 10, 12-14").unwrap();
    let expected: Vec<CanonicalReference> = [(1, 8), (10, 10), (12, 14)]
        .into_iter()
        .map(|(start, end)| CanonicalReference::new("Genesis", 3, start, 3, end).unwrap())
        .collect();
    assert_eq!(references, expected);
}

#[test]
fn test_composite_split_order() {
    assert_eq!(
        split_readings("Composite 1 - Genesis 3:1-8 • Psalms 1:1-2; John 1:1"),
        vec!["Genesis 3:1-8", "Psalms 1:1-2", "John 1:1"]
    );
}

#[test]
fn test_failures_stay_with_their_citation() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    let results =
        batch.resolve_readings("Foo 1:1 • Genesis 3:1 • Exodus 1:1 • Job 9:1 • Psalms one • Psalms 1:1");
    let kinds: Vec<&str> = results
        .iter()
        .map(|r| match &r.outcome {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "book_not_found",
            "ok",
            "book_not_found",
            "chapter_not_found",
            "parse_failure",
            "ok"
        ]
    );
}

#[test]
fn test_corrupt_store_file_is_a_store_error() {
    let dir = common::verse_store();
    std::fs::write(dir.path().join("ruth.json"), "{ not json").unwrap();

    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    let results = batch.resolve_readings("Ruth 1:1 • Genesis 3:1");
    assert_eq!(results.len(), 2);
    assert!(matches!(results[0].outcome, Err(ReadingError::Resolve(_))));
    assert_eq!(results[0].outcome.as_ref().unwrap_err().kind(), "store_read_error");
    assert!(results[1].is_ok());
}

#[test]
fn test_header_reparses_to_same_reference() {
    let registry = BookRegistry::load_embedded().unwrap();
    let parser = CitationParser::new(&registry);

    for citation in ["Genesis 3:1", "Genesis 3:1-8", "Wisdom 3:1-9", "4[2] Kings 2:1-12"] {
        for reference in parser.parse(citation).unwrap() {
            let reparsed = parser.parse(&reference.to_string()).unwrap();
            assert_eq!(reparsed, vec![reference]);
        }
    }
}

#[test]
fn test_continuation_crossing_into_next_chapter() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    let results = batch.resolve_citation("Job 2:11-12, 13-3:2");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].outcome.as_ref().unwrap().header, "Job 2:11-12");

    let span = results[1].outcome.as_ref().unwrap();
    assert_eq!(span.header, "Job 2:13-3:2");
    let positions: Vec<(u32, u32)> = span.lines.iter().map(|l| (l.chapter, l.verse)).collect();
    assert_eq!(positions, vec![(2, 13), (3, 1), (3, 2)]);
}

#[test]
fn test_huge_chapter_span_fails_alone() {
    let dir = common::verse_store();
    let registry = BookRegistry::load_embedded().unwrap();
    let store = DirectoryStore::new(dir.path());
    let batch = BatchResolver::new(&registry, &store);

    let results = batch.resolve_readings("Psalms 1:1-4000000000:1 • Psalms 1:2");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].outcome.as_ref().unwrap_err().kind(), "parse_failure");
    assert!(results[1].is_ok());

    // Built directly, past the parser's limit: only stored chapters are read
    let reference = CanonicalReference::new("Psalms", 1, 5, 4_000_000_000, 1).unwrap();
    let passage = Resolver::new(&registry, &store).resolve(&reference).unwrap();
    assert_eq!(passage.lines.len(), 2);
}
