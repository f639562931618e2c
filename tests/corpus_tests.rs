/// Corpus compilation and embedded-corpus integration tests.

use farewell_engine::{Corpus, CorpusError, CorpusSource, CorpusStats, EMBEDDED_CORPUS_SIZE};
use std::path::Path;

#[test]
fn sample_corpus_loads_with_stats() {
    let source = CorpusSource::load(Path::new("tests/fixtures/sample_corpus.txt")).unwrap();
    assert_eq!(
        source.stats(),
        CorpusStats {
            total_lines: 10,
            comments: 2,
            empty_lines: 2,
            duplicates: 1,
            unique_messages: 5,
        }
    );
    assert_eq!(source.messages()[0], "Goodbye, {name}! ✨");
    assert_eq!(source.messages()[4], "Keep {mood} and carry on");
}

#[test]
fn loaded_source_builds_a_corpus() {
    let source = CorpusSource::load(Path::new("tests/fixtures/sample_corpus.txt")).unwrap();
    let refs = source.message_refs();
    let corpus = Corpus::new(&refs).unwrap();
    assert_eq!(corpus.len(), 5);
    assert_eq!(corpus.get(1), Some("Safe travels from {location} 🌍"));
}

#[test]
fn compilation_is_idempotent() {
    let text = std::fs::read_to_string("tests/fixtures/sample_corpus.txt").unwrap();
    let first = CorpusSource::parse(&text).unwrap();
    let second = CorpusSource::parse(&text).unwrap();
    assert_eq!(first.messages(), second.messages());
    assert_eq!(
        first.render_rust("sample_corpus.txt"),
        second.render_rust("sample_corpus.txt")
    );
}

#[test]
fn embedded_corpus_matches_source_file() {
    let source = CorpusSource::load(Path::new("corpus/en-GB.txt")).unwrap();
    let embedded: Vec<&str> = Corpus::embedded().iter().collect();
    assert_eq!(embedded, source.message_refs());
    assert_eq!(EMBEDDED_CORPUS_SIZE, source.stats().unique_messages);
}

#[test]
fn embedded_corpus_has_variety() {
    let corpus = Corpus::embedded();
    assert!(corpus.len() > 1);
    assert!(corpus.iter().any(|m| m.contains("{name}")));
    assert!(corpus.iter().any(|m| m.contains("{location}")));
    assert!(corpus.iter().any(|m| m.contains("{date}")));
    assert!(corpus.iter().any(|m| m.contains("{time}")));
}

#[test]
fn missing_source_is_an_error() {
    assert!(matches!(
        CorpusSource::load(Path::new("tests/fixtures/no_such_corpus.txt")),
        Err(CorpusError::Io(_))
    ));
}

#[test]
fn comment_only_source_is_an_error() {
    assert!(matches!(
        CorpusSource::parse("# just a header\n\n# and a footer\n"),
        Err(CorpusError::Empty)
    ));
}
