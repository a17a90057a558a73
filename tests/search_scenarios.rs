//! End-to-end query scenarios against a freshly built index.

use std::sync::Arc;

use canticle::corpus::VecCorpus;
use canticle::engine::SearchEngine;
use canticle::error::Result;
use canticle::passage::{VerseId, VerseSet};
use canticle::storage::FileStorage;
use tempfile::TempDir;

fn shepherd_engine(dir: &TempDir) -> Result<SearchEngine> {
    let corpus = Arc::new(VecCorpus::new(vec![
        "the Lord is my shepherd".to_string(),
        "the Lord is good".to_string(),
        "my shepherd leads me".to_string(),
    ]));
    let storage = Arc::new(FileStorage::new(dir.path())?);

    let engine = SearchEngine::new(corpus, storage)?;
    engine.build_index_blocking()?;
    Ok(engine)
}

fn ordinals(verses: &VerseSet) -> Vec<u32> {
    verses.iter().map(|v| v.ordinal()).collect()
}

#[test]
fn test_find_word() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let engine = shepherd_engine(&dir)?;

    assert_eq!(ordinals(&engine.find_word("lord")), vec![0, 1]);
    assert_eq!(ordinals(&engine.find_word("Lord")), vec![0, 1]);
    assert_eq!(ordinals(&engine.find_word("shepherd")), vec![0, 2]);

    // A miss is an empty set, not an error.
    assert!(engine.find_word("nonexistent").is_empty());
    Ok(())
}

#[test]
fn test_boolean_algebra() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let engine = shepherd_engine(&dir)?;

    // Juxtaposition unions.
    let mut expected = engine.find_word("lord");
    expected.union_with(&engine.find_word("leads"));
    assert_eq!(engine.search("lord leads")?, expected);

    // Retain intersects.
    assert_eq!(ordinals(&engine.search("lord + shepherd")?), vec![0]);

    // Remove subtracts.
    assert_eq!(ordinals(&engine.search("lord -good")?), vec![0]);

    // Groups compose.
    assert_eq!(
        ordinals(&engine.search("shepherd -[lord +good]")?),
        vec![0, 2]
    );
    Ok(())
}

#[test]
fn test_prefix_and_root_expansion() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let engine = shepherd_engine(&dir)?;

    assert_eq!(engine.find_prefix("shep"), vec!["shepherd"]);
    assert_eq!(ordinals(&engine.search("*shep")?), vec![0, 2]);

    // "leading" stems to "lead", which expands to "leads".
    assert_eq!(ordinals(&engine.search("~leading")?), vec![2]);
    Ok(())
}

#[test]
fn test_syntax_errors_abort_with_no_partial_result() {
    let dir = TempDir::new().unwrap();
    let engine = shepherd_engine(&dir).unwrap();

    for query in ["[lord", "lord -", "lord - +good", "lord ]"] {
        assert!(engine.search(query).is_err(), "query {query:?} should fail");
    }
}

#[test]
fn test_best_match_ranks_double_hit_first() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let engine = shepherd_engine(&dir)?;

    // Verse 0 contains both words; it must come first.
    let tally = engine.best_match("lord shepherd");
    let ranked = tally.ranked();

    assert_eq!(ranked[0].0, VerseId::new(0));
    assert!(ranked[0].1 > ranked[1].1);
    Ok(())
}

#[test]
fn test_best_match_monotonicity() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let engine = shepherd_engine(&dir)?;

    let one = engine.best_match("shepherd");
    let two = engine.best_match("shepherd lord");

    for verse in 0u32..3 {
        assert!(
            two.score(VerseId::new(verse)) >= one.score(VerseId::new(verse)),
            "verse {verse} lost score when a term was added"
        );
    }
    Ok(())
}

#[test]
fn test_index_fidelity() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let texts = [
        "the Lord is my shepherd",
        "the Lord is good",
        "my shepherd leads me",
    ];
    let engine = shepherd_engine(&dir)?;

    // Every word of every verse is found in exactly the verses whose
    // normalized text contains it.
    for word in texts.iter().flat_map(|t| t.split_whitespace()) {
        let word = word.to_lowercase();
        let expected: Vec<u32> = texts
            .iter()
            .enumerate()
            .filter(|(_, t)| t.to_lowercase().split_whitespace().any(|w| w == word))
            .map(|(i, _)| i as u32)
            .collect();

        assert_eq!(
            ordinals(&engine.find_word(&word)),
            expected,
            "word {word:?}"
        );
    }
    Ok(())
}
