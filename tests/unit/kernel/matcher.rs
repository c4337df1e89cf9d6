use super::*;
use crate::kernel::corpus::CorpusScope;
use crate::kernel::highlight::{glyph_text, GlyphClass};
use crate::kernel::services::ports::corpus::{ChapterRecord, RawVerse};

const V1: &str = "بِسْمِ اللَّهِ";
const V2: &str = "الرَّحْمَنِ الرَّحِيمِ";

fn fatiha_corpus() -> Corpus {
    Corpus::from_chapters(
        CorpusScope::Chapter(1),
        vec![ChapterRecord::new(
            1,
            "الفاتحة",
            vec![RawVerse::new(1, V1), RawVerse::new(2, V2)],
        )],
    )
}

fn mixed_corpus() -> Corpus {
    Corpus::from_chapters(
        CorpusScope::Whole,
        vec![
            ChapterRecord::new(
                2,
                "البقرة",
                vec![
                    RawVerse::new(1, "الٓمٓ"),
                    RawVerse::new(2, "ذَٰلِكَ ٱلْكِتَٰبُ لَا رَيْبَ ۛ فِيهِ ۛ هُدًى لِّلْمُتَّقِينَ"),
                ],
            ),
            ChapterRecord::new(1, "الفاتحة", vec![RawVerse::new(1, V1), RawVerse::new(2, V2)]),
        ],
    )
}

fn numbers(hits: &[SearchHit<'_>]) -> Vec<(u32, u32)> {
    hits.iter().map(|h| h.verse.key()).collect()
}

fn form(s: &str) -> Vec<char> {
    match_form(s)
}

#[test]
fn test_mode_names_round_trip() {
    for mode in [MatchMode::Repertoire, MatchMode::Multiset, MatchMode::LetterSet] {
        assert_eq!(MatchMode::from_name(mode.name()), Some(mode));
    }
    assert_eq!(MatchMode::from_name(" Multiset "), Some(MatchMode::Multiset));
    assert_eq!(MatchMode::from_name("fuzzy"), None);
    assert_eq!(MatchMode::default(), MatchMode::Multiset);
}

#[test]
fn test_multiset_finds_letters_ignoring_diacritics() {
    let corpus = fatiha_corpus();
    // م and ن together only occur in the second verse.
    let hits = search(&corpus, "من", MatchMode::Multiset);
    assert_eq!(numbers(&hits), vec![(1, 2)]);

    // ب س م only in the first.
    let hits = search(&corpus, "سم", MatchMode::Multiset);
    assert_eq!(numbers(&hits), vec![(1, 1)]);
}

#[test]
fn test_repeated_letter_separates_multiset_from_repertoire() {
    let verse = form(V1);
    let query = form("سس");
    assert!(repertoire_match(&query, &verse));
    assert!(!multiset_match(&query, &verse));

    let corpus = fatiha_corpus();
    assert_eq!(numbers(&search(&corpus, "سس", MatchMode::Repertoire)), vec![(1, 1)]);
    assert!(search(&corpus, "سس", MatchMode::Multiset).is_empty());
}

#[test]
fn test_multiset_is_never_looser_than_repertoire() {
    let corpus = mixed_corpus();
    let queries = ["ل", "لل", "للل", "الله", "رحم", "ررر", "ذلك", "مم", "ي ي"];
    for q in queries {
        let a = numbers(&search(&corpus, q, MatchMode::Repertoire));
        let b = numbers(&search(&corpus, q, MatchMode::Multiset));
        assert!(b.iter().all(|k| a.contains(k)), "query {q}: B {b:?} not within A {a:?}");
    }
}

#[test]
fn test_empty_query_predicates_match_nothing() {
    assert!(!repertoire_match(&[], &form(V1)));
    assert!(!multiset_match(&[], &form(V1)));
    assert!(!letter_set_match("", V1));
    assert!(!letter_set_match("123", "456"));
}

#[test]
fn test_empty_query_search_lists_everything_unannotated() {
    let corpus = mixed_corpus();
    for mode in [MatchMode::Repertoire, MatchMode::Multiset, MatchMode::LetterSet] {
        for q in ["", "   ", "\u{064E}\u{0651}"] {
            let hits = search(&corpus, q, mode);
            assert_eq!(hits.len(), corpus.len());
            assert!(hits.iter().all(|h| h.glyphs.is_none()));
        }
    }
}

#[test]
fn test_query_without_alphabet_letters_matches_nothing() {
    let corpus = mixed_corpus();
    for q in ["hello", "123", "\u{0671}"] {
        assert!(search(&corpus, q, MatchMode::LetterSet).is_empty(), "{:?}", q);
        assert!(!PreparedQuery::new(q, MatchMode::LetterSet).is_blank());
    }
    assert!(search(&corpus, "hello", MatchMode::Multiset).is_empty());
    assert!(search(&corpus, "hello", MatchMode::Repertoire).is_empty());
}

#[test]
fn test_results_keep_canonical_order() {
    let corpus = mixed_corpus();
    let hits = search(&corpus, "ل", MatchMode::Repertoire);
    assert_eq!(numbers(&hits), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
}

#[test]
fn test_letter_set_matches_regardless_of_order_and_repetition() {
    assert!(letter_set_match("الم", "الٓمٓ"));
    assert!(letter_set_match("الم", "مَالَ لَمْ"));
    assert!(letter_set_match("الم", "أَلَمْ"));
    // Extra letter.
    assert!(!letter_set_match("الم", "الْمُلْك"));
    // Missing letter.
    assert!(!letter_set_match("الم", "لَمْ"));

    let corpus = mixed_corpus();
    let hits = search(&corpus, "الم", MatchMode::LetterSet);
    assert_eq!(numbers(&hits), vec![(2, 1)]);
}

#[test]
fn test_letter_set_is_symmetric() {
    let samples = ["الم", "مال", "الملك", V1, V2, "أَلَمْ", "ء"];
    for a in samples {
        for b in samples {
            assert_eq!(letter_set_match(a, b), letter_set_match(b, a), "{a} / {b}");
        }
    }
}

#[test]
fn test_letter_set_annotation_is_uniform_display_string() {
    let corpus = mixed_corpus();
    let hits = search(&corpus, "ملا", MatchMode::LetterSet);
    let glyphs = hits[0].glyphs.as_ref().unwrap();
    assert_eq!(glyph_text(glyphs), "الم");
    assert!(glyphs.iter().all(|g| g.class == GlyphClass::Matched));
}

#[test]
fn test_hamza_variants_fold_for_containment() {
    let prepared = PreparedQuery::new("ء", MatchMode::Multiset);
    assert!(prepared.matches("أَنْ"));
    assert!(prepared.matches("يُؤْمِنُونَ"));
    assert!(!prepared.matches("ان"));
}

#[test]
fn test_multiset_ledger_claims_greedily_left_to_right() {
    let prepared = PreparedQuery::new("لل", MatchMode::Multiset);
    let ledger = prepared.ledger("اللهِ لَ").unwrap();
    // ا ل ل ه ' ' ل
    assert_eq!(ledger.len(), 6);
    let claimed: Vec<bool> = (0..ledger.len()).map(|i| ledger.is_claimed(i)).collect();
    assert_eq!(claimed, vec![false, true, true, false, false, false]);
    assert_eq!(ledger.claimed_count(), 2);
}

#[test]
fn test_repertoire_ledger_claims_first_occurrence_only() {
    let prepared = PreparedQuery::new("لل", MatchMode::Repertoire);
    let ledger = prepared.ledger("الله").unwrap();
    let claimed: Vec<bool> = (0..ledger.len()).map(|i| ledger.is_claimed(i)).collect();
    assert_eq!(claimed, vec![false, true, false, false]);
}

#[test]
fn test_letter_set_has_no_ledger() {
    let prepared = PreparedQuery::new("الم", MatchMode::LetterSet);
    assert!(prepared.ledger("الم").is_none());
}

#[test]
fn test_annotation_agrees_with_ledger() {
    let corpus = fatiha_corpus();
    let hits = search(&corpus, "لل", MatchMode::Multiset);
    assert_eq!(numbers(&hits), vec![(1, 1), (1, 2)]);

    for hit in &hits {
        let glyphs = hit.glyphs.as_ref().unwrap();
        assert_eq!(glyph_text(glyphs), hit.verse.text);
        let matched = glyphs.iter().filter(|g| g.class == GlyphClass::Matched).count();
        assert_eq!(matched, 2);
        assert!(glyphs
            .iter()
            .filter(|g| g.class == GlyphClass::Matched)
            .all(|g| g.ch == 'ل'));
    }
}

#[test]
fn test_multiset_consumption_equals_query_length_on_match() {
    let corpus = mixed_corpus();
    for q in ["لل", "رحم", "ذلك", "الرحمن"] {
        let prepared = PreparedQuery::new(q, MatchMode::Multiset);
        for verse in corpus.verses() {
            let ledger = prepared.ledger(&verse.text).unwrap();
            let full = ledger.claimed_count() == match_form(q).len();
            assert_eq!(full, prepared.matches(&verse.text), "{q} / {}", verse.text);
        }
    }
}
