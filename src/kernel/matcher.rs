//! Letter-based verse matching.
//!
//! Three strategies share one entry point, [`search`]:
//! - `Repertoire`: every distinct query letter occurs somewhere in the verse
//! - `Multiset`: every query letter occurs at least as often as in the query
//! - `LetterSet`: the verse's distinct letters equal the query's, exactly
//!
//! For the first two the per-character consumption ledger is computed here,
//! once, and handed to the highlighter.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kernel::corpus::{Corpus, Verse};
use crate::kernel::highlight::{self, Glyph};
use crate::kernel::normalize::{extract_unique_letters, letter_set, match_form};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Mode A.
    Repertoire,
    /// Mode B.
    #[default]
    Multiset,
    /// Mode C.
    LetterSet,
}

impl MatchMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "any" | "repertoire" | "a" => Some(Self::Repertoire),
            "count" | "multiset" | "b" => Some(Self::Multiset),
            "exact" | "letter_set" | "letters" | "c" => Some(Self::LetterSet),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Repertoire => "any",
            Self::Multiset => "count",
            Self::LetterSet => "exact",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which positions of a verse's match form were claimed by the query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsumptionLedger {
    claimed: Vec<bool>,
}

impl ConsumptionLedger {
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Out-of-range positions are unclaimed.
    #[inline]
    pub fn is_claimed(&self, idx: usize) -> bool {
        self.claimed.get(idx).copied().unwrap_or(false)
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|&&c| c).count()
    }
}

pub type LetterBudget = FxHashMap<char, usize>;

pub fn letter_counts(form: &[char]) -> LetterBudget {
    let mut counts = LetterBudget::default();
    for &ch in form {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Mode A predicate. An empty query requires nothing and matches nothing.
pub fn repertoire_match(query_form: &[char], verse_form: &[char]) -> bool {
    !query_form.is_empty() && query_form.iter().all(|ch| verse_form.contains(ch))
}

/// Mode B predicate. An empty query matches nothing.
pub fn multiset_match(query_form: &[char], verse_form: &[char]) -> bool {
    if query_form.is_empty() {
        return false;
    }
    let need = letter_counts(query_form);
    let have = letter_counts(verse_form);
    need.iter().all(|(ch, &n)| have.get(ch).copied().unwrap_or(0) >= n)
}

/// Mode C predicate. Symmetric in its arguments; an empty letter set matches nothing.
pub fn letter_set_match(query: &str, verse: &str) -> bool {
    let wanted = letter_set(query);
    !wanted.is_empty() && wanted == letter_set(verse)
}

/// Greedy left-to-right consumption: a position is claimed iff its letter
/// still has budget, which is then decremented.
pub fn consume(budget: &LetterBudget, verse_form: &[char]) -> ConsumptionLedger {
    let mut remaining = budget.clone();
    let claimed = verse_form
        .iter()
        .map(|ch| match remaining.get_mut(ch) {
            Some(left) if *left > 0 => {
                *left -= 1;
                true
            }
            _ => false,
        })
        .collect();
    ConsumptionLedger { claimed }
}

/// A query normalized once for a given mode.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    mode: MatchMode,
    blank: bool,
    form: Vec<char>,
    budget: LetterBudget,
    letters: Vec<char>,
}

impl PreparedQuery {
    pub fn new(query: &str, mode: MatchMode) -> Self {
        let query = query.trim();
        let blank = match_form(query).is_empty();
        match mode {
            MatchMode::Repertoire => {
                let form = match_form(query);
                // One claim per distinct letter: only its first occurrence lights up.
                let budget = form.iter().map(|&ch| (ch, 1)).collect();
                Self {
                    mode,
                    blank,
                    form,
                    budget,
                    letters: Vec::new(),
                }
            }
            MatchMode::Multiset => {
                let form = match_form(query);
                let budget = letter_counts(&form);
                Self {
                    mode,
                    blank,
                    form,
                    budget,
                    letters: Vec::new(),
                }
            }
            MatchMode::LetterSet => Self {
                mode,
                blank,
                form: Vec::new(),
                budget: LetterBudget::default(),
                letters: letter_set(query),
            },
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// True when the query is nothing but whitespace and diacritics. Such a
    /// query lists everything; a query with only non-alphabet characters does not.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// True when normalization left nothing to match on.
    pub fn is_empty(&self) -> bool {
        match self.mode {
            MatchMode::Repertoire | MatchMode::Multiset => self.form.is_empty(),
            MatchMode::LetterSet => self.letters.is_empty(),
        }
    }

    pub fn matches(&self, text: &str) -> bool {
        match self.mode {
            MatchMode::Repertoire => repertoire_match(&self.form, &match_form(text)),
            MatchMode::Multiset => multiset_match(&self.form, &match_form(text)),
            MatchMode::LetterSet => !self.is_empty() && self.letters == letter_set(text),
        }
    }

    /// Ledger for `text`; `None` for the letter-set mode, which has none.
    pub fn ledger(&self, text: &str) -> Option<ConsumptionLedger> {
        match self.mode {
            MatchMode::Repertoire | MatchMode::Multiset => {
                Some(consume(&self.budget, &match_form(text)))
            }
            MatchMode::LetterSet => None,
        }
    }

    /// Match and annotate in one pass. `None` if `text` does not match.
    pub fn evaluate(&self, text: &str) -> Option<Vec<Glyph>> {
        match self.mode {
            MatchMode::Repertoire | MatchMode::Multiset => {
                let verse_form = match_form(text);
                let hit = if self.mode == MatchMode::Repertoire {
                    repertoire_match(&self.form, &verse_form)
                } else {
                    multiset_match(&self.form, &verse_form)
                };
                if !hit {
                    return None;
                }
                let ledger = consume(&self.budget, &verse_form);
                Some(highlight::annotate(text, &ledger))
            }
            MatchMode::LetterSet => {
                if !self.matches(text) {
                    return None;
                }
                Some(highlight::emphasize_letters(&extract_unique_letters(text)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub verse: &'a Verse,
    /// `None` when the query was empty and nothing was filtered.
    pub glyphs: Option<Vec<Glyph>>,
}

/// Filter `corpus` by `query` under `mode`, in canonical order.
///
/// A blank query lists every verse, unannotated. A letter-set query with no
/// alphabet letters matches nothing.
pub fn search<'a>(corpus: &'a Corpus, query: &str, mode: MatchMode) -> Vec<SearchHit<'a>> {
    let prepared = PreparedQuery::new(query, mode);

    let hits: Vec<SearchHit<'a>> = if prepared.is_blank() {
        corpus
            .verses()
            .iter()
            .map(|verse| SearchHit {
                verse,
                glyphs: None,
            })
            .collect()
    } else {
        corpus
            .verses()
            .iter()
            .filter_map(|verse| {
                prepared.evaluate(&verse.text).map(|glyphs| SearchHit {
                    verse,
                    glyphs: Some(glyphs),
                })
            })
            .collect()
    };

    tracing::debug!(
        mode = %mode,
        scope = %corpus.scope(),
        unfiltered = prepared.is_blank(),
        hits = hits.len(),
        "search finished"
    );
    hits
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/matcher.rs"]
mod tests;
