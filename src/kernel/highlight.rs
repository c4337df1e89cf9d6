//! Per-character annotation of verse text.
//!
//! The matcher works on the diacritic-free form; the highlighter puts the
//! diacritics back at their original positions while carrying the ledger's
//! claims over to the base letters.

use serde::Serialize;

use crate::kernel::matcher::ConsumptionLedger;
use crate::kernel::normalize::is_diacritic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphClass {
    Diacritic,
    Matched,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub ch: char,
    pub class: GlyphClass,
}

impl Glyph {
    #[inline]
    pub fn new(ch: char, class: GlyphClass) -> Self {
        Self { ch, class }
    }
}

/// Walk `original` and tag each character. Diacritics always win and never
/// consume a ledger slot; every other character takes the next slot.
pub fn annotate(original: &str, ledger: &ConsumptionLedger) -> Vec<Glyph> {
    let mut slot = 0usize;
    original
        .chars()
        .map(|ch| {
            if is_diacritic(ch) {
                return Glyph::new(ch, GlyphClass::Diacritic);
            }
            let class = if ledger.is_claimed(slot) {
                GlyphClass::Matched
            } else {
                GlyphClass::Plain
            };
            slot += 1;
            Glyph::new(ch, class)
        })
        .collect()
}

/// Uniform emphasis over an extracted-letter display string.
pub fn emphasize_letters(letters: &str) -> Vec<Glyph> {
    letters
        .chars()
        .map(|ch| Glyph::new(ch, GlyphClass::Matched))
        .collect()
}

/// Underlying text of a glyph run.
pub fn glyph_text(glyphs: &[Glyph]) -> String {
    glyphs.iter().map(|g| g.ch).collect()
}

/// Consecutive glyphs of the same class, merged. Handy for renderers that
/// style spans rather than single characters.
pub fn spans(glyphs: &[Glyph]) -> Vec<(GlyphClass, String)> {
    let mut out: Vec<(GlyphClass, String)> = Vec::new();
    for glyph in glyphs {
        match out.last_mut() {
            Some((class, text)) if *class == glyph.class => text.push(glyph.ch),
            _ => out.push((glyph.class, glyph.ch.to_string())),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/highlight.rs"]
mod tests;
