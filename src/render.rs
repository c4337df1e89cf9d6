//! Terminal rendering of verses and annotations.

use crossterm::style::Stylize;

use ayat::kernel::highlight::spans;
use ayat::{ChapterStat, CorpusStats, Glyph, GlyphClass, MatchMode, SearchHit, Verse};

pub fn verse_label(verse: &Verse) -> String {
    format!(
        "[{} {}:{}]",
        verse.chapter_name, verse.chapter_id, verse.verse_number
    )
}

/// Matched letters bold green, diacritics dimmed, the rest untouched.
pub fn glyphs(glyphs: &[Glyph], color: bool) -> String {
    if !color {
        return ayat::kernel::highlight::glyph_text(glyphs);
    }
    let mut out = String::new();
    for (class, text) in spans(glyphs) {
        let styled = match class {
            GlyphClass::Matched => text.green().bold().to_string(),
            GlyphClass::Diacritic => text.dark_grey().to_string(),
            GlyphClass::Plain => text,
        };
        out.push_str(&styled);
    }
    out
}

pub fn hit(hit: &SearchHit<'_>, mode: MatchMode, color: bool) -> String {
    let label = verse_label(hit.verse);
    match (&hit.glyphs, mode) {
        (None, _) => format!("{} {}", label, hit.verse.text),
        // Letter-set annotations cover the extracted letters, not the verse.
        (Some(letters), MatchMode::LetterSet) => format!(
            "{} {}  ({})",
            label,
            hit.verse.text,
            glyphs(letters, color)
        ),
        (Some(annotated), _) => format!("{} {}", label, glyphs(annotated, color)),
    }
}

pub fn plain_verse(verse: &Verse) -> String {
    format!("{} {}", verse_label(verse), verse.text)
}

pub fn stats_table(stats: &CorpusStats) -> String {
    let mut out = String::new();
    for ChapterStat {
        chapter_id,
        chapter_name,
        verse_count,
    } in &stats.chapters
    {
        out.push_str(&format!("{:>4}  {:<20}  {:>4}\n", chapter_id, chapter_name, verse_count));
    }
    out.push_str(&format!("total: {}", stats.total));
    out
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
