//! Character classification and normalization for Arabic verse text.
//!
//! - `is_diacritic`: the only place the vocalization mark ranges are spelled out
//! - hamza folding: two variants, one per matching family
//! - `extract_unique_letters` / `letter_set`: the pipeline behind exact letter-set matching

/// Canonical hamza glyph (ء).
pub const HAMZA: char = '\u{0621}';
/// Bare alif (ا).
pub const ALIF: char = '\u{0627}';

/// أ إ ؤ ئ
const HAMZA_CARRIERS: [char; 4] = ['\u{0623}', '\u{0625}', '\u{0624}', '\u{0626}'];

/// The 28-letter consonantal alphabet, hija'i order.
pub const ALPHABET: [char; 28] = [
    'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع',
    'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي',
];

/// Vocalization marks plus the small Quranic annotation signs
/// (superscript alif, small waw/ya, stop marks).
#[inline]
pub fn is_diacritic(ch: char) -> bool {
    matches!(ch,
        '\u{0610}'..='\u{061A}' |
        '\u{064B}'..='\u{065F}' |
        '\u{0670}' |
        '\u{06D6}'..='\u{06DC}' |
        '\u{06DF}'..='\u{06E8}' |
        '\u{06EA}'..='\u{06ED}'
    )
}

#[inline]
pub fn is_hamza_carrier(ch: char) -> bool {
    HAMZA_CARRIERS.contains(&ch)
}

#[inline]
pub fn is_alphabet_letter(ch: char) -> bool {
    ALPHABET.contains(&ch)
}

pub fn strip_diacritics(s: &str) -> String {
    s.chars().filter(|&ch| !is_diacritic(ch)).collect()
}

#[inline]
pub fn hamza_to_letter(ch: char) -> char {
    if is_hamza_carrier(ch) {
        HAMZA
    } else {
        ch
    }
}

#[inline]
pub fn hamza_to_alif(ch: char) -> char {
    if ch == HAMZA || is_hamza_carrier(ch) {
        ALIF
    } else {
        ch
    }
}

/// أ إ ؤ ئ → ء
pub fn normalize_hamza_to_letter(s: &str) -> String {
    s.chars().map(hamza_to_letter).collect()
}

/// أ إ ؤ ئ ء → ا
pub fn normalize_hamza_to_alif(s: &str) -> String {
    s.chars().map(hamza_to_alif).collect()
}

/// Form compared by the repertoire and multiset modes.
///
/// Every surviving (non-diacritic) character maps to exactly one output
/// character, so position `i` here lines up with the `i`-th non-diacritic of
/// the input. The highlighter relies on that.
pub fn match_form(s: &str) -> Vec<char> {
    s.chars()
        .filter(|&ch| !is_diacritic(ch))
        .map(hamza_to_letter)
        .collect()
}

/// Distinct alphabet letters of `s` in first-occurrence order.
///
/// Suitable for display only; use [`letter_set`] for comparisons.
pub fn extract_unique_letters(s: &str) -> String {
    let folded = normalize_hamza_to_alif(&strip_diacritics(s));
    let mut seen: Vec<char> = Vec::with_capacity(ALPHABET.len());
    for ch in folded.chars() {
        if ch.is_whitespace() || !is_alphabet_letter(ch) {
            continue;
        }
        if !seen.contains(&ch) {
            seen.push(ch);
        }
    }
    seen.into_iter().collect()
}

/// Sorted, deduplicated letters of `s`: the canonical set form.
pub fn letter_set(s: &str) -> Vec<char> {
    let mut letters: Vec<char> = extract_unique_letters(s).chars().collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/normalize.rs"]
mod tests;
