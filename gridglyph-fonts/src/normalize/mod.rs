//! Text normalization ahead of layout.
//!
//! The pipeline runs in a fixed order: typographic folding, optional
//! lowercasing (maximum density), Cyrillic transliteration when the table
//! cannot draw Cyrillic, `[\uXXXX]` escapes for anything still unknown, and
//! finally optional subscript digits (maximum density).

mod tables;

pub use tables::{CYRILLIC_MARKER, CYRILLIC_TRANSLITERATION, TYPOGRAPHIC_FOLDING};

use crate::glyph_table::GlyphTable;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static TRANSLITERATION: LazyLock<HashMap<char, String>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(lower, digraph) in CYRILLIC_TRANSLITERATION {
        map.insert(lower, digraph.to_string());
        for upper in lower.to_uppercase() {
            map.insert(upper, capitalize(digraph));
        }
    }
    map
});

static REVERSE_TRANSLITERATION: LazyLock<HashMap<String, char>> = LazyLock::new(|| {
    TRANSLITERATION
        .iter()
        .map(|(letter, digraph)| (digraph.clone(), *letter))
        .collect()
});

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Switches for the optional pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Lowercase after folding and subscript digits at the end
    pub max_density: bool,
    /// Transliterate Cyrillic when the table has no Cyrillic glyphs
    pub transliterate: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_density: false,
            transliterate: true,
        }
    }
}

/// Result of a normalization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// Number of characters replaced by `[\uXXXX]` escapes
    pub escaped: usize,
    /// Whether the transliteration stage ran
    pub transliterated: bool,
}

/// Normalizer bound to the character repertoire of one glyph table.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    known: HashSet<char>,
    cyrillic_supported: bool,
    options: NormalizeOptions,
}

impl TextNormalizer {
    /// `glyphs` are the characters the table defines; space and newline are always known.
    pub fn new(glyphs: impl IntoIterator<Item = char>, options: NormalizeOptions) -> Self {
        let mut known: HashSet<char> = glyphs.into_iter().collect();
        let cyrillic_supported = known.contains(&CYRILLIC_MARKER);
        known.insert(' ');
        known.insert('\n');
        Self {
            known,
            cyrillic_supported,
            options,
        }
    }

    pub fn for_table(table: &GlyphTable, options: NormalizeOptions) -> Self {
        Self::new(table.chars().map(|(c, _)| c), options)
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    pub fn is_known(&self, c: char) -> bool {
        self.known.contains(&c)
    }

    pub fn normalize(&self, text: &str) -> Normalized {
        let mut text = fold_typography(text);
        if self.options.max_density {
            text = text.to_lowercase();
        }

        let transliterated = self.options.transliterate && !self.cyrillic_supported;
        if transliterated {
            text = transliterate_cyrillic(&text);
        }

        let (mut text, escaped) = escape_unknown(&text, &self.known);
        if self.options.max_density {
            text = subscript_digits(&text);
        }

        log::debug!(
            "Normalized text: {} chars, {} escaped, transliterated: {}",
            text.chars().count(),
            escaped,
            transliterated
        );
        Normalized {
            text,
            escaped,
            transliterated,
        }
    }
}

/// Apply every folding entry in order over the whole text.
pub fn fold_typography(text: &str) -> String {
    TYPOGRAPHIC_FOLDING
        .iter()
        .fold(text.to_string(), |acc, (from, to)| {
            if acc.contains(from) {
                acc.replace(from, to)
            } else {
                acc
            }
        })
}

/// True if `c` is itself a key of the folding table.
pub fn is_folded(c: char) -> bool {
    TYPOGRAPHIC_FOLDING.iter().any(|(from, _)| {
        let mut it = from.chars();
        it.next() == Some(c) && it.next().is_none()
    })
}

/// Replace Cyrillic letters with their Latin digraphs, keeping case.
pub fn transliterate_cyrillic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match TRANSLITERATION.get(&c) {
            Some(digraph) => out.push_str(digraph),
            None => out.push(c),
        }
    }
    out
}

/// Map digraphs back to Cyrillic letters, longest match first.
pub fn reverse_transliterate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(letter) = REVERSE_TRANSLITERATION.get(&pair) {
                out.push(*letter);
                i += 2;
                continue;
            }
        }
        let mut buf = [0u8; 4];
        match REVERSE_TRANSLITERATION.get(&*chars[i].encode_utf8(&mut buf)) {
            Some(letter) => out.push(*letter),
            None => out.push(chars[i]),
        }
        i += 1;
    }
    out
}

/// Escape sequence for a character with no glyph.
pub fn escape_char(c: char) -> String {
    format!("[\\u{:04x}]", c as u32)
}

/// Replace every character outside `known` by its escape sequence.
///
/// Returns the new text and the number of characters escaped.
pub fn escape_unknown(text: &str, known: &HashSet<char>) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut escaped = 0;
    for c in text.chars() {
        if known.contains(&c) {
            out.push(c);
        } else {
            out.push_str(&escape_char(c));
            escaped += 1;
        }
    }
    (out, escaped)
}

/// Replace ASCII digits with their subscript forms.
pub fn subscript_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x2080 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Prefix `body` with the character legend banner.
///
/// Whitespace runs in the legend collapse to single spaces.
pub fn prepend_legend(legend: &str, body: &str) -> String {
    let legend = legend.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("[[CHARACTERS LEGEND: {legend} CHARACTERS LEGEND END.]]\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_normalizer(options: NormalizeOptions) -> TextNormalizer {
        let glyphs = (' '..='~').chain("₀₁₂₃₄₅₆₇₈₉".chars());
        TextNormalizer::new(glyphs, options)
    }

    #[test]
    fn test_folding_in_order() {
        assert_eq!(fold_typography("“Hi” — it’s…"), "\"Hi\" - it's...");
        assert_eq!(fold_typography(". . . ."), "....");
        assert_eq!(fold_typography("a\tb"), "a    b");
        assert_eq!(fold_typography("x\u{200b}y"), "xy");
        assert_eq!(fold_typography("2 ≤ 3 → ok ©"), "2 <= 3 -> ok (c)");
    }

    #[test]
    fn test_is_folded() {
        assert!(is_folded('—'));
        assert!(is_folded('\u{a0}'));
        assert!(!is_folded('.'));
        assert!(!is_folded('A'));
    }

    #[test]
    fn test_transliteration_case() {
        assert_eq!(transliterate_cyrillic("Жук ёж"), "Zhuk jozh");
        assert_eq!(transliterate_cyrillic("ЩИТ"), "XhIT");
    }

    #[test]
    fn test_reverse_transliteration_round_trip() {
        let original = "Съешь же ещё этих мягких французских булок, да выпей чаю. ЁЖ Ю";
        let latin = transliterate_cyrillic(original);
        assert!(latin.is_ascii());
        assert_eq!(reverse_transliterate(&latin), original);
    }

    #[test]
    fn test_escape_unknown() {
        let known: HashSet<char> = ['a', ' '].into_iter().collect();
        let (text, n) = escape_unknown("a\u{1F600}a é", &known);
        assert_eq!(text, "a[\\u1f600]a [\\u00e9]");
        assert_eq!(n, 2);
    }

    #[test]
    fn test_normalize_emoji() {
        let n = ascii_normalizer(NormalizeOptions::default());
        let out = n.normalize("\u{1F600}");
        assert_eq!(out.text, "[\\u1f600]");
        assert_eq!(out.escaped, 1);
    }

    #[test]
    fn test_transliteration_skipped_when_table_has_cyrillic() {
        let n = TextNormalizer::new("аб".chars(), NormalizeOptions::default());
        let out = n.normalize("аб");
        assert_eq!(out.text, "аб");
        assert!(!out.transliterated);

        let n = ascii_normalizer(NormalizeOptions::default());
        let out = n.normalize("аб");
        assert_eq!(out.text, "ab");
        assert!(out.transliterated);
    }

    #[test]
    fn test_transliteration_disabled_escapes() {
        let n = ascii_normalizer(NormalizeOptions {
            max_density: false,
            transliterate: false,
        });
        assert_eq!(n.normalize("я").text, "[\\u044f]");
    }

    #[test]
    fn test_max_density_lowercases_and_subscripts_escapes() {
        let n = ascii_normalizer(NormalizeOptions {
            max_density: true,
            transliterate: true,
        });
        let out = n.normalize("Page 12 ✓ \u{263a}");
        assert_eq!(out.text, "page ₁₂ v [\\u₂₆₃a]");
    }

    #[test]
    fn test_newline_and_space_always_known() {
        let n = TextNormalizer::new(['x'], NormalizeOptions::default());
        assert_eq!(n.normalize("x x\nx").text, "x x\nx");
        assert_eq!(n.normalize("\r").text, "[\\u000d]");
    }

    /// Escape tokens of `text`, panicking on anything that is not a known
    /// character, space, newline or well-formed `[\uXXXX]` escape.
    fn escape_tokens<'t>(n: &TextNormalizer, text: &'t str) -> Vec<&'t str> {
        let mut tokens = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            if c == ' ' || c == '\n' || n.is_known(c) {
                rest = &rest[c.len_utf8()..];
                continue;
            }
            let body = rest
                .strip_prefix("[\\u")
                .unwrap_or_else(|| panic!("stray {c:?} in {text:?}"));
            let end = body
                .find(']')
                .unwrap_or_else(|| panic!("unterminated escape in {text:?}"));
            let hex = &body[..end];
            assert!(
                (4..=6).contains(&hex.len()) && hex.chars().all(|h| matches!(h, '0'..='9' | 'a'..='f')),
                "malformed escape {hex:?} in {text:?}"
            );
            let len = "[\\u".len() + end + 1;
            tokens.push(&rest[..len]);
            rest = &rest[len..];
        }
        tokens
    }

    #[test]
    fn test_output_only_known_or_escapes() {
        let n = TextNormalizer::new("abc".chars(), NormalizeOptions::default());
        let out = n.normalize("abc xyz — ü \u{1F600}\n");
        assert_eq!(
            escape_tokens(&n, &out.text),
            vec![
                "[\\u0078]",
                "[\\u0079]",
                "[\\u007a]",
                "[\\u002d]",
                "[\\u00fc]",
                "[\\u1f600]"
            ]
        );
        assert_eq!(out.escaped, 6);
    }

    #[test]
    #[should_panic(expected = "malformed escape")]
    fn test_escape_tokens_rejects_short_escape() {
        let n = TextNormalizer::new("abc".chars(), NormalizeOptions::default());
        escape_tokens(&n, "a[\\u7a]");
    }

    #[test]
    fn test_prepend_legend() {
        let text = prepend_legend("  a  b\n\tc ", "body");
        assert_eq!(
            text,
            "[[CHARACTERS LEGEND: a b c CHARACTERS LEGEND END.]]\n\nbody"
        );
    }
}
