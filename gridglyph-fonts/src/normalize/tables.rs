//! Static substitution tables used by the text normalizer.

/// Ordered literal replacements folding typography, accented letters and
/// symbols onto the ASCII-centric glyph repertoire.
///
/// Applied one entry at a time over the whole text, in this order.
pub const TYPOGRAPHIC_FOLDING: &[(&str, &str)] = &[
    ("—", "-"), // EM DASH
    ("–", "-"), // EN DASH
    ("“", "\""), // LEFT DOUBLE QUOTATION MARK
    ("”", "\""), // RIGHT DOUBLE QUOTATION MARK
    ("„", "\""), // DOUBLE LOW-9 QUOTATION MARK
    ("«", "\""), // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    ("»", "\""), // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    ("‘", "'"), // LEFT SINGLE QUOTATION MARK
    ("’", "'"), // RIGHT SINGLE QUOTATION MARK
    ("‚", "'"), // SINGLE LOW-9 QUOTATION MARK
    ("‹", "'"), // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    ("›", "'"), // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    ("…", "..."), // HORIZONTAL ELLIPSIS
    (". . . .", "...."), // SPACED ELLIPSIS
    (". . .", "..."), // SPACED ELLIPSIS
    ("´", "'"), // ACUTE ACCENT
    ("\t", "    "), // CHARACTER TABULATION
    ("À", "A"), // LATIN CAPITAL LETTER A WITH GRAVE
    ("Æ", "AE"), // LATIN CAPITAL LETTER AE
    ("à", "a"), // LATIN SMALL LETTER A WITH GRAVE
    ("â", "a"), // LATIN SMALL LETTER A WITH CIRCUMFLEX
    ("æ", "ae"), // LATIN SMALL LETTER AE
    ("ç", "c"), // LATIN SMALL LETTER C WITH CEDILLA
    ("è", "e"), // LATIN SMALL LETTER E WITH GRAVE
    ("ê", "e"), // LATIN SMALL LETTER E WITH CIRCUMFLEX
    ("ë", "e"), // LATIN SMALL LETTER E WITH DIAERESIS
    ("î", "i"), // LATIN SMALL LETTER I WITH CIRCUMFLEX
    ("ï", "i"), // LATIN SMALL LETTER I WITH DIAERESIS
    ("ô", "o"), // LATIN SMALL LETTER O WITH CIRCUMFLEX
    ("ý", "y"), // LATIN SMALL LETTER Y WITH ACUTE
    ("œ", "oe"), // LATIN SMALL LIGATURE OE
    ("ű", "u"), // LATIN SMALL LETTER U WITH DOUBLE ACUTE
    ("\u{2007}", " "), // FIGURE SPACE
    ("•", "-"), // BULLET
    ("↑", "^"), // UPWARDS ARROW
    ("∗", "*"), // ASTERISK OPERATOR
    ("⋅", "."), // DOT OPERATOR
    ("\u{a0}", " "), // NO-BREAK SPACE
    ("§", "S"), // SECTION SIGN
    ("¨", "\""), // DIAERESIS
    ("©", "(c)"), // COPYRIGHT SIGN
    ("\u{ad}", "-"), // SOFT HYPHEN
    ("®", "(r)"), // REGISTERED SIGN
    ("°", "*"), // DEGREE SIGN
    ("±", "+-"), // PLUS-MINUS SIGN
    ("²", "2"), // SUPERSCRIPT TWO
    ("³", "3"), // SUPERSCRIPT THREE
    ("·", "."), // MIDDLE DOT
    ("¹", "1"), // SUPERSCRIPT ONE
    ("º", "o"), // MASCULINE ORDINAL INDICATOR
    ("¼", "1/4"), // VULGAR FRACTION ONE QUARTER
    ("×", "x"), // MULTIPLICATION SIGN
    ("å", "a"), // LATIN SMALL LETTER A WITH RING ABOVE
    ("÷", "/"), // DIVISION SIGN
    ("ā", "a"), // LATIN SMALL LETTER A WITH MACRON
    ("Ć", "C"), // LATIN CAPITAL LETTER C WITH ACUTE
    ("ć", "c"), // LATIN SMALL LETTER C WITH ACUTE
    ("č", "c"), // LATIN SMALL LETTER C WITH CARON
    ("ĺ", "l"), // LATIN SMALL LETTER L WITH ACUTE
    ("ō", "o"), // LATIN SMALL LETTER O WITH MACRON
    ("Š", "S"), // LATIN CAPITAL LETTER S WITH CARON
    ("š", "s"), // LATIN SMALL LETTER S WITH CARON
    ("ž", "z"), // LATIN SMALL LETTER Z WITH CARON
    ("ɓ", "b"), // LATIN SMALL LETTER B WITH HOOK
    ("˜", "~"), // SMALL TILDE
    ("\u{301}", "'"), // COMBINING ACUTE ACCENT
    ("\u{335}", "-"), // COMBINING SHORT STROKE OVERLAY
    ("Π", "P"), // GREEK CAPITAL LETTER PI
    ("Σ", "E"), // GREEK CAPITAL LETTER SIGMA
    ("α", "a"), // GREEK SMALL LETTER ALPHA
    ("γ", "y"), // GREEK SMALL LETTER GAMMA
    ("η", "n"), // GREEK SMALL LETTER ETA
    ("π", "pi"), // GREEK SMALL LETTER PI
    ("ρ", "p"), // GREEK SMALL LETTER RHO
    ("χ", "x"), // GREEK SMALL LETTER CHI
    ("І", "I"), // CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I
    ("і", "i"), // CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I
    ("ѣ", "e"), // CYRILLIC SMALL LETTER YAT
    ("ѫ", "o"), // CYRILLIC SMALL LETTER BIG YUS
    ("ᵢ", "i"), // LATIN SUBSCRIPT SMALL LETTER I
    ("ṣ", "s"), // LATIN SMALL LETTER S WITH DOT BELOW
    ("\u{200b}", ""), // ZERO WIDTH SPACE
    ("\u{200d}", ""), // ZERO WIDTH JOINER
    ("‐", "-"), // HYPHEN
    ("‑", "-"), // NON-BREAKING HYPHEN
    ("―", "-"), // HORIZONTAL BAR
    ("\u{2061}", ""), // FUNCTION APPLICATION
    ("⁰", "0"), // SUPERSCRIPT ZERO
    ("⁴", "4"), // SUPERSCRIPT FOUR
    ("⁵", "5"), // SUPERSCRIPT FIVE
    ("⁷", "7"), // SUPERSCRIPT SEVEN
    ("⁸", "8"), // SUPERSCRIPT EIGHT
    ("⁹", "9"), // SUPERSCRIPT NINE
    ("ₐ", "a"), // LATIN SUBSCRIPT SMALL LETTER A
    ("ₓ", "x"), // LATIN SUBSCRIPT SMALL LETTER X
    ("ₘ", "m"), // LATIN SUBSCRIPT SMALL LETTER M
    ("€", "E"), // EURO SIGN
    ("\u{20e3}", ""), // COMBINING ENCLOSING KEYCAP
    ("№", "No"), // NUMERO SIGN
    ("™", "tm"), // TRADE MARK SIGN
    ("⅓", "1/3"), // VULGAR FRACTION ONE THIRD
    ("←", "<-"), // LEFTWARDS ARROW
    ("→", "->"), // RIGHTWARDS ARROW
    ("↔", "<->"), // LEFT RIGHT ARROW
    ("⇒", "=>"), // RIGHTWARDS DOUBLE ARROW
    ("∆", "^"), // INCREMENT
    ("∑", "E"), // N-ARY SUMMATION
    ("−", "-"), // MINUS SIGN
    ("√", "v"), // SQUARE ROOT
    ("∞", "oo"), // INFINITY
    ("≈", "~"), // ALMOST EQUAL TO
    ("≠", "!="), // NOT EQUAL TO
    ("≤", "<="), // LESS-THAN OR EQUAL TO
    ("≥", ">="), // GREATER-THAN OR EQUAL TO
    ("─", "-"), // BOX DRAWINGS LIGHT HORIZONTAL
    ("│", "|"), // BOX DRAWINGS LIGHT VERTICAL
    ("└", "L"), // BOX DRAWINGS LIGHT UP AND RIGHT
    ("├", "+"), // BOX DRAWINGS LIGHT VERTICAL AND RIGHT
    ("■", "#"), // BLACK SQUARE
    ("▪", "-"), // BLACK SMALL SQUARE
    ("►", ">"), // BLACK RIGHT-POINTING POINTER
    ("○", "o"), // WHITE CIRCLE
    ("●", "O"), // BLACK CIRCLE
    ("◦", "o"), // WHITE BULLET
    ("★", "*"), // BLACK STAR
    ("☆", "*"), // WHITE STAR
    ("☐", "[]"), // BALLOT BOX
    ("☑", "[x]"), // BALLOT BOX WITH CHECK
    ("♀", "f"), // FEMALE SIGN
    ("♂", "m"), // MALE SIGN
    ("♥", "<3"), // BLACK HEART SUIT
    ("♾", "oo"), // PERMANENT PAPER SIGN
    ("⚡", "z"), // HIGH VOLTAGE SIGN
    ("✅", "[x]"), // WHITE HEAVY CHECK MARK
    ("✓", "v"), // CHECK MARK
    ("✔", "v"), // HEAVY CHECK MARK
    ("❌", "x"), // CROSS MARK
    ("❤", "<3"), // HEAVY BLACK HEART
    ("➡", "->"), // BLACK RIGHTWARDS ARROW
    ("⟶", "->"), // LONG RIGHTWARDS ARROW
    ("⨁", "+"), // N-ARY CIRCLED PLUS OPERATOR
    ("⭐", "*"), // WHITE MEDIUM STAR
    ("⭕", "O"), // HEAVY LARGE CIRCLE
    ("、", ","), // IDEOGRAPHIC COMMA
    ("。", "."), // IDEOGRAPHIC FULL STOP
    ("《", "<"), // LEFT DOUBLE ANGLE BRACKET
    ("》", ">"), // RIGHT DOUBLE ANGLE BRACKET
    ("Ç", "C"), // LATIN CAPITAL LETTER C WITH CEDILLA
    ("ò", "o"), // LATIN SMALL LETTER O WITH GRAVE
    ("ù", "u"), // LATIN SMALL LETTER U WITH GRAVE
    ("û", "u"), // LATIN SMALL LETTER U WITH CIRCUMFLEX
    ("ę", "e"), // LATIN SMALL LETTER E WITH OGONEK
    ("ȃ", "a"), // LATIN SMALL LETTER A WITH INVERTED BREVE
    ("\u{300}", "'"), // COMBINING GRAVE ACCENT
    ("ό", "o"), // GREEK SMALL LETTER OMICRON WITH TONOS
    ("ỳ", "y"), // LATIN SMALL LETTER Y WITH GRAVE
    ("\u{2009}", " "), // THIN SPACE
    ("\u{202f}", " "), // NARROW NO-BREAK SPACE
];

/// Lowercase Cyrillic letters and their Latin digraphs.
///
/// Every target is distinct, so the mapping can be inverted. Uppercase
/// letters map to the capitalized digraph.
pub const CYRILLIC_TRANSLITERATION: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "je"),
    ('ё', "jo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "ji"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "kh"),
    ('ц', "c"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "xh"),
    ('ъ', "qh"),
    ('ы', "yh"),
    ('ь', "jh"),
    ('э', "e"),
    ('ю', "uh"),
    ('я', "ja"),
];

/// Letter whose presence in a glyph table means Cyrillic is drawn natively.
pub const CYRILLIC_MARKER: char = '\u{430}'; // CYRILLIC SMALL LETTER A
