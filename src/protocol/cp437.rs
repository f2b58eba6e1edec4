//! # Code Page 437 Transliteration
//!
//! Quoted IR literals are written to the printer one byte per character.
//! ESC/POS printers power up in Code Page 437 (`ESC t 0`), so ASCII passes
//! through unchanged and the upper half maps to box drawing, shade blocks,
//! accented Latin and a few Greek and math symbols.
//!
//! Characters with no CP437 representation become `?` and a warning is logged.

use tracing::warn;

/// CP437 upper half. Index `i` holds the character printed for byte `0x80 + i`.
const UPPER_HALF: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0: shades, then box drawing
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0: box drawing, then block elements
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0: Greek and math
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Byte substituted for characters outside CP437.
pub const REPLACEMENT: u8 = b'?';

/// Map a character to its CP437 byte, if it has one.
pub fn to_byte(ch: char) -> Option<u8> {
    if ch.is_ascii() {
        return Some(ch as u8);
    }
    UPPER_HALF
        .iter()
        .position(|&c| c == ch)
        .map(|i| 0x80 + i as u8)
}

/// Map a character to exactly one output byte, falling back to `?`.
pub fn transliterate(ch: char) -> u8 {
    to_byte(ch).unwrap_or_else(|| {
        warn!(
            "cp437: unmapped character '{}' (U+{:04X}), replacing with '?'",
            ch, ch as u32
        );
        REPLACEMENT
    })
}

/// Encode a string as CP437, one byte per character.
pub fn encode(s: &str) -> Vec<u8> {
    s.chars().map(transliterate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Hello, world!"), b"Hello, world!");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode(""), b"");
    }

    #[test]
    fn test_one_byte_per_char() {
        let s = "Año ░▒▓█ ±2°";
        assert_eq!(encode(s).len(), s.chars().count());
    }

    #[test]
    fn test_accented_latin() {
        assert_eq!(encode("Ç"), vec![0x80]);
        assert_eq!(encode("é"), vec![0x82]);
        assert_eq!(encode("ñ"), vec![0xA4]);
        assert_eq!(encode("Ñ"), vec![0xA5]);
        assert_eq!(encode("¿Qué?"), vec![0xA8, 0x51, 0x75, 0x82, 0x3F]);
    }

    #[test]
    fn test_shade_levels() {
        // The preview palette
        assert_eq!(encode("░▒▓█"), vec![0xB0, 0xB1, 0xB2, 0xDB]);
    }

    #[test]
    fn test_box_frame() {
        assert_eq!(encode("┌──┐"), vec![0xDA, 0xC4, 0xC4, 0xBF]);
        assert_eq!(encode("╚═╝"), vec![0xC8, 0xCD, 0xBC]);
    }

    #[test]
    fn test_table_edges() {
        assert_eq!(to_byte('Ç'), Some(0x80));
        assert_eq!(to_byte('ƒ'), Some(0x9F));
        assert_eq!(to_byte('α'), Some(0xE0));
        assert_eq!(to_byte('\u{00A0}'), Some(0xFF));
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        assert_eq!(to_byte('★'), None);
        assert_eq!(encode("★"), vec![REPLACEMENT]);
        assert_eq!(encode("a★b"), vec![b'a', b'?', b'b']);
    }
}
