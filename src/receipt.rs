//! # Sample Jobs
//!
//! Ready-made IR documents demonstrating the builder operations. Useful for
//! checking a printer end to end:
//!
//! ```bash
//! escpos demo receipt > receipt.ir
//! escpos print 192.168.1.50 --file receipt.ir
//! ```

use std::io::{self, Write};

use crate::ir::{Builder, Justification};

// ============================================================================
// TEMPLATES
// ============================================================================

/// A short shop receipt.
///
/// Features demonstrated:
/// - Justification (left, center, right)
/// - Emphasis
/// - Character magnification
/// - Tab-separated columns
/// - Feed and partial cut
pub fn demo_receipt<W: Write>(b: &mut Builder<W>) -> io::Result<()> {
    b.initialize_printer()?;

    // Header
    b.justify(Justification::Center)?;
    b.character_size(1, 1)?;
    b.strong(true)?;
    b.print("CHURRA MART")?;
    b.strong(false)?;
    b.character_size(0, 0)?;
    b.print("esc/pos demo receipt\n2026-01-20 12:00:00")?;
    b.print_feed_lines(1)?;

    // Items
    b.justify(Justification::Left)?;
    b.print("Liminal Espresso\t4.50")?;
    b.print("Basement Techno Vinyl\t29.00")?;
    b.print("Thermal Paper (mystery)\t7.25")?;
    b.print("------------------------------------------")?;

    // Totals
    b.justify(Justification::Right)?;
    b.strong(true)?;
    b.print("TOTAL: 40.75")?;
    b.strong(false)?;

    b.justify(Justification::Center)?;
    b.print_feed_lines(2)?;
    b.print("thank you for your vibes")?;

    b.cut(3, false)
}

/// Every font code, followed by a line of sample text in that font.
///
/// Codes 5 and 99 are deliberately unknown, to show the warning comment.
pub fn font_sampler<W: Write>(b: &mut Builder<W>) -> io::Result<()> {
    b.initialize_printer()?;

    for code in [0u8, 1, 2, 3, 4, 5, 97, 98, 99] {
        b.character_font(code)?;
        b.print(&format!("font {code}: The quick brown fox"))?;
    }

    b.character_font(0)?;
    b.print_feed(48)?;
    b.cut(0, true)
}

/// Character magnification grid, 1x1 through 4x4.
pub fn size_sampler<W: Write>(b: &mut Builder<W>) -> io::Result<()> {
    b.initialize_printer()?;
    b.line_spacing(60)?;

    for size in 0..4u8 {
        b.character_size(size, size)?;
        b.print(&format!("{}x", size + 1))?;
    }

    b.character_size(0, 0)?;
    b.default_line_spacing()?;
    b.home(true)?;
    b.cut(3, true)
}

// ============================================================================
// REGISTRY
// ============================================================================

const RECEIPTS: &[&str] = &["receipt", "fonts", "sizes"];

/// Names accepted by [`by_name`].
pub fn list_receipts() -> &'static [&'static str] {
    RECEIPTS
}

pub fn is_receipt(name: &str) -> bool {
    RECEIPTS.contains(&name)
}

/// Write the named sample job. Returns `Ok(false)` for an unknown name.
pub fn by_name<W: Write>(name: &str, b: &mut Builder<W>) -> io::Result<bool> {
    match name {
        "receipt" => demo_receipt(b)?,
        "fonts" => font_sampler(b)?,
        "sizes" => size_sampler(b)?,
        _ => return Ok(false),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Converter, Verbosity};

    fn render(name: &str) -> String {
        let mut builder = Builder::new(Vec::new());
        assert!(by_name(name, &mut builder).unwrap());
        String::from_utf8(builder.into_inner()).unwrap()
    }

    #[test]
    fn test_all_receipts_convert() {
        let converter = Converter::new(Verbosity::Quiet);
        for name in list_receipts() {
            let ir = render(name);
            let bytes = converter.convert_str(&ir).unwrap();
            // every job starts with ESC @
            assert_eq!(&bytes[..2], &[0x1B, 0x40], "{name}");
        }
    }

    #[test]
    fn test_unknown_receipt() {
        let mut builder = Builder::new(Vec::new());
        assert!(!by_name("nope", &mut builder).unwrap());
        assert!(builder.get_ref().is_empty());
        assert!(!is_receipt("nope"));
        assert!(is_receipt("fonts"));
    }

    #[test]
    fn test_font_sampler_flags_unknown_fonts() {
        let ir = render("fonts");
        assert_eq!(ir.matches("WARNING: Select Unknown Font").count(), 2);
    }

    #[test]
    fn test_receipt_ends_with_feed_cut() {
        let bytes = Converter::default().convert_str(&render("receipt")).unwrap();
        assert!(bytes.ends_with(&[0x1D, b'V', 66, 3]));
    }
}
