//! # Golden Tests
//!
//! These tests pin the IR text the builder writes and the bytes the
//! converter produces for it.
//!
//! ## Test Coverage
//!
//! - **IR tests** (`.ir`): the sample receipt must be written byte-for-byte
//!   as stored in `tests/golden/receipt.ir`.
//! - **Byte tests**: golden IR files (one builder-made, one hand-written)
//!   must convert to known ESC/POS sequences.
//! - **Protocol properties**: every mnemonic, every byte literal, tab and
//!   newline handling, clamping, idempotence.
//!
//! ## Regenerating Golden Files
//!
//! ```bash
//! cargo run -- demo receipt > tests/golden/receipt.ir
//! ```

use escpos_ir::ir::{Builder, Converter, Verbosity};
use escpos_ir::protocol::ControlCode;
use escpos_ir::{EscposError, receipt};
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::BufReader;

const RECEIPT_IR: &str = include_str!("golden/receipt.ir");
const HANDWRITTEN_IR: &str = include_str!("golden/handwritten.ir");

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn build(f: impl FnOnce(&mut Builder<Vec<u8>>) -> std::io::Result<()>) -> String {
    let mut builder = Builder::new(Vec::new());
    f(&mut builder).unwrap();
    String::from_utf8(builder.into_inner()).unwrap()
}

fn convert(ir: &str) -> Result<Vec<u8>, EscposError> {
    Converter::new(Verbosity::Quiet).convert_str(ir)
}

/// Build with `f`, then convert the IR.
fn build_bytes(f: impl FnOnce(&mut Builder<Vec<u8>>) -> std::io::Result<()>) -> Vec<u8> {
    convert(&build(f)).unwrap()
}

// ============================================================================
// GOLDEN FILES
// ============================================================================

#[test]
fn test_receipt_ir_matches_golden() {
    let ir = build(|b| receipt::demo_receipt(b));
    assert_eq!(ir, RECEIPT_IR);
}

#[test]
fn test_receipt_golden_bytes() {
    let bytes = convert(RECEIPT_IR).unwrap();

    let mut expected_head = vec![0x1B, b'@', 0x1B, b'a', 1, 0x1D, b'!', 0x11, 0x1B, b'E', 1];
    expected_head.extend(b"CHURRA MART\n");
    assert_eq!(&bytes[..expected_head.len()], &expected_head[..]);

    let item = b"Liminal Espresso\t4.50\n";
    assert!(bytes.windows(item.len()).any(|w| w == item));

    assert!(bytes.ends_with(b"thank you for your vibes\n\x1dVB\x03"));
}

#[test]
fn test_handwritten_golden_bytes() {
    let mut expected = vec![
        0x1B, 0x40, // ESC "@"
        0x1B, 0x61, 0x01, // ESC 0x61 1
        0x1D, 0x21, 0x11, // GS "!" 0x11
    ];
    expected.extend([b'C', b'a', b'f', 0x82, b' ', 0xB0, 0xB1, 0xB2, 0xDB, 0x0A]);
    expected.extend(b"  two  spaces  \n");
    expected.extend([0x1B, b'd', 3]);
    expected.extend([0x1D, b'V', 0x41, 0]);

    assert_eq!(convert(HANDWRITTEN_IR).unwrap(), expected);
}

#[test]
fn test_convert_from_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/golden/handwritten.ir");
    let reader = BufReader::new(File::open(path).unwrap());

    let mut out = Vec::new();
    let stats = Converter::new(Verbosity::Trace).convert(reader, &mut out).unwrap();

    assert_eq!(out, convert(HANDWRITTEN_IR).unwrap());
    assert_eq!(stats.lines, 12);
    assert_eq!(stats.instructions, 7);
    assert_eq!(stats.bytes, out.len());
}

// ============================================================================
// PROTOCOL PROPERTIES
// ============================================================================

#[test]
fn test_every_mnemonic_is_one_byte() {
    for code in ControlCode::ALL {
        let ir = format!("{}\n", code.name());
        assert_eq!(convert(&ir).unwrap(), vec![code.value()], "{}", code.name());
    }
}

#[test]
fn test_every_byte_literal() {
    for v in 0..=255u8 {
        // one-digit lines are blank, so pair each literal with a mnemonic
        assert_eq!(convert(&format!("{v} LF\n")).unwrap(), vec![v, 0x0A]);
        assert_eq!(convert(&format!("0x{v:x} LF\n")).unwrap(), vec![v, 0x0A]);
        assert_eq!(convert(&format!("0x{v:02X}\n")).unwrap(), vec![v]);
    }
    for v in 10..=255u8 {
        assert_eq!(convert(&format!("{v}\n")).unwrap(), vec![v]);
    }
}

#[test]
fn test_print_tab_newline_split() {
    let bytes = build_bytes(|b| b.print("A\tB\nC"));
    assert_eq!(bytes, vec![b'A', 0x09, b'B', 0x0A, b'C', 0x0A]);
}

#[test]
fn test_quote_span_preserves_space() {
    assert_eq!(convert("\"Hello World\" LF\n").unwrap(), b"Hello World\n");
}

#[test]
fn test_clamping() {
    assert_eq!(
        build_bytes(|b| b.character_size(9, 9)),
        build_bytes(|b| b.character_size(7, 7))
    );
    assert_eq!(build_bytes(|b| b.character_size(7, 7)), vec![0x1D, b'!', 0x77]);
    assert_eq!(build_bytes(|b| b.print_feed(300)), build_bytes(|b| b.print_feed(255)));
    assert_eq!(build_bytes(|b| b.print_feed(300)), vec![0x1B, b'J', 255]);
}

#[test]
fn test_operation_bytes() {
    assert_eq!(build_bytes(|b| b.initialize_printer()), vec![0x1B, 0x40]);
    assert_eq!(build_bytes(|b| b.character_font(1)), vec![0x1B, b'M', 1]);
    assert_eq!(build_bytes(|b| b.justification("right")), vec![0x1B, b'a', 2]);
    assert_eq!(build_bytes(|b| b.justification("diagonal")), Vec::<u8>::new());
    assert_eq!(build_bytes(|b| b.home(true)), vec![0x1D, b'T', 1]);
    assert_eq!(build_bytes(|b| b.cut(0, false)), vec![0x1D, b'V', 1]);
    assert_eq!(build_bytes(|b| b.cut(5, true)), vec![0x1D, b'V', 65, 5]);
    assert_eq!(build_bytes(|b| b.strong(true)), vec![0x1B, b'E', 1]);
    assert_eq!(build_bytes(|b| b.default_line_spacing()), vec![0x1B, b'2']);
    assert_eq!(build_bytes(|b| b.line_spacing(40)), vec![0x1B, b'3', 40]);
    assert_eq!(build_bytes(|b| b.print_feed_lines(4)), vec![0x1B, b'd', 4]);
}

#[test]
fn test_conversion_is_idempotent() {
    let first = convert(RECEIPT_IR).unwrap();
    let second = convert(RECEIPT_IR).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unterminated_quote_at_end_of_document() {
    let result = convert("ESC \"@\"\n\"abc");
    assert!(matches!(
        result,
        Err(EscposError::UnterminatedQuote { line: 2, .. })
    ));
}
