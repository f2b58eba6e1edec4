//! # ESC/POS Control Codes
//!
//! The fixed table of mnemonics the IR understands. Each mnemonic stands for
//! exactly one byte of the ESC/POS command stream.
//!
//! ## Table
//!
//! | Mnemonic | Hex  | Meaning |
//! |----------|------|---------|
//! | EOT      | 0x04 | End of transmission |
//! | ENQ      | 0x05 | Enquiry |
//! | HT       | 0x09 | Horizontal tab |
//! | DLE      | 0x10 | Data link escape |
//! | LF       | 0x0A | Print and line feed |
//! | FF       | 0x0C | Print and return to standard mode (page mode) |
//! | CR       | 0x0D | Carriage return |
//! | DC4      | 0x14 | Device control 4 |
//! | CAN      | 0x18 | Cancel print data |
//! | ESC      | 0x1B | Escape, command prefix |
//! | FS       | 0x1C | File separator, kanji command prefix |
//! | GS       | 0x1D | Group separator, extended command prefix |
//! | SP       | 0x20 | Space |
//!
//! ## Example
//!
//! ```
//! use escpos_ir::protocol::controls::ControlCode;
//!
//! assert_eq!(ControlCode::from_name("ESC"), Some(ControlCode::Esc));
//! assert_eq!(ControlCode::Esc.value(), 0x1B);
//! assert_eq!(ControlCode::from_name("NUL"), None);
//! ```
//!
//! ## Reference
//!
//! Epson ESC/POS Command Reference, "Control codes".

use std::fmt;

/// LF (Line Feed) - Print and advance one line
///
/// Doubles as the record delimiter when scanning IR text.
pub const LF: u8 = 0x0A;

/// Space byte, re-inserted between the pieces of a quoted literal.
pub const SP: u8 = 0x20;

/// A single-byte ESC/POS control code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCode {
    Eot,
    Enq,
    Ht,
    Dle,
    Lf,
    Ff,
    Cr,
    Dc4,
    Can,
    Esc,
    Fs,
    Gs,
    Sp,
}

impl ControlCode {
    /// Every control code, in byte order.
    pub const ALL: [ControlCode; 13] = [
        ControlCode::Eot,
        ControlCode::Enq,
        ControlCode::Ht,
        ControlCode::Lf,
        ControlCode::Ff,
        ControlCode::Cr,
        ControlCode::Dle,
        ControlCode::Dc4,
        ControlCode::Can,
        ControlCode::Esc,
        ControlCode::Fs,
        ControlCode::Gs,
        ControlCode::Sp,
    ];

    /// Look up a mnemonic. Matching is exact and case-sensitive.
    ///
    /// Returns `None` for unknown names, so `SP` (0x20) is never confused
    /// with a missing entry.
    pub fn from_name(name: &str) -> Option<Self> {
        let code = match name {
            "EOT" => ControlCode::Eot,
            "ENQ" => ControlCode::Enq,
            "HT" => ControlCode::Ht,
            "DLE" => ControlCode::Dle,
            "LF" => ControlCode::Lf,
            "FF" => ControlCode::Ff,
            "CR" => ControlCode::Cr,
            "DC4" => ControlCode::Dc4,
            "CAN" => ControlCode::Can,
            "ESC" => ControlCode::Esc,
            "FS" => ControlCode::Fs,
            "GS" => ControlCode::Gs,
            "SP" => ControlCode::Sp,
            _ => return None,
        };
        Some(code)
    }

    /// The mnemonic as written in IR text.
    pub const fn name(self) -> &'static str {
        match self {
            ControlCode::Eot => "EOT",
            ControlCode::Enq => "ENQ",
            ControlCode::Ht => "HT",
            ControlCode::Dle => "DLE",
            ControlCode::Lf => "LF",
            ControlCode::Ff => "FF",
            ControlCode::Cr => "CR",
            ControlCode::Dc4 => "DC4",
            ControlCode::Can => "CAN",
            ControlCode::Esc => "ESC",
            ControlCode::Fs => "FS",
            ControlCode::Gs => "GS",
            ControlCode::Sp => "SP",
        }
    }

    /// The protocol byte.
    pub const fn value(self) -> u8 {
        match self {
            ControlCode::Eot => 0x04,
            ControlCode::Enq => 0x05,
            ControlCode::Ht => 0x09,
            ControlCode::Dle => 0x10,
            ControlCode::Lf => LF,
            ControlCode::Ff => 0x0C,
            ControlCode::Cr => 0x0D,
            ControlCode::Dc4 => 0x14,
            ControlCode::Can => 0x18,
            ControlCode::Esc => 0x1B,
            ControlCode::Fs => 0x1C,
            ControlCode::Gs => 0x1D,
            ControlCode::Sp => SP,
        }
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte value for a mnemonic, if it exists.
#[inline]
pub fn lookup(name: &str) -> Option<u8> {
    ControlCode::from_name(name).map(ControlCode::value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_protocol_values() {
        assert_eq!(lookup("EOT"), Some(0x04));
        assert_eq!(lookup("ENQ"), Some(0x05));
        assert_eq!(lookup("HT"), Some(0x09));
        assert_eq!(lookup("DLE"), Some(0x10));
        assert_eq!(lookup("LF"), Some(0x0A));
        assert_eq!(lookup("FF"), Some(0x0C));
        assert_eq!(lookup("CR"), Some(0x0D));
        assert_eq!(lookup("DC4"), Some(0x14));
        assert_eq!(lookup("CAN"), Some(0x18));
        assert_eq!(lookup("ESC"), Some(0x1B));
        assert_eq!(lookup("FS"), Some(0x1C));
        assert_eq!(lookup("GS"), Some(0x1D));
        assert_eq!(lookup("SP"), Some(0x20));
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(lookup("NUL"), None);
        assert_eq!(lookup(""), None);
        // case-sensitive
        assert_eq!(lookup("esc"), None);
        assert_eq!(lookup("ESC "), None);
    }

    #[test]
    fn test_name_round_trip() {
        for code in ControlCode::ALL {
            assert_eq!(ControlCode::from_name(code.name()), Some(code));
            assert_eq!(code.to_string(), code.name());
        }
    }

    #[test]
    fn test_names_and_values_unique() {
        let names: HashSet<_> = ControlCode::ALL.iter().map(|c| c.name()).collect();
        let values: HashSet<_> = ControlCode::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(names.len(), ControlCode::ALL.len());
        assert_eq!(values.len(), ControlCode::ALL.len());
    }
}
