//! # ESC/POS Protocol Tables
//!
//! Byte-level facts about the printer protocol, shared read-only by the
//! builder and the converter.
//!
//! ## Module Structure
//!
//! - [`controls`]: Control-code mnemonics (`ESC`, `GS`, `LF`, ...) and their bytes
//! - [`cp437`]: Character transliteration for quoted text
//!
//! ## Usage Example
//!
//! ```
//! use escpos_ir::protocol::{controls, cp437};
//!
//! let mut data = Vec::new();
//! data.push(controls::lookup("ESC").unwrap());
//! data.extend(cp437::encode("@"));
//! assert_eq!(data, vec![0x1B, 0x40]);
//! ```
//!
//! ## Protocol Reference
//!
//! Epson "ESC/POS Command Reference for TM Printers".

pub mod controls;
pub mod cp437;

pub use controls::ControlCode;
