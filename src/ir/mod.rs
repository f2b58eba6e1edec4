//! # Intermediate Representation (IR)
//!
//! The IR is a line-oriented text encoding of an ESC/POS byte stream. It can
//! be written by hand, generated with the [`Builder`], stored in a file, and
//! turned into printer bytes with the [`Converter`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │   Builder   │ ──► │   IR text   │ ──► │ Converter │ ──► │  bytes   │
//! │ (operations)│     │ (file/pipe) │     │           │     │ (printer)│
//! └─────────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Format
//!
//! ```text
//! '// Initialize printer
//!     ESC "@"
//! '// Character magnification Wx2 Hx2
//!     GS "!" 0x11
//!     "Hello World" LF
//! ```
//!
//! - `'//` starts a comment line
//! - mnemonics (`ESC`, `GS`, `LF`, ...) are single control bytes
//! - `27`, `0x1B` are byte literals
//! - `"..."` is text, one CP437 byte per character
//!
//! ## Example
//!
//! ```
//! use escpos_ir::ir::{Builder, Converter, Verbosity};
//!
//! let mut builder = Builder::new(Vec::new());
//! builder.strong(true)?;
//! builder.print("Hi\tthere")?;
//! let ir = builder.into_inner();
//!
//! let bytes = Converter::new(Verbosity::Quiet).convert_str(std::str::from_utf8(&ir)?)?;
//! assert_eq!(bytes, b"\x1bE\x01Hi\tthere\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod convert;
pub mod token;

pub use builder::{Builder, Font, Justification, MAX_MAGNIFICATION};
pub use convert::{ConvertStats, Converter, Verbosity};
pub use token::{Line, QuoteState, Token};
