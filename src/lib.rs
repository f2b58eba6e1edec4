//! # escpos-ir - ESC/POS Intermediate Representation
//!
//! escpos-ir is a Rust library for driving Epson ESC/POS thermal printers
//! through a human-readable text format. It provides:
//!
//! - **Builder**: named printer operations → IR text
//! - **Converter**: IR text → raw ESC/POS bytes
//! - **Preview**: images → ASCII-art IR using CP437 shade blocks
//! - **Transport**: raw TCP printing (port 9100)
//!
//! ## Quick Start
//!
//! ```no_run
//! use escpos_ir::{
//!     ir::{Builder, Converter, Verbosity},
//!     printer::PrinterConfig,
//!     transport::NetworkTransport,
//! };
//!
//! // Write IR
//! let mut builder = Builder::new(Vec::new());
//! builder.initialize_printer()?;
//! builder.justification("center")?;
//! builder.print("Hello World")?;
//! builder.cut(3, true)?;
//! let ir = builder.into_inner();
//!
//! // Convert it straight into a printer connection
//! let transport = NetworkTransport::connect("192.168.1.50:9100", &PrinterConfig::default())?;
//! Converter::new(Verbosity::Quiet).convert(&ir[..], transport)?;
//!
//! # Ok::<(), escpos_ir::EscposError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Control-code table and CP437 transliteration |
//! | [`ir`] | IR tokens, builder and converter |
//! | [`preview`] | Image to ASCII-art IR |
//! | [`transport`] | Network printer connection |
//! | [`printer`] | Printer profiles |
//! | [`receipt`] | Sample jobs |
//! | [`error`] | Error types |

pub mod error;
pub mod ir;
pub mod preview;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod transport;

// Re-exports for convenience
pub use error::EscposError;
pub use ir::{Builder, Converter, Verbosity};
pub use printer::PrinterConfig;
pub use transport::NetworkTransport;
