//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Printer profiles (port, columns, timeouts)

pub mod config;

pub use config::PrinterConfig;
