//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to printers.
//!
//! ## Available Transports
//!
//! - [`network`]: raw TCP to a network printer (port 9100)

pub mod network;

pub use network::NetworkTransport;
