//! # Printer Configuration
//!
//! Profiles describing the network printer a job is sent to.
//!
//! ## Built-in Profiles
//!
//! | Model | Port | Font A cols | Font B cols | Connect timeout |
//! |-------|------|-------------|-------------|-----------------|
//! | Epson TM-T88V | 9100 | 42 | 56 | 5 s |
//!
//! ## Custom Profiles
//!
//! Any field may be omitted from a JSON profile; missing fields fall back to
//! the TM-T88V values.
//!
//! ```
//! use escpos_ir::printer::PrinterConfig;
//!
//! let config = PrinterConfig::from_json(r#"{ "name": "Kitchen", "port": 9101 }"#)?;
//! assert_eq!(config.port, 9101);
//! assert_eq!(config.columns_font_b, 56);
//! # Ok::<(), escpos_ir::EscposError>(())
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EscposError;

/// # Printer Configuration
///
/// ## Fields
///
/// - **port**: raw TCP print port, used when the host has none
/// - **columns_font_a / columns_font_b**: characters per line for the
///   two standard fonts (ASCII-art previews are sized to Font B)
/// - **connect_timeout_ms**: TCP connect timeout
/// - **write_timeout_ms**: optional per-write timeout on the socket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: Cow<'static, str>,

    /// Raw print port (JetDirect / AppSocket)
    pub port: u16,

    /// Characters per line in Font A (12×24)
    pub columns_font_a: u16,

    /// Characters per line in Font B (9×17)
    pub columns_font_b: u16,

    pub connect_timeout_ms: u64,

    pub write_timeout_ms: Option<u64>,
}

impl PrinterConfig {
    /// # Epson TM-T88V
    ///
    /// 80mm paper, 512 dots printable width at 180 DPI.
    ///
    /// ```text
    /// Font A: 12 × 24 dots → 512 / 12 = 42 columns
    /// Font B:  9 × 17 dots → 512 / 9  = 56 columns
    /// ```
    pub const TM_T88V: Self = Self {
        name: Cow::Borrowed("Epson TM-T88V"),
        port: 9100,
        columns_font_a: 42,
        columns_font_b: 56,
        connect_timeout_ms: 5000,
        write_timeout_ms: None,
    };

    /// Parse a JSON profile.
    pub fn from_json(json: &str) -> Result<Self, EscposError> {
        serde_json::from_str(json)
            .map_err(|e| EscposError::Config(format!("Invalid printer profile: {}", e)))
    }

    /// Load a JSON profile from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, EscposError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            EscposError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    #[inline]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    #[inline]
    pub fn write_timeout(&self) -> Option<Duration> {
        self.write_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::TM_T88V
    }
}
