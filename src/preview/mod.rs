//! # ASCII-Art Preview
//!
//! Turns an image into IR text lines of shade characters, so a picture can
//! be printed with nothing but the printer's built-in CP437 font.
//!
//! ## Pipeline
//!
//! ```text
//! image file → nearest-neighbour resize → luma → 5 shade levels → Builder::print
//!                 (columns wide)                   " ░▒▓█"
//! ```
//!
//! Each image row becomes one IR line:
//!
//! ```text
//!     "  ░▒▓██▓▒░  " LF
//! ```
//!
//! This is a plain threshold into five levels, not a dither.

use std::io::{self, Write};
use std::path::Path;

use image::{DynamicImage, imageops::FilterType};

use crate::error::EscposError;
use crate::ir::Builder;
use crate::printer::PrinterConfig;

/// Shade characters from lightest to darkest ink coverage.
pub const LEVELS: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Luma step between shade levels (51 × 5 = 255).
const LEVEL_STEP: u8 = 51;

/// ASCII-art conversion options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsciiArt {
    /// Maximum characters per row
    pub columns: u32,
    /// Extra vertical scale, multiplied with the horizontal one. Printer
    /// cells are taller than wide, so values above 1 keep proportions.
    pub y_scale: f32,
    /// Print light areas dark instead of dark areas dark
    pub invert: bool,
}

impl Default for AsciiArt {
    fn default() -> Self {
        Self::for_printer(&PrinterConfig::default())
    }
}

impl AsciiArt {
    /// Rows as wide as a Font B line on `config`.
    pub fn for_printer(config: &PrinterConfig) -> Self {
        Self {
            columns: config.columns_font_b as u32,
            y_scale: 1.0,
            invert: false,
        }
    }

    /// Output size in characters for a `width × height` image.
    ///
    /// One integer scale factor is used for both axes (times `y_scale`
    /// vertically), rounded up so rows never exceed `columns`.
    pub fn dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let scale = width.div_ceil(self.columns.max(1)).max(1);
        let y_scale = if self.y_scale > 0.0 { self.y_scale } else { 1.0 };
        let scale_y = ((scale as f32 * y_scale) as u32).max(1);

        ((width / scale).max(1), (height / scale_y).max(1))
    }

    /// Shade character for a luma value.
    pub fn shade(&self, luma: u8) -> char {
        let level = (luma / LEVEL_STEP).min(4) as usize;
        if self.invert {
            LEVELS[level]
        } else {
            LEVELS[4 - level]
        }
    }

    /// Render an image to rows of shade characters.
    pub fn render(&self, image: &DynamicImage) -> Vec<String> {
        let (width, height) = self.dimensions(image.width(), image.height());
        let gray = image
            .resize_exact(width, height, FilterType::Nearest)
            .to_luma8();

        gray.rows()
            .map(|row| row.map(|pixel| self.shade(pixel[0])).collect())
            .collect()
    }

    /// Render an image and print each row through `builder`.
    pub fn write_ir<W: Write>(&self, image: &DynamicImage, builder: &mut Builder<W>) -> io::Result<()> {
        for row in self.render(image) {
            builder.print(&row)?;
        }
        Ok(())
    }
}

/// Open and decode an image file (format detected from its contents).
pub fn load<P: AsRef<Path>>(path: P) -> Result<DynamicImage, EscposError> {
    let path = path.as_ref();
    image::ImageReader::open(path)
        .map_err(|e| EscposError::Image(format!("Failed to open {}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| EscposError::Image(format!("Failed to read {}: {}", path.display(), e)))?
        .decode()
        .map_err(|e| EscposError::Image(format!("Failed to decode {}: {}", path.display(), e)))
}
