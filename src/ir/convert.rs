//! # IR Converter
//!
//! Streams IR text into raw ESC/POS bytes, one line at a time.
//!
//! Every resolved byte is written to the sink as soon as its token is
//! resolved. Nothing is buffered or rolled back: when a token fails, the
//! bytes of the earlier tokens have already been written.

use std::io::{BufRead, Write};

use tracing::debug;

use super::token::{Line, Piece, QuoteState, TokenError};
use crate::error::EscposError;
use crate::protocol::controls::{LF, SP};
use crate::protocol::cp437;

/// How much the converter reports while it works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    /// Log every resolved token at debug level
    Trace,
}

/// Counters for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertStats {
    /// Records read, including blank and comment lines
    pub lines: usize,
    /// Instruction lines converted
    pub instructions: usize,
    /// Bytes written to the sink
    pub bytes: usize,
}

/// IR text → ESC/POS bytes.
///
/// ## Example
///
/// ```
/// use escpos_ir::ir::{Converter, Verbosity};
///
/// let ir = "'// Initialize printer\n    ESC \"@\"\n    \"Hi there\" LF\n";
/// let bytes = Converter::new(Verbosity::Quiet).convert_str(ir)?;
/// assert_eq!(bytes, b"\x1b@Hi there\n");
/// # Ok::<(), escpos_ir::EscposError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    verbosity: Verbosity,
}

impl Converter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Convert the whole of `reader` into `out`.
    ///
    /// Records are delimited by LF; a final record without LF is converted
    /// too. Stops at the first failing token or I/O error.
    pub fn convert<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut out: W,
    ) -> Result<ConvertStats, EscposError> {
        let mut stats = ConvertStats::default();
        let mut record = Vec::new();

        loop {
            record.clear();
            if reader.read_until(LF, &mut record)? == 0 {
                break;
            }
            stats.lines += 1;

            let text = std::str::from_utf8(&record)
                .map_err(|_| EscposError::InvalidText { line: stats.lines })?;

            if let Line::Instruction(body) = Line::classify(text) {
                stats.instructions += 1;
                stats.bytes += self.convert_line(stats.lines, body, &mut out)?;
            }
        }

        out.flush()?;
        Ok(stats)
    }

    /// Convert an in-memory IR document.
    pub fn convert_str(&self, ir: &str) -> Result<Vec<u8>, EscposError> {
        let mut out = Vec::new();
        self.convert(ir.as_bytes(), &mut out)?;
        Ok(out)
    }

    /// Convert one trimmed instruction line, returning the bytes written.
    fn convert_line<W: Write>(
        &self,
        line: usize,
        body: &str,
        out: &mut W,
    ) -> Result<usize, EscposError> {
        let mut state = QuoteState::Outside;
        let mut opened_by = "";
        let mut written = 0;

        for candidate in body.split(' ') {
            let (next, piece) = state.step(candidate).map_err(|e| match e {
                TokenError::Unrecognized => EscposError::UnrecognizedToken {
                    line,
                    token: candidate.to_string(),
                },
                TokenError::Numeric(reason) => EscposError::NumericRange {
                    line,
                    token: candidate.to_string(),
                    reason,
                },
            })?;

            if self.verbosity == Verbosity::Trace {
                debug!(line, token = candidate, ?state, ?piece, "resolved");
            }

            if state == QuoteState::Outside && next == QuoteState::Inside {
                opened_by = candidate;
            }
            state = next;
            written += write_piece(out, piece)?;
        }

        if state == QuoteState::Inside {
            return Err(EscposError::UnterminatedQuote {
                line,
                token: opened_by.to_string(),
            });
        }

        Ok(written)
    }
}

fn write_piece<W: Write>(out: &mut W, piece: Piece<'_>) -> std::io::Result<usize> {
    let bytes = match piece {
        Piece::Nothing => return Ok(0),
        Piece::Byte(b) => vec![b],
        Piece::Space => vec![SP],
        Piece::Literal(text) => cp437::encode(text),
        Piece::SpacedLiteral(text) => {
            let mut bytes = cp437::encode(text);
            bytes.push(SP);
            bytes
        }
    };
    out.write_all(&bytes)?;
    Ok(bytes.len())
}
