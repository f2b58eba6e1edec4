//! # IR Builder
//!
//! Writes IR text for named printer operations. Every operation writes a
//! `'//` comment describing its intent, then one indented instruction line:
//!
//! ```text
//! '// Select Font B
//!     ESC "M" 1
//! ```
//!
//! The builder keeps no state besides its sink and writes through
//! immediately. Sink errors are returned as-is.
//!
//! Invalid configuration (unknown justification, unknown font) is not an
//! error: it is reported as a comment so the IR stays reviewable, and the
//! converter skips comments.

use std::fmt;
use std::io::{self, Write};

use tracing::warn;

use super::token::{COMMENT_MARKER, Token};
use crate::protocol::controls::ControlCode;

/// Indentation of instruction lines.
const INDENT: &str = "    ";

/// Largest character magnification index (8x).
pub const MAX_MAGNIFICATION: u8 = 7;

/// Text justification (ESC a n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl Justification {
    /// Parse `left`, `center`/`centered` or `right`, ignoring case.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.to_lowercase().as_str() {
            "left" => Some(Justification::Left),
            "center" | "centered" => Some(Justification::Center),
            "right" => Some(Justification::Right),
            _ => None,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Justification::Left => "Left justification",
            Justification::Center => "Centered justification",
            Justification::Right => "Right justification",
        }
    }
}

/// Character fonts selectable with ESC M n.
///
/// On the TM-T88V, Font A is 12×24 dots and Font B is 9×17 dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    A,
    B,
    C,
    D,
    E,
    SpecialA,
    SpecialB,
}

impl Font {
    /// Font selected by parameter `n`. Fonts A to E accept both `0..=4` and
    /// the ASCII digits `'0'..='4'`.
    pub fn from_code(n: u8) -> Option<Self> {
        match n {
            0 | 48 => Some(Font::A),
            1 | 49 => Some(Font::B),
            2 | 50 => Some(Font::C),
            3 | 51 => Some(Font::D),
            4 | 52 => Some(Font::E),
            97 => Some(Font::SpecialA),
            98 => Some(Font::SpecialB),
            _ => None,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Font::A => "Font A",
            Font::B => "Font B",
            Font::C => "Font C",
            Font::D => "Font D",
            Font::E => "Font E",
            Font::SpecialA => "Special Font A",
            Font::SpecialB => "Special Font B",
        };
        f.write_str(name)
    }
}

/// IR emitter over any [`Write`] sink.
///
/// ## Example
///
/// ```
/// use escpos_ir::ir::Builder;
///
/// let mut builder = Builder::new(Vec::new());
/// builder.initialize_printer()?;
/// builder.print("Hello")?;
///
/// let ir = String::from_utf8(builder.into_inner()).unwrap();
/// assert_eq!(ir, "'// Initialize printer\n    ESC \"@\"\n    \"Hello\" LF\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Builder<W: Write> {
    out: W,
}

impl<W: Write> Builder<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a free-form comment. Each line of `text` becomes one comment
    /// line; empty text writes a bare `'//`.
    pub fn comment(&mut self, text: impl fmt::Display) -> io::Result<()> {
        let text = text.to_string();
        if text.is_empty() {
            return writeln!(self.out, "{COMMENT_MARKER}");
        }
        for line in text.lines() {
            if line.is_empty() {
                writeln!(self.out, "{COMMENT_MARKER}")?;
            } else {
                writeln!(self.out, "{COMMENT_MARKER} {line}")?;
            }
        }
        Ok(())
    }

    fn instruction(&mut self, tokens: &[Token<'_>]) -> io::Result<()> {
        self.out.write_all(INDENT.as_bytes())?;
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b" ")?;
            }
            write!(self.out, "{token}")?;
        }
        writeln!(self.out)
    }

    /// ESC @: clear the print buffer and reset modes to power-on defaults.
    ///
    /// Macro definitions, NV graphics and user NV memory survive.
    pub fn initialize_printer(&mut self) -> io::Result<()> {
        self.comment("Initialize printer")?;
        self.instruction(&[Token::Control(ControlCode::Esc), Token::Quoted("@")])
    }

    /// ESC M n: select character font.
    pub fn character_font(&mut self, n: u8) -> io::Result<()> {
        match Font::from_code(n) {
            Some(font) => self.comment(format_args!("Select {font}"))?,
            None => {
                warn!(code = n, "unknown font code");
                self.comment("WARNING: Select Unknown Font")?;
            }
        }
        self.instruction(&[
            Token::Control(ControlCode::Esc),
            Token::Quoted("M"),
            Token::decimal(n),
        ])
    }

    /// ESC a n: justification from a mode name.
    ///
    /// An unknown mode writes an error comment and no instruction.
    pub fn justification(&mut self, mode: &str) -> io::Result<()> {
        match Justification::parse(mode) {
            Some(justification) => self.justify(justification),
            None => {
                warn!(mode, "unknown justification");
                self.comment(format_args!("ERROR: unknown justification: {mode}"))
            }
        }
    }

    /// ESC a n: justification.
    ///
    /// Only takes effect at the beginning of a line.
    pub fn justify(&mut self, justification: Justification) -> io::Result<()> {
        self.comment(justification.describe())?;
        self.instruction(&[
            Token::Control(ControlCode::Esc),
            Token::Quoted("a"),
            Token::decimal(justification as u8),
        ])
    }

    /// GS T n: move to the beginning of the print line.
    ///
    /// `print` prints the buffered data first; otherwise the buffer is discarded.
    pub fn home(&mut self, print: bool) -> io::Result<()> {
        if print {
            self.comment("Home, print first")?;
        } else {
            self.comment("Home, reset print buffer")?;
        }
        self.instruction(&[
            Token::Control(ControlCode::Gs),
            Token::Quoted("T"),
            Token::decimal(print as u8),
        ])
    }

    /// GS V: cut the paper.
    ///
    /// `feed == 0` cuts immediately (function A: `GS V 0` full, `GS V 1`
    /// partial). Otherwise feeds to the cutting position plus `feed` motion
    /// units first (function B: `GS V 65 n` full, `GS V 66 n` partial).
    /// `feed` is clamped to 255.
    pub fn cut(&mut self, feed: u32, full: bool) -> io::Result<()> {
        let kind = if full { "full cut" } else { "partial cut" };
        let mut tokens = vec![Token::Control(ControlCode::Gs), Token::Quoted("V")];

        if feed == 0 {
            self.comment(format_args!("Cut Paper ({kind})"))?;
            tokens.push(Token::decimal(if full { 0 } else { 1 }));
        } else {
            self.comment(format_args!("Feed and Cut Paper ({kind})"))?;
            tokens.push(Token::decimal(if full { 65 } else { 66 }));
            tokens.push(Token::decimal(clamp_byte(feed)));
        }
        self.instruction(&tokens)
    }

    /// ESC E n: emphasized mode.
    pub fn strong(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            self.comment("Emphasized mode on")?;
        } else {
            self.comment("Emphasized mode off")?;
        }
        self.instruction(&[
            Token::Control(ControlCode::Esc),
            Token::Quoted("E"),
            Token::decimal(enabled as u8),
        ])
    }

    /// GS ! n: character size. Width goes in the high nibble, height in the
    /// low nibble; each is clamped to 0..=7 (1x to 8x).
    pub fn character_size(&mut self, width: u8, height: u8) -> io::Result<()> {
        let width = width.min(MAX_MAGNIFICATION);
        let height = height.min(MAX_MAGNIFICATION);

        self.comment(format_args!(
            "Character magnification Wx{} Hx{}",
            width + 1,
            height + 1
        ))?;
        self.instruction(&[
            Token::Control(ControlCode::Gs),
            Token::Quoted("!"),
            Token::hex((width << 4) | height),
        ])
    }

    /// ESC 2: default line spacing.
    pub fn default_line_spacing(&mut self) -> io::Result<()> {
        self.comment("Default Line Spacing")?;
        self.instruction(&[Token::Control(ControlCode::Esc), Token::Quoted("2")])
    }

    /// ESC 3 n: line spacing of `n` motion units.
    pub fn line_spacing(&mut self, n: u8) -> io::Result<()> {
        self.comment("Set Line Spacing")?;
        self.instruction(&[
            Token::Control(ControlCode::Esc),
            Token::Quoted("3"),
            Token::decimal(n),
        ])
    }

    /// Print text.
    ///
    /// Control bytes never go inside a quoted literal: tabs become `HT` and
    /// newlines become `LF`, and each newline starts a new IR line. The last
    /// line always ends with `LF`. No comment is written.
    ///
    /// ```text
    /// print("A\tB\nC")  →      "A" HT "B" LF
    ///                          "C" LF
    /// ```
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                writeln!(self.out, " {}", ControlCode::Lf)?;
            }
            self.out.write_all(INDENT.as_bytes())?;

            for (j, part) in line.split('\t').enumerate() {
                if j > 0 {
                    write!(self.out, " {} ", ControlCode::Ht)?;
                }
                if !part.is_empty() {
                    write!(self.out, "{}", Token::Quoted(part))?;
                }
            }
        }
        writeln!(self.out, " {}", ControlCode::Lf)
    }

    /// ESC J n: print and feed `n` motion units, clamped to 255.
    pub fn print_feed(&mut self, n: u32) -> io::Result<()> {
        self.comment("Print and feed")?;
        self.instruction(&[
            Token::Control(ControlCode::Esc),
            Token::Quoted("J"),
            Token::decimal(clamp_byte(n)),
        ])
    }

    /// ESC d n: print and feed `n` lines, clamped to 255.
    pub fn print_feed_lines(&mut self, n: u32) -> io::Result<()> {
        self.comment("Print and feed lines")?;
        self.instruction(&[
            Token::Control(ControlCode::Esc),
            Token::Quoted("d"),
            Token::decimal(clamp_byte(n)),
        ])
    }
}

fn clamp_byte(n: u32) -> u8 {
    n.min(u8::MAX as u32) as u8
}
