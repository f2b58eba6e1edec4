//! # IR Tokens
//!
//! Lexical layer shared by the builder and the converter.
//!
//! An IR document is a sequence of LF-terminated lines. Each line is either
//! blank, a comment (`'// ...`), or an instruction: tokens separated by single
//! spaces.
//!
//! ```text
//! '// Select Font B
//!     ESC "M" 1
//!     "Hello World" LF
//! ```
//!
//! Quoted literals may contain spaces, so splitting an instruction on spaces
//! cuts `"Hello World"` into the fragments `"Hello` and `World"`. The
//! [`QuoteState`] machine glues the pieces back together and re-inserts the
//! spaces that were lost in the split.

use std::fmt;

use crate::protocol::controls::ControlCode;

/// Prefix of a comment line.
pub const COMMENT_MARKER: &str = "'//";

/// Delimiter of a quoted literal.
pub const QUOTE: char = '"';

/// Radix a numeric literal was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    Decimal,
    Hex,
}

impl Base {
    pub fn radix(self) -> u32 {
        match self {
            Base::Decimal => 10,
            Base::Hex => 16,
        }
    }
}

/// Classification of one IR line, before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty, whitespace-only, or a single character
    Blank,
    /// `'//` comment; the text after the marker
    Comment(&'a str),
    /// Trimmed instruction text
    Instruction(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(record: &'a str) -> Self {
        let trimmed = record.trim();
        if trimmed.len() <= 1 {
            Line::Blank
        } else if let Some(text) = trimmed.strip_prefix(COMMENT_MARKER) {
            Line::Comment(text.trim_start())
        } else {
            Line::Instruction(trimmed)
        }
    }
}

/// A single space-delimited IR token.
///
/// `Display` renders the token exactly as the converter expects to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Control-code mnemonic, e.g. `ESC`
    Control(ControlCode),
    /// Byte literal, e.g. `27` or `0x1B`
    Number { value: u8, base: Base },
    /// Complete literal, e.g. `"@"`
    Quoted(&'a str),
    /// First fragment of a literal that contains spaces, e.g. `"Hello`
    OpenQuote(&'a str),
    /// Last fragment of a literal that contains spaces, e.g. `World"`
    CloseQuote(&'a str),
}

/// Why a token could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Unrecognized,
    Numeric(String),
}

impl<'a> Token<'a> {
    pub fn decimal(value: u8) -> Self {
        Token::Number {
            value,
            base: Base::Decimal,
        }
    }

    pub fn hex(value: u8) -> Self {
        Token::Number {
            value,
            base: Base::Hex,
        }
    }

    /// Classify a non-empty token outside a quote span.
    ///
    /// Mnemonics win over everything else, then quotes, then numbers.
    pub fn parse(candidate: &'a str) -> Result<Self, TokenError> {
        if let Some(code) = ControlCode::from_name(candidate) {
            return Ok(Token::Control(code));
        }

        let opens = candidate.starts_with(QUOTE);
        let closes = candidate.ends_with(QUOTE);
        match (opens, closes) {
            (true, true) if candidate.len() >= 2 => {
                return Ok(Token::Quoted(&candidate[1..candidate.len() - 1]));
            }
            (true, _) => return Ok(Token::OpenQuote(&candidate[1..])),
            (false, true) => {
                return Ok(Token::CloseQuote(&candidate[..candidate.len() - 1]));
            }
            (false, false) => {}
        }

        match parse_number(candidate) {
            Some(Ok((value, base))) => Ok(Token::Number { value, base }),
            Some(Err(reason)) => Err(TokenError::Numeric(reason)),
            None => Err(TokenError::Unrecognized),
        }
    }

    /// What this token contributes to the output.
    pub fn piece(self) -> Piece<'a> {
        match self {
            Token::Control(code) => Piece::Byte(code.value()),
            Token::Number { value, .. } => Piece::Byte(value),
            Token::Quoted(text) | Token::CloseQuote(text) => Piece::Literal(text),
            Token::OpenQuote(text) => Piece::SpacedLiteral(text),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Control(code) => write!(f, "{code}"),
            Token::Number {
                value,
                base: Base::Decimal,
            } => write!(f, "{value}"),
            Token::Number {
                value,
                base: Base::Hex,
            } => write!(f, "0x{value:02X}"),
            Token::Quoted(text) => write!(f, "{QUOTE}{text}{QUOTE}"),
            Token::OpenQuote(text) => write!(f, "{QUOTE}{text}"),
            Token::CloseQuote(text) => write!(f, "{text}{QUOTE}"),
        }
    }
}

/// Parse a decimal or `0x`-prefixed hex byte.
///
/// Returns `None` when the candidate does not look like a number at all
/// (does not start with a digit).
fn parse_number(candidate: &str) -> Option<Result<(u8, Base), String>> {
    if !candidate.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let (digits, base) = match candidate
        .strip_prefix("0x")
        .or_else(|| candidate.strip_prefix("0X"))
    {
        Some(hex) => (hex, Base::Hex),
        None => (candidate, Base::Decimal),
    };

    // from_str_radix would also accept a leading '+'
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base.radix())) {
        return Some(Err(format!("invalid {:?} digits", base).to_lowercase()));
    }

    Some(
        u8::from_str_radix(digits, base.radix())
            .map(|value| (value, base))
            .map_err(|_| "value does not fit in a byte (0-255)".to_string()),
    )
}

/// Output produced by one step of the quote machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Nothing,
    Byte(u8),
    /// One space: a separator that was inside a quoted literal
    Space,
    Literal(&'a str),
    /// Literal text followed by the space it was split on
    SpacedLiteral(&'a str),
}

/// Whether the scanner is inside a quoted literal.
///
/// Every instruction line starts `Outside`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    #[default]
    Outside,
    Inside,
}

impl QuoteState {
    /// Resolve one space-delimited candidate.
    ///
    /// Rules, first match wins:
    ///
    /// 1. a lone `"` toggles the state (opening also yields the separator
    ///    space that followed it)
    /// 2. inside, an empty candidate is a space that was split away
    /// 3. outside, an empty candidate is skipped
    /// 4. inside, anything not ending in `"` is literal text plus a separator
    /// 5. otherwise the candidate is a [`Token`]; `"abc` enters and `abc"`
    ///    leaves the quote
    pub fn step<'a>(self, candidate: &'a str) -> Result<(QuoteState, Piece<'a>), TokenError> {
        use QuoteState::*;

        if candidate.len() == 1 && candidate.starts_with(QUOTE) {
            return Ok(match self {
                Outside => (Inside, Piece::Space),
                Inside => (Outside, Piece::Nothing),
            });
        }

        if candidate.is_empty() {
            let piece = match self {
                Inside => Piece::Space,
                Outside => Piece::Nothing,
            };
            return Ok((self, piece));
        }

        if self == Inside && !candidate.ends_with(QUOTE) {
            return Ok((Inside, Piece::SpacedLiteral(candidate)));
        }

        let token = Token::parse(candidate)?;
        let next = match token {
            Token::OpenQuote(_) => Inside,
            Token::CloseQuote(_) => Outside,
            _ => self,
        };
        Ok((next, token.piece()))
    }
}
