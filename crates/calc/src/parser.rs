//! Polynomial literal parser
//!
//! Grammar (one literal per line, no whitespace):
//! ```text
//! poly  := coeff | sum
//! sum   := mono ('+' mono)*
//! mono  := '(' poly ',' exp ')'
//! coeff := '-'? [0-9]+          signed 64-bit
//! exp   := [0-9]+               0..=4294967295
//! ```
//!
//! Parsing stops at the first byte that does not fit the grammar and reports
//! its 1-based column. The end of the line counts as one more column, so a
//! truncated literal points just past its last byte.

use crate::error::LiteralError;
use poly_core::{Exp, Mono, Poly};

/// Default bound on parenthesis nesting in a single literal
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1024;

/// Byte cursor over one input line (newline already stripped)
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Cursor { input, pos: 0 }
    }

    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    pub fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Consumes `byte` if it is next
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// 1-based column of the next byte
    pub fn column(&self) -> usize {
        self.pos + 1
    }

    pub fn at_line_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// An error at the current column
    pub fn error(&self) -> LiteralError {
        LiteralError {
            column: self.column(),
        }
    }

    /// Consumes bytes up to the next space or the end of the line
    pub fn take_word(&mut self) -> &'a [u8] {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if b == b' ' {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }
}

/// Accepted range of an integer read from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntRange {
    /// Optional sign, full `i64` (coefficients and `AT` points)
    Coeff,
    /// Digits only, `0..=u32::MAX` (literal exponents)
    Exponent,
    /// Digits only, `0..=u32::MAX` (variable indices)
    Variable,
    /// Digits only, `0..=i32::MAX` (substitution counts)
    Count,
}

impl IntRange {
    fn allows_sign(self) -> bool {
        matches!(self, IntRange::Coeff)
    }

    /// Largest magnitude accepted with the given sign
    fn limit(self, negative: bool) -> u64 {
        match self {
            IntRange::Coeff if negative => i64::MIN.unsigned_abs(),
            IntRange::Coeff => i64::MAX as u64,
            IntRange::Count => i32::MAX as u64,
            IntRange::Exponent | IntRange::Variable => u32::MAX as u64,
        }
    }
}

/// Reads an integer at the cursor.
///
/// At least one digit is required. On overflow the cursor stays on the digit
/// that would have pushed the value out of range, and that is the column
/// reported.
pub fn read_integer(cursor: &mut Cursor<'_>, range: IntRange) -> Result<i64, LiteralError> {
    let negative = range.allows_sign() && cursor.eat(b'-');
    let limit = range.limit(negative);

    if !cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
        return Err(cursor.error());
    }

    let mut magnitude: u64 = 0;
    while let Some(b) = cursor.peek().filter(u8::is_ascii_digit) {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
            .filter(|&m| m <= limit)
            .ok_or_else(|| cursor.error())?;
        cursor.bump();
    }

    // magnitude <= 2^63 here, and 2^63 only when negative
    Ok(if negative {
        (magnitude as i64).wrapping_neg()
    } else {
        magnitude as i64
    })
}

/// Recursive-descent parser for polynomial literals
#[derive(Debug, Clone)]
pub struct LiteralParser {
    max_depth: usize,
}

impl Default for LiteralParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteralParser {
    pub fn new() -> Self {
        LiteralParser {
            max_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        LiteralParser { max_depth }
    }

    /// Parses a whole line as one literal. Anything left over is an error.
    pub fn parse_line(&self, line: &[u8]) -> Result<Poly, LiteralError> {
        let mut cursor = Cursor::new(line);
        let poly = self.parse_poly(&mut cursor, 0)?;
        if !cursor.at_line_end() {
            return Err(cursor.error());
        }
        Ok(poly)
    }

    fn parse_poly(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Poly, LiteralError> {
        match cursor.peek() {
            Some(b'-' | b'0'..=b'9') => read_integer(cursor, IntRange::Coeff).map(Poly::from_coeff),
            Some(b'(') => self.parse_sum(cursor, depth),
            _ => Err(cursor.error()),
        }
    }

    fn parse_sum(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Poly, LiteralError> {
        let mut monos = vec![self.parse_mono(cursor, depth)?];
        while cursor.eat(b'+') {
            monos.push(self.parse_mono(cursor, depth)?);
        }
        Ok(Poly::from_monos(monos))
    }

    fn parse_mono(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Mono, LiteralError> {
        if cursor.peek() != Some(b'(') || depth >= self.max_depth {
            return Err(cursor.error());
        }
        cursor.bump();

        let coeff = self.parse_poly(cursor, depth + 1)?;

        if !cursor.eat(b',') {
            return Err(cursor.error());
        }
        if !cursor.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(cursor.error());
        }
        // range checked against u32::MAX
        let exp = read_integer(cursor, IntRange::Exponent)? as Exp;

        if !cursor.eat(b')') {
            return Err(cursor.error());
        }

        let exp = if coeff.is_zero() { 0 } else { exp };
        Ok(Mono::new(coeff, exp))
    }
}

/// Parses a literal with the default nesting bound
pub fn parse_literal(text: &str) -> Result<Poly, LiteralError> {
    LiteralParser::new().parse_line(text.as_bytes())
}
