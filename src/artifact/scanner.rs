//! Bounds-checked text cursor for implementors artifact decoding.
//!
//! This module provides the [`crate::artifact::scanner::Scanner`] type, a cursor-based text
//! scanner for the constrained JavaScript subset rustdoc emits into implementors artifacts.
//! It offers bounds-checked access with support for literal matching, identifier reads and
//! JavaScript string literals including escape sequences.
//!
//! # Architecture
//!
//! The scanner is built around a simple cursor model that maintains a byte position within
//! a UTF-8 string slice:
//!
//! - **Position tracking** - Maintains current offset for sequential scanning
//! - **Bounds checking** - All operations validate data availability before reading
//! - **Error context** - Mismatches report the offending offset via [`crate::Error::Malformed`];
//!   truncation reports [`crate::Error::OutOfBounds`]
//!
//! The cursor only ever stops at ASCII positions (quotes, braces, backslashes), so slicing
//! the underlying text at scanner positions is always UTF-8 safe.
//!
//! # Usage Examples
//!
//! ```rust
//! use traitdex::artifact::Scanner;
//!
//! let mut scanner = Scanner::new("implementors[\"luminance\"]");
//! assert_eq!(scanner.read_identifier()?, "implementors");
//! scanner.expect_byte(b'[')?;
//! assert_eq!(scanner.read_string()?, "luminance");
//! scanner.expect_byte(b']')?;
//! assert!(scanner.is_eof());
//! # Ok::<(), traitdex::Error>(())
//! ```

use crate::Result;

/// A cursor-based scanner over implementors artifact text.
///
/// `Scanner` maintains a byte position within a string slice and provides bounds-checked
/// primitives for the token shapes that occur in rustdoc's implementors artifacts:
/// punctuation, identifiers, and JavaScript string literals with escape sequences.
///
/// The scanner does not allocate except when materializing string literals that
/// contain escape sequences.
///
/// # Examples
///
/// ```rust
/// use traitdex::artifact::Scanner;
///
/// let mut scanner = Scanner::new("var implementors = {};");
/// assert_eq!(scanner.read_identifier()?, "var");
/// scanner.skip_whitespace();
/// assert_eq!(scanner.read_identifier()?, "implementors");
/// # Ok::<(), traitdex::Error>(())
/// ```
#[derive(Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of the given text.
    ///
    /// # Arguments
    /// * `text` - The artifact text to scan
    #[must_use]
    pub fn new(text: &'a str) -> Scanner<'a> {
        Scanner { text, pos: 0 }
    }

    /// Current byte offset within the text.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true when the cursor has consumed all input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// The unconsumed remainder of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Peek at the byte under the cursor without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input.
    pub fn peek_byte(&self) -> Result<u8> {
        self.text
            .as_bytes()
            .get(self.pos)
            .copied()
            .ok_or(crate::Error::OutOfBounds)
    }

    /// Consume and return the byte under the cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input.
    pub fn read_byte(&mut self) -> Result<u8> {
        let byte = self.peek_byte()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Advance the cursor past ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Returns true if the unconsumed input starts with `literal`.
    #[must_use]
    pub fn starts_with(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consume a single expected byte.
    ///
    /// # Arguments
    /// * `expected` - The byte that must be under the cursor
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input, or
    /// [`crate::Error::Malformed`] if a different byte is present.
    pub fn expect_byte(&mut self, expected: u8) -> Result<()> {
        let found = self.peek_byte()?;
        if found != expected {
            return Err(malformed_error!(
                "expected '{}' at offset {} but found '{}'",
                expected as char,
                self.pos,
                found as char
            ));
        }

        self.pos += 1;
        Ok(())
    }

    /// Consume `expected` if it is under the cursor, returning whether it was.
    pub fn eat_byte(&mut self, expected: u8) -> bool {
        if self.text.as_bytes().get(self.pos) == Some(&expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume an exact literal.
    ///
    /// # Arguments
    /// * `literal` - The text that must appear at the cursor
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer bytes than `literal` remain, or
    /// [`crate::Error::Malformed`] if the input diverges from it.
    pub fn expect_literal(&mut self, literal: &str) -> Result<()> {
        let remaining = self.remaining();
        if remaining.len() < literal.len() {
            return Err(crate::Error::OutOfBounds);
        }

        if !remaining.starts_with(literal) {
            return Err(malformed_error!(
                "expected '{}' at offset {}",
                literal,
                self.pos
            ));
        }

        self.pos += literal.len();
        Ok(())
    }

    /// Read a JavaScript identifier (ASCII letters, digits, `_` and `$`).
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at end of input, or
    /// [`crate::Error::Malformed`] if the cursor is not on an identifier start.
    pub fn read_identifier(&mut self) -> Result<&'a str> {
        let bytes = self.text.as_bytes();
        let start = self.pos;

        let first = self.peek_byte()?;
        if !(first.is_ascii_alphabetic() || first == b'_' || first == b'$') {
            return Err(malformed_error!(
                "expected identifier at offset {} but found '{}'",
                start,
                first as char
            ));
        }

        let mut end = start;
        while end < bytes.len()
            && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_' || bytes[end] == b'$')
        {
            end += 1;
        }

        self.pos = end;
        Ok(&self.text[start..end])
    }

    /// Read a JavaScript string literal, resolving escape sequences.
    ///
    /// Both `"` and `'` delimiters are accepted. Supported escapes are the ones a JS
    /// string literal can legally contain: `\"`, `\'`, `\\`, `\/`, `\n`, `\r`, `\t`,
    /// `\0`, `\b`, `\f`, `\v`, `\xNN` and `\uNNNN` (including surrogate pairs).
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the literal is unterminated, or
    /// [`crate::Error::Malformed`] for invalid escapes and lone surrogates.
    pub fn read_string(&mut self) -> Result<String> {
        let quote = self.peek_byte()?;
        if quote != b'"' && quote != b'\'' {
            return Err(malformed_error!(
                "expected string literal at offset {} but found '{}'",
                self.pos,
                quote as char
            ));
        }
        self.pos += 1;

        let bytes = self.text.as_bytes();
        let mut value = String::new();
        let mut segment_start = self.pos;

        loop {
            let Some(&byte) = bytes.get(self.pos) else {
                return Err(crate::Error::OutOfBounds);
            };

            if byte == quote {
                value.push_str(&self.text[segment_start..self.pos]);
                self.pos += 1;
                return Ok(value);
            }

            if byte != b'\\' {
                self.pos += 1;
                continue;
            }

            value.push_str(&self.text[segment_start..self.pos]);
            self.pos += 1;

            let escape = self.peek_byte()?;
            self.pos += 1;
            match escape {
                b'"' => value.push('"'),
                b'\'' => value.push('\''),
                b'\\' => value.push('\\'),
                b'/' => value.push('/'),
                b'n' => value.push('\n'),
                b'r' => value.push('\r'),
                b't' => value.push('\t'),
                b'0' => value.push('\0'),
                b'b' => value.push('\u{0008}'),
                b'f' => value.push('\u{000C}'),
                b'v' => value.push('\u{000B}'),
                b'x' => {
                    let code = self.read_hex_digits(2)?;
                    value.push(char::from(code as u8));
                }
                b'u' => {
                    let unit = self.read_hex_digits(4)?;
                    value.push(self.read_code_point(unit)?);
                }
                other => {
                    return Err(malformed_error!(
                        "invalid escape '\\{}' at offset {}",
                        other as char,
                        self.pos - 1
                    ));
                }
            }

            segment_start = self.pos;
        }
    }

    /// Read exactly `count` hex digits and return their value.
    fn read_hex_digits(&mut self, count: usize) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let byte = self.peek_byte()?;
            let digit = (byte as char)
                .to_digit(16)
                .ok_or_else(|| malformed_error!("invalid hex digit at offset {}", self.pos))?;
            value = value * 16 + digit;
            self.pos += 1;
        }

        Ok(value)
    }

    /// Turn a `\u` code unit into a char, pairing surrogates when required.
    fn read_code_point(&mut self, unit: u32) -> Result<char> {
        if (0xD800..=0xDBFF).contains(&unit) {
            // High surrogate, the low half must follow as another \u escape.
            self.expect_byte(b'\\')?;
            self.expect_byte(b'u')?;
            let low = self.read_hex_digits(4)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(malformed_error!(
                    "expected low surrogate at offset {}",
                    self.pos
                ));
            }

            let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined)
                .ok_or_else(|| malformed_error!("invalid code point at offset {}", self.pos));
        }

        if (0xDC00..=0xDFFF).contains(&unit) {
            return Err(malformed_error!(
                "lone low surrogate at offset {}",
                self.pos
            ));
        }

        char::from_u32(unit)
            .ok_or_else(|| malformed_error!("invalid code point at offset {}", self.pos))
    }
}
