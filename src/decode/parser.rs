use memchr::memchr2;

use crate::error::{ErrorCode, ParseError};
use crate::options::ParseOptions;
use crate::scratch::Scratch;
use crate::value::{Member, Value};

pub(crate) struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    max_depth: usize,
    scratch: Scratch,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            max_depth: options.max_depth,
            scratch: Scratch::new(),
        }
    }

    /// Parses exactly one document: one value, surrounded only by whitespace.
    pub fn parse_document(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error(ErrorCode::TrailingCharacters));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            None => Err(self.error(ErrorCode::ExpectedValue)),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(
        &mut self,
        literal: &'static [u8],
        value: Value,
    ) -> Result<Value, ParseError> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(self.error(ErrorCode::InvalidValue))
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        let end = match number_end(self.input.as_bytes(), start) {
            Some(end) => end,
            None => return Err(self.error_at(ErrorCode::InvalidValue, start)),
        };
        let number: f64 = self.input[start..end]
            .parse()
            .map_err(|_| self.error_at(ErrorCode::InvalidValue, start))?;
        if number.is_infinite() {
            return Err(self.error_at(ErrorCode::NumberOutOfRange, start));
        }
        self.pos = end;
        Ok(Value::Number(number))
    }

    /// Decodes a string literal starting at the opening quote.
    ///
    /// Shared by string values and object keys. On failure the scratch byte
    /// stack is rolled back to where this string began.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let mark = self.scratch.bytes_mark();
        let result = self.parse_string_content(mark);
        if result.is_err() {
            self.scratch.unwind_bytes(mark);
        }
        result
    }

    fn parse_string_content(&mut self, mark: usize) -> Result<String, ParseError> {
        self.pos += 1;
        loop {
            let rest = self.rest();
            let stop = memchr2(b'"', b'\\', rest);
            let span = &rest[..stop.unwrap_or(rest.len())];
            if let Some(bad) = span.iter().position(|&byte| byte < 0x20) {
                return Err(self.error_at(ErrorCode::ControlCharacterInString, self.pos + bad));
            }
            self.scratch.push_slice(span);
            match stop {
                None => {
                    self.pos = self.input.len();
                    return Err(self.error(ErrorCode::UnterminatedString));
                }
                Some(index) if rest[index] == b'"' => {
                    self.pos += index + 1;
                    return Ok(self.scratch.take_string(mark));
                }
                Some(index) => {
                    self.pos += index + 1;
                    self.parse_escape()?;
                }
            }
        }
    }

    /// Decodes one escape sequence; `self.pos` sits just past the backslash.
    fn parse_escape(&mut self) -> Result<(), ParseError> {
        let escape_pos = self.pos - 1;
        let Some(byte) = self.peek() else {
            return Err(self.error(ErrorCode::UnterminatedString));
        };
        self.pos += 1;
        let literal = match byte {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => return self.parse_unicode_escape(escape_pos),
            _ => return Err(self.error_at(ErrorCode::InvalidEscape, escape_pos)),
        };
        self.scratch.push_byte(literal);
        Ok(())
    }

    fn parse_unicode_escape(&mut self, escape_pos: usize) -> Result<(), ParseError> {
        let high = self.parse_hex4()?;
        if (0xDC00..=0xDFFF).contains(&high) {
            return Err(self.error_at(ErrorCode::UnpairedSurrogate, escape_pos));
        }
        let code = if (0xD800..=0xDBFF).contains(&high) {
            if !self.rest().starts_with(b"\\u") {
                return Err(self.error_at(ErrorCode::UnpairedSurrogate, escape_pos));
            }
            self.pos += 2;
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.error_at(ErrorCode::UnpairedSurrogate, escape_pos));
            }
            ((high - 0xD800) << 10 | (low - 0xDC00)) + 0x10000
        } else {
            high
        };
        self.scratch.push_code_point(code);
        Ok(())
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let digit = match self.peek() {
                Some(byte @ b'0'..=b'9') => u32::from(byte - b'0'),
                Some(byte @ b'a'..=b'f') => u32::from(byte - b'a') + 10,
                Some(byte @ b'A'..=b'F') => u32::from(byte - b'A') + 10,
                _ => return Err(self.error(ErrorCode::InvalidUnicodeHex)),
            };
            code = code << 4 | digit;
            self.pos += 1;
        }
        Ok(code)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        let mark = self.scratch.values_mark();
        let result = self.parse_array_items(mark);
        if result.is_err() {
            self.scratch.unwind_values(mark);
        }
        self.depth -= 1;
        result
    }

    fn parse_array_items(&mut self, mark: usize) -> Result<Value, ParseError> {
        self.pos += 1;
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(Box::default()));
        }
        loop {
            let element = self.parse_value()?;
            self.scratch.push_value(element);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(self.scratch.take_values(mark)));
                }
                _ => return Err(self.error(ErrorCode::ExpectedCommaOrArrayEnd)),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_container()?;
        let mark = self.scratch.members_mark();
        let result = self.parse_object_members(mark);
        if result.is_err() {
            self.scratch.unwind_members(mark);
        }
        self.depth -= 1;
        result
    }

    fn parse_object_members(&mut self, mark: usize) -> Result<Value, ParseError> {
        self.pos += 1;
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(Box::default()));
        }
        loop {
            if self.peek() != Some(b'"') {
                return Err(self.error(ErrorCode::ExpectedObjectKey));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error(ErrorCode::ExpectedColon));
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value()?;
            self.scratch.push_member(Member::new(key, value));
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(self.scratch.take_members(mark)));
                }
                _ => return Err(self.error(ErrorCode::ExpectedCommaOrObjectEnd)),
            }
        }
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.error(ErrorCode::RecursionLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }

    fn error(&self, code: ErrorCode) -> ParseError {
        ParseError::new(code, self.pos)
    }

    fn error_at(&self, code: ErrorCode, offset: usize) -> ParseError {
        ParseError::new(code, offset)
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// End of a syntactically valid JSON number starting at `start`: optional
/// minus, a single `0` or a nonzero digit run, optional fraction, optional
/// exponent. `None` when the bytes do not form one.
fn number_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }
    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(byte) if byte.is_ascii_digit() => {
            pos += 1;
            while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
                pos += 1;
            }
        }
        _ => return None,
    }
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return None;
        }
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            return None;
        }
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
    }
    Some(pos)
}
