//! Dictionary parser
//!
//! A left-to-right recognizer for the Structured Field Dictionary grammar.
//! Every bare item type is recognized so that a well-formed member whose
//! value is not a byte sequence can be reported as such by the caller,
//! instead of being folded into a generic parse failure.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use super::model::{BareItem, Dictionary, InnerList, Item, Parameters, StructuredItem};
use crate::errors::{DigestError, Result};

/// Byte sequence decoding: standard alphabet, padding optional, trailing bits tolerated
const SF_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const MAX_INTEGER_DIGITS: usize = 15;
const MAX_DECIMAL_INTEGER_DIGITS: usize = 12;
const MAX_DECIMAL_FRACTION_DIGITS: usize = 3;

/// Parse a header value as a Structured Field Dictionary
///
/// An empty (or all-space) value is the empty dictionary.
///
/// # Errors
///
/// Returns `DigestError::Parse` with the byte offset of the first character
/// that does not fit the grammar.
pub fn parse_dictionary(input: &str) -> Result<Dictionary> {
    let mut parser = Parser::new(input);
    parser.skip_sp();
    let dict = parser.dictionary()?;
    parser.skip_sp();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing characters"));
    }
    tracing::debug!(member_count = dict.len(), "parsed dictionary");
    Ok(dict)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, reason: &str) -> DigestError {
        DigestError::parse(self.pos, reason)
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    fn skip_sp(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn skip_ows(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
    }

    fn dictionary(&mut self) -> Result<Dictionary> {
        let mut dict = Dictionary::new();
        while !self.at_end() {
            let key = self.key()?;
            let value = if self.peek() == Some(b'=') {
                self.pos += 1;
                self.item_or_inner_list()?
            } else {
                StructuredItem::Item(Item {
                    bare_item: BareItem::Boolean(true),
                    params: self.parameters()?,
                })
            };
            dict.push(key, value);

            self.skip_ows();
            if self.at_end() {
                return Ok(dict);
            }
            self.expect(b',')?;
            self.skip_ows();
            if self.at_end() {
                return Err(self.error("trailing comma"));
            }
        }
        Ok(dict)
    }

    fn item_or_inner_list(&mut self) -> Result<StructuredItem> {
        if self.peek() == Some(b'(') {
            Ok(StructuredItem::InnerList(self.inner_list()?))
        } else {
            Ok(StructuredItem::Item(self.item()?))
        }
    }

    fn inner_list(&mut self) -> Result<InnerList> {
        self.expect(b'(')?;
        let mut items = Vec::new();
        loop {
            self.skip_sp();
            match self.peek() {
                Some(b')') => {
                    self.pos += 1;
                    let params = self.parameters()?;
                    return Ok(InnerList { items, params });
                }
                Some(_) => {
                    items.push(self.item()?);
                    if !matches!(self.peek(), Some(b' ' | b')')) {
                        return Err(self.error("expected ' ' or ')' in inner list"));
                    }
                }
                None => return Err(self.error("unterminated inner list")),
            }
        }
    }

    fn item(&mut self) -> Result<Item> {
        let bare_item = self.bare_item()?;
        let params = self.parameters()?;
        Ok(Item { bare_item, params })
    }

    fn parameters(&mut self) -> Result<Parameters> {
        let mut params = Parameters::new();
        while self.peek() == Some(b';') {
            self.pos += 1;
            self.skip_sp();
            let key = self.key()?;
            let value = if self.peek() == Some(b'=') {
                self.pos += 1;
                self.bare_item()?
            } else {
                BareItem::Boolean(true)
            };
            params.insert(key, value);
        }
        Ok(params)
    }

    fn key(&mut self) -> Result<String> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_lowercase() || c == b'*' => self.pos += 1,
            _ => return Err(self.error("expected key")),
        }
        while let Some(c) = self.peek() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, b'_' | b'-' | b'.' | b'*')
            {
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(self.slice(start).to_string())
    }

    fn bare_item(&mut self) -> Result<BareItem> {
        match self.peek() {
            Some(b'-') => self.number(),
            Some(c) if c.is_ascii_digit() => self.number(),
            Some(b'"') => self.string(),
            Some(b':') => self.byte_sequence(),
            Some(b'?') => self.boolean(),
            Some(c) if c.is_ascii_alphabetic() || c == b'*' => self.token(),
            Some(_) => Err(self.error("unrecognized item")),
            None => Err(self.error("expected item")),
        }
    }

    fn number(&mut self) -> Result<BareItem> {
        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }
        let start = self.pos;
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return Err(self.error("expected digit"));
        }

        let mut dot_at: Option<usize> = None;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else if c == b'.' && dot_at.is_none() {
                if self.pos - start > MAX_DECIMAL_INTEGER_DIGITS {
                    return Err(self.error("decimal has too many integer digits"));
                }
                dot_at = Some(self.pos);
                self.pos += 1;
            } else {
                break;
            }
            let len = self.pos - start;
            if dot_at.is_none() && len > MAX_INTEGER_DIGITS {
                return Err(self.error("integer has too many digits"));
            }
        }

        let text = self.slice(start);
        match dot_at {
            None => {
                let value: i64 = text
                    .parse()
                    .map_err(|_| DigestError::parse(start, "invalid integer"))?;
                Ok(BareItem::Integer(if negative { -value } else { value }))
            }
            Some(dot) => {
                let fraction_digits = self.pos - dot - 1;
                if fraction_digits == 0 || fraction_digits > MAX_DECIMAL_FRACTION_DIGITS {
                    return Err(self.error("decimal must have 1 to 3 fractional digits"));
                }
                let value: f64 = text
                    .parse()
                    .map_err(|_| DigestError::parse(start, "invalid decimal"))?;
                Ok(BareItem::Decimal(if negative { -value } else { value }))
            }
        }
    }

    fn string(&mut self) -> Result<BareItem> {
        self.expect(b'"')?;
        let mut out = String::new();
        loop {
            match self.peek() {
                Some(b'\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(c @ (b'"' | b'\\')) => {
                            out.push(c as char);
                            self.pos += 1;
                        }
                        _ => return Err(self.error("invalid escape in string")),
                    }
                }
                Some(b'"') => {
                    self.pos += 1;
                    return Ok(BareItem::String(out));
                }
                Some(c) if (0x20..=0x7e).contains(&c) => {
                    out.push(c as char);
                    self.pos += 1;
                }
                Some(_) => return Err(self.error("invalid character in string")),
                None => return Err(self.error("unterminated string")),
            }
        }
    }

    fn token(&mut self) -> Result<BareItem> {
        let start = self.pos;
        self.pos += 1;
        while let Some(c) = self.peek() {
            if is_tchar(c) || c == b':' || c == b'/' {
                self.pos += 1;
            } else {
                break;
            }
        }
        Ok(BareItem::Token(self.slice(start).to_string()))
    }

    fn byte_sequence(&mut self) -> Result<BareItem> {
        self.expect(b':')?;
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b':') => break,
                Some(c) if c.is_ascii_alphanumeric() || matches!(c, b'+' | b'/' | b'=') => {
                    self.pos += 1;
                }
                Some(_) => return Err(self.error("invalid character in byte sequence")),
                None => return Err(self.error("unterminated byte sequence")),
            }
        }
        let encoded = self.slice(start);
        let bytes = SF_BASE64
            .decode(encoded)
            .map_err(|e| DigestError::parse(start, format!("invalid base64: {}", e)))?;
        self.pos += 1;
        Ok(BareItem::ByteSequence(bytes))
    }

    fn boolean(&mut self) -> Result<BareItem> {
        self.expect(b'?')?;
        let value = match self.peek() {
            Some(b'1') => true,
            Some(b'0') => false,
            _ => return Err(self.error("expected '0' or '1' after '?'")),
        };
        self.pos += 1;
        Ok(BareItem::Boolean(value))
    }

    /// Input from `start` to the cursor; only called over ASCII runs
    fn slice(&self, start: usize) -> &'a str {
        std::str::from_utf8(&self.input[start..self.pos]).unwrap_or_default()
    }
}

/// RFC 9110 `tchar`
fn is_tchar(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
