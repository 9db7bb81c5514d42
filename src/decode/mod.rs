mod parser;

use crate::error::{ErrorCode, ParseError};
use crate::options::ParseOptions;
use crate::value::Value;

use parser::Parser;

pub fn from_str(input: &str) -> Result<Value, ParseError> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Result<Value, ParseError> {
    Parser::new(input, options).parse_document()
}

pub fn from_slice(input: &[u8]) -> Result<Value, ParseError> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Value, ParseError> {
    let text = std::str::from_utf8(input)
        .map_err(|err| ParseError::new(ErrorCode::InvalidUtf8, err.valid_up_to()))?;
    from_str_with_options(text, options)
}
