//! Strict JSON parsing and compact serialization over an owned value tree.
//!
//! [`from_str`] turns JSON text into a [`Value`]; [`to_string`] renders a
//! tree back to compact JSON. Numbers and strings survive the round trip
//! byte-exactly, object members keep insertion order, and duplicate keys are
//! retained with first-match lookup.

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod value;

mod num;
mod scratch;
mod text;

pub use crate::error::{EncodeError, ErrorCode, ParseError};
pub use crate::options::ParseOptions;
pub use crate::value::{Member, Value};

pub fn from_str(input: &str) -> Result<Value, ParseError> {
    decode::from_str(input)
}

pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Result<Value, ParseError> {
    decode::from_str_with_options(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<Value, ParseError> {
    decode::from_slice(input)
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Value, ParseError> {
    decode::from_slice_with_options(input, options)
}

pub fn to_string(value: &Value) -> Result<String, EncodeError> {
    encode::to_string(value)
}

pub fn to_vec(value: &Value) -> Result<Vec<u8>, EncodeError> {
    encode::to_vec(value)
}
