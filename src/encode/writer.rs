use crate::error::EncodeError;
use crate::num;
use crate::text;
use crate::value::Value;

/// Renders a value tree to compact JSON, buffering the whole document before
/// it is handed back. A failed render returns no partial text.
pub(crate) struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn finish(self) -> String {
        String::from_utf8(self.buffer).expect("writer output must be valid UTF-8")
    }

    pub fn finish_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn write_value(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.write_str("null"),
            Value::Bool(false) => self.write_str("false"),
            Value::Bool(true) => self.write_str("true"),
            Value::Number(number) => self.write_number(*number)?,
            Value::String(string) => self.write_string(string),
            Value::Array(elements) => {
                self.write_byte(b'[');
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        self.write_byte(b',');
                    }
                    self.write_value(element)?;
                }
                self.write_byte(b']');
            }
            Value::Object(members) => {
                self.write_byte(b'{');
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        self.write_byte(b',');
                    }
                    self.write_string(member.key.as_str());
                    self.write_byte(b':');
                    self.write_value(&member.value)?;
                }
                self.write_byte(b'}');
            }
        }
        Ok(())
    }

    fn write_number(&mut self, number: f64) -> Result<(), EncodeError> {
        if !number.is_finite() {
            return Err(EncodeError::NonFiniteNumber);
        }
        num::write_f64(&mut self.buffer, number);
        Ok(())
    }

    fn write_string(&mut self, value: &str) {
        self.write_byte(b'"');
        text::escape_json_into(&mut self.buffer, value);
        self.write_byte(b'"');
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    fn write_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }
}
