mod writer;

use crate::error::EncodeError;
use crate::value::Value;

use writer::Writer;

pub fn to_string(value: &Value) -> Result<String, EncodeError> {
    let mut writer = Writer::new();
    writer.write_value(value)?;
    Ok(writer.finish())
}

pub fn to_vec(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::new();
    writer.write_value(value)?;
    Ok(writer.finish_bytes())
}
