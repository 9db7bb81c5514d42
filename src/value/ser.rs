use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Number(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements.iter() {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(members) => {
                // Duplicate keys serialize as repeated entries; formats that
                // cannot hold them apply their own collapse rule.
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for member in members.iter() {
                    map.serialize_entry(member.key.as_str(), &member.value)?;
                }
                map.end()
            }
        }
    }
}
