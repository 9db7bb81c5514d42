mod de;
mod ser;

use std::fmt;
use std::ops::Index;

use smol_str::SmolStr;

use crate::num;
use crate::text;

/// One key/value pair of a JSON object.
///
/// Members keep insertion order. Duplicate keys are legal and all of them are
/// retained; lookup resolves to the first match.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub key: SmolStr,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<SmolStr>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An owned JSON document tree.
///
/// Containers exclusively own their children, so dropping the root tears the
/// whole tree down. String content may contain embedded NUL bytes.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Box<[Value]>),
    Object(Box<[Member]>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Value of the first member whose key matches `key` exactly, byte for
    /// byte. `None` when absent or when `self` is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(members) => members
                .iter()
                .find(|member| member.key.as_str() == key)
                .map(|member| &member.value),
            _ => None,
        }
    }

    /// Position of the first member whose key matches `key`.
    pub fn member_index(&self, key: &str) -> Option<usize> {
        match self {
            Value::Object(members) => members
                .iter()
                .position(|member| member.key.as_str() == key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Replaces `self` with `Null` and returns the prior tree.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Deep structural equality.
///
/// Numbers compare by value, strings by bytes, arrays pairwise in order.
/// Objects compare order-independently: member counts must match and every
/// left-hand member's key must resolve, first match first, to a deeply equal
/// value on the right. The containment check runs in one direction only.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter().all(|member| {
                        b.iter()
                            .find(|candidate| candidate.key == member.key)
                            .is_some_and(|candidate| candidate.value == member.value)
                    })
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Number(value) => {
                if value.is_finite() {
                    let mut out = String::new();
                    num::write_f64(&mut out, *value);
                    f.write_str(&out)
                } else {
                    f.write_str("null")
                }
            }
            Value::String(value) => write_quoted(f, value),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write_quoted(f, member.key.as_str())?;
                    write!(f, ":{}", member.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    text::escape_json_into(&mut quoted, value);
    quoted.push('"');
    f.write_str(&quoted)
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Value::Array(elements) => elements.get(index).unwrap_or_else(|| {
                panic!(
                    "index {index} out of bounds for array of length {}",
                    elements.len()
                )
            }),
            _ => panic!(
                "cannot index into non-array value of type {}",
                self.type_name()
            ),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Object(members) => self.get(key).unwrap_or_else(|| {
                panic!(
                    "key '{key}' not found in object with {} members",
                    members.len()
                )
            }),
            _ => panic!(
                "cannot index into non-object value of type {}",
                self.type_name()
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements.into_boxed_slice())
    }
}

impl From<Vec<Member>> for Value {
    fn from(members: Vec<Member>) -> Self {
        Value::Object(members.into_boxed_slice())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => {
                number.as_f64().map(Value::Number).unwrap_or(Value::Null)
            }
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| Member::new(key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        value.clone().into()
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(value) => serde_json::Value::Bool(value),
            Value::Number(number) => serde_json::Number::from_f64(number)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(value) => serde_json::Value::String(value),
            Value::Array(elements) => serde_json::Value::Array(
                elements.into_vec().into_iter().map(Into::into).collect(),
            ),
            Value::Object(members) => {
                let mut map = serde_json::Map::new();
                for member in members.into_vec() {
                    // A Map cannot hold duplicates; the first occurrence wins.
                    map.entry(member.key.to_string())
                        .or_insert_with(|| member.value.into());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}
