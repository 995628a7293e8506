use std::fmt;

use prost::encoding::{bool as pbool, double, encoded_len_varint, int64, key_len, string};

use crate::internal::message_encoded_len;
use crate::proto::common::{any_value, AnyValue, ArrayValue, KeyValue, KeyValueList};

/// Kind of value held by an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeValueType {
    Empty,
    String,
    Bool,
    Int,
    Double,
    Array,
    Map,
}

/// A dynamically typed attribute value, log body or array element.
///
/// `Map` keeps its entries in insertion order and may repeat keys when it was
/// decoded from such input.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AttributeValue {
    #[default]
    Empty,
    String(String),
    Bool(bool),
    Int(i64),
    Double(f64),
    Array(Vec<AttributeValue>),
    Map(Vec<(String, AttributeValue)>),
}

impl AttributeValue {
    pub fn value_type(&self) -> AttributeValueType {
        match self {
            Self::Empty => AttributeValueType::Empty,
            Self::String(_) => AttributeValueType::String,
            Self::Bool(_) => AttributeValueType::Bool,
            Self::Int(_) => AttributeValueType::Int,
            Self::Double(_) => AttributeValueType::Double,
            Self::Array(_) => AttributeValueType::Array,
            Self::Map(_) => AttributeValueType::Map,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub(crate) fn from_proto(proto: AnyValue) -> Self {
        match proto.value {
            None => Self::Empty,
            Some(any_value::Value::StringValue(s)) => Self::String(s),
            Some(any_value::Value::BoolValue(b)) => Self::Bool(b),
            Some(any_value::Value::IntValue(i)) => Self::Int(i),
            Some(any_value::Value::DoubleValue(d)) => Self::Double(d),
            Some(any_value::Value::ArrayValue(array)) => {
                Self::Array(array.values.into_iter().map(Self::from_proto).collect())
            }
            Some(any_value::Value::KvlistValue(list)) => Self::Map(
                list.values
                    .into_iter()
                    .map(|kv| (kv.key, Self::from_proto_field(kv.value)))
                    .collect(),
            ),
        }
    }

    pub(crate) fn to_proto(&self) -> AnyValue {
        let value = match self {
            Self::Empty => None,
            Self::String(s) => Some(any_value::Value::StringValue(s.clone())),
            Self::Bool(b) => Some(any_value::Value::BoolValue(*b)),
            Self::Int(i) => Some(any_value::Value::IntValue(*i)),
            Self::Double(d) => Some(any_value::Value::DoubleValue(*d)),
            Self::Array(values) => Some(any_value::Value::ArrayValue(ArrayValue {
                values: values.iter().map(Self::to_proto).collect(),
            })),
            Self::Map(entries) => Some(any_value::Value::KvlistValue(KeyValueList {
                values: entries.iter().map(|(k, v)| key_value(k, v)).collect(),
            })),
        };
        AnyValue { value }
    }

    /// Reads an optional message field; an absent field is `Empty`.
    pub(crate) fn from_proto_field(proto: Option<AnyValue>) -> Self {
        proto.map_or(Self::Empty, Self::from_proto)
    }

    /// `Empty` is left out of the message entirely.
    pub(crate) fn to_proto_field(&self) -> Option<AnyValue> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_proto())
        }
    }

    pub(crate) fn field_encoded_len(&self, tag: u32) -> usize {
        if self.is_empty() {
            0
        } else {
            message_encoded_len(tag, self.encoded_len())
        }
    }

    /// Encoded size of the `AnyValue` message body.
    pub(crate) fn encoded_len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::String(s) => string::encoded_len(1, s),
            Self::Bool(b) => pbool::encoded_len(2, b),
            Self::Int(i) => int64::encoded_len(3, i),
            Self::Double(d) => double::encoded_len(4, d),
            Self::Array(values) => message_encoded_len(
                5,
                values
                    .iter()
                    .map(|v| message_encoded_len(1, v.encoded_len()))
                    .sum(),
            ),
            Self::Map(entries) => message_encoded_len(
                6,
                entries
                    .iter()
                    .map(|(k, v)| message_encoded_len(1, key_value_len(k, v)))
                    .sum(),
            ),
        }
    }
}

pub(crate) fn key_value(key: &str, value: &AttributeValue) -> KeyValue {
    KeyValue {
        key: key.to_string(),
        value: Some(value.to_proto()),
    }
}

/// Encoded size of the `KeyValue` message body; the value is always present.
pub(crate) fn key_value_len(key: &str, value: &AttributeValue) -> usize {
    let key_len_total = if key.is_empty() {
        0
    } else {
        key_len(1) + encoded_len_varint(key.len() as u64) + key.len()
    };
    key_len_total + message_encoded_len(2, value.encoded_len())
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(v: Vec<AttributeValue>) -> Self {
        Self::Array(v)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    fn nested() -> AttributeValue {
        AttributeValue::Map(vec![
            ("s".to_string(), AttributeValue::from("")),
            ("i".to_string(), AttributeValue::from(0i64)),
            (
                "a".to_string(),
                AttributeValue::from(vec![
                    AttributeValue::from(true),
                    AttributeValue::Empty,
                    AttributeValue::from(1.5),
                ]),
            ),
            (String::new(), AttributeValue::Empty),
        ])
    }

    #[test]
    fn test_value_type() {
        assert_eq!(AttributeValue::default().value_type(), AttributeValueType::Empty);
        assert_eq!(AttributeValue::from("x").value_type(), AttributeValueType::String);
        assert_eq!(AttributeValue::from(3i64).as_int(), Some(3));
        assert_eq!(AttributeValue::from(3i64).as_str(), None);
        assert_eq!(nested().value_type(), AttributeValueType::Map);
    }

    #[test]
    fn test_encoded_len_matches_proto() {
        let values = [
            AttributeValue::Empty,
            AttributeValue::from(""),
            AttributeValue::from(false),
            AttributeValue::from(0i64),
            AttributeValue::from(-7i64),
            AttributeValue::from(0.0),
            AttributeValue::Array(Vec::new()),
            nested(),
        ];
        for value in values {
            assert_eq!(value.encoded_len(), value.to_proto().encoded_len(), "{value:?}");
            assert_eq!(AttributeValue::from_proto(value.to_proto()), value);
        }
    }

    #[test]
    fn test_empty_field_is_omitted() {
        assert_eq!(AttributeValue::Empty.to_proto_field(), None);
        assert_eq!(AttributeValue::Empty.field_encoded_len(5), 0);
        assert_eq!(AttributeValue::from_proto_field(None), AttributeValue::Empty);
        assert_eq!(
            AttributeValue::from_proto_field(Some(AnyValue { value: None })),
            AttributeValue::Empty
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(nested().to_string(), "{s:,i:0,a:[true,,1.5],:}");
    }
}
