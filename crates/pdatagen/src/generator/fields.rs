//! Per-field Rust fragments: storage types, wire conversion and size terms.
//!
//! Orig-level fragments assume `self` is the orig struct and `proto` the
//! wire message being converted.

use crate::generator::naming::orig_type;
use crate::schema::{FieldDescriptor, MapKind, PrimitiveType, SequenceStorage};

impl PrimitiveType {
    /// Type of the field inside the orig struct.
    pub(crate) fn storage_type(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Bool => "bool",
            Self::Uint32 | Self::Fixed32 => "u32",
            Self::Fixed64 => "u64",
            Self::Sfixed64 => "i64",
            Self::Double => "f64",
            Self::Timestamp => "Timestamp",
            Self::TraceId => "TraceId",
            Self::SpanId => "SpanId",
            Self::Enum(_) => "i32",
            Self::Fixed64List => "Vec<u64>",
            Self::DoubleList => "Vec<f64>",
            Self::AnyValue => "AttributeValue",
        }
    }

    /// Type returned by the getter.
    pub(crate) fn view_type(self) -> &'static str {
        match self {
            Self::Enum(name) => name,
            other => other.storage_type(),
        }
    }

    /// Type accepted by the setter.
    pub(crate) fn setter_type(self) -> &'static str {
        match self {
            Self::String => "impl Into<String>",
            other => other.view_type(),
        }
    }

    fn is_cloned(self) -> bool {
        matches!(
            self,
            Self::String | Self::Fixed64List | Self::DoubleList | Self::AnyValue
        )
    }

    /// Reads the raw stored value out of `o`.
    pub(crate) fn read_expr(self, field: &str) -> String {
        if self.is_cloned() {
            format!("o.{field}.clone()")
        } else {
            format!("o.{field}")
        }
    }

    /// Getter body evaluated against the orig binding `o`.
    pub(crate) fn getter_expr(self, field: &str, default_value: &str) -> String {
        match self {
            Self::Enum(name) => format!("{name}::try_from(o.{field}).unwrap_or({default_value})"),
            other => other.read_expr(field),
        }
    }

    /// Setter statement storing `v` into `o`.
    pub(crate) fn setter_stmt(self, field: &str) -> String {
        match self {
            Self::String => format!("o.{field} = v.into()"),
            Self::Enum(_) => format!("o.{field} = v as i32"),
            _ => format!("o.{field} = v"),
        }
    }

    fn from_proto_expr(self, wire: &str) -> String {
        match self {
            Self::Timestamp => format!("Timestamp::from_nanos(proto.{wire})"),
            Self::TraceId => format!("TraceId::from_wire(&proto.{wire})?"),
            Self::SpanId => format!("SpanId::from_wire(&proto.{wire})?"),
            Self::AnyValue => format!("AttributeValue::from_proto_field(proto.{wire})"),
            _ => format!("proto.{wire}"),
        }
    }

    fn to_proto_expr(self, field: &str) -> String {
        match self {
            Self::String | Self::Fixed64List | Self::DoubleList => format!("self.{field}.clone()"),
            Self::Timestamp => format!("self.{field}.as_nanos()"),
            Self::TraceId | Self::SpanId => format!("self.{field}.to_wire()"),
            Self::AnyValue => format!("self.{field}.to_proto_field()"),
            _ => format!("self.{field}"),
        }
    }

    /// Encoded size term; proto3 defaults occupy no bytes.
    fn encoded_len_expr(self, field: &str, tag: u32) -> String {
        let scalar = |codec: &str, zero: &str| {
            format!(
                "if self.{field} == {zero} {{ 0 }} else {{ encoding::{codec}::encoded_len({tag}, &self.{field}) }}"
            )
        };
        match self {
            Self::String => format!(
                "if self.{field}.is_empty() {{ 0 }} else {{ encoding::string::encoded_len({tag}, &self.{field}) }}"
            ),
            Self::Bool => format!(
                "if self.{field} {{ encoding::bool::encoded_len({tag}, &self.{field}) }} else {{ 0 }}"
            ),
            Self::Uint32 => scalar("uint32", "0"),
            Self::Fixed32 => scalar("fixed32", "0"),
            Self::Fixed64 => scalar("fixed64", "0"),
            Self::Sfixed64 => scalar("sfixed64", "0"),
            Self::Double => scalar("double", "0.0"),
            Self::Enum(_) => scalar("int32", "0"),
            Self::Timestamp => format!(
                "if self.{field}.as_nanos() == 0 {{ 0 }} else {{ encoding::fixed64::encoded_len({tag}, &self.{field}.as_nanos()) }}"
            ),
            Self::TraceId | Self::SpanId => format!("self.{field}.encoded_len({tag})"),
            Self::Fixed64List => format!("encoding::fixed64::encoded_len_packed({tag}, &self.{field})"),
            Self::DoubleList => format!("encoding::double::encoded_len_packed({tag}, &self.{field})"),
            Self::AnyValue => format!("self.{field}.field_encoded_len({tag})"),
        }
    }
}

impl MapKind {
    pub(crate) fn view_type(self) -> &'static str {
        match self {
            Self::Attributes => "AttributeMap",
            Self::StringLabels => "StringMap",
        }
    }

    fn orig_type(self) -> &'static str {
        match self {
            Self::Attributes => "AttributesOrig",
            Self::StringLabels => "LabelsOrig",
        }
    }

    /// Prefix of the runtime conversion helpers for this map kind.
    fn helper_prefix(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::StringLabels => "labels",
        }
    }

    /// Test fixture name in the runtime `common` module.
    pub(crate) fn fixture(self) -> &'static str {
        match self {
            Self::Attributes => "attribute_map",
            Self::StringLabels => "string_map",
        }
    }
}

/// Orig struct field type.
pub(crate) fn storage_type(field: &FieldDescriptor) -> String {
    match field {
        FieldDescriptor::Primitive { ty, .. } => ty.storage_type().to_string(),
        FieldDescriptor::Message { schema, .. } => format!("Shared<{}>", orig_type(schema)),
        FieldDescriptor::Sequence {
            element, storage, ..
        } => sequence_storage_type(element, *storage),
        FieldDescriptor::Oneof { type_name, .. } => format!("Option<{}>", orig_type(type_name)),
        FieldDescriptor::Map { kind, .. } => format!("Shared<{}>", kind.orig_type()),
    }
}

/// Shared buffer type behind a sequence of `element`.
pub(crate) fn sequence_storage_type(element: &str, storage: SequenceStorage) -> String {
    match storage {
        SequenceStorage::OwnedPointers => format!("Shared<Vec<Shared<{}>>>", orig_type(element)),
        SequenceStorage::OwnedValues => format!("Shared<Vec<{}>>", orig_type(element)),
    }
}

/// Orig field initializer built from the wire message `proto`.
pub(crate) fn from_proto_expr(field: &FieldDescriptor) -> String {
    let wire = field.wire_name();
    match field {
        FieldDescriptor::Primitive { ty, .. } => ty.from_proto_expr(wire),
        FieldDescriptor::Message { schema, .. } => format!(
            "shared({}::from_proto(proto.{wire}.unwrap_or_default())?)",
            orig_type(schema)
        ),
        FieldDescriptor::Sequence {
            element,
            storage: SequenceStorage::OwnedPointers,
            ..
        } => format!(
            "shared(proto.{wire}.into_iter().map(|e| {}::from_proto(e).map(shared)).collect::<Result<Vec<_>>>()?)",
            orig_type(element)
        ),
        FieldDescriptor::Sequence {
            element,
            storage: SequenceStorage::OwnedValues,
            ..
        } => format!(
            "shared(proto.{wire}.into_iter().map({}::from_proto).collect::<Result<Vec<_>>>()?)",
            orig_type(element)
        ),
        FieldDescriptor::Oneof { type_name, .. } => format!(
            "proto.{wire}.map({}::from_proto).transpose()?",
            orig_type(type_name)
        ),
        FieldDescriptor::Map { kind, .. } => {
            format!("shared({}_from_proto(proto.{wire}))", kind.helper_prefix())
        }
    }
}

/// Wire field initializer built from the orig struct `self`.
pub(crate) fn to_proto_expr(field: &FieldDescriptor) -> String {
    let name = field.name();
    match field {
        FieldDescriptor::Primitive { ty, .. } => ty.to_proto_expr(name),
        FieldDescriptor::Message { .. } => format!("Some(self.{name}.borrow().to_proto())"),
        FieldDescriptor::Sequence {
            storage: SequenceStorage::OwnedPointers,
            ..
        } => format!("self.{name}.borrow().iter().map(|e| e.borrow().to_proto()).collect()"),
        FieldDescriptor::Sequence {
            element,
            storage: SequenceStorage::OwnedValues,
            ..
        } => format!(
            "self.{name}.borrow().iter().map({}::to_proto).collect()",
            orig_type(element)
        ),
        FieldDescriptor::Oneof { type_name, .. } => {
            format!("self.{name}.as_ref().map({}::to_proto)", orig_type(type_name))
        }
        FieldDescriptor::Map { kind, .. } => {
            format!("{}_to_proto(&self.{name}.borrow())", kind.helper_prefix())
        }
    }
}

/// Encoded byte count the field contributes to its parent message.
pub(crate) fn encoded_len_expr(field: &FieldDescriptor) -> String {
    let name = field.name();
    match field {
        FieldDescriptor::Primitive { ty, tag, .. } => ty.encoded_len_expr(name, *tag),
        FieldDescriptor::Message { tag, .. } => {
            format!("message_encoded_len({tag}, self.{name}.borrow().encoded_len())")
        }
        FieldDescriptor::Sequence {
            tag,
            storage: SequenceStorage::OwnedPointers,
            ..
        } => format!(
            "self.{name}.borrow().iter().map(|e| message_encoded_len({tag}, e.borrow().encoded_len())).sum::<usize>()"
        ),
        FieldDescriptor::Sequence {
            tag,
            storage: SequenceStorage::OwnedValues,
            ..
        } => format!(
            "self.{name}.borrow().iter().map(|e| message_encoded_len({tag}, e.encoded_len())).sum::<usize>()"
        ),
        FieldDescriptor::Oneof { type_name, .. } => {
            format!("self.{name}.as_ref().map_or(0, {}::encoded_len)", orig_type(type_name))
        }
        FieldDescriptor::Map { kind, tag, .. } => {
            format!("{}_encoded_len({tag}, &self.{name}.borrow())", kind.helper_prefix())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_getter_falls_back_to_default() {
        let ty = PrimitiveType::Enum("SpanKind");
        assert_eq!(ty.storage_type(), "i32");
        assert_eq!(ty.view_type(), "SpanKind");
        assert_eq!(
            ty.getter_expr("kind", "SpanKind::Unspecified"),
            "SpanKind::try_from(o.kind).unwrap_or(SpanKind::Unspecified)"
        );
    }

    #[test]
    fn test_string_default_is_not_encoded() {
        let field = FieldDescriptor::primitive("name", 5, PrimitiveType::String, "\"\"", "\"x\"");
        assert_eq!(
            encoded_len_expr(&field),
            "if self.name.is_empty() { 0 } else { encoding::string::encoded_len(5, &self.name) }"
        );
    }

    #[test]
    fn test_value_sequence_storage() {
        let field =
            FieldDescriptor::sequence("exemplars", 5, "IntExemplar", SequenceStorage::OwnedValues);
        assert_eq!(storage_type(&field), "Shared<Vec<IntExemplarOrig>>");
    }

    #[test]
    fn test_message_wire_conversion_uses_wire_name() {
        let field = FieldDescriptor::message("labels_map", 1, "Labels").on_wire("labels");
        assert_eq!(
            from_proto_expr(&field),
            "shared(LabelsOrig::from_proto(proto.labels.unwrap_or_default())?)"
        );
        assert_eq!(to_proto_expr(&field), "Some(self.labels_map.borrow().to_proto())");
    }
}
