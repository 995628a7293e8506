//! Field descriptor model for record schemas.
//!
//! A [`RecordSchema`] is an ordered list of [`FieldDescriptor`]s. Schemas are
//! grouped into [`SchemaFile`]s, one generated source file each, and a
//! [`SchemaSet`] holds every file that takes part in one generation run.

pub mod validation;

pub use validation::validate;

/// Scalar and value kinds a primitive field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// UTF-8 string
    String,
    /// Boolean flag
    Bool,
    /// Varint encoded `u32`
    Uint32,
    /// Fixed width `u32`
    Fixed32,
    /// Fixed width `u64`
    Fixed64,
    /// Fixed width `i64`
    Sfixed64,
    /// `f64`
    Double,
    /// Nanoseconds since the Unix epoch, fixed width on the wire
    Timestamp,
    /// 16 byte trace identifier
    TraceId,
    /// 8 byte span identifier
    SpanId,
    /// Protobuf enumeration, stored as its raw `i32`. Holds the Rust enum name.
    Enum(&'static str),
    /// Packed list of fixed width `u64`
    Fixed64List,
    /// Packed list of `f64`
    DoubleList,
    /// Dynamically typed attribute value
    AnyValue,
}

/// How the elements of a sequence are owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceStorage {
    /// Every element lives in its own allocation and survives reordering.
    OwnedPointers,
    /// Elements live inline in the sequence buffer.
    OwnedValues,
}

/// Key/value collections supported as map fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// String keys to [`PrimitiveType::AnyValue`] values
    Attributes,
    /// String keys to string values
    StringLabels,
}

/// One alternative of a oneof field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneofVariant {
    /// Variant name in the generated enums
    pub name: &'static str,
    /// Accessor returning the variant view
    pub accessor: &'static str,
    /// Variant name in the wire oneof enum
    pub wire_name: &'static str,
    pub tag: u32,
    /// Schema of the variant payload
    pub schema: &'static str,
}

/// Describes one field of a record schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDescriptor {
    Primitive {
        name: &'static str,
        wire_name: &'static str,
        tag: u32,
        ty: PrimitiveType,
        /// Rust expression of the value a fresh record reports
        default_value: &'static str,
        /// Rust expression used by the generated tests
        test_value: &'static str,
    },
    Message {
        name: &'static str,
        wire_name: &'static str,
        tag: u32,
        schema: &'static str,
    },
    Sequence {
        name: &'static str,
        wire_name: &'static str,
        tag: u32,
        element: &'static str,
        storage: SequenceStorage,
    },
    Oneof {
        name: &'static str,
        wire_name: &'static str,
        /// Path of the wire oneof enum below `crate::proto`
        wire_type_name: &'static str,
        /// Name of the generated payload enum
        type_name: &'static str,
        variants: Vec<OneofVariant>,
    },
    Map {
        name: &'static str,
        wire_name: &'static str,
        tag: u32,
        kind: MapKind,
    },
}

impl FieldDescriptor {
    pub fn primitive(
        name: &'static str,
        tag: u32,
        ty: PrimitiveType,
        default_value: &'static str,
        test_value: &'static str,
    ) -> Self {
        Self::Primitive {
            name,
            wire_name: name,
            tag,
            ty,
            default_value,
            test_value,
        }
    }

    pub fn message(name: &'static str, tag: u32, schema: &'static str) -> Self {
        Self::Message {
            name,
            wire_name: name,
            tag,
            schema,
        }
    }

    pub fn sequence(
        name: &'static str,
        tag: u32,
        element: &'static str,
        storage: SequenceStorage,
    ) -> Self {
        Self::Sequence {
            name,
            wire_name: name,
            tag,
            element,
            storage,
        }
    }

    pub fn map(name: &'static str, tag: u32, kind: MapKind) -> Self {
        Self::Map {
            name,
            wire_name: name,
            tag,
            kind,
        }
    }

    pub fn oneof(
        name: &'static str,
        wire_type_name: &'static str,
        type_name: &'static str,
        variants: Vec<OneofVariant>,
    ) -> Self {
        Self::Oneof {
            name,
            wire_name: name,
            wire_type_name,
            type_name,
            variants,
        }
    }

    /// Overrides the field name used by the wire representation.
    pub fn on_wire(mut self, wire: &'static str) -> Self {
        match &mut self {
            Self::Primitive { wire_name, .. }
            | Self::Message { wire_name, .. }
            | Self::Sequence { wire_name, .. }
            | Self::Oneof { wire_name, .. }
            | Self::Map { wire_name, .. } => *wire_name = wire,
        }
        self
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Primitive { name, .. }
            | Self::Message { name, .. }
            | Self::Sequence { name, .. }
            | Self::Oneof { name, .. }
            | Self::Map { name, .. } => name,
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Primitive { wire_name, .. }
            | Self::Message { wire_name, .. }
            | Self::Sequence { wire_name, .. }
            | Self::Oneof { wire_name, .. }
            | Self::Map { wire_name, .. } => wire_name,
        }
    }

    /// Wire tags the field occupies.
    pub fn tags(&self) -> Vec<u32> {
        match self {
            Self::Primitive { tag, .. }
            | Self::Message { tag, .. }
            | Self::Sequence { tag, .. }
            | Self::Map { tag, .. } => vec![*tag],
            Self::Oneof { variants, .. } => variants.iter().map(|v| v.tag).collect(),
        }
    }

    /// Schemas this field refers to, in declaration order.
    pub fn referenced_schemas(&self) -> Vec<&'static str> {
        match self {
            Self::Primitive { .. } | Self::Map { .. } => Vec::new(),
            Self::Message { schema, .. } => vec![*schema],
            Self::Sequence { element, .. } => vec![*element],
            Self::Oneof { variants, .. } => variants.iter().map(|v| v.schema).collect(),
        }
    }

    /// Names of the view methods generated for this field.
    pub fn accessors(&self) -> Vec<String> {
        match self {
            Self::Primitive { name, .. } => vec![name.to_string(), format!("set_{name}")],
            Self::Message { name, .. } | Self::Sequence { name, .. } | Self::Map { name, .. } => {
                vec![name.to_string()]
            }
            Self::Oneof { name, variants, .. } => {
                let mut accessors = vec![
                    name.to_string(),
                    format!("{name}_type"),
                    format!("set_{name}_type"),
                    format!("copy_{name}"),
                ];
                for variant in variants {
                    accessors.push(variant.accessor.to_string());
                    accessors.push(format!("set_empty_{}", variant.accessor));
                }
                accessors
            }
        }
    }
}

/// A named record made of ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub description: &'static str,
    /// Path of the wire message below `crate::proto`
    pub wire_type_name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn new(name: &'static str, description: &'static str, wire_type_name: &'static str) -> Self {
        Self {
            name,
            description,
            wire_type_name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// Schemas emitted into one generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFile {
    /// Module name of the generated file
    pub name: &'static str,
    pub schemas: Vec<RecordSchema>,
}

/// Every schema file taking part in a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaSet {
    pub files: Vec<SchemaFile>,
}

impl SchemaSet {
    pub fn new(files: Vec<SchemaFile>) -> Self {
        Self { files }
    }

    /// All schemas in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = &RecordSchema> {
        self.files.iter().flat_map(|file| file.schemas.iter())
    }

    /// Finds a schema and the name of the file declaring it.
    pub fn find(&self, name: &str) -> Option<(&'static str, &RecordSchema)> {
        self.files.iter().find_map(|file| {
            file.schemas
                .iter()
                .find(|schema| schema.name == name)
                .map(|schema| (file.name, schema))
        })
    }

    /// Storage used for `element` by the first sequence that holds it.
    pub fn element_storage(&self, element: &str) -> Option<SequenceStorage> {
        self.schemas()
            .flat_map(|schema| schema.fields.iter())
            .find_map(|field| match field {
                FieldDescriptor::Sequence {
                    element: e,
                    storage,
                    ..
                } if *e == element => Some(*storage),
                _ => None,
            })
    }
}
