use thiserror::Error;

/// Result type for schema validation and code generation
pub type Result<T> = std::result::Result<T, SchemaValidationError>;

/// Errors that make a schema set unusable for code generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaValidationError {
    /// Two schemas share a name
    #[error("Schema '{0}' is declared more than once")]
    DuplicateSchema(String),

    /// Two generated types would share a name
    #[error("Generated type '{type_name}' is produced by more than one declaration")]
    DuplicateTypeName { type_name: String },

    /// Two schema files share a name
    #[error("Schema file '{0}' is declared more than once")]
    DuplicateFile(String),

    /// Two fields of one schema produce the same accessor
    #[error("Schema '{schema}' produces accessor '{accessor}' more than once")]
    DuplicateAccessor { schema: String, accessor: String },

    /// An accessor collides with a method every view already has
    #[error("Schema '{schema}' field '{field}' produces reserved accessor '{accessor}'")]
    ReservedAccessor {
        schema: String,
        field: String,
        accessor: String,
    },

    /// Two fields of one schema use the same wire tag
    #[error("Schema '{schema}' uses wire tag {tag} more than once")]
    DuplicateTag { schema: String, tag: u32 },

    /// Wire tag outside the protobuf field number range
    #[error("Schema '{schema}' field '{field}' has invalid wire tag {tag}")]
    InvalidTag {
        schema: String,
        field: String,
        tag: u32,
    },

    /// A field references a schema that is not part of the set
    #[error("Schema '{schema}' field '{field}' references undeclared schema '{target}'")]
    UndeclaredSchema {
        schema: String,
        field: String,
        target: String,
    },

    /// The same element schema is stored both by pointer and by value
    #[error("Schema '{element}' is used as a sequence element with conflicting storage")]
    ConflictingStorage { element: String },

    /// A oneof field without variants
    #[error("Schema '{schema}' oneof '{field}' declares no variants")]
    EmptyOneof { schema: String, field: String },

    /// A name that cannot be emitted as a Rust identifier
    #[error("Schema '{schema}' uses '{name}', which is not a valid identifier")]
    InvalidIdentifier { schema: String, name: String },
}
