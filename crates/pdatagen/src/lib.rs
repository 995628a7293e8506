//! Code generator for the telemetry data model.
//!
//! Record schemas describe every message of the trace, metrics and logs trees
//! as a list of [`FieldDescriptor`](schema::FieldDescriptor)s. The generator
//! turns a validated [`SchemaSet`](schema::SchemaSet) into Rust source for the
//! view types of the `pdata` crate: accessors, deep copy, wire conversion,
//! sequence types, and a conformance test suite per schema.
//!
//! Generation is deterministic: the same schema set always produces
//! byte-identical files.

pub mod error;
pub mod generator;
pub mod output;
pub mod schema;
pub mod schemas;

pub use error::{Result, SchemaValidationError};
pub use generator::{generate, GeneratedFile};
pub use schema::{
    FieldDescriptor, MapKind, OneofVariant, PrimitiveType, RecordSchema, SchemaFile, SchemaSet,
    SequenceStorage,
};
