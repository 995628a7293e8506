//! Schema set validation, run before any code is emitted

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SchemaValidationError};
use crate::schema::{FieldDescriptor, RecordSchema, SchemaSet, SequenceStorage};

/// Methods every generated view already defines
const RESERVED_ACCESSORS: &[&str] = &[
    "new",
    "from_orig",
    "copy_to",
    "from_proto",
    "to_proto",
    "wire_size",
    "clone",
    "eq",
    "fmt",
    "default",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Highest field number protobuf accepts
const MAX_TAG: u32 = (1 << 29) - 1;

/// Validates a schema set; generation only proceeds on `Ok`.
pub fn validate(set: &SchemaSet) -> Result<()> {
    validate_files(set)?;
    validate_type_names(set)?;

    for schema in set.schemas() {
        validate_record(set, schema)?;
    }

    validate_element_storage(set)?;

    Ok(())
}

/// Checks file names are unique module identifiers
fn validate_files(set: &SchemaSet) -> Result<()> {
    let mut seen = HashSet::new();
    for file in &set.files {
        if !is_field_ident(file.name) {
            return Err(SchemaValidationError::InvalidIdentifier {
                schema: file.name.to_string(),
                name: file.name.to_string(),
            });
        }
        if !seen.insert(file.name) {
            return Err(SchemaValidationError::DuplicateFile(file.name.to_string()));
        }
    }
    Ok(())
}

/// Checks schema names and every type name derived from them are unique
fn validate_type_names(set: &SchemaSet) -> Result<()> {
    let mut schemas = HashSet::new();
    for schema in set.schemas() {
        if !is_type_ident(schema.name) {
            return Err(SchemaValidationError::InvalidIdentifier {
                schema: schema.name.to_string(),
                name: schema.name.to_string(),
            });
        }
        if !schemas.insert(schema.name) {
            return Err(SchemaValidationError::DuplicateSchema(schema.name.to_string()));
        }
    }

    let mut types = HashSet::new();
    let mut claim = |type_name: String| {
        if types.insert(type_name.clone()) {
            Ok(())
        } else {
            Err(SchemaValidationError::DuplicateTypeName { type_name })
        }
    };

    let mut elements = HashSet::new();
    for schema in set.schemas() {
        claim(schema.name.to_string())?;
        claim(format!("{}Orig", schema.name))?;
        for field in &schema.fields {
            match field {
                FieldDescriptor::Sequence { element, .. } => {
                    elements.insert(*element);
                }
                FieldDescriptor::Oneof { type_name, .. } => {
                    if !is_type_ident(type_name) {
                        return Err(SchemaValidationError::InvalidIdentifier {
                            schema: schema.name.to_string(),
                            name: type_name.to_string(),
                        });
                    }
                    claim(type_name.to_string())?;
                    claim(format!("{type_name}Type"))?;
                    claim(format!("{type_name}Orig"))?;
                }
                _ => {}
            }
        }
    }

    let mut elements: Vec<_> = elements.into_iter().collect();
    elements.sort_unstable();
    for element in elements {
        claim(format!("{element}Slice"))?;
    }

    Ok(())
}

/// Validates the fields of a single schema
fn validate_record(set: &SchemaSet, schema: &RecordSchema) -> Result<()> {
    let mut accessors = HashSet::new();
    let mut tags = HashSet::new();

    for field in &schema.fields {
        for name in [field.name(), field.wire_name()] {
            if !is_field_ident(name) {
                return Err(SchemaValidationError::InvalidIdentifier {
                    schema: schema.name.to_string(),
                    name: name.to_string(),
                });
            }
        }

        if let FieldDescriptor::Oneof { variants, .. } = field {
            if variants.is_empty() {
                return Err(SchemaValidationError::EmptyOneof {
                    schema: schema.name.to_string(),
                    field: field.name().to_string(),
                });
            }
            for variant in variants {
                if !is_type_ident(variant.name) || !is_type_ident(variant.wire_name) {
                    return Err(SchemaValidationError::InvalidIdentifier {
                        schema: schema.name.to_string(),
                        name: variant.name.to_string(),
                    });
                }
                if !is_field_ident(variant.accessor) {
                    return Err(SchemaValidationError::InvalidIdentifier {
                        schema: schema.name.to_string(),
                        name: variant.accessor.to_string(),
                    });
                }
            }
        }

        for accessor in field.accessors() {
            if RESERVED_ACCESSORS.contains(&accessor.as_str()) {
                return Err(SchemaValidationError::ReservedAccessor {
                    schema: schema.name.to_string(),
                    field: field.name().to_string(),
                    accessor,
                });
            }
            if !accessors.insert(accessor.clone()) {
                return Err(SchemaValidationError::DuplicateAccessor {
                    schema: schema.name.to_string(),
                    accessor,
                });
            }
        }

        for tag in field.tags() {
            if tag == 0 || tag > MAX_TAG || (19_000..20_000).contains(&tag) {
                return Err(SchemaValidationError::InvalidTag {
                    schema: schema.name.to_string(),
                    field: field.name().to_string(),
                    tag,
                });
            }
            if !tags.insert(tag) {
                return Err(SchemaValidationError::DuplicateTag {
                    schema: schema.name.to_string(),
                    tag,
                });
            }
        }

        for target in field.referenced_schemas() {
            if set.find(target).is_none() {
                return Err(SchemaValidationError::UndeclaredSchema {
                    schema: schema.name.to_string(),
                    field: field.name().to_string(),
                    target: target.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// An element schema gets exactly one sequence type, so all sequences of it
/// must agree on storage.
fn validate_element_storage(set: &SchemaSet) -> Result<()> {
    let mut storage: HashMap<&str, SequenceStorage> = HashMap::new();
    for field in set.schemas().flat_map(|schema| schema.fields.iter()) {
        if let FieldDescriptor::Sequence {
            element,
            storage: s,
            ..
        } = field
        {
            match storage.get(element) {
                Some(existing) if existing != s => {
                    return Err(SchemaValidationError::ConflictingStorage {
                        element: element.to_string(),
                    });
                }
                _ => {
                    storage.insert(element, *s);
                }
            }
        }
    }
    Ok(())
}

fn is_field_ident(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !KEYWORDS.contains(&name)
}

fn is_type_ident(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
        && name != "Self"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        FieldDescriptor as F, MapKind, OneofVariant, PrimitiveType as P, SchemaFile,
    };

    fn set_of(schemas: Vec<RecordSchema>) -> SchemaSet {
        SchemaSet::new(vec![SchemaFile {
            name: "sample",
            schemas,
        }])
    }

    fn record(name: &'static str) -> RecordSchema {
        RecordSchema::new(name, "Sample record.", "sample::Record")
    }

    #[test]
    fn test_validate_minimal_set() {
        let set = set_of(vec![
            record("Outer")
                .field(F::primitive("name", 1, P::String, "\"\"", "\"x\""))
                .field(F::sequence("inners", 2, "Inner", SequenceStorage::OwnedPointers))
                .field(F::map("attributes", 3, MapKind::Attributes)),
            record("Inner").field(F::primitive("count", 1, P::Uint32, "0", "1")),
        ]);

        assert!(validate(&set).is_ok());
    }

    #[test]
    fn test_validate_duplicate_schema() {
        let set = set_of(vec![record("Inner"), record("Inner")]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::DuplicateSchema(name)) if name == "Inner"
        ));
    }

    #[test]
    fn test_validate_duplicate_accessor() {
        let set = set_of(vec![record("Outer")
            .field(F::primitive("name", 1, P::String, "\"\"", "\"x\""))
            .field(F::message("name", 2, "Outer"))]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::DuplicateAccessor { accessor, .. }) if accessor == "name"
        ));
    }

    #[test]
    fn test_validate_setter_collides_with_field() {
        let set = set_of(vec![record("Outer")
            .field(F::primitive("name", 1, P::String, "\"\"", "\"x\""))
            .field(F::primitive("set_name", 2, P::String, "\"\"", "\"x\""))]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::DuplicateAccessor { accessor, .. }) if accessor == "set_name"
        ));
    }

    #[test]
    fn test_validate_reserved_accessor() {
        let set = set_of(vec![
            record("Outer").field(F::primitive("wire_size", 1, P::Uint32, "0", "1"))
        ]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::ReservedAccessor { accessor, .. }) if accessor == "wire_size"
        ));
    }

    #[test]
    fn test_validate_duplicate_tag() {
        let set = set_of(vec![record("Outer")
            .field(F::primitive("a", 1, P::Uint32, "0", "1"))
            .field(F::primitive("b", 1, P::Uint32, "0", "1"))]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::DuplicateTag { tag: 1, .. })
        ));
    }

    #[test]
    fn test_validate_reserved_tag_range() {
        let set = set_of(vec![
            record("Outer").field(F::primitive("a", 19_500, P::Uint32, "0", "1"))
        ]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::InvalidTag { tag: 19_500, .. })
        ));
    }

    #[test]
    fn test_validate_undeclared_reference() {
        let set = set_of(vec![record("Outer").field(F::message("inner", 1, "Missing"))]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::UndeclaredSchema { target, .. }) if target == "Missing"
        ));
    }

    #[test]
    fn test_validate_conflicting_storage() {
        let set = set_of(vec![
            record("Outer")
                .field(F::sequence("a", 1, "Inner", SequenceStorage::OwnedPointers))
                .field(F::sequence("b", 2, "Inner", SequenceStorage::OwnedValues)),
            record("Inner"),
        ]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::ConflictingStorage { element }) if element == "Inner"
        ));
    }

    #[test]
    fn test_validate_empty_oneof() {
        let set = set_of(vec![
            record("Outer").field(F::oneof("data", "sample::Data", "OuterData", Vec::new()))
        ]);

        let result = validate(&set);
        assert!(matches!(result, Err(SchemaValidationError::EmptyOneof { .. })));
    }

    #[test]
    fn test_validate_oneof_type_collides_with_schema() {
        let variant = OneofVariant {
            name: "Inner",
            accessor: "inner",
            wire_name: "Inner",
            tag: 1,
            schema: "Inner",
        };
        let set = set_of(vec![
            record("Outer").field(F::oneof("data", "sample::Data", "Inner", vec![variant])),
            record("Inner"),
        ]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::DuplicateTypeName { type_name }) if type_name == "Inner"
        ));
    }

    #[test]
    fn test_validate_keyword_field() {
        let set = set_of(vec![
            record("Outer").field(F::primitive("type", 1, P::String, "\"\"", "\"x\""))
        ]);

        let result = validate(&set);
        assert!(matches!(
            result,
            Err(SchemaValidationError::InvalidIdentifier { name, .. }) if name == "type"
        ));
    }
}
