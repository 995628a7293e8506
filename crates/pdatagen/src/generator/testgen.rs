//! Emits test fixtures and the conformance tests of every generated type.

use crate::generator::naming::{slice_type, snake_case};
use crate::generator::writer::CodeWriter;
use crate::generator::Context;
use crate::schema::{FieldDescriptor, OneofVariant, RecordSchema};

/// `generate_test_*` and `fill_test_*` helpers for one schema.
pub(crate) fn emit_fixtures(w: &mut CodeWriter, ctx: &Context<'_>, schema: &RecordSchema) {
    let name = schema.name;
    let snake = snake_case(name);

    w.line("#[cfg(test)]");
    w.open(format!("pub(crate) fn generate_test_{snake}() -> {name} {{"));
    w.line(format!("let tv = {name}::new();"));
    w.line(format!("fill_test_{snake}(&tv);"));
    w.line("tv");
    w.close("}");
    w.blank();

    w.line("#[cfg(test)]");
    w.open(format!("pub(crate) fn fill_test_{snake}(tv: &{name}) {{"));
    for field in &schema.fields {
        let f = field.name();
        match field {
            FieldDescriptor::Primitive { test_value, .. } => {
                w.line(format!("tv.set_{f}({test_value});"));
            }
            FieldDescriptor::Message { schema, .. } => {
                w.line(format!("{}(&tv.{f}());", ctx.fixture("fill", schema)));
            }
            FieldDescriptor::Sequence { element, .. } => {
                w.line(format!("{}(&tv.{f}());", ctx.slice_fixture("fill", element)));
            }
            FieldDescriptor::Map { kind, .. } => {
                w.line(format!(
                    "crate::common::fill_test_{}(&tv.{f}());",
                    kind.fixture()
                ));
            }
            FieldDescriptor::Oneof { variants, .. } => {
                if let Some(variant) = variants.first() {
                    w.line(format!(
                        "{}(&tv.set_empty_{}());",
                        ctx.fixture("fill", variant.schema),
                        variant.accessor
                    ));
                }
            }
        }
    }
    w.close("}");
    w.blank();
}

/// Fixtures for the sequence of `element`; every fixture sequence holds
/// seven filled elements.
pub(crate) fn emit_slice_fixtures(w: &mut CodeWriter, element: &str) {
    let slice = slice_type(element);
    let snake = snake_case(element);

    w.line("#[cfg(test)]");
    w.open(format!("pub(crate) fn generate_test_{snake}_slice() -> {slice} {{"));
    w.line(format!("let tv = {slice}::new();"));
    w.line(format!("fill_test_{snake}_slice(&tv);"));
    w.line("tv");
    w.close("}");
    w.blank();

    w.line("#[cfg(test)]");
    w.open(format!("pub(crate) fn fill_test_{snake}_slice(tv: &{slice}) {{"));
    w.line("tv.resize(7);");
    w.open("for element in tv.iter() {");
    w.line(format!("fill_test_{snake}(&element);"));
    w.close("}");
    w.close("}");
    w.blank();
}

/// Tests of one schema's view: accessors, deep copy and wire size.
pub(crate) fn emit_record_tests(w: &mut CodeWriter, ctx: &Context<'_>, schema: &RecordSchema) {
    let name = schema.name;
    let snake = snake_case(name);

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_copy_to() {{"));
    w.line(format!("let ms = {name}::new();"));
    w.line(format!("generate_test_{snake}().copy_to(&ms);"));
    w.line(format!("assert_eq!(ms, generate_test_{snake}());"));
    w.line("ms.copy_to(&ms);");
    w.line(format!("assert_eq!(ms, generate_test_{snake}());"));
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_clone() {{"));
    w.line(format!("let ms = generate_test_{snake}();"));
    w.line("let cloned = ms.clone();");
    w.line("assert_eq!(cloned, ms);");
    w.line(format!("{name}::new().copy_to(&cloned);"));
    w.line(format!("assert_eq!(ms, generate_test_{snake}());"));
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_wire_size() {{"));
    w.line(format!("let ms = generate_test_{snake}();"));
    w.line("let proto = ms.to_proto();");
    w.line("assert_eq!(ms.wire_size(), proto.encoded_len());");
    w.line(format!("assert_eq!({name}::from_proto(proto).unwrap(), ms);"));
    w.line(format!("let empty = {name}::new();"));
    w.line("assert_eq!(empty.wire_size(), empty.to_proto().encoded_len());");
    w.close("}");

    for field in &schema.fields {
        let f = field.name();
        w.blank();
        w.line("#[test]");
        w.open(format!("fn test_{snake}_{f}() {{"));
        w.line(format!("let ms = {name}::new();"));
        match field {
            FieldDescriptor::Primitive {
                default_value,
                test_value,
                ..
            } => {
                w.line(format!("assert_eq!(ms.{f}(), {default_value});"));
                w.line(format!("ms.set_{f}({test_value});"));
                w.line(format!("assert_eq!(ms.{f}(), {test_value});"));
            }
            FieldDescriptor::Message { schema, .. } => {
                w.line(format!("assert_eq!(ms.{f}(), {schema}::new());"));
                w.line(format!("{}(&ms.{f}());", ctx.fixture("fill", schema)));
                w.line(format!(
                    "assert_eq!(ms.{f}(), {}());",
                    ctx.fixture("generate", schema)
                ));
            }
            FieldDescriptor::Sequence { element, .. } => {
                w.line(format!("assert_eq!(ms.{f}(), {}::new());", slice_type(element)));
                w.line(format!("{}(&ms.{f}());", ctx.slice_fixture("fill", element)));
                w.line(format!(
                    "assert_eq!(ms.{f}(), {}());",
                    ctx.slice_fixture("generate", element)
                ));
            }
            FieldDescriptor::Map { kind, .. } => {
                w.line(format!("assert!(ms.{f}().is_empty());"));
                w.line(format!(
                    "crate::common::fill_test_{}(&ms.{f}());",
                    kind.fixture()
                ));
                w.line(format!(
                    "assert_eq!(ms.{f}(), crate::common::generate_test_{}());",
                    kind.fixture()
                ));
            }
            FieldDescriptor::Oneof {
                type_name,
                variants,
                ..
            } => emit_oneof_test_body(w, ctx, f, type_name, variants),
        }
        w.close("}");

        if let FieldDescriptor::Oneof {
            type_name,
            variants,
            ..
        } = field
        {
            emit_oneof_copy_test(w, ctx, name, f, type_name, variants);
        }
    }
}

fn emit_oneof_test_body(
    w: &mut CodeWriter,
    ctx: &Context<'_>,
    field: &str,
    type_name: &str,
    variants: &[OneofVariant],
) {
    let kind = format!("{type_name}Type");
    w.line(format!("assert_eq!(ms.{field}_type(), {kind}::None);"));
    w.line(format!("assert!(ms.{field}().is_none());"));
    for variant in variants {
        let accessor = variant.accessor;
        w.blank();
        w.line(format!(
            "{}(&ms.set_empty_{accessor}());",
            ctx.fixture("fill", variant.schema)
        ));
        w.line(format!("assert_eq!(ms.{field}_type(), {kind}::{});", variant.name));
        w.line(format!(
            "assert_eq!(ms.{accessor}(), Some({}()));",
            ctx.fixture("generate", variant.schema)
        ));
        w.line(format!(
            "assert_eq!(ms.{field}(), Some({type_name}::{}({}())));",
            variant.name,
            ctx.fixture("generate", variant.schema)
        ));
        for other in variants.iter().filter(|other| other.name != variant.name) {
            w.line(format!("assert!(ms.{}().is_none());", other.accessor));
        }
    }
    w.blank();
    w.line(format!("ms.set_{field}_type({kind}::None);"));
    w.line(format!("assert_eq!(ms.{field}_type(), {kind}::None);"));
    if let Some(first) = variants.first() {
        w.line(format!("ms.set_{field}_type({kind}::{});", first.name));
        w.line(format!(
            "assert_eq!(ms.{}(), Some({}::new()));",
            first.accessor, first.schema
        ));
    }
}

fn emit_oneof_copy_test(
    w: &mut CodeWriter,
    ctx: &Context<'_>,
    owner: &str,
    field: &str,
    type_name: &str,
    variants: &[OneofVariant],
) {
    let snake = snake_case(owner);
    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_copy_{field}() {{"));
    w.line(format!("let dest = {owner}::new();"));
    for variant in variants {
        w.open("{");
        w.line(format!("let src = {owner}::new();"));
        w.line(format!(
            "{}(&src.set_empty_{}());",
            ctx.fixture("fill", variant.schema),
            variant.accessor
        ));
        w.line("src.copy_to(&dest);");
        w.line(format!(
            "assert_eq!(dest.{}(), Some({}()));",
            variant.accessor,
            ctx.fixture("generate", variant.schema)
        ));
        w.close("}");
    }
    w.line(format!("{owner}::new().copy_to(&dest);"));
    w.line(format!("assert_eq!(dest.{field}_type(), {type_name}Type::None);"));
    w.close("}");
}

/// Tests of the sequence view of `element`.
pub(crate) fn emit_slice_tests(w: &mut CodeWriter, element: &str) {
    let slice = slice_type(element);
    let snake = snake_case(element);

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_slice() {{"));
    w.line(format!("let es = {slice}::new();"));
    w.line("assert_eq!(es.len(), 0);");
    w.line("assert!(es.is_empty());");
    w.line("es.resize(7);");
    w.line("assert_eq!(es.len(), 7);");
    w.line(format!("let empty = {element}::new();"));
    w.open("for element in es.iter() {");
    w.line("assert_eq!(element, empty);");
    w.close("}");
    w.line(format!("let es = generate_test_{snake}_slice();"));
    w.line("assert_eq!(es.len(), 7);");
    w.open("for element in es.iter() {");
    w.line(format!("assert_eq!(element, generate_test_{snake}());"));
    w.close("}");
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_slice_at_aliases_element() {{"));
    w.line(format!("let es = {slice}::new();"));
    w.line("es.resize(2);");
    w.line(format!("fill_test_{snake}(&es.at(1));"));
    w.line(format!("assert_eq!(es.at(0), {element}::new());"));
    w.line(format!("assert_eq!(es.at(1), generate_test_{snake}());"));
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.line("#[should_panic]");
    w.open(format!("fn test_{snake}_slice_at_out_of_range() {{"));
    w.line(format!("let es = generate_test_{snake}_slice();"));
    w.line("let _ = es.at(7);");
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_slice_copy_to() {{"));
    w.line(format!("let dest = {slice}::new();"));
    w.line(format!("{slice}::new().copy_to(&dest);"));
    w.line(format!("assert_eq!(dest, {slice}::new());"));
    w.line(format!("generate_test_{snake}_slice().copy_to(&dest);"));
    w.line(format!("assert_eq!(dest, generate_test_{snake}_slice());"));
    w.line(format!("generate_test_{snake}_slice().copy_to(&dest);"));
    w.line(format!("assert_eq!(dest, generate_test_{snake}_slice());"));
    w.line("dest.copy_to(&dest);");
    w.line(format!("assert_eq!(dest, generate_test_{snake}_slice());"));
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_slice_resize() {{"));
    w.line(format!("let es = generate_test_{snake}_slice();"));
    w.line(format!("let empty = {element}::new();"));
    w.line("es.resize(10);");
    w.line("assert_eq!(es.len(), 10);");
    w.open("for i in 0..7 {");
    w.line(format!("assert_eq!(es.at(i), generate_test_{snake}());"));
    w.close("}");
    w.open("for i in 7..10 {");
    w.line("assert_eq!(es.at(i), empty);");
    w.close("}");
    w.line("es.resize(3);");
    w.line("assert_eq!(es.len(), 3);");
    w.open("for element in es.iter() {");
    w.line(format!("assert_eq!(element, generate_test_{snake}());"));
    w.close("}");
    w.line("es.resize(0);");
    w.line("assert!(es.is_empty());");
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_slice_append() {{"));
    w.line(format!("let es = generate_test_{snake}_slice();"));
    w.line("let element = es.append_empty();");
    w.line(format!("assert_eq!(element, {element}::new());"));
    w.line(format!("fill_test_{snake}(&element);"));
    w.line("assert_eq!(es.len(), 8);");
    w.line(format!("assert_eq!(es.at(7), generate_test_{snake}());"));
    w.line(format!("let source = generate_test_{snake}();"));
    w.line("es.append(&source);");
    w.line(format!("{element}::new().copy_to(&source);"));
    w.line("assert_eq!(es.len(), 9);");
    w.line(format!("assert_eq!(es.at(8), generate_test_{snake}());"));
    w.close("}");

    w.blank();
    w.line("#[test]");
    w.open(format!("fn test_{snake}_slice_retain() {{"));
    w.line(format!("let es = generate_test_{snake}_slice();"));
    w.line(format!("{element}::new().copy_to(&es.at(2));"));
    w.line(format!("let empty = {element}::new();"));
    w.line("es.retain(|element| *element != empty);");
    w.line("assert_eq!(es.len(), 6);");
    w.open("for element in es.iter() {");
    w.line(format!("assert_eq!(element, generate_test_{snake}());"));
    w.close("}");
    w.line("es.retain(|_| false);");
    w.line("assert!(es.is_empty());");
    w.close("}");
}
