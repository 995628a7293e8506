//! Rust source generation for validated schema sets.
//!
//! Every [`SchemaFile`] becomes one `generated_<name>.rs` file meant to be
//! `include!`d into a module of the same name under `crate::generated`.
//! Generated code refers to the runtime through `crate::generated::prelude`.

mod fields;
mod message;
mod naming;
mod sequence;
mod testgen;
mod writer;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::schema::{validate, FieldDescriptor, SchemaFile, SchemaSet, SequenceStorage};

use naming::{orig_type, slice_type, snake_case};
use writer::CodeWriter;

const HEADER: &str = "// Code generated by pdatagen. DO NOT EDIT.";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Module the file belongs to
    pub module: String,
    pub file_name: String,
    pub contents: String,
}

/// Validates `set` and renders one file per schema file, in declaration order.
///
/// Nothing is rendered when validation fails.
pub fn generate(set: &SchemaSet) -> Result<Vec<GeneratedFile>> {
    validate(set)?;

    let ctx = Context { set };
    Ok(set
        .files
        .iter()
        .map(|file| GeneratedFile {
            module: file.name.to_string(),
            file_name: format!("generated_{}.rs", file.name),
            contents: render_file(&ctx, file),
        })
        .collect())
}

/// Lookups across the whole schema set.
pub(crate) struct Context<'a> {
    set: &'a SchemaSet,
}

impl Context<'_> {
    fn file_of(&self, schema: &str) -> &'static str {
        self.set.find(schema).map_or("", |(file, _)| file)
    }

    /// Path of the `fill_test_*` or `generate_test_*` fixture of `schema`.
    pub(crate) fn fixture(&self, kind: &str, schema: &str) -> String {
        format!(
            "crate::generated::{}::{kind}_test_{}",
            self.file_of(schema),
            snake_case(schema)
        )
    }

    /// Path of the sequence fixture of `element`.
    pub(crate) fn slice_fixture(&self, kind: &str, element: &str) -> String {
        format!("{}_slice", self.fixture(kind, element))
    }

    fn slice_storage(&self, element: &str) -> Option<SequenceStorage> {
        self.set.element_storage(element)
    }
}

fn render_file(ctx: &Context<'_>, file: &SchemaFile) -> String {
    let mut w = CodeWriter::new();
    w.line(HEADER);
    w.blank();
    w.line("use crate::generated::prelude::*;");
    for (module, names) in foreign_imports(ctx, file) {
        let names: Vec<_> = names.into_iter().collect();
        w.line(format!("use super::{module}::{{{}}};", names.join(", ")));
    }
    w.blank();

    let mut slices = Vec::new();
    for schema in &file.schemas {
        message::emit_message(&mut w, schema);
        if let Some(storage) = ctx.slice_storage(schema.name) {
            sequence::emit_slice(&mut w, schema.name, storage);
            slices.push(schema.name);
        }
    }

    for schema in &file.schemas {
        testgen::emit_fixtures(&mut w, ctx, schema);
        if slices.contains(&schema.name) {
            testgen::emit_slice_fixtures(&mut w, schema.name);
        }
    }

    w.line("#[cfg(test)]");
    w.open("mod tests {");
    w.line("use prost::Message;");
    w.blank();
    w.line("use super::*;");
    for schema in &file.schemas {
        testgen::emit_record_tests(&mut w, ctx, schema);
    }
    for element in &slices {
        testgen::emit_slice_tests(&mut w, element);
    }
    w.close("}");

    w.finish()
}

/// Types declared in other files that this file's schemas refer to, keyed by
/// module and sorted for stable output.
fn foreign_imports(ctx: &Context<'_>, file: &SchemaFile) -> BTreeMap<&'static str, BTreeSet<String>> {
    let mut imports: BTreeMap<&'static str, BTreeSet<String>> = BTreeMap::new();
    for field in file.schemas.iter().flat_map(|schema| schema.fields.iter()) {
        let names = match field {
            FieldDescriptor::Message { schema, .. } => vec![(*schema, schema.to_string())],
            FieldDescriptor::Sequence { element, .. } => vec![(*element, slice_type(element))],
            FieldDescriptor::Oneof { variants, .. } => variants
                .iter()
                .map(|v| (v.schema, v.schema.to_string()))
                .collect(),
            FieldDescriptor::Primitive { .. } | FieldDescriptor::Map { .. } => Vec::new(),
        };
        for (schema, view) in names {
            let module = ctx.file_of(schema);
            if module == file.name {
                continue;
            }
            let entry = imports.entry(module).or_default();
            entry.insert(view);
            entry.insert(orig_type(schema));
        }
    }
    imports
}
