//! Emits the view struct, orig struct and oneof enums of one record schema.

use crate::generator::fields::{self, storage_type};
use crate::generator::naming::{orig_type, slice_type, wire_path};
use crate::generator::writer::CodeWriter;
use crate::schema::{FieldDescriptor, OneofVariant, RecordSchema};

pub(crate) fn emit_message(w: &mut CodeWriter, schema: &RecordSchema) {
    let name = schema.name;
    let orig = orig_type(name);

    w.doc(schema.description);
    w.open(format!("pub struct {name} {{"));
    w.line(format!("orig: Handle<{orig}>,"));
    w.close("}");
    w.blank();

    w.line("#[derive(Debug, Default, PartialEq)]");
    w.open(format!("pub(crate) struct {orig} {{"));
    for field in &schema.fields {
        w.line(format!("pub(crate) {}: {},", field.name(), storage_type(field)));
    }
    w.close("}");
    w.blank();

    w.open(format!("impl {name} {{"));
    w.open(format!("pub(crate) fn from_orig(orig: Handle<{orig}>) -> Self {{"));
    w.line("Self { orig }");
    w.close("}");
    w.blank();
    w.doc(&format!("Creates a new empty {name}."));
    w.open("pub fn new() -> Self {");
    w.line(format!("Self::from_orig(Handle::Shared(shared({orig}::default())))"));
    w.close("}");

    for field in &schema.fields {
        emit_accessors(w, name, field);
    }

    w.blank();
    emit_copy_to(w, schema);
    emit_wire_methods(w, schema);
    w.close("}");
    w.blank();

    emit_trait_impls(w, name);
    emit_orig_wire(w, schema);

    for field in &schema.fields {
        if let FieldDescriptor::Oneof {
            wire_type_name,
            type_name,
            variants,
            ..
        } = field
        {
            emit_oneof_types(w, name, field.name(), wire_type_name, type_name, variants);
        }
    }
}

fn emit_accessors(w: &mut CodeWriter, owner: &str, field: &FieldDescriptor) {
    let name = field.name();
    match field {
        FieldDescriptor::Primitive {
            ty, default_value, ..
        } => {
            w.blank();
            w.doc(&format!("Returns the `{name}` of this {owner}."));
            w.open(format!("pub fn {name}(&self) -> {} {{", ty.view_type()));
            w.line(format!("self.orig.read(|o| {})", ty.getter_expr(name, default_value)));
            w.close("}");
            w.blank();
            w.doc(&format!("Replaces the `{name}` of this {owner}."));
            w.open(format!("pub fn set_{name}(&self, v: {}) {{", ty.setter_type()));
            w.line(format!("self.orig.write(|o| {});", ty.setter_stmt(name)));
            w.close("}");
        }
        FieldDescriptor::Message { schema, .. } => {
            w.blank();
            w.doc(&format!(
                "Returns the `{name}` of this {owner}. The returned view aliases this {owner}."
            ));
            w.open(format!("pub fn {name}(&self) -> {schema} {{"));
            w.line(format!(
                "{schema}::from_orig(Handle::Shared(self.orig.read(|o| Rc::clone(&o.{name}))))"
            ));
            w.close("}");
        }
        FieldDescriptor::Sequence { element, .. } => {
            let slice = slice_type(element);
            w.blank();
            w.doc(&format!(
                "Returns the `{name}` of this {owner}. The returned view aliases this {owner}."
            ));
            w.open(format!("pub fn {name}(&self) -> {slice} {{"));
            w.line(format!("{slice}::from_orig(self.orig.read(|o| Rc::clone(&o.{name})))"));
            w.close("}");
        }
        FieldDescriptor::Map { kind, .. } => {
            let map = kind.view_type();
            w.blank();
            w.doc(&format!(
                "Returns the `{name}` of this {owner}. The returned view aliases this {owner}."
            ));
            w.open(format!("pub fn {name}(&self) -> {map} {{"));
            w.line(format!("{map}::from_orig(self.orig.read(|o| Rc::clone(&o.{name})))"));
            w.close("}");
        }
        FieldDescriptor::Oneof {
            type_name,
            variants,
            ..
        } => emit_oneof_accessors(w, owner, name, type_name, variants),
    }
}

fn emit_oneof_accessors(
    w: &mut CodeWriter,
    owner: &str,
    name: &str,
    type_name: &str,
    variants: &[OneofVariant],
) {
    let orig = orig_type(type_name);
    let kind = format!("{type_name}Type");

    w.blank();
    w.doc(&format!("Returns which variant of `{name}` is set."));
    w.open(format!("pub fn {name}_type(&self) -> {kind} {{"));
    w.open(format!("self.orig.read(|o| match &o.{name} {{"));
    w.line(format!("None => {kind}::None,"));
    for variant in variants {
        w.line(format!("Some({orig}::{0}(_)) => {kind}::{0},", variant.name));
    }
    w.close("})");
    w.close("}");

    w.blank();
    w.doc(&format!(
        "Returns the `{name}` of this {owner}, or `None` if no variant is set."
    ));
    w.open(format!("pub fn {name}(&self) -> Option<{type_name}> {{"));
    w.open("self.orig.read(|o| {");
    w.open(format!("o.{name}.as_ref().map(|value| match value {{"));
    for variant in variants {
        w.line(format!(
            "{orig}::{0}(orig) => {type_name}::{0}({1}::from_orig(Handle::Shared(Rc::clone(orig)))),",
            variant.name, variant.schema
        ));
    }
    w.close("})");
    w.close("})");
    w.close("}");

    w.blank();
    w.doc(&format!(
        "Sets `{name}` to an empty value of the given variant, dropping the current one."
    ));
    w.open(format!("pub fn set_{name}_type(&self, {name}_type: {kind}) {{"));
    w.open(format!("match {name}_type {{"));
    w.line(format!("{kind}::None => self.orig.write(|o| o.{name} = None),"));
    for variant in variants {
        w.open(format!("{kind}::{} => {{", variant.name));
        w.line(format!("self.set_empty_{}();", variant.accessor));
        w.close("}");
    }
    w.close("}");
    w.close("}");

    for variant in variants {
        let schema = variant.schema;
        let accessor = variant.accessor;
        w.blank();
        w.doc(&format!(
            "Returns the `{name}` as {schema}, or `None` if another variant is set."
        ));
        w.open(format!("pub fn {accessor}(&self) -> Option<{schema}> {{"));
        w.open(format!("self.orig.read(|o| match &o.{name} {{"));
        w.line(format!(
            "Some({orig}::{}(orig)) => Some({schema}::from_orig(Handle::Shared(Rc::clone(orig)))),",
            variant.name
        ));
        w.line("_ => None,");
        w.close("})");
        w.close("}");

        w.blank();
        w.doc(&format!(
            "Replaces `{name}` with an empty {schema} and returns it."
        ));
        w.open(format!("pub fn set_empty_{accessor}(&self) -> {schema} {{"));
        w.line(format!("let orig = shared({}::default());", orig_type(schema)));
        w.line(format!(
            "self.orig.write(|o| o.{name} = Some({orig}::{}(Rc::clone(&orig))));",
            variant.name
        ));
        w.line(format!("{schema}::from_orig(Handle::Shared(orig))"));
        w.close("}");
    }

    w.blank();
    w.open(format!("fn copy_{name}(&self, dest: &{owner}) {{"));
    w.open(format!("match self.{name}() {{"));
    w.line(format!("None => dest.orig.write(|o| o.{name} = None),"));
    for variant in variants {
        w.line(format!(
            "Some({type_name}::{}(src)) => src.copy_to(&dest.set_empty_{}()),",
            variant.name, variant.accessor
        ));
    }
    w.close("}");
    w.close("}");
}

fn emit_copy_to(w: &mut CodeWriter, schema: &RecordSchema) {
    let name = schema.name;
    w.doc(&format!("Overwrites `dest` with a deep copy of this {name}."));
    w.open(format!("pub fn copy_to(&self, dest: &{name}) {{"));
    w.open("if self.orig.ptr_eq(&dest.orig) {");
    w.line("return;");
    w.close("}");
    for field in &schema.fields {
        let f = field.name();
        match field {
            FieldDescriptor::Primitive { ty, .. } => {
                w.line(format!("let {f} = self.orig.read(|o| {});", ty.read_expr(f)));
                w.line(format!("dest.orig.write(|o| o.{f} = {f});"));
            }
            FieldDescriptor::Message { .. }
            | FieldDescriptor::Sequence { .. }
            | FieldDescriptor::Map { .. } => {
                w.line(format!("self.{f}().copy_to(&dest.{f}());"));
            }
            FieldDescriptor::Oneof { .. } => {
                w.line(format!("self.copy_{f}(dest);"));
            }
        }
    }
    w.close("}");
}

fn emit_wire_methods(w: &mut CodeWriter, schema: &RecordSchema) {
    let name = schema.name;
    let orig = orig_type(name);
    let wire = wire_path(schema.wire_type_name);

    w.blank();
    w.doc(&format!("Builds a standalone {name} from its wire representation."));
    w.open(format!("pub fn from_proto(proto: {wire}) -> Result<Self> {{"));
    w.line(format!(
        "Ok(Self::from_orig(Handle::Shared(shared({orig}::from_proto(proto)?))))"
    ));
    w.close("}");
    w.blank();
    w.doc(&format!("Converts this {name} into its wire representation."));
    w.open(format!("pub fn to_proto(&self) -> {wire} {{"));
    w.line(format!("self.orig.read({orig}::to_proto)"));
    w.close("}");
    w.blank();
    w.doc(&format!(
        "Returns the number of bytes the wire encoding of this {name} occupies."
    ));
    w.open("pub fn wire_size(&self) -> usize {");
    w.line(format!("self.orig.read({orig}::encoded_len)"));
    w.close("}");
}

fn emit_trait_impls(w: &mut CodeWriter, name: &str) {
    w.open(format!("impl Default for {name} {{"));
    w.open("fn default() -> Self {");
    w.line("Self::new()");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl Clone for {name} {{"));
    w.open("fn clone(&self) -> Self {");
    w.line("let copy = Self::new();");
    w.line("self.copy_to(&copy);");
    w.line("copy");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl PartialEq for {name} {{"));
    w.open("fn eq(&self, other: &Self) -> bool {");
    w.line("self.orig.read(|a| other.orig.read(|b| a == b))");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl fmt::Debug for {name} {{"));
    w.open("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
    w.line(format!(
        "self.orig.read(|o| f.debug_tuple(\"{name}\").field(o).finish())"
    ));
    w.close("}");
    w.close("}");
    w.blank();
}

fn emit_orig_wire(w: &mut CodeWriter, schema: &RecordSchema) {
    let orig = orig_type(schema.name);
    let wire = wire_path(schema.wire_type_name);

    w.open(format!("impl {orig} {{"));
    w.open(format!("pub(crate) fn from_proto(proto: {wire}) -> Result<Self> {{"));
    w.open("Ok(Self {");
    for field in &schema.fields {
        w.line(format!("{}: {},", field.name(), fields::from_proto_expr(field)));
    }
    w.close("})");
    w.close("}");
    w.blank();

    w.open(format!("pub(crate) fn to_proto(&self) -> {wire} {{"));
    w.open(format!("{wire} {{"));
    for field in &schema.fields {
        w.line(format!("{}: {},", field.wire_name(), fields::to_proto_expr(field)));
    }
    w.close("}");
    w.close("}");
    w.blank();

    w.open("pub(crate) fn encoded_len(&self) -> usize {");
    w.line("let mut len = 0;");
    for field in &schema.fields {
        w.line(format!("len += {};", fields::encoded_len_expr(field)));
    }
    w.line("len");
    w.close("}");
    w.close("}");
    w.blank();
}

fn emit_oneof_types(
    w: &mut CodeWriter,
    owner: &str,
    field: &str,
    wire_type_name: &str,
    type_name: &str,
    variants: &[OneofVariant],
) {
    let orig = orig_type(type_name);
    let wire = wire_path(wire_type_name);

    w.doc(&format!("Value of [`{owner}::{field}`]."));
    w.line("#[derive(Debug, PartialEq)]");
    w.open(format!("pub enum {type_name} {{"));
    for variant in variants {
        w.line(format!("{}({}),", variant.name, variant.schema));
    }
    w.close("}");
    w.blank();

    w.doc(&format!("Names the variant held by [`{owner}::{field}`]."));
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.open(format!("pub enum {type_name}Type {{"));
    w.line("None,");
    for variant in variants {
        w.line(format!("{},", variant.name));
    }
    w.close("}");
    w.blank();

    w.line("#[derive(Debug, PartialEq)]");
    w.open(format!("pub(crate) enum {orig} {{"));
    for variant in variants {
        w.line(format!("{}(Shared<{}>),", variant.name, orig_type(variant.schema)));
    }
    w.close("}");
    w.blank();

    w.open(format!("impl {orig} {{"));
    w.open(format!("pub(crate) fn from_proto(proto: {wire}) -> Result<Self> {{"));
    w.open("Ok(match proto {");
    for variant in variants {
        w.line(format!(
            "{wire}::{}(v) => Self::{}(shared({}::from_proto(v)?)),",
            variant.wire_name,
            variant.name,
            orig_type(variant.schema)
        ));
    }
    w.close("})");
    w.close("}");
    w.blank();

    w.open(format!("pub(crate) fn to_proto(&self) -> {wire} {{"));
    w.open("match self {");
    for variant in variants {
        w.line(format!(
            "Self::{}(orig) => {wire}::{}(orig.borrow().to_proto()),",
            variant.name, variant.wire_name
        ));
    }
    w.close("}");
    w.close("}");
    w.blank();

    w.open("pub(crate) fn encoded_len(&self) -> usize {");
    w.open("match self {");
    for variant in variants {
        w.line(format!(
            "Self::{}(orig) => message_encoded_len({}, orig.borrow().encoded_len()),",
            variant.name, variant.tag
        ));
    }
    w.close("}");
    w.close("}");
    w.close("}");
    w.blank();
}
