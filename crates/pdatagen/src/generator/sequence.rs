//! Emits the sequence view for an element schema.

use crate::generator::fields::sequence_storage_type;
use crate::generator::naming::{orig_type, slice_type};
use crate::generator::writer::CodeWriter;
use crate::schema::SequenceStorage;

pub(crate) fn emit_slice(w: &mut CodeWriter, element: &str, storage: SequenceStorage) {
    let slice = slice_type(element);
    let orig = orig_type(element);
    let buffer = sequence_storage_type(element, storage);

    let aliasing = match storage {
        SequenceStorage::OwnedPointers => format!(
            "Elements returned by [`{slice}::at`] alias the sequence and stay valid after it shrinks."
        ),
        SequenceStorage::OwnedValues => format!(
            "Elements are stored inline. A view returned by [`{slice}::at`] refers to a\nposition, so using it after [`{slice}::resize`] or [`{slice}::retain`] removed\nthat position panics."
        ),
    };
    w.doc(&format!(
        "{slice} is an ordered sequence of [`{element}`] values.\n\n{aliasing}"
    ));
    w.open(format!("pub struct {slice} {{"));
    w.line(format!("orig: {buffer},"));
    w.close("}");
    w.blank();

    w.open(format!("impl {slice} {{"));
    w.open(format!("pub(crate) fn from_orig(orig: {buffer}) -> Self {{"));
    w.line("Self { orig }");
    w.close("}");
    w.blank();
    w.doc(&format!("Creates a new empty {slice}."));
    w.open("pub fn new() -> Self {");
    w.line("Self::from_orig(shared(Vec::new()))");
    w.close("}");
    w.blank();
    w.open("pub fn len(&self) -> usize {");
    w.line("self.orig.borrow().len()");
    w.close("}");
    w.blank();
    w.open("pub fn is_empty(&self) -> bool {");
    w.line("self.orig.borrow().is_empty()");
    w.close("}");
    w.blank();

    w.doc(&format!(
        "Returns the element at `index`.\n\n# Panics\n\nPanics if `index` is not less than [`{slice}::len`]."
    ));
    w.open(format!("pub fn at(&self, index: usize) -> {element} {{"));
    w.line("let len = self.len();");
    w.line(format!(
        "assert!(index < len, \"{slice} index {{index}} out of range for length {{len}}\");"
    ));
    match storage {
        SequenceStorage::OwnedPointers => {
            w.line(format!(
                "{element}::from_orig(Handle::Shared(Rc::clone(&self.orig.borrow()[index])))"
            ));
        }
        SequenceStorage::OwnedValues => {
            w.open(format!("{element}::from_orig(Handle::Element {{"));
            w.line("slice: Rc::clone(&self.orig),");
            w.line("index,");
            w.close("})");
        }
    }
    w.close("}");
    w.blank();

    w.doc("Iterates over views of every element in order.");
    w.open(format!(
        "pub fn iter(&self) -> impl Iterator<Item = {element}> + '_ {{"
    ));
    w.line("(0..self.len()).map(move |i| self.at(i))");
    w.close("}");
    w.blank();

    w.doc(match storage {
        SequenceStorage::OwnedPointers => {
            "Truncates to `new_len` elements, or extends with empty elements.\n\nSurviving elements keep their identity."
        }
        SequenceStorage::OwnedValues => {
            "Truncates to `new_len` elements, or extends with empty elements.\n\nViews of truncated positions become stale and panic when used."
        }
    });
    w.open("pub fn resize(&self, new_len: usize) {");
    w.line("self.orig.borrow_mut().resize_with(new_len, Default::default);");
    w.close("}");
    w.blank();

    w.doc("Appends an empty element and returns a view of it.");
    w.open(format!("pub fn append_empty(&self) -> {element} {{"));
    match storage {
        SequenceStorage::OwnedPointers => {
            w.line(format!("let orig = shared({orig}::default());"));
            w.line("self.orig.borrow_mut().push(Rc::clone(&orig));");
            w.line(format!("{element}::from_orig(Handle::Shared(orig))"));
        }
        SequenceStorage::OwnedValues => {
            w.line(format!("self.orig.borrow_mut().push({orig}::default());"));
            w.line("self.at(self.len() - 1)");
        }
    }
    w.close("}");
    w.blank();

    w.doc("Appends a deep copy of `element`.");
    w.open(format!("pub fn append(&self, element: &{element}) {{"));
    w.line("element.copy_to(&self.append_empty());");
    w.close("}");
    w.blank();

    w.doc(match storage {
        SequenceStorage::OwnedPointers => {
            "Keeps only the elements for which `keep` returns true, preserving order."
        }
        SequenceStorage::OwnedValues => {
            "Keeps only the elements for which `keep` returns true, preserving order.\n\nKept elements move to lower positions, so earlier views may refer to a\ndifferent element or become stale."
        }
    });
    w.open(format!(
        "pub fn retain(&self, mut keep: impl FnMut(&{element}) -> bool) {{"
    ));
    match storage {
        SequenceStorage::OwnedPointers => {
            w.line("let elements = self.orig.borrow().clone();");
            w.line("let kept: Vec<_> = elements");
            w.line("    .into_iter()");
            w.line(format!(
                "    .filter(|orig| keep(&{element}::from_orig(Handle::Shared(Rc::clone(orig)))))"
            ));
            w.line("    .collect();");
            w.line("*self.orig.borrow_mut() = kept;");
        }
        SequenceStorage::OwnedValues => {
            w.line("let flags: Vec<bool> = self.iter().map(|element| keep(&element)).collect();");
            w.line("let mut flags = flags.into_iter();");
            w.line("self.orig.borrow_mut().retain(|_| flags.next().unwrap_or(true));");
        }
    }
    w.close("}");
    w.blank();

    w.doc(&format!(
        "Overwrites `dest` with a deep copy of this {slice}, reusing its existing elements."
    ));
    w.open(format!("pub fn copy_to(&self, dest: &{slice}) {{"));
    w.open("if Rc::ptr_eq(&self.orig, &dest.orig) {");
    w.line("return;");
    w.close("}");
    w.line("dest.resize(self.len());");
    w.open("for (src, dst) in self.iter().zip(dest.iter()) {");
    w.line("src.copy_to(&dst);");
    w.close("}");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl Default for {slice} {{"));
    w.open("fn default() -> Self {");
    w.line("Self::new()");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl Clone for {slice} {{"));
    w.open("fn clone(&self) -> Self {");
    w.line("let copy = Self::new();");
    w.line("self.copy_to(&copy);");
    w.line("copy");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl PartialEq for {slice} {{"));
    w.open("fn eq(&self, other: &Self) -> bool {");
    w.line("*self.orig.borrow() == *other.orig.borrow()");
    w.close("}");
    w.close("}");
    w.blank();

    w.open(format!("impl fmt::Debug for {slice} {{"));
    w.open("fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {");
    w.line("f.debug_list().entries(self.iter()).finish()");
    w.close("}");
    w.close("}");
    w.blank();
}
