/// Converts a CamelCase type name into snake_case.
pub(crate) fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub(crate) fn orig_type(name: &str) -> String {
    format!("{name}Orig")
}

pub(crate) fn slice_type(element: &str) -> String {
    format!("{element}Slice")
}

/// Path of a wire type given relative to the proto module.
pub(crate) fn wire_path(wire_type_name: &str) -> String {
    format!("crate::proto::{wire_type_name}")
}
