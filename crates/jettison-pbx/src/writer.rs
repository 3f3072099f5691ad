//! Serializer for writing OpenStep property-list documents.
//!
//! Output is deterministic: the `// !$*UTF8*$!` header, tab indentation,
//! one dictionary entry or array element per line, dictionary keys in
//! stored order, and strings quoted only when they contain characters
//! outside the unquoted set.

use std::fmt::Write;

use crate::parser::is_unquoted_char;
use crate::value::Value;

/// Serialize a value as a complete pbxproj document.
pub fn to_string(value: &Value) -> String {
    let mut output = String::from("// !$*UTF8*$!\n");
    write_value(&mut output, value, 0);
    output.push('\n');
    output
}

/// Render a value as a compact single-line fragment.
///
/// Used for diagnostics; the multi-line [`to_string`] form is what goes to
/// disk.
pub fn to_fragment(value: &Value) -> String {
    match value {
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(to_fragment).collect();
            format!("({})", inner.join(", "))
        }
        Value::Dict(dict) => {
            let mut inner = String::new();
            for (key, v) in dict.iter() {
                write!(inner, "{} = {}; ", quote(key), to_fragment(v)).unwrap();
            }
            format!("{{{}}}", inner.trim_end())
        }
        Value::Data(bytes) => format!("<{}>", hex(bytes)),
    }
}

fn write_value(output: &mut String, value: &Value, indent: usize) {
    match value {
        Value::String(s) => output.push_str(&quote(s)),
        Value::Array(items) => {
            output.push_str("(\n");
            for item in items {
                push_indent(output, indent + 1);
                write_value(output, item, indent + 1);
                output.push_str(",\n");
            }
            push_indent(output, indent);
            output.push(')');
        }
        Value::Dict(dict) => {
            output.push_str("{\n");
            for (key, v) in dict.iter() {
                push_indent(output, indent + 1);
                output.push_str(&quote(key));
                output.push_str(" = ");
                write_value(output, v, indent + 1);
                output.push_str(";\n");
            }
            push_indent(output, indent);
            output.push('}');
        }
        Value::Data(bytes) => {
            output.push('<');
            output.push_str(&hex(bytes));
            output.push('>');
        }
    }
}

fn push_indent(output: &mut String, indent: usize) {
    for _ in 0..indent {
        output.push('\t');
    }
}

/// Quote a string if it contains anything outside the unquoted set.
/// Empty strings always need quotes.
fn quote(s: &str) -> String {
    if !s.is_empty() && s.chars().all(is_unquoted_char) {
        return s.to_string();
    }

    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(out, "{:02x}", byte).unwrap();
    }
    out
}
