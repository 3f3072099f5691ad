//! Parser for OpenStep property-list text using winnow.
//!
//! Handles the subset of the format Xcode writes into `project.pbxproj`
//! files: dictionaries (`{ key = value; }`), arrays (`( a, b, )`), quoted
//! and unquoted strings, data literals (`<deadbeef>`), and both comment
//! styles (`// ...` and `/* ... */`), including the `// !$*UTF8*$!` header.

use winnow::{
    error::{ContextError, ErrMode},
    prelude::*,
    token::{any, take_while},
};

use crate::error::{Error, Result};
use crate::value::{Dict, Value};

/// Parse a complete property-list document.
///
/// The document must contain exactly one top-level value (for pbxproj files
/// this is always a dictionary), surrounded by any amount of whitespace and
/// comments.
pub fn from_str(input: &str) -> Result<Value> {
    parse_document
        .parse(input)
        .map_err(|e| Error::Parse(e.to_string()))
}

/// Characters that may appear in an unquoted string token.
///
/// This is the set Xcode itself leaves unquoted; everything else gets
/// double quotes on output and must be quoted on input.
pub(crate) fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '/' | ':' | '.' | '-')
}

fn parse_document(input: &mut &str) -> PResult<Value> {
    skip_whitespace_and_comments(input)?;
    let value = parse_value(input)?;
    skip_whitespace_and_comments(input)?;
    Ok(value)
}

/// Skip whitespace and both comment styles.
fn skip_whitespace_and_comments(input: &mut &str) -> PResult<()> {
    loop {
        let before = *input;

        let _: &str = take_while(0.., |c: char| c.is_whitespace()).parse_next(input)?;

        if input.starts_with("//") {
            let _: &str = take_while(0.., |c: char| c != '\n').parse_next(input)?;
            continue;
        }

        if input.starts_with("/*") {
            let rest: &str = *input;
            match rest.find("*/") {
                Some(end) => *input = &rest[end + 2..],
                // Unterminated block comment
                None => return Err(ErrMode::Cut(ContextError::new())),
            }
            continue;
        }

        if *input == before {
            break;
        }
    }
    Ok(())
}

fn parse_value(input: &mut &str) -> PResult<Value> {
    if input.starts_with('{') {
        parse_dict(input).map(Value::Dict)
    } else if input.starts_with('(') {
        parse_array(input).map(Value::Array)
    } else if input.starts_with('<') {
        parse_data(input).map(Value::Data)
    } else {
        parse_string_token(input).map(Value::String)
    }
}

/// Parse a dictionary body: `{ key = value; ... }`.
fn parse_dict(input: &mut &str) -> PResult<Dict> {
    let _: char = '{'.parse_next(input)?;
    let mut dict = Dict::new();

    loop {
        skip_whitespace_and_comments(input)?;

        if input.starts_with('}') {
            let _: char = any.parse_next(input)?;
            break;
        }
        if input.is_empty() {
            return Err(ErrMode::Cut(ContextError::new()));
        }

        let key = parse_string_token(input)?;
        skip_whitespace_and_comments(input)?;
        let _: char = '='.parse_next(input)?;
        skip_whitespace_and_comments(input)?;
        let value = parse_value(input)?;
        skip_whitespace_and_comments(input)?;
        let _: char = ';'.parse_next(input)?;

        dict.insert(key, value);
    }

    Ok(dict)
}

/// Parse an array body: `( value, value, )`. A trailing comma is allowed,
/// as Xcode always writes one.
fn parse_array(input: &mut &str) -> PResult<Vec<Value>> {
    let _: char = '('.parse_next(input)?;
    let mut items = Vec::new();

    loop {
        skip_whitespace_and_comments(input)?;

        if input.starts_with(')') {
            let _: char = any.parse_next(input)?;
            break;
        }
        if input.is_empty() {
            return Err(ErrMode::Cut(ContextError::new()));
        }

        items.push(parse_value(input)?);
        skip_whitespace_and_comments(input)?;

        if input.starts_with(',') {
            let _: char = any.parse_next(input)?;
        } else if !input.starts_with(')') {
            // Missing separator before the next element
            return Err(ErrMode::Cut(ContextError::new()));
        }
    }

    Ok(items)
}

/// Parse a data literal: `<deadbeef>`. Whitespace between hex digits is
/// allowed; an odd digit count is an error.
fn parse_data(input: &mut &str) -> PResult<Vec<u8>> {
    let _: char = '<'.parse_next(input)?;
    let digits: &str =
        take_while(0.., |c: char| c.is_ascii_hexdigit() || c.is_whitespace()).parse_next(input)?;
    let _: char = '>'.parse_next(input)?;

    let hex: String = digits.chars().filter(|c| !c.is_whitespace()).collect();
    if hex.len() % 2 != 0 {
        return Err(ErrMode::Cut(ContextError::new()));
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(pair).map_err(|_| ErrMode::Cut(ContextError::new()))?;
        let byte = u8::from_str_radix(pair, 16).map_err(|_| ErrMode::Cut(ContextError::new()))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Parse a string, quoted or unquoted.
fn parse_string_token(input: &mut &str) -> PResult<String> {
    if input.starts_with('"') {
        parse_quoted_string(input)
    } else {
        parse_unquoted_string(input)
    }
}

fn parse_quoted_string(input: &mut &str) -> PResult<String> {
    let _: char = '"'.parse_next(input)?;
    let mut result = String::new();

    loop {
        if input.is_empty() {
            // Unterminated string
            return Err(ErrMode::Cut(ContextError::new()));
        }
        let c: char = any.parse_next(input)?;
        match c {
            '"' => break,
            '\\' => {
                let escaped: char = any.parse_next(input)?;
                match escaped {
                    'n' => result.push('\n'),
                    't' => result.push('\t'),
                    'r' => result.push('\r'),
                    other => result.push(other),
                }
            }
            other => result.push(other),
        }
    }

    Ok(result)
}

fn parse_unquoted_string(input: &mut &str) -> PResult<String> {
    let token: &str = take_while(1.., is_unquoted_char).parse_next(input)?;
    Ok(token.to_string())
}
