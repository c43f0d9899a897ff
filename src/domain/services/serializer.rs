//! JSON Serializer
//!
//! Renders a document with a configurable indentation width. Member order is
//! the order seen at parse time and number literals keep their original text.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::domain::entities::DEFAULT_INDENT;

/// Output layout for a re-serialized document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces per nesting level; 0 still breaks lines
    pub indent: usize,
    /// Append a line break after the closing bracket
    pub trailing_newline: bool,
    /// Break lines with `\r\n` instead of `\n`
    pub crlf: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            trailing_newline: false,
            crlf: false,
        }
    }
}

impl SerializeOptions {
    pub fn new(indent: usize) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }

    /// Keep the line ending and trailing newline conventions of the file
    /// being rewritten. The first line break decides the line ending.
    pub fn matching(original: &str, indent: usize) -> Self {
        let crlf = original
            .find('\n')
            .is_some_and(|i| original[..i].ends_with('\r'));
        Self {
            indent,
            trailing_newline: original.ends_with('\n'),
            crlf,
        }
    }
}

/// Serialize `document` using `options`.
pub fn to_json_string(document: &Value, options: &SerializeOptions) -> serde_json::Result<String> {
    let indent = " ".repeat(options.indent);
    let mut buf = Vec::with_capacity(128);
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    document.serialize(&mut serializer)?;

    if options.trailing_newline {
        buf.push(b'\n');
    }

    let text = String::from_utf8(buf).map_err(serde::ser::Error::custom)?;
    // Raw line breaks only appear between tokens; string contents are escaped
    if options.crlf {
        return Ok(text.replace('\n', "\r\n"));
    }
    Ok(text)
}
