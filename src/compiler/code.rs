//! Text buffer for emitted C.
//!
//! The lowering functions build every fragment through `Code` so that the
//! placement of indentation and newlines lives in one place.

use std::fmt::{Display, Write};

/// One level of block indentation.
pub const INDENT_UNIT: &str = "  ";

/// Returns the indentation prefix for a block nested one level deeper.
pub fn nested(indent: &str) -> String {
    format!("{}{}", indent, INDENT_UNIT)
}

#[derive(Debug, Default)]
pub struct Code {
    buffer: String,
}

impl Code {
    pub fn new() -> Self {
        Code {
            buffer: String::new(),
        }
    }

    /// Appends `text` as is.
    pub fn push(&mut self, text: impl Display) -> &mut Self {
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{}", text);
        self
    }

    /// Appends `text` behind an indentation prefix, without a line break.
    pub fn indented(&mut self, indent: &str, text: impl Display) -> &mut Self {
        self.push(indent).push(text)
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Appends a brace-delimited block: ` {`, the body on its own lines, and
    /// the closing brace at `indent`.
    pub fn block(&mut self, indent: &str, body: &str) -> &mut Self {
        self.push(" {").newline().push(body).newline().indented(indent, "}")
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
