//! Byte offset to line/column conversion.

use std::fmt;

use serde::Serialize;

use crate::error::PositionError;

/// Zero-based line and column. Columns count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineCol {
    pub line: usize,
    pub column: usize,
}

impl LineCol {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Compute the line and column of byte offset `position` in `text`.
///
/// `position == text.len()` is valid and names the end of input.
pub fn line_info_at(text: &str, position: usize) -> Result<LineCol, PositionError> {
    if position > text.len() {
        return Err(PositionError::OutOfBounds {
            position,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(PositionError::NotCharBoundary { position });
    }

    let before = &text[..position];
    let line = before.bytes().filter(|&b| b == b'\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count();

    Ok(LineCol { line, column })
}
