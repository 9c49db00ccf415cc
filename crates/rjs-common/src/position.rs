//! Byte-offset to line/column resolution.

use memchr::{memchr_iter, memrchr};

/// A 0-based line/column pair, both counted in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Resolve a byte offset into a line/column pair by scanning the newlines
/// that precede it. Offsets past the end of `text` clamp to the end.
pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = offset.min(text.len());
    let prefix = &text.as_bytes()[..offset];
    let line = memchr_iter(b'\n', prefix).count() as u32;
    let column = match memrchr(b'\n', prefix) {
        Some(newline) => (offset - newline - 1) as u32,
        None => offset as u32,
    };
    Position { line, column }
}
