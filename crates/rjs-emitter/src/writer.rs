//! The output buffer: an ordered sequence of [`Line`]s with the write
//! cursor pinned to the last line.
//!
//! One `EmitWriter` exists per compilation unit. The walker that owns it
//! mutates it strictly synchronously; the closure-taking operations
//! (`capture`, `wrap`, `compact`) borrow the writer mutably for the whole
//! action, so re-entry from anywhere else cannot compile.

use std::time::SystemTime;

use rjs_common::SourceSpan;
use rustc_hash::FxHashMap;

use crate::line::{Line, Token};

/// Layout configuration for an [`EmitWriter`].
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Column budget consulted by the wrap and compact heuristics.
    pub width: usize,
    /// Spaces per indent level. Zero disables respacing and vertical
    /// whitespace entirely.
    pub indent: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            width: 80,
            indent: 2,
        }
    }
}

impl EmitOptions {
    /// Single-line output: no indentation, no blank-line management.
    pub fn compact() -> Self {
        EmitOptions {
            width: 80,
            indent: 0,
        }
    }
}

/// A stable snapshot of a buffer position, delimiting the start of a
/// sub-range for `insert_at`, `capture`, `wrap`, and `compact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub line: usize,
    pub token: usize,
}

/// Buffers emitted tokens line by line until the layout passes run.
pub struct EmitWriter {
    pub(crate) lines: Vec<Line>,
    pub(crate) options: EmitOptions,
    source: Option<SourceSpan>,
    pub(crate) timestamps: FxHashMap<String, SystemTime>,
}

impl EmitWriter {
    pub fn new(options: EmitOptions) -> Self {
        EmitWriter {
            lines: vec![Line::new()],
            options,
            source: None,
            timestamps: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &EmitOptions {
        &self.options
    }

    /// Source context stamped onto every token created until the next call.
    /// The walker updates this as it moves between nodes.
    pub fn set_source(&mut self, span: Option<SourceSpan>) {
        self.source = span;
    }

    pub(crate) fn token(&self, text: &str) -> Token {
        Token::new(text, self.source)
    }

    pub(crate) fn current(&mut self) -> &mut Line {
        // `lines` is never emptied: `new` seeds it and every removal below
        // keeps at least the line a mark points into.
        self.lines
            .last_mut()
            .expect("buffer always holds at least one line")
    }

    /// Append `text` to the current line. Embedded newlines split the
    /// text: each portion after a newline becomes its own line, and a
    /// trailing newline leaves a fresh empty line open as current.
    pub fn write(&mut self, text: &str) {
        if !text.contains('\n') {
            let token = self.token(text);
            self.current().tokens.push(token);
            return;
        }

        let mut parts: Vec<&str> = text.split('\n').collect();
        let ends_with_newline = text.ends_with('\n');
        if ends_with_newline {
            parts.pop();
        }
        let first = parts.first().copied().unwrap_or("");
        let token = self.token(first);
        self.current().tokens.push(token);
        for part in parts.iter().skip(1) {
            let token = self.token(part);
            self.lines.push(Line::with_token(token));
        }
        if ends_with_newline {
            self.lines.push(Line::new());
        }
    }

    /// Append, then unconditionally start a new current line. Used for
    /// statement terminators.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.lines.push(Line::new());
    }

    /// Start a new current line, then append `text` to it. Used when a
    /// construct must open at column zero of a fresh line, e.g. a closing
    /// keyword.
    pub fn start_line(&mut self, text: &str) {
        if !text.contains('\n') {
            let token = self.token(text);
            self.lines.push(Line::with_token(token));
        } else {
            self.lines.push(Line::new());
            self.write(text);
        }
    }

    /// The current write position.
    pub fn position(&self) -> Mark {
        Mark {
            line: self.lines.len() - 1,
            token: self.lines.last().map_or(0, |line| line.tokens.len()),
        }
    }

    /// Insert text at a previously captured mark: a whole new line before
    /// `mark.line` when the mark sits at token zero, otherwise a token
    /// inside the marked line. Used for forward-patching, e.g. hoisted
    /// variable declarations discovered after their use site was emitted.
    pub fn insert_at(&mut self, mark: Mark, text: &str) {
        assert!(
            mark.line < self.lines.len(),
            "insert_at: mark line {} out of range ({} lines)",
            mark.line,
            self.lines.len()
        );
        if mark.token == 0 {
            let token = self.token(text.strip_suffix('\n').unwrap_or(text));
            self.lines.insert(mark.line, Line::with_token(token));
        } else {
            let token = self.token(text);
            let line = &mut self.lines[mark.line];
            assert!(
                mark.token <= line.tokens.len(),
                "insert_at: mark token {} out of range ({} tokens)",
                mark.token,
                line.tokens.len()
            );
            line.tokens.insert(mark.token, token);
        }
    }

    /// Run `action`, then remove everything it wrote and return it as
    /// text. Lines are joined with the mode's line separator. Used to
    /// reuse an expression's rendering somewhere other than the stream
    /// position where it was produced.
    pub fn capture(&mut self, action: impl FnOnce(&mut Self)) -> String {
        let mark = self.position();
        action(self);

        let mut captured: Vec<Line> = self.lines.split_off(mark.line + 1);
        let tail = self.lines[mark.line].tokens.split_off(mark.token);
        if !tail.is_empty() || captured.is_empty() {
            let mut lead = Line::new();
            lead.tokens = tail;
            captured.insert(0, lead);
        }

        let separator = if self.options.indent > 0 { "\n" } else { "" };
        let rendered: Vec<String> = captured.iter().map(Line::joined).collect();
        rendered.join(separator)
    }

    /// The timestamps captured for each source file seen during map
    /// encoding.
    pub fn timestamps(&self) -> &FxHashMap<String, SystemTime> {
        &self.timestamps
    }
}
