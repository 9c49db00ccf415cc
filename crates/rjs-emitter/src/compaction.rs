//! Statement layout heuristics: brace-wrapping for statement bodies and
//! single-line compaction of short multi-line expressions.

use crate::line::{Line, Token};
use crate::writer::EmitWriter;

/// Compacted expressions must leave this much slack under the width budget.
const COMPACT_SLACK: usize = 10;

impl EmitWriter {
    /// Emit `action`'s output inside braces.
    ///
    /// A body that stays on one line and fits the width budget together
    /// with the line that opened the brace collapses onto that line as
    /// `{ body }`. Everything else keeps the block form, with the closing
    /// brace opening its own line.
    pub fn wrap(&mut self, action: impl FnOnce(&mut Self)) {
        self.write_line("{");
        let mark = self.position();
        action(self);

        let keep_block = self.lines.len() > mark.line + 1 || {
            let last = self.lines.len() - 1;
            self.lines[mark.line - 1].text_len() + self.lines[last].text_len()
                >= self.options.width
        };
        if keep_block {
            self.start_line("}");
        } else {
            // The body is the single line the action produced; fold it back
            // onto the line that ends with the opening brace.
            let body = self.lines.pop().unwrap_or_default();
            let close = self.token("}");
            let line = self.current();
            line.tokens.push(Token::new(" ", None));
            line.tokens.extend(body.tokens);
            line.tokens.push(Token::new(" ", None));
            line.tokens.push(close);
        }
    }

    /// Collapse a short multi-line expression onto a single line.
    ///
    /// Does nothing when the action stayed on one line; aborts when any
    /// produced line is a comment (comments cannot be joined) or when the
    /// joined width would crowd the budget.
    pub fn compact(&mut self, action: impl FnOnce(&mut Self)) {
        let mark = self.position();
        action(self);

        if self.lines.len() <= mark.line + 1 {
            return;
        }
        if self.lines[mark.line..].iter().any(Line::is_comment) {
            return;
        }

        let cost: usize = self.lines[mark.line..]
            .iter()
            .map(|line| line.text_len() + 1)
            .sum();
        if cost >= self.options.width.saturating_sub(COMPACT_SLACK) {
            return;
        }

        let tail = self.lines.split_off(mark.line);
        let count = tail.len();
        let mut joined = Line::new();
        for (index, line) in tail.into_iter().enumerate() {
            // No separator at the outer join points: nothing after an
            // opener like `[`, nothing before the closer.
            if index > 1 && index < count - 1 {
                joined.tokens.push(Token::new(" ", None));
            }
            joined.tokens.extend(line.tokens);
        }
        self.lines.push(joined);
    }
}
