//! Whitespace passes over the finished buffer: indent assignment from
//! bracket nesting, blank-line management around block boundaries, and
//! final rendering.

use crate::line::Line;
use crate::writer::EmitWriter;

fn opens_block(c: char) -> bool {
    matches!(c, '(' | '{' | '[')
}

fn closes_block(c: char) -> bool {
    matches!(c, ')' | '}' | ']')
}

impl EmitWriter {
    /// Assign every line's indent from a running bracket-nesting counter.
    ///
    /// A line whose first non-empty token opens with a closing bracket
    /// dedents itself; a line whose last non-empty token ends with an
    /// opening bracket indents what follows. Blank lines take the counter
    /// as-is.
    pub fn reindent_all(&mut self) {
        let unit = self.options.indent;
        let mut indent: usize = 0;
        for line in &mut self.lines {
            let first = line.first_nonempty().and_then(|t| t.text.chars().next());
            let last = line.last_nonempty().and_then(|t| t.text.chars().last());
            if let Some(c) = first {
                if closes_block(c) {
                    indent = indent.saturating_sub(unit);
                }
            }
            line.indent = indent;
            if let Some(c) = last {
                if opens_block(c) {
                    indent += unit;
                }
            }
        }
    }

    /// Blank-line management: drop stray blanks, then set comments and
    /// block boundaries off with vertical whitespace.
    ///
    /// The scan runs backward over the live vector, highest index first,
    /// re-reading lengths each iteration, so an insertion only shifts
    /// positions that were already processed. One rule fires per position.
    pub fn respace_all(&mut self) {
        self.reindent_all();

        if self.lines.len() < 3 {
            return;
        }
        let mut inserted = 0usize;
        let mut removed = 0usize;
        let mut i = self.lines.len() - 3;
        loop {
            if self.lines[i].is_blank() {
                self.lines.remove(i);
                removed += 1;
            } else if self.lines[i + 1].is_comment() && !self.lines[i].is_comment() {
                // before a comment
                self.lines.insert(i + 1, Line::new());
                inserted += 1;
            } else if self.lines[i].indent == self.lines[i + 1].indent
                && self.lines[i + 1].indent < self.lines[i + 2].indent
                && !self.lines[i].is_comment()
            {
                // start of indented block
                self.lines.insert(i + 1, Line::new());
                inserted += 1;
            } else if self.lines[i].indent > self.lines[i + 1].indent
                && self.lines[i + 1].indent == self.lines[i + 2].indent
                && !self.lines[i + 2].is_blank()
            {
                // end of indented block
                self.lines.insert(i + 2, Line::new());
                inserted += 1;
            }

            if i == 0 {
                break;
            }
            i -= 1;
        }
        tracing::trace!(inserted, removed, lines = self.lines.len(), "respace pass");
    }

    /// Finalize layout and join the buffer into output text.
    pub fn render(&mut self) -> String {
        if self.options.indent > 0 {
            self.respace_all();
        }
        let unit = self.options.indent;
        let mut out = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 && unit > 0 {
                out.push('\n');
            }
            line.render_into(unit, &mut out);
        }
        out
    }
}
