//! Token and line building blocks of the output buffer.

use rjs_common::SourceSpan;

/// One immutable piece of output text, optionally back-referencing the
/// source location it was generated from. The span is read-only and is
/// consulted only when the source map is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Option<SourceSpan>,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Token {
            text: text.into(),
            span,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// An ordered run of tokens rendered as one output line.
///
/// `indent` is assigned by the indent pass and is meaningless before it
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub tokens: Vec<Token>,
    pub indent: usize,
}

impl Line {
    pub fn new() -> Self {
        Line::default()
    }

    pub fn with_token(token: Token) -> Self {
        Line {
            tokens: vec![token],
            indent: 0,
        }
    }

    /// A line with no non-empty tokens renders as nothing.
    pub fn is_blank(&self) -> bool {
        self.tokens.iter().all(Token::is_empty)
    }

    /// Comment lines begin with the `//` line-comment marker.
    pub fn is_comment(&self) -> bool {
        match self.first_nonempty() {
            Some(token) => token.text.starts_with("//"),
            None => false,
        }
    }

    pub(crate) fn first_nonempty(&self) -> Option<&Token> {
        self.tokens.iter().find(|token| !token.is_empty())
    }

    pub(crate) fn last_nonempty(&self) -> Option<&Token> {
        self.tokens.iter().rfind(|token| !token.is_empty())
    }

    /// Total rendered width, excluding indentation.
    pub fn text_len(&self) -> usize {
        self.tokens.iter().map(Token::len).sum()
    }

    /// Concatenated token text, no indentation.
    pub fn joined(&self) -> String {
        let mut out = String::with_capacity(self.text_len());
        for token in &self.tokens {
            out.push_str(&token.text);
        }
        out
    }

    /// Render the line into `out` with indentation. Switch labels back out
    /// one unit so `case`/`default` sit flush with the `switch` body brace.
    pub(crate) fn render_into(&self, indent_unit: usize, out: &mut String) {
        if self.is_blank() {
            return;
        }
        let mut indent = self.indent;
        if let Some(first) = self.tokens.first() {
            if first.text == "case " || first.text == "default:" {
                indent = indent.saturating_sub(indent_unit);
            }
        }
        for _ in 0..indent {
            out.push(' ');
        }
        for token in &self.tokens {
            out.push_str(&token.text);
        }
    }
}
