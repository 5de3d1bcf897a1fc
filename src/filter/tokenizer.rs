//! Whitespace token source over in-memory text

use crate::error::Result;
use crate::types::{Token, TokenStream};

/// Minimal whitespace tokenizer implementing the host token contract.
///
/// Splits on Unicode whitespace and reports character offsets. This is the
/// reference upstream source used by tests, doc examples, and the
/// integration suite; real pipelines substitute their own `TokenStream`.
pub struct WhitespaceTokenStream {
    chars: Vec<char>,
    pos: usize,
}

impl WhitespaceTokenStream {
    /// Tokenize the given text from its start
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }
}

impl TokenStream for WhitespaceTokenStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.chars.len() {
            return Ok(None);
        }

        let start = self.pos;
        while self.pos < self.chars.len() && !self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        Ok(Some(Token::new(text, start, self.pos)))
    }

    fn reset(&mut self) -> Result<()> {
        self.pos = 0;
        Ok(())
    }
}
