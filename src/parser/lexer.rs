//! Logos-based lexer for key templates
//!
//! Splits a template into raw lexemes: braces, letter/digit runs and single
//! symbol characters. Property bodies are not lexed; the tokenizer asks the
//! lexer for the raw text up to the closing brace instead.

use logos::Logos;

use super::error::TokenizeError;
use crate::base::{TextRange, range_at, text_size};

/// A raw lexeme with its kind, text, and byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Lexeme<'_> {
    /// Byte range of this lexeme in the template
    pub fn range(&self) -> TextRange {
        range_at(self.offset, self.text.len())
    }
}

/// Raw text of a property body, without the surrounding braces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBody<'a> {
    pub text: &'a str,
    /// Byte offset of the first body character
    pub offset: usize,
    /// Range of the whole property including both braces
    pub range: TextRange,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LexemeKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LexemeKind::lexer(input),
        }
    }

    /// Consume a property body after an opening `{` has been returned.
    ///
    /// Stops at the first `}`. A `{` before it, or running out of input,
    /// is an error.
    pub fn property_body(&mut self) -> Result<PropertyBody<'a>, TokenizeError> {
        let open = self.inner.span();
        let remainder = self.inner.remainder();

        match remainder.char_indices().find(|(_, c)| matches!(c, '{' | '}')) {
            Some((idx, '}')) => {
                self.inner.bump(idx + 1);
                Ok(PropertyBody {
                    text: &remainder[..idx],
                    offset: open.end,
                    range: range_at(open.start, idx + 2),
                })
            }
            Some((idx, _)) => Err(TokenizeError::NestedPropertyOpen {
                range: range_at(open.end + idx, 1),
            }),
            None => Err(TokenizeError::UnterminatedProperty {
                start: text_size(open.start),
            }),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = self.inner.span().start;

        // Every character class is covered; treat anything logos rejects as a symbol.
        let kind = token.unwrap_or(LexemeKind::Symbol);

        Some(Lexeme { kind, text, offset })
    }
}

/// Whether `c` on its own lexes as exactly one [`LexemeKind::Symbol`]
pub fn lexes_as_symbol(c: char) -> bool {
    let mut buf = [0u8; 4];
    let mut lexer = LexemeKind::lexer(c.encode_utf8(&mut buf));
    matches!((lexer.next(), lexer.next()), (Some(Ok(LexemeKind::Symbol)), None))
}

/// Lex an entire template into a Vec
pub fn lex(input: &str) -> Vec<Lexeme<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum for template lexemes
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    /// Letter/digit run, read greedily
    #[regex(r"[\p{L}\p{N}]+")]
    Word,

    /// Any other single character
    #[regex(r"[^\{\}\p{L}\p{N}]")]
    Symbol,
}
