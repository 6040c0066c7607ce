//! Key template tokenizer
//!
//! ## Architecture
//!
//! ```text
//! Template Text
//!     ↓
//! Lexer (logos) → Lexemes: `{`, `}`, letter/digit runs, single symbols
//!     ↓
//! Tokenizer → Tokens with TemplateToken + TextRange
//! ```
//!
//! ## Grammar
//!
//! ```text
//! template     ::= part*
//! part         ::= constant | delimiter | primary-delimiter | property | repeating-property
//! constant     ::= (letter | digit)+
//! delimiter    ::= any-other-single-character
//! property     ::= '{' name (':' format)? '}'
//! repeating    ::= '{' name '...' separator-char (':' format)? '}'
//! ```

mod error;
mod lexer;
mod token;
mod tokenizer;

pub use error::TokenizeError;
pub use lexer::{Lexeme, LexemeKind, Lexer, PropertyBody, lex, lexes_as_symbol};
pub use token::{TemplateToken, Token};
pub use tokenizer::tokenize;
