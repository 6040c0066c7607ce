//! Template tokenizer
//!
//! Single left-to-right scan over the lexemes produced by [`Lexer`].
//! Property bodies are split into name, optional repeating separator and
//! optional format here.

use smol_str::SmolStr;
use tracing::trace;

use super::error::TokenizeError;
use super::lexer::{LexemeKind, Lexer, PropertyBody, lexes_as_symbol};
use super::token::{TemplateToken, Token};
use crate::base::{Name, TextRange, range_at};

/// Marker that turns a property into a repeating property.
const REPEAT_MARKER: &str = "...";

/// Tokenize a key template.
///
/// `primary_separator` is the character splitting partition and sort key;
/// it may occur at most once outside property bodies.
pub fn tokenize(
    template: &str,
    primary_separator: Option<char>,
) -> Result<Vec<Token>, TokenizeError> {
    if template.is_empty() {
        return Err(TokenizeError::EmptyTemplate);
    }
    if let Some(separator) = primary_separator {
        if !lexes_as_symbol(separator) {
            return Err(TokenizeError::InvalidPrimarySeparator { separator });
        }
    }

    let mut lexer = Lexer::new(template);
    let mut tokens = Vec::new();
    let mut seen_primary = false;

    while let Some(lexeme) = lexer.next() {
        let token = match lexeme.kind {
            LexemeKind::Word => Token::new(
                TemplateToken::Constant(SmolStr::new(lexeme.text)),
                lexeme.range(),
            ),
            LexemeKind::LBrace => {
                let body = lexer.property_body()?;
                Token::new(property_token(body)?, body.range)
            }
            LexemeKind::RBrace | LexemeKind::Symbol => {
                let Some(c) = lexeme.text.chars().next() else {
                    continue;
                };
                let value = if Some(c) == primary_separator {
                    if seen_primary {
                        return Err(TokenizeError::DuplicatePrimarySeparator {
                            separator: c,
                            range: lexeme.range(),
                        });
                    }
                    seen_primary = true;
                    TemplateToken::PrimaryDelimiter(c)
                } else {
                    TemplateToken::Delimiter(c)
                };
                Token::new(value, lexeme.range())
            }
        };
        trace!(?token, "template token");
        tokens.push(token);
    }

    Ok(tokens)
}

fn property_token(body: PropertyBody<'_>) -> Result<TemplateToken, TokenizeError> {
    let text = body.text;
    let marker = text.find(REPEAT_MARKER);
    let colon = text.find(':');

    match marker {
        Some(idx) if colon.is_none_or(|c| idx < c) => repeating_property(body, idx),
        _ => {
            let (name, format) = match text.split_once(':') {
                Some((name, format)) => (name, Some(format)),
                None => (text, None),
            };
            let name = property_name(name, body.range)?;
            let format = property_format(&name, format, body)?;
            Ok(TemplateToken::Property { name, format })
        }
    }
}

fn repeating_property(
    body: PropertyBody<'_>,
    marker: usize,
) -> Result<TemplateToken, TokenizeError> {
    let name = property_name(&body.text[..marker], body.range)?;
    let rest = &body.text[marker + REPEAT_MARKER.len()..];

    let Some(separator) = rest.chars().next() else {
        return Err(TokenizeError::MissingRepeatingSeparator { name, range: body.range });
    };

    let after = &rest[separator.len_utf8()..];
    let format = if after.is_empty() {
        None
    } else if let Some(format) = after.strip_prefix(':') {
        property_format(&name, Some(format), body)?
    } else {
        let start = body.offset + marker + REPEAT_MARKER.len() + separator.len_utf8();
        return Err(TokenizeError::TrailingRepeatingText {
            name,
            range: range_at(start, after.len()),
        });
    };

    Ok(TemplateToken::RepeatingProperty { name, separator, format })
}

fn property_name(name: &str, range: TextRange) -> Result<Name, TokenizeError> {
    if name.is_empty() {
        return Err(TokenizeError::EmptyPropertyName { range });
    }
    Ok(Name::new(name))
}

fn property_format(
    name: &Name,
    format: Option<&str>,
    body: PropertyBody<'_>,
) -> Result<Option<SmolStr>, TokenizeError> {
    match format {
        Some("") => Err(TokenizeError::EmptyFormat {
            name: name.clone(),
            range: body.range,
        }),
        Some(format) => Ok(Some(SmolStr::new(format))),
        None => Ok(None),
    }
}
