pub mod ast;
pub mod dump;
pub mod lexer;
pub mod parser;

use hlogo_common::error::{Error, ErrorS, SyntaxError};
use lalrpop_util::ParseError;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Parses a whole source file. Parsing stops at the first error, which is
/// returned with the span it was found at.
pub fn parse(source: &str) -> Result<Program, ErrorS> {
    let lexer = Lexer::new(source);
    let parser = Parser::new();
    let program = parser.parse(lexer).map_err(|err| match err {
        ParseError::ExtraToken { token: (start, _, end) } => (
            Error::SyntaxError(SyntaxError::ExtraToken { token: source[start..end].to_string() }),
            start..end,
        ),
        ParseError::InvalidToken { location } => {
            (Error::SyntaxError(SyntaxError::InvalidToken), location..location)
        }
        ParseError::UnrecognizedEOF { location, expected } => {
            (Error::SyntaxError(SyntaxError::UnrecognizedEOF { expected }), location..location)
        }
        ParseError::UnrecognizedToken { token: (start, _, end), expected } => (
            Error::SyntaxError(SyntaxError::UnrecognizedToken {
                token: source[start..end].to_string(),
                expected,
            }),
            start..end,
        ),
        ParseError::User { error } => error,
    })?;
    log::debug!("parsed {} top-level items", program.items.len());
    Ok(program)
}
