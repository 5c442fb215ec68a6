use crate::types::{Span, Spanned};

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::{Files, SimpleFile};
use codespan_reporting::term;
use termcolor::WriteColor;
use thiserror::Error;

use std::io;

pub type ErrorS = Spanned<Error>;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("NameError: {0}")]
    NameError(NameError),
    #[error("SyntaxError: {0}")]
    SyntaxError(SyntaxError),
}

impl AsDiagnostic for Error {
    fn as_diagnostic(&self, span: &Span) -> Diagnostic<()> {
        match self {
            Error::NameError(e) => e.as_diagnostic(span),
            Error::SyntaxError(e) => e.as_diagnostic(span),
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum NameError {
    /// The name is already bound by the generated program or is a keyword of the
    /// target language.
    #[error("name {name:?} is reserved in the generated program")]
    Reserved { name: String },
}

impl AsDiagnostic for NameError {
    fn as_diagnostic(&self, span: &Span) -> Diagnostic<()> {
        match self {
            NameError::Reserved { .. } => Diagnostic::error()
                .with_code("NameError")
                .with_message(self.to_string())
                .with_labels(vec![Label::primary((), span.clone())])
                .with_notes(vec!["rename it to something else".to_string()]),
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SyntaxError {
    #[error("extraneous input: {token:?}")]
    ExtraToken { token: String },
    #[error("invalid input")]
    InvalidToken,
    #[error("invalid loop variable {name:?}")]
    InvalidLoopVar { name: String },
    #[error("unexpected input: {token:?}")]
    UnexpectedInput { token: String },
    #[error("unexpected end of file")]
    UnrecognizedEOF { expected: Vec<String> },
    #[error("unexpected {token:?}")]
    UnrecognizedToken { token: String, expected: Vec<String> },
}

impl AsDiagnostic for SyntaxError {
    fn as_diagnostic(&self, span: &Span) -> Diagnostic<()> {
        let diagnostic = Diagnostic::error()
            .with_code("SyntaxError")
            .with_message(self.to_string())
            .with_labels(vec![Label::primary((), span.clone())]);
        match self {
            SyntaxError::ExtraToken { .. }
            | SyntaxError::InvalidToken
            | SyntaxError::UnexpectedInput { .. } => diagnostic,
            SyntaxError::InvalidLoopVar { .. } => diagnostic
                .with_notes(vec!["loop variables are single letters from i to z".to_string()]),
            SyntaxError::UnrecognizedEOF { expected }
            | SyntaxError::UnrecognizedToken { expected, .. } => {
                diagnostic.with_notes(vec![format!("expected: {}", one_of(expected))])
            }
        }
    }
}

trait AsDiagnostic {
    fn as_diagnostic(&self, span: &Span) -> Diagnostic<()>;
}

fn one_of(tokens: &[String]) -> String {
    let (token_last, tokens) = match tokens.split_last() {
        Some((token_last, &[])) => return token_last.to_string(),
        Some((token_last, tokens)) => (token_last, tokens),
        None => return "nothing".to_string(),
    };

    let mut output = String::new();
    for token in tokens {
        output.push_str(token);
        output.push_str(", ");
    }
    output.push_str("or ");
    output.push_str(token_last);
    output
}

/// Returns the 1-based line and column of a byte offset into `source`.
pub fn location(source: &str, offset: usize) -> (usize, usize) {
    let file = SimpleFile::new("", source);
    match file.location((), offset.min(source.len())) {
        Ok(location) => (location.line_number, location.column_number),
        Err(_) => (1, 1),
    }
}

pub fn report_err(
    writer: &mut dyn WriteColor,
    name: &str,
    source: &str,
    errors: &[ErrorS],
) -> io::Result<()> {
    let file = SimpleFile::new(name, source);
    let config = term::Config::default();
    for (e, span) in errors {
        let diagnostic = e.as_diagnostic(span);
        term::emit(writer, &config, &file, &diagnostic).map_err(|err| match err {
            codespan_reporting::files::Error::Io(err) => err,
            err => io::Error::new(io::ErrorKind::Other, err.to_string()),
        })?;
    }
    Ok(())
}
