use hlogo_common::error::{Error, ErrorS, SyntaxError};
use logos::Logos;

use std::fmt;

pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
    pending: Option<(usize, Token, usize)>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source), pending: None }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<(usize, Token, usize), ErrorS>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return Some(Ok(token));
        }

        match self.inner.next()? {
            Token::Error => {
                let mut span = self.inner.span();

                // Merge adjacent invalid input into a single error.
                while let Some(token) = self.inner.next() {
                    let span_new = self.inner.span();
                    if span.end == span_new.start && token == Token::Error {
                        span.end = span_new.end;
                    } else {
                        self.pending = Some((span_new.start, token, span_new.end));
                        break;
                    }
                }

                Some(Err((
                    Error::SyntaxError(SyntaxError::UnexpectedInput {
                        token: self.inner.source()[span.start..span.end].to_string(),
                    }),
                    span,
                )))
            }
            token => {
                let span = self.inner.span();
                Some(Ok((span.start, token, span.end)))
            }
        }
    }
}

#[derive(Clone, Debug, Logos, PartialEq)]
pub enum Token {
    // Punctuation.
    #[token("(")]
    LtParen,
    #[token(")")]
    RtParen,
    #[token("{")]
    LtBrace,
    #[token("}")]
    RtBrace,
    #[token(",")]
    Comma,

    // Comparison and logical operators.
    #[token("!")]
    Bang,
    #[token("!=")]
    BangEqual,
    #[token("==")]
    EqualEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // Literals.
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*", lex_text)]
    Identifier(String),
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", lex_text)]
    Number(String),

    // Keywords.
    #[token("def")]
    Def,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("in")]
    In,
    #[token("range")]
    Range,
    #[token("zip")]
    Zip,

    // Turtle commands.
    #[token("FD")]
    Fd,
    #[token("BK")]
    Bk,
    #[token("LT")]
    Lt,
    #[token("RT")]
    Rt,
    #[token("WIDTH")]
    Width,
    #[token("PU")]
    Pu,
    #[token("PD")]
    Pd,

    #[regex(r"#[^\n]*", logos::skip)]
    #[regex(r"[ \r\n\t\f]+", logos::skip)]
    #[error]
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LtParen => write!(f, "("),
            Token::RtParen => write!(f, ")"),
            Token::LtBrace => write!(f, "{{"),
            Token::RtBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Bang => write!(f, "!"),
            Token::BangEqual => write!(f, "!="),
            Token::EqualEqual => write!(f, "=="),
            Token::Greater => write!(f, ">"),
            Token::GreaterEqual => write!(f, ">="),
            Token::Less => write!(f, "<"),
            Token::LessEqual => write!(f, "<="),
            Token::AmpAmp => write!(f, "&&"),
            Token::PipePipe => write!(f, "||"),
            Token::Identifier(text) | Token::Number(text) => write!(f, "{text}"),
            Token::Def => write!(f, "def"),
            Token::Else => write!(f, "else"),
            Token::For => write!(f, "for"),
            Token::If => write!(f, "if"),
            Token::In => write!(f, "in"),
            Token::Range => write!(f, "range"),
            Token::Zip => write!(f, "zip"),
            Token::Fd => write!(f, "FD"),
            Token::Bk => write!(f, "BK"),
            Token::Lt => write!(f, "LT"),
            Token::Rt => write!(f, "RT"),
            Token::Width => write!(f, "WIDTH"),
            Token::Pu => write!(f, "PU"),
            Token::Pd => write!(f, "PD"),
            Token::Error => write!(f, "<error>"),
        }
    }
}

fn lex_text(lexer: &mut logos::Lexer<Token>) -> String {
    lexer.slice().to_string()
}
