#![doc = include_str!("../README.md")]

mod error;
mod lexer;
mod limit;
mod location;
mod parser;

pub mod ast;

pub use crate::error::Error;
pub use crate::lexer::{lex, Lexer, Token, TokenKind};
pub use crate::location::{location_of, Location, Span};
pub use crate::parser::{Parser, ParserOptions, DEFAULT_MAX_DEPTH};

/// Parse `source` with default options. Equivalent to
/// `Parser::new(source).parse()`.
pub fn parse(source: &str) -> Result<ast::Document<'_>, Error> {
    Parser::new(source).parse()
}
