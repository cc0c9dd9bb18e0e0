//! Lexing and parsing of simplelang source into an [`ast::Program`].

#[macro_use]
extern crate macro_rules_attribute;

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::Lexer;
pub use parser::{ParseError, ParseResult, Parser, MAX_NESTING};

use token::{Token, TokenKind};

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

/// Lexes the whole source eagerly. The final token is always
/// [`TokenKind::EndOfFile`].
pub fn lex(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        tokens.push(token);

        if token.kind == TokenKind::EndOfFile {
            return tokens;
        }
    }
}

pub fn parse(source: &str) -> ParseResult<ast::Program> {
    Parser::new(source).parse()
}
