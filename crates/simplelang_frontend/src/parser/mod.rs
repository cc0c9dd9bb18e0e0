
mod expr;

use simplelang_session::diagnostics::prelude::*;

use crate::ast::*;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A grammar violation. Parsing stops at the first one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct ParseError {
    pub expected: String,
    pub found: String,
    pub span: Span,
}

impl IntoDiagnostic<SourceId> for ParseError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        Diagnostic::error()
            .with_code("E0001")
            .with_message(self.to_string())
            .with_snippet(Snippet::primary(
                format!("expected {} here", self.expected),
                *source_id,
                self.span,
            ))
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// How deep `if` blocks may nest. Every later stage walks the tree
/// recursively, so this bounds their stack use too.
pub const MAX_NESTING: usize = 256;

/// Recursive-descent parser with a single token of lookahead, pulled from the
/// lexer as it is consumed.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,

    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();

        Self {
            lexer,
            current,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> ParseResult<Program> {
        let mut stmts = vec![];

        while !self.at(TokenKind::EndOfFile) {
            stmts.push(self.parse_statement()?);
        }

        tracing::debug!(statements = stmts.len(), "parsed program");

        Ok(Program { stmts })
    }

    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.current.kind {
            TokenKind::Int => self.parse_var_decl(),
            TokenKind::Identifier => self.parse_assign(),
            TokenKind::If => self.parse_if(),

            _ => Err(self.error_expected("a statement")),
        }
    }

    fn parse_var_decl(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::Int)?;
        let ident = self.parse_ident()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Stmt::VarDecl(ident))
    }

    fn parse_assign(&mut self) -> ParseResult<Stmt> {
        let target = self.parse_ident()?;
        self.expect(TokenKind::Assign)?;
        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon)?;

        Ok(Stmt::Assign { target, expr })
    }

    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::If)?;

        let cond = if self.eat(TokenKind::LParen) {
            let cond = self.parse_condition()?;
            self.expect(TokenKind::RParen)?;
            Some(cond)
        } else {
            None
        };

        let block = self.parse_block()?;

        Ok(Stmt::If { cond, block })
    }

    fn parse_block(&mut self) -> ParseResult<Block> {
        let open = self.expect(TokenKind::LBrace)?;

        if self.depth == MAX_NESTING {
            return Err(ParseError {
                expected: format!("at most {MAX_NESTING} nested blocks"),
                found: open.describe(),
                span: open.span,
            });
        }

        self.depth += 1;

        let mut stmts = vec![];
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::EndOfFile) {
            stmts.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RBrace)?;
        self.depth -= 1;

        Ok(Block { stmts })
    }

    fn parse_ident(&mut self) -> ParseResult<Ident> {
        let token = self.expect(TokenKind::Identifier)?;
        Ok(Ident::new(token.text, token.span))
    }

    fn advance(&mut self) -> Token<'src> {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(kind.token_name()))
        }
    }

    fn error_expected(&self, expected: impl Into<String>) -> ParseError {
        ParseError {
            expected: expected.into(),
            found: self.current.describe(),
            span: self.current.span,
        }
    }
}
