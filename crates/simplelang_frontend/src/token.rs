use std::fmt;

use simplelang_diagnostic::span::Span;

use crate::NodeCopy;

/// Longest token text kept, in characters. Longer runs are still consumed as a
/// single token, only their text is cut.
pub const MAX_TOKEN_LEN: usize = 99;

#[derive(NodeCopy!)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

#[derive(NodeCopy!)]
pub enum TokenKind {
    Int,
    If,

    Identifier,
    Number,

    Assign,
    Plus,
    Minus,
    Equal,

    LBrace,
    RBrace,
    LParen,
    RParen,
    Semicolon,

    Unknown,
    EndOfFile,
}

impl TokenKind {
    pub fn token_name(&self) -> &'static str {
        match self {
            TokenKind::Int => "keyword `int`",
            TokenKind::If => "keyword `if`",
            TokenKind::Identifier => "an identifier",
            TokenKind::Number => "a number",
            TokenKind::Assign => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Equal => "`==`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Unknown => "an unknown character",
            TokenKind::EndOfFile => "end of input",
        }
    }
}

impl Token<'_> {
    /// How the token is named in "found ..." error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier `{}`", self.text),
            TokenKind::Number => format!("number `{}`", self.text),
            TokenKind::Unknown => format!("unknown character `{}`", self.text),
            kind => kind.token_name().to_owned(),
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;

        if !self.text.is_empty() {
            write!(f, " {}", self.text)?;
        }

        Ok(())
    }
}
