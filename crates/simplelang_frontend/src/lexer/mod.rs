#[cfg(test)]
mod tests;

use std::str::Chars;

use simplelang_diagnostic::span::Span;
use simplelang_utils::peek::Peek;

use crate::token::*;

/// An on-demand tokenizer. Each call to [`Lexer::next_token`] consumes one token
/// and any whitespace before it. Once the input is exhausted every further call
/// returns an [`TokenKind::EndOfFile`] token.
///
/// The lexer never fails: characters it does not recognise become
/// [`TokenKind::Unknown`] tokens and are left for the parser to reject.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            all: source,
            chars: source.chars(),

            token_start: 0,
        }
    }

    pub fn next_token(&mut self) -> Token<'src> {
        self.chars.eat_while(char::is_ascii_whitespace);
        self.token_start = self.byte_pos();

        let Some(ch) = self.chars.next() else {
            return self.token(TokenKind::EndOfFile);
        };

        let kind = match ch {
            '=' if self.chars.eat('=') => TokenKind::Equal,
            '=' => TokenKind::Assign,

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,

            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,

            ch if ch.is_ascii_alphabetic() => self.lex_word(),

            ch if ch.is_ascii_digit() => {
                self.chars.eat_while(char::is_ascii_digit);
                TokenKind::Number
            }

            _ => TokenKind::Unknown,
        };

        let token = self.token(kind);
        tracing::trace!(kind = ?token.kind, text = token.text, "lexed token");

        token
    }

    fn lex_word(&mut self) -> TokenKind {
        self.chars.eat_while(char::is_ascii_alphanumeric);

        match &self.all[self.token_start..self.byte_pos()] {
            "int" => TokenKind::Int,
            "if" => TokenKind::If,
            _ => TokenKind::Identifier,
        }
    }

    fn token(&self, kind: TokenKind) -> Token<'src> {
        let span = Span::new(self.token_start, self.byte_pos());
        let text = truncate(&self.all[span.start..span.end]);

        Token { kind, text, span }
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfFile).then_some(token)
    }
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_TOKEN_LEN) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
