use super::Lexer;
use crate::token::{TokenKind, MAX_TOKEN_LEN};

fn lex(source: &str) -> String {
    crate::lex(source)
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn kinds(source: &str) -> Vec<TokenKind> {
    crate::lex(source).iter().map(|token| token.kind).collect()
}

#[test]
fn declarations_and_assignment() {
    insta::assert_snapshot!(lex("int a;\na = b + 10;"), @r"
    Int int
    Identifier a
    Semicolon ;
    Identifier a
    Assign =
    Identifier b
    Plus +
    Number 10
    Semicolon ;
    EndOfFile
    ");
}

#[test]
fn keywords_need_a_boundary() {
    insta::assert_snapshot!(lex("int if integer iffy in i2 if{"), @r"
    Int int
    If if
    Identifier integer
    Identifier iffy
    Identifier in
    Identifier i2
    If if
    LBrace {
    EndOfFile
    ");
}

#[test]
fn equal_and_assign() {
    assert_eq!(
        kinds("a == b"),
        [
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::EndOfFile
        ]
    );
    assert_eq!(
        kinds("===x"),
        [
            TokenKind::Equal,
            TokenKind::Assign,
            TokenKind::Identifier,
            TokenKind::EndOfFile
        ]
    );
    assert_eq!(
        kinds("= ="),
        [TokenKind::Assign, TokenKind::Assign, TokenKind::EndOfFile]
    );
}

#[test]
fn assign_does_not_eat_next_char() {
    let mut lexer = Lexer::new("=5");

    let assign = lexer.next_token();
    assert_eq!((assign.kind, assign.text), (TokenKind::Assign, "="));

    let number = lexer.next_token();
    assert_eq!((number.kind, number.text), (TokenKind::Number, "5"));
}

#[test]
fn numbers_stop_at_letters() {
    insta::assert_snapshot!(lex("007 123abc 99999999999999999999999"), @r"
    Number 007
    Number 123
    Identifier abc
    Number 99999999999999999999999
    EndOfFile
    ");
}

#[test]
fn unknown_characters() {
    insta::assert_snapshot!(lex("a * (b) != é"), @r"
    Identifier a
    Unknown *
    LParen (
    Identifier b
    RParen )
    Unknown !
    Assign =
    Unknown é
    EndOfFile
    ");
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(
        kinds(" \t\n int\r\n\tx ;\n"),
        [
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::EndOfFile
        ]
    );
    assert_eq!(kinds(""), [TokenKind::EndOfFile]);
    assert_eq!(kinds("  \n\t"), [TokenKind::EndOfFile]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EndOfFile);
        assert_eq!(token.text, "");
    }
}

#[test]
fn iterator_stops_before_end_of_input() {
    let texts: Vec<_> = Lexer::new("int x;").map(|token| token.text).collect();
    assert_eq!(texts, ["int", "x", ";"]);
}

#[test]
fn spans() {
    let spans: Vec<_> = crate::lex("if  {\n}")
        .iter()
        .map(|token| (token.span.start, token.span.end))
        .collect();

    assert_eq!(spans, [(0, 2), (4, 5), (6, 7), (7, 7)]);
}

#[test]
fn long_tokens_are_truncated() {
    let name = "v".repeat(MAX_TOKEN_LEN + 50);
    let source = format!("{name};");

    let tokens = crate::lex(&source);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text.len(), MAX_TOKEN_LEN);
    assert_eq!(tokens[0].span.len(), MAX_TOKEN_LEN + 50);
    assert_eq!(tokens[1].kind, TokenKind::Semicolon);
}
