use simplelang_diagnostic::span::Span;
use simplelang_diagnostic::termcolor::NoColor;
use simplelang_diagnostic::Config;
use simplelang_frontend::MAX_NESTING;
use simplelang_session::diagnostics::Diagnostic;
use simplelang_session::sourcemap::Source;
use simplelang_session::{ErrorsEmitted, Session};

use crate::{compile, compile_in_session, dump_ast, dump_tokens, ErrorKind};

fn test_compiles(source: &str, should_compile: bool) {
    match (compile(source), should_compile) {
        (Err(err), true) => panic!("failed to compile: {source:?}, error: {err}"),
        (Ok(_), false) => panic!("unexpectedly compiled: {source:?}"),
        _ => {}
    }
}

fn error_kind(source: &str) -> ErrorKind {
    match compile(source) {
        Ok(_) => panic!("unexpectedly compiled: {source:?}"),
        Err(err) => err.kind(),
    }
}

fn render(session: &Session<Vec<Diagnostic>>) -> String {
    let config = Config::default();
    let mut stream = NoColor::new(vec![]);

    for diagnostic in &session.diagnostics {
        diagnostic
            .write_to_stream(&session.sources, &config, &mut stream)
            .unwrap();
    }

    String::from_utf8(stream.into_inner()).unwrap()
}

#[test]
fn empty() {
    test_compiles("", true);
    test_compiles(" \n\t ", true);
}

#[test]
fn newlines() {
    test_compiles("\nint\na\n;\na\n=\n1\n;\n", true);
}

#[test]
fn no_spaces() {
    test_compiles("int a;int b;a=1;b=a-1;if(a==b){a=b+a;}", true);
}

#[test]
fn missing_semicolon() {
    test_compiles("int a", false);
    test_compiles("int a; a = 1", false);
}

#[test]
fn chained_arithmetic() {
    test_compiles("int a; a = 1 + 2 + 3;", false);
}

#[test]
fn unclosed_block() {
    test_compiles("if {", false);
    test_compiles("int a; if (a) { a = 1;", false);
}

#[test]
fn stray_characters() {
    test_compiles("int a; a = 2 * 3;", false);
    test_compiles("int a; @", false);
}

#[test]
fn error_kinds() {
    assert_eq!(error_kind("int;"), ErrorKind::Syntax);
    assert_eq!(error_kind("x = 1;"), ErrorKind::UndefinedVariable);
    assert_eq!(error_kind("int a; a = a + b;"), ErrorKind::UndefinedVariable);
    assert_eq!(error_kind("int a; int a;"), ErrorKind::DuplicateSymbol);
}

#[test]
fn error_spans() {
    let err = compile("int a;\nx = 1;").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(7, 8)));
    assert_eq!(err.to_string(), "undefined variable `x`");

    let err = compile("int 5;").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(4, 5)));
    assert_eq!(err.to_string(), "expected an identifier, found number `5`");
}

#[test]
fn sample_program() {
    let source = "
        int a;
        int b;
        int c;
        int d;

        a = 10;
        b = 20;
        c = a + b;
        d = c - b;

        if (c == 30) {
            d = d + 1;
        }
    ";

    let assembly = compile(source).unwrap();

    assert_eq!(assembly.instrs.len(), 30);
    assert_eq!(assembly.lines().last().as_deref(), Some("LABEL_0:"));
}

#[test]
fn runs_are_independent() {
    let first = compile("int a; int b; if { b = a; }").unwrap();
    let second = compile("int b; if { b = 1; }").unwrap();

    insta::assert_snapshot!(first, @r"
    CMP R0, 1
    JNE LABEL_0
    LOAD R0, 0
    STORE R0, 1
    LABEL_0:
    ");

    insta::assert_snapshot!(second, @r"
    CMP R0, 1
    JNE LABEL_0
    LOADI R0, 1
    STORE R0, 0
    LABEL_0:
    ");
}

#[test]
fn concurrent_compilation() {
    let sources: Vec<String> = (0..8)
        .map(|n| format!("int v{n}; v{n} = {n}; if (v{n} == {n}) {{ v{n} = v{n} + 1; }}"))
        .collect();

    let expected: Vec<_> = sources.iter().map(|source| compile(source)).collect();

    let handles: Vec<_> = sources
        .into_iter()
        .map(|source| std::thread::spawn(move || compile(&source)))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn session_collects_diagnostics() {
    let mut session = Session::new(vec![]);

    let ok = compile_in_session(&mut session, Source::new("ok.sl", "int a; a = 1;"));
    assert!(ok.is_ok());
    assert!(session.diagnostics.is_empty());

    let err = compile_in_session(&mut session, Source::new("bad.sl", "int a;\nb = a;"));
    assert_eq!(err, Err(ErrorsEmitted));
    assert_eq!(session.diagnostics.len(), 1);
    assert_eq!(session.diagnostics[0].code, Some("E0002"));

    insta::assert_snapshot!(render(&session), @r"
    [E0002] Error: undefined variable `b`
    In bad.sl:2:1
    1 │ int a;
    2 │ b = a;
      │ ^ not declared with `int`
    ");
}

#[test]
fn duplicate_declaration_diagnostic() {
    let mut session = Session::new(vec![]);

    let result = compile_in_session(&mut session, Source::new("dup.sl", "int n;\nint n;"));
    assert_eq!(result, Err(ErrorsEmitted));

    insta::assert_snapshot!(render(&session), @r"
    [E0005] Error: variable `n` is already declared
    In dup.sl:1:5
    1 │ int n;
      │     ^ first declared here
    2 │ int n;
      │     ^ declared again here
    ");
}

#[test]
fn syntax_error_diagnostic() {
    let mut session = Session::new(vec![]);

    let result = compile_in_session(&mut session, Source::new("syntax.sl", "int a;\na = 1 }"));
    assert_eq!(result, Err(ErrorsEmitted));

    insta::assert_snapshot!(render(&session), @r"
    [E0001] Error: expected `;`, found `}`
    In syntax.sl:2:7
    1 │ int a;
    2 │ a = 1 }
      │       ^ expected `;` here
    ");
}

#[test]
fn token_dump() {
    insta::assert_snapshot!(dump_tokens("int x;\nx = 42;"), @r"
    Int int
    Identifier x
    Semicolon ;
    Identifier x
    Assign =
    Number 42
    Semicolon ;
    EndOfFile
    ");
}

#[test]
fn ast_dump() {
    insta::assert_snapshot!(dump_ast("int a; if (a == 1) { a = a - 1; }").unwrap(), @r"
    Program
      VarDecl a
      If
        Condition ==
          Var a
          Number 1
        Block
          Assign a
            Expression -
              Var a
              Number 1
    ");

    assert_eq!(
        dump_ast("if (").unwrap_err().kind(),
        ErrorKind::Syntax,
    );
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let nested = |depth: usize| "if { ".repeat(depth) + &"} ".repeat(depth);

    let depths = [MAX_NESTING, 600, 100_000];

    // the default size for spawned threads
    let results = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            depths.map(|depth| {
                compile(&nested(depth))
                    .map(|asm| asm.instrs.len())
                    .map_err(|err| err.kind())
            })
        })
        .unwrap()
        .join()
        .unwrap();

    let [at_limit, past_limit, far_past_limit] = results;
    assert_eq!(at_limit, Ok(3 * MAX_NESTING));
    assert_eq!(past_limit.unwrap_err(), ErrorKind::Syntax);
    assert_eq!(far_past_limit.unwrap_err(), ErrorKind::Syntax);
}
