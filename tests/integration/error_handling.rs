//! Error handling integration tests
//!
//! Every malformed input yields exactly one classified error.

use supertiny::frontend::core::lexer::{LexError, TokenKind};
use supertiny::frontend::core::parser::{ParseError, MAX_NESTING_DEPTH};
use supertiny::util::span::Position;
use supertiny::{compile, CompilationPhase, CompileConfig, CompileError, Compiler, TransformStrategy};

#[test]
fn test_unterminated_call() {
    let err = compile("(add 2").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UnexpectedEndOfInput { .. })
    ));
    assert_eq!(err.phase(), CompilationPhase::Parsing);
}

#[test]
fn test_unrecognized_character() {
    assert_eq!(
        compile("(add 2 #)"),
        Err(CompileError::Lex(LexError::UnrecognizedCharacter {
            ch: '#',
            position: Position::with_offset(1, 8, 7),
        }))
    );
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        compile("(print \"oops)"),
        Err(CompileError::Lex(LexError::UnterminatedString { .. }))
    ));
}

#[test]
fn test_missing_callee() {
    assert!(matches!(
        compile("(2 3)"),
        Err(CompileError::Parse(ParseError::ExpectedCalleeName {
            found: TokenKind::Number,
            ..
        }))
    ));
}

#[test]
fn test_unmatched_paren() {
    assert!(matches!(
        compile(")"),
        Err(CompileError::Parse(ParseError::UnmatchedParen { .. }))
    ));
    assert!(matches!(
        compile("(a))"),
        Err(CompileError::Parse(ParseError::UnmatchedParen { .. }))
    ));
}

#[test]
fn test_bare_name() {
    assert!(matches!(
        compile("hello"),
        Err(CompileError::Parse(ParseError::UnexpectedToken {
            found: TokenKind::Name,
            ..
        }))
    ));
}

#[test]
fn test_lex_errors_win_over_parse_errors() {
    // Unbalanced and containing a bad character: lexing fails first
    assert_eq!(
        compile("(add 2 $").unwrap_err().phase(),
        CompilationPhase::Lexing
    );
}

#[test]
fn test_errors_convert_into_anyhow() {
    fn run(source: &str) -> supertiny::Result<String> {
        Ok(compile(source)?)
    }

    let err = run("(add 2").unwrap_err();
    assert!(err.downcast_ref::<CompileError>().is_some());
    assert!(err.to_string().starts_with("Parse error:"));
}

fn nested_call(depth: usize) -> String {
    format!("{}1{}", "(a ".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_nesting_at_limit_compiles() {
    let source = nested_call(MAX_NESTING_DEPTH);
    for strategy in [TransformStrategy::Visitor, TransformStrategy::Recursive] {
        let config = CompileConfig::new().with_transform(strategy);
        let output = Compiler::with_config(config).compile(&source).unwrap();
        let expected = format!(
            "{}1{}",
            "a(".repeat(MAX_NESTING_DEPTH),
            ")".repeat(MAX_NESTING_DEPTH)
        );
        assert_eq!(output, expected);
    }
}

#[test]
fn test_nesting_past_limit_is_an_error() {
    for depth in [MAX_NESTING_DEPTH + 1, 1000, 100_000] {
        let err = compile(&nested_call(depth)).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Parse(ParseError::NestingTooDeep {
                max: MAX_NESTING_DEPTH,
                ..
            })
        ));
        assert_eq!(err.phase(), CompilationPhase::Parsing);
    }
}
