use lox_core::ast::Expr;
use lox_core::error::{CollectingReporter, ConsoleReporter, ErrorReporter};
use lox_core::token::{Literal, Token, TokenKind};

fn token(kind: TokenKind, lexeme: &str) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        literal: None,
        line: 1,
    }
}

#[test]
fn token_rendering_test() {
    let token = Token {
        kind: TokenKind::Number,
        lexeme: String::from("123"),
        literal: Some(Literal::Number(123.0)),
        line: 1,
    };
    assert_eq!(token.to_string(), "Number 123 123");

    let token = Token {
        kind: TokenKind::String,
        lexeme: String::from("\"abc\""),
        literal: Some(Literal::String(String::from("abc"))),
        line: 1,
    };
    assert_eq!(token.to_string(), "String \"abc\" abc");

    let token = Token {
        kind: TokenKind::LeftParen,
        lexeme: String::from("("),
        literal: None,
        line: 1,
    };
    assert_eq!(token.to_string(), "LeftParen ( nil");
}

#[test]
fn expression_rendering_test() {
    let expr = Expr::Binary {
        left: Box::new(Expr::Unary {
            operator: token(TokenKind::Minus, "-"),
            right: Box::new(Expr::Literal {
                value: Some(Literal::Number(123.0)),
            }),
        }),
        operator: token(TokenKind::Star, "*"),
        right: Box::new(Expr::Grouping {
            expression: Box::new(Expr::Literal {
                value: Some(Literal::Number(45.67)),
            }),
        }),
    };

    assert_eq!(expr.to_string(), "(* (- 123) (group 45.67))");
}

#[test]
fn nil_literal_rendering_test() {
    let expr = Expr::Literal { value: None };
    assert_eq!(expr.to_string(), "nil");
}

#[test]
fn collecting_reporter_test() {
    let mut reporter = CollectingReporter::new();
    assert!(!reporter.had_error());

    reporter.error(3, "Unexpected character.");
    reporter.error_at(4, " at 'foo'", "Unterminated string.");

    assert!(reporter.had_error());
    assert_eq!(reporter.diagnostics.len(), 2);
    assert_eq!(reporter.diagnostics[0].line, 3);
    assert_eq!(reporter.diagnostics[0].message, "Unexpected character.");
    assert_eq!(reporter.diagnostics[1].location, " at 'foo'");
}

#[test]
fn console_reporter_latches_test() {
    let mut reporter = ConsoleReporter::new();
    assert!(!reporter.had_error());
    reporter.error(1, "Unexpected character.");
    assert!(reporter.had_error());
    reporter.error(2, "Unexpected character.");
    assert!(reporter.had_error());
}
