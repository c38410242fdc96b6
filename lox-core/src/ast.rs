use std::fmt;

use crate::token::{Literal, Token};

/// Represents a Lox expression.
///
/// Example:
/// ```text
/// -123 * (45.67)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation (`1 + 2`).
    Binary {
        /// The left-hand operand.
        left: Box<Expr>,
        /// The operator token.
        operator: Token,
        /// The right-hand operand.
        right: Box<Expr>,
    },
    /// A parenthesized expression (`(1 + 2)`).
    Grouping {
        /// The inner expression.
        expression: Box<Expr>,
    },
    /// A literal value (`123`, `"abc"`, `nil`).
    Literal {
        /// The literal's value, absent for `nil`.
        value: Option<Literal>,
    },
    /// A unary operation (`-1`, `!ok`).
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand.
        right: Box<Expr>,
    },
}

impl fmt::Display for Expr {
    /// Renders the expression in fully-parenthesized prefix form,
    /// eg. `(* (- 123) (group 45.67))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Grouping { expression } => write!(f, "(group {})", expression),
            Expr::Literal { value: Some(value) } => write!(f, "{}", value),
            Expr::Literal { value: None } => write!(f, "nil"),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.lexeme, right),
        }
    }
}
