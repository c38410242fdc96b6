use std::fmt;

/// Represents a kind of lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An opening parenthesis (`(`).
    LeftParen,
    /// A closing parenthesis (`)`).
    RightParen,
    /// An opening brace (`{`).
    LeftBrace,
    /// A closing brace (`}`).
    RightBrace,
    /// A comma (`,`).
    Comma,
    /// A period, the property-access operator (`.`).
    Dot,
    /// A minus sign, the negation and substraction operator (`-`).
    Minus,
    /// A plus, the addition operator (`+`).
    Plus,
    /// A semicolon, the statement terminator (`;`).
    Semicolon,
    /// A forward slash, the division operator (`/`).
    Slash,
    /// A star, the multiplication operator (`*`).
    Star,
    /// An exclamation mark, the logical 'not' operator (`!`).
    Bang,
    /// The inequality operator (`!=`).
    BangEqual,
    /// An equal sign, the assignment operator (`=`).
    Equal,
    /// The equality operator (`==`).
    EqualEqual,
    /// The greater-than operator (`>`).
    Greater,
    /// The greater-than-or-equal operator (`>=`).
    GreaterEqual,
    /// The lesser-than operator (`<`).
    Less,
    /// The lesser-than-or-equal operator (`<=`).
    LessEqual,
    /// An identifier (`foo`).
    Identifier,
    /// A string literal (`"hello, world"`).
    String,
    /// A number literal (`10`, `10.6`).
    Number,
    /// The `and` keyword.
    And,
    /// The `class` keyword.
    Class,
    /// The `else` keyword.
    Else,
    /// The `false` keyword.
    False,
    /// The `fun` keyword.
    Fun,
    /// The `for` keyword.
    For,
    /// The `if` keyword.
    If,
    /// The `nil` keyword.
    Nil,
    /// The `or` keyword.
    Or,
    /// The `print` keyword.
    Print,
    /// The `return` keyword.
    Return,
    /// The `super` keyword.
    Super,
    /// The `this` keyword.
    This,
    /// The `true` keyword.
    True,
    /// The `var` keyword.
    Var,
    /// The `while` keyword.
    While,
    /// The end-of-input marker, emitted exactly once, always last.
    Eof,
}

/// Represents the decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The contents of a string literal, quotes excluded.
    String(String),
    /// The value of a number literal.
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(value) => write!(f, "{}", value),
            Literal::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Represents a lexical token, as produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's kind.
    pub kind: TokenKind,
    /// The exact source substring the token was matched from (empty for `Eof`).
    pub lexeme: String,
    /// The decoded literal value, for `String` and `Number` tokens only.
    pub literal: Option<Literal>,
    /// The 1-based source line of the token's first character.
    pub line: usize,
}

impl fmt::Display for Token {
    /// Renders the token as `"<kind> <lexeme> <literal>"`, with `nil` standing in
    /// for an absent literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?} {} nil", self.kind, self.lexeme),
        }
    }
}
