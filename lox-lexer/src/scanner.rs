use indexmap::IndexMap;

use lox_core::error::ErrorReporter;
use lox_core::token::{Literal, Token, TokenKind};

/// The scanner for the Lox scripting language.
///
/// It turns a complete source text into an ordered sequence of tokens in a
/// single forward pass, with at most two characters of lookahead. Malformed
/// lexemes are recorded through the supplied [`ErrorReporter`] and skipped,
/// so one pass surfaces as many diagnostics as possible.
pub struct Scanner<'a> {
    chars: Vec<char>,
    keywords: IndexMap<&'static str, TokenKind>,
    reporter: &'a mut dyn ErrorReporter,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given source text.
    ///
    /// A scanner value is good for exactly one scan; create a fresh one per
    /// source text.
    pub fn new<T: AsRef<str>>(source: T, reporter: &'a mut dyn ErrorReporter) -> Scanner<'a> {
        Scanner {
            chars: source.as_ref().chars().collect(),
            keywords: keywords(),
            reporter,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source text, returning the tokens in source order,
    /// terminated by exactly one `Eof` token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });

        self.tokens
    }

    fn scan_token(&mut self) {
        let ch = self.advance();

        if let Some(kind) = punctuation(ch) {
            self.add_token(kind);
        } else if let Some((with_equal, single)) = operator_pair(ch) {
            // Maximal munch: always prefer the two-character operator.
            let kind = if self.advance_if('=') { with_equal } else { single };
            self.add_token(kind);
        } else {
            match ch {
                '/' => {
                    if self.advance_if('/') {
                        // A line comment, discarded up to (not including) the newline.
                        while matches!(self.peek(), Some(ch) if ch != '\n') {
                            self.advance();
                        }
                    } else {
                        self.add_token(TokenKind::Slash);
                    }
                }
                ' ' | '\r' | '\t' => {}
                '\n' => self.line += 1,
                '"' => self.scan_string(),
                ch if ch.is_ascii_digit() => self.scan_number(),
                ch if is_identifier_start(ch) => self.scan_identifier(),
                _ => self.reporter.error(self.line, "Unexpected character."),
            }
        }
    }

    fn scan_string(&mut self) {
        let opening_line = self.line;
        while matches!(self.peek(), Some(ch) if ch != '"') {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.reporter.error(self.line, "Unterminated string.");
            return;
        }

        // The closing quote.
        self.advance();

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.tokens.push(Token {
            kind: TokenKind::String,
            lexeme: self.lexeme(),
            literal: Some(Literal::String(value)),
            line: opening_line,
        });
    }

    fn scan_number(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
        }

        // Only consume the dot when a fractional digit follows, otherwise it
        // is left for the next iteration (eg. as a `Dot` token).
        if self.peek() == Some('.') && matches!(self.peek_next(), Some(ch) if ch.is_ascii_digit()) {
            self.advance();
            while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                self.advance();
            }
        }

        // A matched digit run always parses as `f64`.
        if let Ok(value) = self.lexeme().parse::<f64>() {
            self.add_literal_token(TokenKind::Number, Literal::Number(value));
        }
    }

    fn scan_identifier(&mut self) {
        while matches!(self.peek(), Some(ch) if is_identifier_part(ch)) {
            self.advance();
        }

        let text = self.lexeme();
        let kind = self
            .keywords
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Consumes the next character only if it matches the expected one.
    fn advance_if(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal: None,
            line: self.line,
        });
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme(),
            literal: Some(literal),
            line: self.line,
        });
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// The fixed single-character punctuation marks.
///
/// The slash is absent: it needs a comment check first.
fn punctuation(ch: char) -> Option<TokenKind> {
    match ch {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        '{' => Some(TokenKind::LeftBrace),
        '}' => Some(TokenKind::RightBrace),
        ',' => Some(TokenKind::Comma),
        '.' => Some(TokenKind::Dot),
        '-' => Some(TokenKind::Minus),
        '+' => Some(TokenKind::Plus),
        ';' => Some(TokenKind::Semicolon),
        '*' => Some(TokenKind::Star),
        _ => None,
    }
}

/// The four operators that pair with a following `=`, as
/// `(with_equal, single)` variants.
fn operator_pair(ch: char) -> Option<(TokenKind, TokenKind)> {
    match ch {
        '!' => Some((TokenKind::BangEqual, TokenKind::Bang)),
        '=' => Some((TokenKind::EqualEqual, TokenKind::Equal)),
        '<' => Some((TokenKind::LessEqual, TokenKind::Less)),
        '>' => Some((TokenKind::GreaterEqual, TokenKind::Greater)),
        _ => None,
    }
}

/// The reserved-word table; each keyword maps to its own kind.
fn keywords() -> IndexMap<&'static str, TokenKind> {
    let mut keywords = IndexMap::with_capacity(16);
    keywords.insert("and", TokenKind::And);
    keywords.insert("class", TokenKind::Class);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("false", TokenKind::False);
    keywords.insert("fun", TokenKind::Fun);
    keywords.insert("for", TokenKind::For);
    keywords.insert("if", TokenKind::If);
    keywords.insert("nil", TokenKind::Nil);
    keywords.insert("or", TokenKind::Or);
    keywords.insert("print", TokenKind::Print);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("super", TokenKind::Super);
    keywords.insert("this", TokenKind::This);
    keywords.insert("true", TokenKind::True);
    keywords.insert("var", TokenKind::Var);
    keywords.insert("while", TokenKind::While);
    keywords
}
