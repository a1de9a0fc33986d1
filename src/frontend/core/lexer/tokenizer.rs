//! Tokenizer implementation
//! Main lexer structure and token generation logic

use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};
use std::iter::Peekable;
use std::str::Chars;

/// Characters that start and continue a number token
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that start and continue a name token
#[inline]
pub fn is_name_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Main lexer structure
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: usize,
    line: usize,
    column: usize,
    start_offset: usize,
    start_line: usize,
    start_column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            offset: 0,
            line: 1,
            column: 1,
            start_offset: 0,
            start_line: 1,
            start_column: 1,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.start_offset)
    }

    /// Get span of current token
    pub fn span(&self) -> Span {
        Span::new(self.start_position(), self.position())
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        match self.chars.next() {
            Some('\n') => {
                self.offset += 1;
                self.line += 1;
                self.column = 1;
                Some('\n')
            }
            Some(c) => {
                self.offset += c.len_utf8();
                self.column += 1;
                Some(c)
            }
            None => None,
        }
    }

    /// Peek at next character
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Generate next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(c) = self.peek() else {
            return Ok(None);
        };

        self.start_offset = self.offset;
        self.start_line = self.line;
        self.start_column = self.column;

        match c {
            '(' => {
                self.advance();
                Ok(Some(self.make_token(TokenKind::LParen, "(")))
            }
            ')' => {
                self.advance();
                Ok(Some(self.make_token(TokenKind::RParen, ")")))
            }
            c if is_digit(c) => Ok(Some(self.scan_run(TokenKind::Number, is_digit))),
            '"' => self.scan_string().map(Some),
            c if is_name_char(c) => Ok(Some(self.scan_run(TokenKind::Name, is_name_char))),
            ch => Err(LexError::UnrecognizedCharacter {
                ch,
                position: self.start_position(),
            }),
        }
    }

    /// Scan the maximal run of characters accepted by `accept`
    fn scan_run(
        &mut self,
        kind: TokenKind,
        accept: fn(char) -> bool,
    ) -> Token {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if !accept(c) {
                break;
            }
            value.push(c);
            self.advance();
        }
        self.make_token(kind, value)
    }

    /// Scan a string literal; contents are taken verbatim, no escapes
    fn scan_string(&mut self) -> Result<Token, LexError> {
        self.advance(); // opening quote

        let mut value = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(self.make_token(TokenKind::String, value)),
                Some(c) => value.push(c),
                None => {
                    return Err(LexError::UnterminatedString {
                        position: self.start_position(),
                    })
                }
            }
        }
    }

    /// Create token with current span
    fn make_token(
        &self,
        kind: TokenKind,
        text: impl Into<String>,
    ) -> Token {
        Token::new(kind, text, self.span())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
