//! Lexer for the pseudocode language.
//!
//! Converts source text into a sequence of [`Token`]s. Lexing never stops at
//! the first bad character: every illegal character is reported, skipped,
//! and scanning continues with the rest of the input.

use super::error::CompileError;
use super::token::{Token, TokenKind};

/// Everything the lexer produced for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<CompileError>,
}

impl Lexed {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn tokenize(&mut self) -> Lexed {
        let mut out = Lexed::default();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            let ch = self.peek();
            let result = match ch {
                '\n' => {
                    self.skip_newlines();
                    continue;
                }
                '=' => Ok(self.single_char(TokenKind::Assign)),
                '+' => Ok(self.single_char(TokenKind::Plus)),
                '-' => Ok(self.single_char(TokenKind::Minus)),
                '"' => self.lex_string(),
                '0'..='9' => Ok(self.lex_number()),
                'a'..='z' | 'A'..='Z' | '_' => Ok(self.lex_ident_or_keyword()),
                _ => {
                    let err = CompileError::lexical(
                        format!("illegal character '{ch}'"),
                        self.line,
                        self.col,
                    );
                    self.advance();
                    Err(err)
                }
            };

            match result {
                Ok(token) => out.tokens.push(token),
                Err(err) => out.errors.push(err),
            }
        }

        out
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        self.col += 1;
        ch
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && matches!(self.peek(), ' ' | '\t' | '\r') {
            self.advance();
        }
    }

    /// Consume a run of newlines, bumping the line counter once per newline.
    fn skip_newlines(&mut self) {
        while !self.is_at_end() && self.peek() == '\n' {
            self.pos += 1;
            self.line += 1;
            self.col = 1;
        }
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let line = self.line;
        let col = self.col;
        self.advance();
        Token { kind, line, col }
    }

    /// A string runs to the nearest closing quote on the same line.
    fn lex_string(&mut self) -> Result<Token, CompileError> {
        let line = self.line;
        let col = self.col;

        let close = self.chars[self.pos + 1..]
            .iter()
            .take_while(|&&c| c != '\n')
            .position(|&c| c == '"');

        let Some(len) = close else {
            // Drop only the opening quote so the rest of the line still lexes.
            self.advance();
            return Err(CompileError::lexical("unterminated string literal", line, col));
        };

        self.advance(); // opening '"'
        let s: String = (0..len).map(|_| self.advance()).collect();
        self.advance(); // closing '"'

        Ok(Token {
            kind: TokenKind::Str(s),
            line,
            col,
        })
    }

    /// Digits of any length. Leading zeros are dropped, keeping at least
    /// one digit.
    fn lex_number(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        let mut s = String::new();

        while !self.is_at_end() && self.peek().is_ascii_digit() {
            let ch = self.advance();
            if !(s.is_empty() && ch == '0') {
                s.push(ch);
            }
        }
        if s.is_empty() {
            s.push('0');
        }

        Token {
            kind: TokenKind::Number(s),
            line,
            col,
        }
    }

    fn lex_ident_or_keyword(&mut self) -> Token {
        let line = self.line;
        let col = self.col;
        let mut s = String::new();

        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            s.push(self.advance());
        }

        let kind = TokenKind::keyword(&s).unwrap_or(TokenKind::Identifier(s));

        Token { kind, line, col }
    }
}
