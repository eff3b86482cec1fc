//! Parser for the pseudocode language.
//!
//! Recursive descent over the token sequence, accepting the same language
//! as the block grammar:
//!
//! ```text
//! program        := statement_list
//! statement_list := statement+
//! statement      := if | assign | for | while | print
//! if             := IF expr THEN statement_list
//!                   ( END
//!                   | ELSE statement_list END
//!                   | ELIF expr THEN statement_list END )
//! assign         := IDENTIFIER '=' expr
//! for            := FOR IDENTIFIER '=' NUMBER TO NUMBER THEN statement_list END
//! while          := WHILE expr THEN statement_list END
//! print          := PRINT expr
//! expr           := operand (('+' | '-') operand)*
//! operand        := NUMBER | STRING | IDENTIFIER
//!                 | IDENTIFIER (greater | less | equals) NUMBER
//! ```
//!
//! There is no error recovery: the first token that does not fit aborts the
//! parse. Blocks may nest at most [`MAX_NESTING`] deep, the same limit
//! Python's own tokenizer puts on indentation levels.

use super::ast::*;
use super::error::CompileError;
use super::token::{Token, TokenKind};

/// Deepest allowed block nesting.
pub const MAX_NESTING: usize = 100;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Program, CompileError> {
        let statements = self.parse_statement_list()?;

        if let Some(t) = self.peek() {
            return Err(CompileError::syntax(
                format!("expected a statement, found {}", t.kind),
                t.line,
                t.col,
            ));
        }

        Ok(Program { statements })
    }

    /// One or more statements, stopping at the first token that cannot
    /// begin another.
    fn parse_statement_list(&mut self) -> Result<Vec<Stmt>, CompileError> {
        let mut statements = vec![self.parse_statement()?];
        while self.peek().is_some_and(|t| t.kind.starts_statement()) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    /// The statement list of a block, one nesting level down.
    fn parse_body(&mut self) -> Result<Vec<Stmt>, CompileError> {
        if self.depth >= MAX_NESTING {
            return Err(self.error_here(&format!(
                "blocks nested more than {MAX_NESTING} levels deep"
            )));
        }
        self.depth += 1;
        let body = self.parse_statement_list();
        self.depth -= 1;
        body
    }

    fn parse_statement(&mut self) -> Result<Stmt, CompileError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::If) => self.parse_if(),
            Some(TokenKind::Identifier(_)) => self.parse_assign(),
            Some(TokenKind::For) => self.parse_for(),
            Some(TokenKind::While) => self.parse_while(),
            Some(TokenKind::Print) => self.parse_print(),
            _ => Err(self.unexpected("a statement")),
        }
    }

    fn parse_if(&mut self) -> Result<Stmt, CompileError> {
        self.expect(TokenKind::If)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let then_body = self.parse_body()?;

        let otherwise = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::End) => None,
            Some(TokenKind::Else) => {
                self.advance();
                Some(ElseBranch::Else(self.parse_body()?))
            }
            Some(TokenKind::Elif) => {
                self.advance();
                let cond = self.parse_expression()?;
                self.expect(TokenKind::Then)?;
                let body = self.parse_body()?;
                Some(ElseBranch::Elif { cond, body })
            }
            _ => return Err(self.unexpected("'END', 'ELSE' or 'ELIF'")),
        };
        self.expect(TokenKind::End)?;

        Ok(Stmt::If {
            cond,
            then_body,
            otherwise,
        })
    }

    fn parse_assign(&mut self) -> Result<Stmt, CompileError> {
        let name = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;
        Ok(Stmt::Assign { name, value })
    }

    fn parse_for(&mut self) -> Result<Stmt, CompileError> {
        self.expect(TokenKind::For)?;
        let var = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let start = self.expect_number()?;
        self.expect(TokenKind::To)?;
        let end = self.expect_number()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_body()?;
        self.expect(TokenKind::End)?;
        Ok(Stmt::For {
            var,
            start,
            end,
            body,
        })
    }

    fn parse_while(&mut self) -> Result<Stmt, CompileError> {
        self.expect(TokenKind::While)?;
        let cond = self.parse_expression()?;
        self.expect(TokenKind::Then)?;
        let body = self.parse_body()?;
        self.expect(TokenKind::End)?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_print(&mut self) -> Result<Stmt, CompileError> {
        self.expect(TokenKind::Print)?;
        Ok(Stmt::Print(self.parse_expression()?))
    }

    /// `+` and `-` share one precedence level and fold to the left.
    fn parse_expression(&mut self) -> Result<Expr, CompileError> {
        let mut expr = Expr::single(self.parse_operand()?);

        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinOp::Add,
                Some(TokenKind::Minus) => BinOp::Sub,
                _ => break,
            };
            self.advance();
            expr.rest.push((op, self.parse_operand()?));
        }

        Ok(expr)
    }

    fn parse_operand(&mut self) -> Result<Operand, CompileError> {
        let Some(t) = self.peek() else {
            return Err(self.unexpected("an expression"));
        };

        match &t.kind {
            TokenKind::Number(n) => {
                let n = n.clone();
                self.advance();
                Ok(Operand::Number(n))
            }
            TokenKind::Str(s) => {
                let s = s.clone();
                self.advance();
                Ok(Operand::Str(s))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();

                let op = match self.peek().map(|t| &t.kind) {
                    Some(TokenKind::GreaterThan) => CompareOp::Greater,
                    Some(TokenKind::LessThan) => CompareOp::Less,
                    Some(TokenKind::Equals) => CompareOp::Equal,
                    _ => return Ok(Operand::Ident(name)),
                };
                self.advance();
                let value = self.expect_number()?;
                Ok(Operand::Compare { name, op, value })
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    // --- helpers ---

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> Result<String, CompileError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    fn expect_number(&mut self) -> Result<String, CompileError> {
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Number(n)) => {
                let n = n.clone();
                self.advance();
                Ok(n)
            }
            _ => Err(self.unexpected("a number")),
        }
    }

    fn unexpected(&self, expected: &str) -> CompileError {
        let found = match self.peek() {
            Some(t) => t.kind.to_string(),
            None => "end of input".to_string(),
        };
        self.error_here(&format!("expected {expected}, found {found}"))
    }

    /// Syntax error at the current token, or just past the last one at end
    /// of input.
    fn error_here(&self, message: &str) -> CompileError {
        let (line, col) = match self.peek() {
            Some(t) => (t.line, t.col),
            None => self
                .tokens
                .last()
                .map(|t| (t.line, t.col + source_width(t)))
                .unwrap_or((1, 1)),
        };
        CompileError::syntax(message, line, col)
    }
}

/// Characters the token occupied in the source.
fn source_width(token: &Token) -> usize {
    match &token.kind {
        // Quotes were stripped from the value.
        TokenKind::Str(s) => s.chars().count() + 2,
        _ => token.value().chars().count(),
    }
}
