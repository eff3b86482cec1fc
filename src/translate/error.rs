//! Error types for the translator.

use std::fmt;

use super::token::Token;

/// A single diagnostic from the lexer or parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl CompileError {
    pub fn lexical(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            kind: ErrorKind::Lexical,
        }
    }

    pub fn syntax(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
            kind: ErrorKind::Syntax,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => f.write_str("lexical error"),
            ErrorKind::Syntax => f.write_str("syntax error"),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {}: {}",
            self.line, self.col, self.kind, self.message
        )
    }
}

impl std::error::Error for CompileError {}

/// Why a translation produced no code.
///
/// Failures that happen after lexing carry the tokens that were produced so
/// callers can still display them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The input was empty or contained only whitespace.
    NoInput,
    /// One or more characters matched no token rule.
    Lexical {
        errors: Vec<CompileError>,
        tokens: Vec<Token>,
    },
    /// The token sequence is not a valid program.
    Syntax { error: CompileError, tokens: Vec<Token> },
}

impl TranslateError {
    /// Tokens lexed before the failure, empty for [`TranslateError::NoInput`].
    pub fn tokens(&self) -> &[Token] {
        match self {
            TranslateError::NoInput => &[],
            TranslateError::Lexical { tokens, .. } | TranslateError::Syntax { tokens, .. } => {
                tokens.as_slice()
            }
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::NoInput => f.write_str("no input: please enter some pseudocode"),
            TranslateError::Lexical { errors, .. } => {
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
            TranslateError::Syntax { error, .. } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for TranslateError {}
