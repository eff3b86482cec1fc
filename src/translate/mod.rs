//! Pseudocode translator — source text → tokens → syntax tree → Python.

pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::*;
pub use codegen::EmitOptions;
pub use error::{CompileError, ErrorKind, TranslateError};
pub use token::{Token, TokenKind, TokenRecord};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use codegen::emit_program;
use lexer::Lexer;
use parser::Parser;

/// What to do when the lexer reports illegal characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexErrorPolicy {
    /// Report every lexical error and produce no code.
    #[default]
    Fail,
    /// Parse the surviving tokens and return the errors as warnings.
    Continue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub emit: EmitOptions,
    pub lex_errors: LexErrorPolicy,
}

/// A successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub tokens: Vec<Token>,
    pub code: String,
    /// Lexical errors tolerated under [`LexErrorPolicy::Continue`].
    pub warnings: Vec<CompileError>,
}

/// A parsed program together with its lexer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub program: Program,
    pub tokens: Vec<Token>,
    pub warnings: Vec<CompileError>,
}

/// The translator.
///
/// Holds only immutable options; each call lexes with its own cursor, so one
/// translator can serve any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    options: TranslateOptions,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranslateOptions {
        &self.options
    }

    /// Lex and parse source into a [`Program`], without generating code.
    pub fn parse(&self, source: &str) -> Result<Parsed, TranslateError> {
        if source.trim().is_empty() {
            return Err(TranslateError::NoInput);
        }

        let lexed = Lexer::new(source).tokenize();
        debug!(
            "lexed {} tokens, {} lexical errors",
            lexed.tokens.len(),
            lexed.errors.len()
        );

        if !lexed.is_clean() && self.options.lex_errors == LexErrorPolicy::Fail {
            return Err(TranslateError::Lexical {
                errors: lexed.errors,
                tokens: lexed.tokens,
            });
        }
        for err in &lexed.errors {
            warn!("{err}");
        }

        match Parser::new(lexed.tokens.clone()).parse() {
            Ok(program) => {
                debug!("parsed {} top-level statements", program.statements.len());
                Ok(Parsed {
                    program,
                    tokens: lexed.tokens,
                    warnings: lexed.errors,
                })
            }
            Err(error) => Err(TranslateError::Syntax {
                error,
                tokens: lexed.tokens,
            }),
        }
    }

    /// Translate a whole program. Either all of the code is produced or none.
    pub fn translate(&self, source: &str) -> Result<Translation, TranslateError> {
        let parsed = self.parse(source)?;
        let code = emit_program(&parsed.program, &self.options.emit);
        debug!("generated {} lines", code.lines().count());

        Ok(Translation {
            tokens: parsed.tokens,
            code,
            warnings: parsed.warnings,
        })
    }
}

/// Translate with default options.
pub fn translate(source: &str) -> Result<Translation, TranslateError> {
    Translator::default().translate(source)
}
