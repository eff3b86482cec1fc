//! Token types for the pseudocode lexer.

use std::fmt;

use serde::Serialize;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Identifier(String),
    /// Decimal digits with leading zeros removed.
    Number(String),
    Str(String),

    // Operators
    Assign, // =
    Plus,   // +
    Minus,  // -

    // Keywords
    If,
    Then,
    Else,
    Elif,
    For,
    To,
    While,
    Print,
    End,

    // Comparison keywords
    GreaterThan, // greater
    LessThan,    // less
    Equals,      // equals
}

impl TokenKind {
    /// Look up a reserved word. Matching is case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "IF" => TokenKind::If,
            "THEN" => TokenKind::Then,
            "ELSE" => TokenKind::Else,
            "ELIF" => TokenKind::Elif,
            "FOR" => TokenKind::For,
            "TO" => TokenKind::To,
            "WHILE" => TokenKind::While,
            "PRINT" => TokenKind::Print,
            "END" => TokenKind::End,
            "greater" => TokenKind::GreaterThan,
            "less" => TokenKind::LessThan,
            "equals" => TokenKind::Equals,
            _ => return None,
        };
        Some(kind)
    }

    /// Upper-case tag used in token listings.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Str(_) => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Elif => "ELIF",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::End => "END",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::Equals => "EQUALS",
        }
    }

    /// Source text of a fixed-spelling token, `None` for literals.
    pub fn spelling(&self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Identifier(_) | TokenKind::Number(_) | TokenKind::Str(_) => return None,
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Elif => "ELIF",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::End => "END",
            TokenKind::GreaterThan => "greater",
            TokenKind::LessThan => "less",
            TokenKind::Equals => "equals",
        };
        Some(s)
    }

    /// Whether a statement may begin with this token.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Identifier(_)
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Print
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "identifier '{name}'"),
            TokenKind::Number(n) => write!(f, "number {n}"),
            TokenKind::Str(s) => write!(f, "string \"{s}\""),
            other => write!(f, "'{}'", other.spelling().unwrap_or_default()),
        }
    }
}

impl Token {
    /// The lexeme, or the decoded value for literals.
    pub fn value(&self) -> String {
        match &self.kind {
            TokenKind::Identifier(s) | TokenKind::Number(s) | TokenKind::Str(s) => s.clone(),
            other => other.spelling().unwrap_or_default().to_string(),
        }
    }

    pub fn record(&self) -> TokenRecord {
        TokenRecord {
            kind: self.kind.name(),
            value: self.value(),
            line: self.line,
            col: self.col,
        }
    }
}

/// Prints the `(KIND, value, line)` triple shown in token listings.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.kind.name(), self.value(), self.line)
    }
}

/// Flat, serializable view of a token for machine-readable listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    pub kind: &'static str,
    pub value: String,
    pub line: usize,
    pub col: usize,
}
