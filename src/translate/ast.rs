//! Syntax tree for the pseudocode language.
//!
//! The parser builds these types and the code generator walks them, so
//! recognition and emission can be tested separately.

/// A complete program: statements in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `IF cond THEN body [ELSE body | ELIF cond THEN body] END`
    If {
        cond: Expr,
        then_body: Vec<Stmt>,
        otherwise: Option<ElseBranch>,
    },
    /// `name = value`
    Assign { name: String, value: Expr },
    /// `FOR var = start TO end THEN body END`, inclusive of `end`.
    For {
        var: String,
        start: String,
        end: String,
        body: Vec<Stmt>,
    },
    /// `WHILE cond THEN body END`
    While { cond: Expr, body: Vec<Stmt> },
    /// `PRINT value`
    Print(Expr),
}

/// The optional tail of an `IF`. Only one clause is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseBranch {
    Else(Vec<Stmt>),
    Elif { cond: Expr, body: Vec<Stmt> },
}

/// A left-to-right chain of `+`/`-` over operands, kept flat: building,
/// emitting and dropping it never recurses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub first: Operand,
    pub rest: Vec<(BinOp, Operand)>,
}

impl Expr {
    pub fn single(operand: Operand) -> Self {
        Self {
            first: operand,
            rest: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Decimal digits, leading zeros removed.
    Number(String),
    Ident(String),
    Str(String),
    /// Identifier compared against an integer literal.
    Compare {
        name: String,
        op: CompareOp,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Greater,
    Less,
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::Equal => "==",
        }
    }
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
        }
    }
}
