//! Code generator — walks a [`Program`] and emits Python source.
//!
//! Every line of a block body is indented one level deeper than its header,
//! so nested blocks keep valid indentation at any depth.

use super::ast::*;

/// Formatting knobs for the emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Emit a whole program. Statements appear in source order, one per line.
pub fn emit_program(program: &Program, options: &EmitOptions) -> String {
    let mut emitter = Emitter {
        lines: Vec::new(),
        unit: " ".repeat(options.indent_width),
    };
    emitter.block(&program.statements, 0);
    emitter.lines.join("\n")
}

struct Emitter {
    lines: Vec<String>,
    unit: String,
}

impl Emitter {
    fn push(&mut self, depth: usize, text: String) {
        self.lines.push(format!("{}{text}", self.unit.repeat(depth)));
    }

    fn block(&mut self, stmts: &[Stmt], depth: usize) {
        for stmt in stmts {
            self.statement(stmt, depth);
        }
    }

    fn statement(&mut self, stmt: &Stmt, depth: usize) {
        match stmt {
            Stmt::If {
                cond,
                then_body,
                otherwise,
            } => {
                self.push(depth, format!("if {}:", emit_expr(cond)));
                self.block(then_body, depth + 1);
                match otherwise {
                    Some(ElseBranch::Else(body)) => {
                        self.push(depth, "else:".to_string());
                        self.block(body, depth + 1);
                    }
                    Some(ElseBranch::Elif { cond, body }) => {
                        self.push(depth, format!("elif {}:", emit_expr(cond)));
                        self.block(body, depth + 1);
                    }
                    None => {}
                }
            }
            Stmt::Assign { name, value } => {
                self.push(depth, format!("{name} = {}", emit_expr(value)));
            }
            Stmt::For {
                var,
                start,
                end,
                body,
            } => {
                // `TO` is inclusive, `range` is not.
                self.push(depth, format!("for {var} in range({start}, {end} + 1):"));
                self.block(body, depth + 1);
            }
            Stmt::While { cond, body } => {
                self.push(depth, format!("while {}:", emit_expr(cond)));
                self.block(body, depth + 1);
            }
            Stmt::Print(value) => {
                self.push(depth, format!("print({})", emit_expr(value)));
            }
        }
    }
}

/// Render an expression. Every `+`/`-` is parenthesised, nesting to the
/// left: `1 + 2 - 3` becomes `((1 + 2) - 3)`.
pub fn emit_expr(expr: &Expr) -> String {
    let mut out = "(".repeat(expr.rest.len());
    push_operand(&mut out, &expr.first);
    for (op, operand) in &expr.rest {
        out.push(' ');
        out.push_str(op.symbol());
        out.push(' ');
        push_operand(&mut out, operand);
        out.push(')');
    }
    out
}

fn push_operand(out: &mut String, operand: &Operand) {
    match operand {
        Operand::Number(n) => out.push_str(n),
        Operand::Ident(name) => out.push_str(name),
        Operand::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Operand::Compare { name, op, value } => {
            out.push_str(name);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            out.push_str(value);
        }
    }
}
