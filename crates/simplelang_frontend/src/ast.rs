use std::fmt;

use simplelang_diagnostic::span::Span;

use crate::Node;

/// The root of a parsed translation unit.
#[derive(Node!)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

#[derive(Node!)]
#[non_exhaustive]
pub enum Stmt {
    /// `int name;`
    VarDecl(Ident),

    /// `name = expr;`
    Assign { target: Ident, expr: Expr },

    /// `if (cond) { ... }`, where the condition is optional.
    If {
        cond: Option<Condition>,
        block: Block,
    },
}

#[derive(Node!)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// A single operand, or exactly one binary operation between two operands.
#[derive(Node!)]
#[non_exhaustive]
pub enum Expr {
    Operand(Operand),

    BinOp { lhs: Operand, op: Op, rhs: Operand },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Operand(operand) => operand.span(),
            Expr::BinOp { lhs, rhs, .. } => lhs.span().union(rhs.span()),
        }
    }
}

#[derive(Node!)]
pub enum Condition {
    /// True when the expression evaluates to 1.
    Value(Expr),

    /// True when both operands are equal.
    Equal { lhs: Operand, rhs: Operand },
}

#[derive(Node!)]
pub enum Operand {
    /// A decimal literal, kept as written.
    Number { digits: String, span: Span },

    Var(Ident),
}

impl Operand {
    pub fn number(digits: impl Into<String>, span: Span) -> Self {
        Self::Number {
            digits: digits.into(),
            span,
        }
    }

    pub fn var(name: impl Into<String>, span: Span) -> Self {
        Self::Var(Ident::new(name, span))
    }

    pub fn span(&self) -> Span {
        match self {
            Operand::Number { span, .. } => *span,
            Operand::Var(ident) => ident.span,
        }
    }
}

/// A binary operator, kept as its source symbol. The parser only produces `+`
/// and `-`; anything else is rejected during code generation.
#[derive(Node!)]
pub struct Op {
    pub symbol: String,
    pub span: Span,
}

impl Op {
    pub fn new(symbol: impl Into<String>, span: Span) -> Self {
        Self {
            symbol: symbol.into(),
            span,
        }
    }
}

#[derive(Node!)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Prints a node and its children as an indented outline.
trait PrintTree {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result;
}

fn line(f: &mut fmt::Formatter, depth: usize, text: fmt::Arguments) -> fmt::Result {
    writeln!(f, "{:indent$}{text}", "", indent = depth * 2)
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0)
    }
}

impl PrintTree for Program {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        line(f, depth, format_args!("Program"))?;
        self.stmts
            .iter()
            .try_for_each(|stmt| stmt.print(f, depth + 1))
    }
}

impl PrintTree for Block {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        line(f, depth, format_args!("Block"))?;
        self.stmts
            .iter()
            .try_for_each(|stmt| stmt.print(f, depth + 1))
    }
}

impl PrintTree for Stmt {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        match self {
            Stmt::VarDecl(ident) => line(f, depth, format_args!("VarDecl {}", ident.name)),

            Stmt::Assign { target, expr } => {
                line(f, depth, format_args!("Assign {}", target.name))?;
                expr.print(f, depth + 1)
            }

            Stmt::If { cond, block } => {
                line(f, depth, format_args!("If"))?;
                if let Some(cond) = cond {
                    cond.print(f, depth + 1)?;
                }
                block.print(f, depth + 1)
            }
        }
    }
}

impl PrintTree for Condition {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        match self {
            Condition::Value(expr) => {
                line(f, depth, format_args!("Condition"))?;
                expr.print(f, depth + 1)
            }

            Condition::Equal { lhs, rhs } => {
                line(f, depth, format_args!("Condition =="))?;
                lhs.print(f, depth + 1)?;
                rhs.print(f, depth + 1)
            }
        }
    }
}

impl PrintTree for Expr {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        match self {
            Expr::Operand(operand) => {
                line(f, depth, format_args!("Expression"))?;
                operand.print(f, depth + 1)
            }

            Expr::BinOp { lhs, op, rhs } => {
                line(f, depth, format_args!("Expression {}", op.symbol))?;
                lhs.print(f, depth + 1)?;
                rhs.print(f, depth + 1)
            }
        }
    }
}

impl PrintTree for Operand {
    fn print(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        match self {
            Operand::Number { digits, .. } => line(f, depth, format_args!("Number {digits}")),
            Operand::Var(ident) => line(f, depth, format_args!("Var {}", ident.name)),
        }
    }
}
