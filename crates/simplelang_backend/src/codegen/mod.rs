
use simplelang_frontend::ast::*;

use crate::instr::{Assembly, Instr, Label, Reg};
use crate::symbols::{Address, SymbolTable};
use crate::{CodegenError, CodegenResult};

/// The value `CMP` checks an expression condition against.
const TRUE: u8 = 1;

/// State of one generation run. Symbols and labels are never shared between
/// runs, so separate `Codegen`s can be used side by side.
#[derive(Debug, Default)]
pub struct Codegen {
    symbols: SymbolTable,
    next_label: usize,

    instrs: Vec<Instr>,
}

/// Where an operand's value comes from.
enum Value<'a> {
    Immediate(&'a str),
    Memory(Address),
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gen_program(&mut self, program: &Program) -> CodegenResult<()> {
        self.gen_stmts(&program.stmts)?;

        tracing::debug!(
            symbols = self.symbols.len(),
            instructions = self.instrs.len(),
            "generated program"
        );

        Ok(())
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn finish(self) -> Assembly {
        Assembly {
            instrs: self.instrs,
        }
    }

    fn gen_stmts(&mut self, stmts: &[Stmt]) -> CodegenResult<()> {
        stmts.iter().try_for_each(|stmt| self.gen_stmt(stmt))
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> CodegenResult<()> {
        match stmt {
            Stmt::VarDecl(ident) => {
                let address = self.symbols.declare(ident)?;
                tracing::debug!(name = %ident.name, %address, "declared variable");
            }

            Stmt::Assign { target, expr } => {
                let address = self.symbols.resolve(target)?;
                self.gen_expr(expr)?;
                self.emit(Instr::Store(Reg::R0, address));
            }

            Stmt::If { cond, block } => self.gen_if(cond.as_ref(), block)?,

            _ => return Err(CodegenError::UnknownNode),
        }

        Ok(())
    }

    /// Leaves the value of `expr` in `R0`. Operands and the operator are checked
    /// before anything is emitted.
    fn gen_expr(&mut self, expr: &Expr) -> CodegenResult<()> {
        match expr {
            Expr::Operand(operand) => {
                let value = self.resolve_operand(operand)?;
                self.emit_load(value);
            }

            Expr::BinOp { lhs, op, rhs } => {
                let op_instr = binop_instr(op)?;
                let lhs = self.resolve_operand(lhs)?;
                let rhs = self.resolve_operand(rhs)?;

                self.emit_binop(lhs, rhs, op_instr);
            }

            _ => return Err(CodegenError::UnknownNode),
        }

        Ok(())
    }

    fn gen_if(&mut self, cond: Option<&Condition>, block: &Block) -> CodegenResult<()> {
        // without a condition the test is against whatever R0 already holds
        let expected = match cond {
            None => TRUE,

            Some(Condition::Value(expr)) => {
                self.gen_expr(expr)?;
                TRUE
            }

            // the difference is 0 exactly when the operands are equal
            Some(Condition::Equal { lhs, rhs }) => {
                let lhs = self.resolve_operand(lhs)?;
                let rhs = self.resolve_operand(rhs)?;

                self.emit_binop(lhs, rhs, Instr::Sub(Reg::R0, Reg::R1));
                0
            }
        };

        let end = self.new_label();

        self.emit(Instr::Cmp(Reg::R0, expected));
        self.emit(Instr::Jne(end));

        self.gen_stmts(&block.stmts)?;

        self.emit(Instr::Label(end));

        Ok(())
    }

    fn resolve_operand<'a>(&self, operand: &'a Operand) -> CodegenResult<Value<'a>> {
        match operand {
            Operand::Number { digits, .. } => Ok(Value::Immediate(digits)),
            Operand::Var(ident) => self.symbols.resolve(ident).map(Value::Memory),
        }
    }

    fn emit_load(&mut self, value: Value) {
        let instr = match value {
            Value::Immediate(digits) => Instr::LoadI(Reg::R0, digits.to_owned()),
            Value::Memory(address) => Instr::Load(Reg::R0, address),
        };

        self.emit(instr);
    }

    /// Left operand through the stack into `R1`, right operand in `R0`.
    fn emit_binop(&mut self, lhs: Value, rhs: Value, op_instr: Instr) {
        self.emit_load(lhs);
        self.emit(Instr::Push(Reg::R0));
        self.emit_load(rhs);
        self.emit(Instr::Pop(Reg::R1));
        self.emit(op_instr);
    }

    fn new_label(&mut self) -> Label {
        let label = Label(self.next_label);
        self.next_label += 1;

        tracing::trace!(%label, "allocated label");

        label
    }

    fn emit(&mut self, instr: Instr) {
        tracing::trace!(%instr, "emit");
        self.instrs.push(instr);
    }
}

fn binop_instr(op: &Op) -> CodegenResult<Instr> {
    match op.symbol.as_str() {
        "+" => Ok(Instr::Add(Reg::R0, Reg::R1)),
        "-" => Ok(Instr::Sub(Reg::R0, Reg::R1)),

        _ => Err(CodegenError::UnsupportedOperator {
            symbol: op.symbol.clone(),
            span: op.span,
        }),
    }
}
