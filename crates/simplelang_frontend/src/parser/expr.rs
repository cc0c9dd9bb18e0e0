use super::{ParseResult, Parser};
use crate::ast::*;
use crate::token::TokenKind;

impl Parser<'_> {
    /// `Operand (('+' | '-') Operand)?`. There is a single operator level, so
    /// `a + b + c` stops after `a + b` and the caller reports the stray `+`.
    pub(super) fn parse_expr(&mut self) -> ParseResult<Expr> {
        let lhs = self.parse_operand()?;

        if !matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            return Ok(Expr::Operand(lhs));
        }

        let op_token = self.advance();
        let op = Op::new(op_token.text, op_token.span);

        let rhs = self.parse_operand()?;

        Ok(Expr::BinOp { lhs, op, rhs })
    }

    /// `Operand '==' Operand | Expression`
    pub(super) fn parse_condition(&mut self) -> ParseResult<Condition> {
        let expr = self.parse_expr()?;

        match expr {
            Expr::Operand(lhs) if self.eat(TokenKind::Equal) => {
                let rhs = self.parse_operand()?;
                Ok(Condition::Equal { lhs, rhs })
            }

            expr => Ok(Condition::Value(expr)),
        }
    }

    fn parse_operand(&mut self) -> ParseResult<Operand> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance();
                Ok(Operand::number(token.text, token.span))
            }

            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Operand::var(token.text, token.span))
            }

            _ => Err(self.error_expected("an identifier or number")),
        }
    }
}
