//! Code generation for the accumulator machine: a single walk over the AST that
//! assigns variables to memory and emits a flat instruction listing.

pub mod codegen;
pub mod instr;
pub mod symbols;

use simplelang_frontend::ast::Program;
use simplelang_session::diagnostics::prelude::*;

pub use codegen::Codegen;
pub use instr::{Assembly, Instr, Label, Reg};
pub use symbols::{Address, Symbol, SymbolTable};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String, span: Span },

    #[error("unsupported operator `{symbol}`")]
    UnsupportedOperator { symbol: String, span: Span },

    /// A syntax node this generator has no lowering for. The parser produces
    /// none today; the AST enums are non-exhaustive so that adding one fails
    /// here instead of being skipped.
    #[error("unsupported syntax node")]
    UnknownNode,

    #[error("variable `{name}` is already declared")]
    DuplicateSymbol {
        name: String,
        first: Span,
        second: Span,
    },
}

impl CodegenError {
    pub fn span(&self) -> Option<Span> {
        match self {
            CodegenError::UndefinedVariable { span, .. }
            | CodegenError::UnsupportedOperator { span, .. } => Some(*span),
            CodegenError::DuplicateSymbol { second, .. } => Some(*second),
            CodegenError::UnknownNode => None,
        }
    }
}

impl IntoDiagnostic<SourceId> for CodegenError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        let source_id = *source_id;
        let diagnostic = Diagnostic::error().with_message(self.to_string());

        match self {
            CodegenError::UndefinedVariable { span, .. } => diagnostic
                .with_code("E0002")
                .with_snippet(Snippet::primary("not declared with `int`", source_id, span)),

            CodegenError::UnsupportedOperator { span, .. } => diagnostic
                .with_code("E0003")
                .with_snippet(Snippet::primary(
                    "only `+` and `-` are supported",
                    source_id,
                    span,
                )),

            CodegenError::UnknownNode => diagnostic.with_code("E0004"),

            CodegenError::DuplicateSymbol { first, second, .. } => diagnostic
                .with_code("E0005")
                .with_snippet(Snippet::secondary("first declared here", source_id, first))
                .with_snippet(Snippet::primary("declared again here", source_id, second)),
        }
    }
}

pub type CodegenResult<T> = Result<T, CodegenError>;

/// Generates the listing for a whole program with fresh symbol and label state.
pub fn generate(program: &Program) -> CodegenResult<Assembly> {
    let mut codegen = Codegen::new();
    codegen.gen_program(program)?;
    Ok(codegen.finish())
}
