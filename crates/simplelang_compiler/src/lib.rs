//! The whole simplelang pipeline behind a couple of calls: source text in,
//! instruction listing out.

pub mod cli;

#[cfg(test)]
mod tests;

use simplelang_backend::{Assembly, CodegenError};
use simplelang_diagnostic::sources::Source as _;
use simplelang_frontend::ParseError;
use simplelang_session::diagnostics::prelude::*;
use simplelang_session::diagnostics::DiagnosticEmitter;
use simplelang_session::sourcemap::Source;
use simplelang_session::{ErrorsEmitted, Session};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    UndefinedVariable,
    UnsupportedOperator,
    UnknownNode,
    DuplicateSymbol,
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Syntax(_) => ErrorKind::Syntax,
            CompileError::Codegen(err) => match err {
                CodegenError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
                CodegenError::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
                CodegenError::UnknownNode => ErrorKind::UnknownNode,
                CodegenError::DuplicateSymbol { .. } => ErrorKind::DuplicateSymbol,
            },
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Syntax(err) => Some(err.span),
            CompileError::Codegen(err) => err.span(),
        }
    }
}

impl IntoDiagnostic<SourceId> for CompileError {
    fn into_diagnostic(self, source_id: &SourceId) -> Diagnostic {
        match self {
            CompileError::Syntax(err) => err.into_diagnostic(source_id),
            CompileError::Codegen(err) => err.into_diagnostic(source_id),
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Lexes, parses and generates code for one translation unit. Every call has
/// its own symbol table and label counter.
pub fn compile(source: &str) -> CompileResult<Assembly> {
    let program = simplelang_frontend::parse(source)?;
    let assembly = simplelang_backend::generate(&program)?;

    Ok(assembly)
}

/// Like [`compile`], but the source is added to the session and a failure is
/// reported through its emitter.
pub fn compile_in_session<D: DiagnosticEmitter>(
    session: &mut Session<D>,
    source: Source,
) -> Result<Assembly, ErrorsEmitted> {
    let (source_id, source) = session.sources.insert_and_get(source);
    tracing::debug!(name = source.name_str(), "compiling");

    match compile(source.source_str()) {
        Ok(assembly) => Ok(assembly),

        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "compilation failed");
            session.report(err, &source_id)?;
            Err(ErrorsEmitted)
        }
    }
}

/// One line per token, `EndOfFile` included.
pub fn dump_tokens(source: &str) -> String {
    simplelang_frontend::lex(source)
        .iter()
        .map(|token| format!("{token}\n"))
        .collect()
}

pub fn dump_ast(source: &str) -> CompileResult<String> {
    let program = simplelang_frontend::parse(source)?;
    Ok(program.to_string())
}
