//! State shared by the compilations of one driver run: the loaded sources and
//! where their diagnostics go.

pub mod diagnostics;
pub mod sourcemap;

use diagnostics::*;
use sourcemap::SourceMap;

/// At least one error was reported. The diagnostics themselves have already
/// gone to the session's emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorsEmitted;

pub struct Session<D: DiagnosticEmitter> {
    pub sources: SourceMap,
    pub diagnostics: D,

    error_count: usize,
}

impl<D: DiagnosticEmitter> Session<D> {
    pub fn new(diagnostics: D) -> Self {
        Self {
            sources: SourceMap::default(),
            diagnostics,

            error_count: 0,
        }
    }

    /// Emits one diagnostic. Fails if it was an error, so callers can stop with `?`.
    pub fn report<Context>(
        &mut self,
        diagnostic: impl IntoDiagnostic<Context>,
        cx: &Context,
    ) -> Result<(), ErrorsEmitted> {
        let diagnostic = diagnostic.into_diagnostic(cx);
        let is_error = diagnostic.severity >= Severity::Error;

        self.diagnostics.emit_diagnostic(diagnostic, &self.sources);

        if is_error {
            self.error_count += 1;
            Err(ErrorsEmitted)
        } else {
            Ok(())
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }
}
