use std::io::Write as _;

use simplelang_diagnostic::termcolor::{ColorChoice, StandardStream};

use crate::sourcemap::SourceMap;

pub use simplelang_diagnostic::*;

/// What the compiler crates need to turn their errors into diagnostics.
pub mod prelude {
    pub use super::{Diagnostic, IntoDiagnostic, Snippet};
    pub use crate::sourcemap::SourceId;
    pub use simplelang_diagnostic::span::Span;
    pub use simplelang_diagnostic::{Severity, SnippetKind};
}

pub type Diagnostic = simplelang_diagnostic::Diagnostic<SourceMap>;
pub type Snippet = simplelang_diagnostic::Snippet<SourceMap>;

/// Where reported diagnostics end up.
pub trait DiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap);
}

/// Collects diagnostics instead of printing them.
impl DiagnosticEmitter for Vec<Diagnostic> {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, _sources: &SourceMap) {
        self.push(diagnostic);
    }
}

/// Renders diagnostics to stderr.
#[derive(Debug)]
pub struct PrettyDiagnosticEmitter {
    stream: StandardStream,
    config: Config,
}

impl PrettyDiagnosticEmitter {
    pub fn new(colors: ColorChoice, config: Config) -> Self {
        Self {
            stream: StandardStream::stderr(colors),
            config,
        }
    }
}

impl Default for PrettyDiagnosticEmitter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto, Config::default())
    }
}

impl DiagnosticEmitter for PrettyDiagnosticEmitter {
    fn emit_diagnostic(&mut self, diagnostic: Diagnostic, sources: &SourceMap) {
        let result = diagnostic
            .write_to_stream(sources, &self.config, &mut self.stream)
            .and_then(|()| self.stream.flush());

        if let Err(err) = result {
            tracing::warn!(%err, "could not write diagnostic");
        }
    }
}

/// Conversion of an error into a diagnostic. `Context` is whatever the error
/// needs to locate itself, usually the [`SourceId`](crate::sourcemap::SourceId)
/// of the source it came from.
pub trait IntoDiagnostic<Context: ?Sized> {
    fn into_diagnostic(self, cx: &Context) -> Diagnostic;
}

impl IntoDiagnostic<()> for Diagnostic {
    fn into_diagnostic(self, _cx: &()) -> Diagnostic {
        self
    }
}
