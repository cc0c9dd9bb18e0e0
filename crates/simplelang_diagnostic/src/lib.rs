//! Source-independent diagnostics and their terminal rendering.

mod render;
pub mod sources;
pub mod span;

use derive_where::derive_where;
pub use termcolor;
use termcolor::{Color, ColorSpec};

use self::sources::Sources;
use self::span::{AsSpan, Span};

#[derive_where(Debug; S::SourceId)]
pub struct Diagnostic<S: Sources> {
    pub severity: Severity,

    pub message: Option<String>,

    /// A stable error code such as `E0001`, shown before the severity.
    pub code: Option<&'static str>,

    pub snippets: Vec<Snippet<S>>,
}

impl<S: Sources> Diagnostic<S> {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            message: None,
            code: None,
            snippets: vec![],
        }
    }

    pub fn warning() -> Self {
        Self::new(Severity::Warning)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: Snippet<S>) -> Self {
        self.snippets.push(snippet);
        self
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A labelled region of a source.
#[derive_where(Debug; S::SourceId)]
pub struct Snippet<S: Sources> {
    pub label: String,
    pub kind: SnippetKind,

    pub source_id: S::SourceId,
    pub span: Span,
}

impl<S: Sources> Snippet<S> {
    pub fn new(
        kind: SnippetKind,
        label: impl Into<String>,
        source_id: S::SourceId,
        span: impl AsSpan,
    ) -> Self {
        Self {
            label: label.into(),
            kind,

            source_id,
            span: span.as_span(),
        }
    }

    pub fn primary(label: impl Into<String>, source_id: S::SourceId, span: impl AsSpan) -> Self {
        Self::new(SnippetKind::Primary, label, source_id, span)
    }

    pub fn secondary(label: impl Into<String>, source_id: S::SourceId, span: impl AsSpan) -> Self {
        Self::new(SnippetKind::Secondary, label, source_id, span)
    }
}

#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnippetKind {
    Primary,
    Secondary,
}

/// Rendering options.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lines of source shown above and below a snippet.
    pub context_lines: usize,

    pub gutter: char,
    pub underline: char,

    pub styles: Styles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_lines: 1,
            gutter: '│',
            underline: '^',
            styles: Styles::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Styles {
    pub error: ColorSpec,
    pub warning: ColorSpec,

    /// Secondary snippet labels.
    pub note: ColorSpec,

    /// Locators and the gutter.
    pub frame: ColorSpec,
}

impl Styles {
    pub fn severity(&self, severity: Severity) -> &ColorSpec {
        match severity {
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        fn spec(fg: Option<Color>, bold: bool, dimmed: bool) -> ColorSpec {
            let mut spec = ColorSpec::new();
            spec.set_fg(fg).set_bold(bold).set_dimmed(dimmed);
            spec
        }

        Self {
            error: spec(Some(Color::Red), true, false),
            warning: spec(Some(Color::Yellow), true, false),
            note: spec(Some(Color::Cyan), true, false),
            frame: spec(None, false, true),
        }
    }
}
