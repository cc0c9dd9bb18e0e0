use std::io;

use termcolor::{ColorSpec, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::sources::{Cached, Line, Location, Source, Sources};
use super::span::Span;
use super::{Config, Diagnostic, Snippet, SnippetKind};

const TAB: &str = "    ";

impl<S: Sources> Diagnostic<S> {
    pub fn write_to_stream(
        &self,
        sources: &S,
        config: &Config,
        stream: &mut impl WriteColor,
    ) -> io::Result<()> {
        DiagnosticWriter {
            diagnostic: self,
            sources,
            stream,
            config,
        }
        .draw_all()
    }
}

struct DiagnosticWriter<'stream, 'a, W: WriteColor, S: Sources> {
    diagnostic: &'a Diagnostic<S>,
    sources: &'a S,

    stream: &'stream mut W,
    config: &'a Config,
}

impl<'a, W: WriteColor, S: Sources> DiagnosticWriter<'_, 'a, W, S> {
    fn draw_all(mut self) -> io::Result<()> {
        self.draw_header()?;

        let mut by_source: Vec<(S::SourceId, Vec<&Snippet<S>>)> = vec![];
        for snippet in &self.diagnostic.snippets {
            match by_source.iter_mut().find(|(id, _)| *id == snippet.source_id) {
                Some((_, snippets)) => snippets.push(snippet),
                None => by_source.push((snippet.source_id, vec![snippet])),
            }
        }

        for (source_id, mut snippets) in by_source {
            // unknown sources are skipped, the message still stands
            let Some(source) = self.sources.get_source(source_id) else {
                continue;
            };

            snippets.sort_by_key(|snippet| snippet.span.start);

            let located = snippets
                .into_iter()
                .filter_map(|snippet| Some((snippet, source.locate(snippet.span.start)?)))
                .collect();

            let context_lines = self.config.context_lines;
            let groups = group_windows(located, |(_, location)| {
                let line = location.line - 1;
                let first = line.saturating_sub(context_lines);
                let last = (line + context_lines).min(source.num_lines() - 1);
                Span::new(first, last + 1)
            });

            for (group, lines) in groups {
                self.draw_group(source, &group, lines)?;
            }
        }

        writeln!(self.stream)
    }

    fn draw_header(&mut self) -> io::Result<()> {
        self.stream
            .set_color(self.config.styles.severity(self.diagnostic.severity))?;

        if let Some(code) = self.diagnostic.code {
            write!(self.stream, "[{code}] ")?;
        }

        write!(self.stream, "{}:", self.diagnostic.severity.as_str())?;

        self.stream.reset()?;

        match &self.diagnostic.message {
            Some(message) => writeln!(self.stream, " {message}"),
            None => writeln!(self.stream),
        }
    }

    /// Draws snippets whose context windows overlap as one excerpt, under the
    /// locator of the first one. `lines` is a range of line indices.
    fn draw_group(
        &mut self,
        source: &Cached<S::Source>,
        group: &[(&Snippet<S>, Location)],
        lines: Span,
    ) -> io::Result<()> {
        let Some(&(_, location)) = group.first() else {
            return Ok(());
        };

        let gutter_width = lines.end.to_string().len();

        self.draw_locator(source, location)?;

        for context in (lines.start..lines.end).filter_map(|index| source.line(index)) {
            self.draw_gutter(Some(context.index + 1), gutter_width)?;
            writeln!(self.stream, "{}", context.text.replace('\t', TAB))?;

            for (snippet, location) in group {
                if location.line == context.index + 1 {
                    self.draw_underline(source, context, snippet, gutter_width)?;
                }
            }
        }

        Ok(())
    }

    fn draw_locator(&mut self, source: &Cached<S::Source>, location: Location) -> io::Result<()> {
        let Location { line, col } = location;

        self.stream.set_color(&self.config.styles.frame)?;
        write!(self.stream, "In {}:{line}:{col}", source.name_str())?;

        if let Some(path) = source.path() {
            write!(self.stream, " ({}:{line}:{col})", path.display())?;
        }

        writeln!(self.stream)?;
        self.stream.reset()
    }

    /// Multi-line spans are underlined up to the end of their first line.
    fn draw_underline(
        &mut self,
        source: &Cached<S::Source>,
        line: Line,
        snippet: &Snippet<S>,
        gutter_width: usize,
    ) -> io::Result<()> {
        let text = source.source_str();
        let line_end = line.start + line.text.len();

        let before = text.get(line.start..snippet.span.start).unwrap_or_default();
        let underlined = text
            .get(snippet.span.start..snippet.span.end.min(line_end))
            .unwrap_or_default();

        let offset = str_width(before);
        let width = str_width(underlined).max(1);

        self.draw_gutter(None, gutter_width)?;
        self.stream.set_color(self.snippet_color(snippet.kind))?;
        writeln!(
            self.stream,
            "{:offset$}{} {}",
            "",
            self.config.underline.to_string().repeat(width),
            snippet.label
        )?;
        self.stream.reset()
    }

    fn draw_gutter(&mut self, line: Option<usize>, width: usize) -> io::Result<()> {
        self.stream.set_color(&self.config.styles.frame)?;

        match line {
            Some(line) => write!(self.stream, "{line:>width$}")?,
            None => write!(self.stream, "{:>width$}", "")?,
        }

        write!(self.stream, " {} ", self.config.gutter)?;

        self.stream.reset()
    }

    fn snippet_color(&self, kind: SnippetKind) -> &'a ColorSpec {
        match kind {
            SnippetKind::Primary => self.config.styles.severity(self.diagnostic.severity),
            SnippetKind::Secondary => &self.config.styles.note,
        }
    }
}

/// Sorted items whose windows overlap or touch end up in the same group. Each
/// group comes with the union of its windows.
fn group_windows<T>(items: Vec<T>, window: impl Fn(&T) -> Span) -> Vec<(Vec<T>, Span)> {
    let mut groups: Vec<(Vec<T>, Span)> = vec![];

    for item in items {
        let range = window(&item);

        match groups.last_mut() {
            Some((group, lines)) if range.start <= lines.end => {
                *lines = lines.union(range);
                group.push(item);
            }
            _ => groups.push((vec![item], range)),
        }
    }

    groups
}

fn str_width(s: &str) -> usize {
    let num_tabs = s.chars().filter(|&ch| ch == '\t').count();
    s.width() + num_tabs * TAB.len()
}
