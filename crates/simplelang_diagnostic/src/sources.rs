use std::path::Path;

/// Whatever diagnostics are allowed to point into.
pub trait Sources {
    type SourceId: Copy + Eq + std::hash::Hash;
    type Source: Source;

    fn get_source(&self, id: Self::SourceId) -> Option<&Cached<Self::Source>>;
}

pub trait Source {
    fn name_str(&self) -> &str;
    fn path(&self) -> Option<&Path>;

    fn source_str(&self) -> &str;
}

impl<S: Source> Sources for Vec<Cached<S>> {
    type SourceId = usize;
    type Source = S;

    fn get_source(&self, id: usize) -> Option<&Cached<S>> {
        self.get(id)
    }
}

/// `(name, text)`, for sources that never lived in a file.
impl Source for (String, String) {
    fn name_str(&self) -> &str {
        &self.0
    }

    fn path(&self) -> Option<&Path> {
        None
    }

    fn source_str(&self) -> &str {
        &self.1
    }
}

/// One-based position of a byte offset. Columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

/// A line of a source, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: usize,
    pub start: usize,
    pub text: &'a str,
}

/// A source with its line starts precomputed.
#[derive(Debug, Clone)]
pub struct Cached<S: Source> {
    source: S,
    line_starts: Vec<usize>,
}

impl<S: Source> Cached<S> {
    pub fn new(source: S) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.source_str().match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            source,
            line_starts,
        }
    }

    pub fn num_lines(&self) -> usize {
        self.line_starts.len()
    }

    /// Zero-based index of the line holding `byte`. The end of the source is
    /// still a valid position.
    pub fn line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.source_str().len() {
            return None;
        }

        Some(self.line_starts.partition_point(|&start| start <= byte) - 1)
    }

    pub fn line(&self, index: usize) -> Option<Line<'_>> {
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.source_str().len(), |&next| next - 1);

        let text = &self.source_str()[start..end];

        Some(Line {
            index,
            start,
            text: text.strip_suffix('\r').unwrap_or(text),
        })
    }

    pub fn locate(&self, byte: usize) -> Option<Location> {
        let line = self.line(self.line_index(byte)?)?;
        let col = self.source_str().get(line.start..byte)?.chars().count() + 1;

        Some(Location {
            line: line.index + 1,
            col,
        })
    }
}

impl<S: Source> Source for Cached<S> {
    fn name_str(&self) -> &str {
        self.source.name_str()
    }

    fn path(&self) -> Option<&Path> {
        self.source.path()
    }

    fn source_str(&self) -> &str {
        self.source.source_str()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cached, Location};

    fn cached(s: &str) -> Cached<(String, String)> {
        Cached::new(("sample".to_owned(), s.to_owned()))
    }

    fn loc(line: usize, col: usize) -> Option<Location> {
        Some(Location { line, col })
    }

    #[test]
    fn line_index() {
        let source = cached("");
        assert_eq!(source.num_lines(), 1);
        assert_eq!(source.line_index(0), Some(0));
        assert_eq!(source.line_index(1), None);

        let source = cached("int a;\nint b;");
        assert_eq!(source.line_index(6), Some(0));
        assert_eq!(source.line_index(7), Some(1));
        assert_eq!(source.line_index(13), Some(1));
        assert_eq!(source.line_index(14), None);

        let source = cached("\n");
        assert_eq!(source.line_index(0), Some(0));
        assert_eq!(source.line_index(1), Some(1));
    }

    #[test]
    fn locate() {
        let source = cached("a = 1;\n\nb = 2;");
        assert_eq!(source.locate(0), loc(1, 1));
        assert_eq!(source.locate(4), loc(1, 5));
        assert_eq!(source.locate(7), loc(2, 1));
        assert_eq!(source.locate(8), loc(3, 1));
        assert_eq!(source.locate(12), loc(3, 5));
        assert_eq!(source.locate(15), None);
    }

    #[test]
    fn columns_count_chars() {
        let source = cached("é = x");
        assert_eq!(source.locate(3), loc(1, 3));

        // not a char boundary
        assert_eq!(source.locate(1), None);
    }

    #[test]
    fn lines() {
        let source = cached("x\r\ny\n");
        assert_eq!(source.num_lines(), 3);
        assert_eq!(source.line(0).map(|line| line.text), Some("x"));
        assert_eq!(source.line(1).map(|line| (line.start, line.text)), Some((3, "y")));
        assert_eq!(source.line(2).map(|line| line.text), Some(""));
        assert_eq!(source.line(3), None);
    }
}
