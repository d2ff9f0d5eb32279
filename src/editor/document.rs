use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use super::{Editor, Position, Range, Selection};
use crate::fs::atomic_write;

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Line terminator as found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// One line of a document and the terminator that followed it.
///
/// Only the last line can have no terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Line {
    text: String,
    ending: Option<LineEnding>,
}

impl Line {
    fn split(raw: &str) -> Self {
        if let Some(text) = raw.strip_suffix("\r\n") {
            Self {
                text: text.to_string(),
                ending: Some(LineEnding::CrLf),
            }
        } else if let Some(text) = raw.strip_suffix('\n') {
            Self {
                text: text.to_string(),
                ending: Some(LineEnding::Lf),
            }
        } else {
            Self {
                text: raw.to_string(),
                ending: None,
            }
        }
    }
}

/// An in-memory text document split into lines.
///
/// Every line keeps its own terminator, so [`Document::render`] reproduces
/// untouched lines byte for byte, mixed line endings included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Splits `text` into lines. An empty text is one empty line.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<Line> = text.split_inclusive('\n').map(Line::split).collect();
        if lines.is_empty() {
            lines.push(Line::split(""));
        }

        Self { lines }
    }

    /// Reads a UTF-8 text file of at most 1 MB.
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: File size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                size as f64 / 1024.0 / 1024.0
            );
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::parse(&text))
    }

    /// Writes the document to `path` atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        atomic_write(path, &self.render())
    }

    /// The full text, each line followed by its own terminator.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&line.text);
            if let Some(ending) = line.ending {
                text.push_str(ending.as_str());
            }
        }
        text
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|line| line.text.as_str())
    }

    /// Replaces `range` with `text`. `text` may contain newlines.
    ///
    /// Columns past the end of a line are clamped to the line end. The last
    /// resulting line keeps the terminator of the last replaced line; lines
    /// opened by newlines in `text` take the first replaced line's.
    pub fn replace(&mut self, range: Range, text: &str) -> Result<()> {
        let (start, end) = if range.start <= range.end {
            (range.start, range.end)
        } else {
            (range.end, range.start)
        };

        let (Some(first), Some(last)) = (self.lines.get(start.line), self.lines.get(end.line))
        else {
            bail!(
                "Edit range {}..{} is outside the document ({} lines)",
                start.line + 1,
                end.line + 1,
                self.lines.len()
            );
        };

        let mut replaced = first.text[..byte_offset(&first.text, start.character)].to_string();
        replaced.push_str(text);
        replaced.push_str(&last.text[byte_offset(&last.text, end.character)..]);

        let inner_ending = first.ending.or_else(|| self.first_ending()).unwrap_or_default();
        let last_ending = last.ending;

        let mut new_lines: Vec<Line> = replaced
            .split('\n')
            .map(|text| Line {
                text: text.strip_suffix('\r').unwrap_or(text).to_string(),
                ending: Some(inner_ending),
            })
            .collect();
        if let Some(tail) = new_lines.last_mut() {
            tail.ending = last_ending;
        }

        self.lines.splice(start.line..=end.line, new_lines);

        Ok(())
    }

    fn first_ending(&self) -> Option<LineEnding> {
        self.lines.iter().find_map(|line| line.ending)
    }
}

fn byte_offset(line: &str, character: usize) -> usize {
    line.char_indices()
        .nth(character)
        .map_or(line.len(), |(offset, _)| offset)
}

/// An [`Editor`] over a [`Document`] with a fixed selection.
#[derive(Debug, Clone)]
pub struct FileEditor {
    document: Document,
    selection: Selection,
}

impl FileEditor {
    pub const fn new(document: Document, selection: Selection) -> Self {
        Self {
            document,
            selection,
        }
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Editor for FileEditor {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.document.line(line).map(str::to_string)
    }

    fn line_range(&self, line: usize) -> Option<Range> {
        let text = self.document.line(line)?;
        Some(Range::new(
            Position::new(line, 0),
            Position::new(line, text.chars().count()),
        ))
    }

    fn replace_range(&mut self, range: Range, text: &str) -> Result<()> {
        self.document.replace(range, text)
    }
}
