//! Editor capability and selection reading.
//!
//! The host editor is reduced to four operations (see [`Editor`]) so the
//! translate command runs the same way over a file on disk or any other
//! text buffer.

mod document;

pub use document::{Document, FileEditor};

use anyhow::{Result, bail};

/// A zero-based line/character location in a document.
///
/// `character` counts Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// The user-highlighted span. `start` never comes after `end`.
///
/// Fields are private so every selection goes through [`Selection::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    start: Position,
    end: Position,
}

impl Selection {
    /// Builds a selection from its anchor and active ends, in either order.
    pub fn new(anchor: Position, active: Position) -> Self {
        if anchor <= active {
            Self {
                start: anchor,
                end: active,
            }
        } else {
            Self {
                start: active,
                end: anchor,
            }
        }
    }

    /// Selection spanning whole lines `start..=end`.
    pub fn lines(start: usize, end: usize) -> Self {
        Self::new(Position::new(start, 0), Position::new(end, 0))
    }

    /// A caret with nothing highlighted.
    pub const fn caret(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub const fn start(&self) -> Position {
        self.start
    }

    pub const fn end(&self) -> Position {
        self.end
    }

    /// Number of lines touched, counting partially selected ones.
    pub const fn line_count(&self) -> usize {
        self.end.line - self.start.line + 1
    }
}

/// One selected line: its full text and the range covering all of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedLine {
    pub text: String,
    pub range: Range,
}

/// What the translate command needs from a host editor.
pub trait Editor {
    /// The current selection.
    fn selection(&self) -> Selection;

    /// Text of line `line` without its terminator, if the line exists.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Range covering the whole of line `line`, terminator excluded.
    fn line_range(&self, line: usize) -> Option<Range>;

    /// Replaces the text in `range` with `text`.
    fn replace_range(&mut self, range: Range, text: &str) -> Result<()>;
}

/// Reads every line touched by the editor's selection, in order.
///
/// Column bounds are ignored: each entry is the entire line. A caret
/// yields exactly one line.
pub fn read_selection<E>(editor: &E) -> Result<Vec<SelectedLine>>
where
    E: Editor + ?Sized,
{
    let selection = editor.selection();
    let (first, last) = (selection.start().line, selection.end().line);
    let mut lines = Vec::with_capacity(selection.line_count());

    for index in first..=last {
        let (Some(text), Some(range)) = (editor.line_text(index), editor.line_range(index)) else {
            bail!(
                "Selection ends at line {} but the document has no line {}",
                last + 1,
                index + 1
            );
        };
        lines.push(SelectedLine { text, range });
    }

    tracing::debug!(
        start = first,
        end = last,
        count = lines.len(),
        "read selection"
    );

    Ok(lines)
}
