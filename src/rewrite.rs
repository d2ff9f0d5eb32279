//! Writes translated fragments back over the selected lines.

use anyhow::Result;

use crate::editor::{Editor, SelectedLine};

/// Prefix put in front of every rewritten line.
pub const COMMENT_PREFIX: &str = "// ";

/// Result of a rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewriteReport {
    /// Lines replaced with a translated fragment.
    pub rewritten: usize,
    /// Selected lines left as they were because the translation ran out.
    pub skipped: usize,
}

/// Splits translated text into lines, dropping blank ones.
pub fn split_fragments(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|fragment| fragment.strip_suffix('\r').unwrap_or(fragment))
        .filter(|fragment| !fragment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Replaces `lines[i]` with `"// " + fragments[i]`, one edit at a time and
/// in line order.
///
/// Only the first `min(lines, fragments)` lines are touched; remaining
/// lines are counted as skipped and extra fragments are dropped. An edit
/// that fails stops the pass without undoing earlier edits.
pub fn rewrite<E>(
    editor: &mut E,
    lines: &[SelectedLine],
    fragments: &[String],
) -> Result<RewriteReport>
where
    E: Editor + ?Sized,
{
    let mut report = RewriteReport::default();

    for (line, fragment) in lines.iter().zip(fragments) {
        editor.replace_range(line.range, &format!("{COMMENT_PREFIX}{fragment}"))?;
        report.rewritten += 1;
    }
    report.skipped = lines.len() - report.rewritten;

    if report.skipped > 0 {
        tracing::warn!(
            selected = lines.len(),
            fragments = fragments.len(),
            "translation returned fewer lines than selected"
        );
    }

    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::editor::{Document, FileEditor, Selection, read_selection};

    fn fragments(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    fn run(text: &str, selection: Selection, translated: &str) -> (String, RewriteReport) {
        let mut editor = FileEditor::new(Document::parse(text), selection);
        let lines = read_selection(&editor).unwrap();
        let report = rewrite(&mut editor, &lines, &split_fragments(translated)).unwrap();
        (editor.document().render(), report)
    }

    #[test]
    fn test_split_fragments_drops_blank_lines() {
        assert_eq!(
            split_fragments("This is a test\n\n  \nSecond line\n"),
            fragments(&["This is a test", "Second line"])
        );
    }

    #[test]
    fn test_split_fragments_strips_carriage_returns() {
        assert_eq!(split_fragments("one\r\ntwo\r\n"), fragments(&["one", "two"]));
    }

    #[test]
    fn test_split_fragments_empty_text() {
        assert!(split_fragments("").is_empty());
        assert!(split_fragments("\n\n").is_empty());
    }

    #[test]
    fn test_rewrite_two_line_scenario() {
        let (text, report) = run(
            "// این یک تست است\n// خط دوم\n",
            Selection::lines(0, 1),
            "This is a test\nSecond line\n",
        );

        assert_eq!(text, "// This is a test\n// Second line\n");
        assert_eq!(
            report,
            RewriteReport {
                rewritten: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn test_rewrite_leaves_other_lines_alone() {
        let (text, _) = run(
            "fn main() {\n    // سلام\n    // دنیا\n}\n",
            Selection::lines(1, 2),
            "Hello\nWorld",
        );

        assert_eq!(text, "fn main() {\n// Hello\n// World\n}\n");
    }

    #[test]
    fn test_rewrite_fewer_fragments_skips_trailing_lines() {
        let (text, report) = run("// یک\n// دو\n// سه\n", Selection::lines(0, 2), "One\n");

        assert_eq!(text, "// One\n// دو\n// سه\n");
        assert_eq!(
            report,
            RewriteReport {
                rewritten: 1,
                skipped: 2
            }
        );
    }

    #[test]
    fn test_rewrite_extra_fragments_are_ignored() {
        let (text, report) = run("// یک\nlet x = 1;\n", Selection::lines(0, 0), "One\nTwo\n");

        assert_eq!(text, "// One\nlet x = 1;\n");
        assert_eq!(report.rewritten, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_rewrite_no_fragments_is_no_edit() {
        let original = "// یک\n// دو\n";
        let (text, report) = run(original, Selection::lines(0, 1), "");

        assert_eq!(text, original);
        assert_eq!(report.rewritten, 0);
        assert_eq!(report.skipped, 2);
    }
}
