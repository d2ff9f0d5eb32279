use anyhow::{Result, bail};
use async_trait::async_trait;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::LineSpan;
use crate::command::{Outcome, translate_comment};
use crate::credentials::{FileSecretStore, InquirePrompter};
use crate::editor::{Document, FileEditor};
use crate::translation::{GeminiClient, RequestError, Translator};
use crate::ui::{Spinner, Style};
use crate::{status, warning};

/// Overrides the Gemini API root (proxies, local test servers).
pub const API_BASE_ENV: &str = "COMMENTI_API_BASE";

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub lines: Option<LineSpan>,
    pub write: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<Outcome> {
    let mut editor = match (&options.file, options.lines) {
        (Some(path), Some(span)) => Some(FileEditor::new(
            Document::open(path)?,
            span.to_selection(),
        )),
        (Some(_), None) => bail!(
            "Error: Missing required option: '--lines'\n\n\
             Select the lines to translate, e.g.:\n  \
             commenti src/main.rs --lines 12-18"
        ),
        (None, _) => None,
    };

    let mut store = FileSecretStore::open_default()?;
    let mut prompter = InquirePrompter;
    let translator = WithSpinner(gemini_client());

    let outcome =
        translate_comment(&mut store, &mut prompter, editor.as_mut(), &translator).await?;

    if let (Outcome::Rewritten(_), Some(editor), Some(path)) = (outcome, editor, &options.file) {
        let document = editor.into_document();
        if options.write {
            document.save(path)?;
            status!(
                "{} Wrote {}",
                Style::success("✓"),
                Style::secondary(path.display())
            );
        } else {
            print!("{}", document.render());
            io::stdout().flush()?;
        }
    }

    report(outcome);

    Ok(outcome)
}

fn gemini_client() -> GeminiClient {
    match std::env::var(API_BASE_ENV) {
        Ok(base) if !base.is_empty() => GeminiClient::with_base_url(base),
        _ => GeminiClient::new(),
    }
}

fn report(outcome: Outcome) {
    let Some(message) = outcome.message() else {
        return;
    };

    match outcome {
        Outcome::Rewritten(summary) if summary.skipped == 0 => {
            status!("{} {message}", Style::success("✓"));
        }
        _ => {
            warning!("{}", Style::warning(message));
        }
    }
}

/// Shows a spinner while the wrapped translator is waiting on the API.
struct WithSpinner<T>(T);

#[async_trait]
impl<T: Translator> Translator for WithSpinner<T> {
    async fn translate(
        &self,
        model: &str,
        api_key: &str,
        lines: &[String],
    ) -> Result<String, RequestError> {
        let _spinner = Spinner::start("Translating...");
        self.0.translate(model, api_key, lines).await
    }
}
