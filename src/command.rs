//! The `translateComment` command: credentials, selection, request, rewrite.

use anyhow::Result;

use crate::credentials::{Prompter, SecretStore, resolve};
use crate::editor::{Editor, read_selection};
use crate::rewrite::{RewriteReport, rewrite, split_fragments};
use crate::translation::Translator;

pub const MISSING_API_KEY: &str = "Gemini api key is not entered.";
pub const MISSING_MODEL: &str = "Gemini model is not selected.";
pub const EMPTY_TRANSLATION: &str = "An error occurred!";
pub const REQUEST_FAILED: &str = "An error occurred while getting response from gemini!";

/// How a command invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No editor was active; nothing happened.
    NoEditor,
    /// The user did not provide an API key.
    MissingApiKey,
    /// The user did not pick a model.
    MissingModel,
    /// The API call failed or its response was unusable.
    RequestFailed,
    /// The API answered with no text.
    EmptyTranslation,
    /// Lines were rewritten.
    Rewritten(RewriteReport),
}

impl Outcome {
    /// The message shown to the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NoEditor => None,
            Self::MissingApiKey => Some(MISSING_API_KEY.to_string()),
            Self::MissingModel => Some(MISSING_MODEL.to_string()),
            Self::RequestFailed => Some(REQUEST_FAILED.to_string()),
            Self::EmptyTranslation => Some(EMPTY_TRANSLATION.to_string()),
            Self::Rewritten(report) if report.skipped > 0 => Some(format!(
                "Translated {} line(s); {} line(s) left unchanged because the translation was shorter than the selection.",
                report.rewritten, report.skipped
            )),
            Self::Rewritten(report) => Some(format!("Translated {} line(s).", report.rewritten)),
        }
    }

    /// `true` when the document was rewritten or there was nothing to do.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::NoEditor | Self::Rewritten(_))
    }
}

/// Runs one translate-comment invocation.
///
/// Steps run strictly in order and every user-level failure becomes an
/// [`Outcome`]. `Err` is reserved for local failures (secret store I/O,
/// an edit the editor rejects). Edits applied before such a failure stay.
pub async fn translate_comment<S, P, E, T>(
    store: &mut S,
    prompter: &mut P,
    editor: Option<&mut E>,
    translator: &T,
) -> Result<Outcome>
where
    S: SecretStore + ?Sized,
    P: Prompter + ?Sized,
    E: Editor + ?Sized,
    T: Translator + ?Sized,
{
    let credentials = resolve(store, prompter)?;
    let Some(api_key) = credentials.api_key else {
        return Ok(Outcome::MissingApiKey);
    };
    let Some(api_model) = credentials.api_model else {
        return Ok(Outcome::MissingModel);
    };

    let Some(editor) = editor else {
        tracing::debug!("no active editor");
        return Ok(Outcome::NoEditor);
    };

    let lines = read_selection(&*editor)?;
    let source: Vec<String> = lines.iter().map(|line| line.text.clone()).collect();

    let translated = match translator.translate(&api_model, &api_key, &source).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, model = %api_model, "translation request failed");
            return Ok(Outcome::RequestFailed);
        }
    };

    if translated.trim().is_empty() {
        return Ok(Outcome::EmptyTranslation);
    }

    let fragments = split_fragments(&translated);
    let report = rewrite(editor, &lines, &fragments)?;

    Ok(Outcome::Rewritten(report))
}
