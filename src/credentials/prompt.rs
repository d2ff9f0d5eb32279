use anyhow::{Context, Result};
use inquire::{Password, PasswordDisplayMode, Select};

use crate::ui::cancelled_as_none;

/// Asks the user for credentials that are not stored yet.
///
/// Both methods return `Ok(None)` when the user dismisses the prompt.
pub trait Prompter {
    /// Free-text input for the API key. No format validation.
    fn input_api_key(&mut self) -> Result<Option<String>>;

    /// Forced single choice among `models`.
    fn select_model(&mut self, models: &[&str]) -> Result<Option<String>>;
}

/// Terminal prompts built on `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn input_api_key(&mut self) -> Result<Option<String>> {
        let answer = Password::new("Gemini API key:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_help_message(
                "commenti uses Gemini to translate comments; get a key from Google AI Studio",
            )
            .prompt();

        cancelled_as_none(answer).context("Failed to read the Gemini API key")
    }

    fn select_model(&mut self, models: &[&str]) -> Result<Option<String>> {
        let answer = Select::new("Select gemini model:", models.to_vec()).prompt();

        let chosen = cancelled_as_none(answer).context("Failed to read the Gemini model choice")?;
        Ok(chosen.map(str::to_string))
    }
}
