//! Credential inspection and reset handlers.

use anyhow::Result;
use inquire::Confirm;

use crate::credentials::{API_KEY, API_MODEL, FileSecretStore, SecretStore};
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints where the store lives and which credentials it holds.
///
/// The API key itself is never printed.
pub fn print_credentials() -> Result<()> {
    let store = FileSecretStore::open_default()?;

    println!("{}", Style::header("Stored credentials"));
    println!(
        "  {}      {}",
        Style::label("store"),
        Style::secondary(store.path().display())
    );
    println!(
        "  {}    {}",
        Style::label("api_key"),
        if store.get(API_KEY)?.is_some() {
            Style::value("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!(
        "  {}  {}",
        Style::label("api_model"),
        store
            .get(API_MODEL)?
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );

    Ok(())
}

/// Deletes the stored API key and model so the next run prompts again.
pub fn run_reset(yes: bool) -> Result<()> {
    handle_prompt_cancellation(|| reset_inner(yes))
}

fn reset_inner(yes: bool) -> Result<()> {
    let mut store = FileSecretStore::open_default()?;

    if !yes {
        let confirmed = Confirm::new("Forget the stored Gemini API key and model?")
            .with_default(false)
            .prompt()?;
        if !confirmed {
            return Ok(());
        }
    }

    let removed = clear(&mut store)?;

    if removed == 0 {
        println!("Nothing to clear.");
    } else {
        println!(
            "{} Credentials cleared from {}",
            Style::success("✓"),
            Style::secondary(store.path().display())
        );
    }

    Ok(())
}

/// Removes both credentials. Returns how many were present.
fn clear<S: SecretStore + ?Sized>(store: &mut S) -> Result<usize> {
    let mut removed = 0;
    for key in [API_KEY, API_MODEL] {
        if store.delete(key)? {
            removed += 1;
        }
    }
    tracing::debug!(removed, "cleared credentials");
    Ok(removed)
}
