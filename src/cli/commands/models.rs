use anyhow::Result;

use crate::credentials::{API_MODEL, FileSecretStore, MODELS, SecretStore};
use crate::ui::Style;

/// Lists the selectable models, marking the stored one.
pub fn print_models() -> Result<()> {
    let store = FileSecretStore::open_default()?;
    let selected = store.get(API_MODEL)?;

    println!("{}", Style::header("Gemini models"));
    for model in MODELS {
        let marker = if selected.as_deref() == Some(*model) {
            format!(" {}", Style::secondary("(selected)"))
        } else {
            String::new()
        };
        println!("  {}{marker}", Style::value(model));
    }

    Ok(())
}
