use anyhow::Result;

use super::{API_KEY, API_MODEL, MODELS, Prompter, SecretStore};

/// Credentials after resolution. A `None` field means the user declined
/// to provide it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub api_model: Option<String>,
}

/// Reads the API key and model from `store`, prompting for whichever is
/// missing and persisting what the user supplies.
///
/// Existing values are returned as-is: never validated, never deleted.
/// A cancelled prompt leaves the field `None`; the caller decides how to
/// abort.
pub fn resolve<S, P>(store: &mut S, prompter: &mut P) -> Result<Credentials>
where
    S: SecretStore + ?Sized,
    P: Prompter + ?Sized,
{
    let mut api_key = store.get(API_KEY)?.filter(|k| !k.is_empty());
    let mut api_model = store.get(API_MODEL)?.filter(|m| !m.is_empty());

    if api_key.is_none() {
        tracing::debug!("no stored api key, prompting");
        if let Some(entered) = prompter.input_api_key()?.filter(|k| !k.is_empty()) {
            store.store(API_KEY, &entered)?;
            api_key = Some(entered);
        }
    }

    if api_model.is_none() {
        tracing::debug!("no stored model, prompting");
        if let Some(chosen) = prompter.select_model(MODELS)? {
            store.store(API_MODEL, &chosen)?;
            api_model = Some(chosen);
        }
    }

    Ok(Credentials { api_key, api_model })
}
