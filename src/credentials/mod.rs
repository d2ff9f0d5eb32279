//! Credential resolution: the Gemini API key and model name.
//!
//! Both values live in a [`SecretStore`]. When one is missing the user is
//! asked for it through a [`Prompter`] and the answer is persisted.

mod prompt;
mod resolver;
mod store;

pub use prompt::{InquirePrompter, Prompter};
pub use resolver::{Credentials, resolve};
pub use store::{FileSecretStore, MemorySecretStore, SecretStore};

/// Secret store key holding the Gemini API key.
pub const API_KEY: &str = "api_key";

/// Secret store key holding the selected Gemini model.
pub const API_MODEL: &str = "api_model";

/// Models offered when no model has been stored yet.
pub const MODELS: &[&str] = &["gemini-1.5-flash-8b", "gemini-2.0-flash"];
