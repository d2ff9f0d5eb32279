//! Translation requests against the Gemini `generateContent` API.

mod client;
mod error;
mod prompt;

pub use client::{DEFAULT_BASE_URL, GeminiClient, Translator};
pub use error::RequestError;
pub use prompt::TRANSLATION_PREAMBLE;
