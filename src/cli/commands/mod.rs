//! Subcommand implementations.

/// Credential inspection and reset handlers.
pub mod credentials;

/// Model listing handler.
pub mod models;

/// Translate-comment command handler.
pub mod translate;
