//! # commenti - translate Persian source comments with Gemini
//!
//! `commenti` sends a range of lines to the Gemini `generateContent` API
//! and rewrites each line as `"// " + translation`.
//!
//! The command runs four steps in order:
//!
//! 1. [`credentials::resolve`] reads the API key and model from a
//!    [`credentials::SecretStore`], prompting for missing ones
//! 2. [`editor::read_selection`] collects the selected lines
//! 3. [`translation::Translator`] sends them to Gemini
//! 4. [`rewrite::rewrite`] writes the translated lines back
//!
//! [`command::translate_comment`] ties them together. Host editors plug
//! in through [`editor::Editor`]; the CLI uses a file on disk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate lines 12 to 18 and print the result
//! commenti src/main.rs --lines 12-18
//!
//! # Rewrite the file in place
//! commenti src/main.rs --lines 12-18 --write
//!
//! # Forget the stored key and model
//! commenti reset
//! ```
//!
//! Credentials are kept in `~/.config/commenti/credentials.toml`
//! (mode `0600`).

/// Command-line interface definitions and handlers.
pub mod cli;

/// The translate-comment command.
pub mod command;

/// API key and model resolution.
pub mod credentials;

/// Editor capability, selections and the file-backed editor.
pub mod editor;

/// File system utilities.
pub mod fs;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for the credentials store.
pub mod paths;

/// Rewriting selected lines with translated text.
pub mod rewrite;

/// Gemini translation client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt helpers).
pub mod ui;
