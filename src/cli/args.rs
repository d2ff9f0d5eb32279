use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::editor::{Position, Selection};

#[derive(Parser, Debug)]
#[command(name = "commenti")]
#[command(about = "Translate Persian source comments to English with Gemini")]
#[command(
    long_about = "Translate Persian source comments to English with Gemini.\n\n\
                  The selected lines are sent to Gemini and each one is replaced with \
                  \"// \" followed by its translation. Without FILE, only the API key \
                  and model are set up."
)]
#[command(version)]
pub struct Args {
    /// File containing the comments to translate
    pub file: Option<PathBuf>,

    /// Lines to translate, 1-based and inclusive (e.g. 12, 12-18, 12:5-18:1)
    #[arg(short = 'l', long, value_name = "START[-END]")]
    pub lines: Option<LineSpan>,

    /// Rewrite the file in place instead of printing the result
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Suppress informational messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Forget the stored Gemini API key and model
    Reset {
        /// Do not ask for confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Show the stored credentials (the key is never printed)
    Credentials,
    /// List the selectable Gemini models
    Models,
}

/// A 1-based, inclusive line span as typed on the command line.
///
/// Accepted forms: `LINE`, `LINE:COL`, `START-END`, `START:COL-END:COL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl LineSpan {
    /// Zero-based editor selection for this span.
    pub fn to_selection(self) -> Selection {
        let to_position = |(line, column): (usize, usize)| Position::new(line - 1, column - 1);
        Selection::new(to_position(self.start), to_position(self.end))
    }
}

impl FromStr for LineSpan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (parse_point(start)?, parse_point(end)?),
            None => {
                let point = parse_point(s)?;
                (point, point)
            }
        };
        Ok(Self { start, end })
    }
}

fn parse_point(s: &str) -> Result<(usize, usize), String> {
    let (line, column) = s.trim().split_once(':').unwrap_or((s.trim(), "1"));
    Ok((parse_one_based(line, "line")?, parse_one_based(column, "column")?))
}

fn parse_one_based(s: &str, what: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(format!("{what} numbers start at 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid {what} number: '{s}'")),
    }
}
