use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use commenti::cli::commands::{credentials, models, translate};
use commenti::cli::{Args, Command};
use commenti::command::Outcome;
use commenti::{logging, output};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    output::init(output::OutputConfig {
        quiet: args.quiet,
        ..Default::default()
    });
    logging::init(args.verbose);

    match args.command {
        Some(Command::Reset { yes }) => {
            credentials::run_reset(yes)?;
        }
        Some(Command::Credentials) => {
            credentials::print_credentials()?;
        }
        Some(Command::Models) => {
            models::print_models()?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                lines: args.lines,
                write: args.write,
            };
            let outcome = translate::run_translate(options).await?;
            return Ok(exit_code(outcome));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn exit_code(outcome: Outcome) -> ExitCode {
    let code = match outcome {
        Outcome::NoEditor | Outcome::Rewritten(_) => exitcode::OK,
        Outcome::MissingApiKey | Outcome::MissingModel => exitcode::CONFIG,
        Outcome::RequestFailed | Outcome::EmptyTranslation => exitcode::UNAVAILABLE,
    };
    ExitCode::from(code as u8)
}
