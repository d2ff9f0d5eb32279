use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Turns a cancelled prompt into `Ok(None)`.
///
/// Any other prompt failure (e.g. no TTY) is still an error.
pub fn cancelled_as_none<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}
