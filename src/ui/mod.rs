use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Runs an interactive step. `Ok(None)` means the user cancelled a prompt
/// (Esc or Ctrl+C), wherever it sits in the error chain.
pub fn cancellable<T>(step: impl FnOnce() -> Result<T>) -> Result<Option<T>> {
    match step() {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_cancellation(&err) => {
            // stdout may be a pipe; keep it clean.
            eprintln!();
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn is_cancellation(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<InquireError>(),
            Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
        )
    })
}
