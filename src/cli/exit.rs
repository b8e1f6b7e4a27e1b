//! Process exit codes derived from the error that ended the run.

use exitcode::ExitCode;

use crate::config::ConfigError;
use crate::deepl::ApiError;

pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    if let Some(api_error) = err.downcast_ref::<ApiError>() {
        return match api_error {
            ApiError::Transport { .. } => exitcode::UNAVAILABLE,
            ApiError::Status { .. } => exitcode::PROTOCOL,
            ApiError::Decode(_) => exitcode::DATAERR,
            ApiError::EmptyInput => exitcode::NOINPUT,
        };
    }

    if err.downcast_ref::<ConfigError>().is_some() {
        return exitcode::CONFIG;
    }

    if err.chain().any(|cause| cause.is::<std::io::Error>()) {
        return exitcode::IOERR;
    }

    exitcode::SOFTWARE
}
