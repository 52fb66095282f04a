use crate::IntoExitCode;
use read_inputs::InputError;
use std::path::PathBuf;
use std::process::{ExitCode, ExitStatus};

/// Exit code for problems with how the wrapper was called.
pub const USAGE_EXIT_CODE: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum WrapError {
    #[error(
        "The MEGAHIT binary {path:?} does not exist or is empty. \
         Use --megahit to give the path of the assembler."
    )]
    MissingBinary { path: PathBuf },

    #[error("MEGAHIT failed ({status}): {cmd}")]
    CommandFailed { cmd: String, status: ExitStatus },
}

/// True if `err` was caused by bad arguments or missing inputs rather than
/// by a failure while running MEGAHIT.
pub fn is_usage_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.is::<InputError>()
            || matches!(
                cause.downcast_ref::<WrapError>(),
                Some(WrapError::MissingBinary { .. })
            )
    })
}

/// The process exit code to report for `err`.
/// A failed assembler run passes its own exit code through.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    if is_usage_error(err) {
        return ExitCode::from(USAGE_EXIT_CODE);
    }
    match err.downcast_ref::<WrapError>() {
        Some(WrapError::CommandFailed { status, .. }) => status.into_exit_code(),
        _ => ExitCode::FAILURE,
    }
}
