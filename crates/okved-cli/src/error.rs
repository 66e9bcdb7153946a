use anyhow::Error;
use okved_config::ConfigError;
use okved_core::CoreError;
use okved_source::SourceError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_REJECTED: u8 = 2;
pub const EXIT_FAILURE: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

/// Rejections (bad phone, no match) print `false: ...`, anything else `Error: ...`.
pub fn report_error(err: &Error, verbose: bool) {
    if is_rejection(err) {
        println!("false: {}", err);
    } else if verbose {
        println!("Error: {:#}", err);
    } else {
        println!("Error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    if is_rejection(err) {
        return ExitCode::from(EXIT_REJECTED);
    }
    ExitCode::from(EXIT_FAILURE)
}

fn is_rejection(err: &Error) -> bool {
    for cause in err.chain() {
        if cause.downcast_ref::<CoreError>().is_some() {
            return true;
        }
        if let Some(source_err) = cause.downcast_ref::<SourceError>() {
            return matches!(source_err, SourceError::Core(_));
        }
        if cause.downcast_ref::<ConfigError>().is_some() {
            return false;
        }
    }
    false
}
