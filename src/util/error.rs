use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid arguments: {0}")]
    Usage(String),

    #[error("{context} ({source})")]
    Io {
        context: String,
        #[source]
        source: io::Error
    },

    /// The external binary could not be started at all
    #[error("Could not launch '{program}' ({source})")]
    Launch {
        program: String,
        #[source]
        source: io::Error
    },

    /// The external binary ran, but its exit status indicates failure
    #[error("Exit code indicates failure of '{program}' ({})", describe_code(.code))]
    ExternalTool {
        program: String,
        code: Option<i32>
    },

    #[error("'{program}' did not finish within {seconds} seconds and was stopped")]
    TimedOut {
        program: String,
        seconds: u64
    },

    #[error("Refusing to drop '{0}': dropping is only available for 'test' and 'copy' databases, production databases can only be dropped manually")]
    SafetyGuard(String)
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => String::from("terminated by signal")
    }
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 1,
            Error::Usage(_) => 2,
            _ => 3
        }
    }
}
