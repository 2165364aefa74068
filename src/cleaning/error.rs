use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed delimited input: {0}")]
    Format(String),

    #[error("missing required column: {0}")]
    MissingColumn(String),
}

impl From<csv::Error> for CleanError {
    fn from(err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            // Corrupt compression and truncated streams surface through the
            // csv layer as wrapped I/O errors of these kinds; anything else
            // io-flavored is a genuine device/filesystem failure.
            csv::ErrorKind::Io(io_err) => match io_err.kind() {
                io::ErrorKind::InvalidInput
                | io::ErrorKind::InvalidData
                | io::ErrorKind::UnexpectedEof => CleanError::Format(io_err.to_string()),
                _ => CleanError::Io(io_err),
            },
            _ => CleanError::Format(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
