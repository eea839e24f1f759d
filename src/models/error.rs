use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// A dataset file could not be parsed (missing header, malformed row).
    ParserError(String),
    /// A dataset file could not be opened or read.
    IoError(std::io::Error),
    /// A query parameter was missing or of the wrong type.
    InvalidArgument(String),
}

impl Error {
    /// Whether this error should abort startup rather than reject a single request.
    pub fn is_fatal_load_error(&self) -> bool {
        matches!(self, Error::ParserError(_) | Error::IoError(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
