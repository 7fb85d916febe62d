use std::fmt;

pub mod forest;

#[derive(Debug)]
pub enum Error {
    /// The artifact is not valid JSON, or its top level is not an object.
    MalformedModel(serde_json::Error),
    /// The artifact could not be read.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedModel(err) => write!(f, "malformed forest model: {err}"),
            Error::Io(err) => write!(f, "could not read forest model: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MalformedModel(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        if value.is_io() {
            Self::Io(value.into())
        } else {
            Self::MalformedModel(value)
        }
    }
}
