use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::obj::CoordinateError;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Coordinate(CoordinateError),
    Generic(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(error) => write!(f, "{error}"),
            Error::Coordinate(error) => write!(f, "{error}"),
            Error::Generic(message) => write!(f, "{message}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            Error::Coordinate(error) => Some(error),
            Error::Generic(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CoordinateError> for Error {
    fn from(value: CoordinateError) -> Self {
        Self::Coordinate(value)
    }
}
