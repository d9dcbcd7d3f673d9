use std::error::Error;
use std::fmt::{Display, Formatter};
#[cfg(not(feature = "log"))]
use crate::error;
#[cfg(feature = "log")]
use log::error;
use crate::parse::ParseError;
use crate::value::{RenderError, ValueParseError};

#[derive(Debug)]
pub enum RuntimeError {
    NoSuchFile(String),
    PathIsDirectory(String),
    IOError(String),
    ParseError(String),
    NoConfig,
    InvalidValue(String, ValueParseError),
    ShapeError(RenderError),
}

impl RuntimeError {
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    pub fn print_error(&self) {
        match self {
            RuntimeError::NoSuchFile(p) => error!("no such file or directory: {}", p),
            RuntimeError::PathIsDirectory(p) => error!("specified path is a directory: {}", p),
            RuntimeError::IOError(e) => error!("i/o error: {}", e),
            RuntimeError::ParseError(e) => error!("parse error: {}", e),
            RuntimeError::NoConfig => error!("no configuration found"),
            RuntimeError::InvalidValue(v, e) => error!("invalid value `{}`: {}", v, e),
            RuntimeError::ShapeError(e) => error!("{}", e),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::NoSuchFile(..) => 1,
            RuntimeError::IOError(..) => 3,
            RuntimeError::ParseError(..) => 4,
            RuntimeError::NoConfig => 5,
            RuntimeError::InvalidValue(..) => 6,
            RuntimeError::ShapeError(..) => 7,
            RuntimeError::PathIsDirectory(..) => 8,
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for RuntimeError {}

impl From<ParseError> for RuntimeError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::IOError(e) => RuntimeError::IOError(e.to_string()),
            ParseError::SerdeJsonError(e) => RuntimeError::ParseError(e.to_string()),
            ParseError::SerdeTomlError(e) => RuntimeError::ParseError(e.to_string()),
            ParseError::SerdeYamlError(e) => RuntimeError::ParseError(e.to_string()),
            ParseError::FileNotFound(p) => RuntimeError::NoSuchFile(p.to_string()),
            ParseError::PathIsDirectory(p) => RuntimeError::PathIsDirectory(p.to_string()),
        }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        RuntimeError::IOError(value.to_string())
    }
}

impl From<RenderError> for RuntimeError {
    fn from(value: RenderError) -> Self {
        RuntimeError::ShapeError(value)
    }
}
