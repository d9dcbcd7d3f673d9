use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub struct NotFoundPath {
    inner: String
}

#[derive(Debug)]
pub struct DirPath {
    inner: String
}

impl Display for NotFoundPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<String> for NotFoundPath {
    fn from(value: String) -> Self {
        Self { inner: value }
    }
}

impl Display for DirPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<String> for DirPath {
    fn from(value: String) -> Self {
        Self { inner: value }
    }
}

/// Failure while loading or writing a configuration file.
#[derive(Debug)]
pub enum ParseError {
    IOError(std::io::Error),
    SerdeJsonError(serde_json::Error),
    SerdeTomlError(toml::de::Error),
    SerdeYamlError(serde_yml::Error),
    FileNotFound(NotFoundPath),
    PathIsDirectory(DirPath),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IOError(e) => write!(f, "{}", e),
            ParseError::SerdeJsonError(e) => write!(f, "json: {}", e),
            ParseError::SerdeTomlError(e) => write!(f, "toml: {}", e),
            ParseError::SerdeYamlError(e) => write!(f, "yaml: {}", e),
            ParseError::FileNotFound(p) => write!(f, "no such file or directory: {}", p),
            ParseError::PathIsDirectory(p) => write!(f, "specified path is a directory: {}", p),
        }
    }
}

impl Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(value: std::io::Error) -> Self {
        ParseError::IOError(value)
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(value: serde_json::Error) -> Self {
        ParseError::SerdeJsonError(value)
    }
}

impl From<toml::de::Error> for ParseError {
    fn from(value: toml::de::Error) -> Self {
        ParseError::SerdeTomlError(value)
    }
}

impl From<serde_yml::Error> for ParseError {
    fn from(value: serde_yml::Error) -> Self {
        ParseError::SerdeYamlError(value)
    }
}
