use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::value::ScalarKind;

/// The value has no dotted rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    UnsupportedTypeShape(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::UnsupportedTypeShape(s) => write!(f, "unsupported type shape: {}", s),
        }
    }
}

impl Error for RenderError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    MissingTag(String),
    MalformedTag(String),
    InvalidLiteral {
        kind: ScalarKind,
        literal: String,
        reason: String,
    },
    Shape(RenderError),
}

impl Display for ValueParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueParseError::MissingTag(s) => write!(f, "missing type tag in `{}`", s),
            ValueParseError::MalformedTag(t) => write!(f, "malformed type tag `{}`", t),
            ValueParseError::InvalidLiteral { kind, literal, reason } => {
                write!(f, "invalid {} literal `{}`: {}", kind, literal, reason)
            }
            ValueParseError::Shape(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ValueParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ValueParseError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderError> for ValueParseError {
    fn from(value: RenderError) -> Self {
        ValueParseError::Shape(value)
    }
}
