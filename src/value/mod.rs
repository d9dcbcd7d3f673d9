//! Runtime-tagged values, for input that only knows its type once parsed.
//!
//! Rendering checks the shape first and then hands the payload to the
//! statically dispatched [`PrintIp`] implementations.

mod error;
mod parsing;

pub use error::{RenderError, ValueParseError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};

use crate::render::{to_dotted, Category, PrintIp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    Str,
}

impl ScalarKind {
    pub fn tag(&self) -> &'static str {
        match self {
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::I128 => "i128",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::U128 => "u128",
            ScalarKind::Str => "str",
        }
    }

    pub fn from_tag(tag: &str) -> Option<ScalarKind> {
        Some(match tag {
            "i8" => ScalarKind::I8,
            "i16" => ScalarKind::I16,
            "i32" => ScalarKind::I32,
            "i64" => ScalarKind::I64,
            "i128" => ScalarKind::I128,
            "u8" => ScalarKind::U8,
            "u16" => ScalarKind::U16,
            "u32" => ScalarKind::U32,
            "u64" => ScalarKind::U64,
            "u128" => ScalarKind::U128,
            "str" => ScalarKind::Str,
            _ => return None,
        })
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An integer together with its width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integer {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
}

// Runs `$body` with `$v` bound to the payload, whatever its width.
macro_rules! with_integer {
    ($int:expr, $v:ident => $body:expr) => {
        match $int {
            Integer::I8($v) => $body,
            Integer::I16($v) => $body,
            Integer::I32($v) => $body,
            Integer::I64($v) => $body,
            Integer::I128($v) => $body,
            Integer::U8($v) => $body,
            Integer::U16($v) => $body,
            Integer::U32($v) => $body,
            Integer::U64($v) => $body,
            Integer::U128($v) => $body,
        }
    };
}

impl Integer {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Integer::I8(..) => ScalarKind::I8,
            Integer::I16(..) => ScalarKind::I16,
            Integer::I32(..) => ScalarKind::I32,
            Integer::I64(..) => ScalarKind::I64,
            Integer::I128(..) => ScalarKind::I128,
            Integer::U8(..) => ScalarKind::U8,
            Integer::U16(..) => ScalarKind::U16,
            Integer::U32(..) => ScalarKind::U32,
            Integer::U64(..) => ScalarKind::U64,
            Integer::U128(..) => ScalarKind::U128,
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        with_integer!(self, v => Display::fmt(v, f))
    }
}

impl PrintIp for Integer {
    const CATEGORY: Category = Category::Integer;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        with_integer!(self, v => v.write_dotted(f))
    }
}

/// Element of a sequence or tuple. Renders in its natural form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    Int(Integer),
    Str(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Int(i) => i.kind(),
            Scalar::Str(..) => ScalarKind::Str,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => Display::fmt(i, f),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

impl From<Integer> for Scalar {
    fn from(value: Integer) -> Self {
        Scalar::Int(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Vector,
    List,
}

impl SequenceKind {
    pub fn tag(&self) -> &'static str {
        match self {
            SequenceKind::Vector => "vec",
            SequenceKind::List => "list",
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(Integer),
    Str(String),
    Sequence(SequenceKind, Vec<Scalar>),
    Tuple(Vec<Scalar>),
}

impl Value {
    /// Checks the shape of the value and returns the category it renders as.
    pub fn validate(&self) -> Result<Category, RenderError> {
        match self {
            Value::Integer(..) => Ok(Category::Integer),
            Value::Str(..) => Ok(Category::String),
            Value::Sequence(kind, items) => {
                uniform_kind(items).map_err(|(a, b)| {
                    RenderError::UnsupportedTypeShape(format!(
                        "{} mixes {} and {} elements",
                        kind.tag(),
                        a,
                        b
                    ))
                })?;
                Ok(Category::Sequence)
            }
            Value::Tuple(items) => match uniform_kind(items) {
                Ok(Some(..)) => Ok(Category::Tuple),
                Ok(None) => Err(RenderError::UnsupportedTypeShape("empty tuple".to_owned())),
                Err((a, b)) => Err(RenderError::UnsupportedTypeShape(format!(
                    "tuple mixes {} and {} slots",
                    a, b
                ))),
            },
        }
    }

    /// Joined representation, without the trailing newline.
    pub fn to_dotted(&self) -> Result<String, RenderError> {
        self.validate()?;
        Ok(match self {
            Value::Integer(i) => to_dotted(i),
            Value::Str(s) => to_dotted(s.as_str()),
            Value::Sequence(_, items) | Value::Tuple(items) => to_dotted(items.as_slice()),
        })
    }

    pub fn render(&self) -> Result<String, RenderError> {
        let mut line = self.to_dotted()?;
        line.push('\n');
        Ok(line)
    }

    /// Writes one line to `out`. Nothing is written when the shape is invalid.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let line = self
            .render()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        out.write_all(line.as_bytes())
    }
}

impl From<Integer> for Value {
    fn from(value: Integer) -> Self {
        Value::Integer(value)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Int(i) => Value::Integer(i),
            Scalar::Str(s) => Value::Str(s),
        }
    }
}

/// Kind shared by all `items`, `None` when empty, or the first mismatching pair.
pub(crate) fn uniform_kind(items: &[Scalar]) -> Result<Option<ScalarKind>, (ScalarKind, ScalarKind)> {
    let mut kinds = items.iter().map(Scalar::kind);
    let first = match kinds.next() {
        Some(k) => k,
        None => return Ok(None),
    };
    match kinds.find(|k| *k != first) {
        Some(other) => Err((first, other)),
        None => Ok(Some(first)),
    }
}
