//! Text form of [`Value`]: `<tag>:<payload>`.
//!
//! | input                | value                              |
//! |----------------------|------------------------------------|
//! | `i32:0x7F000001`     | `Integer(I32(2130706433))`         |
//! | `str:hello`          | `Str("hello")`                     |
//! | `vec<u8>:10,20,30`   | vector of three `u8`               |
//! | `list:i16:1,i16:2`   | list with tagged elements          |
//! | `tuple<u8>:200,1,0,0`| four slot `u8` tuple               |
//!
//! String payloads are taken verbatim, so `str:a:b` is the string `a:b`;
//! inside containers commas always split elements.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::value::{uniform_kind, Integer, RenderError, Scalar, ScalarKind, SequenceKind, Value, ValueParseError};

const TAG_SEPARATOR: char = ':';
const ITEM_SEPARATOR: char = ',';

enum Container {
    Sequence(SequenceKind),
    Tuple,
}

impl Container {
    fn from_tag(tag: &str) -> Option<Container> {
        match tag {
            "vec" => Some(Container::Sequence(SequenceKind::Vector)),
            "list" => Some(Container::Sequence(SequenceKind::List)),
            "tuple" => Some(Container::Tuple),
            _ => None,
        }
    }

    fn build(self, items: Vec<Scalar>) -> Value {
        match self {
            Container::Sequence(k) => Value::Sequence(k, items),
            Container::Tuple => Value::Tuple(items),
        }
    }
}

fn unsupported(tag: &str) -> ValueParseError {
    RenderError::UnsupportedTypeShape(format!("no dotted rendering for `{}`", tag)).into()
}

/// Splits `vec<i32>` into the container and its declared element kind.
fn container_tag(tag: &str) -> Result<Option<(Container, Option<ScalarKind>)>, ValueParseError> {
    let (base, element) = match tag.split_once('<') {
        Some((base, rest)) => match rest.strip_suffix('>') {
            Some(inner) => (base.trim(), Some(inner.trim())),
            None => return Err(ValueParseError::MalformedTag(tag.to_owned())),
        },
        None => (tag, None),
    };
    let container = match Container::from_tag(base) {
        Some(c) => c,
        None if element.is_some() => return Err(unsupported(tag)),
        None => return Ok(None),
    };
    let element = match element {
        Some(e) => Some(ScalarKind::from_tag(e).ok_or_else(|| unsupported(e))?),
        None => None,
    };
    Ok(Some((container, element)))
}

fn parse_integer(kind: ScalarKind, literal: &str) -> Result<Integer, ValueParseError> {
    let literal = literal.trim();
    let (negative, body) = match literal.strip_prefix('-') {
        Some(b) => (true, b),
        None => (false, literal),
    };
    let (body, radix) = match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) if hex.starts_with(|c: char| c == '-' || c == '+') => {
            return Err(ValueParseError::InvalidLiteral {
                kind,
                literal: literal.to_owned(),
                reason: "sign must precede the hex prefix".to_owned(),
            })
        }
        Some(hex) => (hex, 16),
        None => (body, 10),
    };
    let digits = if negative { format!("-{}", body) } else { body.to_owned() };

    let invalid = |e: std::num::ParseIntError| ValueParseError::InvalidLiteral {
        kind,
        literal: literal.to_owned(),
        reason: e.to_string(),
    };
    match kind {
        ScalarKind::I8 => i8::from_str_radix(&digits, radix).map(Integer::I8).map_err(invalid),
        ScalarKind::I16 => i16::from_str_radix(&digits, radix).map(Integer::I16).map_err(invalid),
        ScalarKind::I32 => i32::from_str_radix(&digits, radix).map(Integer::I32).map_err(invalid),
        ScalarKind::I64 => i64::from_str_radix(&digits, radix).map(Integer::I64).map_err(invalid),
        ScalarKind::I128 => i128::from_str_radix(&digits, radix).map(Integer::I128).map_err(invalid),
        ScalarKind::U8 => u8::from_str_radix(&digits, radix).map(Integer::U8).map_err(invalid),
        ScalarKind::U16 => u16::from_str_radix(&digits, radix).map(Integer::U16).map_err(invalid),
        ScalarKind::U32 => u32::from_str_radix(&digits, radix).map(Integer::U32).map_err(invalid),
        ScalarKind::U64 => u64::from_str_radix(&digits, radix).map(Integer::U64).map_err(invalid),
        ScalarKind::U128 => u128::from_str_radix(&digits, radix).map(Integer::U128).map_err(invalid),
        ScalarKind::Str => Err(ValueParseError::InvalidLiteral {
            kind,
            literal: literal.to_owned(),
            reason: "not an integer type".to_owned(),
        }),
    }
}

fn parse_typed(kind: ScalarKind, literal: &str) -> Result<Scalar, ValueParseError> {
    match kind {
        ScalarKind::Str => Ok(Scalar::Str(literal.to_owned())),
        k => parse_integer(k, literal).map(Scalar::Int),
    }
}

fn parse_tagged(input: &str) -> Result<Scalar, ValueParseError> {
    let (tag, literal) = input
        .split_once(TAG_SEPARATOR)
        .ok_or_else(|| ValueParseError::MissingTag(input.to_owned()))?;
    let tag = tag.trim();
    match ScalarKind::from_tag(tag) {
        Some(kind) => parse_typed(kind, literal),
        None => Err(unsupported(tag)),
    }
}

fn parse_items(payload: &str, element: Option<ScalarKind>) -> Result<Vec<Scalar>, ValueParseError> {
    if payload.is_empty() {
        return Ok(Vec::new());
    }
    payload
        .split(ITEM_SEPARATOR)
        .map(|item| match element {
            Some(kind) => parse_typed(kind, item),
            None => parse_tagged(item),
        })
        .collect()
}

impl FromStr for Value {
    type Err = ValueParseError;

    /// Parses and validates: a value that parses always renders.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, payload) = s
            .split_once(TAG_SEPARATOR)
            .ok_or_else(|| ValueParseError::MissingTag(s.to_owned()))?;
        let value = match container_tag(tag.trim())? {
            Some((container, element)) => container.build(parse_items(payload, element)?),
            None => Value::from(parse_tagged(s)?),
        };
        value.validate()?;
        Ok(value)
    }
}

impl TryFrom<String> for Value {
    type Error = ValueParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Value::from_str(&value)
    }
}

impl From<Value> for String {
    fn from(value: Value) -> Self {
        value.to_string()
    }
}

/// The `<kind>` shorthand only when its payload splits back into `items`:
/// a lone empty string would read as no items at all.
fn shorthand_kind(items: &[Scalar]) -> Option<ScalarKind> {
    let kind = uniform_kind(items).ok().flatten()?;
    let splits_back = match items {
        [Scalar::Str(s)] => !s.is_empty(),
        _ => true,
    };
    splits_back.then_some(kind)
}

// Strings holding ',' have no text form inside a container, tagged or not.
fn write_items(f: &mut Formatter<'_>, tag: &str, items: &[Scalar]) -> fmt::Result {
    let shared = shorthand_kind(items);
    match shared {
        Some(kind) => write!(f, "{}<{}>{}", tag, kind, TAG_SEPARATOR)?,
        None => write!(f, "{}{}", tag, TAG_SEPARATOR)?,
    }
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", ITEM_SEPARATOR)?;
        }
        match shared {
            Some(..) => write!(f, "{}", item)?,
            None => write!(f, "{}{}{}", item.kind(), TAG_SEPARATOR, item)?,
        }
    }
    Ok(())
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}{}{}", i.kind(), TAG_SEPARATOR, i),
            Value::Str(s) => write!(f, "{}{}{}", ScalarKind::Str, TAG_SEPARATOR, s),
            Value::Sequence(kind, items) => write_items(f, kind.tag(), items),
            Value::Tuple(items) => write_items(f, "tuple", items),
        }
    }
}
