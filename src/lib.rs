pub mod render;
pub mod value;
pub mod demo;
pub mod logger;
#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod parse;
#[cfg(feature = "cmd")]
pub mod cmd;

pub use render::{print_ip, render, to_dotted, write_ip, Category, Dotted, PrintIp};
pub use value::{Integer, RenderError, Scalar, ScalarKind, SequenceKind, Value, ValueParseError};
