//! Dotted rendering of values, dispatched on the value's type at compile time.
//!
//! Every supported shape has its own [`PrintIp`] implementation: integers are
//! split into big-endian bytes, strings are written verbatim, sequences and
//! homogeneous tuples have their elements joined by `'.'`.
//!
//! ```
//! use print_ip::render;
//!
//! assert_eq!(render(&0x7F000001i32), "127.0.0.1\n");
//! assert_eq!(render(&vec![1, 2, 3, 4]), "1.2.3.4\n");
//! assert_eq!(render("test"), "test\n");
//! assert_eq!(render(&(100, 200, 300, 400)), "100.200.300.400\n");
//! ```
//!
//! Shapes without a rendering are rejected by the compiler. Booleans are not
//! integers here:
//!
//! ```compile_fail
//! print_ip::render(&true);
//! ```
//!
//! and tuples must carry a single slot type:
//!
//! ```compile_fail
//! print_ip::render(&(1i32, String::from("x")));
//! ```
//!
//! ```compile_fail
//! print_ip::render(&(1u8, 2u16, 3u8, 4u8));
//! ```
//!
//! The empty tuple has no slots to share a type and is rejected as well:
//!
//! ```compile_fail
//! print_ip::render(&());
//! ```

mod integer;
mod sequence;
mod text;
mod tuple;

#[cfg(not(feature = "log"))]
use crate::debug;
#[cfg(feature = "log")]
use log::debug;
use std::fmt::{self, Display, Formatter, Write as _};
use std::io::{self, Write};

pub const SEPARATOR: char = '.';

/// Shape classification picking the rendering rule of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    String,
    Sequence,
    Tuple,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Integer => "integer",
            Category::String => "string",
            Category::Sequence => "sequence",
            Category::Tuple => "tuple",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that has a dotted rendering.
pub trait PrintIp {
    const CATEGORY: Category;

    /// Writes the joined representation, without the trailing newline.
    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

impl<T: PrintIp + ?Sized> PrintIp for &T {
    const CATEGORY: Category = T::CATEGORY;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).write_dotted(f)
    }
}

/// `Display` adapter over [`PrintIp::write_dotted`].
pub struct Dotted<'a, T: ?Sized>(pub &'a T);

impl<T: PrintIp + ?Sized> Display for Dotted<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.write_dotted(f)
    }
}

pub fn to_dotted<T: PrintIp + ?Sized>(value: &T) -> String {
    Dotted(value).to_string()
}

/// Renders `value` as a single line, newline included.
pub fn render<T: PrintIp + ?Sized>(value: &T) -> String {
    let mut line = to_dotted(value);
    line.push('\n');
    line
}

pub fn write_ip<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: PrintIp + ?Sized,
{
    debug!("rendering {} value", T::CATEGORY);
    writeln!(out, "{}", Dotted(value))
}

/// Writes the rendering of `value` to stdout, holding the lock for the whole line.
pub fn print_ip<T: PrintIp + ?Sized>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_ip(&mut lock, value)
}

pub(crate) fn write_joined<I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_char(SEPARATOR)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
