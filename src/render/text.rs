use std::borrow::Cow;
use std::fmt::{self, Formatter};

use super::{Category, PrintIp};

impl PrintIp for str {
    const CATEGORY: Category = Category::String;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl PrintIp for String {
    const CATEGORY: Category = Category::String;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl PrintIp for Cow<'_, str> {
    const CATEGORY: Category = Category::String;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}
