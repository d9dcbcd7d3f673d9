use std::collections::{LinkedList, VecDeque};
use std::fmt::{self, Display, Formatter};

use super::{write_joined, Category, PrintIp};

impl<T: Display> PrintIp for [T] {
    const CATEGORY: Category = Category::Sequence;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self)
    }
}

impl<T: Display, const N: usize> PrintIp for [T; N] {
    const CATEGORY: Category = Category::Sequence;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self)
    }
}

impl<T: Display> PrintIp for Vec<T> {
    const CATEGORY: Category = Category::Sequence;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self)
    }
}

impl<T: Display> PrintIp for VecDeque<T> {
    const CATEGORY: Category = Category::Sequence;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self)
    }
}

impl<T: Display> PrintIp for LinkedList<T> {
    const CATEGORY: Category = Category::Sequence;

    fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self)
    }
}
