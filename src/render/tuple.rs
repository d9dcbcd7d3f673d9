use std::fmt::{self, Display, Formatter};

use super::{write_joined, Category, PrintIp};

// Expands to the shared slot type, whatever the index.
macro_rules! slot {
    ($idx:tt) => {
        T
    };
}

// Every slot is bound to the same `T`: a tuple mixing slot types has no
// implementation and fails to compile at the call site.
macro_rules! impl_tuple {
    ($($idx:tt)+) => {
        impl<T: Display> PrintIp for ($(slot!($idx),)+) {
            const CATEGORY: Category = Category::Tuple;

            fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write_joined(f, [$(&self.$idx),+])
            }
        }
    };
}

impl_tuple!(0);
impl_tuple!(0 1);
impl_tuple!(0 1 2);
impl_tuple!(0 1 2 3);
impl_tuple!(0 1 2 3 4);
impl_tuple!(0 1 2 3 4 5);
impl_tuple!(0 1 2 3 4 5 6);
impl_tuple!(0 1 2 3 4 5 6 7);
impl_tuple!(0 1 2 3 4 5 6 7 8);
impl_tuple!(0 1 2 3 4 5 6 7 8 9);
impl_tuple!(0 1 2 3 4 5 6 7 8 9 10);
impl_tuple!(0 1 2 3 4 5 6 7 8 9 10 11);
