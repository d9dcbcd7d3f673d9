use std::fmt::{self, Formatter};

use super::{write_joined, Category, PrintIp};

// Bytes come out most significant first; signed values keep their two's
// complement pattern, so -1i8 renders as 255.
macro_rules! impl_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl PrintIp for $int {
                const CATEGORY: Category = Category::Integer;

                fn write_dotted(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write_joined(f, self.to_be_bytes())
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
