//! The demonstration set printed by `printIp --demo`.

use std::collections::LinkedList;
use std::io::{self, Write};

use crate::render::write_ip;

pub fn write_demo<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write_ip(out, &-1i8)?;
    write_ip(out, &0i16)?;
    write_ip(out, &2130706433i32)?;
    write_ip(out, &8875824491850138409i64)?;
    write_ip(out, "Hello, World!")?;
    write_ip(out, &vec![100, 200, 300, 400])?;
    write_ip(out, &LinkedList::from([400, 300, 200, 100]))?;
    write_ip(out, &(123, 456, 789, 0))?;
    Ok(())
}
