//! Plain text rendering of a sequence: every value followed by a single space, then a newline.

use std::fmt::{Display, Write as _};
use std::io;

pub fn render<T: Display>(v: &[T]) -> String {
    let mut out = String::new();
    for val in v {
        // Writing into a String can't fail.
        let _ = write!(out, "{val} ");
    }
    out.push('\n');

    out
}

pub fn write_array<W, T>(out: &mut W, v: &[T]) -> io::Result<()>
where
    W: io::Write,
    T: Display,
{
    out.write_all(render(v).as_bytes())
}
