//! Plain ANSI screen output shared by the menu and the generators

use std::io::{self, Write};

/// Clear the whole screen and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()
}

/// Write `text` line by line with an explicit line ending
///
/// Raw mode disables output post-processing, so callers drawing while the
/// terminal is raw pass `"\r\n"`.
pub fn write_lines<W: Write>(out: &mut W, text: &str, line_ending: &str) -> io::Result<()> {
    for line in text.lines() {
        out.write_all(line.as_bytes())?;
        out.write_all(line_ending.as_bytes())?;
    }
    out.flush()
}
