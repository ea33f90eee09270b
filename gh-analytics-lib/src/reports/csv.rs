use super::Leaderboard;
use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

pub fn generate<W: Write>(board: &Leaderboard, writer: &mut W) -> Result<()> {
    write!(writer, "rank,id,{}", board.subject.name_label())?;
    for column in board.columns() {
        write!(writer, ",{}", column.key())?;
    }
    writeln!(writer)?;

    for (rank, entry) in board.ranked() {
        write!(writer, "{rank},{},{}", escape_csv(&entry.id), escape_csv(&entry.name))?;
        for (_, value) in &entry.values {
            write!(writer, ",{value}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}
