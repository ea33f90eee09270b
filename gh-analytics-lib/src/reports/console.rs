use super::Leaderboard;
use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Write the leaderboard as fixed-width terminal lines.
///
/// ```text
/// top 2 active users:
///   1. username:                          alice| id:          1| activity:          5| ...
/// ```
pub fn generate<W: Write>(board: &Leaderboard, use_colors: bool, writer: &mut W) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}:", board.title.bold())?;
    } else {
        writeln!(writer, "{}:", board.title)?;
    }

    let name_label = board.subject.name_label();
    let name_width = board.subject.name_width();

    for (rank, entry) in board.ranked() {
        let name = format!("{:>name_width$}", entry.name);
        if use_colors {
            write!(writer, "{rank:>3}. {name_label}: {}| id: {:>10}|", name.cyan(), entry.id)?;
        } else {
            write!(writer, "{rank:>3}. {name_label}: {name}| id: {:>10}|", entry.id)?;
        }

        for (column, value) in &entry.values {
            let width = column.width();
            if use_colors {
                let value = format!("{value:>width$}");
                write!(writer, " {}: {}|", column.label(), value.green())?;
            } else {
                write!(writer, " {}: {value:>width$}|", column.label())?;
            }
        }

        writeln!(writer)?;
    }

    Ok(())
}
