use anyhow::Context;
use chrono::NaiveDate;
use habitline_core::{Habit, Reason};
use std::io::{BufRead, Write};

/// Asks for one reason and builds the habit dated `today`.
///
/// A blank answer records the habit without reasons.
pub fn new_habit<R: BufRead, W: Write>(
    name: String,
    today: NaiveDate,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Habit> {
    write!(output, "Why do you want to quit {name}? ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("reading reason from stdin")?;

    let reasons = match line.trim() {
        "" => Vec::new(),
        description => vec![Reason::new(description)],
    };
    Ok(Habit::new(name, today, reasons))
}
