use chrono::NaiveDate;
use habitline_core::{days_since, format_days, HabitCollection, Quote};
use owo_colors::{OwoColorize, Stream::Stdout};
use std::io::Write;

/// Login name for the greeting, falling back to `friend`.
pub fn username() -> String {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "friend".to_string())
}

pub fn render<W: Write>(
    out: &mut W,
    user: &str,
    habits: &HabitCollection,
    quote: &Quote,
    today: NaiveDate,
) -> std::io::Result<()> {
    let greeting = format!("Hello {user}");
    writeln!(
        out,
        "{}",
        greeting.if_supports_color(Stdout, |text| text.magenta())
    )?;
    writeln!(out)?;
    writeln!(out, "You are:")?;

    for habit in &habits.habits {
        let days = format_days(days_since(habit.start_date, today));
        writeln!(
            out,
            "  {} without {}",
            days.if_supports_color(Stdout, |text| text.green()),
            habit.name
        )?;
        for reason in &habit.reasons {
            writeln!(
                out,
                "      - {}",
                reason
                    .description
                    .if_supports_color(Stdout, |text| text.dimmed())
            )?;
        }
    }

    writeln!(out)?;
    let content = format!("\"{}\"", quote.content);
    writeln!(
        out,
        "{}",
        content.if_supports_color(Stdout, |text| text.italic())
    )?;
    writeln!(
        out,
        "    - {}",
        quote.name.if_supports_color(Stdout, |text| text.cyan())
    )?;
    Ok(())
}
