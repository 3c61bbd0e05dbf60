//! Habitline command-line entry point.
//!
//! # Responsibility
//! - Turn flags and the interactive reason prompt into core inputs.
//! - Validate both documents, then run Habit Store, Quote Rotator and render.
//! - Map any core failure to a diagnostic line, `Aborted.` and exit code 1.

mod args;
mod prompt;
mod render;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use habitline_core::{
    init_logging, resolve_log_level, AppPaths, HabitService, JsonHabitRepository,
    JsonQuoteRepository, QuoteService,
};
use log::error;
use owo_colors::{OwoColorize, Stream::Stderr};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=run module=cli status=error error={err:#}");
            eprintln!(
                "{} {err:#}",
                "error:".if_supports_color(Stderr, |text| text.red())
            );
            eprintln!("Aborted.");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let paths = AppPaths::resolve(cli.data_dir).context("resolving data directory")?;
    let habit_service = HabitService::new(JsonHabitRepository::new(&paths.habits_file));
    let quote_service = QuoteService::new(JsonQuoteRepository::new(&paths.quotes_file));

    // Nothing may be created on disk until both documents are known to be usable.
    habit_service.preflight(cli.habit.is_some())?;
    quote_service.preflight()?;

    let level = resolve_log_level(cli.log_level.as_deref());
    if let Err(err) = init_logging(&level, &paths.log_dir) {
        eprintln!(
            "{} logging disabled: {err}",
            "warning:".if_supports_color(Stderr, |text| text.yellow())
        );
    }

    let today = chrono::Local::now().date_naive();

    let new_habit = match cli.habit {
        Some(name) => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            Some(prompt::new_habit(name, today, &mut stdin.lock(), &mut stdout)?)
        }
        None => None,
    };

    let habits = habit_service.reconcile(new_habit)?;
    let (quote, _) = quote_service.reconcile(today)?;

    let mut stdout = std::io::stdout().lock();
    render::render(&mut stdout, &render::username(), &habits, &quote, today)?;
    stdout.flush()?;
    Ok(())
}
