use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "habitline",
    about = "Track the habits you are quitting and get a quote a day",
    version
)]
pub struct Cli {
    /// Start tracking a new habit (prompts for a reason)
    #[arg(long, value_name = "NAME", value_parser = non_blank)]
    pub habit: Option<String>,
    /// Directory holding habits.json and quotes.json
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
    /// Log level written to <data-dir>/logs (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

fn non_blank(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("habit name must not be blank".to_string());
    }
    Ok(trimmed.to_string())
}
