use std::path::PathBuf;

use clap::Parser;

use crate::domain::student::StudentField;

/// Load the study-circle roster and search it
#[derive(Debug, Parser)]
#[command(name = "halaqa", version, about)]
pub struct CliArgs {
    /// Config file (defaults to ./halaqa.toml when present)
    #[arg(long, env = "HALAQA_CONFIG")]
    pub config: Option<PathBuf>,

    /// CSV export URL, overriding the configured sheet
    #[arg(long)]
    pub csv_url: Option<String>,

    /// Read a local CSV export instead of fetching
    #[arg(long, conflicts_with = "csv_url")]
    pub input: Option<PathBuf>,

    /// Search across every column
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Column filter as KEY=VALUE, e.g. teacher=أحمد (repeatable)
    #[arg(long = "filter", value_parser = parse_column_filter)]
    pub filters: Vec<(StudentField, String)>,

    /// Write matching records to this CSV file instead of printing JSON
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the distinct values of one column and exit
    #[arg(long)]
    pub distinct: Option<StudentField>,
}

fn parse_column_filter(raw: &str) -> Result<(StudentField, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", raw))?;
    let field = key.parse::<StudentField>().map_err(|e| e.to_string())?;
    Ok((field, value.to_string()))
}
