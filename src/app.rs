use std::fs::File;
use std::io::BufWriter;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::{distinct_values, RosterFilter, RosterLoader};
use crate::domain::error::Result;
use crate::domain::roster_query::RosterQuery;
use crate::domain::student::Student;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::csv::write_roster_csv;
use crate::infrastructure::sheets::{FileSheetSource, SheetClient, SheetSource};
use crate::interfaces::cli::CliArgs;

pub async fn run() -> Result<()> {
    let _ = dotenvy::dotenv();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init();

    let args = CliArgs::parse();

    let service = match &args.config {
        Some(path) => ConfigService::with_file(path),
        None => ConfigService::new(),
    };
    let mut config = service.load()?;
    if let Some(url) = &args.csv_url {
        config.csv_url = Some(url.clone());
    }

    let source: Box<dyn SheetSource> = match &args.input {
        Some(path) => Box::new(FileSheetSource::new(path)),
        None => Box::new(SheetClient::from_config(&config)?),
    };
    let students = RosterLoader::from_config(source, &config).load().await?;

    if let Some(field) = args.distinct {
        for value in distinct_values(&students, field) {
            println!("{}", value);
        }
        return Ok(());
    }

    let query = RosterQuery {
        global: args.query,
        columns: args.filters.into_iter().collect(),
    };
    let selected: Vec<Student> = RosterFilter::new(&query)
        .apply(&students)
        .into_iter()
        .cloned()
        .collect();
    info!(total = students.len(), matched = selected.len(), "Roster filtered");

    match &args.export {
        Some(path) => {
            let file = File::create(path)?;
            write_roster_csv(&selected, BufWriter::new(file))?;
            info!(path = %path.display(), rows = selected.len(), "Roster exported");
        }
        None => println!("{}", serde_json::to_string_pretty(&selected)?),
    }

    Ok(())
}
