use clap::Parser;
use data::DEFAULT_TOP_LIMIT;
use read::load_rentals;
use std::path::PathBuf;
use tracing::{debug, warn};
use write::format_report;

mod compute;
mod data;
mod locale;
mod read;
mod write;

const DATA_FILE_NAME: &str = "RealEstateDB.csv";

/// Summarize the rental dataset.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Report language
    #[arg(long, default_value = "en", value_parser = ["en", "tr"])]
    lang: String,

    /// Number of most expensive listings to show
    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    top: usize,

    /// CSV file to read; defaults to RealEstateDB.csv next to the executable
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

/// The dataset ships alongside the binary.
fn default_data_file() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

fn main() -> Result<(), anyhow::Error> {
    // stdout carries the report only; diagnostics go to stderr.
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(level)
        .init();

    let args = Args::parse();
    debug!("{args:?}");
    let path = args.file.unwrap_or_else(default_data_file);
    let records = load_rentals(&path)?;
    if records.is_empty() {
        warn!("No listings in {}", path.display());
    }
    println!("{}", format_report(&records, &args.lang, args.top));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Args, DATA_FILE_NAME};
    use crate::write::format_report;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rentals"]).unwrap();
        assert_eq!(args.lang, "en");
        assert_eq!(args.top, 5);
        assert_eq!(args.file, None);
        assert!(super::default_data_file().ends_with(DATA_FILE_NAME));
    }

    #[test]
    fn overrides() {
        let args =
            Args::try_parse_from(["rentals", "--lang", "tr", "--top", "3", "--file", "x.csv"])
                .unwrap();
        assert_eq!(args.lang, "tr");
        assert_eq!(args.top, 3);
        assert_eq!(args.file, Some(PathBuf::from("x.csv")));
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Args::try_parse_from(["rentals", "--lang", "fr"]).is_err());
    }

    #[test]
    fn rejects_negative_top() {
        assert!(Args::try_parse_from(["rentals", "--top", "-2"]).is_err());
    }

    #[test]
    fn parsed_language_reaches_report() {
        let args = Args::try_parse_from(["rentals", "--lang", "tr"]).unwrap();
        assert!(format_report(&[], &args.lang, args.top).starts_with("Kira piyasası özeti\n"));
        let args = Args::try_parse_from(["rentals"]).unwrap();
        assert!(format_report(&[], &args.lang, args.top).starts_with("Rental market summary\n"));
    }
}
