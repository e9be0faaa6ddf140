//! Resolve which companies to report on.
//!
//! Sources are tried in order and the first one that yields anything wins:
//! a CSV file of ticker symbols, then company names given on the command
//! line, then a fixed default list.

use crate::error::BriefError;
use crate::tickers::Company;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Companies reported on when neither a tickers file nor arguments are given.
pub const DEFAULT_COMPANIES: &[&str] = &["Apple", "Tesla", "Nestlé"];

/// Read every non-empty cell of a header-less CSV file as a ticker symbol.
///
/// Rows may have any number of columns. Returns `Ok(None)` when the file does
/// not exist or contains no tickers.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn read_tickers_from_csv(path: &Path) -> Result<Option<Vec<String>>, BriefError> {
    if !path.exists() {
        debug!("Tickers file not found");
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut tickers = Vec::new();
    for record in reader.records() {
        let record = record?;
        tickers.extend(
            record
                .iter()
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string),
        );
    }

    Ok(if tickers.is_empty() { None } else { Some(tickers) })
}

/// Build the ordered list of companies to process.
pub fn load_companies(tickers_file: &Path, args: &[String]) -> Vec<Company> {
    match read_tickers_from_csv(tickers_file) {
        Ok(Some(tickers)) => {
            info!(count = tickers.len(), path = %tickers_file.display(), "Loaded tickers from file");
            return tickers.iter().map(|t| Company::from_ticker(t)).collect();
        }
        Ok(None) => {}
        Err(e) => {
            warn!(path = %tickers_file.display(), error = %e, "Could not read tickers file; ignoring it");
        }
    }

    if !args.is_empty() {
        info!(count = args.len(), "Using company names from arguments");
        return args.iter().map(|c| Company::from_name(c.trim())).collect();
    }

    info!("Using default company list");
    DEFAULT_COMPANIES
        .iter()
        .map(|c| Company::from_name(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn fixture_file(name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("stock_news_brief_input_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn missing_file() -> PathBuf {
        std::env::temp_dir().join("stock_news_brief_definitely_missing.csv")
    }

    #[test]
    fn test_reads_one_ticker_per_line() {
        let path = fixture_file("one_per_line.csv", "AAPL\nTSLA\n");
        let tickers = read_tickers_from_csv(&path).unwrap();
        assert_eq!(tickers, Some(vec!["AAPL".to_string(), "TSLA".to_string()]));
    }

    #[test]
    fn test_reads_every_column_and_trims() {
        let path = fixture_file("columns.csv", " AAPL , MSFT\n\n,NVDA,  \nibm\n");
        let tickers = read_tickers_from_csv(&path).unwrap().unwrap();
        assert_eq!(tickers, vec!["AAPL", "MSFT", "NVDA", "ibm"]);
    }

    #[test]
    fn test_blank_file_yields_none() {
        let path = fixture_file("blank.csv", "\n , \n");
        assert_eq!(read_tickers_from_csv(&path).unwrap(), None);
    }

    #[test]
    fn test_missing_file_yields_none() {
        assert_eq!(read_tickers_from_csv(&missing_file()).unwrap(), None);
    }

    #[test]
    fn test_file_takes_precedence_over_args() {
        let path = fixture_file("precedence.csv", "AAPL\nTSLA\nxyz\n");
        let companies = load_companies(&path, &["Microsoft".to_string()]);
        let pairs: Vec<(&str, &str)> = companies
            .iter()
            .map(|c| (c.ticker.as_str(), c.name.as_str()))
            .collect();
        assert_eq!(pairs, vec![("AAPL", "Apple"), ("TSLA", "Tesla"), ("xyz", "XYZ")]);
    }

    #[test]
    fn test_empty_file_falls_through_to_args() {
        let path = fixture_file("empty.csv", "");
        let args = vec![" Microsoft ".to_string(), "Acme".to_string(), "Microsoft".to_string()];
        let companies = load_companies(&path, &args);
        assert_eq!(
            companies,
            vec![
                Company {
                    ticker: "MSFT".into(),
                    name: "Microsoft".into(),
                },
                Company {
                    ticker: "N/A".into(),
                    name: "Acme".into(),
                },
                Company {
                    ticker: "MSFT".into(),
                    name: "Microsoft".into(),
                },
            ]
        );
    }

    #[test]
    fn test_malformed_file_falls_through_to_args() {
        let path = fixture_file("invalid_utf8.csv", b"AAPL\n\xff\xfe\n");
        assert!(matches!(read_tickers_from_csv(&path), Err(BriefError::Csv(_))));

        let companies = load_companies(&path, &["Microsoft".to_string()]);
        assert_eq!(
            companies,
            vec![Company {
                ticker: "MSFT".into(),
                name: "Microsoft".into(),
            }]
        );
    }

    #[test]
    fn test_defaults_when_nothing_given() {
        let companies = load_companies(&missing_file(), &[]);
        let names: Vec<&str> = companies.iter().map(|c| c.name.as_str()).collect();
        let tickers: Vec<&str> = companies.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Tesla", "Nestlé"]);
        assert_eq!(tickers, vec!["AAPL", "TSLA", "NESN"]);
    }
}
