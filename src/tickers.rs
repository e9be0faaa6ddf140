//! Ticker symbol ↔ company display name resolution.
//!
//! The mapping is a small fixed table. Lookups in both directions are
//! case-insensitive, and neither direction can fail: unknown company names
//! resolve to no ticker, unknown tickers are displayed as themselves.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Marker shown in place of a ticker for company names we cannot resolve.
pub const UNKNOWN_TICKER: &str = "N/A";

/// Known tickers and the company names used in headings and prompts.
pub const TICKER_COMPANIES: &[(&str, &str)] = &[
    ("AAPL", "Apple"),
    ("TSLA", "Tesla"),
    ("NESN", "Nestlé"),
    ("MSFT", "Microsoft"),
    ("AMZN", "Amazon"),
    ("GOOGL", "Alphabet"),
    ("META", "Meta"),
    ("NVDA", "Nvidia"),
    ("NFLX", "Netflix"),
];

static BY_TICKER: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TICKER_COMPANIES.iter().copied().collect());

// keyed by lowercased company name
static BY_COMPANY: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    TICKER_COMPANIES
        .iter()
        .map(|(ticker, company)| (company.to_lowercase(), *ticker))
        .collect()
});

/// A ticker paired with the company name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub ticker: String,
    pub name: String,
}

impl Company {
    /// Build an entry from a ticker symbol, looking up its display name.
    pub fn from_ticker(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: resolve_company_name(ticker),
        }
    }

    /// Build an entry from a company name, looking up its ticker.
    pub fn from_name(name: &str) -> Self {
        Self {
            ticker: resolve_ticker(name).unwrap_or(UNKNOWN_TICKER).to_string(),
            name: name.to_string(),
        }
    }
}

/// Find the ticker for a company name (exact match, ignoring case).
pub fn resolve_ticker(company: &str) -> Option<&'static str> {
    BY_COMPANY.get(&company.to_lowercase()).copied()
}

/// Find the display name for a ticker, or echo the uppercased ticker back.
pub fn resolve_company_name(ticker: &str) -> String {
    let upper = ticker.to_uppercase();
    match BY_TICKER.get(upper.as_str()) {
        Some(name) => (*name).to_string(),
        None => upper,
    }
}
