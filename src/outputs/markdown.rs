//! Markdown fragments of the news brief.
//!
//! Each function returns a complete fragment including its trailing blank
//! line, so the driver can write them back to back.

use crate::tickers::Company;
use chrono::NaiveDate;

pub const NO_NEWS_PLACEHOLDER: &str = "_No relevant news found._";
pub const SEPARATOR: &str = "---";

/// Top-level heading carrying the report date.
pub fn report_header(date: NaiveDate) -> String {
    format!("\n# News Summary ({})\n\n", date.format("%Y-%m-%d"))
}

/// Second-level heading for one company.
pub fn company_heading(company: &Company) -> String {
    format!("## {} ({})\n\n", company.name, company.ticker)
}

/// Line printed when a company has no usable articles.
pub fn no_news() -> String {
    format!("{NO_NEWS_PLACEHOLDER}\n\n")
}

/// One summary block followed by its separator.
pub fn summary_block(text: &str) -> String {
    format!("{text}\n\n{SEPARATOR}\n\n")
}
