//! Command-line interface definitions for Stock News Brief.
//!
//! Credentials and endpoints can be given as flags or environment variables
//! (a `.env` file in the working directory is loaded before parsing).

use crate::api::DEFAULT_CHAT_ENDPOINT;
use crate::search::DEFAULT_SEARCH_ENDPOINT;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Command-line arguments for the Stock News Brief application.
///
/// # Examples
///
/// ```sh
/// # Tickers from ./tickers.csv, or the default companies
/// stock_news_brief
///
/// # Company names on the command line
/// stock_news_brief Apple Microsoft "Acme Corp"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Company names to report on (used when the tickers file is absent or empty)
    pub companies: Vec<String>,

    /// CSV file of ticker symbols, any number per row
    #[arg(short, long, default_value = "tickers.csv")]
    pub tickers_file: PathBuf,

    /// SerpAPI key
    #[arg(long, env = "SERPAPI_API_KEY", default_value = "", hide_env_values = true)]
    pub serpapi_api_key: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// News search endpoint
    #[arg(long, env = "SERPAPI_ENDPOINT", default_value = DEFAULT_SEARCH_ENDPOINT)]
    pub search_endpoint: Url,

    /// Chat-completions endpoint
    #[arg(long, env = "OPENAI_CHAT_ENDPOINT", default_value = DEFAULT_CHAT_ENDPOINT)]
    pub chat_endpoint: Url,
}
