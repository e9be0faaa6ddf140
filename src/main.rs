//! # Stock News Brief
//!
//! Fetches recent news about a list of stock tickers, keeps only credible and
//! recent articles, asks an LLM for an investor-facing summary of each one and
//! prints the result as Markdown on stdout.
//!
//! ## Usage
//!
//! ```sh
//! export SERPAPI_API_KEY=... OPENAI_API_KEY=...
//! stock_news_brief                 # tickers.csv, or Apple/Tesla/Nestlé
//! stock_news_brief Apple Netflix   # company names
//! ```
//!
//! ## Architecture
//!
//! The application is a single sequential pipeline:
//! 1. **Input**: resolve (ticker, company) pairs from file, arguments or defaults
//! 2. **Search**: query the news search API and filter by source and recency
//! 3. **Summarize**: one chat-completion request per article
//! 4. **Output**: print each summary, pausing between companies

use clap::Parser;
use reqwest::Client;
use std::error::Error;
use tracing::{debug, info, warn};

mod api;
mod cli;
mod error;
mod input;
mod models;
mod outputs;
mod pipeline;
mod search;
mod tickers;
mod utils;

use api::ChatClient;
use cli::Cli;
use pipeline::Pipeline;
use search::SearchClient;
use utils::{init_tracing, report_date};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let dotenv = dotenvy::dotenv();
    init_tracing();

    let start_time = std::time::Instant::now();
    info!("stock_news_brief starting up");
    if let Ok(path) = dotenv {
        debug!(path = %path.display(), "Loaded .env file");
    }

    let args = Cli::parse();
    debug!(tickers_file = %args.tickers_file.display(), companies = ?args.companies, "Parsed CLI arguments");

    if args.serpapi_api_key.is_empty() {
        warn!("SERPAPI_API_KEY is not set; news searches will fail");
    }
    if args.openai_api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; summaries will fail");
    }

    let companies = input::load_companies(&args.tickers_file, &args.companies);
    info!(count = companies.len(), "Resolved companies");

    let http = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let search = SearchClient::new(http.clone(), args.search_endpoint, args.serpapi_api_key);
    let chat = ChatClient::new(http, args.chat_endpoint, args.openai_api_key);
    let pipeline = Pipeline::new(search, chat);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let stats = pipeline.run(&companies, report_date(), &mut out).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        companies = stats.companies,
        summarized = stats.summarized,
        skipped = stats.skipped,
        failed = stats.failed,
        "Execution complete"
    );

    Ok(())
}
