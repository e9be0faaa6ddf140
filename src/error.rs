//! Error types shared by the search, summarization and input layers.
//!
//! None of these errors reach the process boundary during a normal run: the
//! fetcher and summarizer log them and fall back to "no articles" or a failed
//! summary, and the input loader falls through to the next ticker source.

use thiserror::Error;

/// Errors raised while talking to the search/LLM APIs or reading input.
#[derive(Debug, Error)]
pub enum BriefError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{api} returned status {status}: {body}")]
    Status {
        /// Which API produced the response ("search" or "chat").
        api: &'static str,
        /// HTTP status code.
        status: u16,
        /// Truncated response body, for logging.
        body: String,
    },

    /// The response body was not the JSON shape we expect.
    #[error("malformed {api} response: {source}")]
    Decode {
        api: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A chat completion came back without any message content.
    #[error("chat completion contained no choices")]
    EmptyCompletion,

    /// The tickers file could not be parsed as CSV.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The tickers file could not be opened.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
