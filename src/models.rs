//! Data models for search results, chat completions and summaries.
//!
//! - [`Article`]: a filtered news result handed to the summarizer
//! - [`SearchResponse`] / [`RawNewsResult`]: the search API's JSON body
//! - [`ChatRequest`] / [`ChatResponse`]: the chat-completions wire format
//! - [`SummaryOutcome`]: what the summarizer decided about one article

use serde::{Deserialize, Serialize};

/// Text printed in place of a summary when the chat API call fails.
pub const SUMMARY_ERROR_TEXT: &str = "Error: Could not summarise article.";

/// A news article that passed the credibility and recency filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub snippet: String,
    /// Publisher name as reported by the search API, lowercased.
    pub source: String,
}

/// Body of a search API response. Only the news results are used.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub news_results: Vec<RawNewsResult>,
}

/// One unfiltered news result. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNewsResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Free-text age such as "2 hours ago" or "3 days ago".
    #[serde(default)]
    pub date: Option<String>,
}

impl RawNewsResult {
    pub fn into_article(self) -> Article {
        Article {
            title: self.title.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
            snippet: self.snippet.unwrap_or_default(),
            source: self.source.unwrap_or_default().to_lowercase(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Result of summarizing a single article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The model's structured summary, trimmed.
    Summary(String),
    /// The model judged the article irrelevant; nothing is printed.
    Skipped,
    /// The chat API call failed; printed as [`SUMMARY_ERROR_TEXT`].
    Failed,
}

impl SummaryOutcome {
    /// Text to print for this outcome, or `None` when it is suppressed.
    pub fn printable(&self) -> Option<&str> {
        match self {
            SummaryOutcome::Summary(text) => Some(text),
            SummaryOutcome::Skipped => None,
            SummaryOutcome::Failed => Some(SUMMARY_ERROR_TEXT),
        }
    }
}
