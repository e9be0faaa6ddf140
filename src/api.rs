//! Article summarization through an OpenAI-compatible chat-completions API.
//!
//! # Architecture
//!
//! - [`AskAsync`]: core trait for sending a prompt to an LLM
//! - [`ChatClient`]: the chat-completions implementation of [`AskAsync`]
//! - [`summarize`]: builds the investor prompt for one article and classifies
//!   the answer as a [`SummaryOutcome`]
//!
//! Each article gets exactly one request. A failed request is final for that
//! article and becomes [`SummaryOutcome::Failed`].

use crate::error::BriefError;
use crate::models::{Article, ChatMessage, ChatRequest, ChatResponse, SummaryOutcome};
use crate::utils::truncate_for_log;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};
use url::Url;

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const MAX_TOKENS: u32 = 350;
pub const TEMPERATURE: f64 = 0.3;

/// Reply the model is told to give for articles not worth summarizing.
pub const SKIP_SENTINEL: &str = "Skip (not relevant)";

/// Trait for async LLM interaction.
///
/// Implementors send text to an LLM and return its reply. The summarizer only
/// depends on this trait, so any backend can stand in for the real API.
pub trait AskAsync {
    /// The type of response returned by the LLM.
    type Response;

    /// Send text to the LLM and receive a response.
    async fn ask(&self, text: &str) -> Result<Self::Response, BriefError>;
}

/// Client for a chat-completions endpoint using bearer-token auth.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl ChatClient {
    pub fn new(http: Client, endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint,
            api_key: api_key.into(),
        }
    }
}

impl AskAsync for ChatClient {
    type Response = String;

    #[instrument(level = "info", skip_all)]
    async fn ask(&self, text: &str) -> Result<Self::Response, BriefError> {
        let t0 = Instant::now();
        let request = ChatRequest {
            model: OPENAI_MODEL,
            messages: vec![ChatMessage::user(text)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        let dt = t0.elapsed();
        if !status.is_success() {
            return Err(BriefError::Status {
                api: "chat",
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|source| BriefError::Decode { api: "chat", source })?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(BriefError::EmptyCompletion)?;

        debug!(elapsed_ms = dt.as_millis() as u64, bytes = content.len(), "Chat completion received");
        Ok(content.trim().to_string())
    }
}

/// Build the investor-summary prompt for one article.
pub fn build_prompt(ticker: &str, company: &str, article: &Article) -> String {
    format!(
        r#"
You are a financial news analyst. Summarise the following news article for an investor, using the structure below. Only include information relevant to valuation, strategy, or risk. Ignore articles about price moves or technical analysis.

• Ticker: {ticker}
• Company: {company}
• Title: {title}
• Link: {link}
• Snippet: {snippet}

Structure your answer as:
• Ticker:
• Company:
• Title:
• Link:
• Summary (2–3 bullet points of what happened):
• Category (e.g., earnings, M&A, regulatory, product news, etc.):
• Sentiment (positive/neutral/negative):
• Analyst View (impact on fundamental value: positive/neutral/negative, and why):
• Thesis Check (impact on investment thesis):

If the article is not relevant to valuation, strategy, or risk, reply: "{SKIP_SENTINEL}".
"#,
        title = article.title,
        link = article.link,
        snippet = article.snippet,
    )
}

/// Classify a successful model reply.
pub fn classify_reply(reply: String) -> SummaryOutcome {
    if reply.contains(SKIP_SENTINEL) {
        SummaryOutcome::Skipped
    } else {
        SummaryOutcome::Summary(reply)
    }
}

/// Summarize one article for `ticker`/`company`.
///
/// Never fails: API errors are logged and reported as
/// [`SummaryOutcome::Failed`].
#[instrument(level = "info", skip(asker, article), fields(link = %article.link))]
pub async fn summarize<A>(asker: &A, ticker: &str, company: &str, article: &Article) -> SummaryOutcome
where
    A: AskAsync<Response = String>,
{
    let prompt = build_prompt(ticker, company, article);
    match asker.ask(&prompt).await {
        Ok(reply) => {
            let outcome = classify_reply(reply);
            if outcome == SummaryOutcome::Skipped {
                info!("Model judged article not relevant");
            }
            outcome
        }
        Err(e) => {
            warn!(error = %e, "Summarization failed");
            SummaryOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::POST, MockServer};
    use serde_json::json;

    fn article() -> Article {
        Article {
            title: "Apple expands buyback".into(),
            link: "https://www.reuters.com/business/apple".into(),
            snippet: "Apple said it would buy back more stock.".into(),
            source: "reuters".into(),
        }
    }

    fn client_for(server: &MockServer) -> ChatClient {
        let endpoint = Url::parse(&format!("{}/v1/chat/completions", server.base_url())).unwrap();
        ChatClient::new(Client::new(), endpoint, "test-key")
    }

    fn completion(content: &str) -> String {
        json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    #[test]
    fn test_prompt_mentions_article_and_fields() {
        let prompt = build_prompt("AAPL", "Apple", &article());
        assert!(prompt.contains("• Ticker: AAPL"));
        assert!(prompt.contains("• Company: Apple"));
        assert!(prompt.contains("• Link: https://www.reuters.com/business/apple"));
        assert!(prompt.contains("• Snippet: Apple said it would buy back more stock."));
        assert!(prompt.contains("• Thesis Check (impact on investment thesis):"));
        assert!(prompt.contains(r#"reply: "Skip (not relevant)"."#));
    }

    #[test]
    fn test_classify_reply() {
        assert_eq!(classify_reply("Skip (not relevant)".into()), SummaryOutcome::Skipped);
        assert_eq!(
            classify_reply("Answer: \"Skip (not relevant)\"".into()),
            SummaryOutcome::Skipped
        );
        assert_eq!(
            classify_reply("• Ticker: AAPL".into()),
            SummaryOutcome::Summary("• Ticker: AAPL".into())
        );
    }

    #[tokio::test]
    async fn test_summarize_returns_trimmed_reply() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer test-key");
            then.status(200)
                .header("content-type", "application/json")
                .body(completion("\n  • Ticker: AAPL\n• Sentiment: positive  \n"));
        });

        let outcome = summarize(&client_for(&server), "AAPL", "Apple", &article()).await;
        mock.assert();
        assert_eq!(
            outcome,
            SummaryOutcome::Summary("• Ticker: AAPL\n• Sentiment: positive".into())
        );
    }

    #[tokio::test]
    async fn test_summarize_detects_skip() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).body(completion("Skip (not relevant)"));
        });

        let outcome = summarize(&client_for(&server), "AAPL", "Apple", &article()).await;
        assert_eq!(outcome, SummaryOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_summarize_non_success_is_failed_without_retry() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429).body(r#"{"error": {"message": "rate limited"}}"#);
        });

        let outcome = summarize(&client_for(&server), "AAPL", "Apple", &article()).await;
        mock.assert_calls(1);
        assert_eq!(outcome, SummaryOutcome::Failed);
        assert_eq!(outcome.printable(), Some("Error: Could not summarise article."));
    }

    #[tokio::test]
    async fn test_empty_choices_is_failed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).body(r#"{"choices": []}"#);
        });

        let outcome = summarize(&client_for(&server), "AAPL", "Apple", &article()).await;
        assert_eq!(outcome, SummaryOutcome::Failed);
    }
}
