//! News search via SerpAPI's Google News engine.
//!
//! [`SearchClient::search_news`] issues a single request per company and keeps
//! at most [`ARTICLES_PER_COMPANY`] results, in the order the API returned
//! them, that pass two filters:
//!
//! 1. **Credibility**: the link mentions one of [`CREDIBLE_SOURCES`]
//! 2. **Recency**: the result's relative date parses as [`RelativeAge`] and
//!    is at most [`SEARCH_DAYS`] days old
//!
//! Every failure (transport, status, decoding) degrades to an empty list.

use crate::error::BriefError;
use crate::models::{Article, RawNewsResult, SearchResponse};
use crate::utils::truncate_for_log;
use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};
use url::Url;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://serpapi.com/search";

/// Publishers whose links are considered authoritative for financial news.
pub const CREDIBLE_SOURCES: &[&str] = &[
    "reuters.com",
    "bloomberg.com",
    "wsj.com",
    "ft.com",
    "cnbc.com",
    "marketwatch.com",
];

pub const SEARCH_ENGINE: &str = "google";
pub const ARTICLES_PER_COMPANY: usize = 3;
pub const SEARCH_DAYS: i64 = 7;
const RESULTS_REQUESTED: u32 = 10;

static RELATIVE_AGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+|an?)\s+(min|minute|hr|hour|day|week|month|year)s?\s+ago$")
        .expect("relative age pattern is valid")
});

/// How long ago a search result was published, as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

/// A date string that is not in any relative format we understand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedAge(pub String);

impl fmt::Display for UnrecognizedAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized relative date {:?}", self.0)
    }
}

impl std::error::Error for UnrecognizedAge {}

impl FromStr for RelativeAge {
    type Err = UnrecognizedAge;

    /// Parses "just now", "yesterday" and "<n|a|an> <unit>[s] ago".
    /// Anything else, including trailing junk after the unit, is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_lowercase();
        match text.as_str() {
            "just now" => return Ok(RelativeAge::JustNow),
            "yesterday" => return Ok(RelativeAge::Days(1)),
            _ => {}
        }

        let unrecognized = || UnrecognizedAge(s.to_string());
        let caps = RELATIVE_AGE.captures(&text).ok_or_else(unrecognized)?;
        let count = match &caps[1] {
            "a" | "an" => 1,
            digits => digits.parse::<i64>().map_err(|_| unrecognized())?,
        };

        Ok(match &caps[2] {
            "min" | "minute" => RelativeAge::Minutes(count),
            "hr" | "hour" => RelativeAge::Hours(count),
            "day" => RelativeAge::Days(count),
            "week" => RelativeAge::Weeks(count),
            "month" => RelativeAge::Months(count),
            _ => RelativeAge::Years(count),
        })
    }
}

impl RelativeAge {
    /// Approximate age as a duration (months are 30 days, years 365), or
    /// `None` when the count is too large to represent.
    pub fn as_duration(&self) -> Option<Duration> {
        match *self {
            RelativeAge::JustNow => Some(Duration::zero()),
            RelativeAge::Minutes(n) => Duration::try_minutes(n),
            RelativeAge::Hours(n) => Duration::try_hours(n),
            RelativeAge::Days(n) => Duration::try_days(n),
            RelativeAge::Weeks(n) => Duration::try_weeks(n),
            RelativeAge::Months(n) => n.checked_mul(30).and_then(Duration::try_days),
            RelativeAge::Years(n) => n.checked_mul(365).and_then(Duration::try_days),
        }
    }

    /// Sub-day ages always count as recent; day counts are compared to
    /// `max_days`; coarser units never count.
    pub fn is_within_days(&self, max_days: i64) -> bool {
        match *self {
            RelativeAge::JustNow | RelativeAge::Minutes(_) | RelativeAge::Hours(_) => true,
            RelativeAge::Days(n) => n <= max_days,
            RelativeAge::Weeks(_) | RelativeAge::Months(_) | RelativeAge::Years(_) => false,
        }
    }
}

/// True if the link mentions one of the credible publishers' domains.
pub fn is_credible(link: &str) -> bool {
    CREDIBLE_SOURCES.iter().any(|domain| link.contains(domain))
}

/// True if the result's date field describes an age within `max_days`.
pub fn is_recent(date: Option<&str>, max_days: i64) -> bool {
    let Some(date) = date else {
        return false;
    };
    match date.parse::<RelativeAge>() {
        Ok(age) if age.is_within_days(max_days) => true,
        Ok(age) => {
            debug!(
                ?age,
                age_hours = ?age.as_duration().map(|d| d.num_hours()),
                "Rejecting stale result"
            );
            false
        }
        Err(e) => {
            debug!(error = %e, "Rejecting result with unparseable date");
            false
        }
    }
}

/// Apply the credibility then recency filters, keeping the first `limit` hits.
pub fn select_articles(results: Vec<RawNewsResult>, limit: usize) -> Vec<Article> {
    results
        .into_iter()
        .filter(|r| is_credible(r.link.as_deref().unwrap_or_default()))
        .filter(|r| is_recent(r.date.as_deref(), SEARCH_DAYS))
        .take(limit)
        .map(RawNewsResult::into_article)
        .collect()
}

/// Client for the news search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl SearchClient {
    pub fn new(http: Client, endpoint: Url, api_key: impl Into<String>) -> Self {
        Self {
            http,
            endpoint,
            api_key: api_key.into(),
        }
    }

    /// Search for recent, credible news about `company`.
    #[instrument(level = "info", skip(self))]
    pub async fn search_news(&self, company: &str) -> Vec<Article> {
        match self.fetch_results(company).await {
            Ok(results) => {
                let total = results.len();
                let articles = select_articles(results, ARTICLES_PER_COMPANY);
                info!(total, kept = articles.len(), "Filtered news results");
                articles
            }
            Err(e) => {
                warn!(error = %e, "News search failed; treating as no results");
                Vec::new()
            }
        }
    }

    async fn fetch_results(&self, company: &str) -> Result<Vec<RawNewsResult>, BriefError> {
        let query = format!("{company} stock news");
        let num = RESULTS_REQUESTED.to_string();
        let resp = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("engine", SEARCH_ENGINE),
                ("q", query.as_str()),
                ("api_key", self.api_key.as_str()),
                ("tbm", "nws"),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(BriefError::Status {
                api: "search",
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|source| BriefError::Decode { api: "search", source })?;
        debug!(count = parsed.news_results.len(), "Search returned results");
        Ok(parsed.news_results)
    }
}
