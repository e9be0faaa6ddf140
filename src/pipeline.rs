//! The sequential fetch → summarize → print loop.
//!
//! For each company: print its heading, fetch articles, and either print the
//! no-news placeholder or one block per summarized article. Skipped articles
//! print nothing. After a company with articles the driver pauses for the
//! pacing delay before moving on.

use crate::api::{summarize, AskAsync};
use crate::models::SummaryOutcome;
use crate::outputs::markdown;
use crate::search::SearchClient;
use crate::tickers::Company;
use chrono::NaiveDate;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Courtesy delay between companies.
pub const PACING_DELAY: Duration = Duration::from_secs(1);

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub companies: usize,
    pub articles: usize,
    pub summarized: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct Pipeline<A> {
    search: SearchClient,
    asker: A,
    pacing: Duration,
}

impl<A> Pipeline<A>
where
    A: AskAsync<Response = String>,
{
    pub fn new(search: SearchClient, asker: A) -> Self {
        Self {
            search,
            asker,
            pacing: PACING_DELAY,
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Write the brief for `companies` to `out`.
    #[instrument(level = "info", skip_all, fields(companies = companies.len()))]
    pub async fn run<W: Write>(
        &self,
        companies: &[Company],
        date: NaiveDate,
        out: &mut W,
    ) -> io::Result<RunStats> {
        let mut stats = RunStats::default();
        out.write_all(markdown::report_header(date).as_bytes())?;
        out.flush()?;

        for (i, company) in companies.iter().enumerate() {
            stats.companies += 1;
            out.write_all(markdown::company_heading(company).as_bytes())?;

            let articles = self.search.search_news(&company.name).await;
            if articles.is_empty() {
                info!(company = %company.name, "No relevant news");
                out.write_all(markdown::no_news().as_bytes())?;
                out.flush()?;
                continue;
            }

            for article in &articles {
                stats.articles += 1;
                let outcome = summarize(&self.asker, &company.ticker, &company.name, article).await;
                match &outcome {
                    SummaryOutcome::Summary(_) => stats.summarized += 1,
                    SummaryOutcome::Skipped => stats.skipped += 1,
                    SummaryOutcome::Failed => stats.failed += 1,
                }
                if let Some(text) = outcome.printable() {
                    out.write_all(markdown::summary_block(text).as_bytes())?;
                    out.flush()?;
                }
            }

            // no pause after the last company; nothing follows it
            if i + 1 < companies.len() && !self.pacing.is_zero() {
                debug!(delay = ?self.pacing, "Pausing before next company");
                sleep(self.pacing).await;
            }
        }

        info!(?stats, "Run complete");
        Ok(stats)
    }
}
