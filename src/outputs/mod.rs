//! Output generation.
//!
//! # Submodules
//!
//! - [`markdown`]: renders each fragment of the Markdown brief printed to stdout
//!
//! # Output Structure
//!
//! ```text
//!
//! # News Summary (2025-05-06)
//!
//! ## Apple (AAPL)
//!
//! • Ticker: AAPL
//! ...
//!
//! ---
//!
//! ## Tesla (TSLA)
//!
//! _No relevant news found._
//! ```

pub mod markdown;
