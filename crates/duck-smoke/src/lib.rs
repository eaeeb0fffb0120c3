//! duck-smoke: browser-driven smoke tests for the DuckDuckGo web UI
//!
//! The suite drives a real browser through [`playwright-rs`] and asserts on
//! rendered DOM state and observed network responses. It is organized as a
//! thin page-object layer over an automation-driver capability trait:
//!
//! - [`Driver`] — the capabilities the suite needs from a browser engine
//!   (navigate, fill, click, wait, observe responses, screenshot).
//! - [`PlaywrightDriver`] — the production implementation over one
//!   chromium page.
//! - [`StartPage`] / [`ResultsPage`] — page objects hiding the element
//!   selectors behind high-level operations.
//! - [`snapshot`] — visual-regression comparison for captured element
//!   screenshots.
//!
//! The scenarios themselves live under `tests/`; each one re-establishes
//! its own precondition (a fresh landing-page load) and shares the single
//! browser page sequentially with the others.
//!
//! # Example
//!
//! ```ignore
//! use duck_smoke::{PlaywrightDriver, ResultsPage, StartPage, SuiteConfig};
//!
//! #[tokio::main]
//! async fn main() -> duck_smoke::Result<()> {
//!     let config = SuiteConfig::from_env();
//!     let driver = PlaywrightDriver::launch(&config).await?;
//!
//!     let start = StartPage::new(&driver, &config.base_url);
//!     let results = ResultsPage::new(&driver);
//!
//!     start.goto().await?;
//!     start.initiate_search("password 16").await?;
//!     assert_eq!(results.generated_password().await?.len(), 16);
//!
//!     driver.close().await
//! }
//! ```
//!
//! [`playwright-rs`]: https://crates.io/crates/playwright-rs

pub mod config;
pub mod driver;
mod error;
pub mod pages;
mod playwright_driver;
pub mod snapshot;

pub use config::SuiteConfig;
pub use driver::{ClickOpts, Driver, ObservedResponse, ResponseMatcher};
pub use error::{Result, SmokeError};
pub use pages::{ResultsPage, StartPage};
pub use playwright_driver::PlaywrightDriver;
