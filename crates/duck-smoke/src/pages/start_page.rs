use tracing::info;

use crate::driver::{ClickOpts, Driver};
use crate::error::Result;

const SEARCH_INPUT: &str = "#search_form_input_homepage";
const SEARCH_BUTTON: &str = "#search_button_homepage";

/// The search engine's landing page.
pub struct StartPage<'d, D: Driver> {
    driver: &'d D,
    url: String,
}

impl<'d, D: Driver> StartPage<'d, D> {
    pub fn new(driver: &'d D, url: impl Into<String>) -> Self {
        Self {
            driver,
            url: url.into(),
        }
    }

    /// Navigates to the landing page.
    pub async fn goto(&self) -> Result<()> {
        info!(url = %self.url, "loading start page");
        self.driver.navigate(&self.url).await
    }

    /// Fills the search box with `query`, triggers the search, and waits
    /// for the resulting navigation. Expects the landing page to be loaded.
    pub async fn initiate_search(&self, query: &str) -> Result<()> {
        info!(query, "initiating search");
        self.driver.fill(SEARCH_INPUT, query).await?;
        self.driver.click(SEARCH_BUTTON, ClickOpts::default()).await?;
        self.driver.wait_for_navigation().await
    }

    /// Fills the search box without submitting, for scenarios that need to
    /// arm network watches before the triggering click.
    pub async fn type_query(&self, query: &str) -> Result<()> {
        self.driver.fill(SEARCH_INPUT, query).await
    }

    /// Clicks the search button without waiting for navigation.
    pub async fn submit(&self) -> Result<()> {
        self.driver.click(SEARCH_BUTTON, ClickOpts::default()).await
    }
}
