// Production driver backed by playwright-rs
//
// One PlaywrightDriver owns one Playwright server connection, one chromium
// instance, and one page. Scenarios share it sequentially.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use playwright_rs::{Browser, ClickOptions, GotoOptions, LaunchOptions, Page, Playwright};
use tracing::debug;

use crate::config::SuiteConfig;
use crate::driver::{ClickOpts, Driver, ObservedResponse, ResponseMatcher};
use crate::error::{Result, SmokeError};

/// Poll interval for visibility, navigation, and response waits.
///
/// Matches playwright-rs's own assertion polling cadence.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Installed into every document before any page script runs. Wraps fetch
/// and XMLHttpRequest so the driver can observe finished responses without
/// protocol-level network events.
const RESPONSE_OBSERVER_JS: &str = r#"
(() => {
  const log = [];
  window.__observedResponses = log;
  const originalFetch = window.fetch;
  window.fetch = function (...args) {
    return originalFetch.apply(this, args).then((response) => {
      log.push({ url: response.url, status: response.status });
      return response;
    });
  };
  const originalOpen = XMLHttpRequest.prototype.open;
  XMLHttpRequest.prototype.open = function (method, url, ...rest) {
    this.addEventListener('loadend', () => {
      log.push({
        url: new URL(url, document.baseURI).href,
        status: this.status,
      });
    });
    return originalOpen.call(this, method, url, ...rest);
  };
})();
"#;

/// Driver implementation over a real chromium page.
pub struct PlaywrightDriver {
    // Held to keep the server connection alive for the page's lifetime.
    _playwright: Playwright,
    browser: Browser,
    page: Page,
    timeout: Duration,
}

impl PlaywrightDriver {
    /// Launches Playwright, a chromium instance, and one page.
    ///
    /// The response observer script is installed before any navigation so
    /// `wait_for_response` sees requests from the first document onwards.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        let playwright = Playwright::launch().await?;
        let browser = playwright
            .chromium()
            .launch_with_options(LaunchOptions::default().headless(config.headless))
            .await?;
        let page = browser.new_page().await?;
        page.add_init_script(RESPONSE_OBSERVER_JS).await?;

        Ok(Self {
            _playwright: playwright,
            browser,
            page,
            timeout: config.timeout,
        })
    }

    /// Closes the browser. Dropping without closing leaks the chromium
    /// process until the Playwright server notices the disconnect.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}

#[async_trait]
impl Driver for PlaywrightDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.navigate_with_timeout(url, self.timeout).await
    }

    async fn navigate_with_timeout(&self, url: &str, timeout: Duration) -> Result<()> {
        debug!(url, ?timeout, "navigate");
        let options = GotoOptions::new().timeout(timeout);
        self.page.goto(url, Some(options)).await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        debug!(selector, text, "fill");
        self.page.locator(selector).await.fill(text, None).await?;
        Ok(())
    }

    async fn click(&self, selector: &str, opts: ClickOpts) -> Result<()> {
        debug!(selector, "click");
        let options = opts.delay.map(|delay| {
            ClickOptions::builder()
                .delay(delay.as_millis() as f64)
                .build()
        });
        self.page.locator(selector).await.click(options).await?;
        Ok(())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.page.locator(selector).await.is_visible().await?)
    }

    async fn text_content(&self, selector: &str) -> Result<String> {
        let text = self.page.locator(selector).await.text_content().await?;
        Ok(text.unwrap_or_default())
    }

    async fn input_value(&self, selector: &str) -> Result<String> {
        Ok(self.page.locator(selector).await.input_value(None).await?)
    }

    fn current_url(&self) -> String {
        self.page.url()
    }

    async fn wait_for_navigation(&self) -> Result<()> {
        // Checking readyState alone would pass on the still-loaded previous
        // document, so require the URL to move off it first.
        let initial_url = self.page.url();
        let start = Instant::now();
        loop {
            if self.page.url() != initial_url {
                // Evaluation fails transiently while the old document is
                // being torn down; treat that the same as "not loaded yet".
                let state = self
                    .page
                    .evaluate_value("document.readyState")
                    .await
                    .unwrap_or_default();
                if state == "complete" {
                    return Ok(());
                }
            }
            if start.elapsed() >= self.timeout {
                return Err(SmokeError::timed_out("navigation", self.timeout));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        let locator = self.page.locator(selector).await;
        let start = Instant::now();
        loop {
            if locator.is_visible().await? {
                return Ok(());
            }
            if start.elapsed() >= self.timeout {
                return Err(SmokeError::timed_out(
                    format!("selector '{}'", selector),
                    self.timeout,
                ));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        debug!(selector, value, "select_option");
        self.page
            .locator(selector)
            .await
            .select_option(value, None)
            .await?;
        Ok(())
    }

    async fn eval_strings(&self, expression: &str) -> Result<Vec<String>> {
        Ok(self.page.evaluate::<(), Vec<String>>(expression, None).await?)
    }

    async fn wait_for_response(
        &self,
        matcher: &ResponseMatcher,
        timeout: Duration,
    ) -> Result<ObservedResponse> {
        debug!(url = matcher.url(), "wait_for_response");
        let start = Instant::now();
        loop {
            // A navigation between arming the watch and the response landing
            // destroys the execution context mid-poll; keep polling in the
            // new document rather than failing the wait.
            let observed: Vec<ObservedResponse> = self
                .page
                .evaluate::<(), Vec<ObservedResponse>>("() => window.__observedResponses || []", None)
                .await
                .unwrap_or_default();
            if let Some(response) = observed.into_iter().find(|r| matcher.matches(r)) {
                return Ok(response);
            }
            if start.elapsed() >= timeout {
                return Err(SmokeError::timed_out(
                    format!("response for '{}'", matcher.url()),
                    timeout,
                ));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn screenshot(&self, selector: &str) -> Result<Vec<u8>> {
        debug!(selector, "screenshot");
        Ok(self.page.locator(selector).await.screenshot(None).await?)
    }
}
