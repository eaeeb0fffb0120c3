// Automation driver capability interface
//
// Page objects and scenarios talk to the browser exclusively through this
// trait. The production implementation wraps a playwright-rs Page; tests
// substitute a scripted fake.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Options for a single click action.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickOpts {
    /// Time to hold the button down, for widgets that debounce input.
    pub delay: Option<Duration>,
}

impl ClickOpts {
    /// Click with a hold delay.
    pub fn delayed(delay: Duration) -> Self {
        Self { delay: Some(delay) }
    }
}

/// A network response observed by the driver.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ObservedResponse {
    pub url: String,
    pub status: u16,
}

impl ObservedResponse {
    /// True for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Matches observed responses by exact URL, optionally requiring success.
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    url: String,
    require_ok: bool,
}

impl ResponseMatcher {
    /// Matches any response for the given URL.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            require_ok: false,
        }
    }

    /// Additionally requires a 2xx status.
    pub fn require_ok(mut self) -> Self {
        self.require_ok = true;
        self
    }

    /// The URL this matcher watches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether the response satisfies this matcher.
    pub fn matches(&self, response: &ObservedResponse) -> bool {
        response.url == self.url && (!self.require_ok || response.ok())
    }
}

/// Capabilities the suite needs from a browser-automation engine.
///
/// One implementor drives one browser page; the reference is shared
/// read-only across page objects for the lifetime of a scenario. All waits
/// suspend the caller until the condition is observed or the wait window
/// elapses.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates the page to `url` and waits for the load to complete.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Navigates with an explicit wait window, for slow redirect chains.
    async fn navigate_with_timeout(&self, url: &str, timeout: Duration) -> Result<()>;

    /// Fills the input matched by `selector` with `text`.
    async fn fill(&self, selector: &str, text: &str) -> Result<()>;

    /// Clicks the element matched by `selector`.
    async fn click(&self, selector: &str, opts: ClickOpts) -> Result<()>;

    /// Whether the element matched by `selector` is currently visible.
    async fn is_visible(&self, selector: &str) -> Result<bool>;

    /// Text content of the element matched by `selector` (empty if none).
    async fn text_content(&self, selector: &str) -> Result<String>;

    /// Current value of the input matched by `selector`.
    async fn input_value(&self, selector: &str) -> Result<String>;

    /// URL the page is currently displaying.
    fn current_url(&self) -> String;

    /// Waits until the page navigates away from the document current at the
    /// time of the call and the new document finishes loading.
    async fn wait_for_navigation(&self) -> Result<()>;

    /// Waits until the element matched by `selector` becomes visible.
    async fn wait_for_selector(&self, selector: &str) -> Result<()>;

    /// Selects the option with the given value in a `<select>` element.
    async fn select_option(&self, selector: &str, value: &str) -> Result<()>;

    /// Evaluates a JavaScript expression producing an array of strings.
    async fn eval_strings(&self, expression: &str) -> Result<Vec<String>>;

    /// Waits until a response satisfying `matcher` is observed.
    ///
    /// Watches may be started before the triggering action and awaited
    /// afterwards; responses observed in between are not lost.
    async fn wait_for_response(
        &self,
        matcher: &ResponseMatcher,
        timeout: Duration,
    ) -> Result<ObservedResponse>;

    /// Captures a PNG screenshot of the element matched by `selector`.
    async fn screenshot(&self, selector: &str) -> Result<Vec<u8>>;
}
