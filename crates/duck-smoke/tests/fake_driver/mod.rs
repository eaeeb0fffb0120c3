// Scripted in-memory driver
//
// Implements the automation-driver capability trait without a browser, so
// page objects and scenario wiring can be exercised hermetically. Each
// query method returns values scripted up front; every call is recorded so
// tests can assert on ordering.
#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use duck_smoke::{ClickOpts, Driver, ObservedResponse, ResponseMatcher, Result, SmokeError};

#[derive(Default)]
struct State {
    calls: Vec<String>,
    visible: HashMap<String, bool>,
    // Consecutive text_content reads per selector pop from the front so a
    // selector like a calculator display can change between reads.
    texts: HashMap<String, Vec<String>>,
    input_values: HashMap<String, String>,
    eval_results: Vec<Vec<String>>,
    responses: Vec<ObservedResponse>,
    redirects: HashMap<String, String>,
    url: String,
}

#[derive(Default)]
pub struct FakeDriver {
    state: Mutex<State>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&self, selector: &str, visible: bool) {
        self.state.lock().visible.insert(selector.into(), visible);
    }

    /// Queues a text for the selector; reads consume queued texts in order,
    /// with the last one sticking.
    pub fn push_text(&self, selector: &str, text: &str) {
        self.state
            .lock()
            .texts
            .entry(selector.into())
            .or_default()
            .push(text.into());
    }

    pub fn set_input_value(&self, selector: &str, value: &str) {
        self.state
            .lock()
            .input_values
            .insert(selector.into(), value.into());
    }

    pub fn push_eval_result(&self, strings: &[&str]) {
        self.state
            .lock()
            .eval_results
            .push(strings.iter().map(|s| s.to_string()).collect());
    }

    pub fn push_response(&self, url: &str, status: u16) {
        self.state.lock().responses.push(ObservedResponse {
            url: url.into(),
            status,
        });
    }

    /// Makes navigation to `from` land on `to`, like an HTTP redirect.
    pub fn redirect(&self, from: &str, to: &str) {
        self.state.lock().redirects.insert(from.into(), to.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    fn record(&self, call: String) {
        self.state.lock().calls.push(call);
    }
}

#[async_trait]
impl Driver for FakeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.record(format!("navigate {}", url));
        let mut state = self.state.lock();
        let landed = state.redirects.get(url).cloned().unwrap_or_else(|| url.to_string());
        state.url = landed;
        Ok(())
    }

    async fn navigate_with_timeout(&self, url: &str, timeout: Duration) -> Result<()> {
        self.record(format!("navigate {} (timeout {:?})", url, timeout));
        let mut state = self.state.lock();
        let landed = state.redirects.get(url).cloned().unwrap_or_else(|| url.to_string());
        state.url = landed;
        Ok(())
    }

    async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.record(format!("fill {} '{}'", selector, text));
        Ok(())
    }

    async fn click(&self, selector: &str, opts: ClickOpts) -> Result<()> {
        match opts.delay {
            Some(delay) => self.record(format!("click {} (delay {:?})", selector, delay)),
            None => self.record(format!("click {}", selector)),
        }
        Ok(())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        self.record(format!("is_visible {}", selector));
        Ok(self.state.lock().visible.get(selector).copied().unwrap_or(false))
    }

    async fn text_content(&self, selector: &str) -> Result<String> {
        self.record(format!("text_content {}", selector));
        let mut state = self.state.lock();
        let Some(queue) = state.texts.get_mut(selector) else {
            return Ok(String::new());
        };
        Ok(if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue.first().cloned().unwrap_or_default()
        })
    }

    async fn input_value(&self, selector: &str) -> Result<String> {
        self.record(format!("input_value {}", selector));
        Ok(self
            .state
            .lock()
            .input_values
            .get(selector)
            .cloned()
            .unwrap_or_default())
    }

    fn current_url(&self) -> String {
        self.state.lock().url.clone()
    }

    async fn wait_for_navigation(&self) -> Result<()> {
        self.record("wait_for_navigation".into());
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str) -> Result<()> {
        self.record(format!("wait_for_selector {}", selector));
        // Unscripted selectors succeed; only an explicit `false` times out.
        if self.state.lock().visible.get(selector).copied().unwrap_or(true) {
            Ok(())
        } else {
            Err(SmokeError::timed_out(
                format!("selector '{}'", selector),
                Duration::ZERO,
            ))
        }
    }

    async fn select_option(&self, selector: &str, value: &str) -> Result<()> {
        self.record(format!("select_option {} '{}'", selector, value));
        Ok(())
    }

    async fn eval_strings(&self, _expression: &str) -> Result<Vec<String>> {
        self.record("eval_strings".into());
        let mut state = self.state.lock();
        if state.eval_results.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(state.eval_results.remove(0))
        }
    }

    async fn wait_for_response(
        &self,
        matcher: &ResponseMatcher,
        timeout: Duration,
    ) -> Result<ObservedResponse> {
        self.record(format!("wait_for_response {}", matcher.url()));
        // Scripted responses are all "already observed"; no waiting happens.
        let state = self.state.lock();
        state
            .responses
            .iter()
            .find(|r| matcher.matches(r))
            .cloned()
            .ok_or_else(|| {
                SmokeError::timed_out(format!("response for '{}'", matcher.url()), timeout)
            })
    }

    async fn screenshot(&self, selector: &str) -> Result<Vec<u8>> {
        self.record(format!("screenshot {}", selector));
        Ok(Vec::new())
    }
}
