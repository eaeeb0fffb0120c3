use crate::driver::Driver;
use crate::error::Result;

const PASSWORD_WIDGET: &str = ".zci--password .zci__main";
const FIRST_RESULT: &str = "#r1-0";
const RESULT_TITLES_JS: &str = r#"() =>
  Array.from(
    document.querySelectorAll("h2.result__title.js-result-title"),
    (element) => element.textContent ?? ""
  )"#;

/// The results page, including instant-answer widgets.
pub struct ResultsPage<'d, D: Driver> {
    driver: &'d D,
}

impl<'d, D: Driver> ResultsPage<'d, D> {
    pub fn new(driver: &'d D) -> Self {
        Self { driver }
    }

    /// Text of the generated-password instant answer. Expects the password
    /// widget to be rendered; length and character-set properties are the
    /// caller's assertions.
    pub async fn generated_password(&self) -> Result<String> {
        let text = self.driver.text_content(PASSWORD_WIDGET).await?;
        Ok(text.trim().to_string())
    }

    /// Text of the first organic search result.
    pub async fn first_result_text(&self) -> Result<String> {
        self.driver.text_content(FIRST_RESULT).await
    }

    /// Titles of every result on the page, in display order.
    pub async fn result_titles(&self) -> Result<Vec<String>> {
        self.driver.eval_strings(RESULT_TITLES_JS).await
    }
}
