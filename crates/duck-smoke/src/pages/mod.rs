// Page objects
//
// Each wrapper exposes high-level operations over one UI page and hides the
// element selectors behind them. Page objects hold a shared reference to the
// single driver; they carry no state of their own.

mod results_page;
mod start_page;

pub use results_page::ResultsPage;
pub use start_page::StartPage;
