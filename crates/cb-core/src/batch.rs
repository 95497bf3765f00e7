//! Non-interactive one-shot mode.
//!
//! Load the dataset, print either the (grouped) results for a query or the
//! detail panel for one name, and exit. No prompt, no stdin loop.

use std::io::{self, Write};

use cb_backend::DatasetSource;

use crate::browser::{BrowserOptions, CountryBrowser};
use crate::renderer::BrowserRenderer;

/// What one-shot mode should print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    pub query: Option<String>,
    pub show: Option<String>,
}

/// Render a request against an already-loaded browser.
pub fn render_batch<W: Write>(
    browser: &mut CountryBrowser,
    request: &BatchRequest,
    renderer: &mut BrowserRenderer<W>,
) -> io::Result<()> {
    if let Some(name) = &request.show {
        let detail = browser.select(name);
        return renderer.emit_detail(&detail);
    }

    if let Some(query) = &request.query {
        browser.submit_query(query);
    }
    renderer.emit_results(browser)
}

/// Load from `source` and render `request`.
pub async fn run_batch<S: DatasetSource, W: Write>(
    source: &S,
    options: BrowserOptions,
    request: &BatchRequest,
    renderer: &mut BrowserRenderer<W>,
) -> io::Result<()> {
    let mut browser = CountryBrowser::load(source, options).await;
    render_batch(&mut browser, request, renderer)
}
