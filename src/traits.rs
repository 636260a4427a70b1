use std::error::Error;

use async_trait::async_trait;

use crate::schedule::DateOption;
use crate::Tournament;

/// A source of raw feed bodies.
///
/// The real implementation is [`crate::Client`], which talks HTTP; tests can
/// substitute a canned in-memory source
#[async_trait]
pub trait FeedSource {
    /// Fetch one raw feed body, framing included.
    /// This function may be a long process, and it can fail (e.g. in case of a remote server)
    async fn fetch_raw(&self) -> Result<String, Box<dyn Error>>;
}

/// The interface a rendering collaborator implements.
///
/// The core library never touches presentation directly: it hands the
/// projection output to whatever implements this trait (a terminal front-end,
/// an HTML exporter, ...)
pub trait Frontend {
    /// Enter or leave the loading state. Mutually exclusive with results and errors
    fn set_loading(&mut self, loading: bool);

    /// Leave the loading state for the error-display state, with one user-facing message
    fn set_error(&mut self, message: &str);

    /// Present the filter choices (the sentinels "All Provinces" / "All Dates"
    /// are the front-end's own first entries)
    fn render_options(&mut self, provinces: &[String], dates: &[DateOption]);

    /// Present the current projection
    fn render(&mut self, tournaments: &[&Tournament]);

    /// Present the result-count line ([`crate::schedule::summary`]); an empty
    /// string means "show nothing"
    fn render_result_count(&mut self, summary: &str);
}
