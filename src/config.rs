//! Support for library configuration options
//!
//! The feed location is a compiled-in constant of the application: there is no
//! configuration file and no environment variable for it.

/// Id of the published spreadsheet the feed is served from
pub const SHEET_ID: &str = "1FD24EVlWx1oB3BLXLHo-dcznxYqNafbf5xHEFjgnvow";

/// Name of the sheet tab holding the tournament rows
pub const SHEET_TAB: &str = "UPDATED MONTH";

/// The gviz query URL for the compiled-in sheet
pub fn feed_url() -> String {
    format!(
        "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:json&sheet={}",
        SHEET_ID, SHEET_TAB
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_url_is_parseable() {
        let url = url::Url::parse(&feed_url()).unwrap();
        assert_eq!(url.scheme(), "https");
        assert!(url.path().contains(SHEET_ID));
    }
}
