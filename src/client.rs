//! This module provides a client that fetches the tournament feed

use std::error::Error;

use async_trait::async_trait;
use url::Url;

use crate::gviz;
use crate::schedule::Schedule;
use crate::traits::FeedSource;

/// A feed source that fetches its data from the remote spreadsheet
pub struct Client {
    feed_url: Url,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(feed_url: S) -> Result<Self, Box<dyn Error>> {
        let feed_url = Url::parse(feed_url.as_ref())?;
        Ok(Self { feed_url })
    }

    /// A client for the compiled-in feed of [`crate::config`]
    pub fn for_default_feed() -> Result<Self, Box<dyn Error>> {
        Self::new(crate::config::feed_url())
    }

    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetch and normalize the whole feed in one pass.
    ///
    /// One network attempt, no retries: any transport, status or parse failure
    /// surfaces as the error, and no partial result is produced
    pub async fn load_schedule(&self) -> Result<Schedule, Box<dyn Error>> {
        load_schedule_from(self).await
    }
}

#[async_trait]
impl FeedSource for Client {
    async fn fetch_raw(&self) -> Result<String, Box<dyn Error>> {
        let response = reqwest::get(self.feed_url.as_str()).await?;
        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", response.status()).into());
        }
        let text = response.text().await?;
        Ok(text)
    }
}

/// Build the working set from any feed source (remote client, canned test data...)
pub async fn load_schedule_from(source: &dyn FeedSource) -> Result<Schedule, Box<dyn Error>> {
    let body = source.fetch_raw().await?;
    let table = gviz::parse(&body)?;
    let records = gviz::tournaments_from_table(&table);
    log::debug!("Normalized {} feed rows", records.len());

    let schedule = Schedule::new(records);
    log::info!("Loaded {} upcoming tournaments", schedule.len());
    Ok(schedule)
}
