//! HSReplay HTTP fetches.
//!
//! Both datasets are required for a run. The deck statistics are requested
//! for each configured time range in turn; the first range that downloads and
//! parses is used.

use crate::config::{self, TimeRange};
use crate::error::{MetaError, Result};
use crate::models::{Archetype, DeckDataset};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct HsReplayClient {
    base_url: String,
    timeout: Duration,
    time_ranges: Vec<TimeRange>,
    client: Option<Client>,
}

impl HsReplayClient {
    pub fn new(timeout: Duration, time_ranges: Vec<TimeRange>) -> Self {
        Self::with_base_url(config::API_BASE, timeout, time_ranges)
    }

    /// Client resolving the API paths against `base_url` instead of HSReplay.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
        time_ranges: Vec<TimeRange>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            time_ranges,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| MetaError::Fetch("HTTP client unavailable".into()))
    }

    fn get_json<T: DeserializeOwned>(&mut self, url: &str) -> Result<T> {
        debug!(url, "fetching");
        let resp = self.client()?.get(url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    pub fn fetch_archetypes(&mut self) -> Result<Vec<Archetype>> {
        let archetypes: Vec<Archetype> = self
            .get_json(&config::archetypes_url(&self.base_url))
            .map_err(|e| MetaError::Fetch(format!("archetypes: {e}")))?;
        info!(count = archetypes.len(), "fetched archetypes");
        Ok(archetypes)
    }

    /// Fetch deck statistics, falling back through the configured time ranges.
    pub fn fetch_deck_data(&mut self) -> Result<(TimeRange, DeckDataset)> {
        let ranges = self.time_ranges.clone();
        let mut failures = Vec::new();

        for range in ranges {
            let url = range.deck_data_url(&self.base_url);
            match self.get_json::<DeckDataset>(&url) {
                Ok(dataset) => {
                    info!(
                        time_range = %range,
                        as_of = %dataset.as_of,
                        decks = dataset.deck_count(),
                        "fetched deck statistics"
                    );
                    return Ok((range, dataset));
                }
                Err(e) => {
                    warn!(time_range = %range, error = %e, "deck statistics unavailable");
                    failures.push(format!("{range}: {e}"));
                }
            }
        }

        if failures.is_empty() {
            return Err(MetaError::InvalidArgument(
                "no time ranges configured".into(),
            ));
        }
        Err(MetaError::Fetch(format!(
            "deck statistics: {}",
            failures.join("; ")
        )))
    }
}
