use crate::error::{PipelineError, PipelineResult};
use crate::tcg::{CatalogItem, CatalogSource};
use crate::utils::http::build_client;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CardsResponse {
    data: Option<Vec<CatalogItem>>,
}

/// NetrunnerDB public API, see https://netrunnerdb.com/api/2.0/doc
pub struct NrdbApi {
    client: Client,
    url: String,
}

impl NrdbApi {
    pub fn new(url: impl Into<String>) -> PipelineResult<Self> {
        Ok(Self::with_client(build_client()?, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl CatalogSource for NrdbApi {
    fn fetch_cards(&self) -> PipelineResult<Vec<CatalogItem>> {
        debug!("Fetching NRDB card data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        debug!("Response status: {}", status);
        if status != StatusCode::OK {
            return Err(PipelineError::Status(status));
        }

        let body = response.text()?;
        parse_cards(&body)
    }
}

/// A `null` body, a missing `data` key and `"data": null` all count as an
/// empty catalog.
pub fn parse_cards(body: &str) -> PipelineResult<Vec<CatalogItem>> {
    let payload: Option<CardsResponse> = serde_json::from_str(body)?;
    payload
        .and_then(|response| response.data)
        .ok_or(PipelineError::EmptyCatalog)
}
