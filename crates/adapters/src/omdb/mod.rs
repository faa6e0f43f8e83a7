mod wire;

use std::sync::Arc;
use std::time::Duration;

use gospoil_application::{ApplicationError, MetadataSource};
use gospoil_domain::{ExternalId, MovieDetail, SearchQuery, SearchResult};
use tracing::warn;

use crate::http::HttpTransport;

pub use wire::{parse_detail, parse_search};

const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const DETAIL_TIMEOUT: Duration = Duration::from_secs(12);

/// Metadata client for the OMDb API.
pub struct OmdbClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: String, api_key: String) -> Self {
        Self {
            transport,
            base_url,
            api_key,
        }
    }
}

impl MetadataSource for OmdbClient {
    fn search(&self, query: &SearchQuery) -> Vec<SearchResult> {
        let params = [("apikey", self.api_key.as_str()), ("s", query.as_str())];
        match self
            .transport
            .get_json(&self.base_url, &params, SEARCH_TIMEOUT)
            .and_then(parse_search)
        {
            Ok(results) => results,
            Err(error) => {
                warn!(%error, query = query.as_str(), "omdb search failed");
                Vec::new()
            }
        }
    }

    fn get_detail(&self, external_id: &ExternalId) -> Result<MovieDetail, ApplicationError> {
        let params = [
            ("apikey", self.api_key.as_str()),
            ("i", external_id.as_str()),
            ("plot", "full"),
        ];
        let body = self
            .transport
            .get_json(&self.base_url, &params, DETAIL_TIMEOUT)?;
        parse_detail(body, external_id)
    }
}
