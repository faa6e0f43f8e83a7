use gospoil_application::ApplicationError;
use gospoil_domain::{ExternalId, MovieDetail, SearchResult};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const RESPONSE_OK: &str = "True";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchEnvelope {
    response: String,
    #[serde(default)]
    search: Vec<SearchItem>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItem {
    title: Option<String>,
    year: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailEnvelope {
    response: String,
    error: Option<String>,
    title: Option<String>,
    year: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    actors: Option<String>,
    plot: Option<String>,
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
}

/// Maps a search body to results. `"Response": "False"` (no match, too many
/// matches) is an empty list, not an error.
pub fn parse_search(body: Value) -> Result<Vec<SearchResult>, ApplicationError> {
    let envelope: SearchEnvelope = serde_json::from_value(body)
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;

    if envelope.response != RESPONSE_OK {
        debug!(
            error = envelope.error.as_deref().unwrap_or_default(),
            "search answered without results"
        );
        return Ok(Vec::new());
    }

    let results = envelope
        .search
        .into_iter()
        .filter_map(|item| {
            let Ok(external_id) = ExternalId::new(item.imdb_id.unwrap_or_default()) else {
                warn!(title = ?item.title, "search result without imdbID skipped");
                return None;
            };
            Some(SearchResult {
                title: item.title.unwrap_or_default(),
                year: item.year.unwrap_or_default(),
                kind: item.kind.unwrap_or_default(),
                external_id,
            })
        })
        .collect();
    Ok(results)
}

pub fn parse_detail(
    body: Value,
    requested: &ExternalId,
) -> Result<MovieDetail, ApplicationError> {
    let envelope: DetailEnvelope = serde_json::from_value(body)
        .map_err(|error| ApplicationError::Decode(error.to_string()))?;

    if envelope.response != RESPONSE_OK {
        return Err(ApplicationError::NotFound(envelope.error.unwrap_or_else(|| {
            format!("no details for {requested}")
        })));
    }

    let external_id = match envelope.imdb_id {
        Some(id) => ExternalId::new(id)?,
        None => requested.clone(),
    };

    Ok(MovieDetail {
        external_id,
        title: envelope.title.unwrap_or_else(|| "Unknown".to_string()),
        year: envelope.year.unwrap_or_default(),
        genre: envelope.genre.unwrap_or_default(),
        director: envelope.director.unwrap_or_default(),
        actors: envelope.actors.unwrap_or_default(),
        rating: envelope.imdb_rating.unwrap_or_default(),
        plot_text: envelope.plot.unwrap_or_default(),
        poster_url: envelope.poster.unwrap_or_default(),
    })
}
