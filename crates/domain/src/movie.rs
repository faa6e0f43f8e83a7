use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Stable identifier the movie database assigns to a title (IMDb style, e.g. `tt1375666`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalId(String);

impl ExternalId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyExternalId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ExternalId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A trimmed, non-empty title query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub year: String,
    pub kind: String,
    pub external_id: ExternalId,
}

impl SearchResult {
    /// Row label shown in the result list, e.g. `Inception (2010) [movie]`.
    pub fn label(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.year, self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub external_id: ExternalId,
    pub title: String,
    pub year: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub rating: String,
    pub plot_text: String,
    pub poster_url: String,
}

impl MovieDetail {
    pub fn heading(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }

    /// Metadata lines for the non-empty fields, a blank line, then the plot.
    pub fn info_text(&self) -> String {
        let fields = [
            ("Genre", &self.genre),
            ("Director", &self.director),
            ("Actors", &self.actors),
            ("IMDb", &self.rating),
        ];
        let lines: Vec<String> = fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{label}: {value}"))
            .collect();
        format!("{}\n\n{}", lines.join("\n"), self.plot_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> MovieDetail {
        MovieDetail {
            external_id: ExternalId::new("tt1375666").expect("id"),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            genre: "Action, Sci-Fi".to_string(),
            director: "Christopher Nolan".to_string(),
            actors: String::new(),
            rating: "8.8".to_string(),
            plot_text: "A thief who steals corporate secrets.".to_string(),
            poster_url: "N/A".to_string(),
        }
    }

    #[test]
    fn external_id_must_not_be_blank() {
        assert!(ExternalId::new("tt1").is_ok());
        assert_eq!(ExternalId::new("   "), Err(DomainError::EmptyExternalId));
    }

    #[test]
    fn query_is_trimmed_and_rejects_blank_input() {
        assert_eq!(SearchQuery::parse("  Alien ").expect("query").as_str(), "Alien");
        assert_eq!(SearchQuery::parse(" \t"), Err(DomainError::EmptyQuery));
    }

    #[test]
    fn result_label_shows_year_and_kind() {
        let result = SearchResult {
            title: "Inception".to_string(),
            year: "2010".to_string(),
            kind: "movie".to_string(),
            external_id: ExternalId::new("tt1375666").expect("id"),
        };
        assert_eq!(result.label(), "Inception (2010) [movie]");
    }

    #[test]
    fn info_text_skips_empty_fields() {
        let text = detail().info_text();
        assert_eq!(
            text,
            "Genre: Action, Sci-Fi\nDirector: Christopher Nolan\nIMDb: 8.8\n\nA thief who steals corporate secrets."
        );
    }
}
