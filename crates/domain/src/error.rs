use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("external id must not be empty")]
    EmptyExternalId,
    #[error("search query must not be empty")]
    EmptyQuery,
}
