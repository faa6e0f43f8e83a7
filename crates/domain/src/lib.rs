mod error;
mod export;
mod gesture;
mod movie;
mod poster;
mod summary;

pub use error::DomainError;
pub use export::{default_export_file_name, ExportRecord};
pub use gesture::{GestureTracker, PointerGesture, DRAG_THRESHOLD};
pub use movie::{ExternalId, MovieDetail, SearchQuery, SearchResult};
pub use poster::{
    is_missing_poster_url, poster_file_name, sanitize_title, DecodedPoster,
    DEFAULT_POSTER_EXTENSION, MAX_POSTER_STEM_CHARS,
};
pub use summary::{
    generate_stub, quick_spoil_line, FallbackReason, Summary, SummaryBounds, SummaryOrigin,
    EMPTY_PLOT_MESSAGE, FALLBACK_STUB_TITLE,
};
