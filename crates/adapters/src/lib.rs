pub mod fs;
pub mod http;
pub mod migrations;
pub mod omdb;
pub mod sqlite;
pub mod summarizer;

pub use fs::{
    CachedPosterStore, FsExportWriter, ImageCratePosterDecoder, SystemClock,
    WalkdirPosterCatalog,
};
pub use http::{HttpTransport, UreqTransport};
pub use omdb::OmdbClient;
pub use sqlite::SqliteExportLog;
pub use summarizer::HuggingFaceEngineFactory;
