mod clock;
mod export_writer;
mod gallery;
mod posters;
mod thumbs;

pub use clock::SystemClock;
pub use export_writer::FsExportWriter;
pub use gallery::WalkdirPosterCatalog;
pub use posters::CachedPosterStore;
pub use thumbs::ImageCratePosterDecoder;
