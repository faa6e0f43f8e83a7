mod controller;
mod error;
mod events;
mod ports;
mod session;
mod summarizer;

pub use controller::{AppController, ControllerOptions, ControllerPorts};
pub use error::ApplicationError;
pub use events::AppEvent;
pub use ports::{
    Clock, EngineFactory, ExportLog, ExportWriter, MetadataSource, PosterCatalog, PosterDecoder,
    PosterStore, SummarizationEngine, UserPrompt,
};
pub use session::{Notice, NoticeLevel, Screen, Selection, Session};
pub use summarizer::SummaryGenerator;
