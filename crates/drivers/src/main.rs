mod config;
mod dialogs;
mod logging;
mod ui;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use config::{AppConfig, CONFIG_FILE};
use dialogs::RfdPrompt;
use gospoil_adapters::{
    CachedPosterStore, FsExportWriter, HttpTransport, HuggingFaceEngineFactory,
    ImageCratePosterDecoder, OmdbClient, SqliteExportLog, SystemClock, UreqTransport,
    WalkdirPosterCatalog,
};
use gospoil_application::{AppController, ControllerOptions, ControllerPorts, SummaryGenerator};

fn main() -> ExitCode {
    logging::init_logging();
    let config = match AppConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(1);
        }
    };

    let controller = build_controller(&config);
    if let Err(error) = controller.bootstrap() {
        eprintln!("failed to bootstrap gospoil: {error}");
        return ExitCode::from(1);
    }

    match ui::launch_window(controller, Box::new(ImageCratePosterDecoder)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_controller(config: &AppConfig) -> AppController {
    let transport: Arc<dyn HttpTransport> = Arc::new(UreqTransport::new());
    let engines = HuggingFaceEngineFactory::new(
        Arc::clone(&transport),
        config.summarizer_endpoint.clone(),
        config.summarizer_model.clone(),
        config.summarizer_token.clone(),
    );
    AppController::new(
        ControllerPorts {
            metadata: Box::new(OmdbClient::new(
                Arc::clone(&transport),
                config.omdb_base_url.clone(),
                config.omdb_api_key.clone(),
            )),
            posters: Box::new(CachedPosterStore::new(
                transport,
                config.poster_cache_dir.clone(),
            )),
            summaries: SummaryGenerator::new(Box::new(engines)),
            export_log: Box::new(SqliteExportLog::new(config.export_log_path.clone())),
            export_writer: Box::new(FsExportWriter),
            prompt: Box::new(RfdPrompt),
            clock: Box::new(SystemClock),
            gallery: Box::new(WalkdirPosterCatalog::new(config.poster_cache_dir.clone())),
        },
        ControllerOptions {
            refresh_detail_before_actions: config.refresh_detail_before_actions,
        },
    )
}
