use gospoil_domain::{
    default_export_file_name, quick_spoil_line, ExportRecord, MovieDetail, SearchQuery,
};
use tracing::{info, warn};

use crate::{
    AppEvent, ApplicationError, Clock, ExportLog, ExportWriter, MetadataSource, Notice,
    PosterCatalog, PosterStore, Screen, Selection, Session, SummaryGenerator, UserPrompt,
};

const METADATA_ERROR_TITLE: &str = "OMDb error";

/// Every collaborator the controller drives.
pub struct ControllerPorts {
    pub metadata: Box<dyn MetadataSource>,
    pub posters: Box<dyn PosterStore>,
    pub summaries: SummaryGenerator,
    pub export_log: Box<dyn ExportLog>,
    pub export_writer: Box<dyn ExportWriter>,
    pub prompt: Box<dyn UserPrompt>,
    pub clock: Box<dyn Clock>,
    pub gallery: Box<dyn PosterCatalog>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerOptions {
    /// Fetch the selected movie again before summarizing, spoiling or
    /// exporting instead of reusing the detail fetched on selection.
    pub refresh_detail_before_actions: bool,
}

pub struct AppController {
    ports: ControllerPorts,
    options: ControllerOptions,
    session: Session,
}

impl AppController {
    pub fn new(ports: ControllerPorts, options: ControllerOptions) -> Self {
        Self {
            ports,
            options,
            session: Session::default(),
        }
    }

    /// Creates the poster cache directory and the export log table. Only a
    /// missing cache directory is fatal; the export log is best-effort.
    pub fn bootstrap(&self) -> Result<(), ApplicationError> {
        self.ports.posters.ensure_cache_dir()?;
        if let Err(error) = self.ports.export_log.initialize() {
            warn!(%error, "export log unavailable, exports will not be recorded");
        }
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.session.take_notices()
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Search(query) => self.search(&query),
            AppEvent::Select(index) => self.select(index),
            AppEvent::GenerateSummary => self.generate_summary(),
            AppEvent::QuickSpoil => self.quick_spoil(),
            AppEvent::Export => self.export(),
            AppEvent::EditSummary(text) => {
                if let Some(selection) = self.session.selection.as_mut() {
                    selection.summary = Some(text);
                }
            }
            AppEvent::Clear => self.session.reset(),
            AppEvent::OpenGallery => self.open_gallery(),
            AppEvent::Enlarge(index) => {
                if index < self.session.gallery.len() {
                    self.session.screen = Screen::Enlarged {
                        poster_index: index,
                    };
                }
            }
            AppEvent::CloseEnlarged => self.session.screen = Screen::Gallery,
            AppEvent::BackToSearch => self.session.screen = Screen::SearchDetail,
        }
    }

    fn search(&mut self, raw_query: &str) {
        self.session.query = raw_query.to_string();
        let Ok(query) = SearchQuery::parse(raw_query) else {
            self.session
                .push_notice(Notice::info("Empty", "Enter a movie title to search."));
            return;
        };

        self.session.clear_results();
        let results = self.ports.metadata.search(&query);
        info!(query = query.as_str(), count = results.len(), "search finished");
        if results.is_empty() {
            self.session.push_notice(Notice::info(
                "No results",
                "No movies found (try a different title).",
            ));
        }
        self.session.results = results;
    }

    fn select(&mut self, result_index: usize) {
        let Some(result) = self.session.results.get(result_index) else {
            return;
        };

        let detail = match self.ports.metadata.get_detail(&result.external_id) {
            Ok(detail) => detail,
            Err(error) => {
                self.session.push_notice(Notice::error(
                    METADATA_ERROR_TITLE,
                    format!("Failed to fetch details: {error}"),
                ));
                return;
            }
        };

        let poster = self
            .ports
            .posters
            .fetch_poster(&detail.poster_url, &detail.title);
        self.session.selection = Some(Selection {
            result_index,
            detail,
            poster,
            summary: None,
        });
    }

    fn generate_summary(&mut self) {
        let Some(detail) =
            self.selected_detail("Select a movie from the search results first.")
        else {
            return;
        };

        let summary = self.ports.summaries.summarize_movie(&detail);
        if let Some(selection) = self.session.selection.as_mut() {
            selection.summary = Some(summary.display_text());
        }
    }

    fn quick_spoil(&mut self) {
        let Some(detail) = self.selected_detail("Select a movie first.") else {
            return;
        };

        let line = quick_spoil_line(&detail.plot_text, &detail.title);
        self.session.push_notice(Notice::info("Quick Spoil", line));
    }

    fn export(&mut self) {
        let Some(detail) = self.selected_detail("Select a movie first.") else {
            return;
        };

        let drafted = self
            .session
            .selection
            .as_ref()
            .and_then(|selection| selection.summary.as_deref())
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        let summary = if drafted.is_empty() {
            if !self
                .ports
                .prompt
                .confirm("No summary", "No AI summary present. Export plot instead?")
            {
                return;
            }
            detail.plot_text.clone()
        } else {
            drafted
        };

        let Some(path) = self
            .ports
            .prompt
            .choose_save_path(&default_export_file_name(&detail.title))
        else {
            return;
        };

        let record = ExportRecord::new(&detail, &summary, self.ports.clock.now());
        if let Err(error) = self
            .ports
            .export_writer
            .write_text(&path, &record.render_text())
        {
            self.session.push_notice(Notice::error(
                "Export failed",
                format!("Failed to write {}: {error}", path.display()),
            ));
            return;
        }

        if let Err(error) = self.ports.export_log.record(&record) {
            warn!(%error, external_id = %record.external_id, "export log write failed");
        }
        self.session.push_notice(Notice::info(
            "Exported",
            format!("Exported to {}", path.display()),
        ));
    }

    fn open_gallery(&mut self) {
        match self.ports.gallery.list_posters() {
            Ok(posters) => {
                self.session.gallery = posters;
                self.session.screen = Screen::Gallery;
            }
            Err(error) => self.session.push_notice(Notice::error(
                "Gallery",
                format!("Failed to list cached posters: {error}"),
            )),
        }
    }

    /// Detail of the current selection, fetched again when configured to.
    /// Pushes the matching notice and returns `None` when there is nothing to
    /// act on.
    fn selected_detail(&mut self, missing_selection_message: &str) -> Option<MovieDetail> {
        let Some(selection) = self.session.selection.as_mut() else {
            self.session
                .push_notice(Notice::warning("No selection", missing_selection_message));
            return None;
        };

        if !self.options.refresh_detail_before_actions {
            return Some(selection.detail.clone());
        }

        match self
            .ports
            .metadata
            .get_detail(&selection.detail.external_id)
        {
            Ok(detail) => {
                selection.detail = detail.clone();
                Some(detail)
            }
            Err(error) => {
                self.session.push_notice(Notice::error(
                    METADATA_ERROR_TITLE,
                    format!("Failed to fetch details: {error}"),
                ));
                None
            }
        }
    }
}
