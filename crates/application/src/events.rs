#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Search(String),
    Select(usize),
    GenerateSummary,
    QuickSpoil,
    Export,
    EditSummary(String),
    Clear,
    OpenGallery,
    Enlarge(usize),
    CloseEnlarged,
    BackToSearch,
}

impl AppEvent {
    /// Label for the wait overlay of events that block on the network or the
    /// summarization engine.
    pub fn busy_label(&self) -> Option<&'static str> {
        match self {
            Self::Search(query) if !query.trim().is_empty() => Some("Searching..."),
            Self::Select(_) => Some("Fetching details..."),
            Self::GenerateSummary => {
                Some("Generating AI summary, this may take a moment...")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_blocking_events_have_busy_labels() {
        assert_eq!(AppEvent::Search("Heat".to_string()).busy_label(), Some("Searching..."));
        assert_eq!(AppEvent::Search("  ".to_string()).busy_label(), None);
        assert!(AppEvent::GenerateSummary.busy_label().is_some());
        assert_eq!(AppEvent::Clear.busy_label(), None);
        assert_eq!(AppEvent::EditSummary(String::new()).busy_label(), None);
    }
}
