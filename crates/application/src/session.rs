use std::collections::VecDeque;
use std::path::PathBuf;

use gospoil_domain::{MovieDetail, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SearchDetail,
    Gallery,
    Enlarged {
        poster_index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A modal message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// The selected result together with everything fetched or generated for it.
/// Replaced as a whole on every successful selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub result_index: usize,
    pub detail: MovieDetail,
    pub poster: Option<PathBuf>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub selection: Option<Selection>,
    pub screen: Screen,
    pub gallery: Vec<PathBuf>,
    notices: VecDeque<Notice>,
}

impl Session {
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        let selection = self.selection.as_ref()?;
        self.results.get(selection.result_index)
    }

    pub fn enlarged_poster(&self) -> Option<&PathBuf> {
        match self.screen {
            Screen::Enlarged { poster_index } => self.gallery.get(poster_index),
            _ => None,
        }
    }

    pub(crate) fn clear_results(&mut self) {
        self.results.clear();
        self.selection = None;
    }

    pub(crate) fn reset(&mut self) {
        let notices = std::mem::take(&mut self.notices);
        *self = Self {
            notices,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_drained_in_order() {
        let mut session = Session::default();
        session.push_notice(Notice::info("a", "first"));
        session.push_notice(Notice::error("b", "second"));

        let notices = session.take_notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].message, "first");
        assert_eq!(notices[1].level, NoticeLevel::Error);
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn enlarged_poster_only_resolves_on_enlarged_screen() {
        let mut session = Session {
            gallery: vec![PathBuf::from("poster_cache/Heat.jpg")],
            ..Session::default()
        };
        assert_eq!(session.enlarged_poster(), None);

        session.screen = Screen::Enlarged { poster_index: 0 };
        assert_eq!(
            session.enlarged_poster(),
            Some(&PathBuf::from("poster_cache/Heat.jpg"))
        );
    }
}
