use std::path::PathBuf;

use gospoil_application::UserPrompt;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native yes/no and save-as dialogs.
#[derive(Debug, Default)]
pub struct RfdPrompt;

impl UserPrompt for RfdPrompt {
    fn confirm(&self, title: &str, message: &str) -> bool {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            == MessageDialogResult::Yes
    }

    fn choose_save_path(&self, default_file_name: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_file_name(default_file_name)
            .add_filter("Text files", &["txt"])
            .save_file()
            .map(|mut path| {
                if path.extension().is_none() {
                    path.set_extension("txt");
                }
                path
            })
    }
}
