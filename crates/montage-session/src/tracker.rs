//! Input tracker: projects a selection onto its label and enablement.

use crate::effect::Effect;
use crate::types::{MIN_FILES, SELECTION_PROMPT};

/// Whether a selection of `count` files may be submitted.
#[must_use]
pub const fn can_submit(count: usize) -> bool {
    count >= MIN_FILES
}

/// User-facing label for a selection of `count` files.
#[must_use]
pub fn selection_label(count: usize) -> String {
    if count > 0 {
        format!("{count} files selected")
    } else {
        SELECTION_PROMPT.to_owned()
    }
}

/// Notification for files that were picked or dropped but could not be
/// read, e.g. `Skipped 2 unreadable files: a.png, b.png`.
#[must_use]
pub fn unreadable_message(names: &[String]) -> String {
    let noun = if names.len() == 1 { "file" } else { "files" };
    format!(
        "Skipped {} unreadable {noun}: {}",
        names.len(),
        names.join(", ")
    )
}

/// Display state derived from the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Number of selected files.
    pub count: usize,
    /// Label text for the selection.
    pub label: String,
    /// Whether the submit trigger should be enabled.
    pub submit_enabled: bool,
}

impl SelectionSummary {
    /// Summarize a selection of `count` files.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            label: selection_label(count),
            submit_enabled: can_submit(count),
        }
    }

    /// The UI changes that display this summary.
    #[must_use]
    pub fn into_effects(self) -> Vec<Effect> {
        vec![
            Effect::SetSelectionLabel(self.label),
            Effect::SetSubmitEnabled(self.submit_enabled),
        ]
    }
}
