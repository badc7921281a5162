//! Side-effect intents emitted by the session state machine.
//!
//! The controller never touches the UI directly. Every decision it makes
//! is expressed as a list of [`Effect`]s that a
//! [`UiSurface`](crate::UiSurface) applies, so transition logic can be
//! tested without a UI runtime.

use crate::types::ImageData;

/// Visual state of the drop zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DropIndicator {
    /// No drag in progress over the zone.
    #[default]
    Cleared,
    /// Files are being dragged over the zone and a drop would be accepted.
    Accepting,
    /// Files are being dragged over the zone but a submission is in
    /// flight, so a drop would be discarded.
    Busy,
}

/// A single UI change requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Enable or disable the file picker.
    SetPickerEnabled(bool),
    /// Clear the files held by the picker element itself.
    ResetPicker,
    /// Enable or disable the submit trigger.
    SetSubmitEnabled(bool),
    /// Show or hide the loading indicator.
    SetLoaderVisible(bool),
    /// Update the drop zone indicator.
    SetDropIndicator(DropIndicator),
    /// Replace the selection label text.
    SetSelectionLabel(String),
    /// Insert a new image at the head of the gallery.
    AppendImage(ImageData),
    /// Show a transient notification.
    Notify(String),
}
