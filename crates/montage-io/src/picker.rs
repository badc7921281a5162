//! Direct access to the file picker element.
//!
//! Dioxus does not expose an `<input type="file">`'s file list for
//! writing, so clearing it after a successful submission goes through
//! the DOM. Without the reset, picking the same files again would not
//! fire a change event.

use wasm_bindgen::JsCast;

/// DOM id of the picker `<input>` rendered by
/// [`FileUpload`](crate::FileUpload).
pub const PICKER_ID: &str = "montage-picker";

/// Errors that can occur when resetting the picker.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The picker element could not be found or is not an `<input>`.
    #[error("picker element unavailable: {0}")]
    Missing(String),
}

/// Clear the files held by the picker element.
///
/// # Errors
///
/// Returns [`PickerError::Missing`] if there is no document or no
/// `<input>` with id [`PICKER_ID`].
pub fn reset_picker() -> Result<(), PickerError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PickerError::Missing("no document".into()))?;
    let input = document
        .get_element_by_id(PICKER_ID)
        .ok_or_else(|| PickerError::Missing(format!("no element #{PICKER_ID}")))?
        .dyn_into::<web_sys::HtmlInputElement>()
        .map_err(|e| PickerError::Missing(format!("failed to cast element: {e:?}")))?;
    input.set_value("");
    Ok(())
}
