//! Dioxus UI components for montage.
//!
//! Provides the upload zone (drop region, picker and submit button),
//! the results gallery, the notification toast, the loading indicator,
//! and the grid layout controls.

mod gallery;
mod layout_controls;
mod toast;
mod upload;

pub use gallery::GalleryView;
pub use layout_controls::LayoutControls;
pub use toast::{Loader, ToastView};
pub use upload::FileUpload;
