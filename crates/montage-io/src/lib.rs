//! montage-io: Browser I/O and Dioxus component library.
//!
//! Sends batch uploads with the Fetch API, saves gallery images,
//! implements the session controller's UI surface on Dioxus signals,
//! and provides the UI components for the montage web application.

pub mod components;
pub mod download;
pub mod fetch;
pub mod picker;
pub mod surface;

pub use components::{FileUpload, GalleryView, LayoutControls, Loader, ToastView};
pub use fetch::FetchTransport;
pub use surface::{PageSignals, SignalSurface, use_page_signals};
