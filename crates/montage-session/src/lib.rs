//! montage-session: Upload session state machine (sans-IO).
//!
//! Decides when a batch of images may be submitted, what happens while a
//! request is in flight, and how drag-and-drop input is reconciled with
//! the file picker:
//!
//! picker / drop zone -> selection -> session gate -> request ->
//! gallery + notifier -> session gate released.
//!
//! This crate has **no I/O dependencies**. The network client and the
//! page are injected through the [`Transport`] and [`UiSurface`] traits;
//! the browser implementations live in `montage-io`.

pub mod controller;
pub mod drop_zone;
pub mod effect;
pub mod gallery;
pub mod gate;
pub mod notifier;
pub mod request;
pub mod tracker;
pub mod transport;
pub mod types;

pub use controller::{
    ForeignUpload, InputTicket, LoadedFiles, PendingUpload, UploadController, submit,
};
pub use drop_zone::{DragKind, DragResponse};
pub use effect::{DropIndicator, Effect};
pub use gallery::{Gallery, GalleryEntry};
pub use gate::{GateEvent, SessionState, Transition};
pub use notifier::{Notifier, Toast, ToastId};
pub use request::{RawResponse, UploadRequest, interpret_response};
pub use transport::{Transport, TransportError, UiSurface};
pub use types::{
    FileHandle, GridLayout, ImageData, MIN_FILES, Selection, SessionConfig, UploadError,
    UploadResult,
};
