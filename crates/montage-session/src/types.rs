//! Shared types for the montage upload session.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Minimum number of files a batch must contain before it may be submitted.
///
/// Checked both when deciding whether the submit trigger is enabled and
/// again at the submission entry point.
pub const MIN_FILES: usize = 2;

/// Placeholder shown in the selection label when nothing is selected.
pub const SELECTION_PROMPT: &str = "Select multiple images";

/// Notification shown after a composite image has been received.
pub const SUCCESS_MESSAGE: &str = "Image generated successfully.";

/// Known image extensions and the MIME type sent for each.
const MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// A file picked or dropped by the user.
///
/// The contents are reference-counted so that copying a selection into an
/// outbound request does not duplicate the image bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    name: String,
    bytes: Rc<[u8]>,
}

impl FileHandle {
    /// Create a new file handle from a file name and its contents.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Rc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// The file name as reported by the picker or drop event.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// MIME type derived from the file extension.
    ///
    /// Unknown or missing extensions fall back to
    /// `application/octet-stream`; the server sniffs the real format.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.name
            .rsplit_once('.')
            .and_then(|(_, ext)| {
                MIME_TYPES
                    .iter()
                    .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            })
            .map_or("application/octet-stream", |&(_, mime)| mime)
    }
}

impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The ordered set of files staged for submission.
///
/// May be empty. Files are kept in the order they were picked or dropped
/// and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Vec<FileHandle>);

impl Selection {
    /// Create a selection from a list of files.
    #[must_use]
    pub const fn new(files: Vec<FileHandle>) -> Self {
        Self(files)
    }

    /// Returns the number of files in the selection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no files are selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of all files in selection order.
    #[must_use]
    pub fn files(&self) -> &[FileHandle] {
        &self.0
    }
}

/// A displayable image payload returned by the server (a `data:` URI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Wrap an image payload.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The payload as a string, suitable for an `<img src>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors surfaced to the user during a submission attempt.
///
/// Every variant renders as a plain message through the notifier; the
/// user never sees a status code or a backtrace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Too few files were selected when a submission was attempted.
    #[error("Select at least {required} images to combine ({actual} selected).")]
    Validation {
        /// The minimum number of files required.
        required: usize,
        /// The number of files actually selected.
        actual: usize,
    },

    /// The request could not be sent or its response could not be read.
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("{message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message taken from the response body, or a generic one.
        message: String,
    },

    /// The server answered successfully but reported a processing failure,
    /// or the body could not be understood.
    #[error("{0}")]
    Application(String),
}

/// Outcome of a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// The server produced a composite image.
    Success {
        /// The composite image.
        image_data: ImageData,
    },
    /// The attempt failed.
    Failure {
        /// Why it failed.
        error: UploadError,
    },
}

/// How the server should arrange the uploaded images.
///
/// Serialized into the `num_cols` / `num_rows` query parameters of the
/// processing endpoint. `Auto` sends neither and lets the server pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum GridLayout {
    /// Server default arrangement.
    #[default]
    Auto,
    /// Fixed number of columns; rows follow from the image count.
    Columns(u32),
    /// Fixed number of rows; columns follow from the image count.
    Rows(u32),
}

impl GridLayout {
    /// Query string for this layout, without the leading `?`.
    ///
    /// Counts are clamped to at least 1; a zero count would make the
    /// server reject the request.
    #[must_use]
    pub fn query(self) -> Option<String> {
        match self {
            Self::Auto => None,
            Self::Columns(n) => Some(format!("num_cols={}&num_rows=0", n.max(1))),
            Self::Rows(n) => Some(format!("num_cols=0&num_rows={}", n.max(1))),
        }
    }
}

/// Configuration for an upload session.
///
/// All fields have defaults matching the processing server's routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path (or absolute URL) of the processing endpoint.
    pub endpoint: String,

    /// Multipart field name repeated once per uploaded file.
    pub field_name: String,

    /// How long a notification stays visible, in milliseconds.
    pub toast_duration_ms: u32,

    /// Requested arrangement of the composite image.
    pub layout: GridLayout,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("/process-images/"),
            field_name: String::from("files"),
            toast_duration_ms: 3000,
            layout: GridLayout::default(),
        }
    }
}

impl SessionConfig {
    /// Full request URL: the endpoint plus any layout query parameters.
    #[must_use]
    pub fn request_url(&self) -> String {
        match self.layout.query() {
            None => self.endpoint.clone(),
            Some(query) => {
                let separator = if self.endpoint.contains('?') { '&' } else { '?' };
                format!("{}{separator}{query}", self.endpoint)
            }
        }
    }
}
