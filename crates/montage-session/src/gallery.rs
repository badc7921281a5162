//! Gallery model: composite images, most recent first.

use std::collections::VecDeque;

use crate::types::ImageData;

/// One rendered composite image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Session-unique id, increasing with each append.
    pub id: u64,
    /// The image payload.
    pub image: ImageData,
}

impl GalleryEntry {
    /// File name used when the entry is downloaded.
    ///
    /// The extension is taken from the `data:` URI media type, falling
    /// back to `png` (the server's output format).
    #[must_use]
    pub fn file_name(&self) -> String {
        let ext = self
            .image
            .as_str()
            .strip_prefix("data:image/")
            .and_then(|rest| rest.split([';', ',']).next())
            .filter(|subtype| !subtype.is_empty())
            .map_or("png", |subtype| match subtype {
                "jpeg" => "jpg",
                "svg+xml" => "svg",
                other => other,
            });
        format!("montage-{}.{ext}", self.id)
    }
}

/// Append-only (at the head) list of composite images.
///
/// Entries live for the whole page session; there is no eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    entries: VecDeque<GalleryEntry>,
    next_id: u64,
    placeholder_visible: bool,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            placeholder_visible: true,
        }
    }
}

impl Gallery {
    /// Create an empty gallery showing its placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `image` at the head and hide the placeholder.
    ///
    /// Returns the id of the new entry.
    pub fn append(&mut self, image: ImageData) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(GalleryEntry { id, image });
        // Never restored: entries are never removed.
        self.placeholder_visible = false;
        id
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &GalleryEntry> {
        self.entries.iter()
    }

    /// The most recently appended entry.
    #[must_use]
    pub fn head(&self) -> Option<&GalleryEntry> {
        self.entries.front()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the "no images yet" placeholder is shown.
    #[must_use]
    pub const fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }
}
