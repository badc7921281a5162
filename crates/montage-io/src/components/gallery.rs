//! Gallery of composite images, most recent first.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use montage_session::{Gallery, GalleryEntry};

use crate::download;

/// Props for the [`GalleryView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct GalleryViewProps {
    /// The gallery model, written by the surface on each success.
    gallery: Signal<Gallery>,
}

/// Renders every gallery entry with a download button, or a placeholder
/// until the first image arrives.
#[component]
pub fn GalleryView(props: GalleryViewProps) -> Element {
    let download_error = use_signal(|| Option::<String>::None);
    let gallery = props.gallery.read();

    rsx! {
        section { class: "montage-gallery",
            h2 { class: "montage-heading", "Results" }

            if let Some(ref err) = download_error() {
                p { class: "montage-error", "{err}" }
            }

            if gallery.placeholder_visible() {
                p { class: "montage-placeholder", "No images yet. Combine a few to get started." }
            }

            div { class: "montage-gallery__grid",
                for entry in gallery.entries() {
                    {render_entry(entry, download_error)}
                }
            }
        }
    }
}

/// Render one gallery tile.
fn render_entry(entry: &GalleryEntry, mut download_error: Signal<Option<String>>) -> Element {
    let src = entry.image.as_str().to_owned();
    let file_name = entry.file_name();
    let on_download = {
        let src = src.clone();
        let file_name = file_name.clone();
        move |_| match download::trigger_download(&src, &file_name) {
            Ok(()) => download_error.set(None),
            Err(e) => download_error.set(Some(format!("Download failed: {e}"))),
        }
    };

    rsx! {
        figure { key: "{entry.id}", class: "montage-gallery__item",
            img { src: "{src}", alt: "Combined image {entry.id}" }
            figcaption { class: "montage-gallery__caption",
                span { "{file_name}" }
                button {
                    class: "montage-icon-btn",
                    title: "Download",
                    aria_label: "Download {file_name}",
                    onclick: on_download,
                    Icon { icon: LdDownload, width: 16, height: 16 }
                }
            }
        }
    }
}
