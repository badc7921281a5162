//! Batch upload zone: drag-and-drop region, file picker and submit button.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdImagePlus;
use montage_session::{DragKind, DropIndicator, FileHandle, InputTicket, LoadedFiles};

use crate::picker::PICKER_ID;

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Selection label ("3 files selected" or the prompt).
    label: String,
    /// Whether the picker accepts input.
    picker_enabled: bool,
    /// Whether the submit button accepts clicks.
    submit_enabled: bool,
    /// Current drop zone highlight.
    indicator: DropIndicator,
    /// Called when the picker changes; `None` means the files are not read.
    on_pick: Callback<(), Option<InputTicket>>,
    /// Called synchronously for dragenter, dragover and dragleave.
    on_drag: EventHandler<DragKind>,
    /// Called when files are dropped; `None` means the files are not read.
    on_drop: Callback<(), Option<InputTicket>>,
    /// Called with the files of an accepted pick or drop once read.
    on_files: EventHandler<LoadedFiles>,
    /// Called when the submit button is clicked.
    on_submit: EventHandler<()>,
}

/// Read every file, preserving order. Returns the files read and the
/// names of the ones that could not be read.
async fn read_files(files: Vec<FileData>) -> (Vec<FileHandle>, Vec<String>) {
    let mut handles = Vec::with_capacity(files.len());
    let mut unreadable = Vec::new();
    for file in files {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => handles.push(FileHandle::new(name, bytes.to_vec())),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "failed to read file");
                unreadable.push(name);
            }
        }
    }
    (handles, unreadable)
}

/// Read `files` in the background and hand them to `on_files` under
/// `ticket`.
fn load(ticket: InputTicket, files: Vec<FileData>, on_files: EventHandler<LoadedFiles>) {
    spawn(async move {
        let (files, unreadable) = read_files(files).await;
        on_files.call(LoadedFiles {
            ticket,
            files,
            unreadable,
        });
    });
}

/// A drop zone with a multi-file picker and a submit button.
///
/// Every drag event is reported after the browser's default handling has
/// been suppressed. Whether a pick or drop is taken is decided when the
/// event fires (`on_pick` / `on_drop`); only accepted inputs are read and
/// handed to `on_files`.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let handle_files = move |evt: FormEvent| {
        let Some(ticket) = props.on_pick.call(()) else {
            return;
        };
        load(ticket, evt.files(), props.on_files);
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        let Some(ticket) = props.on_drop.call(()) else {
            return;
        };
        load(ticket, evt.files(), props.on_files);
    };

    let zone_class = match props.indicator {
        DropIndicator::Cleared => "montage-drop",
        DropIndicator::Accepting => "montage-drop montage-drop--active",
        DropIndicator::Busy => "montage-drop montage-drop--busy",
    };

    let picker_class = if props.picker_enabled {
        "montage-btn montage-btn--primary"
    } else {
        "montage-btn montage-btn--disabled"
    };
    let submit_class = if props.submit_enabled {
        "montage-btn montage-btn--primary"
    } else {
        "montage-btn montage-btn--disabled"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                props.on_drag.call(DragKind::Enter);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                props.on_drag.call(DragKind::Over);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                props.on_drag.call(DragKind::Leave);
            },
            ondrop: handle_drop,

            Icon { icon: LdImagePlus, width: 32, height: 32, class: "montage-drop__icon" }

            p { class: "montage-drop__label", "{props.label}" }

            if props.indicator == DropIndicator::Busy {
                p { class: "montage-drop__hint", "Generating... drops are ignored until it finishes." }
            } else {
                p { class: "montage-drop__hint", "Drop images here or" }
            }

            div { class: "montage-drop__actions",
                label { class: "{picker_class}",
                    input {
                        id: PICKER_ID,
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        class: "montage-hidden",
                        disabled: !props.picker_enabled,
                        onchange: handle_files,
                    }
                    "Choose Files"
                }

                button {
                    class: "{submit_class}",
                    disabled: !props.submit_enabled,
                    onclick: move |_| props.on_submit.call(()),
                    "Combine"
                }
            }
        }
    }
}
