use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use montage_io::{
    FetchTransport, FileUpload, GalleryView, LayoutControls, Loader, SignalSurface, ToastView,
    use_page_signals,
};
use montage_session::{DragKind, GridLayout, LoadedFiles, SessionConfig, UploadController};

/// The page's single upload controller, shared by the event handlers.
type Controller = Rc<RefCell<UploadController<SignalSurface>>>;

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting montage");
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the upload controller and wires the upload zone, layout
/// controls, loader, gallery and toast to it. The controller writes page
/// state through [`SignalSurface`]; components only read those signals
/// and report user input back.
fn app() -> Element {
    // --- Application state ---
    let signals = use_page_signals();
    let mut layout = use_signal(GridLayout::default);
    let controller: Controller = use_hook(|| {
        let config = SessionConfig::default();
        let surface = SignalSurface::new(signals, config.toast_duration_ms);
        Rc::new(RefCell::new(UploadController::new(config, surface)))
    });

    // --- Input handlers ---
    // A pick or drop is accepted or refused when the event fires; the
    // files read afterwards only land if no newer input or submission
    // started in between.
    let on_pick = {
        let controller = Rc::clone(&controller);
        move |()| controller.borrow_mut().begin_pick()
    };

    let on_drag = {
        let controller = Rc::clone(&controller);
        move |kind: DragKind| {
            controller.borrow_mut().on_drag(kind);
        }
    };

    let on_drop = {
        let controller = Rc::clone(&controller);
        move |()| controller.borrow_mut().begin_drop()
    };

    let on_files = {
        let controller = Rc::clone(&controller);
        move |loaded: LoadedFiles| {
            controller.borrow_mut().deliver_files(loaded);
        }
    };

    // --- Submission ---
    // The controller is borrowed only around the await inside `submit`,
    // so drag events keep being handled while the request is pending.
    let on_submit = {
        let controller = Rc::clone(&controller);
        move |()| {
            let controller = Rc::clone(&controller);
            spawn(async move {
                montage_session::submit(&controller, &FetchTransport).await;
            });
        }
    };

    let on_layout_change = {
        let controller = Rc::clone(&controller);
        move |new_layout: GridLayout| {
            layout.set(new_layout);
            controller.borrow_mut().set_layout(new_layout);
        }
    };

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "montage-app",
            header { class: "montage-header",
                h1 { class: "montage-title", "montage" }
                p { class: "montage-subtitle",
                    "Combine several images into one composite"
                }
            }

            main { class: "montage-main",
                div { class: "montage-column",
                    FileUpload {
                        label: (signals.label)(),
                        picker_enabled: (signals.picker_enabled)(),
                        submit_enabled: (signals.submit_enabled)(),
                        indicator: (signals.indicator)(),
                        on_pick: on_pick,
                        on_drag: on_drag,
                        on_drop: on_drop,
                        on_files: on_files,
                        on_submit: on_submit,
                    }

                    LayoutControls {
                        layout: layout(),
                        disabled: (signals.loader_visible)(),
                        on_change: on_layout_change,
                    }

                    Loader { visible: (signals.loader_visible)() }
                }

                div { class: "montage-column montage-column--wide",
                    GalleryView { gallery: signals.gallery }
                }
            }

            ToastView { notifier: signals.notifier }
        }
    }
}
