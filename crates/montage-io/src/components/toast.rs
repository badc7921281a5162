//! Transient notification and loading indicator.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLoaderCircle;
use montage_session::Notifier;

/// Props for the [`ToastView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToastViewProps {
    /// The notifier model; its current toast is shown.
    notifier: Signal<Notifier>,
}

/// Shows the current notification, if any.
#[component]
pub fn ToastView(props: ToastViewProps) -> Element {
    let notifier = props.notifier.read();
    let Some(toast) = notifier.current() else {
        return rsx! {};
    };

    rsx! {
        div { class: "montage-toast", role: "status", "{toast.message}" }
    }
}

/// Spinner shown while a submission is in flight.
#[component]
pub fn Loader(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div { class: "montage-loader", role: "progressbar", aria_label: "Generating",
            Icon { icon: LdLoaderCircle, width: 24, height: 24, class: "montage-spin" }
            span { "Generating..." }
        }
    }
}
