//! Dioxus-signal implementation of the controller's UI surface.
//!
//! [`PageSignals`] holds one signal per piece of page state the
//! controller drives. [`SignalSurface`] applies [`Effect`]s by writing
//! those signals; components read them and re-render.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use montage_session::{DropIndicator, Effect, Gallery, Notifier, UiSurface, tracker};

use crate::picker;

/// Reactive page state written by [`SignalSurface`].
#[derive(Clone, Copy, PartialEq)]
pub struct PageSignals {
    /// Whether the file picker accepts input.
    pub picker_enabled: Signal<bool>,
    /// Whether the submit trigger accepts clicks.
    pub submit_enabled: Signal<bool>,
    /// Whether the loading indicator is shown.
    pub loader_visible: Signal<bool>,
    /// Drop zone highlight.
    pub indicator: Signal<DropIndicator>,
    /// Selection label text.
    pub label: Signal<String>,
    /// Composite images received so far.
    pub gallery: Signal<Gallery>,
    /// Currently visible notification.
    pub notifier: Signal<Notifier>,
}

/// Create the page signals, initialized to the controller's idle state.
pub fn use_page_signals() -> PageSignals {
    PageSignals {
        picker_enabled: use_signal(|| true),
        submit_enabled: use_signal(|| false),
        loader_visible: use_signal(|| false),
        indicator: use_signal(DropIndicator::default),
        label: use_signal(|| tracker::selection_label(0)),
        gallery: use_signal(Gallery::new),
        notifier: use_signal(Notifier::new),
    }
}

/// [`UiSurface`] that writes [`PageSignals`].
pub struct SignalSurface {
    signals: PageSignals,
    toast_duration_ms: u32,
}

impl SignalSurface {
    /// Create a surface writing `signals`, hiding notifications after
    /// `toast_duration_ms`.
    #[must_use]
    pub const fn new(signals: PageSignals, toast_duration_ms: u32) -> Self {
        Self {
            signals,
            toast_duration_ms,
        }
    }
}

/// Write `value` only if it differs, so redundant effects do not cause
/// re-renders (the controller's constructor re-applies the initial state
/// while the app is still rendering).
fn set_if_changed<T: PartialEq + 'static>(signal: &mut Signal<T>, value: T) {
    if *signal.peek() != value {
        signal.set(value);
    }
}

impl UiSurface for SignalSurface {
    fn apply(&mut self, effect: Effect) {
        let signals = &mut self.signals;
        match effect {
            Effect::SetPickerEnabled(on) => set_if_changed(&mut signals.picker_enabled, on),
            Effect::ResetPicker => {
                if let Err(e) = picker::reset_picker() {
                    tracing::warn!(error = %e, "could not reset file picker");
                }
            }
            Effect::SetSubmitEnabled(on) => set_if_changed(&mut signals.submit_enabled, on),
            Effect::SetLoaderVisible(on) => set_if_changed(&mut signals.loader_visible, on),
            Effect::SetDropIndicator(indicator) => {
                set_if_changed(&mut signals.indicator, indicator);
            }
            Effect::SetSelectionLabel(label) => set_if_changed(&mut signals.label, label),
            Effect::AppendImage(image) => {
                signals.gallery.write().append(image);
            }
            Effect::Notify(message) => {
                let id = signals.notifier.write().show(message);
                let mut notifier = signals.notifier;
                let delay = self.toast_duration_ms;
                spawn(async move {
                    TimeoutFuture::new(delay).await;
                    // No-op if a newer message replaced this one.
                    notifier.write().hide(id);
                });
            }
        }
    }
}
