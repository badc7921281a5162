//! Drop zone adapter: drag events to indicator state.
//!
//! Every drag event over the zone suppresses the browser default (which
//! would navigate to the dropped file) and stops propagation; that part
//! is done by the event binding in `montage-io`. This module decides the
//! indicator and whether dropped files may reach the selection.

use crate::effect::DropIndicator;
use crate::gate::SessionState;

/// Kind of drag event received over the drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    /// `dragenter`
    Enter,
    /// `dragover`
    Over,
    /// `dragleave`
    Leave,
    /// `drop`
    Drop,
}

/// How the drop zone reacts to a drag event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResponse {
    /// Indicator to display after the event.
    pub indicator: DropIndicator,
    /// Whether files carried by the event may replace the selection.
    /// Only ever `true` for [`DragKind::Drop`].
    pub accept_files: bool,
}

/// Decide the response to `kind` given the current session state.
#[must_use]
pub const fn respond(kind: DragKind, state: SessionState) -> DragResponse {
    match kind {
        DragKind::Enter | DragKind::Over => DragResponse {
            indicator: if state.is_submitting() {
                DropIndicator::Busy
            } else {
                DropIndicator::Accepting
            },
            accept_files: false,
        },
        DragKind::Leave => DragResponse {
            indicator: DropIndicator::Cleared,
            accept_files: false,
        },
        DragKind::Drop => DragResponse {
            indicator: DropIndicator::Cleared,
            accept_files: !state.is_submitting(),
        },
    }
}
