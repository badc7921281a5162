//! Notifier model: one transient message at a time.
//!
//! Showing a message replaces whatever is visible and hands back a
//! [`ToastId`]. The caller schedules [`Notifier::hide`] with that id after
//! the configured delay; a hide for an older id does nothing, so the most
//! recent message keeps its full display time.

/// Identifies one call to [`Notifier::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Id returned by the `show` call that produced this toast.
    pub id: ToastId,
    /// Message text.
    pub message: String,
}

/// Holds the currently visible notification, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifier {
    next_id: u64,
    current: Option<Toast>,
}

impl Notifier {
    /// Create a notifier with nothing visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing any visible one.
    pub fn show(&mut self, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.current = Some(Toast {
            id,
            message: message.into(),
        });
        id
    }

    /// Hide the toast produced by `id` if it is still the visible one.
    ///
    /// Returns `true` if something was hidden. Repeated or stale calls
    /// are no-ops.
    pub fn hide(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The visible toast.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
