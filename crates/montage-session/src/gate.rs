//! Session gate: the `Idle` / `Submitting` state machine.
//!
//! Guarantees at most one submission in flight. Transitions are pure:
//! [`SessionState::on`] returns the next state together with the effects
//! the UI must apply, or `None` when the event is not legal in the
//! current state (which callers treat as a silent no-op).

use std::fmt;

use crate::effect::Effect;
use crate::tracker;

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No request in flight; input is accepted.
    #[default]
    Idle,
    /// A request is in flight; all input channels are locked.
    Submitting,
}

/// Events that drive the session gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// A submission is starting.
    Begin,
    /// The in-flight submission finished (successfully or not).
    Release {
        /// Selection size after the outcome was applied; decides whether
        /// the submit trigger comes back enabled.
        selection_len: usize,
    },
}

/// Result of a legal gate transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the transition.
    pub next: SessionState,
    /// UI changes implied by the transition, in application order.
    pub effects: Vec<Effect>,
}

impl SessionState {
    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Apply `event` to this state.
    ///
    /// Returns `None` for `Begin` while already submitting and for
    /// `Release` while idle.
    #[must_use]
    pub fn on(self, event: GateEvent) -> Option<Transition> {
        match (self, event) {
            (Self::Idle, GateEvent::Begin) => Some(Transition {
                next: Self::Submitting,
                effects: vec![
                    Effect::SetPickerEnabled(false),
                    Effect::SetSubmitEnabled(false),
                    Effect::SetLoaderVisible(true),
                ],
            }),
            (Self::Submitting, GateEvent::Release { selection_len }) => Some(Transition {
                next: Self::Idle,
                effects: vec![
                    Effect::SetPickerEnabled(true),
                    Effect::SetLoaderVisible(false),
                    // Recomputed, not restored: success clears the
                    // selection while failure keeps it.
                    Effect::SetSubmitEnabled(tracker::can_submit(selection_len)),
                ],
            }),
            (Self::Submitting, GateEvent::Begin) | (Self::Idle, GateEvent::Release { .. }) => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
        })
    }
}
