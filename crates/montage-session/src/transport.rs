//! Collaborator traits: the network client and the UI surface.
//!
//! The controller is constructed with an implementation of each, so the
//! whole session can be driven in tests without a browser.

use crate::effect::Effect;
use crate::request::{RawResponse, UploadRequest};

/// The request never produced a response (offline, CORS, aborted, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one batch request and waits for the response.
///
/// Any HTTP status counts as a response; only failures to exchange a
/// request at all are a [`TransportError`].
// Futures are not `Send`: the browser runtime is single-threaded.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and return the status and body text.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be sent or the
    /// response could not be received.
    async fn send(&self, request: &UploadRequest) -> Result<RawResponse, TransportError>;
}

/// Applies the controller's [`Effect`]s to whatever renders the page.
pub trait UiSurface {
    /// Apply one effect.
    fn apply(&mut self, effect: Effect);
}
