//! The upload controller: owns the session state and the selection.
//!
//! One [`UploadController`] exists per page. Picker changes and drops
//! both funnel into [`UploadController::set_selection`]; submissions are
//! split into [`begin_submit`](UploadController::begin_submit) and
//! [`finish_submit`](UploadController::finish_submit) around the single
//! network await, so the controller is never borrowed while the request is
//! suspended and drag events keep being handled.
//!
//! Reading picked or dropped files is asynchronous. The decision to take
//! an input is made when the event fires: [`begin_pick`] and
//! [`begin_drop`] hand out an [`InputTicket`], and
//! [`deliver_files`] only applies files carrying the most recent ticket.
//! Starting a submission invalidates every outstanding ticket.
//!
//! [`begin_pick`]: UploadController::begin_pick
//! [`begin_drop`]: UploadController::begin_drop
//! [`deliver_files`]: UploadController::deliver_files

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, info, warn};

use crate::drop_zone::{self, DragKind, DragResponse};
use crate::effect::{DropIndicator, Effect};
use crate::gate::{GateEvent, SessionState};
use crate::request::{RawResponse, UploadRequest, interpret_response};
use crate::tracker::{self, SelectionSummary};
use crate::transport::{Transport, TransportError, UiSurface};
use crate::types::{
    FileHandle, GridLayout, MIN_FILES, SUCCESS_MESSAGE, Selection, SessionConfig, UploadError,
    UploadResult,
};

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(1);

/// Proof that a submission is in flight.
///
/// Only [`UploadController::begin_submit`] creates one and
/// [`UploadController::finish_submit`] consumes it, so the gate is
/// released exactly once per submission. A token only releases the
/// controller that issued it.
#[must_use = "an in-flight submission must be finished to release the session gate"]
#[derive(Debug)]
pub struct PendingUpload {
    controller: u64,
    request: UploadRequest,
}

impl PendingUpload {
    /// The request to send.
    pub const fn request(&self) -> &UploadRequest {
        &self.request
    }
}

/// A [`PendingUpload`] was handed to a controller that did not issue it.
///
/// The token is returned so it can still finish its own submission.
#[derive(Debug, thiserror::Error)]
#[error("pending upload was issued by another controller")]
pub struct ForeignUpload(pub PendingUpload);

/// Permission to deliver the files of one picker change or drop.
///
/// Issued when the input event fires, before the files are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputTicket {
    controller: u64,
    seq: u64,
}

/// Files read for one input, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFiles {
    /// Ticket issued when the input event fired.
    pub ticket: InputTicket,
    /// Files that were read, in input order.
    pub files: Vec<FileHandle>,
    /// Names of files whose contents could not be read.
    pub unreadable: Vec<String>,
}

/// Client-side upload session.
#[derive(Debug)]
pub struct UploadController<S> {
    id: u64,
    config: SessionConfig,
    state: SessionState,
    selection: Selection,
    indicator: DropIndicator,
    /// Sequence number of the newest ticket; older tickets are stale.
    latest_input: u64,
    surface: S,
}

impl<S: UiSurface> UploadController<S> {
    /// Create an idle controller with an empty selection and bring the
    /// surface into the matching initial state.
    pub fn new(config: SessionConfig, surface: S) -> Self {
        let mut controller = Self {
            id: NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed),
            config,
            state: SessionState::Idle,
            selection: Selection::default(),
            indicator: DropIndicator::Cleared,
            latest_input: 0,
            surface,
        };
        controller.emit([
            Effect::SetPickerEnabled(true),
            Effect::SetLoaderVisible(false),
            Effect::SetDropIndicator(DropIndicator::Cleared),
        ]);
        controller.emit(SelectionSummary::new(0).into_effects());
        controller
    }

    /// Current gate state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Files currently staged for submission.
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Session configuration.
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The injected UI surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Change the requested grid layout for subsequent submissions.
    pub fn set_layout(&mut self, layout: GridLayout) {
        debug!(?layout, "grid layout changed");
        self.config.layout = layout;
    }

    /// Replace the selection. Shared by the picker and the drop zone.
    ///
    /// Ignored while a submission is in flight.
    pub fn set_selection(&mut self, files: Vec<FileHandle>) {
        if self.state.is_submitting() {
            warn!(
                count = files.len(),
                "selection change ignored during submission"
            );
            return;
        }
        self.selection = Selection::new(files);
        debug!(count = self.selection.len(), "selection replaced");
        self.emit(SelectionSummary::new(self.selection.len()).into_effects());
    }

    /// React to a drag event over the drop zone.
    pub fn on_drag(&mut self, kind: DragKind) -> DragResponse {
        let response = drop_zone::respond(kind, self.state);
        // `dragover` repeats continuously; only report changes.
        if response.indicator != self.indicator {
            self.indicator = response.indicator;
            self.emit([Effect::SetDropIndicator(response.indicator)]);
        }
        response
    }

    /// A picker change fired. Returns the ticket for its files, or `None`
    /// while a submission is in flight.
    pub fn begin_pick(&mut self) -> Option<InputTicket> {
        if self.state.is_submitting() {
            warn!("picker change ignored during submission");
            return None;
        }
        Some(self.next_ticket())
    }

    /// A drop fired. Clears the indicator and returns the ticket for the
    /// dropped files, or `None` if they must be discarded unread.
    pub fn begin_drop(&mut self) -> Option<InputTicket> {
        if !self.on_drag(DragKind::Drop).accept_files {
            debug!("discarding files dropped during submission");
            return None;
        }
        Some(self.next_ticket())
    }

    /// Apply files read for a picker change or drop.
    ///
    /// Files are discarded if a newer input or a submission started after
    /// their ticket was issued. Unreadable files are reported to the
    /// user. Returns `true` if the selection was replaced.
    pub fn deliver_files(&mut self, loaded: LoadedFiles) -> bool {
        let LoadedFiles {
            ticket,
            files,
            unreadable,
        } = loaded;

        if ticket.controller != self.id || ticket.seq != self.latest_input {
            debug!(
                count = files.len(),
                seq = ticket.seq,
                latest = self.latest_input,
                "discarding files from a superseded input"
            );
            return false;
        }
        if self.state.is_submitting() {
            debug!(count = files.len(), "discarding files during submission");
            return false;
        }

        if !unreadable.is_empty() {
            warn!(files = ?unreadable, "some files could not be read");
            self.emit([Effect::Notify(tracker::unreadable_message(&unreadable))]);
        }
        self.set_selection(files);
        true
    }

    fn next_ticket(&mut self) -> InputTicket {
        self.latest_input += 1;
        InputTicket {
            controller: self.id,
            seq: self.latest_input,
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` without side effects while one is already in
    /// flight. With fewer than [`MIN_FILES`] files, shows a validation
    /// message and returns `None`. Otherwise locks the gate and returns
    /// the request to send.
    pub fn begin_submit(&mut self) -> Option<PendingUpload> {
        if self.state.is_submitting() {
            debug!("submission already in flight, trigger ignored");
            return None;
        }

        let count = self.selection.len();
        if !tracker::can_submit(count) {
            let error = UploadError::Validation {
                required: MIN_FILES,
                actual: count,
            };
            warn!(%error, "submission rejected");
            self.emit([Effect::Notify(error.to_string())]);
            return None;
        }

        let request = UploadRequest::new(&self.config, &self.selection);
        // Reads still in progress belong to inputs made before this batch.
        self.latest_input += 1;
        self.transition(GateEvent::Begin);
        info!(files = count, url = %request.url, "submitting batch");
        Some(PendingUpload {
            controller: self.id,
            request,
        })
    }

    /// Finish the submission started by `pending` with what the
    /// transport returned, and release the gate.
    ///
    /// # Errors
    ///
    /// Returns [`ForeignUpload`] with the token, and changes nothing, if
    /// `pending` was issued by a different controller.
    pub fn finish_submit(
        &mut self,
        pending: PendingUpload,
        outcome: Result<RawResponse, TransportError>,
    ) -> Result<(), ForeignUpload> {
        if pending.controller != self.id {
            return Err(ForeignUpload(pending));
        }
        let PendingUpload { request, .. } = pending;
        debug!(files = request.files.len(), "batch request completed");

        let result = match outcome {
            Ok(response) => interpret_response(&response),
            Err(e) => UploadResult::Failure {
                error: UploadError::Network(format!("Network error: {e}")),
            },
        };

        match result {
            UploadResult::Success { image_data } => {
                info!("composite image received");
                self.selection = Selection::default();
                self.emit([
                    Effect::AppendImage(image_data),
                    Effect::ResetPicker,
                    Effect::SetSelectionLabel(tracker::selection_label(0)),
                    Effect::Notify(SUCCESS_MESSAGE.to_owned()),
                ]);
            }
            UploadResult::Failure { error } => {
                error!(%error, "upload failed");
                self.emit([Effect::Notify(error.to_string())]);
            }
        }

        self.transition(GateEvent::Release {
            selection_len: self.selection.len(),
        });
        Ok(())
    }

    fn transition(&mut self, event: GateEvent) {
        let Some(transition) = self.state.on(event) else {
            return;
        };
        debug!(from = %self.state, to = %transition.next, "session gate transition");
        self.state = transition.next;
        self.emit(transition.effects);
    }

    fn emit(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.surface.apply(effect);
        }
    }
}

/// Run one full submission: begin, await the transport, finish.
///
/// The controller is only borrowed before and after the await, never
/// across it. Returns `true` if a request was sent.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn submit<S: UiSurface, T: Transport>(
    controller: &RefCell<UploadController<S>>,
    transport: &T,
) -> bool {
    let Some(pending) = controller.borrow_mut().begin_submit() else {
        return false;
    };
    let outcome = transport.send(pending.request()).await;
    if let Err(e) = controller.borrow_mut().finish_submit(pending, outcome) {
        error!(%e, "submission could not be finished");
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use futures::executor::block_on;

    use super::*;
    use crate::gallery::Gallery;
    use crate::notifier::Notifier;
    use crate::types::{ImageData, SELECTION_PROMPT};

    /// A surface that models the page the way the browser would render it.
    #[derive(Debug, Default, PartialEq)]
    struct PageModel {
        picker_enabled: bool,
        picker_resets: usize,
        submit_enabled: bool,
        loader_visible: bool,
        indicator: DropIndicator,
        label: String,
        gallery: Gallery,
        notifier: Notifier,
        notifications: Vec<String>,
    }

    impl UiSurface for PageModel {
        fn apply(&mut self, effect: Effect) {
            match effect {
                Effect::SetPickerEnabled(on) => self.picker_enabled = on,
                Effect::ResetPicker => self.picker_resets += 1,
                Effect::SetSubmitEnabled(on) => self.submit_enabled = on,
                Effect::SetLoaderVisible(on) => self.loader_visible = on,
                Effect::SetDropIndicator(indicator) => self.indicator = indicator,
                Effect::SetSelectionLabel(label) => self.label = label,
                Effect::AppendImage(image) => {
                    self.gallery.append(image);
                }
                Effect::Notify(message) => {
                    self.notifier.show(message.clone());
                    self.notifications.push(message);
                }
            }
        }
    }

    /// Replays canned outcomes and counts requests.
    struct ScriptedTransport {
        outcomes: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
        sent: Cell<usize>,
    }

    impl ScriptedTransport {
        fn new(outcomes: Vec<Result<RawResponse, TransportError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                sent: Cell::new(0),
            }
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, _request: &UploadRequest) -> Result<RawResponse, TransportError> {
            self.sent.set(self.sent.get() + 1);
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError(String::from("no scripted response"))))
        }
    }

    fn files(n: usize) -> Vec<FileHandle> {
        (0..n)
            .map(|i| FileHandle::new(format!("img{i}.png"), vec![u8::try_from(i).unwrap()]))
            .collect()
    }

    fn controller() -> UploadController<PageModel> {
        UploadController::new(SessionConfig::default(), PageModel::default())
    }

    fn ok(status: u16, body: &str) -> Result<RawResponse, TransportError> {
        Ok(RawResponse {
            status,
            body: Some(body.to_owned()),
        })
    }

    const SUCCESS_BODY: &str = r#"{"status":"success","image_data":"data:image/png;base64,AAA"}"#;

    fn loaded(ticket: InputTicket, files: Vec<FileHandle>) -> LoadedFiles {
        LoadedFiles {
            ticket,
            files,
            unreadable: Vec::new(),
        }
    }

    /// Picker change followed by its completed read.
    fn pick(c: &mut UploadController<PageModel>, files: Vec<FileHandle>) -> bool {
        let ticket = c.begin_pick().unwrap();
        c.deliver_files(loaded(ticket, files))
    }

    /// Drag over the zone, drop, then the completed read.
    fn drop_in(c: &mut UploadController<PageModel>, files: Vec<FileHandle>) -> bool {
        c.on_drag(DragKind::Enter);
        c.on_drag(DragKind::Over);
        let ticket = c.begin_drop().unwrap();
        c.deliver_files(loaded(ticket, files))
    }

    #[test]
    fn initial_surface_state() {
        let c = controller();
        let page = c.surface();
        assert!(page.picker_enabled);
        assert!(!page.submit_enabled);
        assert!(!page.loader_visible);
        assert_eq!(page.label, SELECTION_PROMPT);
        assert!(page.gallery.placeholder_visible());
        assert_eq!(c.state(), SessionState::Idle);
    }

    #[test]
    fn enablement_tracks_selection_size_for_picker_and_drop() {
        for n in 0..6 {
            let mut picked = controller();
            assert!(pick(&mut picked, files(n)));
            assert_eq!(picked.surface().submit_enabled, n >= 2, "picked {n}");

            let mut dropped = controller();
            assert!(drop_in(&mut dropped, files(n)));
            assert_eq!(dropped.surface().submit_enabled, n >= 2, "dropped {n}");
        }
    }

    #[test]
    fn three_picked_files_enable_submit() {
        let mut c = controller();
        pick(&mut c, files(3));
        assert!(c.surface().submit_enabled);
        assert_eq!(c.surface().label, "3 files selected");
    }

    #[test]
    fn single_file_is_rejected_without_request() {
        let c = RefCell::new(controller());
        pick(&mut c.borrow_mut(), files(1));
        assert!(!c.borrow().surface().submit_enabled);

        let transport = ScriptedTransport::new(vec![ok(200, SUCCESS_BODY)]);
        assert!(!block_on(submit(&c, &transport)));
        assert_eq!(transport.sent.get(), 0);

        let c = c.into_inner();
        assert_eq!(c.state(), SessionState::Idle);
        assert_eq!(c.selection().len(), 1);
        let message = &c.surface().notifier.current().unwrap().message;
        assert_eq!(
            message,
            &UploadError::Validation {
                required: 2,
                actual: 1
            }
            .to_string()
        );
        assert!(!c.surface().loader_visible);
    }

    #[test]
    fn success_clears_selection_and_grows_gallery() {
        let c = RefCell::new(controller());
        pick(&mut c.borrow_mut(), files(2));

        let transport = ScriptedTransport::new(vec![ok(200, SUCCESS_BODY)]);
        assert!(block_on(submit(&c, &transport)));
        assert_eq!(transport.sent.get(), 1);

        let c = c.into_inner();
        let page = c.surface();
        assert_eq!(c.state(), SessionState::Idle);
        assert!(c.selection().is_empty());
        assert_eq!(page.gallery.len(), 1);
        assert_eq!(
            page.gallery.head().unwrap().image,
            ImageData::new("data:image/png;base64,AAA")
        );
        assert!(!page.gallery.placeholder_visible());
        assert_eq!(page.notifier.current().unwrap().message, SUCCESS_MESSAGE);
        assert_eq!(page.label, SELECTION_PROMPT);
        assert_eq!(page.picker_resets, 1);
        assert!(!page.submit_enabled);
        assert!(page.picker_enabled);
        assert!(!page.loader_visible);
    }

    #[test]
    fn server_error_keeps_selection() {
        let c = RefCell::new(controller());
        let picked = files(2);
        pick(&mut c.borrow_mut(), picked.clone());

        let transport = ScriptedTransport::new(vec![ok(500, r#"{"detail":"decode failed"}"#)]);
        assert!(block_on(submit(&c, &transport)));

        let c = c.into_inner();
        let page = c.surface();
        assert_eq!(page.notifier.current().unwrap().message, "decode failed");
        assert_eq!(c.selection().files(), picked.as_slice());
        assert!(page.submit_enabled);
        assert!(page.gallery.is_empty());
        assert!(page.gallery.placeholder_visible());
        assert_eq!(c.state(), SessionState::Idle);
        assert_eq!(page.picker_resets, 0);
    }

    #[test]
    fn drop_matches_pick() {
        let mut picked = controller();
        pick(&mut picked, files(2));

        let mut dropped = controller();
        drop_in(&mut dropped, files(2));

        assert_eq!(picked.selection(), dropped.selection());
        assert_eq!(picked.surface(), dropped.surface());
    }

    #[test]
    fn every_failure_kind_releases_gate_and_keeps_selection() {
        let outcomes = vec![
            Err(TransportError(String::from("offline"))),
            ok(503, ""),
            ok(200, r#"{"status":"error","detail":"too small"}"#),
            ok(200, "not json"),
        ];
        for outcome in outcomes {
            let c = RefCell::new(controller());
            pick(&mut c.borrow_mut(), files(3));
            let transport = ScriptedTransport::new(vec![outcome]);
            assert!(block_on(submit(&c, &transport)));

            let c = c.into_inner();
            assert_eq!(c.state(), SessionState::Idle);
            assert_eq!(c.selection().len(), 3);
            assert!(c.surface().gallery.is_empty());
            assert!(c.surface().submit_enabled);
            assert!(c.surface().picker_enabled);
            assert!(!c.surface().loader_visible);
            assert_eq!(c.surface().notifications.len(), 1);
        }
    }

    #[test]
    fn network_error_message_is_shown() {
        let c = RefCell::new(controller());
        pick(&mut c.borrow_mut(), files(2));
        let transport = ScriptedTransport::new(vec![Err(TransportError(String::from("offline")))]);
        block_on(submit(&c, &transport));
        assert_eq!(
            c.borrow().surface().notifier.current().unwrap().message,
            "Network error: offline"
        );
    }

    #[test]
    fn submitting_locks_inputs() {
        let mut c = controller();
        pick(&mut c, files(2));
        let pending = c.begin_submit().unwrap();

        assert_eq!(c.state(), SessionState::Submitting);
        assert!(!c.surface().picker_enabled);
        assert!(!c.surface().submit_enabled);
        assert!(c.surface().loader_visible);

        c.finish_submit(pending, ok(200, SUCCESS_BODY)).unwrap();
        assert_eq!(c.state(), SessionState::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_a_no_op() {
        let mut c = controller();
        pick(&mut c, files(2));
        let pending = c.begin_submit().unwrap();
        let notifications_before = c.surface().notifications.len();

        assert!(c.begin_submit().is_none());
        assert_eq!(c.selection().len(), 2);
        assert_eq!(c.surface().notifications.len(), notifications_before);
        assert_eq!(c.state(), SessionState::Submitting);

        c.finish_submit(pending, ok(200, SUCCESS_BODY)).unwrap();
        assert_eq!(c.surface().gallery.len(), 1);
    }

    #[test]
    fn drop_while_submitting_is_refused_at_drop_time() {
        let mut c = controller();
        let picked = files(2);
        pick(&mut c, picked.clone());
        let pending = c.begin_submit().unwrap();

        assert_eq!(c.on_drag(DragKind::Over).indicator, DropIndicator::Busy);
        assert_eq!(c.surface().indicator, DropIndicator::Busy);
        assert!(c.begin_drop().is_none());
        assert_eq!(c.surface().indicator, DropIndicator::Cleared);
        assert_eq!(c.selection().files(), picked.as_slice());

        c.finish_submit(pending, ok(500, "")).unwrap();
        assert_eq!(c.selection().files(), picked.as_slice());
    }

    #[test]
    fn read_started_before_submission_is_discarded_after_release() {
        let mut c = controller();
        let picked = files(2);
        pick(&mut c, picked.clone());

        // Dropped while idle, but the read outlives a whole submission.
        c.on_drag(DragKind::Over);
        let ticket = c.begin_drop().unwrap();
        let pending = c.begin_submit().unwrap();
        c.finish_submit(pending, Err(TransportError(String::from("offline"))))
            .unwrap();
        assert_eq!(c.state(), SessionState::Idle);

        assert!(!c.deliver_files(loaded(ticket, files(5))));
        assert_eq!(c.selection().files(), picked.as_slice());
        assert!(c.surface().submit_enabled);
        assert_eq!(c.surface().label, "2 files selected");
    }

    #[test]
    fn picker_change_while_submitting_is_ignored() {
        let mut c = controller();
        pick(&mut c, files(2));
        let pending = c.begin_submit().unwrap();
        assert!(c.begin_pick().is_none());
        c.set_selection(files(7));
        assert_eq!(c.selection().len(), 2);
        c.finish_submit(pending, ok(200, SUCCESS_BODY)).unwrap();
    }

    #[test]
    fn latest_input_wins_over_slower_earlier_read() {
        let mut c = controller();
        let first = c.begin_pick().unwrap();
        let second = c.begin_drop().unwrap();
        let newer = files(3);

        assert!(c.deliver_files(loaded(second, newer.clone())));
        assert!(!c.deliver_files(loaded(first, files(5))));
        assert_eq!(c.selection().files(), newer.as_slice());
        assert_eq!(c.surface().label, "3 files selected");
    }

    #[test]
    fn unreadable_files_are_reported() {
        let mut c = controller();
        let ticket = c.begin_pick().unwrap();
        assert!(c.deliver_files(LoadedFiles {
            ticket,
            files: files(2),
            unreadable: vec![String::from("broken.png")],
        }));

        assert_eq!(c.selection().len(), 2);
        assert_eq!(
            c.surface().notifier.current().unwrap().message,
            "Skipped 1 unreadable file: broken.png"
        );
    }

    #[test]
    fn ticket_from_another_controller_is_rejected() {
        let mut a = controller();
        let mut b = controller();
        let ticket = a.begin_pick().unwrap();
        b.begin_pick().unwrap();
        assert!(!b.deliver_files(loaded(ticket, files(2))));
        assert!(b.selection().is_empty());
    }

    #[test]
    fn pending_upload_only_releases_its_own_controller() {
        let mut a = controller();
        let mut b = controller();
        pick(&mut a, files(2));
        pick(&mut b, files(2));
        let pending_a = a.begin_submit().unwrap();
        let pending_b = b.begin_submit().unwrap();

        let ForeignUpload(pending_a) = b
            .finish_submit(pending_a, ok(200, SUCCESS_BODY))
            .unwrap_err();
        assert_eq!(b.state(), SessionState::Submitting);
        assert!(b.surface().gallery.is_empty());

        a.finish_submit(pending_a, ok(200, SUCCESS_BODY)).unwrap();
        b.finish_submit(pending_b, ok(500, "")).unwrap();
        assert_eq!(a.state(), SessionState::Idle);
        assert_eq!(a.surface().gallery.len(), 1);
        assert_eq!(b.state(), SessionState::Idle);
    }

    #[test]
    fn drag_indicator_reports_only_changes() {
        let mut c = controller();
        assert_eq!(c.on_drag(DragKind::Enter).indicator, DropIndicator::Accepting);
        assert_eq!(c.surface().indicator, DropIndicator::Accepting);
        c.on_drag(DragKind::Over);
        c.on_drag(DragKind::Leave);
        assert_eq!(c.surface().indicator, DropIndicator::Cleared);
    }

    #[test]
    fn repeated_successes_stack_gallery_newest_first() {
        let c = RefCell::new(controller());
        let transport = ScriptedTransport::new(vec![
            ok(200, r#"{"status":"success","image_data":"data:image/png;base64,ONE"}"#),
            ok(200, r#"{"status":"success","image_data":"data:image/png;base64,TWO"}"#),
        ]);
        for _ in 0..2 {
            pick(&mut c.borrow_mut(), files(2));
            assert!(block_on(submit(&c, &transport)));
        }
        let c = c.into_inner();
        let uris: Vec<&str> = c
            .surface()
            .gallery
            .entries()
            .map(|e| e.image.as_str())
            .collect();
        assert_eq!(
            uris,
            ["data:image/png;base64,TWO", "data:image/png;base64,ONE"]
        );
        assert!(!c.surface().gallery.placeholder_visible());
    }

    #[test]
    fn layout_reaches_request_url() {
        let mut c = controller();
        c.set_layout(GridLayout::Rows(2));
        pick(&mut c, files(2));
        let pending = c.begin_submit().unwrap();
        assert_eq!(
            pending.request().url,
            "/process-images/?num_cols=0&num_rows=2"
        );
        assert_eq!(pending.request().files.len(), 2);
        c.finish_submit(pending, ok(200, SUCCESS_BODY)).unwrap();
    }
}
