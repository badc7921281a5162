//! Batch upload over the browser Fetch API.
//!
//! [`FetchTransport`] turns an [`UploadRequest`] into a `FormData` body
//! (one `Blob` part per file, all under the request's field name, in
//! selection order) and `POST`s it with `window.fetch`. Any HTTP status
//! is returned to the controller as a [`RawResponse`]; only failures to
//! exchange the request at all become a [`TransportError`].
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use montage_session::{FileHandle, RawResponse, Transport, TransportError, UploadRequest};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

/// Errors that can occur while sending a batch request.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A browser API call returned an error.
    #[error("{0}")]
    JsError(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        // `fetch` rejects with a `TypeError` whose message is the useful part.
        let message = value.dyn_ref::<js_sys::Error>().map_or_else(
            || format!("{value:?}"),
            |error| String::from(error.message()),
        );
        Self::JsError(message)
    }
}

/// [`Transport`] backed by `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    /// Send `request` as a multipart `POST`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::JsError`] if the body cannot be assembled,
    /// the global `window` is missing, or the request fails before a
    /// response arrives.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
    pub async fn post(request: &UploadRequest) -> Result<RawResponse, FetchError> {
        let form = FormData::new()?;
        for file in &request.files {
            form.append_with_blob_and_filename(&request.field_name, &file_blob(file)?, file.name())?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);
        let http_request = Request::new_with_str_and_init(&request.url, &init)?;

        let window =
            web_sys::window().ok_or_else(|| FetchError::JsError("no global window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&http_request))
            .await?
            .dyn_into()?;

        let status = response.status();
        // The body is only used for messages; an unreadable one is `None`.
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|text| text.as_string()),
            Err(_) => None,
        };

        Ok(RawResponse { status, body })
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: &UploadRequest) -> Result<RawResponse, TransportError> {
        Self::post(request).await.map_err(|e| {
            tracing::error!(error = %e, url = %request.url, "batch request failed");
            TransportError(e.to_string())
        })
    }
}

/// Wrap a file's bytes in a `Blob` typed by its extension.
fn file_blob(file: &FileHandle) -> Result<Blob, FetchError> {
    let bytes = js_sys::Uint8Array::from(file.bytes());
    let parts = js_sys::Array::new();
    parts.push(&bytes.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(file.mime_type());

    Ok(Blob::new_with_buffer_source_sequence_and_options(
        &parts, &opts,
    )?)
}
