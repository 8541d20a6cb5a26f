//! Outbound transport for signature requests.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the browser transport reports itself unavailable since
//! submission only happens after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into [`TransportError`] so the form can catch it at
//! a single boundary. The browser transport raises non-2xx statuses as
//! errors instead of returning them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::SignatureRequest;

/// Fixed backend origin that receives every signature request.
pub const SIGNATURE_ENDPOINT: &str = "https://dropsignappbackend.onrender.com";

/// Errors raised while delivering a request to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, network, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a status the transport treats as failure.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The payload could not be encoded as JSON.
    #[error("payload encode failed: {0}")]
    Encode(String),

    /// No network access in this build (server-side render).
    #[error("transport not available on server")]
    Unavailable,
}

/// Delivers a JSON request body to a URL and reports the HTTP status.
///
/// `?Send` because browser futures are bound to the single WASM thread.
#[async_trait(?Send)]
pub trait SignatureTransport {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response is obtained or the
    /// implementation rejects the response status.
    async fn post_json(&self, url: &str, body: &SignatureRequest) -> Result<u16, TransportError>;
}

/// Send `request` to [`SIGNATURE_ENDPOINT`] through `transport`.
///
/// # Errors
///
/// Propagates the transport's [`TransportError`].
pub async fn send_signature_request<T>(transport: &T, request: &SignatureRequest) -> Result<u16, TransportError>
where
    T: SignatureTransport + ?Sized,
{
    transport.post_json(SIGNATURE_ENDPOINT, request).await
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl SignatureTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &SignatureRequest) -> Result<u16, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = resp.status();
            if !is_success_status(status) {
                return Err(TransportError::Status(status));
            }
            Ok(status)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}
