//! In-memory transport for unit tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::api::{SignatureTransport, TransportError};
use super::types::SignatureRequest;

/// Records every request and answers with a fixed reply.
pub(crate) struct RecordingTransport {
    reply: Result<u16, TransportError>,
    pub(crate) calls: RefCell<Vec<(String, SignatureRequest)>>,
}

impl RecordingTransport {
    pub(crate) fn replying(reply: Result<u16, TransportError>) -> Self {
        Self { reply, calls: RefCell::new(Vec::new()) }
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::replying(Ok(status))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn last_body(&self) -> Option<SignatureRequest> {
        self.calls.borrow().last().map(|(_, body)| body.clone())
    }
}

#[async_trait(?Send)]
impl SignatureTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: &SignatureRequest) -> Result<u16, TransportError> {
        self.calls.borrow_mut().push((url.to_owned(), body.clone()));
        self.reply.clone()
    }
}
