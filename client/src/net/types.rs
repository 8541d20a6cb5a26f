//! Wire DTOs for the signature-request endpoint.
//!
//! DESIGN
//! ======
//! The backend expects camelCase `templateId` next to a snake_case
//! `test_mode` flag, so field names are pinned individually rather than with a
//! blanket `rename_all`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Value of `test_mode` on every request sent by this client.
pub const TEST_MODE_ENABLED: u8 = 1;

/// Body of `POST` to the signature backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignatureRequest {
    /// Opaque template identifier held by the backend.
    #[serde(rename = "templateId")]
    pub template_id: String,
    /// Signers in form order.
    pub participants: Vec<ParticipantPayload>,
    /// Non-binding processing flag; always [`TEST_MODE_ENABLED`].
    pub test_mode: u8,
}

/// One signer as sent over the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParticipantPayload {
    /// Upper-cased role (e.g. `"SELLER"`).
    pub role: String,
    /// Trimmed display name.
    pub name: String,
    /// Trimmed email address.
    pub email: String,
    /// Signing order; `null` when the edited value did not parse.
    pub order: Option<i64>,
}
