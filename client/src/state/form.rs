//! Signature-request form state and its mutation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SubmissionForm` keeps one `RwSignal<FormState>` and funnels every change
//! through the methods here, so validation and payload shaping stay testable
//! without a reactive runtime.
//!
//! DESIGN
//! ======
//! A submission is split at its single suspension point:
//! [`FormState::begin_submit`] validates and snapshots the payload,
//! the transport runs, then [`FormState::finish_submit`] folds the result back
//! in. The snapshot is owned by the in-flight request, so edits made while it
//! is pending never reach the wire. [`submit`] drives those steps through a
//! [`FormStore`], which is a signal in the component and a `RefCell` in tests.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::{SignatureTransport, TransportError, send_signature_request};
use crate::net::types::{ParticipantPayload, SignatureRequest, TEST_MODE_ENABLED};

pub const DUPLICATE_ROLES_MESSAGE: &str = "Duplicate roles are not allowed.";
pub const SUCCESS_MESSAGE: &str = "Template sent successfully";
pub const FAILURE_MESSAGE: &str = "An unexpected error occurred.";

pub const SEND_LABEL: &str = "Send";
pub const SENDING_LABEL: &str = "Sending...";

pub const BUTTON_CLASS: &str = "submission-form__button";
pub const BUSY_BUTTON_CLASS: &str = "submission-form__button submission-form__button--busy";

/// Errors raised by form mutations and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// An edit addressed a participant slot that does not exist.
    #[error("participant index {index} out of range ({len} participants)")]
    ParticipantOutOfRange { index: usize, len: usize },

    /// Two or more participants share the same raw role value.
    #[error("duplicate role: {0}")]
    DuplicateRoles(String),
}

/// Participant role, stored exactly as entered.
///
/// Uniqueness is checked on the raw value; upper-casing only happens when the
/// payload is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    pub const SELLER: &str = "SELLER";
    pub const BUYER: &str = "BUYER";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn seller() -> Self {
        Self::new(Self::SELLER)
    }

    pub fn buyer() -> Self {
        Self::new(Self::BUYER)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Role as sent to the backend.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.0.to_uppercase()
    }

    /// Human label used in input placeholders.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.0 == Self::SELLER { "Seller" } else { "Buyer" }
    }
}

/// Editable participant field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantField {
    Name,
    Email,
    Order,
}

/// One signer row in the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub role: Role,
    pub name: String,
    pub email: String,
    /// Signing sequence. `None` is the not-a-number sentinel left by an
    /// unparseable edit.
    pub order: Option<i64>,
}

impl Participant {
    pub fn new(role: Role, order: i64) -> Self {
        Self { role, name: String::new(), email: String::new(), order: Some(order) }
    }

    fn to_payload(&self) -> ParticipantPayload {
        ParticipantPayload {
            role: self.role.to_wire(),
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            order: self.order,
        }
    }
}

/// Result of one submit attempt, returned for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Rejected(FormError),
    /// The transport returned a response.
    Sent { status: u16 },
    /// The transport raised an error.
    Failed(TransportError),
    /// Nothing happened: a submission was already in flight, or the form
    /// was dropped before the response arrived.
    Skipped,
}

/// Owner of a [`FormState`] that a submission can update in place.
pub trait FormStore {
    /// Apply `f` to the form, or return `None` if the form no longer exists.
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormStore for RefCell<FormState> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormStore for RwSignal<FormState> {
    fn update_form<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Whole form: participants, template id, and submission status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub participants: Vec<Participant>,
    pub template_id: String,
    pub loading: bool,
    pub message: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            participants: vec![Participant::new(Role::seller(), 1), Participant::new(Role::buyer(), 2)],
            template_id: String::new(),
            loading: false,
            message: String::new(),
        }
    }
}

impl FormState {
    /// Apply a raw input value to one participant field.
    ///
    /// `Order` is parsed with leading-integer semantics; text fields are
    /// stored verbatim and trimmed only when the payload is built.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::ParticipantOutOfRange`] and leaves the form
    /// untouched when `index` addresses no participant.
    pub fn edit_participant(&mut self, index: usize, field: ParticipantField, raw: &str) -> Result<(), FormError> {
        let len = self.participants.len();
        let participant = self
            .participants
            .get_mut(index)
            .ok_or(FormError::ParticipantOutOfRange { index, len })?;
        match field {
            ParticipantField::Name => raw.clone_into(&mut participant.name),
            ParticipantField::Email => raw.clone_into(&mut participant.email),
            ParticipantField::Order => participant.order = parse_order(raw),
        }
        Ok(())
    }

    /// Reject the form if any raw role value repeats.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::DuplicateRoles`] naming the first repeated role.
    pub fn check_unique_roles(&self) -> Result<(), FormError> {
        let roles: Vec<&Role> = self.participants.iter().map(|p| &p.role).collect();
        for (i, role) in roles.iter().enumerate() {
            if roles.iter().position(|r| r == role) != Some(i) {
                return Err(FormError::DuplicateRoles(role.as_str().to_owned()));
            }
        }
        Ok(())
    }

    /// Build the outbound payload from the current values.
    #[must_use]
    pub fn to_request(&self) -> SignatureRequest {
        SignatureRequest {
            template_id: self.template_id.clone(),
            participants: self.participants.iter().map(Participant::to_payload).collect(),
            test_mode: TEST_MODE_ENABLED,
        }
    }

    /// Enter the busy state, validate, and snapshot the payload to send.
    ///
    /// # Errors
    ///
    /// On duplicate roles the duplicate-role message is shown, the busy
    /// state is cleared, and the validation error is returned.
    pub fn begin_submit(&mut self) -> Result<SignatureRequest, FormError> {
        self.loading = true;
        self.message.clear();

        if let Err(e) = self.check_unique_roles() {
            DUPLICATE_ROLES_MESSAGE.clone_into(&mut self.message);
            self.loading = false;
            return Err(e);
        }
        Ok(self.to_request())
    }

    /// Fold the transport result into the status message and leave the busy
    /// state.
    pub fn finish_submit(&mut self, result: Result<u16, TransportError>) -> SubmitOutcome {
        let outcome = match result {
            Ok(status) => {
                // Any status the transport hands back counts as delivered,
                // including non-2xx. Kept for parity; see DESIGN.md.
                log::debug!("signature request sent: status {status}");
                SUCCESS_MESSAGE.clone_into(&mut self.message);
                SubmitOutcome::Sent { status }
            }
            Err(e) => {
                log::error!("signature request failed: {e}");
                FAILURE_MESSAGE.clone_into(&mut self.message);
                SubmitOutcome::Failed(e)
            }
        };
        self.loading = false;
        outcome
    }

    /// Label for the submit button in the current state.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.loading { SENDING_LABEL } else { SEND_LABEL }
    }

    /// Class list for the submit button; muted while a request is in flight.
    #[must_use]
    pub fn submit_class(&self) -> &'static str {
        if self.loading { BUSY_BUTTON_CLASS } else { BUTTON_CLASS }
    }

    /// Whether the submit button accepts clicks.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.loading
    }
}

/// Validate the form held by `store`, send it through `transport`, and fold
/// the result back in.
///
/// A call made while another submission is in flight does nothing.
pub async fn submit<S, T>(store: &S, transport: &T) -> SubmitOutcome
where
    S: FormStore,
    T: SignatureTransport + ?Sized,
{
    let started = store.update_form(|f| if f.loading { None } else { Some(f.begin_submit()) });
    let request = match started.flatten() {
        None => return SubmitOutcome::Skipped,
        Some(Err(e)) => return SubmitOutcome::Rejected(e),
        Some(Ok(request)) => request,
    };
    let result = send_signature_request(transport, &request).await;
    store.update_form(|f| f.finish_submit(result)).unwrap_or(SubmitOutcome::Skipped)
}

/// Parse the leading integer of `raw`: optional whitespace, optional sign,
/// then digits. Trailing characters are ignored. `None` when no digits lead.
/// Values beyond the `i64` range saturate.
pub fn parse_order(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value = digits[..end].bytes().fold(0_i64, |acc, b| {
        let digit = i64::from(b - b'0');
        let shifted = acc.saturating_mul(10);
        if negative { shifted.saturating_sub(digit) } else { shifted.saturating_add(digit) }
    });
    Some(value)
}
