//! Networking modules for the signature-request call.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and `api` owns the transport seam plus the
//! browser implementation used after hydration.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
