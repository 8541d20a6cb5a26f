//! Client-side state.
//!
//! `form` holds the signature-request form; it is plain data mutated through
//! a small API and wrapped in a signal by the component that owns it.

pub mod form;
