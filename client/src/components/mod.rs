//! Reusable UI components.

pub mod submission_form;
