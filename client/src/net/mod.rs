//! Networking for the advice endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `advice::AdviceApi` port over `gloo-net`.

pub mod api;
