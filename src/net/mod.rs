//! Networking modules for the chamado message API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `chat_sync` runs the polling loop that
//! keeps the transcript fresh, and `types` defines the wire schema.

pub mod api;
pub mod chat_sync;
pub mod types;
