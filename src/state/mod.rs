//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `session`) so components depend on
//! small focused models provided via context.

pub mod chat;
pub mod session;
