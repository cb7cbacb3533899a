//! Persistence collaborator.
//!
//! Key-value store trait, backends, and the key layout for persisted
//! application substate. Persistence is a best-effort side effect of the
//! state machine, never a precondition for it.

pub mod keys;
pub mod kv;

pub use kv::*;
