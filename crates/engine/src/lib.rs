//! Tier notification engine.
//!
//! Resolves the active users of a tier (cache first, durable store second) and
//! fans a message out to each of them over email or phone.

pub mod cache;
pub mod codec;
pub mod cohort;
pub mod dispatcher;
pub mod ports;
pub mod service;
pub mod store;
pub mod validation;
