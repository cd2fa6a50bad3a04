//! Contact Router - inbound contact routing and operator load balancing.
//!
//! This crate resolves inbound contacts to deduplicated client identities
//! (leads), assigns them to support operators via weighted random selection
//! constrained by per-operator capacity, and keeps load accounting
//! consistent under concurrent routing decisions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
