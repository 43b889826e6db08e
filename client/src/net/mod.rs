//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the host's JSON endpoints. Wire types live in the shared
//! `pets` crate so the server and the browser decode the same schema.

pub mod api;
