//! Client-side state containers.
//!
//! DESIGN
//! ======
//! Plain structs with pure transition methods. Pages wrap them in `RwSignal`s
//! and perform I/O around the transitions, which keeps every rule here
//! testable without a browser.

pub mod auth;
pub mod listing;
pub mod pet_form;
