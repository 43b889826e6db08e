//! Top-level route pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their route-scoped state signals and wire components to the
//! HTTP helpers in `net::api`.

pub mod add_pet;
pub mod home;
pub mod pet_list;
