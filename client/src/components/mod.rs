//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive signals and callbacks from the
//! owning page and never perform I/O themselves. The navbar is the exception
//! that reads `AuthState` from context.

pub mod catalog_card;
pub mod filter_panel;
pub mod navbar;
pub mod pagination;
pub mod pet_card;
pub mod photo_drop_zone;
pub mod search_bar;
pub mod status_badge;
