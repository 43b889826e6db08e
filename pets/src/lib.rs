//! Shared pet directory model for the `server` host and the `client` UI.
//!
//! This crate owns the record schema exchanged with the hosted pet table, the
//! listing filter state, and the rules that turn filters plus a page cursor
//! into a backend query. It performs no I/O so both the WASM client and the
//! server can depend on it.

pub mod filter;
pub mod page;
pub mod query;
pub mod record;
pub mod sample;

pub use filter::{AGE_SLIDER_MAX, CatalogFilter, FEE_SLIDER_MAX, FilterState};
pub use page::{PetPage, parse_content_range, total_pages};
pub use query::{ListParams, PAGE_SIZE, PetQuery};
pub use record::{NewPetRecord, ParseError, PetRecord, PetStatus, PetType, format_fee};
