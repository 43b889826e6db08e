//! Home listing state: filters, page cursor, fetched rows, and fetch bookkeeping.
//!
//! DESIGN
//! ======
//! Every mutation goes through a method that reports whether the caller must
//! start a fetch drain. `schedule_fetch` is the single coalescing point:
//! repeated changes before the drain runs collapse into one round trip.
//! Each fetch carries a sequence number and only the most recently issued one
//! may write results or clear the loading flag, so a slow stale response can
//! never overwrite fresher state.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::ops::RangeInclusive;

use pets::{FilterState, ListParams, PetPage, PetRecord, PetType};

/// A fetch in flight: which request it is and what it asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub params: ListParams,
}

/// What `finish_fetch` did with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows and page count replaced.
    Applied,
    /// Latest fetch failed; rows kept, loading cleared.
    Failed,
    /// A newer fetch was issued since; response ignored.
    Stale,
}

#[derive(Clone, Debug)]
pub struct ListingState {
    pub filters: FilterState,
    pub current_page: u32,
    pub total_pages: u32,
    pub pets: Vec<PetRecord>,
    pub loading: bool,
    /// At least one fetch has completed successfully.
    pub loaded: bool,
    issued_seq: u64,
    fetch_scheduled: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            current_page: 1,
            total_pages: 1,
            pets: Vec::new(),
            loading: false,
            loaded: false,
            issued_seq: 0,
            fetch_scheduled: false,
        }
    }
}

impl ListingState {
    /// Returns `true` when the caller must spawn a fetch drain.
    pub fn set_location(&mut self, location: String) -> bool {
        self.filters.set_location(location) && self.schedule_fetch()
    }

    /// Returns `true` when the caller must spawn a fetch drain.
    pub fn set_pet_type(&mut self, pet_type: Option<PetType>) -> bool {
        self.filters.set_pet_type(pet_type) && self.schedule_fetch()
    }

    /// Returns `true` when the caller must spawn a fetch drain.
    pub fn set_max_fee(&mut self, max_fee: u32) -> bool {
        self.filters.set_max_fee(max_fee) && self.schedule_fetch()
    }

    /// Returns `true` when the caller must spawn a fetch drain.
    pub fn set_age_ceiling(&mut self, age_ceiling: u32) -> bool {
        self.filters.set_age_ceiling(age_ceiling) && self.schedule_fetch()
    }

    /// Jump to a 1-indexed page. Returns `true` when the caller must spawn a
    /// fetch drain.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        self.schedule_fetch()
    }

    /// Explicit search: back to page 1 and always fetch, even when nothing
    /// changed since the last request.
    pub fn search(&mut self) -> bool {
        self.current_page = 1;
        self.schedule_fetch()
    }

    /// Mark a fetch as wanted. Returns `true` only for the first request
    /// since the last `begin_fetch`; later requests ride along.
    pub fn schedule_fetch(&mut self) -> bool {
        if self.fetch_scheduled {
            return false;
        }
        self.fetch_scheduled = true;
        true
    }

    /// Start the round trip for the current filters and page.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.fetch_scheduled = false;
        self.issued_seq += 1;
        self.loading = true;
        FetchTicket { seq: self.issued_seq, params: ListParams::from_filters(&self.filters, self.current_page) }
    }

    /// Resolve the fetch tagged `seq`.
    pub fn finish_fetch(&mut self, seq: u64, result: Result<PetPage, String>) -> FetchOutcome {
        if seq != self.issued_seq {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.total_pages = page.total_pages();
                self.pets = page.pets;
                self.loaded = true;
                FetchOutcome::Applied
            }
            Err(_) => FetchOutcome::Failed,
        }
    }

    /// Spinner instead of the grid: a fetch is in flight, or none has been
    /// issued yet (server render and the first hydrated frame).
    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.loading || self.issued_seq == 0
    }

    /// Show the "no pets" message instead of an empty grid.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.loaded && !self.loading && self.pets.is_empty()
    }

    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// Page buttons to render, 1-indexed.
    #[must_use]
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }
}
