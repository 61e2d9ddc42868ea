//! NGO directory state: category filter plus the single selected record.
//!
//! DESIGN
//! ======
//! Exactly one NGO is selected at all times, starting with the first record
//! of the unfiltered list. Changing the filter does not move the selection,
//! so the detail panel keeps showing the last chosen NGO even when it is
//! filtered out of the map.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use catalog::ngo::{CategoryFilter, NgoRecord, all_ngos, default_ngo, filter_ngos, find_ngo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectoryState {
    pub filter: CategoryFilter,
    selected_id: u32,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: CategoryFilter::All,
            selected_id: default_ngo().id,
        }
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Select the record with `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: u32) -> bool {
        if find_ngo(id).is_none() {
            return false;
        }
        self.selected_id = id;
        true
    }

    #[must_use]
    pub fn selected_id(&self) -> u32 {
        self.selected_id
    }

    #[must_use]
    pub fn selected(&self) -> &'static NgoRecord {
        find_ngo(self.selected_id).unwrap_or_else(default_ngo)
    }

    #[must_use]
    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_id == id
    }

    /// Records passing the current filter, in list order.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static NgoRecord> {
        filter_ngos(all_ngos(), self.filter)
    }

    #[must_use]
    pub fn selected_is_visible(&self) -> bool {
        self.filter.matches(self.selected().category)
    }
}
