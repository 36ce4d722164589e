//! # Directory state and derivation
//!
//! [`DirectoryState`] is the one owned state record of the directory view:
//! the fetched records, the records currently on screen, and the toggles
//! that produced them. The displayed list is always rebuilt from the
//! original list by [`derive_displayed`], never patched in place.
//!
//! When both toggles are on, the name sort runs last over the whole list, so
//! the mod-3 grouping does not survive into the final order.

use crate::models::User;
use crate::render::{render_rows, RowView};
use crate::sort::{sort_by_id_with_mod3, sort_by_name};

/// The two sort checkboxes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggles {
    /// Multiples of three first (descending), others after (ascending).
    pub partition_mod3: bool,
    /// Alphabetical by name.
    pub by_name: bool,
}

impl Toggles {
    pub fn new(partition_mod3: bool, by_name: bool) -> Self {
        Self {
            partition_mod3,
            by_name,
        }
    }
}

/// Compute the displayed list for a toggle combination, starting from a
/// fresh copy of `original`.
pub fn derive_displayed(original: &[User], toggles: Toggles) -> Vec<User> {
    let mut sorted = original.to_vec();

    if toggles.partition_mod3 {
        sorted = sort_by_id_with_mod3(&sorted);
    }

    if toggles.by_name {
        sorted = sort_by_name(&sorted, true);
    }

    sorted
}

/// Fetched records plus the ordering currently shown.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryState {
    original: Vec<User>,
    displayed: Vec<User>,
}

impl DirectoryState {
    /// State right after a successful fetch: the displayed list is a copy of
    /// the records in fetch order.
    pub fn loaded(users: Vec<User>) -> Self {
        Self {
            displayed: users.clone(),
            original: users,
        }
    }

    /// Rebuild the displayed list for `toggles`.
    pub fn apply(&mut self, toggles: Toggles) {
        self.displayed = derive_displayed(&self.original, toggles);
    }

    pub fn displayed(&self) -> &[User] {
        &self.displayed
    }

    /// Row descriptors for the table body.
    pub fn rows(&self) -> Vec<RowView> {
        render_rows(&self.displayed)
    }
}

/// Everything the directory view holds: the checkbox values, and the
/// records once the fetch has succeeded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryView {
    toggles: Toggles,
    state: Option<DirectoryState>,
}

impl DirectoryView {
    /// Current checkbox values.
    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    /// Store the fetched records. They are shown in fetch order even when
    /// checkboxes were ticked while the request was in flight.
    pub fn load(&mut self, users: Vec<User>) {
        self.state = Some(DirectoryState::loaded(users));
    }

    /// Record new checkbox values and re-derive the displayed list.
    /// Returns `false` when nothing has loaded yet, in which case only the
    /// checkbox values change.
    pub fn toggle(&mut self, toggles: Toggles) -> bool {
        self.toggles = toggles;
        match &mut self.state {
            Some(state) => {
                state.apply(toggles);
                true
            }
            None => false,
        }
    }

    /// Body rows, or `None` while the table has nothing to show.
    pub fn rows(&self) -> Option<Vec<RowView>> {
        self.state.as_ref().map(DirectoryState::rows)
    }
}
