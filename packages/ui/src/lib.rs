//! This crate contains the shared UI for the user directory.

use dioxus::prelude::*;

/// Built from `tailwind.css`; the cell classes come from `store::render`.
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
pub const DIRECTORY_CSS: Asset = asset!("/assets/styling/directory.css");

mod directory;
pub use directory::UserDirectory;

mod sort_toggles;
pub use sort_toggles::SortToggles;

mod user_table;
pub use user_table::UserTable;
