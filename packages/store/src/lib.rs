pub mod config;
pub mod directory;
pub mod models;
pub mod render;
pub mod sort;

pub use config::DirectoryConfig;
pub use directory::{derive_displayed, DirectoryState, DirectoryView, Toggles};
pub use models::User;
pub use render::{CellKind, CellView, RowView};
