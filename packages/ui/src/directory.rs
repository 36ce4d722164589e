//! View controller for the user directory.

use dioxus::prelude::*;
use store::{DirectoryView, Toggles};

use crate::{SortToggles, UserTable, DIRECTORY_CSS};

/// Fetches the users once on mount and keeps the table in step with the
/// sort toggles.
///
/// The table is not rendered until the fetch succeeds. A failed fetch is
/// logged and never retried.
#[component]
pub fn UserDirectory(endpoint: String) -> Element {
    let mut view = use_signal(DirectoryView::default);

    let _loader = use_resource(move || {
        let endpoint = endpoint.clone();
        async move {
            match api::fetch_users(&endpoint).await {
                Ok(users) => {
                    tracing::info!("Loaded {} users", users.len());
                    view.write().load(users);
                }
                Err(e) => {
                    tracing::error!("Failed to load users: {}", e);
                }
            }
        }
    });

    let on_toggle = move |next: Toggles| {
        if view.write().toggle(next) {
            tracing::debug!(
                "Re-sorted directory (mod3: {}, name: {})",
                next.partition_mod3,
                next.by_name
            );
        }
    };

    let toggles = view.read().toggles();
    let rows = view.read().rows();

    rsx! {
        document::Stylesheet { href: DIRECTORY_CSS }

        div {
            class: "user-directory",
            SortToggles {
                toggles,
                on_change: on_toggle,
            }
            {rows.map(|rows| rsx! { UserTable { rows } })}
        }
    }
}
