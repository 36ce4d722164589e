//! The two sort checkboxes above the table.

use dioxus::prelude::*;
use store::Toggles;

/// Checkboxes for the mod-3 and name orderings.
///
/// Each change reports the full toggle state, so the parent always
/// recomputes from both values.
#[component]
pub fn SortToggles(toggles: Toggles, on_change: EventHandler<Toggles>) -> Element {
    rsx! {
        div {
            class: "sort-toggles",
            label {
                class: "sort-toggle",
                input {
                    r#type: "checkbox",
                    id: "js-mod3-filter",
                    checked: toggles.partition_mod3,
                    onchange: move |evt: FormEvent| {
                        on_change.call(Toggles {
                            partition_mod3: evt.checked(),
                            ..toggles
                        })
                    },
                }
                span { "Multiples of 3 first" }
            }
            label {
                class: "sort-toggle",
                input {
                    r#type: "checkbox",
                    id: "js-name-filter",
                    checked: toggles.by_name,
                    onchange: move |evt: FormEvent| {
                        on_change.call(Toggles {
                            by_name: evt.checked(),
                            ..toggles
                        })
                    },
                }
                span { "Sort by name" }
            }
        }
    }
}
