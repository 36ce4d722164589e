//! # Sort engine
//!
//! Pure orderings over a slice of [`User`]s. Every function returns a fresh
//! `Vec` and leaves its input untouched; records are only reordered, never
//! added or dropped. All sorts are stable.

use std::cmp::Ordering;

use crate::models::User;

/// Order by `id`, ascending or descending.
pub fn sort_by_id(data: &[User], ascending: bool) -> Vec<User> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        if ascending {
            a.id.cmp(&b.id)
        } else {
            b.id.cmp(&a.id)
        }
    });
    sorted
}

/// Order by `name` using locale-aware comparison. Equal names keep their
/// input order.
pub fn sort_by_name(data: &[User], ascending: bool) -> Vec<User> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        if ascending {
            locale_compare(&a.name, &b.name)
        } else {
            locale_compare(&b.name, &a.name)
        }
    });
    sorted
}

/// Multiples of three first in descending id order, then everything else in
/// ascending id order.
pub fn sort_by_id_with_mod3(data: &[User]) -> Vec<User> {
    let (multiples, others): (Vec<User>, Vec<User>) =
        data.iter().cloned().partition(User::is_mod3);

    let mut sorted = sort_by_id(&multiples, false);
    sorted.extend(sort_by_id(&others, true));
    sorted
}

/// Compare two strings the way the browser's `localeCompare` does.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let result = js_sys::JsString::from(a).locale_compare(
        b,
        &js_sys::Array::new(),
        &js_sys::Object::new(),
    );
    result.cmp(&0)
}

/// Compare two strings ignoring case. Strings that differ only in case put
/// lowercase first, matching the default collation order of browsers.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
