//! # Domain model for directory records
//!
//! A [`User`] is one entry of the remote user collection. Records are
//! deserialised straight from the endpoint's JSON array and never modified
//! afterwards; every view of the directory is a reordering of the fetched
//! records.
//!
//! The remote payload carries more fields than the table shows (`address`,
//! `company`, ...). Those are ignored on decode.

use serde::{Deserialize, Serialize};

/// One user record as served by the remote endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable identifier assigned by the remote source.
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl User {
    /// Whether the id is an exact multiple of three.
    pub fn is_mod3(&self) -> bool {
        self.id % 3 == 0
    }
}

#[cfg(test)]
pub(crate) fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: format!("{}{id}", name.to_lowercase()),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: format!("555-000{id}"),
        website: format!("{}.org", name.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mod3() {
        assert!(user(3, "a").is_mod3());
        assert!(user(0, "a").is_mod3());
        assert!(user(-6, "a").is_mod3());
        assert!(!user(1, "a").is_mod3());
        assert!(!user(10, "a").is_mod3());
    }
}
