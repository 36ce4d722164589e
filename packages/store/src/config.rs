//! # Directory configuration — `directory.toml`
//!
//! Defines the TOML file that tells the directory view where to fetch its
//! records from (filename: [`DirectoryConfig::filename`] = `"directory.toml"`).
//! The web binary embeds the file at build time.
//!
//! ## Structure
//!
//! ```toml
//! [source]
//! endpoint = "https://jsonplaceholder.typicode.com/users"
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `directory.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

/// Where the user records come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL returning a JSON array of user records.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "https://jsonplaceholder.typicode.com/users".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl DirectoryConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "directory.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
