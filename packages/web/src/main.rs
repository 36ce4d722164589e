use dioxus::prelude::*;

use store::DirectoryConfig;
use ui::{UserDirectory, TAILWIND_CSS};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded `directory.toml`.
const CONFIG_TOML: &str = include_str!("../directory.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> DirectoryConfig {
    match DirectoryConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {}",
                DirectoryConfig::filename(),
                e
            );
            DirectoryConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        h1 { "Users" }
        UserDirectory { endpoint: config.source.endpoint }
    }
}
