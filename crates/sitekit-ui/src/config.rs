//! Loading the layout configuration from the host page.
//!
//! The page may embed a JSON object in
//! `<script id="layout-config" type="application/json">`. Anything missing
//! or invalid falls back to [`LayoutConfig::default`].

use leptos::logging::{error, log};
use sitekit_core::LayoutConfig;

/// Id of the element carrying the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "layout-config";

/// Id of the placeholder removed once the app mounts.
pub const LOADING_ELEMENT_ID: &str = "loading";

/// Read the layout configuration embedded in the current document.
pub fn load_layout_config() -> LayoutConfig {
    let Some(json) = embedded_config_json() else {
        return LayoutConfig::default();
    };
    parse_layout_config(&json)
}

/// Parse `json`, logging and falling back to the default on failure.
pub fn parse_layout_config(json: &str) -> LayoutConfig {
    if json.trim().is_empty() {
        return LayoutConfig::default();
    }

    match LayoutConfig::from_json(json) {
        Ok(config) => {
            log!("Using embedded layout configuration");
            config
        }
        Err(e) => {
            error!("Ignoring layout configuration: {}", e);
            LayoutConfig::default()
        }
    }
}

fn embedded_config_json() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_uses_default() {
        assert_eq!(parse_layout_config("  \n"), LayoutConfig::default());
    }

    #[test]
    fn test_valid_json_is_used() {
        let config = parse_layout_config(r#"{"full_background_class": "hero-full"}"#);
        assert_eq!(config.full_background_class, "hero-full");
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(parse_layout_config("{"), LayoutConfig::default());
        assert_eq!(
            parse_layout_config(r#"{"root_path": "docs"}"#),
            LayoutConfig::default()
        );
        assert_eq!(
            parse_layout_config(r#"{"background_class": "hero band"}"#),
            LayoutConfig::default()
        );
    }
}
