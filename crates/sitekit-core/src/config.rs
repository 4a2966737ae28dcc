//! Layout configuration.
//!
//! Holds the class tokens the layout applies and the path that counts as
//! the site root. Every field has a default, so an empty JSON object is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::class_names::ClassNames;
use crate::error::{Error, Result};
use crate::route::{CurrentPath, ROOT_PATH, is_root};

/// Colour tokens applied to the layout container for light and dark modes.
pub const DEFAULT_BASE_CLASSES: &str =
    "text-slate-500 dark:text-slate-400 bg-slate-50 dark:bg-slate-900";
/// Background modifier applied on every route.
pub const DEFAULT_BACKGROUND_CLASS: &str = "background-linear";
/// Full-height background modifier applied on the root route only.
pub const DEFAULT_FULL_BACKGROUND_CLASS: &str = "background-linear-full";
/// Classes of the flex column wrapping header and content.
pub const DEFAULT_FRAME_CLASSES: &str = "flex flex-col min-h-screen";
/// Classes of the content wrapper.
pub const DEFAULT_CONTENT_CLASSES: &str = "overflow-hidden";

/// Layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Colour classes always applied to the container.
    pub base_classes: String,
    /// Structural modifier always applied to the container.
    pub background_class: String,
    /// Structural modifier applied when the current path is the root path.
    pub full_background_class: String,
    /// Path that receives the full background.
    pub root_path: String,
    /// Classes of the inner flex column.
    pub frame_classes: String,
    /// Classes of the overflow-clipped content wrapper.
    pub content_classes: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_classes: DEFAULT_BASE_CLASSES.to_string(),
            background_class: DEFAULT_BACKGROUND_CLASS.to_string(),
            full_background_class: DEFAULT_FULL_BACKGROUND_CLASS.to_string(),
            root_path: ROOT_PATH.to_string(),
            frame_classes: DEFAULT_FRAME_CLASSES.to_string(),
            content_classes: DEFAULT_CONTENT_CLASSES.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).inspect_err(|e| {
            warn!("Failed to parse layout configuration: {}", e);
        })?;
        config.validate()?;
        debug!(root_path = %config.root_path, "Loaded layout configuration");
        Ok(config)
    }

    /// Check the invariants the layout relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.root_path.starts_with('/') {
            return Err(Error::InvalidRootPath(self.root_path.clone()));
        }

        let required = [
            ("background_class", &self.background_class),
            ("full_background_class", &self.full_background_class),
            ("content_classes", &self.content_classes),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::EmptyClass { field });
            }
        }

        // Both modifiers end up in generated CSS selectors
        let selectors = [
            ("background_class", &self.background_class),
            ("full_background_class", &self.full_background_class),
        ];
        for (field, value) in selectors {
            if !is_class_token(value) {
                return Err(Error::InvalidClassToken {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Class attribute of the outer container for the given route path.
    pub fn container_classes(&self, path: &str) -> String {
        ClassNames::new()
            .literal(&self.base_classes)
            .toggles([
                (self.background_class.as_str(), true),
                (
                    self.full_background_class.as_str(),
                    is_root(path, &self.root_path),
                ),
            ])
            .build()
    }

    /// Like [`Self::container_classes`], reading the path from `source` once.
    pub fn container_classes_for<S>(&self, source: &S) -> String
    where
        S: CurrentPath + ?Sized,
    {
        self.container_classes(&source.current_path())
    }

    /// Class attribute of the inner flex column.
    pub fn frame_classes(&self) -> String {
        ClassNames::new().literal(&self.frame_classes).build()
    }

    /// Class attribute of the content wrapper.
    pub fn content_classes(&self) -> String {
        ClassNames::new().literal(&self.content_classes).build()
    }
}

/// A single class name: no whitespace and nothing that closes a CSS rule.
fn is_class_token(value: &str) -> bool {
    !value.is_empty()
        && !value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | ';'))
}
