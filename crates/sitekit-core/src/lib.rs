//! `Sitekit` Core Library
//!
//! This crate provides the DOM-free pieces of the `Sitekit` front-end:
//! - Class-name composition from literal and conditional entries
//! - Route path matching for route-dependent styling
//! - Layout configuration (class tokens, root path) with JSON loading
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`], using the [`Error`] type from the
//! [`error`] module.
//!
//! ```rust
//! use sitekit_core::LayoutConfig;
//!
//! let config = LayoutConfig::default();
//! assert!(config.container_classes("/").contains("background-linear-full"));
//! ```

pub mod class_names;
pub mod config;
pub mod error;
pub mod route;

pub use class_names::ClassNames;
pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use route::{CurrentPath, ROOT_PATH, is_root};
