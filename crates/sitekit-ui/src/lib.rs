//! `Sitekit` UI - Leptos-based user interface.
//!
//! This crate provides the page shell of the `Sitekit` front-end: the shared
//! layout, the site header, and the routed application.

pub mod app;
pub mod components;
pub mod config;
pub mod theme;

pub use app::App;
pub use components::{Header, Layout, LayoutFrame};
