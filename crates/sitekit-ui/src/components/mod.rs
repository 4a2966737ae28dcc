//! UI components for `Sitekit`.

pub mod header;
pub mod layout;

pub use header::Header;
pub use layout::{Layout, LayoutFrame};
