//! Route path access and matching.
//!
//! The layout only needs to know the current location string. [`CurrentPath`]
//! is the seam between the router and the class composition so the latter
//! can be exercised without a browser.

/// Path of the site root.
pub const ROOT_PATH: &str = "/";

/// Source of the current route path.
#[cfg_attr(test, mockall::automock)]
pub trait CurrentPath {
    /// The current location path, e.g. `/docs/intro`.
    fn current_path(&self) -> String;
}

impl CurrentPath for str {
    fn current_path(&self) -> String {
        self.to_owned()
    }
}

impl CurrentPath for String {
    fn current_path(&self) -> String {
        self.clone()
    }
}

/// Returns `true` if `path` is exactly `root`.
///
/// No normalization is applied: trailing slashes, query strings and
/// surrounding whitespace all make the path a different route.
pub fn is_root(path: &str, root: &str) -> bool {
    path == root
}
