//! Class-name composition.
//!
//! [`ClassNames`] merges literal class strings and conditional entries into a
//! single `class` attribute value. Tokens keep their insertion order and
//! duplicates are preserved, so the output of a given sequence of calls never
//! changes between renders.

use std::fmt;

/// Builder that merges class tokens into one space-separated string.
///
/// ```rust
/// use sitekit_core::ClassNames;
///
/// let on_root = true;
/// let class = ClassNames::new()
///     .literal("text-slate-500 bg-slate-50")
///     .toggles([("background-linear", true), ("background-linear-full", on_root)])
///     .build();
/// assert_eq!(class, "text-slate-500 bg-slate-50 background-linear background-linear-full");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames {
    tokens: Vec<String>,
}

impl ClassNames {
    /// Create an empty class set.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Always include every whitespace-separated token of `classes`.
    #[must_use]
    pub fn literal(mut self, classes: &str) -> Self {
        self.push(classes);
        self
    }

    /// Include the tokens of `classes` only when `enabled` is true.
    #[must_use]
    pub fn toggle(mut self, classes: &str, enabled: bool) -> Self {
        if enabled {
            self.push(classes);
        }
        self
    }

    /// Apply a conditional mapping of `(classes, enabled)` entries in order.
    #[must_use]
    pub fn toggles<'a, I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        for (classes, enabled) in entries {
            if enabled {
                self.push(classes);
            }
        }
        self
    }

    /// Number of tokens collected so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token has been collected.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns `true` if `token` is one of the collected tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Join the tokens with single spaces.
    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }

    fn push(&mut self, classes: &str) {
        self.tokens
            .extend(classes.split_whitespace().map(str::to_owned));
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl<'a> Extend<&'a str> for ClassNames {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for classes in iter {
            self.push(classes);
        }
    }
}

impl<'a> FromIterator<&'a str> for ClassNames {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut names = Self::new();
        names.extend(iter);
        names
    }
}

impl From<ClassNames> for String {
    fn from(names: ClassNames) -> Self {
        names.build()
    }
}
