//! Pluggable icon resolution backends.
use std::path::PathBuf;

/// Maps an icon name to the path of an icon file.
///
/// The lookup service consults the resolver exactly once per call and holds
/// no state of its own, so a resolver without interior mutability can be
/// shared freely between threads.
pub trait Resolver {
    /// Returns the path of the icon for `name`, or `None` when no icon
    /// matches.
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// Resolver backed by the freedesktop icon theme directories.
///
/// A lookup first asks for the preferred size and, when no icon of that size
/// exists, falls back to an unconstrained lookup so that themes shipping a
/// single size still resolve.
pub struct FreedesktopResolver {
    size: u16,
}

/// Icon size requested before falling back to any size.
const DEFAULT_SIZE: u16 = 128;

impl FreedesktopResolver {
    pub fn new() -> FreedesktopResolver {
        FreedesktopResolver { size: DEFAULT_SIZE }
    }

    pub fn with_size(size: u16) -> FreedesktopResolver {
        FreedesktopResolver { size }
    }
}

impl Default for FreedesktopResolver {
    fn default() -> Self {
        FreedesktopResolver::new()
    }
}

impl Resolver for FreedesktopResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if let Some(path) = freedesktop_icons::lookup(name).with_size(self.size).find() {
            return Some(path);
        }

        freedesktop_icons::lookup(name).find()
    }
}
