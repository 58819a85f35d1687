//! The lookup service tying a resolver to the owned result buffer.
use crate::{
    buffer::IconBuffer,
    lookup_error::LookupError,
    resolver::{FreedesktopResolver, Resolver},
};

/// Resolves icon names through a [`Resolver`] and packages the result for
/// transfer across an ownership boundary.
///
/// Every call is independent; the service keeps no state besides the
/// resolver itself.
pub struct IconLookup<R: Resolver> {
    resolver: R,
}

impl<R: Resolver> IconLookup<R> {
    pub fn new(resolver: R) -> IconLookup<R> {
        IconLookup { resolver }
    }

    /// Looks up `name` and returns the encoded bytes of the icon's path.
    ///
    /// The returned buffer holds exactly the path bytes the resolver
    /// produced, with no truncation or padding. An empty name is rejected
    /// before the resolver is consulted.
    pub fn lookup(&self, name: &str) -> Result<IconBuffer, LookupError> {
        if name.is_empty() {
            return Err(LookupError::BadArgument(
                "icon name must not be empty".to_string(),
            ));
        }

        match self.resolver.resolve(name) {
            Some(path) => Ok(IconBuffer::new(path.into_os_string().into_encoded_bytes())),
            None => Err(LookupError::NotFound(name.to_string())),
        }
    }
}

impl IconLookup<FreedesktopResolver> {
    /// A service over the default freedesktop theme resolver.
    pub fn freedesktop() -> IconLookup<FreedesktopResolver> {
        IconLookup::new(FreedesktopResolver::new())
    }
}
