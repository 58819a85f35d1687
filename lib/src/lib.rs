//! Icon name lookup with an explicit, owned result buffer.
//!
//! The crate resolves freedesktop icon names to icon file paths and returns
//! the path bytes in an [`IconBuffer`](buffer::IconBuffer), an owned,
//! move-only buffer that can be detached into a raw pointer/length pair for
//! callers on the far side of a C boundary. The resolution backend is
//! pluggable through the [`Resolver`](resolver::Resolver) trait; the default
//! backend queries the freedesktop icon theme directories.

pub mod buffer;
pub mod lookup;
pub mod lookup_error;
pub mod resolver;
