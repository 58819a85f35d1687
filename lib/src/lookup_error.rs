//! Errors returned by an [`IconLookup`](crate::lookup::IconLookup).
use core::fmt;

/// Error produced while looking up an icon name.
///
/// At a C boundary every variant collapses to the empty result; the
/// distinction only exists for Rust callers.
#[derive(Debug)]
pub enum LookupError {
    /// No icon matches the requested name.
    NotFound(String),
    /// The lookup was called with an inappropriate argument.
    BadArgument(String),
    /// The resolver could not allocate the result buffer.
    AllocationFailed(String),
}

impl LookupError {
    pub fn get_message(&self) -> &str {
        match self {
            LookupError::NotFound(msg)
            | LookupError::BadArgument(msg)
            | LookupError::AllocationFailed(msg) => msg.as_str(),
        }
    }
}

impl std::error::Error for LookupError {}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupError::NotFound(name) => write!(f, "No icon found: {}", name),
            LookupError::BadArgument(arg) => write!(f, "Bad argument: {}", arg),
            LookupError::AllocationFailed(desc) => write!(f, "Allocation failed: {}", desc),
        }
    }
}
