//! The owned byte buffer returned by a lookup.

/// An owned, immutable byte buffer holding the result of an icon lookup.
///
/// The buffer is move-only: dropping it releases the backing memory exactly
/// once, and [`into_raw`](IconBuffer::into_raw) consumes the value, so a
/// detached or dropped buffer can never be released a second time from safe
/// code.
pub struct IconBuffer {
    bytes: Box<[u8]>,
}

impl IconBuffer {
    pub(crate) fn new(bytes: Vec<u8>) -> IconBuffer {
        IconBuffer {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The buffer contents. Raw bytes, not guaranteed to be UTF-8 or
    /// null-terminated.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Detaches the buffer, transferring ownership of the backing memory to
    /// the caller as a pointer/length pair.
    ///
    /// The pair must eventually be handed back to [`from_raw`](Self::from_raw)
    /// exactly once, or the memory leaks.
    pub fn into_raw(self) -> (*mut u8, u64) {
        let len = self.bytes.len() as u64;
        let ptr = Box::leak(self.bytes).as_mut_ptr();
        (ptr, len)
    }

    /// Reattaches a buffer previously detached with
    /// [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `ptr` and `len` must be the exact pair returned by a single call to
    /// `into_raw`, and that pair must not have been reattached before.
    pub unsafe fn from_raw(ptr: *mut u8, len: u64) -> IconBuffer {
        let slice = std::slice::from_raw_parts_mut(ptr, len as usize);
        IconBuffer {
            bytes: Box::from_raw(slice),
        }
    }
}

impl std::fmt::Debug for IconBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("IconBuffer")
            .field("len", &self.bytes.len())
            .finish()
    }
}
