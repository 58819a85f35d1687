//! C API for the iconlookup crate.
//!
//! The exported surface matches the original `icon_lookup` plugin ABI:
//! `IconLookup_Lookup` returns a length/pointer struct by value and
//! `IconLookup_Free` releases it. No error code crosses the boundary; every
//! failure collapses to the empty result (`len == 0`, null `ptr`).

use std::{ffi::CStr, os::raw::c_char};

use iconlookup::{
    buffer::IconBuffer,
    lookup::IconLookup,
    resolver::Resolver,
};

/// Length and pointer pair handed across the C boundary.
///
/// The caller owns a non-null `ptr` and must pass the struct back to
/// `IconLookup_Free` exactly once.
#[repr(C)]
pub struct IconLookupString {
    pub len: u64,
    pub ptr: *mut c_char,
}

impl IconLookupString {
    fn empty() -> IconLookupString {
        IconLookupString {
            len: 0,
            ptr: std::ptr::null_mut(),
        }
    }

    fn from_buffer(buffer: IconBuffer) -> IconLookupString {
        if buffer.is_empty() {
            return IconLookupString::empty();
        }

        let (ptr, len) = buffer.into_raw();

        IconLookupString {
            len,
            ptr: ptr as *mut c_char,
        }
    }
}

fn lookup_string<R: Resolver>(service: &IconLookup<R>, icon: *const c_char) -> IconLookupString {
    if icon.is_null() {
        return IconLookupString::empty();
    }

    let c_str: &CStr = unsafe { CStr::from_ptr(icon) };

    let name = match c_str.to_str() {
        Ok(name) => name,
        Err(_) => return IconLookupString::empty(),
    };

    match service.lookup(name) {
        Ok(buffer) => IconLookupString::from_buffer(buffer),
        Err(_) => IconLookupString::empty(),
    }
}

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[export_name = "IconLookup_Lookup"]
pub extern "C" fn icon_lookup_lookup(icon: *const c_char) -> IconLookupString {
    let service = IconLookup::freedesktop();

    lookup_string(&service, icon)
}

#[allow(clippy::not_unsafe_ptr_arg_deref)]
#[export_name = "IconLookup_Free"]
pub extern "C" fn icon_lookup_free(string: IconLookupString) {
    if !string.ptr.is_null() {
        unsafe {
            drop(IconBuffer::from_raw(string.ptr as *mut u8, string.len));
        }
    }
}

/// Arithmetic passthrough kept as a smoke-test stub for binding setups.
#[export_name = "sum"]
pub extern "C" fn icon_lookup_sum(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}
