use std::ffi::CStr;

use super::Termination;

/// Width of the cluster introduced by `lead`, or `None` if `lead` cannot start one
///
/// Only the high-order bit pattern is inspected, so `0xC0`, `0xC1` and
/// `0xF5..=0xF7` are accepted as lead bytes.
pub fn cluster_len(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0x00 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Check if a byte slice contains structurally valid UTF-8 sequences
///
/// An absent buffer is valid, as is an empty one.
pub fn is_valid_utf8(bytes: Option<&[u8]>) -> bool {
    match bytes {
        None => true,
        Some(bytes) => scan(bytes, Termination::Length),
    }
}

/// Like [`is_valid_utf8`], but a `0x00` byte at a cluster boundary ends the input
///
/// The end of the slice still terminates the scan when no NUL is present.
pub fn is_valid_utf8_until_nul(bytes: Option<&[u8]>) -> bool {
    match bytes {
        None => true,
        Some(bytes) => scan(bytes, Termination::Nul),
    }
}

/// Validate the bytes of a C string, excluding its terminator
pub fn is_valid_utf8_cstr(s: Option<&CStr>) -> bool {
    is_valid_utf8(s.map(CStr::to_bytes))
}

fn scan(bytes: &[u8], termination: Termination) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        if lead == 0x00 && termination == Termination::Nul {
            return true;
        }
        let Some(num) = cluster_len(lead) else {
            return false;
        };
        i += 1;
        for _ in 1..num {
            match bytes.get(i) {
                Some(&b) if is_continuation(b) => i += 1,
                _ => return false,
            }
        }
    }
    true
}
