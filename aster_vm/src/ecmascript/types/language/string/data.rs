// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::hash::Hash;

/// Heap data of a heap-allocated string.
///
/// Strings of up to 7 bytes are normally stored inline in the handle and
/// never reach the heap. The exception is short strings ending in a null
/// byte, which the inline representation cannot express.
#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: StringBuffer,
}

impl PartialEq for StringHeapData {
    fn eq(&self, other: &Self) -> bool {
        // If both strings are static, we can compare their pointers directly.
        if let (&StringBuffer::Static(self_str), &StringBuffer::Static(other_str)) =
            (&self.data, &other.data)
            && core::ptr::eq(self_str, other_str)
        {
            return true;
        }
        self.as_str() == other.as_str()
    }
}
impl Eq for StringHeapData {}

impl Hash for StringHeapData {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

#[derive(Debug, Clone)]
pub(crate) enum StringBuffer {
    Owned(std::string::String),
    Static(&'static str),
}

impl StringHeapData {
    /// Get the byte length of the string.
    pub fn len(&self) -> usize {
        match &self.data {
            StringBuffer::Owned(buf) => buf.len(),
            StringBuffer::Static(buf) => buf.len(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.data {
            StringBuffer::Owned(buf) => buf,
            StringBuffer::Static(buf) => buf,
        }
    }

    pub fn from_str(str: &str) -> Self {
        debug_assert!(str.len() > 7 || str.ends_with('\0'));
        StringHeapData {
            data: StringBuffer::Owned(str.into()),
        }
    }

    pub fn from_static_str(str: &'static str) -> Self {
        debug_assert!(str.len() > 7 || str.ends_with('\0'));
        StringHeapData {
            data: StringBuffer::Static(str),
        }
    }

    pub fn from_string(str: std::string::String) -> Self {
        debug_assert!(str.len() > 7 || str.ends_with('\0'));
        StringHeapData {
            data: StringBuffer::Owned(str),
        }
    }
}
