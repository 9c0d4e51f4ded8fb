// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Maximum number of bytes a [SmallString] can inline.
const MAX_LEN: usize = 7;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SmallString {
    /// The string is padded to 7 bytes with NUL bytes. A SmallString may not
    /// end in a NUL byte, so the length is unambiguous.
    bytes: [u8; MAX_LEN],
}

impl core::fmt::Debug for SmallString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "\"{}\"", self.as_str())
    }
}

impl PartialEq<str> for SmallString {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq(other)
    }
}

impl PartialEq<&str> for SmallString {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl SmallString {
    pub const EMPTY: SmallString = Self {
        bytes: [0, 0, 0, 0, 0, 0, 0],
    };

    pub const fn len(&self) -> usize {
        // Count the NUL padding run at the end. Strings may not end in a NUL
        // byte, so the padding length determines the string length even when
        // the string contains interior NULs.
        let mut padding: usize = 0;
        while padding < MAX_LEN {
            if self.bytes[MAX_LEN - 1 - padding] != 0 {
                break;
            }
            padding += 1;
        }
        MAX_LEN - padding
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: Strings are only constructed from valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    pub const fn data(&self) -> &[u8; MAX_LEN] {
        &self.bytes
    }

    /// Inline a string of at most 7 bytes.
    ///
    /// ## Panics
    ///
    /// If the string is longer than 7 bytes, or ends in a NUL byte.
    pub const fn from_str_unchecked(string: &str) -> Self {
        let string_bytes = string.as_bytes();
        assert!(string_bytes.len() <= MAX_LEN);
        assert!(string_bytes.is_empty() || string_bytes[string_bytes.len() - 1] != 0);
        let mut bytes = [0, 0, 0, 0, 0, 0, 0];
        let mut i = 0;
        while i < string_bytes.len() {
            bytes[i] = string_bytes[i];
            i += 1;
        }
        Self { bytes }
    }
}

impl TryFrom<&str> for SmallString {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() <= MAX_LEN && !value.as_bytes().last().is_some_and(|byte| *byte == 0) {
            Ok(Self::from_str_unchecked(value))
        } else {
            Err(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SmallString;

    #[test]
    fn round_trip() {
        for string in ["", "a", "abc", "1234567", "päivää"] {
            let small = SmallString::try_from(string).unwrap();
            assert_eq!(small.len(), string.len());
            assert_eq!(small.as_str(), string);
        }
    }

    #[test]
    fn too_long() {
        assert_eq!(SmallString::try_from("12345678"), Err(()));
    }

    #[test]
    fn empty() {
        assert!(SmallString::EMPTY.is_empty());
        assert_eq!(SmallString::EMPTY.len(), 0);
        assert_eq!(SmallString::EMPTY.as_str(), "");
    }
}
