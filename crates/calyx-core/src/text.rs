//! Mutable byte-oriented text buffer.
//!
//! All operations work on bytes, not graphemes or code points. Reversing a
//! buffer that holds multi-byte UTF-8 sequences produces bytes that are no
//! longer valid UTF-8; callers that need a `String` use
//! [`TextBuffer::to_string_lossy`].

use std::borrow::Cow;
use std::fmt;

/// An owned, mutable sequence of bytes with in-place transforms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
}

impl TextBuffer {
    /// Create a buffer holding a copy of `initial`.
    pub fn new(initial: &[u8]) -> Self {
        Self {
            bytes: initial.to_vec(),
        }
    }

    /// Current contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Current contents decoded as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Append `text` at the end.
    pub fn append(&mut self, text: &[u8]) {
        self.bytes.extend_from_slice(text);
    }

    /// Insert `text` at the front.
    pub fn prepend(&mut self, text: &[u8]) {
        self.bytes.splice(0..0, text.iter().copied());
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Reverse byte order in place.
    pub fn reverse(&mut self) {
        self.bytes.reverse();
    }

    /// Map `a..=z` to `A..=Z`; every other byte passes through.
    pub fn to_upper(&mut self) {
        self.bytes.make_ascii_uppercase();
    }

    /// Map `A..=Z` to `a..=z`; every other byte passes through.
    pub fn to_lower(&mut self) {
        self.bytes.make_ascii_lowercase();
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
