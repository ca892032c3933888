//! Opaque payload type tags
//!
//! A tag names a payload type on the wire. The bytes are entirely opaque to
//! this library: identity is exact byte-for-byte equality, and any namespace
//! convention (URI-like strings such as `/myapp/point/v1` are common) is
//! chosen by the owners of each payload type, not enforced here.

use std::fmt;

/// Opaque, immutable byte-sequence identifier for a payload type
///
/// Tags must be globally unique among registered types within a process.
/// Uniqueness is a convention owned by the payload type authors; the registry
/// does not enforce it (a later registration for the same tag replaces the
/// earlier one).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayloadTag(Box<[u8]>);

impl PayloadTag {
    /// Create a tag from any byte sequence, including empty
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into().into_boxed_slice())
    }

    /// Raw tag bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the tag in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the tag is empty (valid, if unusual)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[u8]> for PayloadTag {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for PayloadTag {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for PayloadTag {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<String> for PayloadTag {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl<const N: usize> From<&[u8; N]> for PayloadTag {
    fn from(bytes: &[u8; N]) -> Self {
        Self::new(bytes.as_slice())
    }
}

impl AsRef<[u8]> for PayloadTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PayloadTag {
    /// Render printable UTF-8 tags as text, anything else as hex
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if !s.chars().any(|c| c.is_control()) => write!(f, "{}", s),
            _ => write!(f, "0x{}", hex::encode(&self.0)),
        }
    }
}
