//! Raw fallback payload
//!
//! Used whenever an envelope arrives with a tag no payload type has claimed.
//! Stores the unprocessed bytes verbatim and re-emits them unchanged, so
//! unknown payload types survive a receive/forward hop without loss.

use std::any::Any;

use crate::contract::Payload;
use crate::error::{DecodeError, EncodeError};

/// Identity-transform payload holding unprocessed envelope bytes
///
/// `unmarshal` followed by `marshal` yields input-identical bytes for any
/// input, including empty. Neither direction can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPayload {
    contents: Vec<u8>,
}

impl RawPayload {
    /// Create a raw payload holding the given bytes
    pub fn new(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into(),
        }
    }

    /// The stored bytes, exactly as received
    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    /// Consume the payload, taking ownership of the bytes
    pub fn into_contents(self) -> Vec<u8> {
        self.contents
    }

    /// Number of stored bytes
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Check if the payload holds no bytes
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Payload for RawPayload {
    fn marshal(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.contents.clone())
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        self.contents.clear();
        self.contents.extend_from_slice(data);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
