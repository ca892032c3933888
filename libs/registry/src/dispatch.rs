//! Decode/encode dispatch
//!
//! The two single-shot operations the envelope layer calls into: turn a tag
//! plus raw bytes into a populated payload instance (receive side), or turn
//! a live payload instance into a tag plus bytes (send side). Each call is
//! stateless - the registry is only ever read here.

use payload::{DecodeError, Payload, PayloadTag};
use tracing::trace;

use crate::error::DispatchError;
use crate::registry::PayloadRegistry;

impl PayloadRegistry {
    /// Decode payload bytes into the concrete type registered for `tag`
    ///
    /// Resolves a blank instance (registered type, or the raw fallback for
    /// an unknown tag) and unmarshals the bytes into it. An unrecognized tag
    /// never fails; the only failure mode is a registered type rejecting
    /// malformed bytes, and that [`DecodeError`] propagates unchanged. On
    /// failure the partially populated instance is dropped - callers never
    /// see it.
    pub fn decode(&self, tag: &PayloadTag, bytes: &[u8]) -> Result<Box<dyn Payload>, DecodeError> {
        let mut instance = self.resolve_blank(tag);
        instance.unmarshal(bytes)?;
        trace!(
            tag = %tag,
            payload_type = instance.type_name(),
            payload_bytes = bytes.len(),
            "decoded envelope payload"
        );
        Ok(instance)
    }

    /// Marshal a payload and recover its registered tag by reverse lookup
    ///
    /// Used by the envelope layer to auto-fill the payload-type field when
    /// constructing an envelope from a typed payload. Fails with
    /// [`DispatchError::TagNotRegistered`] when no entry matches the
    /// instance's runtime type; a failing marshal propagates unchanged.
    pub fn encode_with_tag(
        &self,
        instance: &dyn Payload,
    ) -> Result<(PayloadTag, Vec<u8>), DispatchError> {
        let tag = self
            .find_tag(instance)
            .ok_or_else(|| DispatchError::TagNotRegistered {
                type_name: instance.type_name(),
            })?;
        let bytes = instance.marshal()?;
        trace!(
            tag = %tag,
            payload_type = instance.type_name(),
            payload_bytes = bytes.len(),
            "encoded envelope payload"
        );
        Ok((tag, bytes))
    }
}

/// Unmarshal bytes into a caller-chosen concrete payload type
///
/// Bypasses the registry entirely: the caller already knows the concrete
/// type, typically because the tag was matched out-of-band or the type was
/// deliberately left unregistered. The registered default for the tag (if
/// any) is ignored.
pub fn decode_typed<P: Payload + Default>(bytes: &[u8]) -> Result<P, DecodeError> {
    let mut instance = P::default();
    instance.unmarshal(bytes)?;
    Ok(instance)
}
