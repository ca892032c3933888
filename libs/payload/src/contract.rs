//! The payload contract
//!
//! Any type carried inside an envelope implements [`Payload`]: serialize the
//! current state to bytes, or overwrite the current state by decoding bytes.
//! Nothing else in the system needs to know how a given payload encodes
//! itself - the registry and dispatch layer treat payloads uniformly through
//! this trait.

use std::any::Any;

use crate::error::{DecodeError, EncodeError};

/// Capability contract for envelope payload types
///
/// Payload types are registered with the registry at process startup (see
/// `libs/registry`); once registered, the dispatch layer constructs and
/// populates instances of the right concrete type from a tag and raw bytes
/// without the caller naming the type.
///
/// The `Any` supertrait supplies the runtime type identity used for reverse
/// lookup (instance → tag); `Send + Sync` lets decoded payloads cross thread
/// boundaries.
pub trait Payload: Any + Send + Sync + std::fmt::Debug {
    /// Produce a byte encoding of the current state
    ///
    /// Must not mutate the receiver. Fails with [`EncodeError`] only when
    /// internal invariants prevent a valid encoding.
    fn marshal(&self) -> Result<Vec<u8>, EncodeError>;

    /// Overwrite the receiver's state by decoding the given bytes
    ///
    /// Fully replaces prior state: repeated calls with the same input are
    /// idempotent. Fails with [`DecodeError`] when the bytes are malformed
    /// for this type; the receiver must not be used after a failure.
    fn unmarshal(&mut self, data: &[u8]) -> Result<(), DecodeError>;

    /// Upcast for caller-side downcasting of boxed payloads
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for caller-side downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Consume a boxed payload for owned downcasting
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Human-readable type name for diagnostics and error context
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl dyn Payload {
    /// Check whether the payload's concrete type is `P`
    pub fn is<P: Payload>(&self) -> bool {
        self.as_any().is::<P>()
    }

    /// Borrow the payload as its concrete type, if it is a `P`
    pub fn downcast_ref<P: Payload>(&self) -> Option<&P> {
        self.as_any().downcast_ref::<P>()
    }

    /// Mutably borrow the payload as its concrete type, if it is a `P`
    pub fn downcast_mut<P: Payload>(&mut self) -> Option<&mut P> {
        self.as_any_mut().downcast_mut::<P>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Marker(u8);

    impl Payload for Marker {
        fn marshal(&self) -> Result<Vec<u8>, EncodeError> {
            Ok(vec![self.0])
        }

        fn unmarshal(&mut self, data: &[u8]) -> Result<(), DecodeError> {
            match data {
                [b] => {
                    self.0 = *b;
                    Ok(())
                }
                _ => Err(DecodeError::truncated(1, data.len(), "marker byte")),
            }
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

    #[test]
    fn test_downcast_helpers() {
        let mut boxed: Box<dyn Payload> = Box::new(Marker(7));

        assert!(boxed.is::<Marker>());
        assert_eq!(boxed.downcast_ref::<Marker>(), Some(&Marker(7)));

        boxed.downcast_mut::<Marker>().unwrap().0 = 9;
        assert_eq!(boxed.downcast_ref::<Marker>(), Some(&Marker(9)));

        let owned = boxed.into_any().downcast::<Marker>().unwrap();
        assert_eq!(*owned, Marker(9));
    }

    #[test]
    fn test_type_name_through_trait_object() {
        let boxed: Box<dyn Payload> = Box::new(Marker(0));
        assert!(boxed.type_name().ends_with("Marker"));
    }

    #[test]
    fn test_unmarshal_is_idempotent() {
        let mut marker = Marker(0);
        marker.unmarshal(&[42]).unwrap();
        marker.unmarshal(&[42]).unwrap();
        assert_eq!(marker, Marker(42));
    }
}
