//! # Envelope Payload Type Registry
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer of envelope payload handling: the
//! process-wide association between opaque payload tags and the concrete
//! types that implement the payload contract, plus the dispatch algorithm
//! that marshals a typed payload into bytes and unmarshals received bytes
//! back into the correct concrete type. A generic consumer (the envelope
//! layer) never names concrete payload types - it hands this crate a tag and
//! a byte buffer, or a live payload instance, and gets the typed result.
//!
//! ## What This Crate Contains
//! - **PayloadRegistry**: tag → factory mapping with read-write locking
//! - **Decode dispatch**: tag + bytes → populated `Box<dyn Payload>`,
//!   falling back to `RawPayload` for unregistered tags (never "type not
//!   found")
//! - **Encode dispatch**: live payload → (tag, bytes) via reverse lookup
//! - **Global registry**: process-wide default instance with free-function
//!   convenience API for startup-time registration
//!
//! ## What This Crate Does NOT Contain
//! - Payload encodings (each payload type owns its format, see libs/payload)
//! - Envelope framing, signing, or transport (external collaborators)
//!
//! ## Architecture Role
//!
//! ```text
//! libs/payload  →  [libs/registry]  →  envelope layer
//!      ↑                 ↓                  ↓
//! Pure Contracts    Tag Resolution     Framing/Signing
//! Payload trait     Decode/Encode      Transport
//! RawPayload        Dispatch
//! ```
//!
//! ## Usage
//!
//! Registration happens once, at process startup, by the module that owns
//! each payload type:
//!
//! ```rust
//! use payload::{DecodeError, EncodeError, Payload};
//! use registry::PayloadRegistry;
//! use std::any::Any;
//!
//! #[derive(Debug, Default)]
//! struct Ping { nonce: u8 }
//!
//! impl Payload for Ping {
//!     fn marshal(&self) -> Result<Vec<u8>, EncodeError> {
//!         Ok(vec![self.nonce])
//!     }
//!     fn unmarshal(&mut self, data: &[u8]) -> Result<(), DecodeError> {
//!         self.nonce = *data.first()
//!             .ok_or_else(|| DecodeError::truncated(1, 0, "ping nonce"))?;
//!         Ok(())
//!     }
//!     fn as_any(&self) -> &dyn Any { self }
//!     fn as_any_mut(&mut self) -> &mut dyn Any { self }
//!     fn into_any(self: Box<Self>) -> Box<dyn Any> { self }
//! }
//!
//! let registry = PayloadRegistry::new();
//! registry.register::<Ping>("/myapp/ping/v1");
//!
//! let decoded = registry.decode(&"/myapp/ping/v1".into(), &[7]).unwrap();
//! assert_eq!(decoded.downcast_ref::<Ping>().unwrap().nonce, 7);
//! ```

pub mod dispatch;
pub mod error;
pub mod global;
pub mod registry;

pub use dispatch::decode_typed;
pub use error::DispatchError;
pub use global::{decode, encode_with_tag, global, register_payload_type};
pub use registry::PayloadRegistry;

// Re-export the contract layer so consumers need a single dependency
pub use payload::{DecodeError, EncodeError, Payload, PayloadTag, RawPayload};
