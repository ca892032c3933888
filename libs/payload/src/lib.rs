//! # Envelope Payload Contract Library
//!
//! ## Purpose
//!
//! Pure data layer for envelope payload handling. This crate defines the
//! contract every payload type implements (marshal to bytes, unmarshal from
//! bytes), the opaque tag type that names payload types on the wire, and the
//! raw fallback payload used when a tag has no registered type. It contains
//! no registry or dispatch logic - that lives in `libs/registry`.
//!
//! ## What This Crate Contains
//! - **Payload trait**: the marshal/unmarshal capability contract
//! - **PayloadTag**: opaque byte-sequence identifier for payload types
//! - **RawPayload**: lossless fallback carrying unprocessed bytes verbatim
//! - **DecodeError / EncodeError**: the error vocabulary payload
//!   implementations raise and the dispatch layer passes through
//!
//! ## What This Crate Does NOT Contain
//! - Tag-to-type registration or lookup (belongs in libs/registry)
//! - Envelope framing, signing, or transport (external collaborators)
//!
//! ## Architecture Role
//!
//! ```text
//! libs/payload  →  libs/registry  →  envelope layer
//!      ↑                ↓                  ↓
//! Pure Contracts   Tag Resolution     Framing/Signing
//! Payload trait    Decode/Encode      Transport
//! RawPayload       Dispatch
//! ```

pub mod contract;
pub mod error;
pub mod raw;
pub mod tag;

pub use contract::Payload;
pub use error::{DecodeError, EncodeError};
pub use raw::RawPayload;
pub use tag::PayloadTag;
