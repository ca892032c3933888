//! Dispatch-level errors
//!
//! The registry and dispatch layer never recover from or suppress a payload
//! type's own errors - `DecodeError` and `EncodeError` pass through
//! unchanged. The only failure this layer adds is reverse lookup coming up
//! empty on the encode path; an unknown tag on the decode path is not an
//! error at all (it resolves to the raw fallback payload).

use payload::EncodeError;
use thiserror::Error;

/// Errors raised by the encode dispatch helper
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered entry matches the instance's runtime type
    ///
    /// The caller must either register the type at startup or supply an
    /// explicit tag out-of-band instead of relying on reverse lookup.
    #[error("no payload tag registered for type {type_name}: register it at startup or supply an explicit tag")]
    TagNotRegistered { type_name: &'static str },

    /// The payload's own marshal failed; passed through unchanged
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
