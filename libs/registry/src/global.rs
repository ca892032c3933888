//! Process-wide default registry
//!
//! Most embeddings want a single registry shared by every module that
//! defines a payload type, populated from each module's startup path. The
//! instance is created lazily on first use and lives for the process
//! lifetime. Components that need isolation (tests, multi-tenant hosts)
//! should construct their own [`PayloadRegistry`] and pass it by reference
//! instead.

use once_cell::sync::Lazy;

use payload::{DecodeError, Payload, PayloadTag};

use crate::error::DispatchError;
use crate::registry::PayloadRegistry;

static GLOBAL_REGISTRY: Lazy<PayloadRegistry> = Lazy::new(PayloadRegistry::new);

/// The process-wide payload registry
pub fn global() -> &'static PayloadRegistry {
    &GLOBAL_REGISTRY
}

/// Register `P` under `tag` in the process-wide registry
///
/// Call once per payload type from the owning module's startup path, before
/// envelope traffic begins.
pub fn register_payload_type<P: Payload + Default>(tag: impl Into<PayloadTag>) {
    global().register::<P>(tag)
}

/// Decode payload bytes against the process-wide registry
///
/// See [`PayloadRegistry::decode`].
pub fn decode(tag: &PayloadTag, bytes: &[u8]) -> Result<Box<dyn Payload>, DecodeError> {
    global().decode(tag, bytes)
}

/// Marshal a payload and recover its tag from the process-wide registry
///
/// See [`PayloadRegistry::encode_with_tag`].
pub fn encode_with_tag(instance: &dyn Payload) -> Result<(PayloadTag, Vec<u8>), DispatchError> {
    global().encode_with_tag(instance)
}
