//! Tag → payload type registry
//!
//! Process-wide mapping from opaque payload tags to factories that construct
//! blank instances of the registered concrete type. Registration is a
//! startup-time declarative call made by the module that owns each payload
//! type; after registration quiesces, resolution and reverse lookup are
//! read-only and freely concurrent.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use payload::{Payload, PayloadTag, RawPayload};
use tracing::{debug, trace};

/// Type-erased constructor producing a fresh blank payload per call
type PayloadFactory = Box<dyn Fn() -> Box<dyn Payload> + Send + Sync>;

/// One registered tag → type association
struct RegistryEntry {
    type_id: TypeId,
    type_name: &'static str,
    factory: PayloadFactory,
}

/// Registry mapping payload tags to concrete payload types
///
/// Entries are added only via registration and never removed. A later
/// registration for the same tag silently replaces the earlier one; tag
/// uniqueness across payload types is a convention owned by the registering
/// modules, not enforced here.
///
/// The map sits behind a read-write lock: `register` takes the write lock,
/// everything else the read lock. The intended pattern is still "register
/// everything during single-threaded startup, then dispatch concurrently" -
/// the lock removes the data-race hazard if that discipline slips, at a
/// constant cost per lookup.
pub struct PayloadRegistry {
    entries: RwLock<HashMap<PayloadTag, RegistryEntry>>,
}

impl PayloadRegistry {
    /// Create an empty registry
    ///
    /// Most callers want the process-wide instance from
    /// [`crate::global()`]; explicit instances exist so embedding systems
    /// and tests can scope registrations.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Associate `tag` with the payload type `P`
    ///
    /// Decoding an envelope carrying `tag` will construct a fresh
    /// `P::default()` and unmarshal into it. The blank instance is built per
    /// decode call - registered types never share state between decodes.
    pub fn register<P: Payload + Default>(&self, tag: impl Into<PayloadTag>) {
        self.register_with_factory(tag, P::default)
    }

    /// Associate `tag` with a payload type built by an explicit factory
    ///
    /// For payload types whose blank state is not `Default::default()`. The
    /// factory runs once per decode and must produce an instance ready to be
    /// fully overwritten by `unmarshal`.
    pub fn register_with_factory<P, F>(&self, tag: impl Into<PayloadTag>, factory: F)
    where
        P: Payload,
        F: Fn() -> P + Send + Sync + 'static,
    {
        let tag = tag.into();
        let entry = RegistryEntry {
            type_id: TypeId::of::<P>(),
            type_name: std::any::type_name::<P>(),
            factory: Box::new(move || Box::new(factory())),
        };

        let mut entries = self.entries.write().unwrap();
        match entries.insert(tag.clone(), entry) {
            Some(previous) => debug!(
                tag = %tag,
                new_type = std::any::type_name::<P>(),
                previous_type = previous.type_name,
                "payload type registration replaced"
            ),
            None => debug!(
                tag = %tag,
                payload_type = std::any::type_name::<P>(),
                "payload type registered"
            ),
        }
    }

    /// Construct a blank instance of the type registered for `tag`
    ///
    /// Falls back to a fresh [`RawPayload`] for unregistered tags, so this
    /// never fails and decoding never hits a "type not found" condition.
    pub fn resolve_blank(&self, tag: &PayloadTag) -> Box<dyn Payload> {
        let entries = self.entries.read().unwrap();
        match entries.get(tag) {
            Some(entry) => {
                trace!(tag = %tag, payload_type = entry.type_name, "resolved registered payload type");
                (entry.factory)()
            }
            None => {
                trace!(tag = %tag, "tag unregistered, falling back to raw payload");
                Box::new(RawPayload::default())
            }
        }
    }

    /// Find the tag registered for the instance's concrete type
    ///
    /// Linear scan over all entries, acceptable because registration counts
    /// are small and fixed at process scope. When one type is registered
    /// under several tags, which tag comes back is unspecified (the backing
    /// map has no iteration order) - registering each concrete type under
    /// exactly one tag is the intended discipline.
    pub fn find_tag(&self, instance: &dyn Payload) -> Option<PayloadTag> {
        let type_id = instance.as_any().type_id();
        let entries = self.entries.read().unwrap();
        entries
            .iter()
            .find(|(_, entry)| entry.type_id == type_id)
            .map(|(tag, _)| tag.clone())
    }

    /// Number of registered tag → type associations
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Check whether no types have been registered
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl Default for PayloadRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PayloadRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.read().unwrap();
        let mut map = f.debug_map();
        for (tag, entry) in entries.iter() {
            map.entry(&tag.to_string(), &entry.type_name);
        }
        map.finish()
    }
}
