//! # Envelope Payload Dispatch Demo
//!
//! Walks through the full lifecycle the envelope layer drives:
//! - Startup-time registration of payload types
//! - Encode dispatch: typed payload → (tag, bytes) via reverse lookup
//! - Decode dispatch: (tag, bytes) → typed payload
//! - Raw fallback for tags nobody registered

use std::any::Any;

use payload::{DecodeError, EncodeError, Payload, RawPayload};
use registry::PayloadRegistry;

/// Fixed 8-byte little-endian payload: [x: i32 LE][y: i32 LE]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl Payload for Point {
    fn marshal(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(8);
        buf.extend_from_slice(&self.x.to_le_bytes());
        buf.extend_from_slice(&self.y.to_le_bytes());
        Ok(buf)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        if data.len() != 8 {
            return Err(DecodeError::truncated(8, data.len(), "point coordinates"));
        }
        self.x = i32::from_le_bytes(data[0..4].try_into().unwrap());
        self.y = i32::from_le_bytes(data[4..8].try_into().unwrap());
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

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trace".into()),
        )
        .init();

    println!("Envelope Payload Dispatch Demo");
    println!("==============================\n");

    // 1. Startup: the module owning each payload type registers it once
    let registry = PayloadRegistry::new();
    registry.register::<Point>("/example/point");
    println!("1. Registered {} payload type(s): {:?}\n", registry.len(), registry);

    // 2. Send side: the envelope layer auto-fills the payload-type field
    let point = Point { x: 3, y: 4 };
    let (tag, bytes) = registry
        .encode_with_tag(&point)
        .expect("Point is registered");
    println!("2. Encoded {:?} under tag {} ({} bytes)\n", point, tag, bytes.len());

    // 3. Receive side: tag + bytes come back as the registered type
    let decoded = registry.decode(&tag, &bytes).expect("well-formed bytes");
    let round_tripped = decoded.downcast_ref::<Point>().expect("decoded as Point");
    println!("3. Decoded back to {:?} (round-trip intact: {})\n", round_tripped, *round_tripped == point);

    // 4. Unknown tags never fail - bytes survive verbatim for forwarding
    let opaque = registry
        .decode(&"/future/format".into(), b"\x00\x01not ours\xFF")
        .expect("fallback never fails");
    let raw = opaque.downcast_ref::<RawPayload>().expect("raw fallback");
    println!("4. Unregistered tag fell back to RawPayload carrying {} bytes verbatim\n", raw.len());

    // 5. Malformed bytes for a registered type are the only decode failure
    match registry.decode(&tag, &[1, 2, 3]) {
        Err(e) => println!("5. Malformed input rejected as expected: {}", e),
        Ok(_) => println!("5. Unexpected success"),
    }
}
