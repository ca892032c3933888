//! Error message formatting through the public dispatch API
//!
//! Dispatch errors end up in operator logs; these tests pin the rendered
//! messages so diagnostics stay attributable to a concrete payload type and
//! actionable without a debugger.

use std::any::Any;

use payload::{DecodeError, EncodeError, Payload};
use registry::{DispatchError, PayloadRegistry};

#[derive(Debug, Default)]
struct Checksummed {
    body: Vec<u8>,
}

impl Payload for Checksummed {
    fn marshal(&self) -> Result<Vec<u8>, EncodeError> {
        if self.body.len() > 16 {
            return Err(EncodeError::invalid_state(
                "Checksummed",
                format!("body of {} bytes exceeds 16-byte frame", self.body.len()),
            ));
        }
        let mut buf = self.body.clone();
        buf.push(self.body.iter().fold(0u8, |acc, b| acc.wrapping_add(*b)));
        Ok(buf)
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        let (checksum, body) = match data.split_last() {
            Some(split) => split,
            None => return Err(DecodeError::truncated(1, 0, "trailing checksum byte")),
        };
        let computed = body.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        if computed != *checksum {
            return Err(DecodeError::malformed(
                "Checksummed",
                format!("checksum mismatch: expected {computed:#04x}, got {checksum:#04x}"),
            ));
        }
        self.body = body.to_vec();
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

#[test]
fn test_decode_error_messages_are_attributable() {
    let registry = PayloadRegistry::new();
    registry.register::<Checksummed>("/test/checksummed");

    let err = registry
        .decode(&"/test/checksummed".into(), &[])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "payload truncated: need 1 bytes, got 0 (context: trailing checksum byte)"
    );

    let err = registry
        .decode(&"/test/checksummed".into(), &[0x01, 0x02, 0xFF])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed payload for Checksummed: checksum mismatch: expected 0x03, got 0xff"
    );
}

#[test]
fn test_encode_error_messages_pass_through_dispatch() {
    let registry = PayloadRegistry::new();
    registry.register::<Checksummed>("/test/checksummed");

    let oversized = Checksummed { body: vec![0; 32] };
    let err = registry.encode_with_tag(&oversized).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot encode Checksummed: body of 32 bytes exceeds 16-byte frame"
    );
}

#[test]
fn test_tag_not_registered_names_the_type() {
    let registry = PayloadRegistry::new();

    let err = registry
        .encode_with_tag(&Checksummed::default())
        .unwrap_err();
    match err {
        DispatchError::TagNotRegistered { type_name } => {
            assert!(type_name.ends_with("Checksummed"))
        }
        other => panic!("expected TagNotRegistered, got {other:?}"),
    }
}
