//! Payload-level errors for marshal/unmarshal operations
//!
//! These errors are raised inside concrete payload implementations and passed
//! through the registry and dispatch layer unchanged. Each variant carries
//! enough context to attribute the failure to a specific type and input
//! without reproducing the bytes themselves.

use thiserror::Error;

/// Unmarshal failed: the bytes are malformed for the resolved payload type
///
/// Never raised by the raw fallback payload, which accepts any input.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is shorter than the type's encoding requires
    #[error("payload truncated: need {need} bytes, got {got} (context: {context})")]
    Truncated {
        need: usize,
        got: usize,
        context: String,
    },

    /// Input has the right shape but invalid content for the type
    #[error("malformed payload for {type_name}: {reason}")]
    Malformed {
        type_name: &'static str,
        reason: String,
    },

    /// Failure from an underlying decoder (serde, protobuf, ...)
    #[error("payload decode failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl DecodeError {
    /// Create a Truncated error with diagnostic context
    pub fn truncated(need: usize, got: usize, context: impl Into<String>) -> Self {
        Self::Truncated {
            need,
            got,
            context: context.into(),
        }
    }

    /// Create a Malformed error attributed to a concrete type
    pub fn malformed(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            type_name,
            reason: reason.into(),
        }
    }

    /// Wrap an underlying decoder error
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

/// Marshal failed: the payload cannot produce a valid encoding of its state
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Internal invariants of the payload prevent a valid encoding
    #[error("cannot encode {type_name}: {reason}")]
    InvalidState {
        type_name: &'static str,
        reason: String,
    },

    /// Failure from an underlying encoder (serde, protobuf, ...)
    #[error("payload encode failed: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl EncodeError {
    /// Create an InvalidState error attributed to a concrete type
    pub fn invalid_state(type_name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            type_name,
            reason: reason.into(),
        }
    }

    /// Wrap an underlying encoder error
    pub fn other(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Other(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_formatting() {
        let err = DecodeError::truncated(8, 3, "point payload");
        assert_eq!(
            err.to_string(),
            "payload truncated: need 8 bytes, got 3 (context: point payload)"
        );

        let err = DecodeError::malformed("Point", "coordinates out of range");
        assert_eq!(
            err.to_string(),
            "malformed payload for Point: coordinates out of range"
        );
    }

    #[test]
    fn test_encode_error_formatting() {
        let err = EncodeError::invalid_state("Quote", "bid above ask");
        assert_eq!(err.to_string(), "cannot encode Quote: bid above ask");
    }

    #[test]
    fn test_other_preserves_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad varint");
        let err = DecodeError::other(inner);
        assert!(err.to_string().contains("bad varint"));
    }
}
