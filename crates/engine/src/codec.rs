//! Cohort (de)serialization strategy used for cache payloads.

use thiserror::Error;

use tiercast_common::types::User;

#[derive(Debug, Error)]
#[error("cohort codec error: {0}")]
pub struct CodecError(pub String);

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError(err.to_string())
    }
}

/// Converts a cohort snapshot to and from its cached string form.
#[cfg_attr(test, mockall::automock)]
pub trait CohortCodec: Send + Sync {
    fn encode(&self, users: &[User]) -> Result<String, CodecError>;

    fn decode(&self, payload: &str) -> Result<Vec<User>, CodecError>;
}

/// JSON array codec, the format stored under `users:<type>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl CohortCodec for JsonCodec {
    fn encode(&self, users: &[User]) -> Result<String, CodecError> {
        Ok(serde_json::to_string(users)?)
    }

    fn decode(&self, payload: &str) -> Result<Vec<User>, CodecError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cached_payload() {
        let payload = r#"[{"id":1, "name": "name", "type": "premium", "phone_number": "088888888", "email": "email@test.mail", "score": 60}]"#;
        let users = JsonCodec.decode(payload).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].email, "email@test.mail");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(JsonCodec.decode("").is_err());
        assert!(JsonCodec.decode("{\"id\":1}").is_err());
    }

    #[test]
    fn test_encode_empty_cohort() {
        assert_eq!(JsonCodec.encode(&[]).unwrap(), "[]");
    }
}
