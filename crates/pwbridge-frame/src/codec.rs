use bytes::{Buf, BufMut, BytesMut};
use serde_json::Value;

use crate::error::{FrameError, Result};

/// Width of the length prefix in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Interpret exactly 4 bytes as a native-endian message length.
///
/// Any other slice length is a framing error; the caller is expected to have
/// read the prefix as a unit.
pub fn parse_length_prefix(bytes: &[u8]) -> Result<u32> {
    let prefix: [u8; LENGTH_PREFIX_SIZE] = bytes.try_into().map_err(|_| FrameError::PrefixSize {
        actual: bytes.len(),
    })?;
    Ok(u32::from_ne_bytes(prefix))
}

/// Encode a message into the wire format.
///
/// Wire format:
/// ```text
/// ┌────────────────┬──────────────────┐
/// │ Length (4B NE) │ UTF-8 JSON text  │
/// │                │ (Length bytes)   │
/// └────────────────┴──────────────────┘
/// ```
///
/// Object keys serialize in sorted order (`Value` maps are `BTreeMap`-backed),
/// so identical logical content encodes to byte-identical output.
pub fn encode_message(value: &Value, dst: &mut BytesMut) -> Result<()> {
    let payload = serde_json::to_vec(value)?;
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
        });
    }
    dst.reserve(LENGTH_PREFIX_SIZE + payload.len());
    dst.put_u32_ne(payload.len() as u32);
    dst.put_slice(&payload);
    Ok(())
}

/// Decode one complete message from the front of a buffer.
///
/// Consumes exactly the prefix plus the declared payload length, so
/// consecutive messages in one buffer decode with sequential calls. A buffer
/// holding fewer bytes than declared is truncated: the host writes whole
/// frames, so a short buffer is an error, not a retry signal.
pub fn decode_message(src: &mut BytesMut) -> Result<Value> {
    if src.len() < LENGTH_PREFIX_SIZE {
        return Err(FrameError::TruncatedPrefix { actual: src.len() });
    }

    let declared = u32::from_ne_bytes(src[..LENGTH_PREFIX_SIZE].try_into().unwrap()) as usize;
    let available = src.len() - LENGTH_PREFIX_SIZE;
    if available < declared {
        return Err(FrameError::TruncatedPayload {
            actual: available,
            expected: declared,
        });
    }

    src.advance(LENGTH_PREFIX_SIZE);
    let payload = src.split_to(declared);

    Ok(serde_json::from_slice(&payload)?)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::*;

    #[test]
    fn parse_prefix_roundtrips_boundary_values() {
        for n in [0u32, 13, u32::MAX] {
            assert_eq!(parse_length_prefix(&n.to_ne_bytes()).unwrap(), n);
        }
    }

    #[test]
    fn parse_prefix_rejects_short_slices() {
        for len in 0..LENGTH_PREFIX_SIZE {
            let err = parse_length_prefix(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, FrameError::PrefixSize { actual } if actual == len));
        }
    }

    #[test]
    fn parse_prefix_rejects_long_slices() {
        let err = parse_length_prefix(&[0u8; 5]).unwrap_err();
        assert!(matches!(err, FrameError::PrefixSize { actual: 5 }));
    }

    #[test]
    fn encode_decode_roundtrip() {
        let value = json!({"website": "example.com", "password": "hunter2"});

        let mut buf = BytesMut::new();
        encode_message(&value, &mut buf).unwrap();

        let decoded = decode_message(&mut buf).unwrap();
        assert_eq!(decoded, value);
        assert!(buf.is_empty());
    }

    #[test]
    fn roundtrip_plain_string() {
        let value = json!("not_found");

        let mut buf = BytesMut::new();
        encode_message(&value, &mut buf).unwrap();
        assert_eq!(decode_message(&mut buf).unwrap(), value);
    }

    #[test]
    fn prefix_matches_payload_length() {
        let value = json!({"username": "alice", "password": "s3cret"});

        let mut buf = BytesMut::new();
        encode_message(&value, &mut buf).unwrap();

        let declared = parse_length_prefix(&buf[..LENGTH_PREFIX_SIZE]).unwrap() as usize;
        assert_eq!(declared, buf.len() - LENGTH_PREFIX_SIZE);
    }

    #[test]
    fn encoding_is_deterministic_across_insertion_order() {
        let mut forward = Map::new();
        forward.insert("username".to_string(), Value::from("alice"));
        forward.insert("password".to_string(), Value::from("s3cret"));

        let mut reverse = Map::new();
        reverse.insert("password".to_string(), Value::from("s3cret"));
        reverse.insert("username".to_string(), Value::from("alice"));

        let mut a = BytesMut::new();
        let mut b = BytesMut::new();
        encode_message(&Value::Object(forward), &mut a).unwrap();
        encode_message(&Value::Object(reverse), &mut b).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn object_keys_serialize_sorted() {
        let mut buf = BytesMut::new();
        encode_message(&json!({"username": "alice", "password": "s3cret"}), &mut buf).unwrap();

        let payload = &buf[LENGTH_PREFIX_SIZE..];
        assert_eq!(payload, br#"{"password":"s3cret","username":"alice"}"#);
    }

    #[test]
    fn two_concatenated_messages_decode_in_order() {
        let first = json!({"website": "a.example"});
        let second = json!({"website": "b.example"});

        let mut buf = BytesMut::new();
        encode_message(&first, &mut buf).unwrap();
        encode_message(&second, &mut buf).unwrap();

        assert_eq!(decode_message(&mut buf).unwrap(), first);
        assert_eq!(decode_message(&mut buf).unwrap(), second);
        assert!(buf.is_empty());
    }

    #[test]
    fn decode_truncated_prefix() {
        let mut buf = BytesMut::from(&13u32.to_ne_bytes()[..2]);
        let err = decode_message(&mut buf).unwrap_err();
        assert!(matches!(err, FrameError::TruncatedPrefix { actual: 2 }));
    }

    #[test]
    fn decode_truncated_payload_reports_both_counts() {
        let mut buf = BytesMut::new();
        encode_message(&json!("not_found"), &mut buf).unwrap();
        let expected = buf.len() - LENGTH_PREFIX_SIZE;
        buf.truncate(LENGTH_PREFIX_SIZE + 3);

        let err = decode_message(&mut buf).unwrap_err();
        match err {
            FrameError::TruncatedPayload {
                actual,
                expected: declared,
            } => {
                assert_eq!(actual, 3);
                assert_eq!(declared, expected);
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let payload = b"{not json";
        let mut buf = BytesMut::new();
        buf.put_u32_ne(payload.len() as u32);
        buf.put_slice(payload);

        let err = decode_message(&mut buf).unwrap_err();
        assert!(matches!(err, FrameError::Json(_)));
    }

    #[test]
    fn decode_rejects_invalid_utf8_payload() {
        let payload = [0xFF, 0xFE, 0xFD];
        let mut buf = BytesMut::new();
        buf.put_u32_ne(payload.len() as u32);
        buf.put_slice(&payload);

        let err = decode_message(&mut buf).unwrap_err();
        assert!(matches!(err, FrameError::Json(_)));
    }
}
