//! Fingerprints - SHA-256 over Canonical JSON
//!
//! Equal designs fingerprint identically regardless of field order.

use serde::Serialize;
use serde_json::to_string;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Canonical JSON: keys sorted at every depth, no whitespace.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut v = serde_json::to_value(value)?;
    v.sort_all_objects();
    to_string(&v)
}

/// Fingerprint of any serializable value
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(sha256_hex(canonical_json(value)?.as_bytes()))
}

/// Fingerprint of a render request
/// request = sha256(profile_id + engine_version + canonical_spec)
pub fn compute_request_fingerprint(
    profile_id: &str,
    engine_version: &str,
    spec: &impl Serialize,
) -> Result<String, serde_json::Error> {
    let combined = format!("{}:{}:{}", profile_id, engine_version, canonical_json(spec)?);
    Ok(sha256_hex(combined.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_sorted() {
        let obj = json!({"z": 1, "a": 2, "m": 3});
        assert_eq!(canonical_json(&obj).unwrap(), r#"{"a":2,"m":3,"z":1}"#);
    }

    #[test]
    fn test_canonical_json_sorts_nested_layers() {
        let spec = crate::compose(&crate::DesignInput::new("John", "10")).unwrap();
        let canonical = canonical_json(&spec).unwrap();
        let height = canonical.find(r#""height":500"#).unwrap();
        let kind = canonical.find(r#""kind":"base""#).unwrap();
        let width = canonical.find(r#""width":500"#).unwrap();
        assert!(height < kind && kind < width);
    }

    #[test]
    fn test_fingerprint_ignores_key_order() {
        let a = json!({"name": "John", "number": "10"});
        let b = json!({"number": "10", "name": "John"});
        assert_eq!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    }

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_request_fingerprint_depends_on_profile() {
        let spec = json!({"layers": []});
        let a = compute_request_fingerprint("reference", "1.0.0", &spec).unwrap();
        let b = compute_request_fingerprint("hoodie", "1.0.0", &spec).unwrap();
        assert_ne!(a, b);
    }
}
