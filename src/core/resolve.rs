//! Secret resolution against a key-value backend.
//!
//! The backend is abstracted behind [`SecretBackend`] so tests can
//! substitute an in-memory fake without a live Vault server.

use serde_json::Value;

use crate::core::reference::Reference;
use crate::error::{Error, Result};

/// Field map returned by one backend read.
pub type SecretData = serde_json::Map<String, Value>;

/// Narrow capability interface over the secrets backend.
pub trait SecretBackend {
    /// Read the secret stored at `mount`/`path`, returning its field map.
    fn read_secret(&self, mount: &str, path: &str) -> Result<SecretData>;
}

/// Resolve a parsed reference to its final string value.
///
/// Literals pass through verbatim. Backend references cost exactly one
/// backend read; a missing field after a successful read is `KeyNotFound`.
pub fn resolve(backend: &dyn SecretBackend, reference: &Reference) -> Result<String> {
    match reference {
        Reference::Literal(value) => Ok(value.clone()),
        Reference::Backend(r) => {
            let data = backend.read_secret(&r.mount, &r.path)?;
            let value = data.get(&r.key).ok_or_else(|| Error::KeyNotFound {
                mount: r.mount.clone(),
                path: r.path.clone(),
                key: r.key.clone(),
            })?;
            Ok(stringify(value))
        }
    }
}

/// Canonical textual form of a backend field value.
///
/// Strings are taken as-is; numbers, booleans, and null render as their
/// JSON text; compound values fall back to compact JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reference::BackendRef;
    use serde_json::json;

    struct FakeBackend {
        data: SecretData,
    }

    impl SecretBackend for FakeBackend {
        fn read_secret(&self, mount: &str, path: &str) -> Result<SecretData> {
            if mount == "kv" && path == "app" {
                Ok(self.data.clone())
            } else {
                Err(Error::BackendUnavailable {
                    mount: mount.to_string(),
                    path: path.to_string(),
                    reason: "not found".to_string(),
                })
            }
        }
    }

    fn backend() -> FakeBackend {
        let mut data = SecretData::new();
        data.insert("password".to_string(), json!("s3cr3t"));
        data.insert("port".to_string(), json!(5432));
        data.insert("tls".to_string(), json!(true));
        data.insert("comment".to_string(), json!(null));
        FakeBackend { data }
    }

    fn backend_ref(mount: &str, path: &str, key: &str) -> Reference {
        Reference::Backend(BackendRef {
            mount: mount.to_string(),
            path: path.to_string(),
            key: key.to_string(),
        })
    }

    #[test]
    fn literal_bypasses_backend() {
        struct Panicking;
        impl SecretBackend for Panicking {
            fn read_secret(&self, _: &str, _: &str) -> Result<SecretData> {
                panic!("literal resolution must not hit the backend");
            }
        }
        let value = resolve(&Panicking, &Reference::Literal("plain".to_string())).unwrap();
        assert_eq!(value, "plain");
    }

    #[test]
    fn string_field_resolves_verbatim() {
        let value = resolve(&backend(), &backend_ref("kv", "app", "password")).unwrap();
        assert_eq!(value, "s3cr3t");
    }

    #[test]
    fn number_and_bool_fields_stringify() {
        assert_eq!(
            resolve(&backend(), &backend_ref("kv", "app", "port")).unwrap(),
            "5432"
        );
        assert_eq!(
            resolve(&backend(), &backend_ref("kv", "app", "tls")).unwrap(),
            "true"
        );
    }

    #[test]
    fn null_field_stringifies_as_null() {
        assert_eq!(
            resolve(&backend(), &backend_ref("kv", "app", "comment")).unwrap(),
            "null"
        );
    }

    #[test]
    fn missing_key_is_key_not_found() {
        let err = resolve(&backend(), &backend_ref("kv", "app", "absent")).unwrap_err();
        assert!(matches!(err, Error::KeyNotFound { .. }));
    }

    #[test]
    fn backend_failure_propagates() {
        let err = resolve(&backend(), &backend_ref("kv", "missing", "password")).unwrap_err();
        assert!(matches!(err, Error::BackendUnavailable { .. }));
    }
}
