//! Parsing of `vault://mount/path#key` secret references.
//!
//! Any value not carrying the `vault://` scheme is a literal and passes
//! through the pipeline untouched.

use crate::error::{Error, Result};

/// Scheme marker that distinguishes a backend reference from a literal.
pub const VAULT_SCHEME: &str = "vault://";

/// A parsed manifest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference {
    /// Verbatim value, written to the output as-is (after quoting).
    Literal(String),
    /// Backend reference to be resolved against Vault.
    Backend(BackendRef),
}

/// Location of a single secret field in the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRef {
    /// KV mount name, e.g. `kv`.
    pub mount: String,
    /// Path below the mount, e.g. `app/database`.
    pub path: String,
    /// Field name inside the secret, e.g. `password`.
    pub key: String,
}

/// Parse a raw manifest value into a [`Reference`].
///
/// Parsing is total apart from two rejection cases: a reference missing its
/// `#` key separator (or carrying more than one), and a reference missing
/// the `/` between mount and sub-path. Malformed references are rejected
/// whole, never partially parsed.
pub fn parse(raw: &str) -> Result<Reference> {
    let Some(rest) = raw.strip_prefix(VAULT_SCHEME) else {
        return Ok(Reference::Literal(raw.to_string()));
    };

    let parts: Vec<&str> = rest.split('#').collect();
    if parts.len() != 2 {
        return Err(Error::InvalidReferenceSyntax {
            reference: raw.to_string(),
            reason: "expected exactly one `#` separating path from key",
        });
    }
    let (location, key) = (parts[0], parts[1]);

    let Some((mount, path)) = location.split_once('/') else {
        return Err(Error::InvalidReferenceSyntax {
            reference: raw.to_string(),
            reason: "expected `/` separating mount from path",
        });
    };

    Ok(Reference::Backend(BackendRef {
        mount: mount.to_string(),
        path: path.to_string(),
        key: key.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_is_literal() {
        assert_eq!(
            parse("postgres://localhost/db").unwrap(),
            Reference::Literal("postgres://localhost/db".to_string())
        );
    }

    #[test]
    fn empty_value_is_literal() {
        assert_eq!(parse("").unwrap(), Reference::Literal(String::new()));
    }

    #[test]
    fn valid_reference_splits_mount_path_key() {
        let parsed = parse("vault://kv/app/database#password").unwrap();
        assert_eq!(
            parsed,
            Reference::Backend(BackendRef {
                mount: "kv".to_string(),
                path: "app/database".to_string(),
                key: "password".to_string(),
            })
        );
    }

    #[test]
    fn missing_key_separator_is_rejected() {
        let err = parse("vault://kv/app").unwrap_err();
        assert!(matches!(err, Error::InvalidReferenceSyntax { .. }));
        assert!(err.to_string().contains("#"));
    }

    #[test]
    fn repeated_key_separator_is_rejected() {
        assert!(parse("vault://kv/app#a#b").is_err());
    }

    #[test]
    fn missing_mount_separator_is_rejected() {
        let err = parse("vault://kvonly#key").unwrap_err();
        assert!(matches!(err, Error::InvalidReferenceSyntax { .. }));
        assert!(err.to_string().contains("mount"));
    }

    #[test]
    fn near_miss_prefix_is_literal() {
        // Scheme matching is exact; anything else is a literal.
        assert!(matches!(
            parse("vault:/kv/app#key").unwrap(),
            Reference::Literal(_)
        ));
        assert!(matches!(
            parse("VAULT://kv/app#key").unwrap(),
            Reference::Literal(_)
        ));
    }
}
