//! Blocking HashiCorp Vault client for KV secret reads.
//!
//! Reads go through the KV v2 endpoint (`/v1/<mount>/data/<path>`), with a
//! fallback to the KV v1 payload shape when the v2 envelope is absent.
//! Authentication is ambient: the token is taken from `VAULT_TOKEN`.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::core::config::{Config, VAULT_TOKEN_ENV};
use crate::core::resolve::{SecretBackend, SecretData};
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Vault REST API client.
#[derive(Debug, Clone)]
pub struct VaultClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl VaultClient {
    fn user_agent() -> String {
        format!("vault2env/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Create a client for the address configured on `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(Self::user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.vault_addr.trim_end_matches('/').to_string(),
            token: std::env::var(VAULT_TOKEN_ENV).ok(),
        })
    }

    fn unavailable(mount: &str, path: &str, reason: impl Into<String>) -> Error {
        Error::BackendUnavailable {
            mount: mount.to_string(),
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Percent-encode a single URL path component.
fn percent_encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.bytes() {
        let safe = b.is_ascii_uppercase()
            || b.is_ascii_lowercase()
            || b.is_ascii_digit()
            || matches!(b, b'-' | b'_' | b'.' | b'~');
        if safe {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(
                char::from_digit((b >> 4) as u32, 16)
                    .unwrap()
                    .to_ascii_uppercase(),
            );
            out.push(
                char::from_digit((b & 0x0F) as u32, 16)
                    .unwrap()
                    .to_ascii_uppercase(),
            );
        }
    }
    out
}

/// Percent-encode each segment of a slash-delimited Vault path.
fn encode_vault_path(path: &str) -> String {
    path.split('/')
        .map(percent_encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Extract the secret field map from KV v2 or v1 style response payloads.
fn extract_data(body: &Value) -> Option<SecretData> {
    // KV v2 style: { "data": { "data": { <field>: <value> } } }
    if let Some(Value::Object(fields)) = body.get("data").and_then(|d| d.get("data")) {
        return Some(fields.clone());
    }

    // KV v1 style: { "data": { <field>: <value> } }
    if let Some(Value::Object(fields)) = body.get("data") {
        return Some(fields.clone());
    }

    None
}

impl SecretBackend for VaultClient {
    fn read_secret(&self, mount: &str, path: &str) -> Result<SecretData> {
        let url = format!(
            "{}/v1/{}/data/{}",
            self.base_url,
            percent_encode_component(mount),
            encode_vault_path(path)
        );
        debug!(%url, "reading secret");

        let mut request = self.http.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("X-Vault-Token", token);
        }

        let resp = request
            .send()
            .map_err(|e| Self::unavailable(mount, path, format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::unavailable(mount, path, format!("status {status}")));
        }

        let body: Value = resp
            .json()
            .map_err(|e| Self::unavailable(mount, path, format!("invalid response body: {e}")))?;

        extract_data(&body)
            .ok_or_else(|| Self::unavailable(mount, path, "response missing secret data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_agent_contains_version() {
        assert!(VaultClient::user_agent().starts_with("vault2env/"));
    }

    #[test]
    fn percent_encode_path_component() {
        assert_eq!(percent_encode_component("my app"), "my%20app");
        assert_eq!(percent_encode_component("a?b#c"), "a%3Fb%23c");
        assert_eq!(percent_encode_component("A_B-1.2~x"), "A_B-1.2~x");
    }

    #[test]
    fn encode_vault_path_keeps_slashes() {
        assert_eq!(encode_vault_path("app/my service"), "app/my%20service");
    }

    #[test]
    fn extract_data_supports_kv_v2() {
        let body = json!({"data": {"data": {"password": "s3cr3t"}}});
        let fields = extract_data(&body).unwrap();
        assert_eq!(fields["password"], json!("s3cr3t"));
    }

    #[test]
    fn extract_data_supports_kv_v1() {
        let body = json!({"data": {"password": "s3cr3t"}});
        let fields = extract_data(&body).unwrap();
        assert_eq!(fields["password"], json!("s3cr3t"));
    }

    #[test]
    fn extract_data_rejects_missing_payload() {
        assert!(extract_data(&json!({"errors": []})).is_none());
        assert!(extract_data(&json!({"data": "not a map"})).is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = Config::new(".", "http://127.0.0.1:8200/");
        let client = VaultClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8200");
    }
}
