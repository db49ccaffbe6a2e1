//! OAuth 1.0a request signing (HMAC-SHA1).

use super::Credentials;
use crate::error::{ArtbotError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 percent-encoding as OAuth requires.
fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Build the `Authorization` header for a request.
///
/// `params` are the query/form parameters that take part in the signature;
/// multipart and JSON bodies do not.
pub fn authorization_header(
    creds: &Credentials,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
) -> Result<String> {
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string();
    signed_header(creds, method, url, params, &nonce, &timestamp)
}

/// [`authorization_header`] with a caller-supplied nonce and timestamp.
pub fn signed_header(
    creds: &Credentials,
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    nonce: &str,
    timestamp: &str,
) -> Result<String> {
    let oauth = [
        ("oauth_consumer_key", creds.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", "HMAC-SHA1"),
        ("oauth_timestamp", timestamp),
        ("oauth_token", creds.access_key.as_str()),
        ("oauth_version", "1.0"),
    ];

    let mut all: Vec<(&str, &str)> = oauth.to_vec();
    all.extend_from_slice(params);
    let base = signature_base_string(method, url, &all);
    let signature = sign(&base, &creds.consumer_secret, &creds.access_secret)?;

    let mut header: Vec<(&str, &str)> = oauth.to_vec();
    header.push(("oauth_signature", &signature));
    header.sort();
    let fields: Vec<String> = header
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect();
    Ok(format!("OAuth {}", fields.join(", ")))
}

/// `METHOD&url&params`, each component percent-encoded, parameters sorted
/// by encoded key then value.
pub fn signature_base_string(method: &str, url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> =
        params.iter().map(|(k, v)| (encode(k), encode(v))).collect();
    encoded.sort();
    let joined = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&joined)
    )
}

/// Base64 HMAC-SHA1 of `base` keyed by the two secrets.
pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> Result<String> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| ArtbotError::Publish(format!("invalid signing key: {}", e)))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
