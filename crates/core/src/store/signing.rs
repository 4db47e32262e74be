//! Request signing.

use mediagate_shared::SignatureAlgorithm;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Parameters that are sent but never signed.
const UNSIGNED: [&str; 4] = ["file", "api_key", "cloud_name", "resource_type"];

/// Sign request parameters with the API secret.
///
/// Signed parameters are sorted by name and joined as `k=v` with `&`;
/// empty values are skipped. The secret is appended and the digest
/// returned as lowercase hex.
#[must_use]
pub fn sign_params(
    params: &[(&str, String)],
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let mut signed: Vec<(&str, &str)> = params
        .iter()
        .filter(|(k, v)| !v.is_empty() && !UNSIGNED.contains(k))
        .map(|(k, v)| (*k, v.as_str()))
        .collect();
    signed.sort_unstable_by_key(|(k, _)| *k);

    let to_sign = signed
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    match algorithm {
        SignatureAlgorithm::Sha1 => digest_hex::<Sha1>(&to_sign, api_secret),
        SignatureAlgorithm::Sha256 => digest_hex::<Sha256>(&to_sign, api_secret),
    }
}

fn digest_hex<D: Digest>(to_sign: &str, api_secret: &str) -> String {
    let mut hasher = D::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
