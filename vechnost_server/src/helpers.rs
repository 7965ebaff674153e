use regex::Regex;
use sha2::{Digest, Sha256};

/// Digest a password for storage and comparison. The engine only ever sees
/// this hex digest, never the plaintext.
pub fn hash_password(password: &str) -> String {
    sha256_hex(password.as_bytes())
}

/// Derive the bearer token handed out at login. The token is stable per
/// user, which is all the bookkeeping the storefront needs.
pub fn auth_token(user_id: i64) -> String {
    sha256_hex(user_id.to_string().as_bytes())
}

fn sha256_hex(data: &[u8]) -> String {
    use std::fmt::Write;
    Sha256::digest(data).iter().fold(String::with_capacity(64), |mut hex, b| {
        let _ = write!(hex, "{b:02x}");
        hex
    })
}

/// A light syntactic check; full address validation belongs to the mail
/// delivery path, not the API.
pub fn is_valid_email(email: &str) -> bool {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    re.is_match(email)
}
