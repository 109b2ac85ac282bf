// src/utils/crypto.rs

use secrecy::{ExposeSecret, SecretString};

const MASK: &str = "****";
const MIN_PREVIEW_LEN: usize = 16;
const PREVIEW_CHARS: usize = 4;

/// Short, non-reversible preview of a secret for logs and display.
///
/// Values of at least 16 characters keep their first 4 characters, anything
/// shorter is fully masked.
pub fn preview_secret(secret: &SecretString) -> String {
    let value = secret.expose_secret();
    if value.chars().count() >= MIN_PREVIEW_LEN {
        let head: String = value.chars().take(PREVIEW_CHARS).collect();
        format!("{head}{MASK}")
    } else {
        MASK.to_string()
    }
}
