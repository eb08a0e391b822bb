//! Cryptographic Utilities
//!
//! Session cookies carry `id || HMAC-SHA256(key, id)`, base64url encoded,
//! so the server can reject forged or truncated tokens without a store lookup.

use base64::{Engine, engine::general_purpose};
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of a signed token payload in bytes (UUID + MAC)
pub const SIGNED_TOKEN_LEN: usize = 16 + 32;

/// Generate a random 32-byte key
pub fn random_key() -> [u8; 32] {
    let mut key = [0u8; 32];
    rand::rng().fill_bytes(&mut key);
    key
}

/// Encode bytes as unpadded base64url (cookie safe)
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode unpadded base64url to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::URL_SAFE_NO_PAD.decode(s)
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8; 32], data: &[u8]) -> [u8; 32] {
    // HMAC: H((K XOR opad) || H((K XOR ipad) || message))
    let mut o_key_pad = [0x5cu8; 64];
    let mut i_key_pad = [0x36u8; 64];

    for i in 0..32 {
        o_key_pad[i] ^= key[i];
        i_key_pad[i] ^= key[i];
    }

    let mut inner_hash = Sha256::new();
    inner_hash.update(i_key_pad);
    inner_hash.update(data);
    let inner_result = inner_hash.finalize();

    let mut outer_hash = Sha256::new();
    outer_hash.update(o_key_pad);
    outer_hash.update(inner_result);
    outer_hash.finalize().into()
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Sign a 16-byte identifier into a cookie token
pub fn sign_token(id_bytes: &[u8; 16], key: &[u8; 32]) -> String {
    let signature = hmac_sha256(key, id_bytes);
    let mut token_data = Vec::with_capacity(SIGNED_TOKEN_LEN);
    token_data.extend_from_slice(id_bytes);
    token_data.extend_from_slice(&signature);
    to_base64(&token_data)
}

/// Verify a token produced by [`sign_token`] and return the identifier
///
/// Returns `None` for malformed tokens and signature mismatches alike.
pub fn verify_token(token: &str, key: &[u8; 32]) -> Option<[u8; 16]> {
    let token_data = from_base64(token).ok()?;
    if token_data.len() != SIGNED_TOKEN_LEN {
        return None;
    }

    let id_bytes: [u8; 16] = token_data[0..16].try_into().ok()?;
    let expected = hmac_sha256(key, &id_bytes);

    if !constant_time_eq(&token_data[16..], &expected) {
        return None;
    }

    Some(id_bytes)
}
