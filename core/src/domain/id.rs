//! Identifier generation
//!
//! Ids are short random lowercase alphanumeric tokens. Uniqueness is
//! probabilistic only: no existence check is performed before insert, so
//! collisions are possible in principle and unhandled by the storage layer.

use rand::Rng;

const ID_LENGTH: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new opaque entity identifier
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}
