//! Anti-forgery `state` generation
//!
//! The `state` parameter binds an authorization redirect to the request
//! that initiated it: the client embeds it in the authorization URL, the
//! provider echoes it back in the callback, and the caller rejects the
//! callback when the two differ. Values come from the OS-backed CSPRNG;
//! there is no fallback generator.

use rand::RngExt;

/// Random bytes behind a generated state value (128 bits of entropy)
pub const STATE_BYTES: usize = 16;

/// Generate a fresh anti-forgery token.
///
/// Produces 16 random bytes hex-encoded to 32 lowercase characters.
/// Comparing the echoed value against this one is the caller's job;
/// nothing here stores or validates it.
pub fn generate_state() -> String {
    let mut bytes = [0u8; STATE_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_lowercase_hex() {
        let state = generate_state();
        assert_eq!(state.len(), 32);
        assert!(
            state.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "state must be lowercase hex: {state}"
        );
    }

    #[test]
    fn states_are_unique() {
        let a = generate_state();
        let b = generate_state();
        assert_ne!(a, b, "two states must not collide");
    }

    #[test]
    fn state_decodes_to_sixteen_bytes() {
        let decoded = hex::decode(generate_state()).expect("valid hex");
        assert_eq!(decoded.len(), STATE_BYTES);
    }
}
