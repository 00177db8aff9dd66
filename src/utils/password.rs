use rand::Rng;
use sha2::{Digest, Sha256};

use crate::utils::validate::Validator;

const SALT_BYTE_LENGTH: usize = 10;

const MIN_PASSWORD_LENGTH: usize = 6;
const MAX_PASSWORD_LENGTH: usize = 64;

pub(crate) const STRENGTH_RULE_TAG: &str = "password";

const STRENGTH_MESSAGE: &str = "{0} must contain at least 1 capital characters, 1 number, and 1 special (non alpha-numeric) character";

pub(crate) fn salt_and_hash(password: &str) -> (String, String) {
    let salt = generate_salt();
    let hash = create_hash(password, &salt);

    (hash, salt)
}

pub(crate) fn verify(password: &str, password_hash: &str, salt: &str) -> bool {
    slow_equals(&create_hash(password, salt), password_hash)
}

/// Passwords must be 6 to 64 characters, containing at least 1 capital
/// character AND 1 number AND 1 special (non alpha-numeric) character.
pub(crate) fn meets_strength_policy(password: &str) -> bool {
    if password.len() < MIN_PASSWORD_LENGTH || password.len() > MAX_PASSWORD_LENGTH {
        return false;
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return false;
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    password
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_ascii_whitespace())
}

pub(crate) fn register_strength_rule(validator: &mut Validator) {
    validator.register_rule(STRENGTH_RULE_TAG, |ctx| {
        ctx.value.is_none_or(meets_strength_policy)
    });
    validator.register_message(STRENGTH_RULE_TAG, STRENGTH_MESSAGE);
}

fn generate_salt() -> String {
    use base64::Engine;

    let mut bytes = [0u8; SALT_BYTE_LENGTH];
    rand::rng().fill(&mut bytes[..]);

    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn create_hash(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());

    format!("{:x}", hasher.finalize())
}

/// Compares the full length of both inputs rather than bailing on the first
/// mismatched byte.
fn slow_equals(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes().zip(b.bytes()).fold(0, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_policy() {
        assert!(!meets_strength_policy("abcdefg"));
        assert!(!meets_strength_policy("aBcdefg"));
        assert!(!meets_strength_policy("aB3defg"));
        assert!(meets_strength_policy("aB3$efg"));
    }

    #[test]
    fn test_strength_policy_length_bounds() {
        assert!(!meets_strength_policy("aB3$e"));
        assert!(meets_strength_policy("aB3$ef"));
        assert!(meets_strength_policy(&format!("aB3${}", "e".repeat(60))));
        assert!(!meets_strength_policy(&format!("aB3${}", "e".repeat(61))));
    }

    #[test]
    fn test_ascii_whitespace_is_not_special() {
        assert!(!meets_strength_policy("aB3 efg"));
        assert!(!meets_strength_policy("aB3\tefg"));

        // U+00A0 is whitespace only in the Unicode sense.
        assert!(meets_strength_policy("aB3\u{a0}ef"));
    }

    #[test]
    fn test_hash_roundtrip() {
        let (hash, salt) = salt_and_hash("aB3$efg");

        assert!(verify("aB3$efg", &hash, &salt));
        assert!(!verify("aB3$efh", &hash, &salt));
        assert!(!verify("aB3$efg", &hash, "wrong salt"));
    }

    #[test]
    fn test_hash_is_lowercase_hex() {
        let (hash, _) = salt_and_hash("aB3$efg");

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_salts_are_fresh() {
        let (hash_one, salt_one) = salt_and_hash("aB3$efg");
        let (hash_two, salt_two) = salt_and_hash("aB3$efg");

        assert_ne!(salt_one, salt_two);
        assert_ne!(hash_one, hash_two);
    }

    #[test]
    fn test_salt_is_standard_base64() {
        use base64::Engine;

        let (_, salt) = salt_and_hash("aB3$efg");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&salt)
            .unwrap();

        assert_eq!(decoded.len(), SALT_BYTE_LENGTH);
    }
}
