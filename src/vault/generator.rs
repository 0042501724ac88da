//! Password generator

use rand::Rng;

/// Letters, digits and ten punctuation marks (72 characters)
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

pub const GENERATED_LENGTH: usize = 12;

/// Generates a password with the thread-local RNG
pub fn generate_password() -> String {
    generate_password_with(&mut rand::thread_rng())
}

/// Draws `GENERATED_LENGTH` characters uniformly from `ALPHABET`
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..GENERATED_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn alphabet_has_72_distinct_characters() {
        let mut chars = ALPHABET.to_vec();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), 72);
    }

    #[test]
    fn generated_passwords_are_12_chars_from_the_alphabet() {
        for _ in 0..500 {
            let password = generate_password();
            assert_eq!(password.len(), GENERATED_LENGTH);
            assert!(password.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn seeded_generator_covers_the_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.extend(generate_password_with(&mut rng).bytes());
        }
        assert_eq!(seen.len(), ALPHABET.len());
    }
}
