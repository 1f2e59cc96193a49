//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::rules;

/// The length of the passwords produced by [`generate`].
pub const GENERATED_LENGTH: usize = 12;

/// Generate a password by just randomly sampling the given alphabet.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
///
/// An empty alphabet yields an empty password.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> crate::Secret
where
    R: Rng + ?Sized,
{
    let mut secret = crate::Secret(String::with_capacity(len));
    for _ in 0..len {
        if let Some(ch) = alphabet.choose(rng) {
            secret.0.push(*ch);
        }
    }
    secret
}

/// Generate a password that passes every composition rule, using the thread-local generator.
///
/// This is a suggestion for the user, not key material; the generator is seeded from system
/// entropy but nothing here is hardened.
pub fn generate() -> crate::Secret {
    generate_with(&mut rand::thread_rng())
}

/// Generate a password that passes every composition rule, drawing from `rng`.
///
/// One character is drawn from each class (uppercase, lowercase, digit, special), the rest from
/// all classes together, and the whole is shuffled so the guaranteed characters land anywhere.
pub fn generate_with<R>(rng: &mut R) -> crate::Secret
where
    R: Rng + ?Sized,
{
    let classes = [
        rules::UPPERCASE,
        rules::LOWERCASE,
        rules::DIGITS,
        rules::SPECIAL,
    ]
    .map(|class| class.chars().collect::<Vec<_>>());

    let mut chars = Vec::with_capacity(GENERATED_LENGTH);
    for class in &classes {
        chars.extend(generate_random_password(rng, class, 1).0.chars());
    }

    let alphabet = classes.concat();
    let rest = generate_random_password(rng, &alphabet, GENERATED_LENGTH - classes.len());
    chars.extend(rest.0.chars());

    chars.shuffle(rng);
    tracing::debug!(length = chars.len(), "generated password");
    crate::Secret(chars.into_iter().collect())
}
