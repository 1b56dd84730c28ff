//! Scramble generation with quality guarantees
//!
//! A scramble must differ from the word, displace at least two letters
//! (for words longer than two letters), and for short words must not keep
//! both end letters in place. Only a seeded RNG is used, so the same seed
//! yields the same scramble.

use rand::Rng;

use crate::consts::{END_GUARD_MAX_LEN, MAX_SCRAMBLE_ATTEMPTS, MIN_DISPLACED, SHUFFLE_PASSES};

/// Result of scrambling one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    pub text: String,
    /// Attempts used (0 for words too short to scramble)
    pub attempts: u32,
    /// The attempt cap ran out and `text` is the last permutation tried,
    /// which may break the quality rules
    pub degraded: bool,
}

impl Scramble {
    fn unchanged(word: &str) -> Self {
        Self {
            text: word.to_string(),
            attempts: 0,
            degraded: false,
        }
    }
}

/// Scramble a word
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Scramble {
    let original: Vec<char> = word.chars().collect();
    if original.len() <= 1 {
        return Scramble::unchanged(word);
    }

    let mut shuffled = original.clone();
    let mut attempts = 0;
    loop {
        attempts += 1;
        for _ in 0..SHUFFLE_PASSES {
            fisher_yates(&mut shuffled, rng);
        }

        let accepted = settle(&original, &mut shuffled);
        if accepted || attempts >= MAX_SCRAMBLE_ATTEMPTS {
            if !accepted {
                log::warn!("Scramble of {word} degraded after {attempts} attempts");
            }
            return Scramble {
                text: shuffled.into_iter().collect(),
                attempts,
                degraded: !accepted,
            };
        }
    }
}

/// Number of positions where two words differ
pub fn displaced(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn fisher_yates<R: Rng + ?Sized>(letters: &mut [char], rng: &mut R) {
    for i in (1..letters.len()).rev() {
        let j = rng.random_range(0..=i);
        letters.swap(i, j);
    }
}

/// Apply the end-letter fixup and check the quality rules
fn settle(original: &[char], shuffled: &mut [char]) -> bool {
    if *shuffled == *original {
        return false;
    }

    let last = original.len() - 1;
    let ends_kept = |s: &[char]| s[0] == original[0] && s[last] == original[last];
    if original.len() <= END_GUARD_MAX_LEN && ends_kept(&*shuffled) {
        shuffled.swap(0, last);
        // Same letter at both ends: the swap cannot help
        if ends_kept(&*shuffled) {
            return false;
        }
    }

    original.len() <= 2 || displaced(original, shuffled) >= MIN_DISPLACED
}
