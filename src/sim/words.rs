//! Word bank with per-tier lists and a shared anti-repetition window

use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::RECENT_WINDOW;
use crate::error::{GameError, GameResult};
use crate::settings::Difficulty;

/// Built-in fallback lists, used for any tier with no configured words
pub const DEFAULT_EASY: &[&str] = &[
    "CAT", "DOG", "SUN", "MOON", "STAR", "TREE", "BOOK", "BALL", "FISH", "BIRD",
];
pub const DEFAULT_MEDIUM: &[&str] = &[
    "COMPUTER", "ELEPHANT", "MOUNTAIN", "OCEAN", "LIBRARY", "BUTTERFLY", "ADVENTURE", "JOURNEY",
    "WONDER", "MAGIC",
];
pub const DEFAULT_HARD: &[&str] = &[
    "EXTRAORDINARY",
    "PHENOMENON",
    "SOPHISTICATED",
    "ARCHITECTURE",
    "PHILOSOPHY",
    "REVOLUTIONARY",
    "EXTRAVAGANT",
    "MAGNIFICENT",
    "TREMENDOUS",
    "FANTASTIC",
];

pub fn default_words(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => DEFAULT_EASY,
        Difficulty::Medium => DEFAULT_MEDIUM,
        Difficulty::Hard => DEFAULT_HARD,
    }
}

/// Word lists as supplied by an external source (e.g. a `words.json` file)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WordSupply {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl WordSupply {
    pub fn from_json_str(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a supply file from disk
    pub fn load(path: &Path) -> GameResult<Self> {
        let json = fs::read_to_string(path)?;
        let supply = Self::from_json_str(&json)?;
        log::info!(
            "Read word supply from {} ({} words)",
            path.display(),
            supply.len()
        );
        Ok(supply)
    }

    pub fn tier(&self, difficulty: Difficulty) -> &[String] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Word bank shared between the engine and a background loader
pub type SharedWordBank = Arc<Mutex<WordBank>>;

/// Lock a shared bank; a panicked holder cannot corrupt the lists, so
/// poisoning is ignored
pub fn lock_bank(bank: &SharedWordBank) -> MutexGuard<'_, WordBank> {
    bank.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Categorized word lists plus the recently issued words across all tiers
#[derive(Debug, Clone)]
pub struct WordBank {
    lists: HashMap<Difficulty, Vec<String>>,
    /// Oldest first, uppercase
    recent: VecDeque<String>,
    /// Use the built-in lists for tiers with no configured words
    fallback: bool,
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            lists: HashMap::new(),
            recent: VecDeque::with_capacity(RECENT_WINDOW + 1),
            fallback: true,
        }
    }
}

impl WordBank {
    /// Empty bank; every tier falls back to its built-in list
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty bank that only ever draws supplied words.
    ///
    /// Every other constructor falls back to the built-in lists, so normal
    /// play never runs dry. Only a strict, supply-only bank built here can
    /// fail a draw with `WordSupplyExhausted`.
    pub fn without_fallback() -> Self {
        Self {
            fallback: false,
            ..Self::default()
        }
    }

    pub fn from_supply(supply: &WordSupply) -> Self {
        let mut bank = Self::new();
        bank.merge(supply);
        bank
    }

    pub fn into_shared(self) -> SharedWordBank {
        Arc::new(Mutex::new(self))
    }

    /// Configured words for a tier (empty if none were supplied)
    pub fn words(&self, difficulty: Difficulty) -> &[String] {
        self.lists.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Recently issued words, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    /// Merge supplied words, dropping non-alphabetic entries and duplicates.
    /// Returns the number of words added.
    pub fn merge(&mut self, supply: &WordSupply) -> usize {
        let mut added = 0;
        for difficulty in Difficulty::ALL {
            let list = self.lists.entry(difficulty).or_default();
            for raw in supply.tier(difficulty) {
                let word = raw.trim().to_ascii_uppercase();
                if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                    log::warn!("Skipping malformed {} word {:?}", difficulty.as_str(), raw);
                    continue;
                }
                if !list.contains(&word) {
                    list.push(word);
                    added += 1;
                }
            }
        }
        log::info!("Merged {added} new words into the word bank");
        added
    }

    /// Draw the next word for a tier.
    ///
    /// Words in the recent window are skipped. If the whole tier is recent,
    /// the window is reset to just `current` and the filter is retried once;
    /// after that any word in the tier may repeat.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        current: Option<&str>,
        rng: &mut R,
    ) -> GameResult<String> {
        let pool: Vec<&str> = match self.lists.get(&difficulty) {
            Some(list) if !list.is_empty() => list.iter().map(String::as_str).collect(),
            _ if self.fallback => default_words(difficulty).to_vec(),
            _ => Vec::new(),
        };
        if pool.is_empty() {
            return Err(GameError::WordSupplyExhausted(difficulty));
        }

        let recent = &mut self.recent;
        let word = match pick_fresh(&pool, recent, rng) {
            Some(word) => word,
            None => {
                log::debug!(
                    "All {} words recently used, recycling the window",
                    difficulty.as_str()
                );
                recent.clear();
                if let Some(current) = current {
                    recent.push_back(current.to_ascii_uppercase());
                }
                pick_fresh(&pool, recent, rng)
                    .unwrap_or_else(|| pool[rng.random_range(0..pool.len())])
            }
        }
        .to_ascii_uppercase();

        recent.push_back(word.clone());
        while recent.len() > RECENT_WINDOW {
            recent.pop_front();
        }
        Ok(word)
    }
}

fn pick_fresh<'a, R: Rng + ?Sized>(
    pool: &[&'a str],
    recent: &VecDeque<String>,
    rng: &mut R,
) -> Option<&'a str> {
    let fresh: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|w| !recent.iter().any(|r| r.eq_ignore_ascii_case(w)))
        .collect();
    if fresh.is_empty() {
        None
    } else {
        Some(fresh[rng.random_range(0..fresh.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn supply(easy: &[&str]) -> WordSupply {
        WordSupply {
            easy: easy.iter().map(|w| w.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_draw_falls_back_to_defaults() {
        let mut bank = WordBank::new();
        let mut rng = Pcg32::seed_from_u64(1);
        for difficulty in Difficulty::ALL {
            let word = bank.draw(difficulty, None, &mut rng).unwrap();
            assert!(default_words(difficulty).contains(&word.as_str()));
        }
    }

    #[test]
    fn test_supplied_bank_still_falls_back() {
        let mut bank = WordBank::from_supply(&supply(&["OWL"]));
        let mut rng = Pcg32::seed_from_u64(2);
        let word = bank.draw(Difficulty::Hard, None, &mut rng).unwrap();
        assert!(DEFAULT_HARD.contains(&word.as_str()));
    }

    #[test]
    fn test_draw_without_any_words_fails() {
        let mut bank = WordBank::without_fallback();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(matches!(
            bank.draw(Difficulty::Medium, None, &mut rng),
            Err(GameError::WordSupplyExhausted(Difficulty::Medium))
        ));
        assert_eq!(bank.recent().count(), 0);
    }

    #[test]
    fn test_merge_normalizes_and_dedups() {
        let mut bank = WordBank::new();
        let added = bank.merge(&supply(&["apple", "APPLE", " Pear ", "b4d", "", "plum"]));
        assert_eq!(added, 3);
        assert_eq!(bank.words(Difficulty::Easy), ["APPLE", "PEAR", "PLUM"]);

        // Re-supplying the same words adds nothing
        assert_eq!(bank.merge(&supply(&["plum", "Apple"])), 0);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut bank = WordBank::new();
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..50 {
            bank.draw(Difficulty::Hard, None, &mut rng).unwrap();
        }
        assert!(bank.recent().count() <= RECENT_WINDOW);
    }

    #[test]
    fn test_exhausted_tier_recycles_keeping_current() {
        let mut bank = WordBank::from_supply(&supply(&["ONE", "TWO"]));
        let mut rng = Pcg32::seed_from_u64(3);

        let first = bank.draw(Difficulty::Easy, None, &mut rng).unwrap();
        let second = bank.draw(Difficulty::Easy, Some(&first), &mut rng).unwrap();
        assert_ne!(first, second);

        // Both words are recent; the window resets to the word in play,
        // so the other one comes back
        let third = bank.draw(Difficulty::Easy, Some(&second), &mut rng).unwrap();
        assert_eq!(third, first);
        assert_eq!(bank.recent().collect::<Vec<_>>(), [second.as_str(), third.as_str()]);
    }

    #[test]
    fn test_single_word_tier_repeats_as_last_resort() {
        let mut bank = WordBank::from_supply(&supply(&["SOLO"]));
        let mut rng = Pcg32::seed_from_u64(4);
        let first = bank.draw(Difficulty::Easy, None, &mut rng).unwrap();
        let again = bank.draw(Difficulty::Easy, Some(&first), &mut rng).unwrap();
        assert_eq!(first, "SOLO");
        assert_eq!(again, "SOLO");
    }

    #[test]
    fn test_window_spans_tiers() {
        let mut bank = WordBank::from_supply(&WordSupply {
            easy: vec!["SHARED".into(), "EASY".into()],
            medium: vec!["SHARED".into()],
            ..Default::default()
        });
        let mut rng = Pcg32::seed_from_u64(5);

        // Drain easy until SHARED is recent
        let mut drawn = Vec::new();
        for _ in 0..2 {
            drawn.push(bank.draw(Difficulty::Easy, None, &mut rng).unwrap());
        }
        assert!(drawn.contains(&"SHARED".to_string()));

        // Medium only has SHARED, which is recent: recycle, then repeat it
        let medium = bank.draw(Difficulty::Medium, None, &mut rng).unwrap();
        assert_eq!(medium, "SHARED");
        assert_eq!(bank.recent().collect::<Vec<_>>(), ["SHARED"]);
    }

    #[test]
    fn test_supply_from_json() {
        let supply =
            WordSupply::from_json_str(r#"{ "easy": ["cat"], "hard": ["zephyr"] }"#).unwrap();
        assert_eq!(supply.tier(Difficulty::Easy), ["cat"]);
        assert!(supply.tier(Difficulty::Medium).is_empty());
        assert_eq!(supply.len(), 2);

        assert!(matches!(
            WordSupply::from_json_str("[1, 2]"),
            Err(GameError::Json(_))
        ));
    }
}
