//! Left-to-right letter reveals

use serde::{Deserialize, Serialize};

use super::state::Round;
use crate::consts::{ANSWER_BLANK, HINT_MASK};
use crate::error::{GameError, GameResult};

/// One revealed letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintReveal {
    pub index: usize,
    pub letter: char,
    /// Space-separated letters with unrevealed ones masked, e.g. `C A _`
    pub masked: String,
    /// Every letter is now revealed
    pub exhausted: bool,
}

impl HintReveal {
    /// Write the revealed letter into an in-progress answer at its index,
    /// padding a shorter answer with blanks
    pub fn apply_to(&self, answer: &mut String) {
        let mut letters: Vec<char> = answer.chars().collect();
        if letters.len() <= self.index {
            letters.resize(self.index + 1, ANSWER_BLANK);
        }
        letters[self.index] = self.letter;
        *answer = letters.into_iter().collect();
    }
}

/// Reveal the next letter of the round's word
pub fn reveal(round: &mut Round) -> GameResult<HintReveal> {
    let word = round.word();
    let Some(letter) = word.chars().nth(round.hint_revealed) else {
        return Err(GameError::HintExhausted);
    };
    let index = round.hint_revealed;
    round.hint_revealed += 1;

    let masked = masked_display(round.word(), round.hint_revealed);
    Ok(HintReveal {
        index,
        letter,
        masked,
        exhausted: round.hints_exhausted(),
    })
}

/// Letters separated by single spaces, first `revealed` shown
pub fn masked_display(word: &str, revealed: usize) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| if i < revealed { c } else { HINT_MASK })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> Round {
        Round::new(word.to_string(), word.chars().rev().collect())
    }

    #[test]
    fn test_masked_display() {
        assert_eq!(masked_display("CAT", 0), "_ _ _");
        assert_eq!(masked_display("CAT", 2), "C A _");
        assert_eq!(masked_display("CAT", 3), "C A T");
        assert_eq!(masked_display("CAT", 2).len(), 2 * 3 - 1);
    }

    #[test]
    fn test_reveal_in_order_until_exhausted() {
        let mut round = round("DOG");

        let first = reveal(&mut round).unwrap();
        assert_eq!((first.index, first.letter), (0, 'D'));
        assert_eq!(first.masked, "D _ _");
        assert!(!first.exhausted);

        reveal(&mut round).unwrap();
        let last = reveal(&mut round).unwrap();
        assert_eq!((last.index, last.letter), (2, 'G'));
        assert_eq!(last.masked, "D O G");
        assert!(last.exhausted);
        assert_eq!(round.hint_revealed(), 3);

        assert!(matches!(reveal(&mut round), Err(GameError::HintExhausted)));
        assert_eq!(round.hint_revealed(), 3);
    }

    #[test]
    fn test_apply_pads_short_answer() {
        let mut round = round("MOON");
        reveal(&mut round).unwrap();
        let second = reveal(&mut round).unwrap();

        let mut answer = String::new();
        second.apply_to(&mut answer);
        assert_eq!(answer, " O");
    }

    #[test]
    fn test_apply_corrects_wrong_letter() {
        let mut round = round("STAR");
        let hint = reveal(&mut round).unwrap();

        let mut answer = String::from("XTAR");
        hint.apply_to(&mut answer);
        assert_eq!(answer, "STAR");
    }
}
