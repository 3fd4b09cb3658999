//! The match runner: reads pairs of five-card hands from a
//! line-oriented text source, compares them, and tallies the outcomes.
//!
//! Each line holds ten whitespace-separated two-character card codes;
//! the first five belong to player one, the next five to player two.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::poker::{Card, Hand, HandError, HAND_SIZE};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read game file")]
    Io(#[from] std::io::Error),
    #[error("line {line_no}: expected {expected} card codes, found {found}")]
    MalformedLine {
        line_no: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line_no}: {source}")]
    Hand { line_no: usize, source: HandError },
    #[error("line {line_no}: the same card appears in both hands")]
    DuplicateCardsInPlay { line_no: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Tie,
}

/// The outcome of one line: who won, plus each side's category score
/// and normalized cards for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    pub winner: Winner,
    pub player_one: HandSummary,
    pub player_two: HandSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub rank: u16,
    pub cards: Vec<String>,
}

impl HandSummary {
    fn of(hand: &Hand) -> Self {
        Self {
            rank: hand.rank(),
            cards: hand.cards().iter().map(Card::code).collect(),
        }
    }
}

/// Win counts over a whole match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_one: usize,
    pub player_two: usize,
    pub ties: usize,
}

impl Tally {
    pub fn of(showdowns: &[Showdown]) -> Self {
        let mut tally = Tally::default();
        for showdown in showdowns {
            match showdown.winner {
                Winner::PlayerOne => tally.player_one += 1,
                Winner::PlayerTwo => tally.player_two += 1,
                Winner::Tie => tally.ties += 1,
            }
        }
        tally
    }
}

#[derive(Debug, Clone)]
struct Play {
    player_one: Hand,
    player_two: Hand,
}

/// A parsed match: one play per non-empty input line. All validation
/// happens up front; `play()` cannot fail.
#[derive(Debug, Clone)]
pub struct Game {
    plays: Vec<Play>,
}

impl Game {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_content(&content)
    }

    pub fn from_content(content: &str) -> Result<Self, GameError> {
        let mut plays = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != 2 * HAND_SIZE {
                return Err(GameError::MalformedLine {
                    line_no,
                    expected: 2 * HAND_SIZE,
                    found: codes.len(),
                });
            }

            let player_one = Hand::from_codes(&codes[..HAND_SIZE])
                .map_err(|source| GameError::Hand { line_no, source })?;
            let player_two = Hand::from_codes(&codes[HAND_SIZE..])
                .map_err(|source| GameError::Hand { line_no, source })?;

            // Each hand is internally distinct; the two sides must not
            // share a card either. Normalized codes catch case tricks
            // like "as" vs "AS".
            let unique: HashSet<String> = player_one
                .cards()
                .iter()
                .chain(player_two.cards())
                .map(Card::code)
                .collect();
            if unique.len() != 2 * HAND_SIZE {
                return Err(GameError::DuplicateCardsInPlay { line_no });
            }

            debug!(line_no, "parsed play");
            plays.push(Play {
                player_one,
                player_two,
            });
        }
        Ok(Self { plays })
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Compare every play and report the outcomes in input order.
    pub fn play(&self) -> Vec<Showdown> {
        self.plays
            .iter()
            .map(|play| {
                let winner = match play.player_one.cmp(&play.player_two) {
                    Ordering::Greater => Winner::PlayerOne,
                    Ordering::Less => Winner::PlayerTwo,
                    Ordering::Equal => Winner::Tie,
                };
                Showdown {
                    winner,
                    player_one: HandSummary::of(&play.player_one),
                    player_two: HandSummary::of(&play.player_two),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_play() {
        let game = Game::from_content("5H 5C 6S 7S KD 2C 3S 8S 8D TD").unwrap();
        assert_eq!(game.len(), 1);

        let showdowns = game.play();
        assert_eq!(showdowns[0].winner, Winner::PlayerTwo);
        assert_eq!(showdowns[0].player_one.rank, 100);
        assert_eq!(showdowns[0].player_two.rank, 100);
        assert_eq!(
            showdowns[0].player_one.cards,
            vec!["KD", "7S", "6S", "5H", "5C"]
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let content = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n\n  \nTS JS QS KS AS TD JD QD KD AD\n";
        let game = Game::from_content(content).unwrap();
        assert_eq!(game.len(), 2);
    }

    #[test]
    fn test_malformed_line() {
        let err = Game::from_content("5H 5C 6S 7S KD 2C 3S").unwrap_err();
        assert!(matches!(
            err,
            GameError::MalformedLine {
                line_no: 1,
                expected: 10,
                found: 7
            }
        ));
    }

    #[test]
    fn test_hand_errors_carry_line_numbers() {
        let content = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n5H 5C 6S 7S KD 2C 3S 8S 8D 1D";
        let err = Game::from_content(content).unwrap_err();
        assert!(matches!(err, GameError::Hand { line_no: 2, .. }));
    }

    #[test]
    fn test_card_shared_across_hands() {
        let err = Game::from_content("5H 5C 6S 7S KD 2C 3S 8S 8D 5h").unwrap_err();
        assert!(matches!(
            err,
            GameError::DuplicateCardsInPlay { line_no: 1 }
        ));
    }

    #[test]
    fn test_tally() {
        let content = "\
5H 5C 6S 7S KD 2C 3S 8S 8D TD
TS JS QS KS AS TD JD QD KD AD
AS AC AH AD 2C KC KD KS QH QS";
        let game = Game::from_content(content).unwrap();
        let tally = Tally::of(&game.play());
        assert_eq!(tally.player_one, 1);
        assert_eq!(tally.player_two, 1);
        assert_eq!(tally.ties, 1);
    }
}
