use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::card::{Card, CardError, Rank};

pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("not enough cards to make a hand")]
    TooFewCards,
    #[error("too many cards to make a hand")]
    TooManyCards,
    #[error("cannot make a hand with duplicate cards")]
    DuplicateCards,
    #[error(transparent)]
    Card(#[from] CardError),
}

/// The ten standard poker hand categories, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Category {
    RoyalFlush,
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard,
}

impl Category {
    /// Fixed category score used for direct comparison between hands.
    pub fn score(&self) -> u16 {
        match self {
            Category::RoyalFlush => 900,
            Category::StraightFlush => 800,
            Category::FourOfAKind => 700,
            Category::FullHouse => 600,
            Category::Flush => 500,
            Category::Straight => 400,
            Category::ThreeOfAKind => 300,
            Category::TwoPair => 200,
            Category::OnePair => 100,
            Category::HighCard => 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::RoyalFlush => "Royal Flush",
                Category::StraightFlush => "Straight Flush",
                Category::FourOfAKind => "Four of a Kind",
                Category::FullHouse => "Full House",
                Category::Flush => "Flush",
                Category::Straight => "Straight",
                Category::ThreeOfAKind => "Three of a Kind",
                Category::TwoPair => "Two Pair",
                Category::OnePair => "One Pair",
                Category::HighCard => "High Card",
            }
        )
    }
}

/// An immutable five-card poker hand.
///
/// Cards are stored sorted descending by weight, so the first card is
/// always the high card and kicker walks read left to right.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Build a hand from five pre-tokenized card codes.
    ///
    /// The duplicate check runs on the raw codes, before any of them is
    /// parsed into a `Card`.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, HandError> {
        if codes.len() < HAND_SIZE {
            return Err(HandError::TooFewCards);
        }
        if codes.len() > HAND_SIZE {
            return Err(HandError::TooManyCards);
        }
        for (i, code) in codes.iter().enumerate() {
            if codes[i + 1..].iter().any(|c| c.as_ref() == code.as_ref()) {
                return Err(HandError::DuplicateCards);
            }
        }

        let mut cards = Vec::with_capacity(HAND_SIZE);
        for code in codes {
            cards.push(Card::parse(code.as_ref())?);
        }
        cards.sort_by(|a, b| b.cmp(a));

        let cards: [Card; HAND_SIZE] = cards.try_into().expect("count validated above");
        Ok(Self { cards })
    }

    /// The hand's cards in canonical order, highest weight first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sum of the five card weights.
    pub fn face_value(&self) -> u32 {
        self.cards.iter().map(|c| u32::from(c.weight())).sum()
    }

    /// The category score (900 for a royal flush down to 0 for high card).
    pub fn rank(&self) -> u16 {
        self.category().score()
    }

    /// Classify the hand. Predicates overlap (every straight flush is
    /// also a flush and a straight), so the checks run strongest first
    /// and the first match wins.
    pub fn category(&self) -> Category {
        let same_suit = self.same_suit();
        let sequential = self.sequential();
        let groups = self.groups();

        if same_suit && sequential && self.cards[0].rank == Rank::Ace {
            Category::RoyalFlush
        } else if same_suit && sequential {
            Category::StraightFlush
        } else if groups.iter().any(|g| g.count == 4) {
            Category::FourOfAKind
        } else if groups.len() == 2 && groups.iter().any(|g| g.count == 3) {
            Category::FullHouse
        } else if same_suit {
            Category::Flush
        } else if sequential {
            Category::Straight
        } else if groups.iter().any(|g| g.count == 3) {
            Category::ThreeOfAKind
        } else if groups.iter().filter(|g| g.count >= 2).count() == 2 {
            Category::TwoPair
        } else if groups.len() < HAND_SIZE {
            Category::OnePair
        } else {
            Category::HighCard
        }
    }

    fn same_suit(&self) -> bool {
        self.cards.iter().all(|c| c.suit == self.cards[0].suit)
    }

    /// Five distinct weights forming a contiguous run. The ace only
    /// ranks high, so A-2-3-4-5 is NOT sequential (weights 14,2,3,4,5).
    fn sequential(&self) -> bool {
        let distinct = self.groups().len() == HAND_SIZE;
        distinct && self.cards[0].weight() - self.cards[4].weight() == 4
    }

    /// Partition the cards by weight. Cards are already sorted
    /// descending, so a run-length walk yields groups in descending
    /// weight order.
    fn groups(&self) -> Vec<WeightGroup> {
        let mut groups: Vec<WeightGroup> = Vec::with_capacity(HAND_SIZE);
        for card in &self.cards {
            match groups.last_mut() {
                Some(group) if group.weight == card.weight() => group.count += 1,
                _ => groups.push(WeightGroup {
                    weight: card.weight(),
                    count: 1,
                }),
            }
        }
        groups
    }

    /// Weights of the groups holding two or more cards, ordered by
    /// group size descending, then weight descending. A full house
    /// yields [trips-weight, pair-weight]; two pair yields
    /// [higher-pair, lower-pair].
    fn group_weights(&self) -> Vec<u8> {
        let mut sets: Vec<WeightGroup> = self
            .groups()
            .into_iter()
            .filter(|g| g.count >= 2)
            .collect();
        // Stable sort: equal sizes keep their descending-weight order.
        sets.sort_by(|a, b| b.count.cmp(&a.count));
        sets.into_iter().map(|g| g.weight).collect()
    }

    /// Weights of the singleton cards, descending.
    fn kicker_weights(&self) -> Vec<u8> {
        self.groups()
            .into_iter()
            .filter(|g| g.count == 1)
            .map(|g| g.weight)
            .collect()
    }

    fn break_tie(&self, other: &Self, category: Category) -> Ordering {
        match category {
            // All royal flushes are equivalent regardless of suit.
            Category::RoyalFlush => Ordering::Equal,
            // Set-based hands compare their distinguishing groups
            // first, then fall back to kickers.
            Category::FourOfAKind
            | Category::FullHouse
            | Category::ThreeOfAKind
            | Category::TwoPair
            | Category::OnePair => self.compare_card_sets(other),
            // Everything else is decided by the card sequence alone.
            Category::StraightFlush
            | Category::Flush
            | Category::Straight
            | Category::HighCard => self.compare_high_cards(other),
        }
    }

    fn compare_high_cards(&self, other: &Self) -> Ordering {
        first_difference(
            self.cards.iter().map(|c| c.weight()),
            other.cards.iter().map(|c| c.weight()),
        )
    }

    fn compare_card_sets(&self, other: &Self) -> Ordering {
        match first_difference(
            self.group_weights().into_iter(),
            other.group_weights().into_iter(),
        ) {
            Ordering::Equal => first_difference(
                self.kicker_weights().into_iter(),
                other.kicker_weights().into_iter(),
            ),
            decided => decided,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WeightGroup {
    weight: u8,
    count: u8,
}

/// Walk two weight lists in lockstep; the first differing position
/// decides the ordering.
fn first_difference(
    lhs: impl Iterator<Item = u8>,
    rhs: impl Iterator<Item = u8>,
) -> Ordering {
    lhs.zip(rhs)
        .map(|(l, r)| l.cmp(&r))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Parse a hand from a whitespace-delimited string of five card codes,
/// e.g. `"8C TS KC 9H 4S"`. Same validation as [`Hand::from_codes`].
impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let codes: Vec<&str> = s.split_whitespace().collect();
        Self::from_codes(&codes)
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        let category = self.category();
        match category.score().cmp(&other.category().score()) {
            Ordering::Equal => self.break_tie(other, category),
            decided => decided,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.cards.iter().map(Card::code).collect();
        write!(f, "{}", codes.join(" "))
    }
}
