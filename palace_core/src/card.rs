use std::fmt;

use itertools::Itertools;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

pub const DECK_SIZE: usize = 52;

/// Suits are cosmetic. Legality only ever looks at ranks.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Display, EnumIter)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Copy,
    Clone,
    Display,
    EnumIter,
    EnumString,
    EnumMessage,
)]
#[strum(ascii_case_insensitive)]
pub enum Rank {
    #[strum(
        serialize = "2",
        message = "May be played on anything. It resets the pile, the next player can play any card."
    )]
    Two = 2,
    #[strum(
        serialize = "3",
        message = "May be played on anything and ignores an active limit. It copies the rank of the card beneath it."
    )]
    Three = 3,
    #[strum(serialize = "4")]
    Four = 4,
    #[strum(serialize = "5")]
    Five = 5,
    #[strum(serialize = "6")]
    Six = 6,
    #[strum(
        serialize = "7",
        message = "The next player must play a card of rank 7 or lower. Only a 3 is exempt."
    )]
    Seven = 7,
    #[strum(serialize = "8", message = "The next player is skipped.")]
    Eight = 8,
    #[strum(serialize = "9")]
    Nine = 9,
    #[strum(
        serialize = "10",
        message = "Burns the pile. Whoever played it immediately plays again."
    )]
    Ten = 10,
    #[strum(serialize = "J")]
    Jack = 11,
    #[strum(serialize = "Q")]
    Queen = 12,
    #[strum(serialize = "K")]
    King = 13,
    #[strum(serialize = "A")]
    Ace = 14,
}

impl Rank {
    pub fn rules() -> String {
        Rank::iter().map(|r| r.rule()).join("\n")
    }

    pub fn rule(&self) -> String {
        format!(
            "{} [value = {}]: {}",
            self,
            self.value(),
            self.get_message().unwrap_or("No special effect.")
        )
    }

    pub fn value(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
