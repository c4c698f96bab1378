use crate::card::{Card, Rank};

/// One card on the pile. `card` is what physically lies there and what a
/// pickup hands over; `effective_rank` is what legality comparisons read.
/// The two differ only after a 3 copied the rank of the card beneath it.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct PileEntry {
    pub card: Card,
    pub effective_rank: Rank,
}

/// The cards played in the current unbroken run.
#[derive(Debug, Default, Clone)]
pub struct Pile {
    entries: Vec<PileEntry>,
}

impl Pile {
    pub fn push(&mut self, card: Card) {
        self.entries.push(PileEntry {
            card,
            effective_rank: card.rank,
        });
    }

    /// The rank the next play has to beat.
    pub fn top_rank(&self) -> Option<Rank> {
        self.entries.last().map(|e| e.effective_rank)
    }

    pub fn entries(&self) -> &[PileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the pile, returning the physical cards. Used both when a 10
    /// burns the pile and when a player with no legal move picks it up.
    pub fn take_all(&mut self) -> Vec<Card> {
        self.entries.drain(..).map(|e| e.card).collect()
    }

    /// Keeps only the top entry, returning the cards displaced beneath it.
    pub fn reset_to_top(&mut self) -> Vec<Card> {
        let top = self.entries.pop();
        let displaced = self.entries.drain(..).map(|e| e.card).collect();
        if let Some(top) = top {
            self.entries.push(top);
        }
        displaced
    }

    /// Rewrites the top entry's effective rank to that of the entry beneath
    /// it. With fewer than two entries the top keeps its own rank and `None`
    /// is returned.
    pub fn copy_down(&mut self) -> Option<Rank> {
        if self.entries.len() < 2 {
            return None;
        }
        let below = self.entries[self.entries.len() - 2].effective_rank;
        let last = self.entries.len() - 1;
        self.entries[last].effective_rank = below;
        Some(below)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        card::{Card, Rank, Suit},
        pile::Pile,
    };

    fn card(rank: Rank) -> Card {
        Card {
            suit: Suit::Spades,
            rank,
        }
    }

    #[test]
    fn top_rank_should_follow_pushes() {
        let mut pile = Pile::default();
        assert_eq!(pile.top_rank(), None);
        pile.push(card(Rank::Five));
        pile.push(card(Rank::Nine));
        assert_eq!(pile.top_rank(), Some(Rank::Nine));
    }

    #[test]
    fn copy_down_should_preserve_length_and_card() {
        let mut pile = Pile::default();
        pile.push(card(Rank::Queen));
        pile.push(card(Rank::Three));
        assert_eq!(pile.copy_down(), Some(Rank::Queen));
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top_rank(), Some(Rank::Queen));
        assert_eq!(pile.entries()[1].card.rank, Rank::Three);
    }

    #[test]
    fn copy_down_should_chain_over_an_earlier_copy() {
        let mut pile = Pile::default();
        pile.push(card(Rank::King));
        pile.push(card(Rank::Three));
        pile.copy_down();
        pile.push(card(Rank::Three));
        assert_eq!(pile.copy_down(), Some(Rank::King));
        assert_eq!(pile.top_rank(), Some(Rank::King));
    }

    #[test]
    fn copy_down_should_keep_own_rank_on_short_pile() {
        let mut pile = Pile::default();
        pile.push(card(Rank::Three));
        assert_eq!(pile.copy_down(), None);
        assert_eq!(pile.top_rank(), Some(Rank::Three));
    }

    #[test]
    fn reset_to_top_should_displace_everything_beneath() {
        let mut pile = Pile::default();
        pile.push(card(Rank::Five));
        pile.push(card(Rank::Nine));
        pile.push(card(Rank::Two));
        let displaced = pile.reset_to_top();
        assert_eq!(displaced.len(), 2);
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.top_rank(), Some(Rank::Two));
    }

    #[test]
    fn take_all_should_leave_the_pile_empty() {
        let mut pile = Pile::default();
        pile.push(card(Rank::Five));
        pile.push(card(Rank::Ten));
        let taken = pile.take_all();
        assert_eq!(taken.len(), 2);
        assert!(pile.is_empty());
    }

    #[test]
    fn picked_up_copy_is_a_plain_three_again() {
        let mut pile = Pile::default();
        pile.push(card(Rank::Queen));
        pile.push(card(Rank::Three));
        pile.copy_down();
        let taken = pile.take_all();
        assert_eq!(taken[1].rank, Rank::Three);
    }
}
