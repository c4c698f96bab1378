use crate::{
    card::{Card, Rank},
    deck::Deck,
    pile::Pile,
    player::PlayerId,
};

pub const SECRET_CARDS: usize = 3;
pub const INITIAL_HAND: usize = 6;
pub const TABLE_CARDS: usize = 3;
pub const HAND_SIZE: usize = 3;

pub struct PlayerState {
    hand: Vec<Card>,
    table_cards: Vec<Card>,
    secret_cards: Vec<Card>,
}

impl PlayerState {
    pub fn new() -> Self {
        PlayerState {
            hand: vec![],
            table_cards: vec![],
            secret_cards: vec![],
        }
    }

    pub fn hand(&self) -> &Vec<Card> {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }

    pub fn table_cards(&self) -> &Vec<Card> {
        &self.table_cards
    }

    pub fn table_cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.table_cards
    }

    pub fn secret_cards(&self) -> &Vec<Card> {
        &self.secret_cards
    }

    pub fn secret_cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.secret_cards
    }

    /// The collection the player currently plays from. The hand supplies
    /// cards as long as it holds any; only then do the table cards.
    pub fn playable_cards(&self) -> &[Card] {
        if self.hand.is_empty() {
            &self.table_cards
        } else {
            &self.hand
        }
    }

    pub fn plays_from_table(&self) -> bool {
        self.hand.is_empty() && !self.table_cards.is_empty()
    }

    /// A player is out exactly when all three collections are empty. Outness
    /// is permanent because an out player never receives another turn.
    pub fn is_out(&self) -> bool {
        self.hand.is_empty() && self.table_cards.is_empty() && self.secret_cards.is_empty()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The current player owes a move.
    AwaitingMove,
    /// The move resolved and the same player plays again (a 10 was played).
    ResolvedContinue,
    /// The move resolved and the turn passes on.
    ResolvedPass,
    /// The current player's turn was consumed by an 8.
    Skipped,
    GameOver,
}

pub struct GameState {
    pub players: Vec<PlayerState>,
    pub deck: Deck,
    pub pile: Pile,
    /// Cards burned by a 10 or displaced by a 2. Out of play for good.
    pub discard: Vec<Card>,
    pub rank_ceiling: Option<Rank>,
    pub skip_next: bool,
    pub turn: PlayerId,
    pub turn_state: TurnState,
}

impl GameState {
    pub fn new(player_count: usize, deck: Deck) -> Self {
        GameState {
            players: (0..player_count).map(|_| PlayerState::new()).collect(),
            deck,
            pile: Pile::default(),
            discard: vec![],
            rank_ceiling: None,
            skip_next: false,
            turn: 0,
            turn_state: TurnState::AwaitingMove,
        }
    }

    /// Whether a card of this rank may currently be played.
    pub fn is_legal(&self, rank: Rank) -> bool {
        let beats_pile = match self.pile.top_rank() {
            None => true,
            Some(top) => rank >= top || rank == Rank::Two || rank == Rank::Three,
        };
        let under_limit = match self.rank_ceiling {
            None => true,
            Some(limit) => rank <= limit || rank == Rank::Three,
        };
        beats_pile && under_limit
    }

    pub fn legal_moves(&self, player_id: PlayerId) -> Vec<Card> {
        self.players[player_id]
            .playable_cards()
            .iter()
            .copied()
            .filter(|card| self.is_legal(card.rank))
            .collect()
    }

    /// Players still in the rotation, in seating order.
    pub fn remaining_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_out())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn game_over(&self) -> bool {
        self.remaining_players().len() <= 1
    }

    /// Every card in the game, across deck, players, pile and discard.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = self.deck.cards().to_vec();
        for player in &self.players {
            cards.extend_from_slice(player.hand());
            cards.extend_from_slice(player.table_cards());
            cards.extend_from_slice(player.secret_cards());
        }
        cards.extend(self.pile.entries().iter().map(|e| e.card));
        cards.extend_from_slice(&self.discard);
        cards
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        card::{Card, Rank, Suit},
        deck::Deck,
        game_state::{GameState, PlayerState},
    };

    fn card(rank: Rank) -> Card {
        Card {
            suit: Suit::Hearts,
            rank,
        }
    }

    fn empty_game(player_count: usize) -> GameState {
        GameState::new(player_count, Deck::from_cards(vec![]))
    }

    #[test]
    fn any_card_is_legal_on_an_empty_pile() {
        let state = empty_game(2);
        assert!(state.is_legal(Rank::Two));
        assert!(state.is_legal(Rank::Seven));
        assert!(state.is_legal(Rank::Ace));
    }

    #[test]
    fn lower_ranks_cannot_beat_the_pile_except_two_and_three() {
        let mut state = empty_game(2);
        state.pile.push(card(Rank::Nine));
        assert!(!state.is_legal(Rank::Eight));
        assert!(state.is_legal(Rank::Nine));
        assert!(state.is_legal(Rank::King));
        assert!(state.is_legal(Rank::Two));
        assert!(state.is_legal(Rank::Three));
    }

    #[test]
    fn ceiling_should_bar_higher_ranks_except_three() {
        let mut state = empty_game(2);
        state.rank_ceiling = Some(Rank::Seven);
        assert!(state.is_legal(Rank::Five));
        assert!(state.is_legal(Rank::Seven));
        assert!(state.is_legal(Rank::Three));
        assert!(!state.is_legal(Rank::Nine));
        assert!(!state.is_legal(Rank::Ace));
    }

    #[test]
    fn legal_moves_should_come_from_the_table_once_the_hand_is_empty() {
        let mut state = empty_game(2);
        state.players[0].table_cards_mut().push(card(Rank::Four));
        assert!(state.players[0].plays_from_table());
        assert_eq!(state.legal_moves(0), vec![card(Rank::Four)]);

        state.players[0].hand_mut().push(card(Rank::Jack));
        assert!(!state.players[0].plays_from_table());
        assert_eq!(state.legal_moves(0), vec![card(Rank::Jack)]);
    }

    #[test]
    fn remaining_players_should_skip_players_with_nothing_left() {
        let mut out = PlayerState::new();
        assert!(out.is_out());
        out.secret_cards_mut().push(card(Rank::Six));
        assert!(!out.is_out());

        let mut state = empty_game(3);
        state.players[1].hand_mut().push(card(Rank::Six));
        assert_eq!(state.remaining_players(), vec![1]);
        assert!(state.game_over());
    }
}
