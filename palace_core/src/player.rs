use crate::{card::Card, card::Rank, event::Event, pile::PileEntry};

pub type PlayerId = usize;

pub struct PlayerData {
    name: String,
}

impl PlayerData {
    pub fn new(name: String) -> Self {
        PlayerData { name }
    }
}

/// Everything a collaborator needs to pick one move for one attempt.
#[derive(Debug, Clone)]
pub struct MoveRequest {
    /// The cards the player may currently play from: the hand, or the
    /// face-up table cards once the hand is empty.
    pub playable: Vec<Card>,
    /// Whether `playable` is the face-up table row rather than the hand.
    pub from_table: bool,
    pub table_cards: Vec<Card>,
    pub secret_count: usize,
    /// The subset of `playable` the engine will accept.
    pub legal: Vec<Card>,
    pub pile: Vec<PileEntry>,
    pub limit: Option<Rank>,
}

pub trait Player {
    fn data(&self) -> &PlayerData;

    fn data_mut(&mut self) -> &mut PlayerData;

    fn name(&self) -> &String {
        &self.data().name
    }

    fn notify(&self, game_log: &[Event], players: &[&String]);

    /// One table-card selection during setup. Called until the engine has
    /// accepted three cards.
    fn obtain_table_card(&self, hand: &[Card], players: &[&String], game_log: &[Event]) -> Rank;

    /// One move selection. `None` is the no-legal-move sentinel and is only
    /// honored when `request.legal` is empty.
    fn obtain_move(
        &self,
        request: &MoveRequest,
        players: &[&String],
        game_log: &[Event],
    ) -> Option<Rank>;
}
