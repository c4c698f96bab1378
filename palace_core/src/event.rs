use crate::{card::Card, card::Rank, error::SelectionError, player::PlayerId};

/// Everything the engine narrates. Payloads wrapped in `Option` are blanked
/// by `GameLobby::filter_event` for players who may not see them.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    SecretsDealt(PlayerId, usize),
    PickUp(PlayerId, Option<Card>, usize),
    TableCardChosen(PlayerId, Card),
    SecretRevealed(PlayerId, Option<Card>),
    Played(PlayerId, Card),
    Rejected(PlayerId, Option<SelectionError>),
    PilePickedUp(PlayerId, usize),
    PileBurned(PlayerId, usize),
    PileReset(PlayerId),
    RankCopied(PlayerId, Rank),
    LimitSet(PlayerId, Rank),
    SkipArmed(PlayerId),
    Skipped(PlayerId),
    DropOut(PlayerId),
    /// The game ended; the payload is the last player still holding cards.
    GameOver(Option<PlayerId>),
}

#[derive(PartialEq)]
pub enum EventVisibility {
    Public,
    Private(PlayerId),
}

pub struct EventEntry {
    pub visibility: EventVisibility,
    pub event: Event,
}
