use thiserror::Error;

use crate::card::Rank;

/// Why a selection was refused. All of these are recovered by re-prompting;
/// none of them ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No card of that rank among the cards the player may play from.
    #[error("no card of rank {0} among your playable cards")]
    Unheld(Rank),
    /// The card is held but cannot beat the top of the pile.
    #[error("a {0} cannot beat the pile")]
    Illegal(Rank),
    /// The card is above the active limit and is not a 3.
    #[error("a {rank} is above the current limit of {limit}")]
    AboveLimit { rank: Rank, limit: Rank },
    /// The no-legal-move sentinel was given although a legal move exists.
    #[error("a legal move exists and must be played")]
    MustPlay,
    /// A move was offered while the engine was not awaiting one.
    #[error("no move is expected in this state")]
    InvalidState,
}
