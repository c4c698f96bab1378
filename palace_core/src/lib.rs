use game_lobby::GameLobby;
use player::{Player, PlayerId};

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game_lobby;
mod game_logic;
pub mod game_state;
pub mod pile;
pub mod player;
pub mod utils;

pub fn run_game<C, T>(player_count: usize, player_constructor: C) -> Option<PlayerId>
where
    C: Fn(PlayerId) -> T,
    T: Player + 'static,
{
    let mut lobby = GameLobby::new();
    for id in 0..player_count {
        lobby.add_player(|| player_constructor(id));
    }
    lobby.play_round()
}
