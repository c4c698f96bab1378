use crate::{
    deck::Deck,
    event::{Event, EventEntry, EventVisibility},
    game_state::{GameState, TurnState, TABLE_CARDS},
    player::{Player, PlayerId},
    utils::SliceExtensions,
};

use rand::seq::SliceRandom;

pub struct GameLobby {
    players: Vec<Box<dyn Player>>,
}

impl GameLobby {
    pub fn new() -> Self {
        GameLobby { players: vec![] }
    }

    pub fn add_player<C, T>(&mut self, player_constructor: C)
    where
        C: FnOnce() -> T,
        T: Player + 'static,
    {
        let player = player_constructor();
        self.players.push(Box::new(player));
    }

    pub fn player_names(&self) -> Vec<&String> {
        self.players.iter().map(|p| p.name()).collect::<Vec<_>>()
    }

    pub fn filter_event(log: &[EventEntry], visible_to: Option<PlayerId>) -> Vec<Event> {
        log.iter()
            .map(|e| match e.visibility {
                EventVisibility::Public => e.event.clone(),
                EventVisibility::Private(player) => {
                    if visible_to.is_none() || player == visible_to.unwrap() {
                        e.event.clone()
                    } else {
                        match e.event {
                            Event::PickUp(p, _, s) => Event::PickUp(p, None, s),
                            Event::SecretRevealed(p, _) => Event::SecretRevealed(p, None),
                            Event::Rejected(p, _) => Event::Rejected(p, None),
                            _ => e.event.clone(),
                        }
                    }
                }
            })
            .collect()
    }

    /// Plays one full game with a shuffled deck and seating order and
    /// returns the last remaining player, if any.
    pub fn play_round(&mut self) -> Option<PlayerId> {
        self.players.shuffle(&mut rand::thread_rng());
        self.play_round_with_deck(Deck::shuffled(&mut rand::thread_rng()))
    }

    /// Plays one full game from the given deck, leaving the seating order
    /// untouched. Stacked decks make the whole round deterministic.
    pub fn play_round_with_deck(&mut self, deck: Deck) -> Option<PlayerId> {
        let mut game_log: Vec<EventEntry> = vec![];

        let mut state = GameState::new(self.players.len(), deck);
        state.deal(&mut game_log);
        self.notify_players(&game_log);

        for id in 0..self.players.len() {
            while state.players[id].table_cards().len() < TABLE_CARDS
                && !state.players[id].hand().is_empty()
            {
                let rank = self.players[id].obtain_table_card(
                    state.players[id].hand(),
                    &self.player_names(),
                    &Self::filter_event(&game_log, Some(id)),
                );
                let _ = state.select_table_card(id, rank, &mut game_log);
                self.notify_players(&game_log);
            }
        }

        if state.game_over() {
            state.wrap_up(&mut game_log);
        }

        loop {
            match state.turn_state {
                TurnState::GameOver => break,
                TurnState::AwaitingMove => {
                    let request = state.begin_attempt(&mut game_log);
                    loop {
                        let choice = self.players[state.turn].obtain_move(
                            &request,
                            &self.player_names(),
                            &Self::filter_event(&game_log, Some(state.turn)),
                        );
                        if state.handle_move(choice, &mut game_log).is_ok() {
                            break;
                        }
                        self.notify_players(&game_log);
                    }
                    self.notify_players(&game_log);
                }
                _ => {
                    state.advance_turn(&mut game_log);
                    self.notify_players(&game_log);
                }
            }
        }
        self.notify_players(&game_log);

        state.remaining_players().single_element().copied()
    }

    fn notify_players(&self, game_log: &[EventEntry]) {
        let names = self.player_names();
        for (id, player) in self.players.iter().enumerate() {
            player.notify(&Self::filter_event(game_log, Some(id)), &names);
        }
    }
}

impl Default for GameLobby {
    fn default() -> Self {
        GameLobby::new()
    }
}
