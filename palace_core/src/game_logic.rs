use crate::{
    card::Rank,
    error::SelectionError,
    event::{Event, EventEntry, EventVisibility},
    game_state::{GameState, TurnState, HAND_SIZE, INITIAL_HAND, SECRET_CARDS},
    player::{MoveRequest, PlayerId},
    utils::{SliceExtensions, VecExtensions},
};

impl GameState {
    /// Deals every player their face-down secret cards and opening hand.
    pub fn deal(&mut self, log: &mut Vec<EventEntry>) {
        for id in 0..self.players.len() {
            for _ in 0..SECRET_CARDS {
                if let Some(card) = self.deck.draw() {
                    self.players[id].secret_cards_mut().push(card);
                }
            }
            log.push(EventEntry {
                visibility: EventVisibility::Public,
                event: Event::SecretsDealt(id, self.players[id].secret_cards().len()),
            });
            self.initial_draw(id, log);
        }
    }

    /// Draws the opening hand, deck permitting. A short deck leaves a short
    /// hand, never an error.
    pub fn initial_draw(&mut self, player_id: PlayerId, log: &mut Vec<EventEntry>) {
        for _ in 0..INITIAL_HAND {
            self.pick_up_card(player_id, log);
        }
    }

    fn pick_up_card(&mut self, player_id: PlayerId, log: &mut Vec<EventEntry>) {
        if let Some(card) = self.deck.draw() {
            log.push(EventEntry {
                visibility: EventVisibility::Private(player_id),
                event: Event::PickUp(player_id, Some(card), self.deck.len()),
            });
            self.players[player_id].hand_mut().push(card);
        }
    }

    /// Draws until the hand is back at `HAND_SIZE` or the deck is empty.
    /// A hand fattened by a pile pickup draws nothing.
    pub fn replenish(&mut self, player_id: PlayerId, log: &mut Vec<EventEntry>) {
        while self.players[player_id].hand().len() < HAND_SIZE && !self.deck.is_empty() {
            self.pick_up_card(player_id, log);
        }
    }

    /// Moves the first hand card of the given rank onto the table row.
    pub fn select_table_card(
        &mut self,
        player_id: PlayerId,
        rank: Rank,
        log: &mut Vec<EventEntry>,
    ) -> Result<(), SelectionError> {
        match self.players[player_id]
            .hand_mut()
            .remove_first_where(|card| card.rank == rank)
        {
            Some(card) => {
                self.players[player_id].table_cards_mut().push(card);
                log.push(EventEntry {
                    visibility: EventVisibility::Public,
                    event: Event::TableCardChosen(player_id, card),
                });
                Ok(())
            }
            None => Err(self.reject(player_id, SelectionError::Unheld(rank), log)),
        }
    }

    /// Starts one attempt for the current player: surfaces a secret card if
    /// hand and table row are both spent, then describes the situation.
    pub fn begin_attempt(&mut self, log: &mut Vec<EventEntry>) -> MoveRequest {
        if self.players[self.turn].hand().is_empty()
            && self.players[self.turn].table_cards().is_empty()
        {
            if let Some(card) = self.players[self.turn].secret_cards_mut().pop() {
                self.players[self.turn].hand_mut().push(card);
                log.push(EventEntry {
                    visibility: EventVisibility::Private(self.turn),
                    event: Event::SecretRevealed(self.turn, Some(card)),
                });
            }
        }
        let player = &self.players[self.turn];
        MoveRequest {
            playable: player.playable_cards().to_vec(),
            from_table: player.plays_from_table(),
            table_cards: player.table_cards().clone(),
            secret_count: player.secret_cards().len(),
            legal: self.legal_moves(self.turn),
            pile: self.pile.entries().to_vec(),
            limit: self.rank_ceiling,
        }
    }

    /// Resolves one move of the current player. `None` means "no legal move"
    /// and is only accepted when the legal set really is empty; the player
    /// then absorbs the pile and their turn ends with no card played.
    pub fn handle_move(
        &mut self,
        choice: Option<Rank>,
        log: &mut Vec<EventEntry>,
    ) -> Result<(), SelectionError> {
        if self.turn_state != TurnState::AwaitingMove {
            return Err(SelectionError::InvalidState);
        }
        let legal = self.legal_moves(self.turn);
        let rank = match choice {
            None => {
                if !legal.is_empty() {
                    return Err(self.reject(self.turn, SelectionError::MustPlay, log));
                }
                let cards = self.pile.take_all();
                log.push(EventEntry {
                    visibility: EventVisibility::Public,
                    event: Event::PilePickedUp(self.turn, cards.len()),
                });
                self.players[self.turn].hand_mut().extend(cards);
                self.turn_state = TurnState::ResolvedPass;
                return Ok(());
            }
            Some(rank) => rank,
        };

        if !self.players[self.turn]
            .playable_cards()
            .iter()
            .any(|card| card.rank == rank)
        {
            return Err(self.reject(self.turn, SelectionError::Unheld(rank), log));
        }
        // Re-checked independently of legal_moves: a card above an active
        // limit is never accepted, whatever the collaborator offers.
        if let Some(limit) = self.rank_ceiling {
            if rank > limit && rank != Rank::Three {
                return Err(self.reject(self.turn, SelectionError::AboveLimit { rank, limit }, log));
            }
        }
        if !legal.iter().any(|card| card.rank == rank) {
            return Err(self.reject(self.turn, SelectionError::Illegal(rank), log));
        }

        let source = if self.players[self.turn].hand().is_empty() {
            self.players[self.turn].table_cards_mut()
        } else {
            self.players[self.turn].hand_mut()
        };
        let card = match source.remove_first_where(|card| card.rank == rank) {
            Some(card) => card,
            None => return Err(self.reject(self.turn, SelectionError::Unheld(rank), log)),
        };
        self.pile.push(card);
        log.push(EventEntry {
            visibility: EventVisibility::Public,
            event: Event::Played(self.turn, card),
        });

        match rank {
            Rank::Ten => {
                let burned = self.pile.take_all();
                log.push(EventEntry {
                    visibility: EventVisibility::Public,
                    event: Event::PileBurned(self.turn, burned.len()),
                });
                self.discard.extend(burned);
                self.rank_ceiling = None;
                self.turn_state = TurnState::ResolvedContinue;
            }
            Rank::Eight => {
                self.rank_ceiling = None;
                self.skip_next = true;
                log.push(EventEntry {
                    visibility: EventVisibility::Public,
                    event: Event::SkipArmed(self.turn),
                });
                self.turn_state = TurnState::ResolvedPass;
            }
            Rank::Seven => {
                self.rank_ceiling = Some(Rank::Seven);
                log.push(EventEntry {
                    visibility: EventVisibility::Public,
                    event: Event::LimitSet(self.turn, Rank::Seven),
                });
                self.turn_state = TurnState::ResolvedPass;
            }
            Rank::Two => {
                let displaced = self.pile.reset_to_top();
                self.discard.extend(displaced);
                log.push(EventEntry {
                    visibility: EventVisibility::Public,
                    event: Event::PileReset(self.turn),
                });
                self.rank_ceiling = None;
                self.turn_state = TurnState::ResolvedPass;
            }
            Rank::Three => {
                if let Some(copied) = self.pile.copy_down() {
                    log.push(EventEntry {
                        visibility: EventVisibility::Public,
                        event: Event::RankCopied(self.turn, copied),
                    });
                }
                self.rank_ceiling = None;
                self.turn_state = TurnState::ResolvedPass;
            }
            Rank::Four
            | Rank::Five
            | Rank::Six
            | Rank::Nine
            | Rank::Jack
            | Rank::Queen
            | Rank::King
            | Rank::Ace => {
                self.rank_ceiling = None;
                self.turn_state = TurnState::ResolvedPass;
            }
        }

        self.replenish(self.turn, log);

        if self.players[self.turn].is_out() {
            log.push(EventEntry {
                visibility: EventVisibility::Public,
                event: Event::DropOut(self.turn),
            });
            if self.game_over() {
                self.wrap_up(log);
            } else if self.turn_state == TurnState::ResolvedContinue {
                // An out player cannot continue, even off a 10.
                self.turn_state = TurnState::ResolvedPass;
            }
        }
        Ok(())
    }

    /// Moves the rotation along after a resolved or skipped turn. An armed
    /// skip consumes exactly the next remaining player.
    pub fn advance_turn(&mut self, log: &mut Vec<EventEntry>) {
        match self.turn_state {
            TurnState::ResolvedContinue => {
                self.turn_state = TurnState::AwaitingMove;
            }
            TurnState::ResolvedPass | TurnState::Skipped => {
                if self.game_over() {
                    self.wrap_up(log);
                    return;
                }
                loop {
                    self.turn = (self.turn + 1) % self.players.len();
                    if self.players[self.turn].is_out() {
                        continue;
                    }
                    if self.skip_next {
                        self.skip_next = false;
                        log.push(EventEntry {
                            visibility: EventVisibility::Public,
                            event: Event::Skipped(self.turn),
                        });
                        self.turn_state = TurnState::Skipped;
                    } else {
                        self.turn_state = TurnState::AwaitingMove;
                    }
                    return;
                }
            }
            TurnState::AwaitingMove | TurnState::GameOver => {}
        }
    }

    /// Ends the game, reports the last remaining player and reveals the log.
    pub fn wrap_up(&mut self, log: &mut Vec<EventEntry>) {
        self.turn_state = TurnState::GameOver;
        let remaining = self.remaining_players();
        log.push(EventEntry {
            visibility: EventVisibility::Public,
            event: Event::GameOver(remaining.single_element().copied()),
        });
        for entry in log {
            entry.visibility = EventVisibility::Public;
        }
    }

    fn reject(
        &mut self,
        player_id: PlayerId,
        error: SelectionError,
        log: &mut Vec<EventEntry>,
    ) -> SelectionError {
        log.push(EventEntry {
            visibility: EventVisibility::Private(player_id),
            event: Event::Rejected(player_id, Some(error)),
        });
        error
    }
}
