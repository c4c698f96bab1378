use std::{
    cell::Cell,
    io::{self, BufRead, Write},
    process,
    str::FromStr,
};

use itertools::Itertools;

use palace_core::{
    card::{Card, Rank},
    event::Event,
    pile::PileEntry,
    player::{MoveRequest, Player, PlayerData, PlayerId},
};

static RULES: &str = "
*** Palace ***
This is a terminal shedding card game. The goal is to get rid of all your cards first.
Everyone starts with three secret face-down cards, three face-up table cards chosen from
the opening hand, and a hand of three. A card may be played if its rank is at least the
rank on top of the pile; a 2 or a 3 may be played on anything. Whoever cannot play must
pick up the whole pile. After each play you draw back up to three cards while the deck
lasts. Once your hand is empty you play your table cards, and after those your secret
cards, blind, one at a time. Press c to see what the special ranks do.";

#[derive(Debug, PartialEq)]
enum CliAction {
    Quit,
    Rules,
    CardEffects,
    TakePile,
    Rank(Rank),
}

#[derive(Debug, PartialEq, Eq)]
struct ParseActionError;

impl CliAction {
    fn info(&self) -> String {
        match self {
            CliAction::Quit => "quit".to_string(),
            CliAction::Rules => "display rules".to_string(),
            CliAction::CardEffects => "display card effects".to_string(),
            CliAction::TakePile => "take the pile".to_string(),
            CliAction::Rank(r) => r.rule(),
        }
    }

    fn cmd_str(&self) -> String {
        match self {
            CliAction::Quit => "q".to_string(),
            CliAction::Rules => "r".to_string(),
            CliAction::CardEffects => "c".to_string(),
            CliAction::TakePile => "t".to_string(),
            CliAction::Rank(r) => r.to_string(),
        }
    }
}

impl FromStr for CliAction {
    type Err = ParseActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "q" => Ok(CliAction::Quit),
            "r" => Ok(CliAction::Rules),
            "c" => Ok(CliAction::CardEffects),
            "t" => Ok(CliAction::TakePile),
            token => Rank::from_str(token)
                .map(CliAction::Rank)
                .map_err(|_| ParseActionError),
        }
    }
}

pub struct CliPlayer {
    pub data: PlayerData,
    printed: Cell<usize>,
}

impl CliPlayer {
    fn query_user(&self, cmds: Vec<CliAction>, prompt: &str) -> CliAction {
        let mut op = None;
        print!("\n{}\n", prompt);
        while let None = op {
            for cmd in &cmds {
                println!("- [{}]: {}", cmd.cmd_str(), cmd.info());
            }
            print!(">");
            io::stdout().flush().unwrap();
            if let Some(Ok(line)) = io::stdin().lock().lines().next() {
                if let Ok(action) = CliAction::from_str(&line) {
                    if cmds.contains(&action) {
                        op = Some(action);
                    }
                }
            }
        }
        op.unwrap()
    }

    fn prompt_rank(&self, cards: &[Card], allow_take: bool, prompt: &str) -> CliAction {
        let mut queries = vec![CliAction::Quit, CliAction::Rules, CliAction::CardEffects];
        if allow_take {
            queries.push(CliAction::TakePile);
        }
        for rank in cards.iter().map(|c| c.rank).sorted().dedup() {
            queries.push(CliAction::Rank(rank));
        }
        self.query_user(queries, prompt)
    }

    fn format_cards(&self, cards: &[Card]) -> String {
        if cards.is_empty() {
            "none".to_string()
        } else {
            cards.iter().map(|c| c.to_string()).join(", ")
        }
    }

    fn format_pile(&self, pile: &[PileEntry]) -> String {
        if pile.is_empty() {
            return "empty".to_string();
        }
        pile.iter()
            .map(|e| {
                if e.effective_rank == e.card.rank {
                    e.card.to_string()
                } else {
                    format!("{} (as {})", e.card, e.effective_rank)
                }
            })
            .join(", ")
    }

    fn print_request(&self, request: &MoveRequest) {
        println!("\nPile: {}", self.format_pile(&request.pile));
        if let Some(limit) = request.limit {
            println!("Current limit: {} or lower (a 3 is exempt).", limit);
        }
        if request.from_table {
            println!("Your hand is empty, you play from your table cards.");
            println!("Table cards: {}", self.format_cards(&request.playable));
        } else {
            println!("Your hand: {}", self.format_cards(&request.playable));
            println!("Your table cards: {}", self.format_cards(&request.table_cards));
        }
        if request.secret_count > 0 {
            println!("Secret cards left: {}", request.secret_count);
        }
    }

    fn print_event(&self, event: &Event, players: &[&String]) {
        match &event {
            Event::SecretsDealt(pl, n) => {
                println!("~ {} received {} secret cards", players[*pl], n)
            }
            Event::PickUp(pl, c, remaining) => {
                if let Some(card) = c {
                    println!(
                        "~ {} drew {}, {} cards remaining in deck",
                        players[*pl], card, remaining
                    );
                } else {
                    println!(
                        "~ {} drew ***, {} cards remaining in deck",
                        players[*pl], remaining
                    );
                }
            }
            Event::TableCardChosen(pl, c) => {
                println!("~ {} put {} on the table", players[*pl], c)
            }
            Event::SecretRevealed(pl, c) => {
                if let Some(card) = c {
                    println!("~ {} turned over a secret card: {}", players[*pl], card);
                } else {
                    println!("~ {} turned over a secret card", players[*pl]);
                }
            }
            Event::Played(pl, c) => println!("~ {} played {}", players[*pl], c),
            Event::Rejected(pl, e) => {
                if let Some(error) = e {
                    println!("~ {}: rejected, {}", players[*pl], error);
                } else {
                    println!("~ {} tried an invalid selection", players[*pl]);
                }
            }
            Event::PilePickedUp(pl, n) => println!(
                "~ {} cannot play any card and picks up the pile ({} cards)",
                players[*pl], n
            ),
            Event::PileBurned(_, _) => println!("~ 10 was played. The pile is cleared!"),
            Event::PileReset(_) => println!("~ 2 was played. Next player can play any card!"),
            Event::RankCopied(_, rank) => println!(
                "~ 3 was played. It copies the rank of the previous card ({})!",
                rank
            ),
            Event::LimitSet(_, limit) => println!(
                "~ 7 was played. Next player must play a card of rank {} or lower!",
                limit
            ),
            Event::SkipArmed(_) => println!("~ 8 was played. Next player is skipped!"),
            Event::Skipped(pl) => println!("~ {} is skipped!", players[*pl]),
            Event::DropOut(pl) => println!(
                "~ {} has no more cards! They are out of the game.",
                players[*pl]
            ),
            Event::GameOver(remaining) => match remaining {
                Some(pl) => println!(
                    "The game is over! {} is the last one holding cards.",
                    players[*pl]
                ),
                None => println!("The game is over!"),
            },
        }
    }
}

impl CliPlayer {
    pub fn new(id: PlayerId) -> CliPlayer {
        print!("Player {}, please enter your name: ", id + 1);
        io::stdout().flush().unwrap();

        let name = match io::stdin().lock().lines().next() {
            Some(Ok(line)) if !line.trim().is_empty() => line.trim().to_string(),
            _ => format!("Player {}", id + 1),
        };

        CliPlayer {
            data: PlayerData::new(name),
            printed: Cell::new(0),
        }
    }
}

impl Player for CliPlayer {
    fn data(&self) -> &PlayerData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut PlayerData {
        &mut self.data
    }

    fn notify(&self, game_log: &[Event], players: &[&String]) {
        let seen = self.printed.get().min(game_log.len());
        for event in &game_log[seen..] {
            self.print_event(event, players);
        }
        self.printed.set(game_log.len());
    }

    fn obtain_table_card(&self, hand: &[Card], players: &[&String], game_log: &[Event]) -> Rank {
        self.notify(game_log, players);
        println!("\n{}, your hand: {}", self.name(), self.format_cards(hand));
        loop {
            let action = self.prompt_rank(
                hand,
                false,
                "Which card do you want to put on the table?",
            );
            match action {
                CliAction::Quit => process::exit(0),
                CliAction::Rules => println!("{}", RULES),
                CliAction::CardEffects => println!("{}", Rank::rules()),
                CliAction::Rank(rank) => return rank,
                CliAction::TakePile => {}
            }
        }
    }

    fn obtain_move(
        &self,
        request: &MoveRequest,
        players: &[&String],
        game_log: &[Event],
    ) -> Option<Rank> {
        self.notify(game_log, players);
        println!("\nIt is your turn, {}.", self.name());
        self.print_request(request);

        if request.legal.is_empty() {
            loop {
                let action = self.prompt_rank(&[], true, "You cannot play any card.");
                match action {
                    CliAction::Quit => process::exit(0),
                    CliAction::Rules => println!("{}", RULES),
                    CliAction::CardEffects => println!("{}", Rank::rules()),
                    CliAction::TakePile => return None,
                    CliAction::Rank(_) => {}
                }
            }
        }

        loop {
            let action = self.prompt_rank(
                &request.legal,
                false,
                "Which card do you want to play?",
            );
            match action {
                CliAction::Quit => process::exit(0),
                CliAction::Rules => println!("{}", RULES),
                CliAction::CardEffects => println!("{}", Rank::rules()),
                CliAction::Rank(rank) => return Some(rank),
                CliAction::TakePile => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use palace_core::card::Rank;

    use crate::cli_player::CliAction;

    #[test]
    fn actions_should_parse_from_tokens() {
        assert_eq!(CliAction::from_str("q"), Ok(CliAction::Quit));
        assert_eq!(CliAction::from_str("t"), Ok(CliAction::TakePile));
        assert_eq!(CliAction::from_str("10"), Ok(CliAction::Rank(Rank::Ten)));
        assert_eq!(CliAction::from_str(" k "), Ok(CliAction::Rank(Rank::King)));
        assert!(CliAction::from_str("x").is_err());
    }
}
