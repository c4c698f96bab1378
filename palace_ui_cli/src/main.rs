use std::io::{self, BufRead, Write};

use cli_player::CliPlayer;
use palace_core::run_game;

mod cli_player;

fn main() {
    let count = prompt_player_count();
    let _ = run_game(count, CliPlayer::new);
}

fn prompt_player_count() -> usize {
    loop {
        print!("How many players? (2-5) ");
        io::stdout().flush().unwrap();
        if let Some(Ok(line)) = io::stdin().lock().lines().next() {
            if let Ok(count) = line.trim().parse::<usize>() {
                if (2..=5).contains(&count) {
                    return count;
                }
            }
        }
        println!("Please enter a number between 2 and 5.");
    }
}
