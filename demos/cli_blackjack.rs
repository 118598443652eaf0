//! Terminal blackjack table.
//!
//! The balance is saved to `BJRS_SAVE_FILE` (default `save_data.txt`).

use core::time::Duration;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrs_table::{
    Card, CardFace, FileStore, GamePhase, GameSession, Presenter, RUIN_MESSAGE, Seat,
    SessionOptions, Suit, dispatch,
};

struct Terminal {
    pace: Duration,
}

impl Presenter for Terminal {
    fn on_hands_changed(&mut self, player: &[Card], dealer: &[Card], dealer_revealed: bool) {
        if player.is_empty() && dealer.is_empty() {
            return;
        }
        println!("Dealer: {}", format_dealer(dealer, dealer_revealed));
        println!("Player: {}", format_cards(player));
    }

    fn on_values_changed(&mut self, player: &str, dealer: &str) {
        println!("  (Player: {player}  Dealer: {dealer})");
    }

    fn on_balance_changed(&mut self, balance: usize) {
        println!("Balance: ${balance}");
    }

    fn on_bet_changed(&mut self, bet: usize) {
        println!("Bet: ${bet}");
    }

    fn on_round_resolved(&mut self, message: &str) {
        println!("\n*** {message} ***\n");
    }

    fn on_ruin(&mut self) {
        println!("Game Over: {RUIN_MESSAGE}");
    }

    fn on_card_dealt(&mut self, seat: Seat, face: CardFace) {
        let shown = match face {
            CardFace::Up(card) => format_card(&card),
            CardFace::Down => "??".to_string(),
        };
        println!("-> {seat:?} receives {shown}");
        std::thread::sleep(self.pace);
    }

    fn on_persistence_failed(&mut self, reason: &str) {
        println!("(warning: balance not saved: {reason})");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::var("BJRS_SAVE_FILE").unwrap_or_else(|_| "save_data.txt".to_string());
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let options = SessionOptions::default();
    let mut terminal = Terminal {
        pace: Duration::from_millis(options.dealer_draw_delay_ms),
    };
    let mut session = GameSession::new(options, FileStore::new(path), seed);

    println!("Blackjack (type 'q' to quit)");
    dispatch(&session.snapshot(), &mut terminal);

    loop {
        if session.is_ruined() {
            break;
        }

        let prompt = match session.phase() {
            GamePhase::PlayerTurn => "[h]it [s]tand: ".to_string(),
            _ => {
                let chips: Vec<String> = session
                    .affordable_chips()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                format!("Chips [{}], [d]eal: ", chips.join("/"))
            }
        };

        let input = prompt_line(&prompt);
        let events = match input.as_str() {
            "q" | "quit" => break,
            "h" | "hit" => session.hit().map_err(|err| err.to_string()),
            "s" | "stand" => session.stand().map_err(|err| err.to_string()),
            "d" | "deal" => session.start_round().map_err(|err| err.to_string()),
            other => match other.parse::<usize>() {
                Ok(amount) => session.place_chip(amount).map_err(|err| err.to_string()),
                Err(_) => {
                    println!("Unknown action.");
                    continue;
                }
            },
        };

        match events {
            Ok(events) => dispatch(&events, &mut terminal),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color)
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_dealer(cards: &[Card], revealed: bool) -> String {
    if revealed {
        return format_cards(cards);
    }
    let mut parts: Vec<String> = cards.iter().take(1).map(format_card).collect();
    if cards.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}
