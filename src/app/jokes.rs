//! Joke viewer front end.

use super::terminal::Terminal;
use crate::models::{JokeDeck, RevealStage};
use rand::Rng;
use std::io::{self, BufRead, Write};

pub struct JokeApp<G> {
    deck: JokeDeck,
    rng: G,
}

impl<G: Rng> JokeApp<G> {
    pub fn new(deck: JokeDeck, rng: G) -> Self {
        Self { deck, rng }
    }

    fn interact_label(&self) -> &'static str {
        match self.deck.stage() {
            RevealStage::Idle => "INTERACT",
            RevealStage::Setup => "PUNCHLINE",
            RevealStage::Punchline => "NEXT JOKE",
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> io::Result<()> {
        if self.deck.is_empty() {
            return term.error_screen("no jokes to tell; check randomJokes.txt");
        }

        loop {
            let label = format!(
                "[Enter] {}  n) NEXT  p) PREV  r) RANDOM  q) EXIT: ",
                self.interact_label()
            );
            let Some(choice) = term.prompt(&label)? else {
                return Ok(());
            };

            let text = match choice.to_ascii_lowercase().as_str() {
                "" | "i" => self.deck.interact(&mut self.rng),
                "n" => self.deck.next_joke(),
                "p" => self.deck.previous_joke(),
                "r" => self.deck.random_joke(&mut self.rng),
                "q" => return Ok(()),
                _ => {
                    term.say("Unknown command.")?;
                    continue;
                }
            };

            if let Some(text) = text {
                term.blank()?;
                term.say(&text)?;
                term.blank()?;
            }
        }
    }
}
