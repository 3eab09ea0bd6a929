//! Quiz front end: mode menu, question screens, feedback and results.

use super::terminal::Terminal;
use crate::models::{AnswerOutcome, QuestionBank, QuizMode, QuizPhase, QuizSession};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

/// What the user asked for when leaving a screen.
enum Exit {
    Menu,
    Quit,
}

pub struct QuizApp<G> {
    bank: QuestionBank,
    rng: G,
}

impl<G: Rng> QuizApp<G> {
    pub fn new(bank: QuestionBank, rng: G) -> Self {
        Self { bank, rng }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> io::Result<()> {
        loop {
            let Some(mode) = self.menu(term)? else {
                return Ok(());
            };

            let mut session = match QuizSession::start(mode, &self.bank, &mut self.rng) {
                Ok(session) => session,
                Err(e) => {
                    term.say(&format!("Cannot start {mode} mode: {e}"))?;
                    continue;
                }
            };
            info!(%mode, "quiz started");

            match self.play(term, &mut session)? {
                Exit::Menu => continue,
                Exit::Quit => return Ok(()),
            }
        }
    }

    fn menu<R: BufRead, W: Write>(&self, term: &mut Terminal<R, W>) -> io::Result<Option<QuizMode>> {
        term.blank()?;
        term.say("Welcome to the Simple Math Quiz!")?;
        term.say("Select your mode:")?;
        for (i, mode) in QuizMode::ALL.iter().enumerate() {
            term.say(&format!("  {}) {mode}", i + 1))?;
        }
        term.say("  q) Quit")?;

        loop {
            let Some(choice) = term.prompt("> ")? else {
                return Ok(None);
            };
            if choice.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(idx) if idx < QuizMode::ALL.len() => return Ok(Some(QuizMode::ALL[idx])),
                _ => term.say("Please choose a mode from 1 to 4, or q to quit.")?,
            }
        }
    }

    fn play<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
        session: &mut QuizSession,
    ) -> io::Result<Exit> {
        while !session.is_finished() {
            let Some(question) = session.current_question().cloned() else {
                break;
            };

            term.blank()?;
            term.say(&format!("{}    Score: {}", session.tracker_text(), session.score()))?;
            term.say(&question.question)?;
            for (i, option) in question.options.iter().enumerate() {
                term.say(&format!("  {}) {option}", i + 1))?;
            }
            term.say("  m) Main Menu")?;

            // The option text is resolved from this question's own list at selection time.
            let selected = loop {
                let Some(choice) = term.prompt("Your answer: ")? else {
                    return Ok(Exit::Quit);
                };
                if choice.eq_ignore_ascii_case("m") {
                    return Ok(Exit::Menu);
                }
                match choice.parse().ok().and_then(|n| question.option(n)) {
                    Some(option) => break option.to_string(),
                    None => term.say("Please choose an option from 1 to 4.")?,
                }
            };

            match session.answer(&selected) {
                Ok(AnswerOutcome::Correct) => term.say("Correct!")?,
                Ok(AnswerOutcome::Incorrect) => match session.phase() {
                    QuizPhase::GameOver { correct_answer } => {
                        term.say(&format!("Game Over! The answer was {correct_answer}"))?;
                    }
                    _ => term.say(&format!("Incorrect! The answer was {}", question.answer))?,
                },
                Err(e) => term.say(&e.to_string())?,
            }

            if matches!(session.phase(), QuizPhase::Feedback(_)) {
                let Some(choice) = term.prompt("Press Enter for the next question (m for menu): ")?
                else {
                    return Ok(Exit::Quit);
                };
                if choice.eq_ignore_ascii_case("m") {
                    return Ok(Exit::Menu);
                }
                if let Err(e) = session.advance() {
                    term.say(&e.to_string())?;
                }
            }
        }

        self.results(term, session)
    }

    fn results<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
        session: &QuizSession,
    ) -> io::Result<Exit> {
        let Some(summary) = session.summary() else {
            return Ok(Exit::Menu);
        };
        info!(mode = %session.mode, score = session.score(), "quiz finished");

        term.blank()?;
        term.say(summary.title)?;
        term.say("You scored:")?;
        term.say(&summary.score_text)?;
        term.say(&summary.comment)?;

        loop {
            let Some(choice) = term.prompt("p) Play Again  q) Quit: ")? else {
                return Ok(Exit::Quit);
            };
            match choice.to_ascii_lowercase().as_str() {
                "p" => return Ok(Exit::Menu),
                "q" => return Ok(Exit::Quit),
                _ => continue,
            }
        }
    }
}
