//! Math drill front end.

use super::terminal::Terminal;
use crate::config::DrillConfig;
use crate::models::{DrillFeedback, DrillLevel, DrillSession};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::info;

const LEVELS: [DrillLevel; 4] = [
    DrillLevel::Easy,
    DrillLevel::Medium,
    DrillLevel::Hard,
    DrillLevel::Marathon,
];

pub struct DrillApp<G> {
    config: DrillConfig,
    rng: G,
    clock: fn() -> DateTime<Utc>,
}

impl<G: Rng> DrillApp<G> {
    pub fn new(config: DrillConfig, rng: G) -> Self {
        Self {
            config,
            rng,
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> io::Result<()> {
        loop {
            term.blank()?;
            term.say("MATH QUIZ")?;
            for (i, level) in LEVELS.iter().enumerate() {
                term.say(&format!("  {}) {}", i + 1, level.label()))?;
            }
            term.say("  q) Quit")?;

            let Some(choice) = term.prompt("> ")? else {
                return Ok(());
            };
            if choice.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            let level = match choice.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
                Some(idx) if idx < LEVELS.len() => LEVELS[idx],
                _ => {
                    term.say("Please choose a level from 1 to 4, or q to quit.")?;
                    continue;
                }
            };

            if !self.play(term, level)? {
                return Ok(());
            }
        }
    }

    /// Runs one drill. Returns false when the input closed mid-game.
    fn play<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
        level: DrillLevel,
    ) -> io::Result<bool> {
        let now = self.clock;
        let mut session = DrillSession::start(level, &self.config, now());
        info!(level = level.label(), "drill started");

        while let Some(problem) = session.next_question(&mut self.rng, now()).copied() {
            term.blank()?;
            term.say(&format!("/// {} MODE ///", level.label()))?;
            if let Some(left) = session.seconds_remaining(now()) {
                term.say(&format!("TIME: {left}"))?;
            }
            term.say(&format!("{problem} = ?"))?;
            term.say(&session.progress_text())?;

            loop {
                let Some(input) = term.prompt("Answer (m for menu): ")? else {
                    return Ok(false);
                };
                if input.eq_ignore_ascii_case("m") {
                    return Ok(true);
                }
                match session.submit(&input, now()) {
                    Ok(DrillFeedback::Correct { points }) => {
                        term.say(&format!("CORRECT! [ +{points} POINTS ]"))?;
                        break;
                    }
                    Ok(DrillFeedback::TryAgain) => term.say("WRONG. Try Again for 5 points.")?,
                    Ok(DrillFeedback::Revealed { answer }) => {
                        term.say(&format!("WRONG AGAIN. The answer was {answer}."))?;
                        break;
                    }
                    Ok(DrillFeedback::TimeUp) => {
                        term.say("TIME UP!")?;
                        break;
                    }
                    Err(e) => term.say(&e.to_string())?,
                }
            }
        }

        info!(score = session.score(), "drill finished");
        term.blank()?;
        term.say("SESSION COMPLETE")?;
        term.say(&format!("SCORE: {}", session.score()))?;
        term.say(&format!("RANK: {}", session.rank()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArithmeticProblem;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const SEED: u64 = 2024;

    // Replays the generator with the same seed to know the answers in advance.
    fn answers(level: DrillLevel, count: usize) -> Vec<i64> {
        let mut rng = StdRng::seed_from_u64(SEED);
        (0..count)
            .map(|_| ArithmeticProblem::generate(level, &mut rng).evaluate())
            .collect()
    }

    fn run_script(script: String) -> String {
        let mut app = DrillApp::new(DrillConfig::default(), StdRng::seed_from_u64(SEED));
        let mut term = Terminal::new(Cursor::new(script), Vec::new());
        app.run(&mut term).unwrap();
        String::from_utf8(term.into_output()).unwrap()
    }

    #[test]
    fn test_perfect_easy_round() {
        let mut script = String::from("1\n");
        for answer in answers(DrillLevel::Easy, 10) {
            script.push_str(&format!("{answer}\n"));
        }
        script.push_str("q\n");

        let out = run_script(script);
        assert_eq!(out.matches("CORRECT! [ +10 POINTS ]").count(), 10);
        assert!(out.contains("SCORE: 100"));
        assert!(out.contains("RANK: A+"));
        assert!(out.contains("10/10"));
    }

    #[test]
    fn test_retry_and_reveal() {
        let expected = answers(DrillLevel::Medium, 2);
        let script = format!(
            "2\nabc\n{}\n{}\n{}\n{}\nm\nq\n",
            expected[0] + 1,
            expected[0],
            expected[1] + 1,
            expected[1] + 1,
        );

        let out = run_script(script);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("WRONG. Try Again for 5 points."));
        assert!(out.contains("CORRECT! [ +5 POINTS ]"));
        assert!(out.contains(&format!("WRONG AGAIN. The answer was {}.", expected[1])));
    }

    #[test]
    fn test_marathon_shows_timer() {
        fn fixed() -> DateTime<Utc> {
            DateTime::from_timestamp(1_700_000_000, 0).unwrap()
        }
        let mut app = DrillApp::new(DrillConfig::default(), StdRng::seed_from_u64(SEED))
            .with_clock(fixed);
        let mut term = Terminal::new(Cursor::new("4\nm\nq\n"), Vec::new());
        app.run(&mut term).unwrap();

        let out = String::from_utf8(term.into_output()).unwrap();
        assert!(out.contains("/// MARATHON MODE ///"));
        assert!(out.contains("TIME: 30"));
        assert!(out.contains("1/15"));
    }
}
