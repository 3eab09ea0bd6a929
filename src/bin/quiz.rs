use portfolio_apps::app::{QuizApp, Terminal};
use portfolio_apps::loader::question_bank::load_question_bank;
use portfolio_apps::{AppConfig, logging};
use std::io;
use tracing::error;

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = AppConfig::default();

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());

    match load_question_bank(&config.questions_path()) {
        Ok(bank) => {
            println!("Loaded {} questions", bank.len());
            QuizApp::new(bank, rand::thread_rng()).run(&mut term)?;
        }
        Err(e) => {
            error!("cannot load question bank: {e}");
            term.error_screen(&e.to_string())?;
        }
    }
    Ok(())
}
