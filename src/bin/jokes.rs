use portfolio_apps::app::{JokeApp, Terminal};
use portfolio_apps::loader::jokes::load_jokes;
use portfolio_apps::{AppConfig, JokeDeck, logging};
use std::io;
use tracing::error;

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = AppConfig::default();

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());

    match load_jokes(&config.jokes_path()) {
        Ok(jokes) => {
            JokeApp::new(JokeDeck::new(jokes), rand::thread_rng()).run(&mut term)?;
        }
        Err(e) => {
            error!("cannot load jokes: {e}");
            term.error_screen(&e.to_string())?;
        }
    }
    Ok(())
}
