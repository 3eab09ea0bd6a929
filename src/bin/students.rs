use portfolio_apps::app::{StudentApp, Terminal};
use portfolio_apps::storage::StudentStore;
use portfolio_apps::{AppConfig, logging};
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = AppConfig::default();

    let (store, load_error) = StudentStore::load_or_empty(&config.students_path());
    println!(
        "Loaded {} student records from {}",
        store.roster().len(),
        store.path().display()
    );

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());
    StudentApp::new(store).run(&mut term, load_error.as_ref())?;
    Ok(())
}
