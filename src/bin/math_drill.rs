use portfolio_apps::app::{DrillApp, Terminal};
use portfolio_apps::{AppConfig, logging};
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = AppConfig::default();

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout());
    DrillApp::new(config.drill, rand::thread_rng()).run(&mut term)?;
    Ok(())
}
