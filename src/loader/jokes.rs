//! Plain-text joke file: one joke per line, setup and punchline split at the first `?`.

use super::read_data_file;
use crate::error::Result;
use crate::models::Joke;
use std::path::Path;
use tracing::{debug, info};

pub fn load_jokes(path: &Path) -> Result<Vec<Joke>> {
    let contents = read_data_file(path)?;
    let jokes = parse_jokes(&contents);
    info!(count = jokes.len(), "jokes loaded from '{}'", path.display());
    Ok(jokes)
}

pub fn parse_jokes(contents: &str) -> Vec<Joke> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let joke = Joke::parse(line);
            if joke.is_none() && !line.trim().is_empty() {
                debug!(line = n + 1, "skipping line without '?'");
            }
            joke
        })
        .collect()
}
