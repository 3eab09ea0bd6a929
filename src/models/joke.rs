//! Jokes and the cursor that walks through them.
use rand::Rng;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Splits a line at its first `?`. Lines without one are not jokes.
    pub fn parse(line: &str) -> Option<Self> {
        let (setup, rest) = line.trim().split_once('?')?;
        Some(Self {
            setup: format!("{setup}?"),
            punchline: rest.trim().to_string(),
        })
    }
}

/// How much of the current joke is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealStage {
    #[default]
    Idle,
    Setup,
    Punchline,
}

#[derive(Clone, Debug, Default)]
pub struct JokeDeck {
    jokes: Vec<Joke>,
    cursor: usize,
    stage: RevealStage,
}

impl JokeDeck {
    pub fn new(jokes: Vec<Joke>) -> Self {
        Self {
            jokes,
            cursor: 0,
            stage: RevealStage::Idle,
        }
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Joke> {
        self.jokes.get(self.cursor)
    }

    /// Text for the chat box at the current stage; nothing while idle.
    pub fn display_text(&self) -> Option<String> {
        let joke = self.current()?;
        match self.stage {
            RevealStage::Idle => None,
            RevealStage::Setup => Some(joke.setup.clone()),
            RevealStage::Punchline => Some(format!("{}\n\n{}", joke.setup, joke.punchline)),
        }
    }

    /// Idle shows the setup, setup reveals the punchline, punchline moves to a random joke.
    pub fn interact<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        match self.stage {
            RevealStage::Idle => self.stage = RevealStage::Setup,
            RevealStage::Setup => self.stage = RevealStage::Punchline,
            RevealStage::Punchline => return self.random_joke(rng),
        }
        self.display_text()
    }

    pub fn next_joke(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.jokes.len();
        self.show_setup()
    }

    pub fn previous_joke(&mut self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + self.jokes.len() - 1) % self.jokes.len();
        self.show_setup()
    }

    pub fn random_joke<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        self.cursor = rng.gen_range(0..self.jokes.len());
        self.show_setup()
    }

    fn show_setup(&mut self) -> Option<String> {
        self.stage = RevealStage::Setup;
        self.display_text()
    }
}
