use crate::QUIT_WORDS;
use crate::choice::Choice;
use crate::engine::ChoiceEngine;
use crate::error::SessionError;
use crate::error::ValidationError;
use crate::outcome::Outcome;
use rand::Rng;

/// Somewhere raw human input comes from.
pub trait Prompt {
    /// Next line of input, or `None` once the source is exhausted.
    fn ask(&mut self, engine: &ChoiceEngine) -> Option<String>;
    /// Told about every rejected line before the next `ask`.
    fn reject(&mut self, error: &ValidationError);
}

/// One settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub human: Choice,
    pub machine: Choice,
    pub outcome: Outcome,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "you: {}, machine: {}, {}",
            self.human, self.machine, self.outcome
        )
    }
}

/// Running score for the current process only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub human: u32,
    pub machine: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::HumanWins => self.human += 1,
            Outcome::MachineWins => self.machine += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn rounds(&self) -> u32 {
        self.human + self.machine + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: you {}, machine {}, draws {}",
            self.rounds(),
            self.human,
            self.machine,
            self.draws
        )
    }
}

/// Drives rounds against one engine: machine draw, human retry loop, resolution.
///
/// The retry loop always terminates: on exhausted input, on a quit word,
/// or after `limit` rejected lines when a limit is set.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: ChoiceEngine,
    tally: Tally,
    limit: Option<usize>,
}

impl Session {
    pub fn new(engine: ChoiceEngine) -> Self {
        Self {
            engine,
            tally: Tally::default(),
            limit: None,
        }
    }

    /// Gives up on a round after `limit` rejected lines.
    pub fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }

    pub fn engine(&self) -> &ChoiceEngine {
        &self.engine
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Asks until the prompt yields a valid choice.
    pub fn acquire<P: Prompt>(&self, prompt: &mut P) -> Result<Choice, SessionError> {
        let mut rejected = 0;
        loop {
            if self.limit.is_some_and(|limit| rejected >= limit) {
                log::warn!("giving up after {} rejected lines", rejected);
                return Err(SessionError::TooManyAttempts(rejected));
            }
            let Some(line) = prompt.ask(&self.engine) else {
                log::warn!("input exhausted before a valid choice");
                return Err(SessionError::Exhausted);
            };
            match self.engine.validate(line.as_str()) {
                Ok(choice) => return Ok(choice),
                Err(_) if QUIT_WORDS.iter().any(|w| line.trim().eq_ignore_ascii_case(w)) => {
                    return Err(SessionError::Quit);
                }
                Err(error) => {
                    log::debug!("rejected {:?}: {}", line, error);
                    rejected += 1;
                    prompt.reject(&error);
                }
            }
        }
    }

    /// Plays one round and records it in the tally.
    pub fn play<P: Prompt, R: Rng>(
        &mut self,
        prompt: &mut P,
        rng: &mut R,
    ) -> Result<Round, SessionError> {
        let machine = self.engine.random_choice(rng);
        let human = self.acquire(prompt)?;
        let outcome = self.engine.resolve(&human, &machine);
        self.tally.record(outcome);
        let round = Round {
            human,
            machine,
            outcome,
        };
        log::info!("{}", round);
        Ok(round)
    }
}

impl From<ChoiceEngine> for Session {
    fn from(engine: ChoiceEngine) -> Self {
        Self::new(engine)
    }
}
