use crate::choice::Choice;
use crate::choice::Source;
use crate::error::ValidationError;
use crate::gesture::Gesture;
use crate::outcome::Outcome;
use crate::outcome::Verdict;
use crate::rules::Rules;
use rand::Rng;

/// Draws machine choices, validates human ones, and settles rounds.
///
/// Holds nothing but its [`Rules`], so one engine can be shared read-only
/// across threads and reused for any number of rounds. Randomness is
/// supplied by the caller, which lets tests seed the machine's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceEngine {
    rules: Rules,
}

impl ChoiceEngine {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The ordered gestures this engine plays with. Never empty.
    pub fn options(&self) -> &[Gesture] {
        self.rules.roster()
    }

    /// Uniform draw over [`Self::options`], tagged as the machine's.
    ///
    /// Sampling is over the integer range `0..n`, so the out-of-range index
    /// a scaled float can round up to is never produced.
    pub fn random_choice<R: Rng>(&self, rng: &mut R) -> Choice {
        let index = rng.random_range(0..self.options().len());
        let choice = Choice::new(index, self.options()[index].clone(), Source::Machine);
        log::debug!("machine draws {}", choice);
        choice
    }

    /// [`Self::random_choice`] using the thread-local generator.
    pub fn random(&self) -> Choice {
        self.random_choice(&mut rand::rng())
    }

    /// Accepts raw input as the human's choice.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace, so
    /// `"rock"`, `"Rock"` and `" ROCK\n"` all pick Rock. `None` stands for
    /// exhausted input and is rejected like a blank line. Never retries.
    pub fn validate<'a>(&self, raw: impl Into<Option<&'a str>>) -> Result<Choice, ValidationError> {
        let raw = raw
            .into()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::Empty)?;
        self.rules
            .index(raw)
            .map(|index| Choice::new(index, self.options()[index].clone(), Source::Human))
            .ok_or_else(|| ValidationError::NotAnOption(raw.to_string()))
    }

    /// Settles a round.
    ///
    /// Panics if either choice did not come from an engine with this roster;
    /// that is a wiring bug, not something a player can cause.
    pub fn resolve(&self, human: &Choice, machine: &Choice) -> Outcome {
        debug_assert_eq!(human.source(), Source::Human);
        debug_assert_eq!(machine.source(), Source::Machine);
        let h = self.position(human);
        let m = self.position(machine);
        Outcome::from(self.rules.verdict(h, m))
    }

    /// Whether gesture `a` beats gesture `b`. Names are case-insensitive.
    pub fn beats(&self, a: &str, b: &str) -> Option<bool> {
        let a = self.rules.index(a)?;
        let b = self.rules.index(b)?;
        Some(self.rules.verdict(a, b) == Verdict::Win)
    }

    fn position(&self, choice: &Choice) -> usize {
        match self.options().get(choice.index()) {
            Some(gesture) if gesture == choice.gesture() => choice.index(),
            _ => panic!(
                "{} choice {} is not among the configured options {:?}",
                choice.source(),
                choice,
                self.options()
            ),
        }
    }
}

impl From<Rules> for ChoiceEngine {
    fn from(rules: Rules) -> Self {
        Self::new(rules)
    }
}
