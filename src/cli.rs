//! Terminal driver: flags, ruleset loading, the round loop, presentation.
use crate::ChoiceEngine;
use crate::Interactive;
use crate::Lines;
use crate::Outcome;
use crate::Prompt;
use crate::Round;
use crate::Rules;
use crate::Ruleset;
use crate::Session;
use crate::SessionError;
use anyhow::Context;
use clap::Parser;
use colored::ColoredString;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Built-in games.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Variant {
    #[default]
    Classic,
    Extended,
}

impl From<Variant> for Rules {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Rules::classic(),
            Variant::Extended => Rules::extended(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "roshambo", version, about = "Play rock-paper-scissors against the machine")]
pub struct Args {
    /// Built-in game to play.
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    pub variant: Variant,
    /// JSON ruleset `{ "options": [..], "beats": [[winner, loser], ..] }`. Overrides --variant.
    #[arg(long)]
    pub rules: Option<PathBuf>,
    /// Stop after this many rounds.
    #[arg(long)]
    pub rounds: Option<usize>,
    /// Seed for the machine's choices.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Give up on a round after this many invalid lines.
    #[arg(long)]
    pub max_attempts: Option<usize>,
}

impl Args {
    pub fn load(&self) -> anyhow::Result<Rules> {
        match self.rules {
            None => Ok(Rules::from(self.variant)),
            Some(ref path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read ruleset {}", path.display()))?;
                let ruleset = serde_json::from_str::<Ruleset>(&text)
                    .with_context(|| format!("parse ruleset {}", path.display()))?;
                Rules::try_from(ruleset)
                    .with_context(|| format!("invalid ruleset {}", path.display()))
            }
        }
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn session(&self) -> anyhow::Result<Session> {
        let session = Session::new(ChoiceEngine::new(self.load()?));
        Ok(match self.max_attempts {
            Some(limit) => session.with_limit(limit),
            None => session,
        })
    }
}

/// Parses flags and plays until the rounds run out, the player quits or input ends.
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut session = args.session()?;
    let ref mut rng = args.rng();
    log::debug!("starting with {:?}", args);
    println!("{}", banner(session.engine()));
    let result = if std::io::stdin().is_terminal() {
        drive(&mut session, &mut Interactive, rng, args.rounds)
    } else {
        let ref mut prompt = Lines::new(std::io::stdin().lock(), std::io::stdout());
        drive(&mut session, prompt, rng, args.rounds)
    };
    println!("{}", session.tally());
    result
}

/// Plays rounds until one of the stopping conditions is reached.
pub fn drive<P: Prompt>(
    session: &mut Session,
    prompt: &mut P,
    rng: &mut SmallRng,
    rounds: Option<usize>,
) -> anyhow::Result<()> {
    let mut played = 0;
    while rounds.is_none_or(|n| played < n) {
        match session.play(prompt, rng) {
            Ok(round) => println!("{}", render(&round)),
            Err(SessionError::Quit) | Err(SessionError::Exhausted) => break,
            Err(e @ SessionError::TooManyAttempts(_)) => return Err(e.into()),
        }
        played += 1;
    }
    Ok(())
}

/// Who beats whom, one line per matchup.
pub fn banner(engine: &ChoiceEngine) -> String {
    engine
        .rules()
        .matchups()
        .map(|(w, l)| format!("  {} beats {}", w, l))
        .collect::<Vec<String>>()
        .join("\n")
}

pub fn render(round: &Round) -> String {
    format!(
        "You chose {}. I chose {}. {}",
        round.human,
        round.machine,
        paint(round.outcome)
    )
}

fn paint(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::HumanWins => "You win!".green(),
        Outcome::MachineWins => "You lose!".red(),
        Outcome::Draw => "It's a tie!".yellow(),
    }
}
