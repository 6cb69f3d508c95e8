/// Result of one gesture against another, read from the first gesture's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    Win,
    Lose,
    Draw,
}

impl Verdict {
    /// The same matchup read from the other side.
    pub fn flip(self) -> Self {
        match self {
            Verdict::Win => Verdict::Lose,
            Verdict::Lose => Verdict::Win,
            Verdict::Draw => Verdict::Draw,
        }
    }
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    MachineWins,
    HumanWins,
    Draw,
}

/// Verdicts are read from the human's side of the table.
impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Win => Outcome::HumanWins,
            Verdict::Lose => Outcome::MachineWins,
            Verdict::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::MachineWins => "machine wins",
                Outcome::HumanWins => "human wins",
                Outcome::Draw => "draw",
            }
        )
    }
}
