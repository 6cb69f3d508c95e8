/// Why a line of raw input was not accepted as a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Blank line, or no line at all.
    Empty,
    NotAnOption(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no choice entered"),
            Self::NotAnOption(s) => write!(f, "not an option: {}", s),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while assembling a beats relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    Empty,
    Blank,
    Duplicate(String),
    Unknown(String),
    SelfBeat(String),
    /// Both directions of one pair were declared.
    Contradiction(String, String),
    /// A pair of distinct gestures has no declared winner.
    Undecided(String, String),
    /// Balanced cyclic games need an odd roster.
    Unbalanced(usize),
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "ruleset has no options"),
            Self::Blank => write!(f, "option names cannot be blank"),
            Self::Duplicate(s) => write!(f, "duplicate option: {}", s),
            Self::Unknown(s) => write!(f, "unknown option: {}", s),
            Self::SelfBeat(s) => write!(f, "{} cannot beat itself", s),
            Self::Contradiction(a, b) => write!(f, "{} and {} both beat each other", a, b),
            Self::Undecided(a, b) => write!(f, "no winner declared between {} and {}", a, b),
            Self::Unbalanced(n) => {
                write!(f, "cyclic rules need an odd number of options, got {}", n)
            }
        }
    }
}

impl std::error::Error for RulesError {}

/// Ways an interactive round ends without a human choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The input source has no more lines.
    Exhausted,
    Quit,
    TooManyAttempts(usize),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "input exhausted before a valid choice"),
            Self::Quit => write!(f, "player quit"),
            Self::TooManyAttempts(n) => write!(f, "no valid choice after {} attempts", n),
        }
    }
}

impl std::error::Error for SessionError {}
