use crate::error::RulesError;
use crate::gesture::Gesture;
use crate::gesture::fold;
use crate::outcome::Verdict;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The beats relation of one game.
///
/// Holds the ordered roster of gestures and a dense `n × n` table of
/// verdicts, row gesture against column gesture. Every constructor checks
/// that the table is total, antisymmetric off the diagonal and draws on it,
/// so lookups afterwards never fail for gestures in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    roster: Vec<Gesture>,
    lookup: BTreeMap<String, usize>,
    table: Vec<Verdict>,
}

impl Rules {
    /// Rock, Paper, Scissors.
    pub fn classic() -> Self {
        Self::cyclic(["Rock", "Paper", "Scissors"]).expect("three distinct names form a cycle")
    }

    /// Rock, Paper, Scissors, Spock, Lizard.
    ///
    /// Scissors cuts Paper, Paper covers Rock, Rock crushes Lizard,
    /// Lizard poisons Spock, Spock smashes Scissors, Scissors decapitates
    /// Lizard, Lizard eats Paper, Paper disproves Spock, Spock vaporizes
    /// Rock, and Rock crushes Scissors. This ordering makes it the balanced
    /// cycle over five.
    pub fn extended() -> Self {
        Self::cyclic(["Rock", "Paper", "Scissors", "Spock", "Lizard"])
            .expect("five distinct names form a cycle")
    }

    /// Balanced cyclic game: gesture `i` beats gesture `j` iff `(i - j) mod n` is odd.
    ///
    /// With an odd roster each gesture beats exactly half of the others
    /// and loses to the other half. Even rosters cannot be balanced.
    pub fn cyclic<I, S>(names: I) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Gesture>,
    {
        let (roster, lookup) = Self::enroll(names)?;
        let n = roster.len();
        if n % 2 == 0 {
            return Err(RulesError::Unbalanced(n));
        }
        let table = (0..n)
            .flat_map(|i| (0..n).map(move |j| (n + i - j) % n))
            .map(|distance| match distance {
                0 => Verdict::Draw,
                d if d % 2 == 1 => Verdict::Win,
                _ => Verdict::Lose,
            })
            .collect();
        Ok(Self {
            roster,
            lookup,
            table,
        })
    }

    /// Arbitrary tournament declared as `(winner, loser)` pairs.
    ///
    /// Repeating a pair is harmless; declaring both directions, leaving a
    /// pair undecided or naming a gesture outside the roster is an error.
    pub fn explicit<I, S, B, W, L>(names: I, beats: B) -> Result<Self, RulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Gesture>,
        B: IntoIterator<Item = (W, L)>,
        W: AsRef<str>,
        L: AsRef<str>,
    {
        let (roster, lookup) = Self::enroll(names)?;
        let n = roster.len();
        let find = |name: &str| {
            lookup
                .get(&fold(name))
                .copied()
                .ok_or_else(|| RulesError::Unknown(name.trim().to_string()))
        };
        let mut table = (0..n * n)
            .map(|x| (x / n == x % n).then_some(Verdict::Draw))
            .collect::<Vec<Option<Verdict>>>();
        for (winner, loser) in beats {
            let w = find(winner.as_ref())?;
            let l = find(loser.as_ref())?;
            if w == l {
                return Err(RulesError::SelfBeat(roster[w].to_string()));
            }
            match table[w * n + l] {
                Some(Verdict::Win) => continue,
                Some(_) => {
                    return Err(RulesError::Contradiction(
                        roster[w].to_string(),
                        roster[l].to_string(),
                    ));
                }
                None => {
                    table[w * n + l] = Some(Verdict::Win);
                    table[l * n + w] = Some(Verdict::Lose);
                }
            }
        }
        let table = table
            .into_iter()
            .enumerate()
            .map(|(x, verdict)| {
                verdict.ok_or_else(|| {
                    RulesError::Undecided(roster[x / n].to_string(), roster[x % n].to_string())
                })
            })
            .collect::<Result<Vec<Verdict>, RulesError>>()?;
        Ok(Self {
            roster,
            lookup,
            table,
        })
    }

    /// Validates names and builds the case-folded index.
    fn enroll<I, S>(names: I) -> Result<(Vec<Gesture>, BTreeMap<String, usize>), RulesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Gesture>,
    {
        let roster = names.into_iter().map(Into::into).collect::<Vec<Gesture>>();
        if roster.is_empty() {
            return Err(RulesError::Empty);
        }
        let mut lookup = BTreeMap::new();
        for (i, gesture) in roster.iter().enumerate() {
            if gesture.name().is_empty() {
                return Err(RulesError::Blank);
            }
            if lookup.insert(gesture.key(), i).is_some() {
                return Err(RulesError::Duplicate(gesture.to_string()));
            }
        }
        Ok((roster, lookup))
    }

    pub fn roster(&self) -> &[Gesture] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Position of a gesture by case-insensitive name.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.lookup.get(&fold(name)).copied()
    }

    /// Verdict of gesture `a` against gesture `b`, by roster position.
    ///
    /// Panics if either position is outside the roster.
    pub fn verdict(&self, a: usize, b: usize) -> Verdict {
        let n = self.len();
        assert!(a < n && b < n, "positions ({a}, {b}) outside roster of {n}");
        self.table[a * n + b]
    }

    /// Every `(winner, loser)` pair, in roster order.
    pub fn matchups(&self) -> impl Iterator<Item = (&Gesture, &Gesture)> + '_ {
        let n = self.len();
        (0..n)
            .flat_map(move |a| (0..n).map(move |b| (a, b)))
            .filter(move |&(a, b)| self.verdict(a, b) == Verdict::Win)
            .map(move |(a, b)| (&self.roster[a], &self.roster[b]))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

/// Serializable description of a custom game.
///
/// ```json
/// { "options": ["Rock", "Paper", "Scissors"],
///   "beats": [["Rock", "Scissors"], ["Scissors", "Paper"], ["Paper", "Rock"]] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    pub options: Vec<String>,
    pub beats: Vec<(String, String)>,
}

impl TryFrom<Ruleset> for Rules {
    type Error = RulesError;
    fn try_from(ruleset: Ruleset) -> Result<Self, Self::Error> {
        Self::explicit(ruleset.options, ruleset.beats)
    }
}

impl From<&Rules> for Ruleset {
    fn from(rules: &Rules) -> Self {
        Self {
            options: rules.roster().iter().map(|g| g.to_string()).collect(),
            beats: rules
                .matchups()
                .map(|(w, l)| (w.to_string(), l.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lawful(rules: &Rules) {
        let n = rules.len();
        for a in 0..n {
            assert_eq!(rules.verdict(a, a), Verdict::Draw);
            for b in (0..n).filter(|&b| b != a) {
                assert_ne!(rules.verdict(a, b), Verdict::Draw);
                assert_eq!(rules.verdict(a, b), rules.verdict(b, a).flip());
            }
        }
    }

    #[test]
    fn classic_is_lawful() {
        lawful(&Rules::classic());
    }

    #[test]
    fn extended_is_lawful() {
        lawful(&Rules::extended());
    }

    #[test]
    fn cyclic_seven_is_lawful() {
        lawful(&Rules::cyclic(["a", "b", "c", "d", "e", "f", "g"]).unwrap());
    }

    #[test]
    fn classic_cycle() {
        let rules = Rules::classic();
        let rock = rules.index("Rock").unwrap();
        let paper = rules.index("Paper").unwrap();
        let scissors = rules.index("Scissors").unwrap();
        assert_eq!(rules.verdict(rock, scissors), Verdict::Win);
        assert_eq!(rules.verdict(scissors, paper), Verdict::Win);
        assert_eq!(rules.verdict(paper, rock), Verdict::Win);
    }

    #[test]
    fn classic_each_beats_one_loses_to_one() {
        let rules = Rules::classic();
        for a in 0..rules.len() {
            let wins = (0..rules.len())
                .filter(|&b| rules.verdict(a, b) == Verdict::Win)
                .count();
            let losses = (0..rules.len())
                .filter(|&b| rules.verdict(a, b) == Verdict::Lose)
                .count();
            assert_eq!((wins, losses), (1, 1));
        }
    }

    #[test]
    fn extended_matches_named_rules() {
        let rules = Rules::extended();
        let beats = |w: &str, l: &str| {
            rules.verdict(rules.index(w).unwrap(), rules.index(l).unwrap()) == Verdict::Win
        };
        assert!(beats("Scissors", "Paper"));
        assert!(beats("Paper", "Rock"));
        assert!(beats("Rock", "Lizard"));
        assert!(beats("Lizard", "Spock"));
        assert!(beats("Spock", "Scissors"));
        assert!(beats("Scissors", "Lizard"));
        assert!(beats("Lizard", "Paper"));
        assert!(beats("Paper", "Spock"));
        assert!(beats("Spock", "Rock"));
        assert!(beats("Rock", "Scissors"));
    }

    #[test]
    fn cyclic_rejects_even_and_empty() {
        assert_eq!(
            Rules::cyclic(["a", "b", "c", "d"]),
            Err(RulesError::Unbalanced(4))
        );
        assert_eq!(Rules::cyclic(Vec::<&str>::new()), Err(RulesError::Empty));
    }

    #[test]
    fn enroll_rejects_duplicates_and_blanks() {
        assert_eq!(
            Rules::cyclic(["Rock", "rock", "Paper"]),
            Err(RulesError::Duplicate(String::from("rock")))
        );
        assert_eq!(Rules::cyclic(["Rock", " ", "Paper"]), Err(RulesError::Blank));
    }

    #[test]
    fn explicit_agrees_with_classic() {
        let rules = Rules::explicit(
            ["Rock", "Paper", "Scissors"],
            [("rock", "scissors"), ("Scissors", "Paper"), ("Paper", "Rock")],
        )
        .unwrap();
        assert_eq!(rules, Rules::classic());
    }

    #[test]
    fn explicit_allows_repeated_pairs() {
        let rules = Rules::explicit(["x", "y"], [("x", "y"), ("x", "y")]).unwrap();
        lawful(&rules);
    }

    #[test]
    fn explicit_rejects_malformed_relations() {
        assert_eq!(
            Rules::explicit(["x", "y"], [("x", "z")]),
            Err(RulesError::Unknown(String::from("z")))
        );
        assert_eq!(
            Rules::explicit(["x", "y"], [("x", "x")]),
            Err(RulesError::SelfBeat(String::from("x")))
        );
        assert_eq!(
            Rules::explicit(["x", "y"], [("x", "y"), ("y", "x")]),
            Err(RulesError::Contradiction(String::from("y"), String::from("x")))
        );
        assert_eq!(
            Rules::explicit(["x", "y", "z"], [("x", "y"), ("y", "z")]),
            Err(RulesError::Undecided(String::from("x"), String::from("z")))
        );
    }

    #[test]
    fn ruleset_from_json() {
        let json = r#"{
            "options": ["Rock", "Paper", "Scissors"],
            "beats": [["Rock", "Scissors"], ["Scissors", "Paper"], ["Paper", "Rock"]]
        }"#;
        let ruleset = serde_json::from_str::<Ruleset>(json).unwrap();
        assert_eq!(Rules::try_from(ruleset).unwrap(), Rules::classic());
    }

    #[test]
    fn ruleset_describes_rules() {
        let rules = Rules::extended();
        let ruleset = Ruleset::from(&rules);
        assert_eq!(ruleset.beats.len(), 10);
        assert_eq!(Rules::try_from(ruleset).unwrap(), rules);
    }
}
