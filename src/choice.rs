use crate::gesture::Gesture;

/// Who picked a gesture.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    Machine,
    Human,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Source::Machine => "machine",
                Source::Human => "human",
            }
        )
    }
}

/// A validated gesture tagged with where it came from.
///
/// Only a [`ChoiceEngine`](crate::ChoiceEngine) hands these out, either by
/// drawing one at random or by accepting raw input. The position into the
/// engine's roster travels with the gesture so resolution is a table lookup.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Choice {
    index: usize,
    gesture: Gesture,
    source: Source,
}

impl Choice {
    pub(crate) fn new(index: usize, gesture: Gesture, source: Source) -> Self {
        Self {
            index,
            gesture,
            source,
        }
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }
    pub fn source(&self) -> Source {
        self.source
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.gesture)
    }
}
