/// One entry in a game's vocabulary, e.g. `Rock`.
///
/// A gesture is only a name. What it beats is decided by the
/// [`Rules`](crate::Rules) it is registered with, so the same
/// gesture can take part in differently sized games.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gesture(String);

impl Gesture {
    pub fn name(&self) -> &str {
        &self.0
    }
    /// Lookup key shared by every spelling of this gesture.
    pub(crate) fn key(&self) -> String {
        fold(&self.0)
    }
}

impl From<&str> for Gesture {
    fn from(name: &str) -> Self {
        Self(name.trim().to_string())
    }
}
impl From<String> for Gesture {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// Case folding applied to both roster names and raw input.
pub(crate) fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
