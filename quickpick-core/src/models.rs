use serde::Serialize;

/// Numbers are drawn from `0..POOL_SIZE`.
pub const POOL_SIZE: u8 = 10;
pub const PICK_LEN: usize = 3;

/// One 3-number draw. Duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pick([u8; PICK_LEN]);

impl Pick {
    pub fn new(numbers: [u8; PICK_LEN]) -> Self {
        debug_assert!(
            numbers.iter().all(|&n| n < POOL_SIZE),
            "numéro hors limites (0-{}) : {:?}",
            POOL_SIZE - 1,
            numbers
        );
        Self(numbers)
    }

    pub fn numbers(&self) -> &[u8; PICK_LEN] {
        &self.0
    }
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" - ");
        write!(f, "{}", joined)
    }
}

/// Append-only record of the picks generated during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    picks: Vec<Pick>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pick: Pick) {
        self.picks.push(pick);
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn last(&self) -> Option<&Pick> {
        self.picks.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pick> {
        self.picks.iter()
    }

    pub fn as_slice(&self) -> &[Pick] {
        &self.picks
    }
}

impl From<Vec<Pick>> for History {
    fn from(picks: Vec<Pick>) -> Self {
        Self { picks }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub number: u8,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SuggestionSource {
    /// History was empty: the pick is a plain quick pick and was recorded.
    QuickPick,
    /// The first `ranked` numbers are the most frequent ones, the rest is filler.
    Frequency { ranked: usize },
}

impl std::fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestionSource::QuickPick => write!(f, "tirage rapide"),
            SuggestionSource::Frequency { ranked } => {
                write!(f, "{} numéro(s) fréquent(s)", ranked)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub pick: Pick,
    pub source: SuggestionSource,
}

impl Suggestion {
    pub fn is_fallback(&self) -> bool {
        self.source == SuggestionSource::QuickPick
    }
}
