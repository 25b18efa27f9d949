use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use crate::analysis::compute_frequency;
use crate::engine::PickEngine;
use crate::models::{FrequencyEntry, History, Pick, Suggestion};

/// State behind one screen: the history plus the last quick pick and the
/// last suggestion shown to the user.
pub struct Session<R: Rng = StdRng> {
    engine: PickEngine<R>,
    history: History,
    last_pick: Option<Pick>,
    last_suggestion: Option<Pick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub history: History,
    pub frequency: Vec<FrequencyEntry>,
    pub last_pick: Option<Pick>,
    pub last_suggestion: Option<Pick>,
}

impl Session<StdRng> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_engine(PickEngine::new(seed))
    }
}

impl<R: Rng> Session<R> {
    pub fn with_engine(engine: PickEngine<R>) -> Self {
        Self {
            engine,
            history: History::new(),
            last_pick: None,
            last_suggestion: None,
        }
    }

    pub fn quick_pick(&mut self) -> Pick {
        let pick = self.engine.generate_random_pick(&mut self.history);
        self.last_pick = Some(pick);
        pick
    }

    /// A fallback suggestion (empty history) lands in the quick pick slot and
    /// leaves the previous suggestion in place.
    pub fn suggested_pick(&mut self) -> Suggestion {
        let suggestion = self.engine.suggest_pick(&mut self.history);
        if suggestion.is_fallback() {
            self.last_pick = Some(suggestion.pick);
        } else {
            self.last_suggestion = Some(suggestion.pick);
        }
        suggestion
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn frequency(&self) -> Vec<FrequencyEntry> {
        compute_frequency(self.history.as_slice())
    }

    pub fn last_pick(&self) -> Option<Pick> {
        self.last_pick
    }

    pub fn last_suggestion(&self) -> Option<Pick> {
        self.last_suggestion
    }

    pub fn report(&self) -> SessionReport {
        SessionReport {
            history: self.history.clone(),
            frequency: self.frequency(),
            last_pick: self.last_pick,
            last_suggestion: self.last_suggestion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn session() -> Session {
        Session::with_engine(PickEngine::with_rng(StdRng::seed_from_u64(2024)))
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new(None);
        assert!(session.history().is_empty());
        assert!(session.frequency().is_empty());
        assert_eq!(session.last_pick(), None);
        assert_eq!(session.last_suggestion(), None);
    }

    #[test]
    fn test_quick_pick_updates_state() {
        let mut session = session();
        let first = session.quick_pick();
        let second = session.quick_pick();

        assert_eq!(session.history().as_slice(), &[first, second]);
        assert_eq!(session.last_pick(), Some(second));
        assert_eq!(session.last_suggestion(), None);
    }

    #[test]
    fn test_fallback_suggestion_fills_pick_slot() {
        let mut session = session();
        let suggestion = session.suggested_pick();

        assert!(suggestion.is_fallback());
        assert_eq!(session.last_pick(), Some(suggestion.pick));
        assert_eq!(session.last_suggestion(), None);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_suggestion_fills_suggestion_slot() {
        let mut session = session();
        let pick = session.quick_pick();
        let suggestion = session.suggested_pick();

        assert!(!suggestion.is_fallback());
        assert_eq!(session.last_pick(), Some(pick));
        assert_eq!(session.last_suggestion(), Some(suggestion.pick));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_frequency_follows_history() {
        let mut session = session();
        for _ in 0..8 {
            session.quick_pick();
        }
        let total: u32 = session.frequency().iter().map(|e| e.count).sum();
        assert_eq!(total, 24);
    }

    #[test]
    fn test_report_json() {
        let mut session = session();
        session.quick_pick();
        session.suggested_pick();

        let value = serde_json::to_value(session.report()).unwrap();
        assert_eq!(value["history"].as_array().unwrap().len(), 1);
        assert!(value["last_pick"].is_array());
        assert!(value["last_suggestion"].is_array());
        assert!(!value["frequency"].as_array().unwrap().is_empty());
    }
}
