use crate::trial_result::TrialResult;

/// Power reported before any trial has been accepted.
pub const SENTINEL_POWER: f64 = -10000.0;

/// The best trial seen so far in a run.
///
/// Only `consider` changes it, and only when a candidate has strictly higher power, so
/// `best_power` never decreases.
#[derive(Debug, Default, Clone)]
pub struct BestState {
    best: Option<TrialResult>,
    best_trial: usize,
}

impl BestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_power(&self) -> f64 {
        self.best.as_ref().map_or(SENTINEL_POWER, |r| r.power)
    }

    pub fn best(&self) -> Option<&TrialResult> {
        self.best.as_ref()
    }

    /// Trial number that produced the current best.
    pub fn best_trial(&self) -> usize {
        self.best_trial
    }

    /// Replaces the best with `candidate` if it scores strictly higher. Returns whether it did.
    pub fn consider(&mut self, trial: usize, candidate: TrialResult) -> bool {
        if candidate.power > self.best_power() {
            self.best = Some(candidate);
            self.best_trial = trial;
            true
        } else {
            false
        }
    }

    pub fn into_best(self) -> Option<(TrialResult, usize)> {
        let best_trial = self.best_trial;
        self.best.map(|r| (r, best_trial))
    }
}
