//! Detection of movement between postures.
//!
//! While the practitioner flows from one posture to the next, per-frame
//! classification is meaningless and corrections would be noise. A frame
//! whose mean absolute angle change against the previous frame exceeds the
//! threshold is flagged as a transition and skipped by the classifier.

use asana_core::AngleVector;

/// Transition detector configuration
#[derive(Debug, Clone)]
pub struct TransitionConfig {
    /// Mean per-key change (degrees) above which a frame counts as movement
    pub threshold_deg: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { threshold_deg: 20.0 }
    }
}

/// Compares each frame's angle vector against the previous one.
#[derive(Debug, Default)]
pub struct TransitionDetector {
    config: TransitionConfig,
    last: Option<AngleVector>,
}

impl TransitionDetector {
    pub fn new(config: TransitionConfig) -> Self {
        Self { config, last: None }
    }

    /// Record this frame's vector and report whether it is a transition.
    ///
    /// The first observed frame is never flagged. The stored vector is
    /// updated on every call, flagged or not.
    pub fn observe(&mut self, current: &AngleVector) -> bool {
        let transitioning = match &self.last {
            None => false,
            Some(last) => current.mean_abs_delta(last) > self.config.threshold_deg,
        };
        self.last = Some(*current);
        transitioning
    }

    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }
}
