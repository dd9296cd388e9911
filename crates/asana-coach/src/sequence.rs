//! Sun Salutation sequence tracking.
//!
//! The twelve-step Surya Namaskar cycle, in order. The tracker advances one
//! step each time the confirmed label matches the expected posture, which
//! pairs naturally with [`crate::rules::RuleMode::SunSalutation`] or with
//! forced-target practice of a single step.

use serde::Serialize;

/// The twelve postures of one Sun Salutation round, in order.
pub static SUN_SALUTATION_STEPS: [&str; 12] = [
    "Pranamasana (Prayer Pose)",
    "Hasta Uttanasana (Raised Arms Pose)",
    "Padahastasana (Hand to Foot Pose)",
    "Ashwa Sanchalanasana (Equestrian Pose)",
    "Phalakasana (Plank Pose)",
    "Ashtanga Namaskara",
    "Bhujangasana (Cobra Pose)",
    "Adho Mukha Svanasana (Downward Dog)",
    "Ashwa Sanchalanasana (Equestrian Pose)",
    "Padahastasana (Hand to Foot Pose)",
    "Hasta Uttanasana (Raised Arms Pose)",
    "Pranamasana (Prayer Pose)",
];

/// Progress through one Sun Salutation round.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SunSalutation {
    step: usize,
}

impl SunSalutation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The posture expected next, or `None` once the round is complete.
    pub fn expected(&self) -> Option<&'static str> {
        SUN_SALUTATION_STEPS.get(self.step).copied()
    }

    /// One-based step number for display, capped at 12.
    pub fn step_number(&self) -> usize {
        (self.step + 1).min(SUN_SALUTATION_STEPS.len())
    }

    /// Advance if the confirmed label matches the expected step.
    ///
    /// Returns true when the step advanced. Non-matching labels (including
    /// transition and waiting sentinels) leave progress unchanged.
    pub fn advance(&mut self, confirmed: &str) -> bool {
        match self.expected() {
            Some(expected) if expected == confirmed => {
                self.step += 1;
                true
            }
            _ => false,
        }
    }

    pub fn round_complete(&self) -> bool {
        self.step >= SUN_SALUTATION_STEPS.len()
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_only_on_expected_label() {
        let mut round = SunSalutation::new();
        assert_eq!(round.expected(), Some("Pranamasana (Prayer Pose)"));

        assert!(!round.advance("Phalakasana (Plank Pose)"));
        assert!(!round.advance("Transitioning..."));
        assert_eq!(round.step_number(), 1);

        assert!(round.advance("Pranamasana (Prayer Pose)"));
        assert_eq!(round.expected(), Some("Hasta Uttanasana (Raised Arms Pose)"));
    }

    #[test]
    fn test_full_round() {
        let mut round = SunSalutation::new();
        for step in SUN_SALUTATION_STEPS {
            assert!(!round.round_complete());
            assert!(round.advance(step));
        }
        assert!(round.round_complete());
        assert_eq!(round.expected(), None);
        assert!(!round.advance("Pranamasana (Prayer Pose)"));
    }

    #[test]
    fn test_reset_restarts_round() {
        let mut round = SunSalutation::new();
        round.advance("Pranamasana (Prayer Pose)");
        round.reset();
        assert_eq!(round.step_number(), 1);
        assert_eq!(round.expected(), Some("Pranamasana (Prayer Pose)"));
    }
}
