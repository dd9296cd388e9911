//! Deviation scoring against the ideal-angle catalog.

use asana_core::AngleVector;
use serde::Serialize;

use crate::catalog;
use crate::feedback::{joint_action, Direction};

/// Corrections are ranked by error and capped at this many per frame.
pub const MAX_CORRECTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// One joint-level deviation from the ideal, with a suggested action.
#[derive(Debug, Clone, Serialize)]
pub struct Correction {
    /// Human-readable joint name from the catalog entry
    pub joint: &'static str,
    /// Rounded absolute deviation in degrees
    pub error_degrees: u32,
    /// Suggested adjustment
    pub action: &'static str,
    pub severity: Severity,
}

/// Aggregate score for one frame against one posture.
#[derive(Debug, Clone, Serialize)]
pub struct PoseScore {
    pub is_correct: bool,
    /// At most [`MAX_CORRECTIONS`], sorted by descending error
    pub corrections: Vec<Correction>,
    /// 0-100
    pub accuracy: u8,
}

impl PoseScore {
    /// Postures without a catalog entry are deemed trivially correct.
    pub fn trivially_correct() -> Self {
        Self {
            is_correct: true,
            corrections: Vec::new(),
            accuracy: 100,
        }
    }
}

/// Score a smoothed angle vector against a posture's catalog entry.
///
/// Every joint the entry defines contributes its absolute error to the
/// aggregate accuracy; only joints outside their tolerance produce a
/// correction. Severity is high once the error exceeds twice the tolerance.
pub fn score_against(angles: &AngleVector, posture: &str) -> PoseScore {
    let Some(targets) = catalog::lookup(posture) else {
        return PoseScore::trivially_correct();
    };

    let mut corrections = Vec::new();
    let mut total_error = 0.0;
    let mut joint_count = 0usize;

    for &(key, target) in targets {
        let live = angles.get(key);
        let error = (live - target.target).abs();

        if error > target.tolerance {
            let direction = if live < target.target {
                Direction::More
            } else {
                Direction::Less
            };
            let severity = if error > target.tolerance * 2.0 {
                Severity::High
            } else {
                Severity::Medium
            };
            corrections.push(Correction {
                joint: target.label,
                error_degrees: error.round() as u32,
                action: joint_action(key, direction),
                severity,
            });
        }

        total_error += error;
        joint_count += 1;
    }

    let accuracy = if joint_count == 0 {
        100
    } else {
        let max_possible = joint_count as f64 * 180.0;
        (100.0 - total_error / max_possible * 100.0).round().clamp(0.0, 100.0) as u8
    };

    // Stable sort: equal errors keep catalog declaration order
    corrections.sort_by(|a, b| b.error_degrees.cmp(&a.error_degrees));
    corrections.truncate(MAX_CORRECTIONS);

    PoseScore {
        is_correct: corrections.is_empty(),
        corrections,
        accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asana_core::AngleKey;

    fn uniform(degrees: f64) -> AngleVector {
        let mut v = AngleVector::zeroed();
        for key in AngleKey::ALL {
            v.set(key, degrees);
        }
        v
    }

    #[test]
    fn test_perfect_match() {
        let mut angles = AngleVector::zeroed();
        angles.set(AngleKey::LeftKnee, 175.0);
        angles.set(AngleKey::RightKnee, 175.0);

        let score = score_against(&angles, "Vrksasana (Tree Pose)");
        assert!(score.is_correct);
        assert!(score.corrections.is_empty());
        assert_eq!(score.accuracy, 100);
    }

    #[test]
    fn test_within_tolerance_costs_accuracy_but_no_correction() {
        let mut angles = AngleVector::zeroed();
        angles.set(AngleKey::LeftKnee, 165.0);
        angles.set(AngleKey::RightKnee, 165.0);

        // 10 degrees off each knee: inside the strict tolerance of 15
        let score = score_against(&angles, "Vrksasana (Tree Pose)");
        assert!(score.is_correct);
        assert_eq!(score.accuracy, 94);
    }

    #[test]
    fn test_severity_tiers() {
        // Utkatasana knees target 90 with moderate tolerance 20
        let mut medium = uniform(90.0);
        medium.set(AngleKey::LeftKnee, 125.0); // error 35, not > 40
        let score = score_against(&medium, "Utkatasana");
        assert_eq!(score.corrections[0].severity, Severity::Medium);

        let mut high = uniform(90.0);
        high.set(AngleKey::LeftKnee, 135.0); // error 45 > 40
        let score = score_against(&high, "Utkatasana");
        assert_eq!(score.corrections[0].severity, Severity::High);
    }

    #[test]
    fn test_direction_of_action() {
        // Live below target asks for more bend of the knee
        let mut angles = uniform(90.0);
        angles.set(AngleKey::LeftKnee, 60.0);
        let score = score_against(&angles, "Utkatasana");
        assert_eq!(score.corrections[0].action, "Bend your left knee more");

        let mut angles = uniform(90.0);
        angles.set(AngleKey::LeftKnee, 130.0);
        let score = score_against(&angles, "Utkatasana");
        assert_eq!(score.corrections[0].action, "Straighten your left knee");
    }

    #[test]
    fn test_corrections_ranked_and_capped() {
        // Plank defines 8 joints; an all-zero vector violates most of them
        let score = score_against(&uniform(0.0), "Phalakasana (Plank Pose)");
        assert_eq!(score.corrections.len(), MAX_CORRECTIONS);
        assert!(!score.is_correct);

        let errors: Vec<_> = score.corrections.iter().map(|c| c.error_degrees).collect();
        let mut sorted = errors.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(errors, sorted);
    }

    #[test]
    fn test_accuracy_never_negative() {
        // A wildly out-of-range reading cannot push accuracy below zero
        let score = score_against(&uniform(500.0), "Vrksasana (Tree Pose)");
        assert_eq!(score.accuracy, 0);
    }

    #[test]
    fn test_unscored_posture_is_trivially_correct() {
        let score = score_against(&uniform(0.0), "Ashtanga Namaskara");
        assert!(score.is_correct);
        assert!(score.corrections.is_empty());
        assert_eq!(score.accuracy, 100);
    }
}
