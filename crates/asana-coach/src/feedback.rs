//! Human-readable coaching feedback.
//!
//! A static per-joint action table plus a tiered composer that turns ranked
//! corrections and an accuracy score into one display string. Pure
//! functions of their inputs.

use asana_core::AngleKey;

use crate::scoring::Correction;

/// Which way the live angle deviates from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Live angle below target
    More,
    /// Live angle above target
    Less,
}

/// Suggested adjustment for one joint and deviation direction.
pub fn joint_action(key: AngleKey, direction: Direction) -> &'static str {
    use asana_core::AngleKey as K;
    use self::Direction::{Less, More};

    match (key, direction) {
        (K::LeftElbow, More) => "Bend your left elbow more",
        (K::LeftElbow, Less) => "Straighten your left elbow",
        (K::RightElbow, More) => "Bend your right elbow more",
        (K::RightElbow, Less) => "Straighten your right elbow",
        (K::LeftShoulder, More) => "Raise your left arm higher",
        (K::LeftShoulder, Less) => "Lower your left arm",
        (K::RightShoulder, More) => "Raise your right arm higher",
        (K::RightShoulder, Less) => "Lower your right arm",
        (K::LeftKnee, More) => "Bend your left knee more",
        (K::LeftKnee, Less) => "Straighten your left knee",
        (K::RightKnee, More) => "Bend your right knee more",
        (K::RightKnee, Less) => "Straighten your right knee",
        (K::LeftWaist | K::RightWaist, More) => "Bend forward more at the hips",
        (K::LeftWaist | K::RightWaist, Less) => "Stand more upright",
    }
}

/// Compose the single instruction string surfaced for one frame.
pub fn compose(corrections: &[Correction], accuracy: u8) -> String {
    if corrections.is_empty() {
        return "✓ Perfect form!".to_string();
    }

    if accuracy >= 85 {
        return format!(
            "Good! ({accuracy}%) Try: {}",
            corrections[0].action.to_lowercase()
        );
    }

    if accuracy >= 70 {
        let top_two = corrections
            .iter()
            .take(2)
            .map(|c| c.action.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        return format!("Keep going! ({accuracy}%) {top_two}");
    }

    let top_two = corrections
        .iter()
        .take(2)
        .map(|c| c.action)
        .collect::<Vec<_>>()
        .join(" and ");
    format!("Adjust form ({accuracy}%): {top_two}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Severity;

    fn correction(action: &'static str, error: u32) -> Correction {
        Correction {
            joint: "left knee",
            error_degrees: error,
            action,
            severity: Severity::Medium,
        }
    }

    #[test]
    fn test_perfect_form() {
        assert_eq!(compose(&[], 100), "✓ Perfect form!");
    }

    #[test]
    fn test_high_accuracy_single_hint() {
        let corrections = vec![correction("Straighten your left knee", 18)];
        assert_eq!(
            compose(&corrections, 90),
            "Good! (90%) Try: straighten your left knee"
        );
    }

    #[test]
    fn test_mid_accuracy_two_hints() {
        let corrections = vec![
            correction("Straighten your left knee", 30),
            correction("Bend forward more at the hips", 22),
        ];
        assert_eq!(
            compose(&corrections, 75),
            "Keep going! (75%) straighten your left knee, bend forward more at the hips"
        );
    }

    #[test]
    fn test_low_accuracy_directive() {
        let corrections = vec![
            correction("Straighten your left knee", 60),
            correction("Lower your left arm", 45),
            correction("Stand more upright", 30),
        ];
        assert_eq!(
            compose(&corrections, 40),
            "Adjust form (40%): Straighten your left knee and Lower your left arm"
        );
    }

    #[test]
    fn test_composition_is_pure() {
        let corrections = vec![correction("Bend your right knee more", 20)];
        let first = compose(&corrections, 88);
        let second = compose(&corrections, 88);
        assert_eq!(first, second);
    }

    #[test]
    fn test_action_table_covers_all_keys() {
        for key in AngleKey::ALL {
            assert!(!joint_action(key, Direction::More).is_empty());
            assert!(!joint_action(key, Direction::Less).is_empty());
        }
    }
}
