//! Rule-based posture classification.
//!
//! Classification is an ordered chain of `(predicate, label)` rules over the
//! smoothed angle vector; the first matching rule wins, so declaration order
//! is the tie-break policy. The thresholds here are coarse gating conditions
//! that only pick a label; the per-joint targets used for scoring live in
//! [`crate::catalog`].
//!
//! Two variants share a common prefix: the Sun Salutation variant is
//! restricted to the twelve-step sequence's postures, while the general
//! variant additionally recognizes the tree balance and Warrior II.

use asana_core::{AngleKey as K, AngleVector};
use serde::{Deserialize, Serialize};

/// Label reported when no rule matches.
pub const UNKNOWN_POSE: &str = "Unknown Pose";

/// Label for the relaxed upright catch-all.
pub const STANDING_READY: &str = "Standing - Ready for pose";

/// Which rule set the classifier applies after the shared prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleMode {
    /// Full catalog, including standing balances
    #[default]
    General,
    /// Strictly the twelve Sun Salutation postures
    SunSalutation,
}

/// One entry in the ordered classification chain.
pub struct PoseRule {
    label: &'static str,
    predicate: fn(&AngleVector) -> bool,
}

impl PoseRule {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, angles: &AngleVector) -> bool {
        (self.predicate)(angles)
    }
}

fn prayer(v: &AngleVector) -> bool {
    v.get(K::LeftElbow) < 90.0 && v.get(K::RightElbow) < 90.0
}

fn raised_arms(v: &AngleVector) -> bool {
    v.get(K::LeftShoulder) > 160.0
        && v.get(K::RightShoulder) > 160.0
        && v.get(K::LeftElbow) > 170.0
        && v.get(K::RightElbow) > 170.0
        && v.get(K::LeftWaist) > 160.0
        && v.get(K::RightWaist) > 160.0
        && v.get(K::LeftKnee) > 170.0
        && v.get(K::RightKnee) > 170.0
}

fn hand_to_foot(v: &AngleVector) -> bool {
    v.get(K::LeftWaist) < 90.0
        && v.get(K::RightWaist) < 90.0
        && v.get(K::LeftKnee) > 170.0
        && v.get(K::RightKnee) > 170.0
}

fn equestrian(v: &AngleVector) -> bool {
    (v.get(K::LeftKnee) > 110.0 && v.get(K::RightWaist) < 100.0)
        || (v.get(K::RightKnee) > 110.0 && v.get(K::LeftWaist) < 100.0)
}

fn plank(v: &AngleVector) -> bool {
    v.get(K::LeftElbow) > 170.0
        && v.get(K::RightElbow) > 170.0
        && v.get(K::LeftShoulder) < 150.0
        && v.get(K::RightShoulder) < 150.0
        && v.get(K::LeftWaist) > 170.0
        && v.get(K::RightWaist) > 170.0
        && v.get(K::LeftKnee) > 160.0
        && v.get(K::RightKnee) > 160.0
}

fn eight_limbed(v: &AngleVector) -> bool {
    v.get(K::LeftElbow) > 170.0
        && v.get(K::RightElbow) > 170.0
        && v.get(K::LeftShoulder) < 150.0
        && v.get(K::RightShoulder) < 150.0
        && v.get(K::LeftWaist) > 170.0
        && v.get(K::RightWaist) > 170.0
        && v.get(K::LeftKnee) < 160.0
        && v.get(K::RightKnee) < 160.0
}

fn cobra(v: &AngleVector) -> bool {
    v.get(K::LeftShoulder) > 120.0
        && v.get(K::RightShoulder) > 120.0
        && v.get(K::LeftElbow) > 160.0
        && v.get(K::RightElbow) > 160.0
        && v.get(K::LeftWaist) > 150.0
        && v.get(K::RightWaist) > 150.0
}

fn downward_dog(v: &AngleVector) -> bool {
    v.get(K::LeftShoulder) > 160.0
        && v.get(K::RightShoulder) > 160.0
        && v.get(K::LeftElbow) > 170.0
        && v.get(K::RightElbow) > 170.0
        && v.get(K::LeftWaist) > 80.0
        && v.get(K::LeftWaist) < 110.0
        && v.get(K::LeftKnee) > 170.0
        && v.get(K::RightKnee) > 170.0
}

fn tree(v: &AngleVector) -> bool {
    (v.get(K::LeftKnee) > 165.0 && v.get(K::RightKnee) < 100.0)
        || (v.get(K::RightKnee) > 165.0 && v.get(K::LeftKnee) < 100.0)
}

fn warrior_two(v: &AngleVector) -> bool {
    v.get(K::LeftWaist) > 90.0
        && v.get(K::RightWaist) > 90.0
        && ((v.get(K::LeftKnee) < 130.0 && v.get(K::RightKnee) > 160.0)
            || (v.get(K::RightKnee) < 130.0 && v.get(K::LeftKnee) > 160.0))
        && v.get(K::LeftShoulder) > 70.0
        && v.get(K::RightShoulder) > 70.0
}

fn standing_relaxed(v: &AngleVector) -> bool {
    v.get(K::LeftKnee) > 170.0
        && v.get(K::RightKnee) > 170.0
        && v.get(K::LeftWaist) > 170.0
        && v.get(K::RightWaist) > 170.0
        && v.get(K::LeftElbow) > 150.0
}

/// Rules common to both modes, in priority order.
pub static SHARED_RULES: &[PoseRule] = &[
    PoseRule { label: "Pranamasana (Prayer Pose)", predicate: prayer },
    PoseRule { label: "Hasta Uttanasana (Raised Arms Pose)", predicate: raised_arms },
    PoseRule { label: "Padahastasana (Hand to Foot Pose)", predicate: hand_to_foot },
    PoseRule { label: "Ashwa Sanchalanasana (Equestrian Pose)", predicate: equestrian },
    PoseRule { label: "Phalakasana (Plank Pose)", predicate: plank },
    PoseRule { label: "Ashtanga Namaskara", predicate: eight_limbed },
    PoseRule { label: "Bhujangasana (Cobra Pose)", predicate: cobra },
    PoseRule { label: "Adho Mukha Svanasana (Downward Dog)", predicate: downward_dog },
];

/// Additional rules evaluated only in [`RuleMode::General`].
pub static GENERAL_RULES: &[PoseRule] = &[
    PoseRule { label: "Vrksasana (Tree Pose)", predicate: tree },
    PoseRule { label: "Virabhadrasana II (Warrior II)", predicate: warrior_two },
];

static STANDING_RULE: PoseRule = PoseRule { label: STANDING_READY, predicate: standing_relaxed };

/// Map a smoothed angle vector to a posture label.
pub fn classify(angles: &AngleVector, mode: RuleMode) -> &'static str {
    for rule in SHARED_RULES {
        if rule.matches(angles) {
            return rule.label;
        }
    }

    if mode == RuleMode::General {
        for rule in GENERAL_RULES {
            if rule.matches(angles) {
                return rule.label;
            }
        }
    }

    if STANDING_RULE.matches(angles) {
        return STANDING_RULE.label;
    }

    UNKNOWN_POSE
}

#[cfg(test)]
mod tests {
    use super::*;
    use asana_core::AngleKey;

    /// Neutral upright stance: straight legs and torso, arms hanging
    /// slightly bent (fully straight arms with low shoulders read as plank)
    fn standing() -> AngleVector {
        let mut v = AngleVector::zeroed();
        v.set(AngleKey::LeftElbow, 160.0);
        v.set(AngleKey::RightElbow, 160.0);
        v.set(AngleKey::LeftShoulder, 20.0);
        v.set(AngleKey::RightShoulder, 20.0);
        v.set(AngleKey::LeftKnee, 178.0);
        v.set(AngleKey::RightKnee, 178.0);
        v.set(AngleKey::LeftWaist, 178.0);
        v.set(AngleKey::RightWaist, 178.0);
        v
    }

    #[test]
    fn test_prayer_wins_on_bent_elbows() {
        let mut v = standing();
        v.set(AngleKey::LeftElbow, 40.0);
        v.set(AngleKey::RightElbow, 40.0);
        assert_eq!(classify(&v, RuleMode::General), "Pranamasana (Prayer Pose)");
        assert_eq!(classify(&v, RuleMode::SunSalutation), "Pranamasana (Prayer Pose)");
    }

    #[test]
    fn test_raised_arms() {
        let mut v = standing();
        v.set(AngleKey::LeftShoulder, 170.0);
        v.set(AngleKey::RightShoulder, 170.0);
        v.set(AngleKey::LeftElbow, 175.0);
        v.set(AngleKey::RightElbow, 175.0);
        assert_eq!(
            classify(&v, RuleMode::SunSalutation),
            "Hasta Uttanasana (Raised Arms Pose)"
        );
    }

    #[test]
    fn test_tree_matches_either_leg() {
        let mut left_up = standing();
        left_up.set(AngleKey::LeftKnee, 60.0);
        let mut right_up = standing();
        right_up.set(AngleKey::RightKnee, 60.0);

        assert_eq!(classify(&left_up, RuleMode::General), "Vrksasana (Tree Pose)");
        assert_eq!(classify(&right_up, RuleMode::General), "Vrksasana (Tree Pose)");
    }

    #[test]
    fn test_tree_excluded_from_sun_salutation() {
        let mut v = standing();
        v.set(AngleKey::RightKnee, 60.0);
        let label = classify(&v, RuleMode::SunSalutation);
        assert_ne!(label, "Vrksasana (Tree Pose)");
        assert_ne!(label, "Virabhadrasana II (Warrior II)");
    }

    #[test]
    fn test_standing_catch_all() {
        assert_eq!(classify(&standing(), RuleMode::General), STANDING_READY);
    }

    #[test]
    fn test_unknown_fallback() {
        // All angles zero matches no rule and fails the standing check,
        // except both elbows read as < 90 which the prayer rule accepts;
        // push the elbows up to dodge it.
        let mut v = AngleVector::zeroed();
        v.set(AngleKey::LeftElbow, 120.0);
        v.set(AngleKey::RightElbow, 120.0);
        assert_eq!(classify(&v, RuleMode::General), UNKNOWN_POSE);
    }

    #[test]
    fn test_plank_vs_eight_limbed_knee_split() {
        let mut v = AngleVector::zeroed();
        for key in [AngleKey::LeftElbow, AngleKey::RightElbow] {
            v.set(key, 175.0);
        }
        for key in [AngleKey::LeftShoulder, AngleKey::RightShoulder] {
            v.set(key, 80.0);
        }
        for key in [AngleKey::LeftWaist, AngleKey::RightWaist] {
            v.set(key, 175.0);
        }
        for key in [AngleKey::LeftKnee, AngleKey::RightKnee] {
            v.set(key, 170.0);
        }
        assert_eq!(classify(&v, RuleMode::General), "Phalakasana (Plank Pose)");

        for key in [AngleKey::LeftKnee, AngleKey::RightKnee] {
            v.set(key, 120.0);
        }
        assert_eq!(classify(&v, RuleMode::General), "Ashtanga Namaskara");
    }

    #[test]
    fn test_order_is_declaration_order() {
        let labels: Vec<_> = SHARED_RULES.iter().map(|r| r.label()).collect();
        assert_eq!(labels[0], "Pranamasana (Prayer Pose)");
        assert_eq!(labels[7], "Adho Mukha Svanasana (Downward Dog)");
        assert_eq!(GENERAL_RULES[0].label(), "Vrksasana (Tree Pose)");
    }
}
