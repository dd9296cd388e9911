//! Ideal joint-angle catalog.
//!
//! One entry per supported posture: the subset of joint angles that define
//! the posture, each with a target, a tolerance tier, and the human label
//! used in correction messages. The catalog drives deviation scoring only;
//! the classifier's coarser entry thresholds live in [`crate::rules`].

use std::collections::HashMap;

use asana_core::AngleKey;
use once_cell::sync::Lazy;
use serde::Serialize;

/// For precise postures like standing
pub const TOLERANCE_STRICT: f64 = 15.0;
/// For balanced postures
pub const TOLERANCE_MODERATE: f64 = 20.0;
/// For complex or deep postures
pub const TOLERANCE_LENIENT: f64 = 25.0;

/// Ideal angle for one joint within a posture definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JointTarget {
    /// Ideal angle in degrees
    pub target: f64,
    /// Allowed deviation in degrees before a correction is raised
    pub tolerance: f64,
    /// Human-readable joint name for correction messages
    pub label: &'static str,
    /// Marker for joints that only one side needs to satisfy
    pub optional: bool,
}

/// Ordered joint targets for one posture.
pub type PostureTargets = &'static [(AngleKey, JointTarget)];

const fn j(target: f64, tolerance: f64, label: &'static str) -> JointTarget {
    JointTarget { target, tolerance, label, optional: false }
}

const fn opt(target: f64, tolerance: f64, label: &'static str) -> JointTarget {
    JointTarget { target, tolerance, label, optional: true }
}

use asana_core::AngleKey as K;

const S: f64 = TOLERANCE_STRICT;
const M: f64 = TOLERANCE_MODERATE;
const L: f64 = TOLERANCE_LENIENT;

/// Catalog source, in declaration order.
static CATALOG_ENTRIES: &[(&str, PostureTargets)] = &[
    (
        "Adho Mukha Svanasana (Downward Dog)",
        &[
            (K::LeftShoulder, j(175.0, S, "left shoulder")),
            (K::RightShoulder, j(175.0, S, "right shoulder")),
            (K::LeftElbow, j(178.0, S, "left elbow")),
            (K::RightElbow, j(178.0, S, "right elbow")),
            (K::LeftWaist, j(95.0, M, "hips")),
            (K::LeftKnee, j(178.0, S, "left knee")),
            (K::RightKnee, j(178.0, S, "right knee")),
        ],
    ),
    (
        "Adho Mukha Vrksasana",
        &[
            (K::LeftShoulder, j(175.0, M, "left shoulder")),
            (K::RightShoulder, j(175.0, M, "right shoulder")),
            (K::LeftWaist, j(175.0, M, "hips")),
            (K::LeftKnee, j(175.0, M, "left knee")),
            (K::RightKnee, j(175.0, M, "right knee")),
        ],
    ),
    (
        "Alanasana",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::LeftWaist, j(90.0, L, "hips")),
            (K::LeftShoulder, j(175.0, M, "left shoulder")),
        ],
    ),
    (
        "Anjaneyasana",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::RightKnee, j(175.0, M, "back knee")),
            (K::LeftWaist, j(90.0, L, "hips")),
        ],
    ),
    (
        "Ardha Chandrasana",
        &[
            (K::LeftKnee, j(175.0, S, "standing leg")),
            (K::LeftWaist, j(90.0, M, "torso")),
            (K::LeftShoulder, j(90.0, M, "shoulder")),
        ],
    ),
    (
        "Ardha Matsyendrasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::LeftWaist, j(90.0, L, "twist")),
        ],
    ),
    (
        "Ardha Navasana",
        &[
            (K::LeftKnee, j(120.0, M, "left knee")),
            (K::RightKnee, j(120.0, M, "right knee")),
            (K::LeftWaist, j(90.0, M, "core")),
        ],
    ),
    (
        "Ardha Pincha Mayurasana",
        &[
            (K::LeftElbow, j(90.0, M, "left elbow")),
            (K::RightElbow, j(90.0, M, "right elbow")),
            (K::LeftWaist, j(175.0, M, "hips")),
        ],
    ),
    (
        "Ashta Chandrasana",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::LeftWaist, j(90.0, L, "hips")),
            (K::LeftShoulder, j(90.0, M, "shoulder")),
        ],
    ),
    (
        "Baddha Konasana",
        &[
            (K::LeftKnee, j(90.0, L, "left knee")),
            (K::RightKnee, j(90.0, L, "right knee")),
            (K::LeftWaist, j(90.0, M, "hips")),
        ],
    ),
    (
        "Bakasana",
        &[
            (K::LeftElbow, j(90.0, M, "left elbow")),
            (K::RightElbow, j(90.0, M, "right elbow")),
            (K::LeftKnee, j(90.0, L, "left knee")),
        ],
    ),
    (
        "Balasana",
        &[
            (K::LeftKnee, j(90.0, L, "left knee")),
            (K::RightKnee, j(90.0, L, "right knee")),
            (K::LeftWaist, j(60.0, L, "hips")),
        ],
    ),
    (
        "Bitilasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(90.0, M, "right knee")),
            (K::LeftWaist, j(165.0, M, "back arch")),
        ],
    ),
    (
        "Bhujangasana (Cobra Pose)",
        &[
            (K::LeftShoulder, j(140.0, M, "left shoulder")),
            (K::RightShoulder, j(140.0, M, "right shoulder")),
            (K::LeftElbow, j(170.0, M, "left elbow")),
            (K::RightElbow, j(170.0, M, "right elbow")),
            (K::LeftWaist, j(165.0, M, "back arch")),
        ],
    ),
    (
        "Camatkarasana",
        &[
            (K::LeftShoulder, j(140.0, M, "left shoulder")),
            (K::LeftWaist, j(150.0, L, "back arch")),
            (K::RightKnee, j(90.0, M, "right knee")),
        ],
    ),
    (
        "Dhanurasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(90.0, M, "right knee")),
            (K::LeftWaist, j(150.0, L, "back arch")),
        ],
    ),
    (
        "Eka Pada Rajakapotasana",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::RightKnee, j(175.0, M, "back leg")),
            (K::LeftWaist, j(90.0, L, "hips")),
        ],
    ),
    (
        "Garudasana",
        &[
            (K::LeftKnee, j(120.0, M, "left knee")),
            (K::LeftElbow, j(90.0, M, "left elbow")),
            (K::RightElbow, j(90.0, M, "right elbow")),
        ],
    ),
    (
        "Halasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(60.0, L, "hips")),
        ],
    ),
    (
        "Hanumanasana",
        &[
            (K::LeftKnee, j(175.0, S, "front leg")),
            (K::RightKnee, j(175.0, S, "back leg")),
            (K::LeftWaist, j(175.0, M, "hips")),
        ],
    ),
    (
        "Hasta Uttanasana (Raised Arms Pose)",
        &[
            (K::LeftShoulder, j(175.0, S, "left shoulder")),
            (K::RightShoulder, j(175.0, S, "right shoulder")),
            (K::LeftElbow, j(178.0, S, "left elbow")),
            (K::RightElbow, j(178.0, S, "right elbow")),
            (K::LeftWaist, j(175.0, M, "waist")),
            (K::LeftKnee, j(178.0, S, "left knee")),
            (K::RightKnee, j(178.0, S, "right knee")),
        ],
    ),
    (
        "Malasana",
        &[
            (K::LeftKnee, j(60.0, L, "left knee")),
            (K::RightKnee, j(60.0, L, "right knee")),
            (K::LeftWaist, j(60.0, L, "hips")),
        ],
    ),
    (
        "Marjaryasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(90.0, M, "right knee")),
            (K::LeftWaist, j(100.0, M, "back curve")),
        ],
    ),
    (
        "Navasana",
        &[
            (K::LeftKnee, j(175.0, M, "left knee")),
            (K::RightKnee, j(175.0, M, "right knee")),
            (K::LeftWaist, j(90.0, M, "core")),
        ],
    ),
    (
        "Padahastasana (Hand to Foot Pose)",
        &[
            (K::LeftWaist, j(60.0, L, "waist")),
            (K::RightWaist, j(60.0, L, "waist")),
            (K::LeftKnee, j(178.0, S, "left knee")),
            (K::RightKnee, j(178.0, S, "right knee")),
        ],
    ),
    (
        "Padmasana",
        &[
            (K::LeftKnee, j(90.0, L, "left knee")),
            (K::RightKnee, j(90.0, L, "right knee")),
            (K::LeftWaist, j(90.0, M, "spine")),
        ],
    ),
    (
        "Parsva Virabhadrasana",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::LeftWaist, j(60.0, L, "side bend")),
            (K::LeftShoulder, j(175.0, M, "left shoulder")),
        ],
    ),
    (
        "Parsvottanasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(60.0, L, "forward bend")),
        ],
    ),
    (
        "Paschimottanasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(60.0, L, "forward fold")),
        ],
    ),
    (
        "Phalakasana (Plank Pose)",
        &[
            (K::LeftElbow, j(178.0, S, "left elbow")),
            (K::RightElbow, j(178.0, S, "right elbow")),
            (K::LeftShoulder, j(90.0, M, "left shoulder")),
            (K::RightShoulder, j(90.0, M, "right shoulder")),
            (K::LeftWaist, j(178.0, S, "hips")),
            (K::RightWaist, j(178.0, S, "hips")),
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
        ],
    ),
    (
        "Pincha Mayurasana",
        &[
            (K::LeftElbow, j(90.0, M, "left elbow")),
            (K::RightElbow, j(90.0, M, "right elbow")),
            (K::LeftWaist, j(175.0, M, "hips")),
        ],
    ),
    (
        "Pranamasana (Prayer Pose)",
        &[
            (K::LeftElbow, j(45.0, M, "left elbow")),
            (K::RightElbow, j(45.0, M, "right elbow")),
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
        ],
    ),
    (
        "Salamba Bhujangasana",
        &[
            (K::LeftShoulder, j(140.0, M, "left shoulder")),
            (K::RightShoulder, j(140.0, M, "right shoulder")),
            (K::LeftWaist, j(165.0, M, "back arch")),
        ],
    ),
    (
        "Salamba Sarvangasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(175.0, M, "hips")),
        ],
    ),
    (
        "Setu Bandha Sarvangasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(90.0, M, "right knee")),
            (K::LeftWaist, j(150.0, M, "bridge")),
        ],
    ),
    (
        "Sivasana",
        &[
            (K::LeftKnee, j(175.0, L, "left knee")),
            (K::RightKnee, j(175.0, L, "right knee")),
            (K::LeftWaist, j(175.0, L, "hips")),
        ],
    ),
    (
        "Supta Kapotasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(175.0, M, "right knee")),
        ],
    ),
    (
        "Trikonasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(90.0, M, "side bend")),
        ],
    ),
    (
        "Upavistha Konasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(60.0, L, "forward fold")),
        ],
    ),
    (
        "Urdhva Dhanurasana",
        &[
            (K::LeftElbow, j(140.0, M, "left elbow")),
            (K::RightElbow, j(140.0, M, "right elbow")),
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::LeftWaist, j(150.0, L, "back bend")),
        ],
    ),
    (
        "Urdhva Mukha Svsnssana",
        &[
            (K::LeftShoulder, j(140.0, M, "left shoulder")),
            (K::RightShoulder, j(140.0, M, "right shoulder")),
            (K::LeftWaist, j(165.0, M, "back arch")),
        ],
    ),
    (
        "Ustrasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(90.0, M, "right knee")),
            (K::LeftWaist, j(150.0, L, "back bend")),
        ],
    ),
    (
        "Utkatasana",
        &[
            (K::LeftKnee, j(90.0, M, "left knee")),
            (K::RightKnee, j(90.0, M, "right knee")),
            (K::LeftWaist, j(90.0, M, "hips")),
        ],
    ),
    (
        "Uttanasana",
        &[
            (K::LeftKnee, j(175.0, S, "left knee")),
            (K::RightKnee, j(175.0, S, "right knee")),
            (K::LeftWaist, j(60.0, L, "forward fold")),
        ],
    ),
    (
        "Utthita Hasta Padangusthasana",
        &[
            (K::LeftKnee, j(175.0, S, "standing leg")),
            (K::RightKnee, j(175.0, M, "raised leg")),
            (K::LeftWaist, j(90.0, M, "balance")),
        ],
    ),
    (
        "Utthita Parsvakonasana",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::RightKnee, j(175.0, S, "back leg")),
            (K::LeftWaist, j(90.0, M, "side angle")),
        ],
    ),
    (
        "Vasisthasana",
        &[
            (K::LeftElbow, j(175.0, S, "bottom arm")),
            (K::LeftWaist, j(175.0, M, "hips")),
            (K::LeftKnee, j(175.0, S, "left knee")),
        ],
    ),
    (
        "Virabhadrasana One",
        &[
            (K::LeftKnee, j(90.0, M, "front knee")),
            (K::RightKnee, j(175.0, S, "back leg")),
            (K::LeftShoulder, j(175.0, M, "left shoulder")),
        ],
    ),
    (
        "Virabhadrasana Three",
        &[
            (K::LeftKnee, j(175.0, S, "standing leg")),
            (K::LeftWaist, j(90.0, M, "hips")),
            (K::RightKnee, j(175.0, M, "raised leg")),
        ],
    ),
    (
        "Virabhadrasana II (Warrior II)",
        &[
            (K::LeftWaist, j(150.0, M, "torso")),
            (K::LeftShoulder, j(90.0, M, "left shoulder")),
            (K::RightShoulder, j(90.0, M, "right shoulder")),
            (K::LeftKnee, opt(110.0, L, "front knee")),
            (K::RightKnee, opt(110.0, L, "front knee")),
        ],
    ),
    (
        "Vrksasana (Tree Pose)",
        &[
            (K::LeftKnee, opt(175.0, S, "standing leg")),
            (K::RightKnee, opt(175.0, S, "standing leg")),
        ],
    ),
    (
        "Ashwa Sanchalanasana (Equestrian Pose)",
        &[
            (K::LeftKnee, opt(120.0, L, "front knee")),
            (K::RightKnee, opt(120.0, L, "front knee")),
            (K::LeftWaist, opt(90.0, L, "back hip")),
            (K::RightWaist, opt(90.0, L, "back hip")),
        ],
    ),
];

static CATALOG: Lazy<HashMap<&'static str, PostureTargets>> =
    Lazy::new(|| CATALOG_ENTRIES.iter().copied().collect());

/// Joint targets for a posture name, if it has a catalog entry.
pub fn lookup(name: &str) -> Option<PostureTargets> {
    CATALOG.get(name).copied()
}

/// All posture names with a catalog entry, in declaration order.
pub fn supported_poses() -> impl Iterator<Item = &'static str> {
    CATALOG_ENTRIES.iter().map(|(name, _)| *name)
}
