//! Fundamental types for the asana engine.

use chrono::{DateTime, Utc};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Identifier for one detection session (one active camera feed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Timestamp wrapper with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(0))
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

/// Body-part identities consumed by the engine.
///
/// The external estimator may report more keypoints (face, hands, feet);
/// only these twelve participate in joint-angle computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LandmarkKind {
    LeftShoulder = 0,
    RightShoulder = 1,
    LeftElbow = 2,
    RightElbow = 3,
    LeftWrist = 4,
    RightWrist = 5,
    LeftHip = 6,
    RightHip = 7,
    LeftKnee = 8,
    RightKnee = 9,
    LeftAnkle = 10,
    RightAnkle = 11,
}

impl LandmarkKind {
    pub const COUNT: usize = 12;

    pub const ALL: [LandmarkKind; Self::COUNT] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::LeftShoulder),
            1 => Some(Self::RightShoulder),
            2 => Some(Self::LeftElbow),
            3 => Some(Self::RightElbow),
            4 => Some(Self::LeftWrist),
            5 => Some(Self::RightWrist),
            6 => Some(Self::LeftHip),
            7 => Some(Self::RightHip),
            8 => Some(Self::LeftKnee),
            9 => Some(Self::RightKnee),
            10 => Some(Self::LeftAnkle),
            11 => Some(Self::RightAnkle),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::LeftWrist => "leftWrist",
            Self::RightWrist => "rightWrist",
            Self::LeftHip => "leftHip",
            Self::RightHip => "rightHip",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftAnkle => "leftAnkle",
            Self::RightAnkle => "rightAnkle",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| Error::InvalidInput(format!("unknown landmark: {name}")))
    }
}

/// A single body keypoint in normalized image coordinates (0-1).
///
/// `z` is carried through from estimators that report it but never enters
/// the angle computation; all geometry is 2D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_point2(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

/// One camera frame's worth of landmarks.
///
/// Entries are `None` when the estimator could not locate that body part.
/// Consumed exactly once per frame; never retained by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkFrame {
    landmarks: [Option<Landmark>; LandmarkKind::COUNT],
}

impl LandmarkFrame {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: LandmarkKind) -> Option<&Landmark> {
        self.landmarks[kind as usize].as_ref()
    }

    pub fn set(&mut self, kind: LandmarkKind, landmark: Landmark) {
        self.landmarks[kind as usize] = Some(landmark);
    }

    pub fn clear(&mut self, kind: LandmarkKind) {
        self.landmarks[kind as usize] = None;
    }

    /// True when the estimator produced no landmarks at all this frame.
    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(Option::is_none)
    }
}

/// The fixed vocabulary of named joint angles.
///
/// Declaration order is significant: it is the scan order for angle vectors
/// and the order rule predicates and catalog entries reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum AngleKey {
    LeftElbow = 0,
    RightElbow = 1,
    LeftShoulder = 2,
    RightShoulder = 3,
    LeftKnee = 4,
    RightKnee = 5,
    LeftWaist = 6,
    RightWaist = 7,
}

impl AngleKey {
    pub const COUNT: usize = 8;

    pub const ALL: [AngleKey; Self::COUNT] = [
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftWaist,
        Self::RightWaist,
    ];

    /// The (a, vertex, c) landmark triple whose interior angle this key names.
    pub fn triple(&self) -> (LandmarkKind, LandmarkKind, LandmarkKind) {
        use LandmarkKind::*;
        match self {
            Self::LeftElbow => (LeftShoulder, LeftElbow, LeftWrist),
            Self::RightElbow => (RightShoulder, RightElbow, RightWrist),
            Self::LeftShoulder => (LeftHip, LeftShoulder, LeftElbow),
            Self::RightShoulder => (RightHip, RightShoulder, RightElbow),
            Self::LeftKnee => (LeftHip, LeftKnee, LeftAnkle),
            Self::RightKnee => (RightHip, RightKnee, RightAnkle),
            Self::LeftWaist => (LeftShoulder, LeftHip, LeftKnee),
            Self::RightWaist => (RightShoulder, RightHip, RightKnee),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftWaist => "leftWaist",
            Self::RightWaist => "rightWaist",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| Error::InvalidInput(format!("unknown angle key: {name}")))
    }
}

/// One frame's smoothed (or raw) joint-angle readings, keyed by [`AngleKey`].
///
/// Every value lies in [0, 180]; a missing landmark triple reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleVector {
    values: [f64; AngleKey::COUNT],
}

impl AngleVector {
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Compute every named joint angle directly from a landmark frame.
    pub fn from_frame(frame: &LandmarkFrame) -> Self {
        let mut v = Self::zeroed();
        for key in AngleKey::ALL {
            let (a, b, c) = key.triple();
            v.set(
                key,
                crate::geometry::joint_angle(frame.get(a), frame.get(b), frame.get(c)),
            );
        }
        v
    }

    pub fn get(&self, key: AngleKey) -> f64 {
        self.values[key as usize]
    }

    pub fn set(&mut self, key: AngleKey, degrees: f64) {
        self.values[key as usize] = degrees;
    }

    pub fn iter(&self) -> impl Iterator<Item = (AngleKey, f64)> + '_ {
        AngleKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Mean absolute per-key change against another vector.
    pub fn mean_abs_delta(&self, other: &AngleVector) -> f64 {
        let total: f64 = AngleKey::ALL
            .into_iter()
            .map(|k| (self.get(k) - other.get(k)).abs())
            .sum();
        total / AngleKey::COUNT as f64
    }
}
