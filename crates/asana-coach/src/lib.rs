//! # Asana-Coach
//!
//! Frame-by-frame yoga posture recognition and correction feedback from
//! externally supplied body landmarks.
//!
//! ## Pipeline
//!
//! Each camera frame flows through a fixed sequence of stages, all owned by
//! a [`PoseSession`]:
//!
//! 1. **Angles**: named joint angles are measured from landmark triples.
//! 2. **Smoothing**: a short moving window per joint suppresses estimator
//!    jitter before any threshold is consulted.
//! 3. **Transition detection**: large full-body angle jumps mark the frame
//!    as movement between postures; classification is skipped.
//! 4. **Classification**: an ordered rule chain maps the smoothed angles to
//!    a posture label, in a general-catalog or Sun-Salutation-only variant.
//! 5. **Debouncing**: a majority vote over recent labels confirms a posture
//!    only once it has been seen consistently.
//! 6. **Scoring**: the confirmed (or caller-forced) posture's ideal-angle
//!    entry yields per-joint corrections and an aggregate accuracy.
//! 7. **Feedback**: corrections and accuracy are composed into a single
//!    display string.
//!
//! The engine is synchronous and total: every frame produces a
//! [`FrameReport`], never an error.

pub mod catalog;
pub mod feedback;
pub mod history;
pub mod rules;
pub mod scoring;
pub mod sequence;
pub mod session;
pub mod smoother;
pub mod transition;

pub use catalog::*;
pub use feedback::*;
pub use history::*;
pub use rules::*;
pub use scoring::*;
pub use sequence::*;
pub use session::*;
pub use smoother::*;
pub use transition::*;
