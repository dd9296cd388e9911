//! Per-session frame pipeline.
//!
//! A [`PoseSession`] owns every piece of mutable per-session state: the
//! angle smoother, the transition detector, and the label history. One
//! instance per active camera session, called synchronously once per frame;
//! concurrent sessions each own their instance, so no locking is involved.

use asana_core::{AngleVector, LandmarkFrame, Result, SessionId, Timestamp};
use serde::Serialize;
use tracing::{debug, trace};

use crate::feedback;
use crate::history::{HistoryConfig, PoseHistory, WAITING};
use crate::rules::{classify, RuleMode};
use crate::scoring::{score_against, Correction};
use crate::smoother::{AngleSmoother, SmootherConfig};
use crate::transition::{TransitionConfig, TransitionDetector};

/// Label reported while the practitioner is moving between postures.
pub const TRANSITIONING: &str = "Transitioning...";

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub smoother: SmootherConfig,
    pub transition: TransitionConfig,
    pub history: HistoryConfig,
    pub mode: RuleMode,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        self.smoother.validate()?;
        self.history.validate()?;
        Ok(())
    }
}

/// The per-frame result surfaced to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    /// Confirmed posture name, forced target, or a pipeline sentinel
    pub pose: String,
    /// At most three corrections, worst first
    pub corrections: Vec<Correction>,
    /// 0-100
    pub accuracy: u8,
    /// Single display string; empty on waiting/transition frames
    pub feedback: String,
    pub timestamp: Timestamp,
}

impl FrameReport {
    fn sentinel(label: &str) -> Self {
        Self {
            pose: label.to_string(),
            corrections: Vec::new(),
            accuracy: 0,
            feedback: String::new(),
            timestamp: Timestamp::now(),
        }
    }
}

/// One detection session: all per-session state plus the pipeline driver.
pub struct PoseSession {
    id: SessionId,
    config: SessionConfig,
    smoother: AngleSmoother,
    transition: TransitionDetector,
    history: PoseHistory,
    target: Option<String>,
    last_confirmed: Option<String>,
    frames: u64,
}

impl PoseSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            id: SessionId::new(),
            smoother: AngleSmoother::new(config.smoother.clone()),
            transition: TransitionDetector::new(config.transition.clone()),
            history: PoseHistory::new(config.history.clone()),
            config,
            target: None,
            last_confirmed: None,
            frames: 0,
        })
    }

    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default()).expect("default configuration is valid")
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Force scoring against a specific posture, bypassing classification.
    pub fn set_target(&mut self, posture: impl Into<String>) {
        self.target = Some(posture.into());
    }

    /// Return to automatic classification.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Classify one landmark frame and produce its report.
    ///
    /// Total: every frame yields a report, never an error. Empty frames
    /// short-circuit without touching smoother or history state.
    pub fn process(&mut self, frame: &LandmarkFrame) -> FrameReport {
        if frame.is_empty() {
            return FrameReport::sentinel(WAITING);
        }

        self.frames += 1;
        let raw = AngleVector::from_frame(frame);
        let smoothed = self.smoother.smooth_vector(&raw);

        // Forced-target practice: always report the chosen posture and skip
        // transition detection and debouncing entirely.
        if let Some(target) = self.target.clone() {
            let score = score_against(&smoothed, &target);
            let feedback = feedback::compose(&score.corrections, score.accuracy);
            trace!(session = %self.id.0, target = %target, accuracy = score.accuracy, "forced-target frame");
            return FrameReport {
                pose: target,
                corrections: score.corrections,
                accuracy: score.accuracy,
                feedback,
                timestamp: Timestamp::now(),
            };
        }

        if self.transition.observe(&smoothed) {
            debug!(session = %self.id.0, frame = self.frames, "movement detected, classification skipped");
            return FrameReport::sentinel(TRANSITIONING);
        }

        let detected = classify(&smoothed, self.config.mode);
        let confirmed = self.history.confirm(detected);

        if self.last_confirmed.as_deref() != Some(confirmed) {
            debug!(session = %self.id.0, pose = confirmed, "confirmed posture changed");
            self.last_confirmed = Some(confirmed.to_string());
        }

        let score = score_against(&smoothed, confirmed);
        let feedback = feedback::compose(&score.corrections, score.accuracy);
        trace!(session = %self.id.0, pose = confirmed, accuracy = score.accuracy, "frame scored");

        FrameReport {
            pose: confirmed.to_string(),
            corrections: score.corrections,
            accuracy: score.accuracy,
            feedback,
            timestamp: Timestamp::now(),
        }
    }

    /// Discard all accumulated per-session state.
    ///
    /// Sessions are not resumable: a reset session behaves exactly like a
    /// freshly constructed one. The forced target, being caller
    /// configuration rather than accumulated state, is kept.
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.transition.reset();
        self.history.clear();
        self.last_confirmed = None;
        self.frames = 0;
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }
}
