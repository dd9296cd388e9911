//! Temporal smoothing of per-joint angle readings.
//!
//! Pose estimators jitter by several degrees frame to frame even on a held
//! posture. Every angle is pushed through a short moving window before any
//! rule threshold or tolerance comparison sees it.

use std::collections::VecDeque;

use asana_core::{AngleKey, AngleVector, Error, Result};

/// Smoother configuration
#[derive(Debug, Clone)]
pub struct SmootherConfig {
    /// Moving-window length in frames
    pub window: usize,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self { window: 5 }
    }
}

impl SmootherConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::Config("smoothing window must be at least 1".into()));
        }
        Ok(())
    }
}

/// Per-key moving-window mean over raw angle values.
///
/// State is entirely instance-local; independent sessions get independent
/// smoothers.
#[derive(Debug)]
pub struct AngleSmoother {
    config: SmootherConfig,
    windows: [VecDeque<f64>; AngleKey::COUNT],
}

impl AngleSmoother {
    pub fn new(config: SmootherConfig) -> Self {
        Self {
            config,
            windows: Default::default(),
        }
    }

    /// Push a raw reading for one key and return the window mean.
    pub fn smooth(&mut self, key: AngleKey, raw: f64) -> f64 {
        let window = &mut self.windows[key as usize];
        window.push_back(raw);
        if window.len() > self.config.window {
            window.pop_front();
        }
        window.iter().sum::<f64>() / window.len() as f64
    }

    /// Smooth a whole frame's angle vector, key by key.
    pub fn smooth_vector(&mut self, raw: &AngleVector) -> AngleVector {
        let mut out = AngleVector::zeroed();
        for (key, value) in raw.iter() {
            out.set(key, self.smooth(key, value));
        }
        out
    }

    /// Drop all window state, as at the start of a fresh session.
    pub fn reset(&mut self) {
        for window in &mut self.windows {
            window.clear();
        }
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::new(SmootherConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_to_constant_input() {
        let mut smoother = AngleSmoother::default();
        let mut last = 0.0;
        for _ in 0..5 {
            last = smoother.smooth(AngleKey::LeftKnee, 170.0);
        }
        assert!((last - 170.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounded_by_observed_extremes() {
        let mut smoother = AngleSmoother::default();
        let inputs = [10.0, 90.0, 40.0, 120.0, 60.0, 75.0, 30.0];
        for raw in inputs {
            let smoothed = smoother.smooth(AngleKey::RightElbow, raw);
            assert!(smoothed >= 10.0 && smoothed <= 120.0);
        }
    }

    #[test]
    fn test_window_eviction() {
        let mut smoother = AngleSmoother::new(SmootherConfig { window: 3 });
        for raw in [0.0, 0.0, 0.0, 90.0, 90.0, 90.0] {
            smoother.smooth(AngleKey::LeftWaist, raw);
        }
        // Only the last three readings remain in the window
        assert!((smoother.smooth(AngleKey::LeftWaist, 90.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut smoother = AngleSmoother::default();
        smoother.smooth(AngleKey::LeftElbow, 180.0);
        let other = smoother.smooth(AngleKey::RightElbow, 20.0);
        assert!((other - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(SmootherConfig { window: 0 }.validate().is_err());
        assert!(SmootherConfig::default().validate().is_ok());
    }
}
