//! Majority-vote debouncing of per-frame classification labels.
//!
//! Raw classifier output flickers when a posture sits near a rule boundary.
//! A bounded ring of recent labels is kept; a label is only surfaced as
//! confirmed once it holds a majority of the ring, otherwise the previous
//! frame's label is held. This trades one frame of latency for stability
//! against single-frame misclassification.

use std::collections::VecDeque;

use asana_core::{Error, Result};

/// Label surfaced before enough frames have been seen to confirm anything.
pub const WAITING: &str = "Waiting for pose...";

/// History debouncer configuration
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Ring capacity in frames; confirmation needs ceil(capacity/2) votes
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 7 }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("history capacity must be at least 1".into()));
        }
        Ok(())
    }

    fn confirmation_threshold(&self) -> usize {
        (self.capacity + 1) / 2
    }
}

/// Bounded ring of raw posture labels with majority-vote confirmation.
#[derive(Debug)]
pub struct PoseHistory {
    config: HistoryConfig,
    buffer: VecDeque<&'static str>,
}

impl PoseHistory {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            buffer: VecDeque::new(),
        }
    }

    /// Append a raw label and return the confirmed label for this frame.
    ///
    /// The most frequent label wins if its count reaches the confirmation
    /// threshold. Ties are broken deterministically: scanning the ring
    /// oldest to newest, the first label to reach the maximal count wins.
    /// Below threshold the second-to-last entry is held, or [`WAITING`]
    /// while the ring has fewer than two entries.
    pub fn confirm(&mut self, label: &'static str) -> &'static str {
        self.buffer.push_back(label);
        if self.buffer.len() > self.config.capacity {
            self.buffer.pop_front();
        }

        let mut best_label = label;
        let mut best_count = 0;
        for &candidate in &self.buffer {
            let count = self.buffer.iter().filter(|&&l| l == candidate).count();
            if count > best_count {
                best_count = count;
                best_label = candidate;
            }
        }

        if best_count >= self.config.confirmation_threshold() {
            return best_label;
        }

        if self.buffer.len() >= 2 {
            self.buffer[self.buffer.len() - 2]
        } else {
            WAITING
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for PoseHistory {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
