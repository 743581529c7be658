//! At-most-once advisory messages for blocked nights

use crate::eligibility::BlockReason;
use ahash::AHashSet;
use tracing::info;

/// Remembers which block reasons were already reported this session
#[derive(Debug, Default)]
pub struct AdvisoryLog {
    reported: AHashSet<BlockReason>,
}

impl AdvisoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the advisory for `reason` unless it was already shown;
    /// returns whether it was logged
    pub fn report(&mut self, reason: BlockReason) -> bool {
        if !self.reported.insert(reason) {
            return false;
        }
        info!(reason = reason.code(), "{}", reason.advisory());
        true
    }

    pub fn has_reported(&self, reason: BlockReason) -> bool {
        self.reported.contains(&reason)
    }

    /// Forget everything, used when the save is closed
    pub fn clear(&mut self) {
        self.reported.clear();
    }
}
