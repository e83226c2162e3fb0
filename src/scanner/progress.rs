// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use crate::models::{CheckOutcome, Target};

/// Observer for per-check progress
///
/// Called from the pool's aggregating task, never concurrently with itself
/// for the same target.
pub trait Progress: Send + Sync {
    /// A check is about to start
    fn on_start(&self, _target: &Target) {}

    /// A check finished and its outcome was recorded
    fn on_finish(&self, _outcome: &CheckOutcome) {}
}

/// Progress observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}
