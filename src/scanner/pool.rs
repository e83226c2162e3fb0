// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Bounded pool for concurrent checks
//!
//! Fans targets out to at most `concurrency` checks in flight and gathers
//! outcomes in completion order. `buffer_unordered` is the only limiter.
//! Each check runs as its own tokio task and resolves to an outcome
//! carrying its own URL, so no task-to-target table is needed.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use parking_lot::RwLock;
use tracing::{info, warn};

use super::checker::Checker;
use super::progress::Progress;
use crate::http::Transport;
use crate::models::{CheckOutcome, ResultSet, Target};

/// Pool statistics
#[derive(Debug, Clone, Default)]
pub struct PoolStats {
    /// Checks dispatched
    pub checks_started: u64,
    /// Checks whose slot was released
    pub checks_completed: u64,
    /// Checks currently in flight
    pub active_checks: u64,
    /// Peak concurrent checks
    pub peak_concurrent: u64,
    /// Check tasks that panicked
    pub panicked: u64,
}

/// Bookkeeping for one in-flight check; dropping it marks the check done
struct CheckSlot {
    stats: Arc<RwLock<PoolStats>>,
}

impl Drop for CheckSlot {
    fn drop(&mut self) {
        let mut stats = self.stats.write();
        stats.checks_completed += 1;
        stats.active_checks = stats.active_checks.saturating_sub(1);
    }
}

/// Concurrent checker pool
pub struct CheckerPool<T> {
    checker: Arc<Checker<T>>,
    /// Maximum concurrent checks
    concurrency: usize,
    /// Pool statistics
    stats: Arc<RwLock<PoolStats>>,
}

impl<T: Transport + 'static> CheckerPool<T> {
    /// Create a pool; a concurrency of zero is raised to one
    pub fn new(checker: Checker<T>, concurrency: usize) -> Self {
        let concurrency = concurrency.max(1);
        Self {
            checker: Arc::new(checker),
            concurrency,
            stats: Arc::new(RwLock::new(PoolStats::default())),
        }
    }

    /// Check every target and return all outcomes, in completion order
    ///
    /// Exactly one outcome is produced per target, whatever happens to the
    /// individual request.
    pub async fn run(&self, targets: Vec<Target>, progress: &dyn Progress) -> ResultSet {
        let total = targets.len();
        let started = Instant::now();
        info!(targets = total, concurrency = self.concurrency, "starting scan");

        let mut results = ResultSet::with_capacity(total);
        let mut completions = std::pin::pin!(stream::iter(targets)
            .map(move |target| self.dispatch(target, progress))
            .buffer_unordered(self.concurrency));

        while let Some(outcome) = completions.next().await {
            progress.on_finish(&outcome);
            results.push(outcome);
        }

        let summary = results.summary();
        info!(
            total = summary.total,
            protected = summary.protected,
            vulnerable = summary.vulnerable,
            unreachable = summary.unreachable,
            errors = summary.errors,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scan complete"
        );

        results
    }

    async fn dispatch(&self, target: Target, progress: &dyn Progress) -> CheckOutcome {
        let slot = self.begin();

        progress.on_start(&target);

        let checker = Arc::clone(&self.checker);
        let task_target = target.clone();
        let handle = tokio::spawn(async move { checker.check(&task_target).await });

        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(url = %target, error = %e, "check task failed");
                self.stats.write().panicked += 1;
                CheckOutcome::error(target.as_str(), format!("check task failed: {}", e))
            }
        };

        drop(slot);
        outcome
    }

    fn begin(&self) -> CheckSlot {
        let mut stats = self.stats.write();
        stats.checks_started += 1;
        stats.active_checks += 1;
        if stats.active_checks > stats.peak_concurrent {
            stats.peak_concurrent = stats.active_checks;
        }
        drop(stats);

        CheckSlot {
            stats: Arc::clone(&self.stats),
        }
    }

    /// Get pool statistics
    pub fn stats(&self) -> PoolStats {
        self.stats.read().clone()
    }

    /// Get maximum concurrent checks
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}
