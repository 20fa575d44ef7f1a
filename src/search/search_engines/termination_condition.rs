//! Resource bounds for a search run. The check is made once per loop
//! iteration before a node is expanded, so a bounded run explores exactly
//! the same nodes as an unbounded one up to the point where it stops.

use crate::search::search_engines::{SearchResult, SearchStatistics};
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    expansion_limit: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl TerminationCondition {
    pub fn new(
        time_limit: Option<Duration>,
        memory_limit_mb: Option<usize>,
        expansion_limit: Option<usize>,
    ) -> Self {
        info!(
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
            expansion_limit = expansion_limit,
        );
        Self {
            time_limit,
            memory_limit_mb,
            expansion_limit,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None, None, None)
    }

    pub fn with_expansion_limit(expansion_limit: usize) -> Self {
        Self::new(None, None, Some(expansion_limit))
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&mut self) {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Returns the result to report if the search has to stop now, or `None`
    /// if it may carry on.
    pub fn should_terminate<A>(&mut self, statistics: &SearchStatistics) -> Option<SearchResult<A>> {
        if let Some(expansion_limit) = self.expansion_limit {
            if statistics.expanded_nodes() >= expansion_limit {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            self.log_if_needed();
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}
