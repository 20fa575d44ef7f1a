use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes pushed to the frontier
    generated_nodes: usize,
    /// Number of heuristic evaluations requested by the search
    evaluated_nodes: usize,
    /// Number of generated nodes the heuristic proved to be dead ends
    deadend_nodes: usize,
    /// Number of nodes discarded because their state was already visited or
    /// settled
    pruned_nodes: usize,
    /// Largest number of nodes held by the frontier at once
    peak_frontier_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            evaluated_nodes: 0,
            deadend_nodes: 0,
            pruned_nodes: 0,
            peak_frontier_size: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_deadend_nodes(&mut self) {
        self.deadend_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn register_frontier_size(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn deadend_nodes(&self) -> usize {
        self.deadend_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            evaluated_nodes = self.evaluated_nodes,
            deadend_nodes = self.deadend_nodes,
            pruned_nodes = self.pruned_nodes,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&mut self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
