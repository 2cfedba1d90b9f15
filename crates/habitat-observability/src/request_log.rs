//! Request performance logging: mode, cluster, subset size, result count,
//! fallbacks, latency.

use std::collections::VecDeque;
use std::time::Duration;

use habitat_core::models::{Recommendation, SelectionMode, SelectionOutcome};
use serde::{Deserialize, Serialize};

/// A single request log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestLogEntry {
    pub mode: SelectionMode,
    pub cluster: String,
    pub active_subset_size: usize,
    pub result_count: usize,
    pub fallback_applied: bool,
    pub parse_fallback: bool,
    /// Diverse picks that came back shorter than their target.
    pub short_pick: bool,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl RequestLogEntry {
    /// Summarize a served recommendation, timestamped now.
    pub fn from_recommendation(recommendation: &Recommendation, latency: Duration) -> Self {
        let short_pick = match &recommendation.outcome {
            SelectionOutcome::Diverse(pick) => pick.is_short(),
            SelectionOutcome::Ranked(_) => false,
        };
        Self {
            mode: recommendation.outcome.mode(),
            cluster: recommendation.applied.cluster.to_string(),
            active_subset_size: recommendation.applied.active_subset_size,
            result_count: recommendation.outcome.len(),
            fallback_applied: recommendation.applied.fallback_applied,
            parse_fallback: recommendation.applied.weights.parse_fallback,
            short_pick,
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only request log with a bounded size.
#[derive(Debug, Clone)]
pub struct RequestLog {
    entries: VecDeque<RequestLogEntry>,
    /// Maximum entries to retain (ring buffer behavior).
    max_entries: usize,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::with_capacity(habitat_core::config::defaults::DEFAULT_REQUEST_LOG_CAPACITY)
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Record a request.
    pub fn record(&mut self, entry: RequestLogEntry) {
        tracing::debug!(
            event = "request_logged",
            mode = ?entry.mode,
            cluster = %entry.cluster,
            active = entry.active_subset_size,
            results = entry.result_count,
            fallback = entry.fallback_applied,
            latency_us = entry.latency.as_micros() as u64,
            "request logged"
        );

        self.entries.push_back(entry);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Oldest first.
    pub fn entries(&self) -> &VecDeque<RequestLogEntry> {
        &self.entries
    }

    /// Average latency across all logged requests.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let idx = ((p.clamp(0.0, 1.0) * (latencies.len() - 1) as f64).round() as usize)
            .min(latencies.len() - 1);
        latencies[idx]
    }

    /// Fraction of requests whose cluster matched nothing.
    pub fn fallback_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let fallbacks = self.entries.iter().filter(|e| e.fallback_applied).count();
        fallbacks as f64 / self.entries.len() as f64
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

impl Default for RequestLog {
    fn default() -> Self {
        Self::new()
    }
}
