//! Classification timing and accuracy metrics

use crate::pipeline::MatchResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

const MAX_MEASUREMENTS: usize = 10_000;

/// Individual performance measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMeasurement {
    pub operation: String,
    pub duration_ms: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub correlation_id: Option<Uuid>,
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Statistical summary of performance measurements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub operation: String,
    pub count: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub std_dev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

/// Thread-safe metrics collector
pub struct MetricsCollector {
    measurements: Mutex<Vec<PerformanceMeasurement>>,
    enabled: bool,
}

impl MetricsCollector {
    pub fn new(enabled: bool) -> Self {
        Self {
            measurements: Mutex::new(Vec::new()),
            enabled,
        }
    }

    pub fn record(&self, operation: &str, duration: Duration, correlation_id: Option<Uuid>) {
        self.record_with_metadata(operation, duration, correlation_id, HashMap::new());
    }

    pub fn record_with_metadata(
        &self,
        operation: &str,
        duration: Duration,
        correlation_id: Option<Uuid>,
        metadata: HashMap<String, serde_json::Value>,
    ) {
        if !self.enabled {
            return;
        }

        let measurement = PerformanceMeasurement {
            operation: operation.to_string(),
            duration_ms: duration.as_secs_f64() * 1000.0,
            timestamp: chrono::Utc::now(),
            correlation_id,
            metadata,
        };

        if let Ok(mut measurements) = self.measurements.lock() {
            measurements.push(measurement);

            // Keep only the most recent half once the cap is hit
            if measurements.len() > MAX_MEASUREMENTS {
                measurements.drain(0..MAX_MEASUREMENTS / 2);
            }
        }
    }

    /// Records a classification outcome. `expected` marks it correct or not.
    pub fn record_classification(
        &self,
        operation: &str,
        result: &MatchResult,
        expected: Option<&str>,
        correlation_id: Option<Uuid>,
    ) {
        let mut metadata = HashMap::new();
        metadata.insert("label".to_string(), serde_json::json!(result.label.to_string()));
        metadata.insert("confidence".to_string(), serde_json::json!(result.confidence));
        if let Some(expected) = expected {
            let correct = result.label.as_template() == Some(expected);
            metadata.insert("correct".to_string(), serde_json::json!(correct));
        }

        self.record_with_metadata(
            operation,
            Duration::from_secs_f64(result.execution_time_ms.max(0.0) / 1000.0),
            correlation_id,
            metadata,
        );
    }

    pub fn get_measurements(&self, operation: &str) -> Vec<PerformanceMeasurement> {
        match self.measurements.lock() {
            Ok(measurements) => measurements
                .iter()
                .filter(|m| m.operation == operation)
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Fraction of measurements for `operation` marked correct, if any were.
    pub fn accuracy(&self, operation: &str) -> Option<f64> {
        let outcomes: Vec<bool> = self
            .get_measurements(operation)
            .iter()
            .filter_map(|m| m.metadata.get("correct").and_then(|v| v.as_bool()))
            .collect();
        if outcomes.is_empty() {
            return None;
        }
        let correct = outcomes.iter().filter(|&&c| c).count();
        Some(correct as f64 / outcomes.len() as f64)
    }

    pub fn calculate_stats(&self, operation: &str) -> Option<PerformanceStats> {
        let mut durations: Vec<f64> = self
            .get_measurements(operation)
            .iter()
            .map(|m| m.duration_ms)
            .collect();
        if durations.is_empty() {
            return None;
        }
        durations.sort_by(|a, b| a.total_cmp(b));

        let count = durations.len();
        let mean = durations.iter().sum::<f64>() / count as f64;
        let variance = durations
            .iter()
            .map(|d| {
                let diff = d - mean;
                diff * diff
            })
            .sum::<f64>()
            / count as f64;

        let median = if count % 2 == 0 {
            (durations[count / 2 - 1] + durations[count / 2]) / 2.0
        } else {
            durations[count / 2]
        };

        let percentile = |p: f64| durations[((count as f64 * p) as usize).min(count - 1)];

        Some(PerformanceStats {
            operation: operation.to_string(),
            count,
            mean_ms: mean,
            median_ms: median,
            std_dev_ms: variance.sqrt(),
            min_ms: durations[0],
            max_ms: durations[count - 1],
            p95_ms: percentile(0.95),
            p99_ms: percentile(0.99),
        })
    }

    pub fn measurement_count(&self) -> usize {
        self.measurements.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Every recorded measurement as JSON, oldest first.
    pub fn export_measurements(&self) -> serde_json::Result<serde_json::Value> {
        match self.measurements.lock() {
            Ok(measurements) => serde_json::to_value(&*measurements),
            Err(_) => Ok(serde_json::Value::Array(Vec::new())),
        }
    }
}
