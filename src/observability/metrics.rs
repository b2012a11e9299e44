//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shape_requests_total` (counter): resolutions by outcome
//!   (`resolved`, `bad_request`)
//! - `shape_negotiated_format_total` (counter): negotiated formats by
//!   direction (`response`, `request`) and format

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::negotiation::Negotiated;

/// Outcome label for a resolved request.
pub const RESOLVED: &str = "resolved";
/// Outcome label for a rejected request.
pub const BAD_REQUEST: &str = "bad_request";

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one resolution attempt.
pub fn record_resolution(outcome: &'static str) {
    metrics::counter!("shape_requests_total", "outcome" => outcome).increment(1);
}

/// Count the formats chosen for one request.
pub fn record_negotiated(negotiated: &Negotiated) {
    metrics::counter!(
        "shape_negotiated_format_total",
        "direction" => "response",
        "format" => negotiated.response.as_str()
    )
    .increment(1);
    metrics::counter!(
        "shape_negotiated_format_total",
        "direction" => "request",
        "format" => negotiated.request.as_str()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negotiation::SerializationFormat;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};

    fn counters(recorder: &DebuggingRecorder) -> Vec<(String, Vec<(String, String)>, u64)> {
        let mut counters: Vec<_> = recorder
            .snapshotter()
            .snapshot()
            .into_vec()
            .into_iter()
            .filter_map(|(key, _, _, value)| match value {
                DebugValue::Counter(count) => {
                    let labels = key
                        .key()
                        .labels()
                        .map(|l| (l.key().to_string(), l.value().to_string()))
                        .collect();
                    Some((key.key().name().to_string(), labels, count))
                }
                _ => None,
            })
            .collect();
        counters.sort();
        counters
    }

    fn labels(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_resolution_outcomes() {
        let recorder = DebuggingRecorder::new();
        metrics::with_local_recorder(&recorder, || {
            record_resolution(RESOLVED);
            record_resolution(RESOLVED);
            record_resolution(BAD_REQUEST);
        });

        assert_eq!(
            counters(&recorder),
            vec![
                ("shape_requests_total".to_string(), labels(&[("outcome", "bad_request")]), 1),
                ("shape_requests_total".to_string(), labels(&[("outcome", "resolved")]), 2),
            ]
        );
    }

    #[test]
    fn test_negotiated_format_labels() {
        let recorder = DebuggingRecorder::new();
        metrics::with_local_recorder(&recorder, || {
            record_negotiated(&Negotiated {
                response: SerializationFormat::Xml,
                request: SerializationFormat::Unspecified,
            });
        });

        assert_eq!(
            counters(&recorder),
            vec![
                (
                    "shape_negotiated_format_total".to_string(),
                    labels(&[("direction", "request"), ("format", "unspecified")]),
                    1,
                ),
                (
                    "shape_negotiated_format_total".to_string(),
                    labels(&[("direction", "response"), ("format", "xml")]),
                    1,
                ),
            ]
        );
    }
}
