//! Reading sanitizer — sentinel-value filtering for raw signal readings.
//!
//! Platform radio subsystems encode "no valid reading" as reserved numeric
//! values rather than as a missing field: Android's `WifiInfo.rssi` reports
//! `-127`, and cell signal strengths report the signed-integer extremes.
//! The sanitizer collapses those sentinels into plain absence so that the
//! rest of the pipeline only ever sees real measurements.
//!
//! Sanitization intentionally loses the distinction between "radio
//! disabled" and "sentinel reading" — both surface as `None` in the
//! output schema.

/// WiFi RSSI value reserved by the platform for "no valid reading".
pub const WIFI_INVALID_RSSI: i32 = -127;

/// Which radio subsystem produced a raw reading.
///
/// The sentinel set differs per source: WiFi has a single reserved RSSI,
/// cellular uses the signed-integer extremes as its "unknown" encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalSource {
    Wifi,
    Cellular,
}

/// Validate a single raw signal reading.
///
/// Returns `None` for an absent input or a sentinel value, otherwise the
/// reading reinterpreted as dBm. Pure and idempotent: re-sanitizing an
/// already-valid value is a no-op.
pub fn sanitize(raw: Option<i32>, source: SignalSource) -> Option<f64> {
    let value = raw?;
    let invalid = match source {
        SignalSource::Wifi => value == WIFI_INVALID_RSSI,
        SignalSource::Cellular => value == i32::MAX || value == i32::MIN,
    };
    if invalid { None } else { Some(f64::from(value)) }
}
