//! Reading types — the `RawMeasurement` → `NormalizedReading` contract.
//!
//! A `RawMeasurement` is the transient bundle of facts a platform adapter
//! collected for one probe; a `NormalizedReading` is the stable,
//! platform-agnostic result handed back to application code. The mapping
//! is deterministic and pure, which is what keeps the core testable apart
//! from the OS.

use serde::{Deserialize, Serialize};

use crate::classify::{ConnectionType, RadioTier, TransportSet, band_of};
use crate::sanitize::{SignalSource, sanitize};

/// Raw facts collected by a platform adapter for a single probe.
///
/// Every field is optional: a missing permission, a disabled radio, or a
/// platform capability gap all surface as plain absence. Created fresh per
/// probe and discarded after classification — nothing here persists.
#[derive(Debug, Clone, Default)]
pub struct RawMeasurement {
    /// Device-reported signal value (RSSI for WiFi, dBm for cellular),
    /// unsanitized — may still be a platform sentinel.
    pub signal_value: Option<i32>,
    /// WiFi channel frequency in MHz. WiFi probes only.
    pub frequency_mhz: Option<i32>,
    /// SSID or carrier name, as reported.
    pub network_name: Option<String>,
    /// Transports the OS reports active, when a network handle exists.
    pub active_transports: Option<TransportSet>,
}

/// The normalized output schema, stable field-for-field:
/// `{ dbm, networkName, connectionType, latencyMs, location }`.
///
/// `connection_type` is always one of the fixed label sets (band labels,
/// tier labels, or transport labels) — never raw platform text, never
/// absent. `latency_ms` and `location` are reserved for a higher-level
/// measurement layer and always `None` here; they stay in the schema so
/// the wire shape never changes. Nulls are serialized explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReading {
    pub dbm: Option<f64>,
    pub network_name: Option<String>,
    pub connection_type: String,
    pub latency_ms: Option<f64>,
    pub location: Option<serde_json::Value>,
}

impl Default for NormalizedReading {
    fn default() -> Self {
        NormalizedReading {
            dbm: None,
            network_name: None,
            connection_type: ConnectionType::Unknown.as_str().to_owned(),
            latency_ms: None,
            location: None,
        }
    }
}

impl NormalizedReading {
    /// Normalize a WiFi measurement: sanitize the RSSI and classify the
    /// channel frequency into its band label.
    pub fn wifi(raw: &RawMeasurement) -> Self {
        let connection_type = match raw.frequency_mhz {
            Some(freq) => band_of(freq).as_str().to_owned(),
            None => ConnectionType::Unknown.as_str().to_owned(),
        };
        NormalizedReading {
            dbm: sanitize(raw.signal_value, SignalSource::Wifi),
            network_name: raw.network_name.clone(),
            connection_type,
            ..Self::default()
        }
    }

    /// Normalize a cellular measurement: sanitize the dBm and carry the
    /// adapter-resolved generation tier as the connection label.
    pub fn cellular(raw: &RawMeasurement, tier: RadioTier) -> Self {
        NormalizedReading {
            dbm: sanitize(raw.signal_value, SignalSource::Cellular),
            network_name: raw.network_name.clone(),
            connection_type: tier.as_str().to_owned(),
            ..Self::default()
        }
    }

    /// A reading with a fixed label and no measured signal.
    ///
    /// Used where numeric signal strength is structurally unavailable
    /// (iOS reports the WiFi network name but never a dBm).
    pub fn unmeasured(label: &str, network_name: Option<String>) -> Self {
        NormalizedReading {
            network_name,
            connection_type: label.to_owned(),
            ..Self::default()
        }
    }
}
