//! # Android-style Adapter
//!
//! Full signal acquisition from raw telephony/WiFi snapshots: sentinel
//! filtering via the core sanitizer, frequency-band labelling, the integer
//! network-type → generation-tier table, and registered-cell iteration for
//! the active dBm (first valid reading from a registered cell wins).
//!
//! Permission denial and missing handles both surface as absence — the
//! adapter never converts them into errors (the host cannot tell *why* a
//! field is missing, by design of the output schema).

use tracing::debug;

use xenosignal_core::classify::{ConnectionType, RadioTier, resolve_connection_type};
use xenosignal_core::enabled_flag;
use xenosignal_core::reading::{NormalizedReading, RawMeasurement};
use xenosignal_core::sanitize::{SignalSource, sanitize};

use crate::probe::{AndroidRadioSource, CellSnapshot, CellTechnology};

/// Android `TelephonyManager.NETWORK_TYPE_*` constants the tier table
/// recognizes.
pub mod network_type {
    pub const GPRS: i32 = 1;
    pub const EDGE: i32 = 2;
    pub const HSDPA: i32 = 8;
    pub const HSUPA: i32 = 9;
    pub const HSPA: i32 = 10;
    pub const LTE: i32 = 13;
    pub const HSPAP: i32 = 15;
    pub const NR: i32 = 20;
}

/// Map a raw network-type code to its generation tier.
///
/// Many-to-one and total: the legacy HSPA family collapses to 3G, anything
/// outside the known set (or an absent code) is `Unknown`.
pub fn tier_of_code(code: Option<i32>) -> RadioTier {
    use network_type::*;
    match code {
        Some(NR) => RadioTier::FiveG,
        Some(LTE) => RadioTier::Lte,
        Some(HSPAP | HSPA | HSDPA | HSUPA) => RadioTier::ThreeG,
        Some(EDGE | GPRS) => RadioTier::TwoG,
        _ => RadioTier::Unknown,
    }
}

/// Android-style adapter over a raw-fact probe.
pub struct AndroidAdapter<S> {
    source: S,
}

impl<S: AndroidRadioSource> AndroidAdapter<S> {
    pub fn new(source: S) -> Self {
        AndroidAdapter { source }
    }

    /// `getWifiSignal` — normalized WiFi reading, or `None` when the radio
    /// is off, no handle exists, or the RSSI is the invalid-reading
    /// sentinel.
    pub fn wifi_signal(&self) -> Option<NormalizedReading> {
        let snapshot = self.source.wifi()?;
        if !snapshot.enabled {
            return None;
        }

        let raw = RawMeasurement {
            signal_value: snapshot.rssi,
            frequency_mhz: snapshot.frequency_mhz,
            network_name: snapshot.ssid.as_deref().map(strip_ssid_quotes),
            active_transports: None,
        };
        let reading = NormalizedReading::wifi(&raw);
        // No connection or a sentinel RSSI: no reading at all, rather than
        // a reading with a fabricated signal level.
        if reading.dbm.is_none() {
            return None;
        }
        Some(reading)
    }

    /// `getCellularSignal` — normalized cellular reading. The tier label is
    /// always resolved; dBm is populated only when phone-state access is
    /// granted and a registered cell has a valid reading.
    pub fn cellular_signal(&self) -> Option<NormalizedReading> {
        let snapshot = self.source.cell()?;
        let tier = tier_of_code(snapshot.network_type_code);

        let dbm = if self.source.phone_state_permitted() {
            self.registered_cell_dbm(&snapshot)
        } else {
            debug!("phone-state access not granted, cellular dBm absent");
            None
        };

        let raw = RawMeasurement {
            signal_value: dbm,
            network_name: snapshot.operator_name.clone(),
            ..Default::default()
        };
        Some(NormalizedReading::cellular(&raw, tier))
    }

    /// Raw signal of the first registered cell with a valid (non-sentinel)
    /// reading.
    fn registered_cell_dbm(&self, snapshot: &CellSnapshot) -> Option<i32> {
        let caps = self.source.capabilities();
        for cell in &snapshot.cells {
            if !cell.registered {
                continue;
            }
            if cell.technology == CellTechnology::Nr && !caps.nr_signal {
                continue;
            }
            if cell.technology == CellTechnology::Other {
                continue;
            }
            if sanitize(cell.dbm, SignalSource::Cellular).is_some() {
                return cell.dbm;
            }
        }
        None
    }

    /// `isWifiEnabled` — radio flag pass-through, absent handle → `false`.
    pub fn wifi_enabled(&self) -> bool {
        enabled_flag(self.source.wifi().map(|s| s.enabled))
    }

    /// `isCellularEnabled` — whether the active network's transport set
    /// includes Cellular, absent handle → `false`.
    pub fn cellular_enabled(&self) -> bool {
        enabled_flag(self.source.active_transports().map(|t| t.cellular))
    }

    /// `getConnectionType` — strict WiFi > Cellular > Ethernet precedence
    /// over the active-transport set.
    pub fn connection_type(&self) -> ConnectionType {
        resolve_connection_type(self.source.active_transports().as_ref())
    }
}

/// Remove the quote pair Android wraps SSIDs in, when both are present.
fn strip_ssid_quotes(ssid: &str) -> String {
    ssid.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(ssid)
        .to_owned()
}
