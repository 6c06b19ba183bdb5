//! # iOS-style Adapter
//!
//! The platform exposes no numeric signal strength without private
//! entitlements, so every reading here carries an absent dBm — that is a
//! platform capability limit, not a defect. What *is* available: the
//! current WiFi network name, the carrier name, and a radio access
//! technology string that maps onto the shared generation-tier label set.

use tracing::debug;

use xenosignal_core::classify::{ConnectionType, RadioTier};
use xenosignal_core::reading::NormalizedReading;

use crate::probe::IosRadioSource;

/// `CTRadioAccessTechnology*` strings the tier table recognizes.
pub mod radio_access {
    pub const NR_NSA: &str = "CTRadioAccessTechnologyNRNSA";
    pub const NR: &str = "CTRadioAccessTechnologyNR";
    pub const LTE: &str = "CTRadioAccessTechnologyLTE";
    pub const EHRPD: &str = "CTRadioAccessTechnologyeHRPD";
    pub const HSUPA: &str = "CTRadioAccessTechnologyHSUPA";
    pub const HSDPA: &str = "CTRadioAccessTechnologyHSDPA";
    pub const WCDMA: &str = "CTRadioAccessTechnologyWCDMA";
    pub const EDGE: &str = "CTRadioAccessTechnologyEdge";
    pub const GPRS: &str = "CTRadioAccessTechnologyGPRS";
    pub const CDMA_1X: &str = "CTRadioAccessTechnologyCDMA1x";
}

/// Map a radio access technology string to its generation tier.
///
/// Many-to-one and total; an absent or unrecognized technology is
/// `Unknown`.
pub fn tier_of_technology(technology: Option<&str>) -> RadioTier {
    use radio_access::*;
    match technology {
        Some(NR_NSA | NR) => RadioTier::FiveG,
        Some(LTE) => RadioTier::Lte,
        Some(EHRPD | HSUPA | HSDPA | WCDMA) => RadioTier::ThreeG,
        Some(EDGE | GPRS | CDMA_1X) => RadioTier::TwoG,
        _ => RadioTier::Unknown,
    }
}

/// iOS-style adapter over a raw-fact probe.
pub struct IosAdapter<S> {
    source: S,
}

impl<S: IosRadioSource> IosAdapter<S> {
    pub fn new(source: S) -> Self {
        IosAdapter { source }
    }

    /// `getWifiSignal` — when a current-network handle exists, a reading
    /// with the SSID and the fixed "WiFi" label; dBm always absent.
    pub fn wifi_signal(&self) -> Option<NormalizedReading> {
        let network = self.source.current_wifi()?;
        debug!(lookup = ?self.source.capabilities().wifi_lookup, "wifi network handle obtained");
        Some(NormalizedReading::unmeasured("WiFi", network.ssid))
    }

    /// `getCellularSignal` — carrier name and tier label; dBm always
    /// absent. Always produces a reading (the telephony handle itself is
    /// always constructible on this platform).
    pub fn cellular_signal(&self) -> Option<NormalizedReading> {
        let technology = self.source.radio_technology();
        let tier = tier_of_technology(technology.as_deref());
        Some(NormalizedReading::unmeasured(
            tier.as_str(),
            self.source.carrier_name(),
        ))
    }

    /// `isWifiEnabled` — whether a current WiFi network handle exists.
    pub fn wifi_enabled(&self) -> bool {
        self.source.current_wifi().is_some()
    }

    /// `isCellularEnabled` — whether a radio technology is reported.
    pub fn cellular_enabled(&self) -> bool {
        self.source.radio_technology().is_some()
    }

    /// `getConnectionType` — WiFi first, then cellular, else "None". The
    /// platform has no Ethernet and no transport-set handle; the shared
    /// precedence order still holds.
    pub fn connection_type(&self) -> ConnectionType {
        if self.source.current_wifi().is_some() {
            ConnectionType::Wifi
        } else if self.source.radio_technology().is_some() {
            ConnectionType::Cellular
        } else {
            ConnectionType::None
        }
    }
}
