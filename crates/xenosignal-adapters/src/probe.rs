//! Probe traits — the seam between platform adapters and the host OS.
//!
//! A probe supplies complete raw snapshots; it never hands the adapter a
//! half-finished query. Real implementations wrap the platform radio
//! subsystem (and may be asynchronous internally); test and simulation
//! implementations return canned data. Either way, an `Option::None`
//! snapshot means "no handle obtainable" — radio off, permission missing,
//! or the platform API returned nothing — and the adapter must not guess
//! which.

use xenosignal_core::classify::TransportSet;

// ─── Snapshots ──────────────────────────────────────────────────────────────

/// Raw WiFi facts from the local radio subsystem.
#[derive(Debug, Clone, Default)]
pub struct WifiSnapshot {
    /// Whether the WiFi radio is administratively enabled.
    pub enabled: bool,
    /// Raw RSSI as reported, possibly the `-127` sentinel. Absent when
    /// there is no current connection.
    pub rssi: Option<i32>,
    /// Channel frequency in MHz.
    pub frequency_mhz: Option<i32>,
    /// SSID as reported, possibly still quote-wrapped.
    pub ssid: Option<String>,
}

/// One cell observed by the modem.
#[derive(Debug, Clone)]
pub struct CellReading {
    /// Whether the device is registered on (served by) this cell.
    pub registered: bool,
    /// Raw signal strength, possibly a signed-integer sentinel.
    pub dbm: Option<i32>,
    pub technology: CellTechnology,
}

/// Cell technology family, as the platform reports it per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTechnology {
    Lte,
    Wcdma,
    Gsm,
    Cdma,
    /// 5G NR. Only readable when [`AndroidCaps::nr_signal`] is set.
    Nr,
    Other,
}

/// Raw cellular facts from the telephony subsystem.
#[derive(Debug, Clone, Default)]
pub struct CellSnapshot {
    /// Network operator name.
    pub operator_name: Option<String>,
    /// Raw network-type code (platform integer constant).
    pub network_type_code: Option<i32>,
    /// All cells the modem currently observes, registered or not.
    pub cells: Vec<CellReading>,
}

/// SSID of the currently joined WiFi network, when one exists.
#[derive(Debug, Clone, Default)]
pub struct IosWifiNetwork {
    pub ssid: Option<String>,
}

// ─── Capability flags ───────────────────────────────────────────────────────

/// Android-style platform capabilities.
///
/// A closed set of flags instead of OS-version conditionals scattered
/// through the adapter. The adapter consumes the flag; how the probe
/// derives it (API level, feature query) is its own business.
#[derive(Debug, Clone, Copy, Default)]
pub struct AndroidCaps {
    /// 5G NR cell signal readings are available (API 29+).
    pub nr_signal: bool,
}

/// How the iOS-style probe looks up the current WiFi network.
///
/// Observable adapter behavior is identical either way; the variant only
/// records which platform path the probe uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiLookup {
    /// Modern async fetch of the current network (iOS 14+).
    #[default]
    Fetch,
    /// Legacy copy-current-network-info fallback.
    LegacyCopy,
}

/// iOS-style platform capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct IosCaps {
    pub wifi_lookup: WifiLookup,
}

// ─── Probe traits ───────────────────────────────────────────────────────────

/// Raw-fact supplier for the Android-style adapter.
pub trait AndroidRadioSource {
    /// WiFi subsystem snapshot. `None` when no WiFi manager handle exists.
    fn wifi(&self) -> Option<WifiSnapshot>;
    /// Telephony snapshot. `None` when no telephony handle exists.
    fn cell(&self) -> Option<CellSnapshot>;
    /// Whether the host granted phone-state access. Denial gates the cell
    /// signal readout, not the rest of the cellular reading.
    fn phone_state_permitted(&self) -> bool;
    /// Transports of the active network. `None` when there is no active
    /// network handle at all.
    fn active_transports(&self) -> Option<TransportSet>;
    fn capabilities(&self) -> AndroidCaps;
}

/// Raw-fact supplier for the iOS-style adapter.
pub trait IosRadioSource {
    /// Currently joined WiFi network, via whichever lookup the platform
    /// supports. `None` when not on WiFi (or lookup unavailable).
    fn current_wifi(&self) -> Option<IosWifiNetwork>;
    /// Carrier name of the active subscriber, if any.
    fn carrier_name(&self) -> Option<String>;
    /// Current radio access technology string, if a cellular radio handle
    /// is obtainable.
    fn radio_technology(&self) -> Option<String>;
    fn capabilities(&self) -> IosCaps;
}
