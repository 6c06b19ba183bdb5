//! # Signal Classification
//!
//! Three independent, total classification rules:
//!
//! - **Frequency band** — WiFi channel frequency (MHz) → band label
//! - **Radio generation** — cellular technology code → generation tier
//! - **Transport precedence** — active-transport set → connection label
//!
//! ## Frequency bands
//!
//! | Freq range (MHz) | Label     |
//! |------------------|-----------|
//! | 2400–2500        | "2.4 GHz" |
//! | 4900–5900        | "5 GHz"   |
//! | 5925–7125        | "6 GHz"   |
//! | otherwise        | "Unknown" |
//!
//! Ranges are inclusive on both ends and checked in table order. Every
//! rule always returns a label from its closed set — there is no failure
//! path.

use std::fmt;

// ─── Frequency Band ─────────────────────────────────────────────────────────

/// WiFi frequency band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyBand {
    /// 2400–2500 MHz.
    Band2_4,
    /// 4900–5900 MHz.
    Band5,
    /// 5925–7125 MHz.
    Band6,
    /// Outside every known band.
    Unknown,
}

impl FrequencyBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyBand::Band2_4 => "2.4 GHz",
            FrequencyBand::Band5 => "5 GHz",
            FrequencyBand::Band6 => "6 GHz",
            FrequencyBand::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a WiFi channel frequency (MHz) into its band.
pub fn band_of(freq_mhz: i32) -> FrequencyBand {
    match freq_mhz {
        2400..=2500 => FrequencyBand::Band2_4,
        4900..=5900 => FrequencyBand::Band5,
        5925..=7125 => FrequencyBand::Band6,
        _ => FrequencyBand::Unknown,
    }
}

// ─── Radio Generation Tier ──────────────────────────────────────────────────

/// Cellular generation tier.
///
/// The closed label set every platform adapter maps into. The many-to-one
/// tables from raw technology codes (integer constants on Android, radio
/// access technology strings on iOS) live in the adapters — this is only
/// the shared target of those mappings. An absent or unrecognized code is
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioTier {
    FiveG,
    Lte,
    ThreeG,
    TwoG,
    #[default]
    Unknown,
}

impl RadioTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RadioTier::FiveG => "5G",
            RadioTier::Lte => "LTE",
            RadioTier::ThreeG => "3G",
            RadioTier::TwoG => "2G",
            RadioTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RadioTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Transport Precedence ───────────────────────────────────────────────────

/// Transports the active network may be carrying traffic over.
///
/// A probe reports which transports the OS says are active right now;
/// several may be set simultaneously (e.g. WiFi + Cellular during a
/// handover window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransportSet {
    pub wifi: bool,
    pub cellular: bool,
    pub ethernet: bool,
}

impl TransportSet {
    pub const NONE: TransportSet = TransportSet {
        wifi: false,
        cellular: false,
        ethernet: false,
    };

    pub fn wifi() -> Self {
        TransportSet {
            wifi: true,
            ..Self::NONE
        }
    }

    pub fn cellular() -> Self {
        TransportSet {
            cellular: true,
            ..Self::NONE
        }
    }

    pub fn ethernet() -> Self {
        TransportSet {
            ethernet: true,
            ..Self::NONE
        }
    }
}

/// Resolved connection type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    Wifi,
    Cellular,
    Ethernet,
    /// A network handle exists but carries no recognized transport.
    Unknown,
    /// No active-network handle could be obtained at all.
    None,
}

impl ConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Wifi => "WiFi",
            ConnectionType::Cellular => "Cellular",
            ConnectionType::Ethernet => "Ethernet",
            ConnectionType::Unknown => "Unknown",
            ConnectionType::None => "None",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the active-transport set into a single connection label.
///
/// Strict fixed priority: WiFi > Cellular > Ethernet. WiFi wins even when
/// the OS reports both WiFi and Cellular active — the precedence order,
/// not just set membership, is the observable contract.
pub fn resolve_connection_type(active: Option<&TransportSet>) -> ConnectionType {
    let Some(set) = active else {
        return ConnectionType::None;
    };
    if set.wifi {
        ConnectionType::Wifi
    } else if set.cellular {
        ConnectionType::Cellular
    } else if set.ethernet {
        ConnectionType::Ethernet
    } else {
        ConnectionType::Unknown
    }
}
