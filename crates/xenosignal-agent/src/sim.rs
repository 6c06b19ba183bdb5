//! Simulated probe sources — fake but realistic radio data for local
//! development, no real radio hardware required.

use rand::Rng;

use xenosignal_adapters::android::network_type;
use xenosignal_adapters::ios::radio_access;
use xenosignal_adapters::probe::{
    AndroidCaps, AndroidRadioSource, CellReading, CellSnapshot, CellTechnology, IosCaps,
    IosRadioSource, IosWifiNetwork, WifiSnapshot,
};
use xenosignal_core::classify::TransportSet;

/// Simulated Android-style device: on WiFi with an LTE radio registered
/// in the background. Signal levels jitter between probes the way a real
/// device's do.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAndroidSource;

impl AndroidRadioSource for SimulatedAndroidSource {
    fn wifi(&self) -> Option<WifiSnapshot> {
        let mut rng = rand::rng();
        Some(WifiSnapshot {
            enabled: true,
            rssi: Some(-50 - rng.random_range(0..20)),
            frequency_mhz: Some([2437, 5180, 5955][rng.random_range(0..3)]),
            ssid: Some("\"xenosignal-dev\"".into()),
        })
    }

    fn cell(&self) -> Option<CellSnapshot> {
        let mut rng = rand::rng();
        Some(CellSnapshot {
            operator_name: Some("T-Mobile".into()),
            network_type_code: Some(network_type::LTE),
            cells: vec![
                // A neighbour cell the device is not served by.
                CellReading {
                    registered: false,
                    dbm: Some(-110 - rng.random_range(0..10)),
                    technology: CellTechnology::Lte,
                },
                CellReading {
                    registered: true,
                    dbm: Some(-85 - rng.random_range(0..15)),
                    technology: CellTechnology::Lte,
                },
            ],
        })
    }

    fn phone_state_permitted(&self) -> bool {
        true
    }

    fn active_transports(&self) -> Option<TransportSet> {
        Some(TransportSet {
            wifi: true,
            cellular: true,
            ethernet: false,
        })
    }

    fn capabilities(&self) -> AndroidCaps {
        AndroidCaps { nr_signal: true }
    }
}

/// Simulated iOS-style device on WiFi with an LTE carrier.
#[derive(Debug, Clone, Default)]
pub struct SimulatedIosSource;

impl IosRadioSource for SimulatedIosSource {
    fn current_wifi(&self) -> Option<IosWifiNetwork> {
        Some(IosWifiNetwork {
            ssid: Some("xenosignal-dev".into()),
        })
    }

    fn carrier_name(&self) -> Option<String> {
        Some("O2".into())
    }

    fn radio_technology(&self) -> Option<String> {
        Some(radio_access::LTE.into())
    }

    fn capabilities(&self) -> IosCaps {
        IosCaps::default()
    }
}
