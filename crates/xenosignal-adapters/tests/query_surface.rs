//! Query surface integration tests.
//!
//! Drives both platform adapters end-to-end through the string dispatch
//! layer, exercising the scenarios application code actually hits: a live
//! WiFi connection, sentinel readings, permission denial, and the
//! capability-limited iOS platform.

use xenosignal_adapters::android::{AndroidAdapter, network_type};
use xenosignal_adapters::dispatch::{DispatchError, QueryResponse, dispatch};
use xenosignal_adapters::ios::{IosAdapter, radio_access};
use xenosignal_adapters::probe::{
    AndroidCaps, AndroidRadioSource, CellReading, CellSnapshot, CellTechnology, IosCaps,
    IosRadioSource, IosWifiNetwork, WifiSnapshot,
};
use xenosignal_core::classify::TransportSet;

#[derive(Default)]
struct AndroidFixture {
    wifi: Option<WifiSnapshot>,
    cell: Option<CellSnapshot>,
    permitted: bool,
    transports: Option<TransportSet>,
    caps: AndroidCaps,
}

impl AndroidRadioSource for AndroidFixture {
    fn wifi(&self) -> Option<WifiSnapshot> {
        self.wifi.clone()
    }
    fn cell(&self) -> Option<CellSnapshot> {
        self.cell.clone()
    }
    fn phone_state_permitted(&self) -> bool {
        self.permitted
    }
    fn active_transports(&self) -> Option<TransportSet> {
        self.transports
    }
    fn capabilities(&self) -> AndroidCaps {
        self.caps
    }
}

#[derive(Default)]
struct IosFixture {
    wifi: Option<IosWifiNetwork>,
    carrier: Option<String>,
    technology: Option<String>,
}

impl IosRadioSource for IosFixture {
    fn current_wifi(&self) -> Option<IosWifiNetwork> {
        self.wifi.clone()
    }
    fn carrier_name(&self) -> Option<String> {
        self.carrier.clone()
    }
    fn radio_technology(&self) -> Option<String> {
        self.technology.clone()
    }
    fn capabilities(&self) -> IosCaps {
        IosCaps::default()
    }
}

// ────────────────────────────────────────────────────────────────
// 1. Android device on a 5 GHz access point
// ────────────────────────────────────────────────────────────────

#[test]
fn android_on_wifi_full_surface() {
    let adapter = AndroidAdapter::new(AndroidFixture {
        wifi: Some(WifiSnapshot {
            enabled: true,
            rssi: Some(-55),
            frequency_mhz: Some(5180),
            ssid: Some("\"office\"".into()),
        }),
        transports: Some(TransportSet::wifi()),
        ..Default::default()
    });

    let reading = match dispatch(&adapter, "getWifiSignal").unwrap() {
        QueryResponse::Reading(Some(r)) => r,
        other => panic!("expected a reading, got {other:?}"),
    };
    assert_eq!(reading.dbm, Some(-55.0));
    // Band label on the signal reading; transport label on the
    // connection-type query. Two different classifications.
    assert_eq!(reading.connection_type, "5 GHz");
    assert_eq!(reading.network_name.as_deref(), Some("office"));

    assert_eq!(
        dispatch(&adapter, "getConnectionType").unwrap(),
        QueryResponse::Label("WiFi".into())
    );
    assert_eq!(
        dispatch(&adapter, "isWifiEnabled").unwrap(),
        QueryResponse::Flag(true)
    );
    assert_eq!(
        dispatch(&adapter, "isCellularEnabled").unwrap(),
        QueryResponse::Flag(false)
    );
}

// ────────────────────────────────────────────────────────────────
// 2. Sentinel and absence paths
// ────────────────────────────────────────────────────────────────

#[test]
fn android_sentinel_rssi_surfaces_as_null_reading() {
    let adapter = AndroidAdapter::new(AndroidFixture {
        wifi: Some(WifiSnapshot {
            enabled: true,
            rssi: Some(-127),
            frequency_mhz: Some(2412),
            ssid: Some("home".into()),
        }),
        ..Default::default()
    });

    let response = dispatch(&adapter, "getWifiSignal").unwrap();
    assert_eq!(response, QueryResponse::Reading(None));
    assert!(serde_json::to_value(&response).unwrap().is_null());
}

#[test]
fn android_offline_device() {
    let adapter = AndroidAdapter::new(AndroidFixture::default());

    assert_eq!(
        dispatch(&adapter, "getWifiSignal").unwrap(),
        QueryResponse::Reading(None)
    );
    assert_eq!(
        dispatch(&adapter, "getCellularSignal").unwrap(),
        QueryResponse::Reading(None)
    );
    assert_eq!(
        dispatch(&adapter, "isWifiEnabled").unwrap(),
        QueryResponse::Flag(false)
    );
    assert_eq!(
        dispatch(&adapter, "getConnectionType").unwrap(),
        QueryResponse::Label("None".into())
    );
}

// ────────────────────────────────────────────────────────────────
// 3. Cellular acquisition: registered cells, permission, 5G NR
// ────────────────────────────────────────────────────────────────

#[test]
fn android_cellular_signal_from_registered_nr_cell() {
    let adapter = AndroidAdapter::new(AndroidFixture {
        cell: Some(CellSnapshot {
            operator_name: Some("T-Mobile".into()),
            network_type_code: Some(network_type::NR),
            cells: vec![
                CellReading {
                    registered: false,
                    dbm: Some(-70),
                    technology: CellTechnology::Nr,
                },
                CellReading {
                    registered: true,
                    dbm: Some(-92),
                    technology: CellTechnology::Nr,
                },
            ],
        }),
        permitted: true,
        transports: Some(TransportSet::cellular()),
        caps: AndroidCaps { nr_signal: true },
        ..Default::default()
    });

    let reading = match dispatch(&adapter, "getCellularSignal").unwrap() {
        QueryResponse::Reading(Some(r)) => r,
        other => panic!("expected a reading, got {other:?}"),
    };
    assert_eq!(reading.dbm, Some(-92.0));
    assert_eq!(reading.connection_type, "5G");
    assert_eq!(reading.network_name.as_deref(), Some("T-Mobile"));

    assert_eq!(
        dispatch(&adapter, "isCellularEnabled").unwrap(),
        QueryResponse::Flag(true)
    );
    assert_eq!(
        dispatch(&adapter, "getConnectionType").unwrap(),
        QueryResponse::Label("Cellular".into())
    );
}

#[test]
fn android_permission_denial_is_absence_not_error() {
    let adapter = AndroidAdapter::new(AndroidFixture {
        cell: Some(CellSnapshot {
            operator_name: Some("Vodafone".into()),
            network_type_code: Some(network_type::LTE),
            cells: vec![CellReading {
                registered: true,
                dbm: Some(-85),
                technology: CellTechnology::Lte,
            }],
        }),
        permitted: false,
        ..Default::default()
    });

    let json = serde_json::to_value(dispatch(&adapter, "getCellularSignal").unwrap()).unwrap();
    assert!(json["dbm"].is_null());
    assert_eq!(json["connectionType"], serde_json::json!("LTE"));
    assert_eq!(json["networkName"], serde_json::json!("Vodafone"));
}

// ────────────────────────────────────────────────────────────────
// 4. iOS: structurally absent signal strength
// ────────────────────────────────────────────────────────────────

#[test]
fn ios_full_surface_on_wifi() {
    let adapter = IosAdapter::new(IosFixture {
        wifi: Some(IosWifiNetwork {
            ssid: Some("cafe".into()),
        }),
        carrier: Some("O2".into()),
        technology: Some(radio_access::LTE.into()),
    });

    let json = serde_json::to_value(dispatch(&adapter, "getWifiSignal").unwrap()).unwrap();
    assert!(json["dbm"].is_null());
    assert_eq!(json["connectionType"], serde_json::json!("WiFi"));
    assert_eq!(json["networkName"], serde_json::json!("cafe"));

    // WiFi wins the precedence even with an active cellular radio.
    assert_eq!(
        dispatch(&adapter, "getConnectionType").unwrap(),
        QueryResponse::Label("WiFi".into())
    );
}

#[test]
fn ios_cellular_only_device() {
    let adapter = IosAdapter::new(IosFixture {
        carrier: Some("O2".into()),
        technology: Some(radio_access::NR_NSA.into()),
        ..Default::default()
    });

    let json = serde_json::to_value(dispatch(&adapter, "getCellularSignal").unwrap()).unwrap();
    assert!(json["dbm"].is_null());
    assert_eq!(json["connectionType"], serde_json::json!("5G"));

    assert_eq!(
        dispatch(&adapter, "isWifiEnabled").unwrap(),
        QueryResponse::Flag(false)
    );
    assert_eq!(
        dispatch(&adapter, "getConnectionType").unwrap(),
        QueryResponse::Label("Cellular".into())
    );
}

// ────────────────────────────────────────────────────────────────
// 5. Unknown request names
// ────────────────────────────────────────────────────────────────

#[test]
fn unknown_method_signalled_distinctly_on_both_platforms() {
    let android = AndroidAdapter::new(AndroidFixture::default());
    let ios = IosAdapter::new(IosFixture::default());

    for method in ["getLatency", "getLocation", ""] {
        assert!(matches!(
            dispatch(&android, method),
            Err(DispatchError::NotImplemented { .. })
        ));
        assert!(matches!(
            dispatch(&ios, method),
            Err(DispatchError::NotImplemented { .. })
        ));
    }
}
