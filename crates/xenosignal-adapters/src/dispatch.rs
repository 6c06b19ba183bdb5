//! Query dispatch — the five-operation surface adapters expose to their
//! host application layer.
//!
//! Request names arrive as strings over the host's call channel; an
//! unknown name is signalled distinctly (`DispatchError::NotImplemented`)
//! from a successful-but-empty reading, which serializes as plain `null`.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use xenosignal_core::classify::ConnectionType;
use xenosignal_core::reading::NormalizedReading;

use crate::android::AndroidAdapter;
use crate::ios::IosAdapter;
use crate::probe::{AndroidRadioSource, IosRadioSource};

/// The five query operations of the adapter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    WifiSignal,
    CellularSignal,
    WifiEnabled,
    CellularEnabled,
    ConnectionType,
}

impl Query {
    /// Wire name of this query, as the host sends it.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Query::WifiSignal => "getWifiSignal",
            Query::CellularSignal => "getCellularSignal",
            Query::WifiEnabled => "isWifiEnabled",
            Query::CellularEnabled => "isCellularEnabled",
            Query::ConnectionType => "getConnectionType",
        }
    }

    pub const ALL: [Query; 5] = [
        Query::WifiSignal,
        Query::CellularSignal,
        Query::WifiEnabled,
        Query::CellularEnabled,
        Query::ConnectionType,
    ];
}

impl FromStr for Query {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "getWifiSignal" => Ok(Query::WifiSignal),
            "getCellularSignal" => Ok(Query::CellularSignal),
            "isWifiEnabled" => Ok(Query::WifiEnabled),
            "isCellularEnabled" => Ok(Query::CellularEnabled),
            "getConnectionType" => Ok(Query::ConnectionType),
            other => Err(DispatchError::NotImplemented {
                method: other.to_owned(),
            }),
        }
    }
}

/// Result of a dispatched query: a reading (possibly absent), a boolean
/// predicate, or a connection label. Serializes untagged, so the host sees
/// the plain value (`null`, `true`, `"WiFi"`, or the reading object).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Reading(Option<NormalizedReading>),
    Flag(bool),
    Label(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("method not implemented: {method}")]
    NotImplemented { method: String },
}

/// Handler for the five-operation query surface. Implemented by both
/// platform adapters; hosts and tests can dispatch against either through
/// the same seam.
pub trait SignalQueryHandler {
    fn wifi_signal(&self) -> Option<NormalizedReading>;
    fn cellular_signal(&self) -> Option<NormalizedReading>;
    fn wifi_enabled(&self) -> bool;
    fn cellular_enabled(&self) -> bool;
    fn connection_type(&self) -> ConnectionType;
}

impl<S: AndroidRadioSource> SignalQueryHandler for AndroidAdapter<S> {
    fn wifi_signal(&self) -> Option<NormalizedReading> {
        AndroidAdapter::wifi_signal(self)
    }
    fn cellular_signal(&self) -> Option<NormalizedReading> {
        AndroidAdapter::cellular_signal(self)
    }
    fn wifi_enabled(&self) -> bool {
        AndroidAdapter::wifi_enabled(self)
    }
    fn cellular_enabled(&self) -> bool {
        AndroidAdapter::cellular_enabled(self)
    }
    fn connection_type(&self) -> ConnectionType {
        AndroidAdapter::connection_type(self)
    }
}

impl<S: IosRadioSource> SignalQueryHandler for IosAdapter<S> {
    fn wifi_signal(&self) -> Option<NormalizedReading> {
        IosAdapter::wifi_signal(self)
    }
    fn cellular_signal(&self) -> Option<NormalizedReading> {
        IosAdapter::cellular_signal(self)
    }
    fn wifi_enabled(&self) -> bool {
        IosAdapter::wifi_enabled(self)
    }
    fn cellular_enabled(&self) -> bool {
        IosAdapter::cellular_enabled(self)
    }
    fn connection_type(&self) -> ConnectionType {
        IosAdapter::connection_type(self)
    }
}

/// Dispatch a request by wire name.
pub fn dispatch<H: SignalQueryHandler>(
    handler: &H,
    method: &str,
) -> Result<QueryResponse, DispatchError> {
    let query = method.parse::<Query>()?;
    Ok(match query {
        Query::WifiSignal => QueryResponse::Reading(handler.wifi_signal()),
        Query::CellularSignal => QueryResponse::Reading(handler.cellular_signal()),
        Query::WifiEnabled => QueryResponse::Flag(handler.wifi_enabled()),
        Query::CellularEnabled => QueryResponse::Flag(handler.cellular_enabled()),
        Query::ConnectionType => {
            QueryResponse::Label(handler.connection_type().as_str().to_owned())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal handler with fixed answers.
    struct StubHandler;

    impl SignalQueryHandler for StubHandler {
        fn wifi_signal(&self) -> Option<NormalizedReading> {
            None
        }
        fn cellular_signal(&self) -> Option<NormalizedReading> {
            Some(NormalizedReading::unmeasured("LTE", Some("op".into())))
        }
        fn wifi_enabled(&self) -> bool {
            false
        }
        fn cellular_enabled(&self) -> bool {
            true
        }
        fn connection_type(&self) -> ConnectionType {
            ConnectionType::Cellular
        }
    }

    #[test]
    fn every_wire_name_round_trips() {
        for query in Query::ALL {
            assert_eq!(query.wire_name().parse::<Query>().unwrap(), query);
        }
    }

    #[test]
    fn unknown_method_is_not_implemented() {
        let err = dispatch(&StubHandler, "getSomethingElse").unwrap_err();
        assert_eq!(
            err,
            DispatchError::NotImplemented {
                method: "getSomethingElse".into()
            }
        );
    }

    #[test]
    fn empty_reading_is_a_success_not_an_error() {
        let response = dispatch(&StubHandler, "getWifiSignal").unwrap();
        assert_eq!(response, QueryResponse::Reading(None));
        assert_eq!(serde_json::to_value(&response).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn responses_serialize_as_plain_values() {
        let flag = dispatch(&StubHandler, "isCellularEnabled").unwrap();
        assert_eq!(serde_json::to_value(&flag).unwrap(), serde_json::json!(true));

        let label = dispatch(&StubHandler, "getConnectionType").unwrap();
        assert_eq!(
            serde_json::to_value(&label).unwrap(),
            serde_json::json!("Cellular")
        );

        let reading = dispatch(&StubHandler, "getCellularSignal").unwrap();
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["connectionType"], serde_json::json!("LTE"));
        assert!(json["dbm"].is_null());
    }
}
