// ── Device domain types ──

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entity_id::MacAddress;

/// Canonical product category -- normalized from the `product_type`
/// string the cloud reports.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[non_exhaustive]
pub enum ProductType {
    Camera,
    /// Color bulbs. The cloud reports these as `MeshLight`, and they are
    /// the only product the batched action endpoint accepts.
    MeshLight,
    Light,
    Plug,
    OutdoorPlug,
    ContactSensor,
    MotionSensor,
    Lock,
    Thermostat,
    /// Anything this crate does not model yet; carries the raw string.
    #[strum(default)]
    Other(String),
}

/// Device connectivity as reported by the inventory endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Online,
    Offline,
    Unknown,
}

impl ConnectionState {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// The canonical Wyze device. The inventory record plus any property
/// values attached by the aggregation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub mac: MacAddress,
    pub nickname: Option<String>,
    /// Product model string (e.g. `WLPA19C`), used as the `provider_key`
    /// when dispatching actions.
    pub model: Option<String>,
    pub product_type: ProductType,
    pub connection: ConnectionState,
    /// Named property values (`power_state`, `brightness`, ...). Empty
    /// until properties are attached.
    pub properties: BTreeMap<String, String>,
}

impl Device {
    pub fn is_bulb(&self) -> bool {
        matches!(self.product_type, ProductType::MeshLight)
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.product_type, ProductType::Camera)
    }

    /// True when the attached `power_state` property reads `"1"`.
    pub fn is_powered_on(&self) -> bool {
        self.properties.get("power_state").is_some_and(|v| v == "1")
    }

    /// Nickname when set, MAC otherwise.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(self.mac.as_str())
    }
}

/// Property values reported for one device by the bulk property endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProperties {
    pub mac: MacAddress,
    /// Values keyed by translated property name; unknown codes keep the
    /// raw pid as the key.
    pub properties: BTreeMap<String, String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn product_type_parses_known_strings() {
        let pt: ProductType = "MeshLight".parse().unwrap();
        assert_eq!(pt, ProductType::MeshLight);
    }

    #[test]
    fn product_type_keeps_unknown_strings() {
        let pt: ProductType = "ChimeSensor".parse().unwrap();
        assert_eq!(pt, ProductType::Other("ChimeSensor".into()));
        assert_eq!(pt.to_string(), "ChimeSensor");
    }

    #[test]
    fn powered_on_requires_power_state_of_one() {
        let mut device = Device {
            mac: MacAddress::new("AABBCCDDEEFF"),
            nickname: None,
            model: None,
            product_type: ProductType::MeshLight,
            connection: ConnectionState::Unknown,
            properties: BTreeMap::new(),
        };
        assert!(!device.is_powered_on());

        device.properties.insert("power_state".into(), "0".into());
        assert!(!device.is_powered_on());

        device.properties.insert("power_state".into(), "1".into());
        assert!(device.is_powered_on());
    }

    #[test]
    fn display_name_falls_back_to_mac() {
        let device = Device {
            mac: MacAddress::new("AABBCCDDEEFF"),
            nickname: None,
            model: None,
            product_type: ProductType::Camera,
            connection: ConnectionState::Online,
            properties: BTreeMap::new(),
        };
        assert_eq!(device.display_name(), "AABBCCDDEEFF");
    }
}
