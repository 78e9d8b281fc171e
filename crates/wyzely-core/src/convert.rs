// ── Wire-to-domain conversions ──
//
// Mapping layer between `wyzely-api` wire types and the canonical domain
// model. Conversions are infallible: missing or malformed fields degrade
// to `None` / `Unknown` rather than failing the whole response.

use std::collections::BTreeMap;

use tracing::warn;

use wyzely_api::models::{DeviceEntry, DeviceGroupEntry, DevicePropertyEntry};
use wyzely_api::properties;

use crate::model::{ConnectionState, Device, DeviceGroup, DeviceProperties, MacAddress, ProductType};

// ── Devices ──────────────────────────────────────────────────────────

impl From<DeviceEntry> for Device {
    fn from(entry: DeviceEntry) -> Self {
        let mac = canonical_mac(&entry);
        Self {
            mac,
            nickname: non_empty(entry.nickname),
            model: non_empty(entry.product_model),
            product_type: product_type(&entry.product_type),
            connection: connection(entry.conn_state),
            properties: BTreeMap::new(),
        }
    }
}

/// Top-level inventory entries carry `mac`; group member stubs carry
/// only `device_mac`. Either way the canonical identity is the same.
pub(crate) fn canonical_mac(entry: &DeviceEntry) -> MacAddress {
    if entry.mac.is_empty() {
        MacAddress::new(&entry.device_mac)
    } else {
        MacAddress::new(&entry.mac)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn product_type(raw: &str) -> ProductType {
    raw.parse()
        .unwrap_or_else(|_| ProductType::Other(raw.to_owned()))
}

fn connection(conn_state: Option<i64>) -> ConnectionState {
    match conn_state {
        Some(1) => ConnectionState::Online,
        Some(0) => ConnectionState::Offline,
        _ => ConnectionState::Unknown,
    }
}

// ── Properties ───────────────────────────────────────────────────────

impl From<DevicePropertyEntry> for DeviceProperties {
    fn from(entry: DevicePropertyEntry) -> Self {
        let properties = entry
            .property_list
            .into_iter()
            .map(|p| (properties::code_to_name(&p.pid).to_owned(), p.value))
            .collect();
        Self {
            mac: MacAddress::new(&entry.device_mac),
            properties,
        }
    }
}

// ── Groups ───────────────────────────────────────────────────────────

/// Resolve a wire group against the enriched inventory.
///
/// Member stubs only carry a MAC; each one is replaced by the full
/// inventory record. Members whose MAC is missing from the inventory
/// are dropped rather than kept as empty placeholders.
pub(crate) fn resolve_group(
    entry: DeviceGroupEntry,
    inventory: &BTreeMap<MacAddress, Device>,
) -> DeviceGroup {
    let mut devices = Vec::with_capacity(entry.device_list.len());
    for member in &entry.device_list {
        let mac = canonical_mac(member);
        match inventory.get(&mac) {
            Some(device) => devices.push(device.clone()),
            None => warn!(
                group = %entry.group_name,
                mac = %mac,
                "group member missing from device inventory; dropping"
            ),
        }
    }
    let powered_on = devices.iter().any(Device::is_powered_on);
    DeviceGroup {
        id: entry.group_id,
        name: entry.group_name,
        devices,
        powered_on,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use wyzely_api::models::PropertyValue;

    fn entry(mac: &str, nickname: &str, model: &str, product_type: &str) -> DeviceEntry {
        DeviceEntry {
            mac: mac.into(),
            device_mac: String::new(),
            nickname: nickname.into(),
            product_model: model.into(),
            product_type: product_type.into(),
            conn_state: Some(1),
            extra: serde_json::Map::new(),
        }
    }

    fn member(device_mac: &str) -> DeviceEntry {
        DeviceEntry {
            mac: String::new(),
            device_mac: device_mac.into(),
            nickname: String::new(),
            product_model: String::new(),
            product_type: String::new(),
            conn_state: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn device_from_entry_maps_fields() {
        let device = Device::from(entry("ABC123", "Desk Lamp", "WLPA19C", "MeshLight"));
        assert_eq!(device.mac.as_str(), "ABC123");
        assert_eq!(device.nickname.as_deref(), Some("Desk Lamp"));
        assert_eq!(device.model.as_deref(), Some("WLPA19C"));
        assert!(device.is_bulb());
        assert!(device.connection.is_online());
        assert!(device.properties.is_empty());
    }

    #[test]
    fn empty_strings_become_none() {
        let device = Device::from(entry("ABC123", "", "", "Camera"));
        assert_eq!(device.nickname, None);
        assert_eq!(device.model, None);
        assert_eq!(device.display_name(), "ABC123");
    }

    #[test]
    fn canonical_mac_falls_back_to_device_mac() {
        assert_eq!(canonical_mac(&member("abc123")).as_str(), "ABC123");
    }

    #[test]
    fn property_entry_translates_codes() {
        let props = DeviceProperties::from(DevicePropertyEntry {
            device_mac: "ABC123".into(),
            property_list: vec![
                PropertyValue {
                    pid: "P3".into(),
                    value: "1".into(),
                },
                PropertyValue {
                    pid: "P9999".into(),
                    value: "x".into(),
                },
            ],
        });
        assert_eq!(props.properties.get("power_state").map(String::as_str), Some("1"));
        // Unknown codes pass through untranslated.
        assert_eq!(props.properties.get("P9999").map(String::as_str), Some("x"));
    }

    fn inventory_with(devices: Vec<Device>) -> BTreeMap<MacAddress, Device> {
        devices.into_iter().map(|d| (d.mac.clone(), d)).collect()
    }

    fn group_entry(name: &str, members: Vec<DeviceEntry>) -> DeviceGroupEntry {
        DeviceGroupEntry {
            group_id: 42,
            group_name: name.into(),
            device_list: members,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn resolve_group_replaces_stubs_with_inventory_records() {
        let mut bulb = Device::from(entry("AAA111", "Bulb One", "WLPA19C", "MeshLight"));
        bulb.properties.insert("power_state".into(), "0".into());
        let inventory = inventory_with(vec![bulb]);

        let group = resolve_group(group_entry("Office", vec![member("AAA111")]), &inventory);
        assert_eq!(group.id, 42);
        assert_eq!(group.name, "Office");
        assert_eq!(group.devices.len(), 1);
        assert_eq!(group.devices[0].nickname.as_deref(), Some("Bulb One"));
        assert!(!group.powered_on);
    }

    #[test]
    fn resolve_group_drops_unknown_members() {
        let bulb = Device::from(entry("AAA111", "Bulb One", "WLPA19C", "MeshLight"));
        let inventory = inventory_with(vec![bulb]);

        let group = resolve_group(
            group_entry("Office", vec![member("AAA111"), member("GHOST")]),
            &inventory,
        );
        assert_eq!(group.devices.len(), 1);
    }

    #[test]
    fn resolve_group_powered_on_is_or_across_members() {
        let mut on = Device::from(entry("AAA111", "On", "WLPA19C", "MeshLight"));
        on.properties.insert("power_state".into(), "1".into());
        let mut off = Device::from(entry("BBB222", "Off", "WLPA19C", "MeshLight"));
        off.properties.insert("power_state".into(), "0".into());
        let inventory = inventory_with(vec![on, off]);

        let group = resolve_group(
            group_entry("Office", vec![member("BBB222"), member("AAA111")]),
            &inventory,
        );
        assert!(group.powered_on);

        let dark = resolve_group(group_entry("Dark", vec![member("BBB222")]), &inventory);
        assert!(!dark.powered_on);
    }
}
