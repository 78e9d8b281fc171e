// ── Lookup indexes ──
//
// Map builders over inventory slices, for callers that address devices
// and groups by human name instead of MAC. Duplicate keys keep the
// last-seen entry.

use std::collections::BTreeMap;

use crate::model::{Device, DeviceGroup, MacAddress};

/// Index groups by name.
pub fn groups_by_name(groups: &[DeviceGroup]) -> BTreeMap<String, DeviceGroup> {
    groups
        .iter()
        .map(|g| (g.name.clone(), g.clone()))
        .collect()
}

/// Index devices by nickname. Devices without a nickname cannot be
/// addressed by name and are left out.
pub fn devices_by_name(devices: &[Device]) -> BTreeMap<String, Device> {
    devices
        .iter()
        .filter_map(|d| d.nickname.clone().map(|name| (name, d.clone())))
        .collect()
}

/// MAC -> product model pairs for a device list, in the shape the action
/// dispatcher takes as its target set.
pub fn device_targets(devices: &[Device]) -> BTreeMap<String, String> {
    devices
        .iter()
        .map(|d| {
            (
                d.mac.as_str().to_owned(),
                d.model.clone().unwrap_or_default(),
            )
        })
        .collect()
}

/// MAC -> product model pairs for the members of one named group.
/// Unknown group names yield an empty target set.
pub fn group_targets(
    groups: &BTreeMap<String, DeviceGroup>,
    name: &str,
) -> BTreeMap<String, String> {
    groups
        .get(name)
        .map(|g| device_targets(&g.devices))
        .unwrap_or_default()
}

/// MAC -> full device records, the join key for group resolution and
/// property attachment.
pub fn devices_by_mac(devices: Vec<Device>) -> BTreeMap<MacAddress, Device> {
    devices.into_iter().map(|d| (d.mac.clone(), d)).collect()
}
