// ── Device group domain types ──

use serde::{Deserialize, Serialize};

use super::device::Device;

/// A user-defined device group, with member devices resolved against the
/// enriched inventory and an aggregate power state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceGroup {
    pub id: i64,
    pub name: String,
    /// Members resolved to full inventory records. Members whose MAC is
    /// missing from the inventory are dropped during resolution.
    pub devices: Vec<Device>,
    /// True when any member reports `power_state` `"1"`.
    pub powered_on: bool,
}
