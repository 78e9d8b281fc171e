// Wire types for the Wyze cloud API.
//
// Responses from the API host are wrapped in the `WyzeResponse<T>` envelope.
// Fields use `#[serde(default)]` liberally because the cloud is inconsistent
// about field presence across product lines and app versions.

use serde::{Deserialize, Serialize};

// ── Response envelope ────────────────────────────────────────────────

/// Standard Wyze API response envelope.
///
/// Every endpoint on the API host wraps its payload:
/// ```json
/// { "code": "1", "msg": "", "data": { ... } }
/// ```
/// `code == "1"` means success; anything else is a vendor error code.
#[derive(Debug, Deserialize)]
pub struct WyzeResponse<T> {
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

// ── Authentication ───────────────────────────────────────────────────

/// Flat response from the auth host's login endpoint.
///
/// On rejection the same shape carries `error_code`/`description`
/// instead of tokens.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, rename = "errorCode")]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `data` payload of the refresh-token exchange.
#[derive(Debug, Default, Deserialize)]
pub struct AccessTokenData {
    #[serde(default)]
    pub access_token: String,
    /// A rotated refresh token, when the cloud decides to issue one.
    #[serde(default)]
    pub refresh_token: String,
}

// ── Object list (devices + groups) ───────────────────────────────────

/// `data` payload of `home_page/get_object_list`.
#[derive(Debug, Default, Deserialize)]
pub struct ObjectListData {
    #[serde(default)]
    pub device_list: Vec<DeviceEntry>,
    #[serde(default)]
    pub device_group_list: Vec<DeviceGroupEntry>,
}

/// Device object from the object list.
///
/// Group member lists reuse this shape with only `device_mac` populated,
/// which is why both MAC fields exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceEntry {
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub device_mac: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub product_model: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub conn_state: Option<i64>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Device group from the object list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceGroupEntry {
    #[serde(default)]
    pub group_id: i64,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub device_list: Vec<DeviceEntry>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Device properties ────────────────────────────────────────────────

/// `data` payload of `device_list/get_property_list`.
#[derive(Debug, Default, Deserialize)]
pub struct PropertyListData {
    #[serde(default)]
    pub device_list: Vec<DevicePropertyEntry>,
}

/// Per-device slice of a property response: raw `pid`/`value` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct DevicePropertyEntry {
    #[serde(default)]
    pub device_mac: String,
    #[serde(default)]
    pub property_list: Vec<PropertyValue>,
}

/// A single vendor-coded property (`{"pid": "P3", "value": "1"}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyValue {
    pub pid: String,
    #[serde(default)]
    pub value: String,
}

// ── Events ───────────────────────────────────────────────────────────

/// `data` payload of `device/get_event_list`.
#[derive(Debug, Default, Deserialize)]
pub struct EventListData {
    #[serde(default)]
    pub event_list: Vec<Event>,
    #[serde(default)]
    pub total_cnt: Option<i64>,
}

/// Camera event with its attached media files.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub device_mac: String,
    /// Event time as epoch milliseconds.
    #[serde(default)]
    pub event_ts: i64,
    #[serde(default)]
    pub event_value: Option<String>,
    #[serde(default)]
    pub file_list: Vec<EventFile>,
}

/// Media file attached to an event. `file_type` 1 is an image thumbnail.
#[derive(Debug, Clone, Deserialize)]
pub struct EventFile {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "type")]
    pub file_type: Option<i64>,
}

// ── Actions ──────────────────────────────────────────────────────────

/// A single already-translated property for a `run_action_list` payload
/// (`pid` is the vendor code, not the friendly name).
#[derive(Debug, Clone, Serialize)]
pub struct ActionProperty {
    pub pid: String,
    pub pvalue: String,
}
