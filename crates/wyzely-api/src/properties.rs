// Property code translation
//
// The cloud speaks vendor codes ("P3"); everything user-facing speaks
// names ("power_state"). One static table drives both directions, and
// unknown inputs pass through unchanged so new codes degrade gracefully
// instead of erroring.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Code/name pairs for the property codes this client understands.
/// Mostly the bulb-class set; cameras and plugs share `P3`/`P5`.
const PROPERTY_CODES: &[(&str, &str)] = &[
    ("P3", "power_state"),
    ("P5", "online"),
    ("P1501", "brightness"),
    ("P1502", "color_temp"),
    ("P1505", "remaining_time"),
    ("P1506", "away_mode"),
    ("P1507", "color"),
];

static CODE_TO_NAME: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PROPERTY_CODES.iter().copied().collect());

static NAME_TO_CODE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PROPERTY_CODES.iter().map(|&(code, name)| (name, code)).collect());

/// Translate a vendor property code to its friendly name.
///
/// Unknown codes come back unchanged.
pub fn code_to_name(code: &str) -> &str {
    CODE_TO_NAME.get(code).copied().unwrap_or(code)
}

/// Translate a friendly property name to its vendor code.
///
/// Unknown names come back unchanged.
pub fn name_to_code(name: &str) -> &str {
    NAME_TO_CODE.get(name).copied().unwrap_or(name)
}
