// ── Core identity types ──
//
// MacAddress is the identity of every Wyze device. The cloud reports
// MACs as bare uppercase strings (hex for most hardware, model-prefixed
// for hub children, e.g. `GW_BE1_...`), so normalization strips
// separators and uppercases instead of forcing colon format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MAC address, normalized to the bare uppercase form the Wyze cloud
/// uses (`AABBCCDDEEFF`). Accepts colon- or dash-separated input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from any common format.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().replace([':', '-'], "").to_uppercase();
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mac_address_strips_separators() {
        let mac = MacAddress::new("aa:bb:cc:dd:ee:ff");
        assert_eq!(mac.as_str(), "AABBCCDDEEFF");
    }

    #[test]
    fn mac_address_normalizes_case() {
        let mac = MacAddress::new("2caa8e8d3ec5");
        assert_eq!(mac.as_str(), "2CAA8E8D3EC5");
    }

    #[test]
    fn mac_address_keeps_model_prefixes() {
        let mac = MacAddress::new("GW_BE1_7C78B2AAAAAA");
        assert_eq!(mac.as_str(), "GW_BE1_7C78B2AAAAAA");
    }

    #[test]
    fn mac_address_from_str() {
        let mac: MacAddress = "AA-BB-CC-DD-EE-FF".parse().unwrap();
        assert_eq!(mac.to_string(), "AABBCCDDEEFF");
    }
}
