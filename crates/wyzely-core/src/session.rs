// ── Wyze cloud session ──
//
// Full lifecycle for one authenticated connection to the Wyze cloud.
// `connect()` runs the token dance: reuse the cached refresh token while
// it is valid, fall back to a credential login, then exchange the
// refresh token for the short-lived access token every API call needs.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use wyzely_api::events::EventQuery;
use wyzely_api::models::ActionProperty;
use wyzely_api::{TransportConfig, WyzeClient, properties, token};

use crate::config::SessionConfig;
use crate::convert;
use crate::error::CoreError;
use crate::index;
use crate::model::{Device, DeviceGroup, DeviceProperties, MacAddress, Thumbnail};
use crate::token_store;

/// An authenticated session against the Wyze cloud.
///
/// Cheap to establish per invocation: repeated CLI calls reuse the
/// cached refresh token and skip the credential login entirely.
#[derive(Debug)]
pub struct Session {
    client: WyzeClient,
    config: SessionConfig,
    access_token: String,
}

impl Session {
    /// Authenticate and return a ready session.
    pub async fn connect(config: SessionConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = WyzeClient::new(&transport)?;
        Self::connect_with(config, client).await
    }

    /// Like [`connect()`](Self::connect), with a caller-supplied API
    /// client. Used by tests and callers that need custom base URLs.
    pub async fn connect_with(config: SessionConfig, client: WyzeClient) -> Result<Self, CoreError> {
        let token_path = config.refresh_token_path();

        let refresh_token = match token_store::load(&token_path) {
            Some(cached) if token::is_valid(&cached) => {
                debug!("cached refresh token still valid");
                cached
            }
            cached => {
                if cached.is_some() {
                    debug!("cached refresh token expired or malformed");
                }
                let fresh = client
                    .login(
                        &config.username,
                        &config.password_hash,
                        &config.key_id,
                        &config.api_key,
                    )
                    .await?;
                token_store::save(&token_path, &fresh)?;
                info!("credential login complete; refresh token cached");
                fresh
            }
        };

        let access_token = client.exchange_refresh_token(&refresh_token).await?;
        debug!("access token issued");

        Ok(Self {
            client,
            config,
            access_token,
        })
    }

    /// The session configuration this session was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The access token backing this session.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    // ── Inventory ────────────────────────────────────────────────────

    /// All devices on the account, without property values.
    pub async fn devices(&self) -> Result<Vec<Device>, CoreError> {
        let data = self.client.get_object_list(&self.access_token).await?;
        Ok(data.device_list.into_iter().map(Device::from).collect())
    }

    /// All devices with current property values attached.
    pub async fn devices_with_properties(&self) -> Result<Vec<Device>, CoreError> {
        let devices = self.devices().await?;
        self.attach_properties(devices).await
    }

    /// Bulbs only (the `MeshLight` product type).
    pub async fn bulbs(&self) -> Result<Vec<Device>, CoreError> {
        Ok(self
            .devices()
            .await?
            .into_iter()
            .filter(Device::is_bulb)
            .collect())
    }

    /// Find one device by nickname or MAC, with properties attached.
    pub async fn device_named(&self, name: &str) -> Result<Device, CoreError> {
        let needle = MacAddress::new(name);
        self.devices_with_properties()
            .await?
            .into_iter()
            .find(|d| d.nickname.as_deref() == Some(name) || d.mac == needle)
            .ok_or_else(|| CoreError::DeviceNotFound {
                identifier: name.to_owned(),
            })
    }

    /// Find one group by name.
    pub async fn group_named(&self, name: &str) -> Result<DeviceGroup, CoreError> {
        self.groups()
            .await?
            .into_iter()
            .find(|g| g.name == name)
            .ok_or_else(|| CoreError::GroupNotFound {
                name: name.to_owned(),
            })
    }

    /// Device groups with members resolved and aggregate power state.
    ///
    /// Fetches devices and groups in one call, enriches the devices with
    /// their property values, then rewrites each group's member stubs
    /// into full records.
    pub async fn groups(&self) -> Result<Vec<DeviceGroup>, CoreError> {
        let data = self.client.get_object_list(&self.access_token).await?;
        let devices: Vec<Device> = data.device_list.into_iter().map(Device::from).collect();
        let devices = self.attach_properties(devices).await?;
        let inventory = index::devices_by_mac(devices);
        Ok(data
            .device_group_list
            .into_iter()
            .map(|entry| convert::resolve_group(entry, &inventory))
            .collect())
    }

    /// Attach bulk property values to the given devices. Devices the
    /// property endpoint does not report keep an empty property map.
    async fn attach_properties(&self, devices: Vec<Device>) -> Result<Vec<Device>, CoreError> {
        if devices.is_empty() {
            return Ok(devices);
        }
        let macs: Vec<String> = devices.iter().map(|d| d.mac.as_str().to_owned()).collect();
        let props = self.device_properties(&macs, &[]).await?;
        let mut by_mac: BTreeMap<MacAddress, DeviceProperties> =
            props.into_iter().map(|p| (p.mac.clone(), p)).collect();
        Ok(devices
            .into_iter()
            .map(|mut device| {
                if let Some(props) = by_mac.remove(&device.mac) {
                    device.properties = props.properties;
                }
                device
            })
            .collect())
    }

    // ── Properties ───────────────────────────────────────────────────

    /// Current property values for the given devices.
    ///
    /// `names` selects properties by friendly name (empty fetches all);
    /// unknown names pass through as raw property ids.
    pub async fn device_properties(
        &self,
        macs: &[String],
        names: &[String],
    ) -> Result<Vec<DeviceProperties>, CoreError> {
        let pids: Vec<String> = names
            .iter()
            .map(|n| properties::name_to_code(n).to_owned())
            .collect();
        let data = self
            .client
            .get_property_list(&self.access_token, macs, &pids)
            .await?;
        Ok(data
            .device_list
            .into_iter()
            .map(DeviceProperties::from)
            .collect())
    }

    /// Set named properties on a batch of devices in one call.
    ///
    /// `targets` maps device MAC -> product model (see
    /// [`index::device_targets`]); `values` maps friendly property name
    /// (or raw pid) -> value. Every target receives every value.
    pub async fn set_properties(
        &self,
        targets: &BTreeMap<String, String>,
        values: &BTreeMap<String, String>,
    ) -> Result<(), CoreError> {
        let plist: Vec<ActionProperty> = values
            .iter()
            .map(|(name, value)| ActionProperty {
                pid: properties::name_to_code(name).to_owned(),
                pvalue: value.clone(),
            })
            .collect();
        self.client
            .run_action_list(&self.access_token, targets, &plist)
            .await?;
        info!(devices = targets.len(), properties = plist.len(), "properties set");
        Ok(())
    }

    // ── Thumbnails ───────────────────────────────────────────────────

    /// Download new camera event thumbnails into `directory`.
    ///
    /// One image per event, named `<event_ts>.jpg`. Files already on
    /// disk are left alone and not reported.
    pub async fn fetch_thumbnails(
        &self,
        directory: &Path,
        query: &EventQuery,
    ) -> Result<Vec<Thumbnail>, CoreError> {
        let events = self.client.get_event_list(&self.access_token, query).await?;
        debug!(events = events.len(), "event list fetched");

        let mut downloaded = Vec::new();
        for event in &events {
            for file in &event.file_list {
                let path = directory.join(format!("{}.jpg", event.event_ts));
                if path.exists() {
                    debug!(path = %path.display(), "thumbnail already present");
                    continue;
                }
                let bytes = self.client.download_file(&file.url).await?;
                tokio::fs::write(&path, &bytes)
                    .await
                    .map_err(|source| CoreError::FileWrite {
                        path: path.clone(),
                        source,
                    })?;
                info!(path = %path.display(), "thumbnail downloaded");
                let timestamp =
                    timestamp_from_path(&path).unwrap_or(DateTime::UNIX_EPOCH);
                downloaded.push(Thumbnail {
                    path,
                    url: file.url.clone(),
                    mac: MacAddress::new(&event.device_mac),
                    timestamp,
                });
            }
        }
        Ok(downloaded)
    }
}

/// Recover the event timestamp from a thumbnail file name
/// (`<epoch_millis>.jpg`).
fn timestamp_from_path(path: &Path) -> Option<DateTime<Utc>> {
    let stem = path.file_stem()?.to_str()?;
    let millis: i64 = stem.parse().ok()?;
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_recovered_from_file_name() {
        let ts = timestamp_from_path(Path::new("/tmp/thumbs/1700000000123.jpg")).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn non_numeric_file_names_have_no_timestamp() {
        assert!(timestamp_from_path(Path::new("/tmp/thumbs/latest.jpg")).is_none());
    }
}
