// Device inventory and property endpoints
//
// `get_object_list` returns devices and device groups in one payload;
// `get_property_list` returns raw vendor-coded pid/value pairs for a set
// of MACs. Translation to friendly names happens a layer up.

use tracing::debug;

use crate::client::{DEVELOPER_API_ID, WyzeClient};
use crate::error::Error;
use crate::models::{ObjectListData, PropertyListData};

/// Combined device + group inventory endpoint.
const OBJECT_LIST_PATH: &str = "/app/v2/home_page/get_object_list";
/// Bulk property read endpoint.
const PROPERTY_LIST_PATH: &str = "/app/v2/device_list/get_property_list";

impl WyzeClient {
    /// Fetch the full object list: all devices and all device groups.
    ///
    /// `POST /app/v2/home_page/get_object_list`
    pub async fn get_object_list(&self, access_token: &str) -> Result<ObjectListData, Error> {
        let mut body = Self::base_body(DEVELOPER_API_ID);
        body.insert("access_token".into(), access_token.into());

        debug!("fetching object list");
        self.post_api(OBJECT_LIST_PATH, &body).await
    }

    /// Fetch raw properties for a set of devices.
    ///
    /// `POST /app/v2/device_list/get_property_list` with `device_list`
    /// holding the MACs and `target_pid_list` holding vendor property
    /// codes. An empty `target_pid_list` means "all properties".
    pub async fn get_property_list(
        &self,
        access_token: &str,
        device_macs: &[String],
        target_pids: &[String],
    ) -> Result<PropertyListData, Error> {
        let mut body = Self::base_body(DEVELOPER_API_ID);
        body.insert("access_token".into(), access_token.into());
        body.insert("device_list".into(), device_macs.into());
        body.insert("target_pid_list".into(), target_pids.into());

        debug!(devices = device_macs.len(), "fetching property list");
        self.post_api(PROPERTY_LIST_PATH, &body).await
    }
}
