// Batched device actions
//
// `run_action_list` takes one action per device, each carrying the full
// translated property list. The cloud acks the batch as a whole -- there
// is no per-device result to report.

use std::collections::BTreeMap;

use serde_json::json;
use tracing::debug;

use crate::client::{RUN_ACTION_SV, WyzeClient};
use crate::error::Error;
use crate::models::ActionProperty;

/// Batched action endpoint.
const RUN_ACTION_PATH: &str = "/app/v2/auto/run_action_list";

/// The only action key this client issues; it covers property writes on
/// mesh bulbs and the other products that accept property sets.
const SET_MESH_PROPERTY: &str = "set_mesh_property";

impl WyzeClient {
    /// Push a property list to a batch of devices in one call.
    ///
    /// `targets` maps device MAC to product model; every device receives
    /// the same `plist`. `POST /app/v2/auto/run_action_list` with one
    /// `set_mesh_property` action per device (`instance_id` = MAC,
    /// `provider_key` = model).
    pub async fn run_action_list(
        &self,
        access_token: &str,
        targets: &BTreeMap<String, String>,
        plist: &[ActionProperty],
    ) -> Result<(), Error> {
        let action_list: Vec<serde_json::Value> = targets
            .iter()
            .map(|(mac, model)| {
                json!({
                    "action_key": SET_MESH_PROPERTY,
                    "instance_id": mac,
                    "provider_key": model,
                    "action_params": {
                        "list": [{
                            "mac": mac,
                            "plist": plist,
                        }],
                    },
                })
            })
            .collect();

        let mut body = Self::base_body(RUN_ACTION_SV);
        body.insert("access_token".into(), access_token.into());
        body.insert("action_list".into(), action_list.into());

        debug!(actions = targets.len(), "running action list");
        self.post_api_ack(RUN_ACTION_PATH, &body).await
    }
}
