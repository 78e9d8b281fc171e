// Wyze cloud HTTP client
//
// Wraps `reqwest::Client` with the two Wyze base URLs (auth host and API
// host), the client-identity body parameters every API call carries, and
// envelope unwrapping. Endpoint modules (auth, devices, events, actions)
// are implemented as inherent methods via separate files to keep this
// module focused on transport mechanics.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::WyzeResponse;
use crate::transport::TransportConfig;

/// Production auth host (credential exchange only).
pub const AUTH_BASE_URL: &str = "https://auth-prod.api.wyze.com";
/// Production API host (everything else).
pub const API_BASE_URL: &str = "https://api.wyzecam.com";

/// Client identity the cloud expects in every request body. The developer
/// API accepts this fixed marker for `app_ver`, `phone_id`, `sc`, and `sv`.
pub(crate) const DEVELOPER_API_ID: &str = "wyze_developer_api";
/// `run_action_list` validates a distinct `sv` value.
pub(crate) const RUN_ACTION_SV: &str = "011a04cf25f845f49b8bb6d464fa7f08";

/// Envelope code that signals success.
const CODE_OK: &str = "1";

/// Raw HTTP client for the Wyze cloud API.
///
/// Handles the `{ code, msg, data }` envelope on the API host; all methods
/// return unwrapped `data` payloads -- the envelope is stripped before the
/// caller sees it. Holds no token state: callers pass the access token into
/// each endpoint method, which mirrors how the cloud wants it (in the
/// request body, not a header).
#[derive(Debug)]
pub struct WyzeClient {
    http: reqwest::Client,
    auth_base: Url,
    api_base: Url,
}

impl WyzeClient {
    /// Create a client against the production Wyze cloud.
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            auth_base: Url::parse(AUTH_BASE_URL)?,
            api_base: Url::parse(API_BASE_URL)?,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` and explicit base
    /// URLs. Intended for tests pointing at a mock server.
    pub fn with_base_urls(http: reqwest::Client, auth_base: Url, api_base: Url) -> Self {
        Self {
            http,
            auth_base,
            api_base,
        }
    }

    /// The underlying HTTP client (for flows that need direct access).
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL on the auth host.
    pub(crate) fn auth_url(&self, path: &str) -> Result<Url, Error> {
        self.auth_base.join(path).map_err(Error::InvalidUrl)
    }

    /// Build a full URL on the API host.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        self.api_base.join(path).map_err(Error::InvalidUrl)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Base request body with the client-identity parameters the cloud
    /// expects everywhere: `app_ver`, `phone_id`, `sc`, `sv`, and a
    /// current-millis `ts`. Endpoints extend it with their own fields.
    pub(crate) fn base_body(sv: &str) -> serde_json::Map<String, Value> {
        let mut body = serde_json::Map::new();
        body.insert("app_ver".into(), DEVELOPER_API_ID.into());
        body.insert("phone_id".into(), DEVELOPER_API_ID.into());
        body.insert("sc".into(), DEVELOPER_API_ID.into());
        body.insert("sv".into(), sv.into());
        body.insert("ts".into(), Utc::now().timestamp_millis().into());
        body
    }

    /// POST to the API host and unwrap the envelope, returning `data`.
    pub(crate) async fn post_api<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &serde_json::Map<String, Value>,
    ) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let envelope = Self::parse_envelope::<T>(resp).await?;
        envelope.data.ok_or_else(|| Error::Deserialization {
            message: format!("missing data in response from {path}"),
            body: String::new(),
        })
    }

    /// POST to the API host and check the envelope code, discarding `data`.
    /// For fire-and-forget endpoints like `run_action_list`.
    pub(crate) async fn post_api_ack(
        &self,
        path: &str,
        body: &serde_json::Map<String, Value>,
    ) -> Result<(), Error> {
        let url = self.api_url(path)?;
        debug!("POST {url}");

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_envelope::<Value>(resp).await.map(|_| ())
    }

    /// Parse the `{ code, msg, data }` envelope, returning the whole
    /// envelope on `code == "1"` or an `Error::Api` otherwise.
    async fn parse_envelope<T: DeserializeOwned + Default>(
        resp: reqwest::Response,
    ) -> Result<WyzeResponse<T>, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                code: status.as_u16().to_string(),
                message: format!("HTTP {status}: {}", &body[..body.len().min(200)]),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let envelope: WyzeResponse<T> = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        if envelope.code == CODE_OK {
            Ok(envelope)
        } else {
            Err(Error::Api {
                code: envelope.code,
                message: envelope.msg.unwrap_or_default(),
            })
        }
    }
}
