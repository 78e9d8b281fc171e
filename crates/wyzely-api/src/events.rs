// Camera event endpoints
//
// Event listing with MAC/tag/time-range filters, and the plain-GET
// download path for the media files events point at. File URLs are
// pre-signed by the cloud -- no token or envelope on that hop.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::{DEVELOPER_API_ID, WyzeClient};
use crate::error::Error;
use crate::models::{Event, EventListData};

/// Event listing endpoint.
const EVENT_LIST_PATH: &str = "/app/v2/device/get_event_list";

/// Filters for an event listing.
#[derive(Debug, Clone)]
pub struct EventQuery {
    /// Restrict to these device MACs. Empty means all devices.
    pub device_macs: Vec<String>,
    /// Restrict to these numeric event tags. Empty means all tags.
    pub tags: Vec<i64>,
    /// Maximum number of events to return.
    pub count: u32,
    /// Inclusive start of the time range.
    pub begin: DateTime<Utc>,
    /// Inclusive end of the time range.
    pub end: DateTime<Utc>,
}

impl WyzeClient {
    /// List camera events matching the query, newest first.
    ///
    /// `POST /app/v2/device/get_event_list`. The time range rides as
    /// epoch-millisecond strings, matching what the cloud parses.
    pub async fn get_event_list(
        &self,
        access_token: &str,
        query: &EventQuery,
    ) -> Result<Vec<Event>, Error> {
        let mut body = Self::base_body(DEVELOPER_API_ID);
        body.insert("access_token".into(), access_token.into());
        body.insert("device_mac_list".into(), query.device_macs.as_slice().into());
        body.insert("event_tag_list".into(), query.tags.as_slice().into());
        body.insert("count".into(), query.count.into());
        body.insert("order_by".into(), "1".into());
        body.insert("phone_system_type".into(), "1".into());
        body.insert(
            "begin_time".into(),
            query.begin.timestamp_millis().to_string().into(),
        );
        body.insert(
            "end_time".into(),
            query.end.timestamp_millis().to_string().into(),
        );

        debug!(count = query.count, "fetching event list");
        let data: EventListData = self.post_api(EVENT_LIST_PATH, &body).await?;
        Ok(data.event_list)
    }

    /// Download a file from a pre-signed event URL.
    pub async fn download_file(&self, url: &str) -> Result<Bytes, Error> {
        debug!("GET {url}");

        let resp = self.http().get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Download {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        resp.bytes().await.map_err(Error::Transport)
    }
}
