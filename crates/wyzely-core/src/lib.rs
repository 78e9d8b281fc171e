//! Business logic layer between `wyzely-api` and the CLI.
//!
//! This crate owns the domain model and session orchestration for the
//! wyzely workspace:
//!
//! - **[`Session`]** — Central facade for one authenticated connection.
//!   [`connect()`](Session::connect) runs the token dance (cached refresh
//!   token, credential login fallback, access token exchange); operation
//!   methods cover inventory, group aggregation, property reads and
//!   batched writes, and camera thumbnail downloads.
//!
//! - **Domain model** ([`model`]) — Canonical types (`Device`,
//!   `DeviceGroup`, `Thumbnail`) normalized from the wire-level
//!   responses, with [`MacAddress`] as the universal device identity.
//!
//! - **Conversions** ([`convert`]) — Infallible wire-to-domain mapping,
//!   including property code translation and group member resolution.
//!
//! - **Indexes** ([`index`]) — Pure map builders for addressing devices
//!   and groups by human name and for building action target sets.

pub mod config;
pub mod convert;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod token_store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{REFRESH_TOKEN_FILE, SessionConfig};
pub use error::CoreError;
pub use session::Session;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    ConnectionState, Device, DeviceGroup, DeviceProperties, MacAddress, ProductType, Thumbnail,
};

// The event query shape is shared with the API layer.
pub use wyzely_api::events::EventQuery;

// Token inspection, for reporting on the cached refresh token without
// opening a session.
pub use wyzely_api::token;
