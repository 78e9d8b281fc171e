// ── Wyze domain model ──
//
// Every type in this module is the canonical representation of a Wyze
// entity. They normalize the wire-level responses into a single clean
// interface that consumers (the CLI) depend on.

pub mod device;
pub mod entity_id;
pub mod group;
pub mod thumbnail;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use wyzely_core::model::*` gives you everything.

pub use device::{ConnectionState, Device, DeviceProperties, ProductType};
pub use entity_id::MacAddress;
pub use group::DeviceGroup;
pub use thumbnail::Thumbnail;
