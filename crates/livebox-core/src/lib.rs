//! Channel resolution and tuning for the Livebox Play TV set-top box.
//!
//! This crate owns the decision logic of the workspace:
//!
//! - **[`CatalogStore`]** — cache-aside store for the channel catalog,
//!   refreshed wholesale from the Orange directory at a configurable
//!   interval. A failed refresh keeps serving the previous snapshot.
//! - **[`resolve`]** — maps a user-supplied channel token to a catalog
//!   entry: `#index` lookup, then case-insensitive exact name match, then
//!   Jaro-Winkler fuzzy ranking with a deterministic tie-break.
//! - **[`TuneCommand`]** — the appliance's wire format for tuning: the
//!   EPG identifier left-padded to 10 chars with `*`.
//! - **[`SetTopBox`]** — facade composing the above with the raw
//!   `livebox-api` clients: set/get channel, power, keys, status.

pub mod catalog;
pub mod config;
pub mod device;
pub mod error;
pub mod model;
pub mod resolver;
pub mod tuner;

pub use catalog::CatalogStore;
pub use config::DeviceConfig;
pub use device::SetTopBox;
pub use error::CoreError;
pub use model::{Catalog, ChannelEntry, MatchKind, ResolvedChannel};
pub use resolver::resolve;
pub use tuner::TuneCommand;

// Re-export the API types that leak through the facade surface.
pub use livebox_api::{DeviceStatus, KeyPressMode, RemoteKey};
