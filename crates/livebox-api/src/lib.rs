//! Async client for the Orange Livebox Play TV set-top box.
//!
//! Two HTTP surfaces are wrapped here:
//!
//! - **[`RemoteClient`]** — the appliance's local `remoteControl` API
//!   (status, key presses, tuning). Plain HTTP on port 8080, every call a
//!   single GET whose response is wrapped in a
//!   `{ result: { responseCode, message, data } }` envelope.
//! - **[`DirectoryClient`]** — the Orange channel directory web service,
//!   the source of the name / tvIndex / epgId catalog records.
//!
//! `livebox-core` builds the catalog cache, channel resolution, and the
//! device facade on top of these raw clients.

pub mod directory;
pub mod error;
pub mod keys;
pub mod models;
pub mod remote;
pub mod transport;

pub use directory::{DEFAULT_DIRECTORY_URL, DirectoryClient};
pub use error::Error;
pub use keys::{KeyPressMode, RemoteKey};
pub use models::{ChannelRecord, DeviceStatus};
pub use remote::RemoteClient;
pub use transport::TransportConfig;
