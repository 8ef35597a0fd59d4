//! Services.
//!
//! The API client and everything it is built from (transports, credential
//! storage, origin discovery, endpoint catalog), plus the background update
//! poller and the discovery server.

pub mod api_client;
pub mod credentials;
pub mod demo;
pub mod discovery;
pub mod discovery_server;
pub mod endpoints;
pub mod live_chat;
pub mod request;
pub mod transport;
pub mod update_poller;

pub use api_client::{ApiClient, ClientConfig, ClientMode, OriginConfig};
pub use credentials::{JsonFileStore, KeyValueStore, KeyringStore, MemoryStore};
pub use discovery::DiscoveryClient;
pub use request::{MultipartBody, QueryParams, RequestBody};
pub use update_poller::{PollerConfig, UpdatePoller, UpdatePollerHandle};
