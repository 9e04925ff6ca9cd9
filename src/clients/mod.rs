//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod dashboard;
pub mod truck_client;

pub use actor_client::*;
pub use dashboard::*;
pub use truck_client::*;
