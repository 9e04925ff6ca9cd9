//! # Truck Actor
//!
//! The truck registry: every truck that ever entered the yard, owned by a single
//! [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Truck`], i.e. the lifecycle state machine
//! - [`error`] - [`TruckError`] type for type-safe error handling
//! - [`actions`] - [`TruckAction`], [`TruckActionResult`] and the [`TruckView`] filters
//! - [`clock`] - [`YardClock`], the actor's context, used to stamp arrival times
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use yard_flow::clients::TruckClient;
//! use yard_flow::model::TruckCreate;
//! use yard_flow::truck_actor::{self, YardClock};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = truck_actor::new(32);
//!     let trucks = TruckClient::new(generic_client);
//!
//!     tokio::spawn(actor.run(YardClock::System));
//!
//!     let id = trucks
//!         .register(TruckCreate::new("AB-123-CD", "Koné Ibrahim", "BTP Construction", "Ciment"))
//!         .await?;
//!     trucks.call(id, "A1").await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod clock;
pub mod entity;
pub mod error;

pub use actions::*;
pub use clock::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Truck;

/// Creates a new Truck actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Truck>, ResourceClient<Truck>) {
    ResourceActor::new(buffer_size)
}
