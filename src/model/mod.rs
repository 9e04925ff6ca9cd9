//! Pure data structures. [`Truck`] implements the
//! [`ActorEntity`](crate::framework::ActorEntity) trait in [`crate::truck_actor`].

pub mod role;
pub mod truck;

pub use role::*;
pub use truck::*;
