//! Error types for the Truck actor.

use crate::model::{TruckId, TruckStatus};
use thiserror::Error;

/// Errors that can occur during truck operations.
///
/// Every variant is recoverable: the store is left exactly as it was before the
/// failing request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TruckError {
    /// Another truck with the same plate has not completed its visit yet.
    #[error("Plate {plate} is already registered on an active truck")]
    DuplicateActiveRegistration { plate: String },

    /// The operation is not allowed from the truck's current status.
    #[error("Cannot {action} {id}: truck is {from}")]
    InvalidTransition {
        id: TruckId,
        action: &'static str,
        from: TruckStatus,
    },

    /// No truck with this id was ever registered.
    #[error("Truck not found: {0}")]
    NotFound(TruckId),

    /// A required text field was blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Loading cannot be closed without at least one product line.
    #[error("No products recorded for {0}")]
    EmptyLoad(TruckId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
