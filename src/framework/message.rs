//! # Generic Messages
//!
//! Request types sent from a `ResourceClient` to its `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the operations a registry needs: create a record, read one,
/// update non-lifecycle fields, run a domain action, and list records matching a query.
/// There is no delete: records are kept for historical reads.
///
/// The enum is generic over `T: ActorEntity` and uses its associated types, so a
/// payload meant for one entity type cannot be sent to another entity's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
