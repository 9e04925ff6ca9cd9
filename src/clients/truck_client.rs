//! # Truck Client
//!
//! Provides a high-level API for interacting with the `Truck` actor.
//! It wraps a `ResourceClient<Truck>` and exposes one method per yard operation, so
//! callers never build a [`TruckAction`] by hand.

use crate::clients::actor_client::ActorClient;
use crate::clients::dashboard::DashboardMetrics;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{LoadedProduct, Priority, Truck, TruckCreate, TruckId, TruckUpdate};
use crate::truck_actor::{TruckAction, TruckActionResult, TruckError, TruckView};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Truck actor.
#[derive(Clone)]
pub struct TruckClient {
    inner: ResourceClient<Truck>,
}

impl TruckClient {
    pub fn new(inner: ResourceClient<Truck>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Truck> for TruckClient {
    type Error = TruckError;

    fn inner(&self) -> &ResourceClient<Truck> {
        &self.inner
    }

    /// Recovers the domain error the entity raised. Plumbing failures become
    /// `ActorCommunicationError`.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(raw) => match raw.parse::<TruckId>() {
                Ok(id) => TruckError::NotFound(id),
                Err(_) => TruckError::ActorCommunicationError(format!("Item not found: {raw}")),
            },
            FrameworkError::EntityError(inner) => match inner.downcast::<TruckError>() {
                Ok(err) => *err,
                Err(other) => TruckError::ActorCommunicationError(other.to_string()),
            },
            other => TruckError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl TruckClient {
    /// Registers a truck at the gate. It joins the queue as `Waiting` with normal priority.
    #[instrument(skip(self))]
    pub async fn register(&self, params: TruckCreate) -> Result<TruckId, TruckError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Truck registered");
        Ok(id)
    }

    /// Calls a waiting truck to a loading zone.
    #[instrument(skip(self))]
    pub async fn call(&self, id: TruckId, zone: &str) -> Result<(), TruckError> {
        let action = TruckAction::Call {
            zone: zone.to_string(),
        };
        match self.act(id, action).await? {
            TruckActionResult::Called { .. } => Ok(()),
            _ => unreachable!("Call action must return Called result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn start_loading(&self, id: TruckId) -> Result<(), TruckError> {
        match self.act(id, TruckAction::StartLoading).await? {
            TruckActionResult::LoadingStarted => Ok(()),
            _ => unreachable!("StartLoading action must return LoadingStarted result"),
        }
    }

    /// Closes loading with the products that went on the truck and sends it to the
    /// weighbridge.
    #[instrument(skip(self, products), fields(lines = products.len()))]
    pub async fn finish_loading(
        &self,
        id: TruckId,
        products: Vec<LoadedProduct>,
    ) -> Result<(), TruckError> {
        debug!(?products, "Sending request");
        match self.act(id, TruckAction::FinishLoading { products }).await? {
            TruckActionResult::LoadingFinished { .. } => Ok(()),
            _ => unreachable!("FinishLoading action must return LoadingFinished result"),
        }
    }

    /// Records the tare taken on the first weighbridge pass, kilograms.
    #[instrument(skip(self))]
    pub async fn set_entry_weight(&self, id: TruckId, kg: u32) -> Result<(), TruckError> {
        match self.act(id, TruckAction::RecordEntryWeight(kg)).await? {
            TruckActionResult::EntryWeighed { .. } => Ok(()),
            _ => unreachable!("RecordEntryWeight action must return EntryWeighed result"),
        }
    }

    /// Records the loaded weight and completes the visit.
    ///
    /// Returns the net cargo weight, `kg - entry_weight`.
    #[instrument(skip(self))]
    pub async fn set_exit_weight(&self, id: TruckId, kg: u32) -> Result<i64, TruckError> {
        match self.act(id, TruckAction::RecordExitWeight(kg)).await? {
            TruckActionResult::Completed { net_weight } => {
                info!(%id, net_weight, "Truck completed");
                Ok(net_weight)
            }
            _ => unreachable!("RecordExitWeight action must return Completed result"),
        }
    }

    /// Overwrites the priority of a truck that is still in the yard.
    #[instrument(skip(self))]
    pub async fn set_priority(&self, id: TruckId, priority: Priority) -> Result<Truck, TruckError> {
        debug!("Sending request");
        let update = TruckUpdate {
            priority: Some(priority),
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Raises the priority one tier and returns the new tier.
    #[instrument(skip(self))]
    pub async fn escalate(&self, id: TruckId) -> Result<Priority, TruckError> {
        match self.act(id, TruckAction::Escalate).await? {
            TruckActionResult::Escalated(priority) => Ok(priority),
            _ => unreachable!("Escalate action must return Escalated result"),
        }
    }

    pub async fn queued(&self) -> Result<Vec<Truck>, TruckError> {
        self.list(TruckView::Queued).await
    }

    /// Trucks at a dock, whether called or already loading.
    pub async fn called(&self) -> Result<Vec<Truck>, TruckError> {
        self.list(TruckView::AtDock).await
    }

    pub async fn loading(&self) -> Result<Vec<Truck>, TruckError> {
        self.list(TruckView::Loading).await
    }

    pub async fn pending_weighing(&self) -> Result<Vec<Truck>, TruckError> {
        self.list(TruckView::PendingWeighing).await
    }

    pub async fn completed(&self) -> Result<Vec<Truck>, TruckError> {
        self.list(TruckView::Completed).await
    }

    pub async fn all(&self) -> Result<Vec<Truck>, TruckError> {
        self.list(TruckView::All).await
    }

    /// Waiting trucks in the order the gate board shows them: critical first, then
    /// by registration.
    pub async fn queue_board(&self) -> Result<Vec<Truck>, TruckError> {
        let mut board = self.queued().await?;
        board.sort_by_key(Truck::queue_rank);
        Ok(board)
    }

    pub async fn metrics(&self) -> Result<DashboardMetrics, TruckError> {
        let trucks = self.all().await?;
        Ok(DashboardMetrics::from_trucks(&trucks))
    }

    async fn act(&self, id: TruckId, action: TruckAction) -> Result<TruckActionResult, TruckError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
