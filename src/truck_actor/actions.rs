//! Lifecycle actions and list filters for the Truck actor.
//!
//! Each [`TruckAction`] moves a truck exactly one stage forward, except `Escalate`,
//! which only touches the priority. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{LoadedProduct, Priority, TruckStatus};

/// Operations that drive a truck through the yard.
#[derive(Debug, Clone, PartialEq)]
pub enum TruckAction {
    /// `Waiting -> Called`, assigning the loading zone.
    Call { zone: String },
    /// `Called -> Loading`.
    StartLoading,
    /// `Loading -> WeighingEntry`, recording what went on the truck.
    FinishLoading { products: Vec<LoadedProduct> },
    /// `WeighingEntry -> WeighingExit`, kilograms.
    RecordEntryWeight(u32),
    /// `WeighingExit -> Completed`, kilograms.
    RecordExitWeight(u32),
    /// Raise the priority one tier.
    Escalate,
}

impl TruckAction {
    /// Verb used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            TruckAction::Call { .. } => "call",
            TruckAction::StartLoading => "start loading",
            TruckAction::FinishLoading { .. } => "finish loading",
            TruckAction::RecordEntryWeight(_) => "record entry weight",
            TruckAction::RecordExitWeight(_) => "record exit weight",
            TruckAction::Escalate => "escalate",
        }
    }
}

/// Results from TruckActions - variants match 1:1 with TruckAction
#[derive(Debug, Clone, PartialEq)]
pub enum TruckActionResult {
    Called { zone: String },
    LoadingStarted,
    LoadingFinished { lines: usize },
    EntryWeighed { entry_weight: u32 },
    /// Net cargo weight in kilograms.
    Completed { net_weight: i64 },
    Escalated(Priority),
}

/// Named projections over the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruckView {
    All,
    /// Waiting at the gate.
    Queued,
    /// Called or loading. Both stages occupy a dock, so boards show them together.
    AtDock,
    Loading,
    /// Either weighbridge pass still outstanding.
    PendingWeighing,
    Completed,
}

impl TruckView {
    pub fn includes(self, status: TruckStatus) -> bool {
        match self {
            TruckView::All => true,
            TruckView::Queued => status == TruckStatus::Waiting,
            TruckView::AtDock => matches!(status, TruckStatus::Called | TruckStatus::Loading),
            TruckView::Loading => status == TruckStatus::Loading,
            TruckView::PendingWeighing => {
                matches!(status, TruckStatus::WeighingEntry | TruckStatus::WeighingExit)
            }
            TruckView::Completed => status == TruckStatus::Completed,
        }
    }
}
