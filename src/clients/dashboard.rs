//! Supervisor dashboard figures, derived from a snapshot of the registry.

use crate::model::{Truck, TruckStatus};
use crate::truck_actor::TruckView;
use serde::Serialize;
use std::fmt::{self, Display};

/// Headline counters shown on the supervisor dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Every registration since start-up, completed ones included.
    pub incoming_trucks: usize,
    pub active_trucks: usize,
    pub waiting: usize,
    /// Called or loading.
    pub at_dock: usize,
    pub pending_weighing: usize,
    pub loaded_trucks: usize,
    /// Sum of net weights over completed trucks, kilograms.
    pub total_net_weight: i64,
}

impl DashboardMetrics {
    pub fn from_trucks(trucks: &[Truck]) -> Self {
        let count = |view: TruckView| trucks.iter().filter(|t| view.includes(t.status)).count();
        let total_net_weight = trucks
            .iter()
            .filter(|t| t.status == TruckStatus::Completed)
            .filter_map(|t| t.net_weight)
            .sum();

        Self {
            incoming_trucks: trucks.len(),
            active_trucks: trucks.iter().filter(|t| t.is_active()).count(),
            waiting: count(TruckView::Queued),
            at_dock: count(TruckView::AtDock),
            pending_weighing: count(TruckView::PendingWeighing),
            loaded_trucks: count(TruckView::Completed),
            total_net_weight,
        }
    }
}

impl Display for DashboardMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in yard ({} waiting, {} at dock, {} weighing), {} loaded, {} kg shipped",
            self.active_trucks,
            self.waiting,
            self.at_dock,
            self.pending_weighing,
            self.loaded_trucks,
            self.total_net_weight
        )
    }
}
