use serde::{Deserialize, Serialize};

/// Operator roles. A role only decides which views a session is offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Supervisor,
    ControlAgent,
    ParkAgent,
    WeighingAgent,
    Admin,
    PublicTv,
}

/// Screens a consumer can render on top of the truck store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    Dashboard,
    Entry,
    Queue,
    Shipping,
    Weighing,
    History,
    Administration,
    PublicBoard,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Dashboard,
        View::Entry,
        View::Queue,
        View::Shipping,
        View::Weighing,
        View::History,
        View::Administration,
        View::PublicBoard,
    ];
}

impl Role {
    pub fn can_view(self, view: View) -> bool {
        use Role::*;
        match view {
            View::Dashboard => matches!(self, Supervisor | Admin),
            View::Entry => matches!(self, ControlAgent | Supervisor | Admin),
            View::Queue => matches!(self, Supervisor | ControlAgent | ParkAgent | Admin),
            View::Shipping => matches!(self, ParkAgent | Supervisor | Admin),
            View::Weighing => matches!(self, WeighingAgent | Supervisor | Admin),
            View::History => matches!(self, Supervisor | Admin),
            View::Administration => matches!(self, Admin),
            View::PublicBoard => matches!(self, PublicTv),
        }
    }

    /// The menu for this role, in display order.
    pub fn views(self) -> Vec<View> {
        View::ALL.into_iter().filter(|v| self.can_view(*v)).collect()
    }
}
