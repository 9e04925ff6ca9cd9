use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Type-safe identifier for trucks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TruckId(pub u32);

impl From<u32> for TruckId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TruckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "truck_{}", self.0)
    }
}

/// Parses both the display form (`truck_7`) and a bare number (`7`).
impl FromStr for TruckId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("truck_").unwrap_or(s);
        digits.parse().map(Self)
    }
}

/// Where a truck is in the yard. Variants are declared in lifecycle order, so the
/// derived `Ord` is the order a truck moves through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruckStatus {
    Waiting,
    Called,
    Loading,
    WeighingEntry,
    WeighingExit,
    Completed,
}

impl TruckStatus {
    pub const ALL: [TruckStatus; 6] = [
        TruckStatus::Waiting,
        TruckStatus::Called,
        TruckStatus::Loading,
        TruckStatus::WeighingEntry,
        TruckStatus::WeighingExit,
        TruckStatus::Completed,
    ];

    /// The stage that follows this one, or `None` once completed.
    pub fn next(self) -> Option<TruckStatus> {
        match self {
            TruckStatus::Waiting => Some(TruckStatus::Called),
            TruckStatus::Called => Some(TruckStatus::Loading),
            TruckStatus::Loading => Some(TruckStatus::WeighingEntry),
            TruckStatus::WeighingEntry => Some(TruckStatus::WeighingExit),
            TruckStatus::WeighingExit => Some(TruckStatus::Completed),
            TruckStatus::Completed => None,
        }
    }

    /// Every status except `Completed` counts as an active registration.
    pub fn is_active(self) -> bool {
        self != TruckStatus::Completed
    }
}

impl Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TruckStatus::Waiting => "WAITING",
            TruckStatus::Called => "CALLED",
            TruckStatus::Loading => "LOADING",
            TruckStatus::WeighingEntry => "WEIGHING_ENTRY",
            TruckStatus::WeighingExit => "WEIGHING_EXIT",
            TruckStatus::Completed => "COMPLETED",
        };
        f.write_str(label)
    }
}

/// Queue priority tier. Ordered `Normal < Urgent < Critical`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
    Critical,
}

impl Priority {
    /// One tier up; `Critical` is the ceiling.
    pub fn escalated(self) -> Priority {
        match self {
            Priority::Normal => Priority::Urgent,
            Priority::Urgent | Priority::Critical => Priority::Critical,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Normal => "normal",
            Priority::Urgent => "urgent",
            Priority::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// One line of the load recorded when a truck leaves the dock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedProduct {
    pub name: String,
    /// Free text as written on the loading sheet, e.g. `"25T"`.
    pub quantity: String,
}

impl LoadedProduct {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

/// A truck moving through the yard.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Truck`](#impl-ActorEntity-for-Truck) for details on:
/// - Creation parameters ([`TruckCreate`])
/// - Update parameters ([`TruckUpdate`])
/// - Lifecycle actions ([`TruckAction`](crate::truck_actor::TruckAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: TruckId,
    /// Upper-cased licence plate.
    pub plate: String,
    pub driver: String,
    pub client: String,
    pub product: String,
    /// Registration time, minute precision.
    pub arrival_time: NaiveTime,
    pub priority: Priority,
    pub status: TruckStatus,
    pub zone: Option<String>,
    /// Kilograms.
    pub entry_weight: Option<u32>,
    /// Kilograms.
    pub exit_weight: Option<u32>,
    /// `exit_weight - entry_weight`, set once at completion.
    pub net_weight: Option<i64>,
    pub loaded_products: Vec<LoadedProduct>,
}

impl Truck {
    /// Creates a freshly registered truck: waiting, normal priority, nothing weighed.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `params` - Registration form, already normalized
    /// * `arrival_time` - Registration time
    pub fn new(id: TruckId, params: TruckCreate, arrival_time: NaiveTime) -> Self {
        Self {
            id,
            plate: params.plate,
            driver: params.driver,
            client: params.client,
            product: params.product,
            arrival_time,
            priority: Priority::Normal,
            status: TruckStatus::Waiting,
            zone: None,
            entry_weight: None,
            exit_weight: None,
            net_weight: None,
            loaded_products: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Arrival time as shown on the boards, `HH:MM`.
    pub fn time_label(&self) -> String {
        self.arrival_time.format("%H:%M").to_string()
    }

    /// Sort key for the waiting board: critical first, then registration order.
    pub fn queue_rank(&self) -> (Reverse<Priority>, TruckId) {
        (Reverse(self.priority), self.id)
    }
}

/// Payload for registering a truck at the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckCreate {
    pub plate: String,
    pub driver: String,
    pub client: String,
    pub product: String,
}

impl TruckCreate {
    pub fn new(
        plate: impl Into<String>,
        driver: impl Into<String>,
        client: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            plate: plate.into(),
            driver: driver.into(),
            client: client.into(),
            product: product.into(),
        }
    }
}

/// Payload for editing fields outside the lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckUpdate {
    pub priority: Option<Priority>,
}

/// Upper-cases a plate and strips surrounding whitespace.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}
