//! Entity trait implementation for the Truck domain type.
//!
//! This is the lifecycle state machine. Every transition checks the current status
//! first, then validates its payload, and only then writes. The actor runs these hooks
//! on a scratch copy, so an error can never leave a half-applied transition behind.
//!
//! ```text
//! Waiting --Call--> Called --StartLoading--> Loading --FinishLoading--> WeighingEntry
//!   --RecordEntryWeight--> WeighingExit --RecordExitWeight--> Completed
//! ```

use super::actions::{TruckAction, TruckActionResult, TruckView};
use super::clock::YardClock;
use super::error::TruckError;
use crate::framework::ActorEntity;
use crate::model::{
    normalize_plate, LoadedProduct, Truck, TruckCreate, TruckId, TruckStatus, TruckUpdate,
};
use async_trait::async_trait;
use chrono::NaiveTime;
use tracing::warn;

#[async_trait]
impl ActorEntity for Truck {
    type Id = TruckId;
    type Create = TruckCreate;
    type Update = TruckUpdate;
    type Action = TruckAction;
    type ActionResult = TruckActionResult;
    type Query = TruckView;
    type Context = YardClock;
    type Error = TruckError;

    /// Validates and normalizes the gate form. The arrival time is stamped later, in
    /// `on_create`, from the actor's clock.
    fn from_create_params(id: TruckId, params: TruckCreate) -> Result<Self, Self::Error> {
        let form = TruckCreate {
            plate: normalize_plate(&required("plate", &params.plate)?),
            driver: required("driver", &params.driver)?,
            client: required("client", &params.client)?,
            product: required("product", &params.product)?,
        };
        Ok(Truck::new(id, form, NaiveTime::MIN))
    }

    /// A plate may only be on one active truck at a time.
    fn check_conflict(&self, existing: &Self) -> Result<(), Self::Error> {
        if existing.is_active() && existing.plate == self.plate {
            return Err(TruckError::DuplicateActiveRegistration {
                plate: self.plate.clone(),
            });
        }
        Ok(())
    }

    fn matches(&self, view: &TruckView) -> bool {
        view.includes(self.status)
    }

    async fn on_create(&mut self, clock: &YardClock) -> Result<(), Self::Error> {
        self.arrival_time = clock.now();
        Ok(())
    }

    /// Overwrites the priority. Completed trucks are frozen.
    async fn on_update(&mut self, update: TruckUpdate, _ctx: &YardClock) -> Result<(), Self::Error> {
        if let Some(priority) = update.priority {
            self.ensure_active("set priority")?;
            self.priority = priority;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TruckAction,
        _ctx: &YardClock,
    ) -> Result<TruckActionResult, Self::Error> {
        let name = action.name();
        match action {
            TruckAction::Call { zone } => {
                let next = self.ensure_status(TruckStatus::Waiting, name)?;
                let zone = required("zone", &zone)?;
                self.zone = Some(zone.clone());
                self.status = next;
                Ok(TruckActionResult::Called { zone })
            }
            TruckAction::StartLoading => {
                self.status = self.ensure_status(TruckStatus::Called, name)?;
                Ok(TruckActionResult::LoadingStarted)
            }
            TruckAction::FinishLoading { products } => {
                let next = self.ensure_status(TruckStatus::Loading, name)?;
                if products.is_empty() {
                    return Err(TruckError::EmptyLoad(self.id));
                }
                let products = products
                    .into_iter()
                    .map(|line| {
                        Ok(LoadedProduct {
                            name: required("product name", &line.name)?,
                            quantity: required("product quantity", &line.quantity)?,
                        })
                    })
                    .collect::<Result<Vec<_>, TruckError>>()?;
                let lines = products.len();
                self.loaded_products = products;
                self.status = next;
                Ok(TruckActionResult::LoadingFinished { lines })
            }
            TruckAction::RecordEntryWeight(kg) => {
                let next = self.ensure_status(TruckStatus::WeighingEntry, name)?;
                self.entry_weight = Some(kg);
                self.status = next;
                Ok(TruckActionResult::EntryWeighed { entry_weight: kg })
            }
            TruckAction::RecordExitWeight(kg) => {
                let next = self.ensure_status(TruckStatus::WeighingExit, name)?;
                let Some(entry) = self.entry_weight else {
                    return Err(self.invalid(name));
                };
                let net_weight = i64::from(kg) - i64::from(entry);
                if net_weight < 0 {
                    warn!(id = %self.id, entry, exit = kg, net_weight, "Exit lighter than entry");
                }
                self.exit_weight = Some(kg);
                self.net_weight = Some(net_weight);
                self.status = next;
                Ok(TruckActionResult::Completed { net_weight })
            }
            TruckAction::Escalate => {
                self.ensure_active(name)?;
                self.priority = self.priority.escalated();
                Ok(TruckActionResult::Escalated(self.priority))
            }
        }
    }
}

impl Truck {
    /// Returns the status this truck moves to, provided it currently sits in `expected`.
    fn ensure_status(&self, expected: TruckStatus, action: &'static str) -> Result<TruckStatus, TruckError> {
        if self.status != expected {
            return Err(self.invalid(action));
        }
        expected.next().ok_or_else(|| self.invalid(action))
    }

    fn ensure_active(&self, action: &'static str) -> Result<(), TruckError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> TruckError {
        TruckError::InvalidTransition {
            id: self.id,
            action,
            from: self.status,
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, TruckError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TruckError::MissingField(field));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    const CLOCK: YardClock = YardClock::System;

    fn registered() -> Truck {
        Truck::from_create_params(
            TruckId(1),
            TruckCreate::new(" ab-123-cd ", "Koné Ibrahim", "BTP Construction", "Ciment"),
        )
        .unwrap()
    }

    async fn drive(truck: &mut Truck, actions: Vec<TruckAction>) {
        for action in actions {
            truck.handle_action(action, &CLOCK).await.unwrap();
        }
    }

    fn to_completed() -> Vec<TruckAction> {
        vec![
            TruckAction::Call { zone: "A1".into() },
            TruckAction::StartLoading,
            TruckAction::FinishLoading {
                products: vec![LoadedProduct::new("Ciment", "25T")],
            },
            TruckAction::RecordEntryWeight(12000),
            TruckAction::RecordExitWeight(37500),
        ]
    }

    #[test]
    fn test_create_normalizes_form() {
        let truck = registered();
        assert_eq!(truck.plate, "AB-123-CD");
        assert_eq!(truck.status, TruckStatus::Waiting);
        assert_eq!(truck.priority, Priority::Normal);
    }

    #[test]
    fn test_create_rejects_blank_fields() {
        let err = Truck::from_create_params(TruckId(1), TruckCreate::new("AB-1", "  ", "c", "p"))
            .unwrap_err();
        assert_eq!(err, TruckError::MissingField("driver"));
    }

    #[test]
    fn test_conflict_only_with_active_same_plate() {
        let candidate = registered();
        let mut other = registered();
        other.id = TruckId(9);
        assert!(matches!(
            candidate.check_conflict(&other),
            Err(TruckError::DuplicateActiveRegistration { plate }) if plate == "AB-123-CD"
        ));

        other.status = TruckStatus::Completed;
        assert!(candidate.check_conflict(&other).is_ok());

        other.status = TruckStatus::Waiting;
        other.plate = "XY-987-ZZ".into();
        assert!(candidate.check_conflict(&other).is_ok());
    }

    #[tokio::test]
    async fn test_full_lifecycle_computes_net_weight() {
        let mut truck = registered();
        drive(&mut truck, to_completed()).await;

        assert_eq!(truck.status, TruckStatus::Completed);
        assert_eq!(truck.zone.as_deref(), Some("A1"));
        assert_eq!(truck.loaded_products.len(), 1);
        assert_eq!(truck.entry_weight, Some(12000));
        assert_eq!(truck.exit_weight, Some(37500));
        assert_eq!(truck.net_weight, Some(25500));
    }

    #[tokio::test]
    async fn test_every_out_of_order_action_is_rejected() {
        for (index, status) in TruckStatus::ALL.into_iter().enumerate() {
            for (step, action) in to_completed().into_iter().enumerate() {
                if step == index {
                    continue;
                }
                let mut truck = registered();
                truck.status = status;
                truck.entry_weight = Some(12000);
                let before = truck.clone();
                let err = truck.handle_action(action, &CLOCK).await.unwrap_err();
                assert!(
                    matches!(err, TruckError::InvalidTransition { from, .. } if from == status),
                    "step {step} from {status}: {err}"
                );
                assert_eq!(truck, before);
            }
        }
    }

    #[tokio::test]
    async fn test_call_requires_zone() {
        let mut truck = registered();
        let err = truck
            .handle_action(TruckAction::Call { zone: " ".into() }, &CLOCK)
            .await
            .unwrap_err();
        assert_eq!(err, TruckError::MissingField("zone"));
    }

    #[tokio::test]
    async fn test_finish_loading_requires_products() {
        let mut truck = registered();
        drive(
            &mut truck,
            vec![TruckAction::Call { zone: "B2".into() }, TruckAction::StartLoading],
        )
        .await;

        let err = truck
            .handle_action(TruckAction::FinishLoading { products: vec![] }, &CLOCK)
            .await
            .unwrap_err();
        assert_eq!(err, TruckError::EmptyLoad(TruckId(1)));

        let err = truck
            .handle_action(
                TruckAction::FinishLoading {
                    products: vec![LoadedProduct::new("Sable", "")],
                },
                &CLOCK,
            )
            .await
            .unwrap_err();
        assert_eq!(err, TruckError::MissingField("product quantity"));
    }

    #[tokio::test]
    async fn test_negative_net_weight_is_recorded_as_is() {
        let mut truck = registered();
        let mut actions = to_completed();
        actions[4] = TruckAction::RecordExitWeight(11000);
        drive(&mut truck, actions).await;
        assert_eq!(truck.net_weight, Some(-1000));
    }

    #[tokio::test]
    async fn test_escalate_and_set_priority_stop_at_completion() {
        let mut truck = registered();
        let result = truck.handle_action(TruckAction::Escalate, &CLOCK).await.unwrap();
        assert_eq!(result, TruckActionResult::Escalated(Priority::Urgent));

        truck
            .on_update(TruckUpdate { priority: Some(Priority::Normal) }, &CLOCK)
            .await
            .unwrap();
        assert_eq!(truck.priority, Priority::Normal);

        drive(&mut truck, to_completed()).await;
        assert!(truck.handle_action(TruckAction::Escalate, &CLOCK).await.is_err());
        let err = truck
            .on_update(TruckUpdate { priority: Some(Priority::Critical) }, &CLOCK)
            .await
            .unwrap_err();
        assert!(matches!(err, TruckError::InvalidTransition { action: "set priority", .. }));
    }
}
