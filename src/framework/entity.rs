//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type implements to be owned by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the associated
//! types for ids, DTOs, actions, queries, context and errors, and provides the hooks the
//! actor calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::check_conflict`]
//!
//! Both default to `Ok(())`. Implement them only when creation needs side effects or
//! a uniqueness rule that spans the whole store.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` and receive the `Context` that was handed to
/// [`ResourceActor::run`](crate::framework::ResourceActor::run). Dependencies are bound
/// when the actor starts, not when it is constructed.
///
/// # Atomicity
/// `on_update` and `handle_action` run against a scratch copy of the stored record.
/// The actor commits the copy only when the hook returns `Ok`, so a hook may bail out
/// halfway through without leaving a partially applied change behind.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Ids are issued by the actor from a `u32` counter and define store order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update fields that are not part of a lifecycle.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. lifecycle transitions).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `List` requests.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every operation of the entity. Clients downcast it back out of
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before any other hook.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Checks a candidate record against one record already in the store.
    ///
    /// Called once per stored record before `on_create`. Returning an error rejects the
    /// candidate and leaves the store untouched.
    fn check_conflict(&self, _existing: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Returns true when this record belongs in the result of `query`.
    fn matches(&self, query: &Self::Query) -> bool;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity passed conflict checks, right before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
