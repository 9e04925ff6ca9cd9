//! # Yard Flow
//!
//! > **The truck registry of a loading yard, run as a single actor.**
//!
//! Trucks are registered at the gate, called to a loading zone, loaded, weighed on
//! the way in and on the way out, and completed with a net cargo weight. Every record
//! lives in one Tokio task; everything else talks to it through a cloneable client.
//!
//! ## 🚀 Core Concepts
//!
//! ### One Writer
//! The registry is owned by a [`ResourceActor`](framework::ResourceActor). It handles
//! requests one at a time, so no request ever observes another half-applied, and
//! there are no locks around the store.
//!
//! ### A Strict Lifecycle
//! ```text
//! WAITING -> CALLED -> LOADING -> WEIGHING_ENTRY -> WEIGHING_EXIT -> COMPLETED
//! ```
//! Each operation is valid from exactly one status. Anything else is a typed
//! [`TruckError`](truck_actor::TruckError) and the record is left untouched.
//!
//! ### Mocking
//! Client code can be tested without an actor. See the [`framework::mock`] module.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! The framework layer reports plumbing failures as
//! [`FrameworkError`](framework::FrameworkError) and carries entity errors inside it.
//! [`TruckClient`](clients::TruckClient) unwraps them again, so callers match on
//! `TruckError` variants directly.
//!
//! ### 2. Async Context Injection
//! The actor's clock is injected through `run()`, not at construction time.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client and the [`ActorEntity`](framework::ActorEntity) trait.
//!
//! ### 2. The Data ([`model`])
//! [`Truck`](model::Truck) and its status and priority enums, plus the operator
//! [`Role`](model::Role) table.
//!
//! ### 3. The State Machine ([`truck_actor`])
//! `ActorEntity` for `Truck`: validation, transitions, list filters.
//!
//! ### 4. The Interface ([`clients`])
//! [`TruckClient`](clients::TruckClient) with one method per yard operation, and
//! [`DashboardMetrics`](clients::DashboardMetrics).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`YardSystem`](lifecycle::YardSystem) starts and stops everything.
//!
//! ### 6. Settings ([`config`])
//! [`YardConfig`](config::YardConfig) from defaults, TOML and `YARD_*` variables.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! YARD_CONFIG=yard.toml cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod truck_actor;
