//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the yard's tasks.
//!
//! ## The YardSystem Pattern
//!
//! [`YardSystem`] owns the single truck actor and, optionally, the board refresh task:
//!
//! ```rust,ignore
//! let (actor, client) = truck_actor::new(config.channel_capacity);
//! let actor_handle = tokio::spawn(actor.run(clock));
//! ```
//!
//! ## Context Injection
//!
//! The truck actor's `Context` is a [`YardClock`](crate::truck_actor::YardClock). It is
//! bound when the actor starts, not when it is built, so tests hand in a fixed clock
//! and production hands in the system one.
//!
//! ## Graceful Shutdown
//!
//! 1. **Signal the board task** - a `watch` flag flips to `true` and the task exits its
//!    `select!` loop
//! 2. **Drop the client** - closes the sender side of the actor's channel
//! 3. **Actor drains** - `receiver.recv()` returns `None` once every sender is gone; the
//!    actor logs its final size
//! 4. **Await completion** - both task handles are joined
//!
//! ## Observability
//!
//! See the [`tracing`] module.

pub mod board;
pub mod tracing;
pub mod yard_system;

pub use board::*;
pub use self::tracing::*;
pub use yard_system::*;
