//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. The output is compact and
//! hides the module path (`with_target(false)`); the actor tags its own lines with
//! `entity_type` instead.
//!
//! `RUST_LOG` wins when set. Otherwise the `log_filter` from
//! [`YardConfig`](crate::config::YardConfig) applies.
//!
//! ```bash
//! RUST_LOG=info cargo run               # lifecycle events only
//! RUST_LOG=debug cargo run              # request payloads too
//! RUST_LOG=yard_flow::lifecycle=debug   # one module
//! ```
//!
//! With `info` a full visit reads:
//!
//! ```text
//! INFO Created entity_type="Truck" id=truck_1 size=1
//! INFO register: Truck registered id=truck_1
//! INFO Action ok entity_type="Truck" id=truck_1
//! ...
//! INFO set_exit_weight: Truck completed id=truck_1 net_weight=25500
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
