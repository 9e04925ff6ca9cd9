//! Periodic dashboard refresh.
//!
//! Reads the registry on a fixed period and publishes the figures on a `watch`
//! channel, which screens subscribe to. The task only reads.

use crate::clients::{DashboardMetrics, TruckClient};
use crate::truck_actor::TruckError;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Runs until `shutdown` flips to `true`, its sender is dropped, or the truck actor
/// goes away.
///
/// The first refresh happens immediately.
pub async fn run_board_refresh(
    trucks: TruckClient,
    period: Duration,
    board: watch::Sender<DashboardMetrics>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(period_secs = period.as_secs(), "Board refresh started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match trucks.metrics().await {
                    Ok(metrics) => {
                        debug!(?metrics, "Board refreshed");
                        if *board.borrow() != metrics {
                            info!(%metrics, "Board updated");
                        }
                        board.send_replace(metrics);
                    }
                    Err(TruckError::ActorCommunicationError(e)) => {
                        warn!(error = %e, "Truck actor unavailable, stopping board refresh");
                        break;
                    }
                    Err(e) => warn!(error = %e, "Board refresh failed"),
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }

    info!("Board refresh stopped");
}
