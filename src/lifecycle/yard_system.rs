use crate::clients::{DashboardMetrics, TruckClient};
use crate::config::{ConfigError, YardConfig};
use crate::lifecycle::board::run_board_refresh;
use crate::model::TruckId;
use crate::truck_actor::{self, TruckError, YardClock};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for the yard.
///
/// `YardSystem` is responsible for:
/// - **Lifecycle Management**: starting the truck actor and stopping it on shutdown
/// - **Context Wiring**: handing the actor its [`YardClock`]
/// - **Board Refresh**: the optional periodic dashboard task
///
/// # Example
///
/// ```ignore
/// let config = YardConfig::load()?;
/// let mut system = YardSystem::new(&config)?;
/// let board = system.start_board_refresh();
///
/// let id = system.trucks.register(form).await?;
/// system.call_to_default_zone(id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct YardSystem {
    /// Client for interacting with the Truck actor
    pub trucks: TruckClient,

    config: YardConfig,
    board_tx: watch::Sender<DashboardMetrics>,
    shutdown_tx: watch::Sender<bool>,
    actor_handle: JoinHandle<()>,
    board_handle: Option<JoinHandle<()>>,
}

impl YardSystem {
    /// Starts the truck actor with the wall clock.
    ///
    /// Must be called from within a Tokio runtime. Fails without spawning anything if
    /// `config` does not pass [`YardConfig::validate`].
    pub fn new(config: &YardConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, YardClock::System)
    }

    /// Starts the truck actor with an explicit clock.
    pub fn with_clock(config: &YardConfig, clock: YardClock) -> Result<Self, ConfigError> {
        config.validate()?;
        let (actor, client) = truck_actor::new(config.channel_capacity);
        let actor_handle = tokio::spawn(actor.run(clock));

        let (board_tx, _) = watch::channel(DashboardMetrics::default());
        let (shutdown_tx, _) = watch::channel(false);

        info!(
            channel_capacity = config.channel_capacity,
            default_zone = %config.default_zone,
            "Yard system started"
        );

        Ok(Self {
            trucks: TruckClient::new(client),
            config: config.clone(),
            board_tx,
            shutdown_tx,
            actor_handle,
            board_handle: None,
        })
    }

    pub fn config(&self) -> &YardConfig {
        &self.config
    }

    /// Spawns the dashboard refresh task, once, and returns a subscription to it.
    pub fn start_board_refresh(&mut self) -> watch::Receiver<DashboardMetrics> {
        if self.board_handle.is_none() {
            let task = run_board_refresh(
                self.trucks.clone(),
                self.config.refresh_interval(),
                self.board_tx.clone(),
                self.shutdown_tx.subscribe(),
            );
            self.board_handle = Some(tokio::spawn(task));
        }
        self.board()
    }

    /// Latest published dashboard figures. Stays at the default until the refresh task
    /// has run.
    pub fn board(&self) -> watch::Receiver<DashboardMetrics> {
        self.board_tx.subscribe()
    }

    /// Calls a waiting truck to the configured default zone.
    pub async fn call_to_default_zone(&self, id: TruckId) -> Result<(), TruckError> {
        self.trucks.call(id, &self.config.default_zone).await
    }

    /// Gracefully shuts down the system.
    ///
    /// Stops the board refresh first, then drops the client so the actor sees its
    /// channel close, and waits for both tasks. Fails if either task panicked.
    ///
    /// Clones of [`TruckClient`] held elsewhere keep the actor alive; drop them first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down yard system...");

        self.shutdown_tx.send_replace(true);
        if let Some(handle) = self.board_handle {
            handle.await.inspect_err(|e| error!("Board task failed: {:?}", e))?;
        }

        drop(self.trucks);
        self.actor_handle
            .await
            .inspect_err(|e| error!("Actor task failed: {:?}", e))?;

        info!("Yard system shutdown complete.");
        Ok(())
    }
}
