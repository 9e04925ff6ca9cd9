use std::error::Error;

use tracing::{info, warn, Instrument};
use yard_flow::config::YardConfig;
use yard_flow::lifecycle::{setup_tracing, YardSystem};
use yard_flow::model::{LoadedProduct, Priority, Role, TruckCreate};
use yard_flow::truck_actor::TruckError;

/// Morning arrivals: plate, driver, client, product, priority.
const ARRIVALS: [(&str, &str, &str, &str, Priority); 7] = [
    ("AB-123-CD", "Koné Ibrahim", "BTP Construction", "Ciment", Priority::Critical),
    ("XY-987-ZZ", "Diallo Moussa", "Route Express", "Sable", Priority::Normal),
    ("CI-456-AA", "Touré Amadou", "Batimat", "Gravier", Priority::Urgent),
    ("HG-111-FD", "Coulibaly Seydou", "Infraroute", "Ciment", Priority::Normal),
    ("JK-222-LM", "Bamba Lacina", "Particulier", "Sable", Priority::Normal),
    ("MN-333-OP", "Ouattara Yves", "BTP Plus", "Gravier", Priority::Normal),
    ("QR-444-ST", "Sanogo Paul", "Construction CI", "Ciment", Priority::Urgent),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = YardConfig::load()?;
    setup_tracing(&config.log_filter);

    info!("Starting yard");
    for role in [Role::ControlAgent, Role::ParkAgent, Role::WeighingAgent, Role::Supervisor] {
        info!(?role, views = ?role.views(), "Menu");
    }

    let mut system = YardSystem::new(&config)?;
    let board = system.start_board_refresh();
    let trucks = system.trucks.clone();

    let span = tracing::info_span!("gate");
    let ids = async {
        let mut ids = Vec::with_capacity(ARRIVALS.len());
        for (plate, driver, client, product, priority) in ARRIVALS {
            let id = trucks
                .register(TruckCreate::new(plate, driver, client, product))
                .await?;
            if priority != Priority::Normal {
                trucks.set_priority(id, priority).await?;
            }
            ids.push(id);
        }
        Ok::<_, TruckError>(ids)
    }
    .instrument(span)
    .await?;

    for truck in trucks.queue_board().await? {
        info!(
            id = %truck.id,
            plate = %truck.plate,
            priority = %truck.priority,
            time = %truck.time_label(),
            "Queued"
        );
    }

    // A plate cannot come through the gate twice while its first visit is open.
    match trucks
        .register(TruckCreate::new("ab-123-cd", "Koné Ibrahim", "BTP Construction", "Ciment"))
        .await
    {
        Err(e @ TruckError::DuplicateActiveRegistration { .. }) => warn!(error = %e, "Rejected at gate"),
        other => warn!(?other, "Expected duplicate registration to be rejected"),
    }

    let first = ids[0];
    let span = tracing::info_span!("visit", id = %first);
    let net_weight = async {
        system.call_to_default_zone(first).await?;
        trucks.start_loading(first).await?;
        trucks
            .finish_loading(first, vec![LoadedProduct::new("Ciment", "25T")])
            .await?;
        trucks.set_entry_weight(first, 12_000).await?;
        trucks.set_exit_weight(first, 37_500).await
    }
    .instrument(span)
    .await?;
    info!(id = %first, net_weight, "Visit complete");

    // The plate is free again once the first visit is completed.
    let again = trucks
        .register(TruckCreate::new("AB-123-CD", "Koné Ibrahim", "BTP Construction", "Ciment"))
        .await?;
    info!(id = %again, "Returning truck registered");

    let metrics = trucks.metrics().await?;
    info!(%metrics, "Dashboard");
    let published = *board.borrow();
    info!(%published, "Last board refresh");

    drop(trucks);
    system.shutdown().await?;

    info!("Yard closed");
    Ok(())
}
