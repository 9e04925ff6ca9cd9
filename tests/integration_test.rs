use std::time::Duration;
use yard_flow::clients::actor_client::ActorClient;
use yard_flow::config::{ConfigError, YardConfig};
use yard_flow::lifecycle::YardSystem;
use yard_flow::model::{LoadedProduct, TruckCreate, TruckId, TruckStatus};
use yard_flow::truck_actor::TruckError;

fn form(plate: &str) -> TruckCreate {
    TruckCreate::new(plate, "Koné Ibrahim", "BTP Construction", "Ciment")
}

async fn complete(system: &YardSystem, id: TruckId, entry: u32, exit: u32) -> i64 {
    let trucks = &system.trucks;
    trucks.call(id, "A1").await.unwrap();
    trucks.start_loading(id).await.unwrap();
    trucks
        .finish_loading(id, vec![LoadedProduct::new("Ciment", "25T")])
        .await
        .unwrap();
    trucks.set_entry_weight(id, entry).await.unwrap();
    trucks.set_exit_weight(id, exit).await.unwrap()
}

/// Full end-to-end visit through the real system.
#[tokio::test]
async fn test_full_visit_through_the_yard() {
    let system = YardSystem::new(&YardConfig::default()).unwrap();
    let trucks = &system.trucks;

    let id = trucks.register(form("AB-123-CD")).await.expect("Failed to register");
    assert_eq!(id, TruckId(1));
    assert_eq!(trucks.queued().await.unwrap().len(), 1);

    trucks.call(id, "A1").await.unwrap();
    assert!(trucks.queued().await.unwrap().is_empty());
    assert_eq!(trucks.called().await.unwrap().len(), 1);

    trucks.start_loading(id).await.unwrap();
    assert_eq!(trucks.loading().await.unwrap().len(), 1);
    assert_eq!(trucks.called().await.unwrap().len(), 1, "loading trucks stay at the dock");

    trucks
        .finish_loading(id, vec![LoadedProduct::new("Ciment", "25T")])
        .await
        .unwrap();
    assert_eq!(trucks.pending_weighing().await.unwrap().len(), 1);

    trucks.set_entry_weight(id, 12000).await.unwrap();
    assert_eq!(trucks.pending_weighing().await.unwrap().len(), 1);

    let net_weight = trucks.set_exit_weight(id, 37500).await.unwrap();
    assert_eq!(net_weight, 25500);

    let truck = trucks.get(id).await.unwrap().expect("Truck not found");
    assert_eq!(truck.status, TruckStatus::Completed);
    assert_eq!(truck.zone.as_deref(), Some("A1"));
    assert_eq!(truck.entry_weight, Some(12000));
    assert_eq!(truck.exit_weight, Some(37500));
    assert_eq!(truck.net_weight, Some(25500));
    assert_eq!(truck.loaded_products, vec![LoadedProduct::new("Ciment", "25T")]);
    assert_eq!(trucks.completed().await.unwrap().len(), 1);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_plate_is_reusable_only_after_completion() {
    let system = YardSystem::new(&YardConfig::default()).unwrap();
    let trucks = &system.trucks;

    let first = trucks.register(form("AB-123-CD")).await.unwrap();

    let err = trucks.register(form("  ab-123-cd ")).await.unwrap_err();
    assert_eq!(
        err,
        TruckError::DuplicateActiveRegistration {
            plate: "AB-123-CD".into()
        }
    );
    assert_eq!(trucks.all().await.unwrap().len(), 1, "registry must be unchanged");

    complete(&system, first, 12000, 37500).await;

    // The rejected attempt did not consume an id.
    let second = trucks.register(form("AB-123-CD")).await.unwrap();
    assert_eq!(second, TruckId(2));
    assert_eq!(trucks.all().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_transition_leaves_truck_unchanged() {
    let system = YardSystem::new(&YardConfig::default()).unwrap();
    let trucks = &system.trucks;

    let id = trucks.register(form("CI-456-AA")).await.unwrap();
    trucks.call(id, "B2").await.unwrap();
    let before = trucks.get(id).await.unwrap().unwrap();

    let err = trucks.call(id, "A1").await.unwrap_err();
    assert_eq!(
        err,
        TruckError::InvalidTransition {
            id,
            action: "call",
            from: TruckStatus::Called,
        }
    );
    assert!(trucks.set_exit_weight(id, 30000).await.is_err());

    assert_eq!(trucks.get(id).await.unwrap().unwrap(), before);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let system = YardSystem::new(&YardConfig::default()).unwrap();

    assert!(system.trucks.get(TruckId(42)).await.unwrap().is_none());
    assert_eq!(
        system.trucks.start_loading(TruckId(42)).await.unwrap_err(),
        TruckError::NotFound(TruckId(42))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_default_zone_comes_from_config() {
    let config = YardConfig {
        default_zone: "B2".into(),
        ..YardConfig::default()
    };
    let system = YardSystem::new(&config).unwrap();
    assert_eq!(system.config(), &config);

    let id = system.trucks.register(form("HG-111-FD")).await.unwrap();
    system.call_to_default_zone(id).await.unwrap();
    let truck = system.trucks.get(id).await.unwrap().unwrap();
    assert_eq!(truck.zone.as_deref(), Some("B2"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unusable_config_is_rejected_before_start() {
    let zero_capacity = YardConfig {
        channel_capacity: 0,
        ..YardConfig::default()
    };
    let Err(err) = YardSystem::new(&zero_capacity) else {
        panic!("zero channel capacity must be rejected");
    };
    assert!(matches!(err, ConfigError::InvalidValue { key: "channel_capacity", .. }));

    let zero_refresh = YardConfig {
        refresh_interval_secs: 0,
        ..YardConfig::default()
    };
    let Err(err) = YardSystem::new(&zero_refresh) else {
        panic!("zero refresh interval must be rejected");
    };
    assert!(matches!(err, ConfigError::InvalidValue { key: "refresh_interval_secs", .. }));

    let blank_zone = YardConfig {
        default_zone: "  ".into(),
        ..YardConfig::default()
    };
    assert!(YardSystem::new(&blank_zone).is_err());
}

/// Test concurrent registrations to verify the actor serializes them.
#[tokio::test]
async fn test_concurrent_registrations() {
    let system = YardSystem::new(&YardConfig::default()).unwrap();

    let mut handles = vec![];
    for i in 0..20 {
        let trucks = system.trucks.clone();
        handles.push(tokio::spawn(async move {
            trucks.register(form(&format!("CC-{i:03}-XX"))).await
        }));
    }
    let mut ids: Vec<u32> = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    // Same plate from many gates at once: exactly one wins.
    let mut handles = vec![];
    for _ in 0..10 {
        let trucks = system.trucks.clone();
        handles.push(tokio::spawn(async move { trucks.register(form("QR-444-ST")).await }));
    }
    let mut successful = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(e) => assert!(matches!(e, TruckError::DuplicateActiveRegistration { .. })),
        }
    }
    assert_eq!(successful, 1);
    assert_eq!(system.trucks.all().await.unwrap().len(), 21);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_views_partition_the_registry() {
    let system = YardSystem::new(&YardConfig::default()).unwrap();
    let trucks = &system.trucks;

    let waiting = trucks.register(form("XY-987-ZZ")).await.unwrap();
    let called = trucks.register(form("CI-456-AA")).await.unwrap();
    let weighing = trucks.register(form("MN-333-OP")).await.unwrap();
    let done = trucks.register(form("AB-123-CD")).await.unwrap();

    trucks.call(called, "B2").await.unwrap();
    trucks.call(weighing, "A2").await.unwrap();
    trucks.start_loading(weighing).await.unwrap();
    trucks
        .finish_loading(weighing, vec![LoadedProduct::new("Gravier 0/20", "28 T")])
        .await
        .unwrap();
    complete(&system, done, 13000, 40000).await;

    let ids = |list: Vec<yard_flow::model::Truck>| list.into_iter().map(|t| t.id).collect::<Vec<_>>();
    assert_eq!(ids(trucks.queued().await.unwrap()), vec![waiting]);
    assert_eq!(ids(trucks.called().await.unwrap()), vec![called]);
    assert_eq!(ids(trucks.pending_weighing().await.unwrap()), vec![weighing]);
    assert_eq!(ids(trucks.completed().await.unwrap()), vec![done]);
    assert_eq!(ids(trucks.all().await.unwrap()), vec![waiting, called, weighing, done]);

    let metrics = trucks.metrics().await.unwrap();
    assert_eq!(metrics.incoming_trucks, 4);
    assert_eq!(metrics.active_trucks, 3);
    assert_eq!(metrics.loaded_trucks, 1);
    assert_eq!(metrics.total_net_weight, 27000);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_board_refresh_publishes_metrics() {
    let config = YardConfig {
        refresh_interval_secs: 1,
        ..YardConfig::default()
    };
    let mut system = YardSystem::new(&config).unwrap();
    let mut board = system.start_board_refresh();

    system.trucks.register(form("JK-222-LM")).await.unwrap();

    let published = tokio::time::timeout(
        Duration::from_secs(5),
        board.wait_for(|metrics| metrics.waiting == 1),
    )
    .await
    .map(|seen| seen.is_ok())
    .unwrap_or(false);
    assert!(published, "board never showed the registered truck");
    drop(board);

    tokio::time::timeout(Duration::from_secs(5), system.shutdown())
        .await
        .expect("shutdown hung")
        .unwrap();
}
