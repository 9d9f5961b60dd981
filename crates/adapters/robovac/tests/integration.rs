//! End-to-end flow against the simulated backend: setup, initial poll,
//! commands, re-poll.

use robohub_adapter_robovac::{RobovacConfig, RobovacError, setup};
use robohub_adapter_virtual::VirtualBackend;
use robohub_app::services::HandleRegistry;
use robohub_domain::vacuum::FanSpeed;

fn config() -> RobovacConfig {
    toml::from_str(
        r#"
            name = "Living Room"
            ip_address = "192.168.0.123"
            username = "eufy_username"
            password = "eufy_password"
        "#,
    )
    .unwrap()
}

#[tokio::test]
async fn should_drive_a_full_clean_cycle() {
    let backend = VirtualBackend::new();
    let registry = HandleRegistry::new();

    let vacuum = setup(&config(), &backend, &registry).await.unwrap();

    // Fresh off setup: docked, charged, initial poll already applied.
    assert_eq!(registry.len(), 1);
    assert!(vacuum.available());
    assert_eq!(vacuum.status(), Some("Charging"));
    assert_eq!(vacuum.battery_level(), Some(100));
    assert_eq!(vacuum.fan_speed(), Some(FanSpeed::Normal));
    assert!(!vacuum.is_on());
    assert_eq!(vacuum.name(), "Living Room");

    vacuum.turn_on().await;
    assert!(vacuum.is_on());

    vacuum.update().await;
    assert_eq!(vacuum.status(), Some("Cleaning"));
    assert!(vacuum.is_on());

    vacuum.set_fan_speed("1").await;
    vacuum.update().await;
    assert_eq!(vacuum.fan_speed(), Some(FanSpeed::Max));

    vacuum.turn_off().await;
    assert!(!vacuum.is_on());

    vacuum.update().await;
    assert_eq!(vacuum.status(), Some("Returning to charging base"));

    vacuum.update().await;
    assert_eq!(vacuum.status(), Some("Charging"));
    assert!(!vacuum.is_on());
}

#[tokio::test]
async fn should_drain_the_battery_across_polls_while_cleaning() {
    let backend = VirtualBackend::new();
    let registry = HandleRegistry::new();

    let vacuum = setup(&config(), &backend, &registry).await.unwrap();
    vacuum.turn_on().await;

    vacuum.update().await;
    let before = vacuum.state();
    vacuum.update().await;
    let after = vacuum.state();

    assert!(after.battery_level < before.battery_level);
    assert!(after.last_updated >= before.last_updated);
}

#[tokio::test]
async fn should_signal_not_ready_against_an_offline_device() {
    let backend = VirtualBackend::offline();
    let registry = HandleRegistry::new();

    let err = setup(&config(), &backend, &registry).await.unwrap_err();

    assert!(err.is_not_ready());
    assert!(matches!(err, RobovacError::Unreachable { .. }));
    assert!(registry.is_empty());
}
