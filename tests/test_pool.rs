use aquaweb::pool::{HeaterState, PoolState};

#[test]
fn test_summary_uses_caller_terminator() {
    let pool = PoolState::demo();

    let plain = pool.summary("\n");
    assert_eq!(plain.lines().count(), 7);
    assert!(plain.contains("air temp 72\n"));
    assert!(plain.contains("pool temp 81\n"));

    let html = pool.summary("<br>\n");
    assert!(html.contains("air temp 72<br>\n"));
    assert!(html.contains("spa OFF<br>\n"));
}

#[test]
fn test_lights_on_from_either_circuit() {
    let mut pool = PoolState::new("Pool");
    assert!(!pool.lights_on());

    pool.aux4 = true;
    assert!(pool.lights_on());

    pool.aux4 = false;
    pool.aux5 = true;
    assert!(pool.lights_on());
}

#[test]
fn test_toggle_spa_drives_heater() {
    let mut pool = PoolState::new("Pool");

    pool.toggle_spa();
    assert!(pool.spa);
    assert_eq!(pool.heater, HeaterState::On);

    pool.toggle_spa();
    assert!(!pool.spa);
    assert_eq!(pool.heater, HeaterState::Off);
}

#[test]
fn test_toggle_lights_drives_both_circuits() {
    let mut pool = PoolState::new("Pool");

    pool.toggle_lights();
    assert!(pool.aux4);
    assert!(pool.aux5);

    pool.toggle_lights();
    assert!(!pool.aux4);
    assert!(!pool.aux5);
}

#[test]
fn test_toggle_lights_from_mixed_circuits_turns_off() {
    let mut pool = PoolState::new("Pool");
    pool.aux4 = true;

    // one circuit already on counts as lights-on, so a toggle is "off"
    pool.toggle_lights();
    assert!(!pool.aux4);
    assert!(!pool.aux5);
}

#[test]
fn test_toggle_clean() {
    let mut pool = PoolState::new("Pool");

    pool.toggle_clean();
    assert!(pool.clean);

    pool.toggle_clean();
    assert!(!pool.clean);
}

#[test]
fn test_demo_state() {
    let pool = PoolState::demo();
    assert_eq!(pool.title, "Pool");
    assert_eq!(pool.air_temp, 72);
    assert_eq!(pool.pool_temp, 81);
    assert!(!pool.spa);
    assert_eq!(pool.heater, HeaterState::Off);
}
