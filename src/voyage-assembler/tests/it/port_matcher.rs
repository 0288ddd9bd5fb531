use crate::helper::*;
use chrono::Duration;
use marine_sources_rs::AisRecord;
use voyage_assembler::{PortMatcher, port_call_counts};
use voyage_core::{Mmsi, PortId, test_helper::*};

#[test]
fn test_stationary_positions_at_port_form_one_visit() {
    let mut helper = TestHelper::default();
    helper.at_port(1, &new_york(), 0, 3);

    let visits = PortMatcher::default()
        .find_port_visits(&helper.observations())
        .unwrap();

    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].mmsi, Mmsi::new(1));
    assert_eq!(visits[0].port, new_york().port_ref());
    assert_eq!(visits[0].entry(), ts(0));
    assert_eq!(visits[0].exit(), ts(2));
    assert_eq!(visits[0].duration_hours(), 2.0);
    assert_eq!(visits[0].ping_count, 3);
}

#[test]
fn test_fast_positions_at_port_form_no_visit() {
    let port = new_york();
    let mut helper = TestHelper::default();
    for record in hourly_records(1, port.latitude, port.longitude, CRUISING_SPEED, ts(0), 3) {
        helper.add_record(record);
    }

    let matcher = PortMatcher::default();
    let observations = helper.observations();

    assert_eq!(matcher.find_candidates(&observations).count(), 0);
    assert!(matcher.find_port_visits(&observations).unwrap().is_empty());
}

#[test]
fn test_positions_outside_port_radius_form_no_visit() {
    let mut helper = TestHelper::default();
    for record in hourly_records(1, 40.7, -76.0, STATIONARY_SPEED, ts(0), 3) {
        helper.add_record(record);
    }

    let observations = helper.observations();
    assert!(
        observations
            .iter()
            .all(|o| o.nearest_port.as_ref().unwrap().port == new_york().port_ref())
    );
    assert!(
        PortMatcher::default()
            .find_port_visits(&observations)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_positions_without_speed_are_not_candidates() {
    let port = new_york();
    let mut record = AisRecord::test_default(1, ts(0), port.latitude, port.longitude, 0.0);
    record.speed_over_ground = None;

    let mut helper = TestHelper::default();
    helper.add_record(record);

    assert_eq!(
        PortMatcher::default()
            .find_candidates(&helper.observations())
            .count(),
        0
    );
}

#[test]
fn test_gap_above_threshold_splits_visit() {
    let mut helper = TestHelper::default();
    helper
        .at_port(1, &new_york(), 0, 2)
        .at_port(1, &new_york(), 30, 2);

    let visits = PortMatcher::default()
        .find_port_visits(&helper.observations())
        .unwrap();

    assert_eq!(visits.len(), 2);
    assert_eq!((visits[0].entry(), visits[0].exit()), (ts(0), ts(1)));
    assert_eq!((visits[1].entry(), visits[1].exit()), (ts(30), ts(31)));
}

#[test]
fn test_gap_below_threshold_does_not_split_visit() {
    let mut helper = TestHelper::default();
    helper
        .at_port(1, &new_york(), 0, 2)
        .at_port(1, &new_york(), 20, 2);

    let visits = PortMatcher::default()
        .find_port_visits(&helper.observations())
        .unwrap();

    assert_eq!(visits.len(), 1);
    assert_eq!((visits[0].entry(), visits[0].exit()), (ts(0), ts(21)));
    assert_eq!(visits[0].ping_count, 4);
}

#[test]
fn test_visits_are_ordered_by_vessel_then_entry() {
    let mut helper = TestHelper::default();
    helper
        .at_port(2, &new_york(), 0, 2)
        .at_port(1, &los_angeles(), 10, 2)
        .at_port(1, &new_york(), 0, 2);

    let visits = PortMatcher::default()
        .find_port_visits(&helper.observations())
        .unwrap();

    let order: Vec<_> = visits.iter().map(|v| (v.mmsi, v.port.id)).collect();
    assert_eq!(
        order,
        vec![
            (Mmsi::new(1), PortId::new(NEW_YORK_ID)),
            (Mmsi::new(1), PortId::new(LOS_ANGELES_ID)),
            (Mmsi::new(2), PortId::new(NEW_YORK_ID)),
        ]
    );
}

#[test]
fn test_port_calls_are_unique_and_respect_min_time_in_port() {
    let mut helper = TestHelper::default();
    helper
        .at_port(1, &new_york(), 0, 3)
        .at_port(1, &new_york(), 40, 3)
        .at_port(2, &los_angeles(), 0, 1);

    let matcher = PortMatcher::default();
    let calls = matcher.match_port_calls(&helper.observations()).unwrap();

    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].mmsi, Mmsi::new(1));
    assert_eq!(calls[0].port, new_york().port_ref());
}

#[test]
fn test_min_time_in_port_is_configurable() {
    let mut helper = TestHelper::default();
    helper.at_port(1, &new_york(), 0, 2);
    helper.config.min_time_in_port = Duration::hours(2);

    let matcher = PortMatcher::new(helper.config.clone());
    assert!(
        matcher
            .match_port_calls(&helper.observations())
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_port_call_counts_include_ports_without_calls() {
    let mut helper = TestHelper::default();
    helper
        .at_port(1, &new_york(), 0, 3)
        .at_port(2, &new_york(), 0, 3)
        .at_port(2, &new_york(), 50, 3);

    let calls = PortMatcher::default()
        .match_port_calls(&helper.observations())
        .unwrap();
    let counts = port_call_counts(&helper.ports, &calls);

    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].port, new_york());
    assert_eq!(counts[0].call_count, 2);
    assert_eq!(counts[1].port, los_angeles());
    assert_eq!(counts[1].call_count, 0);
}
