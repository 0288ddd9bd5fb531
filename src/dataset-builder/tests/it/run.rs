use crate::helper::*;
use dataset_builder::{
    csv_adapter::{
        OBSERVATIONS_FILE, PORT_CALL_COUNTS_FILE, PORT_CALLS_FILE, PORT_VISITS_FILE,
        VOYAGES_FILE,
    },
    error::Error,
    startup::App,
};
use voyage_core::{IngestStats, VoyageId, test_helper::MemoryDataset};

#[test]
fn test_run_assembles_voyage_and_counts_skipped_rows() {
    let helper = TestHelper::new();
    let ais = helper.write_file("ais.csv", &voyage_csv());
    let ports = helper.write_file("ports.csv", PORTS_CSV);

    let app = App::build(helper.settings(vec![ais], ports)).unwrap();
    let mut dataset = MemoryDataset::default();
    let summary = app.run_with(&mut dataset).unwrap();

    assert_eq!(
        summary.ais_stats,
        IngestStats {
            read: 11,
            joined: 9,
            skipped_malformed: 1,
            skipped_invalid_coordinates: 1,
        }
    );
    assert_eq!(summary.port_stats.joined, 2);
    assert_eq!(summary.num_port_visits, 2);
    assert_eq!(summary.num_voyages, 1);
    assert_eq!(summary.num_port_calls, 2);

    assert_eq!(dataset.observations.len(), 9);
    assert_eq!(dataset.voyages.len(), 1);
    assert_eq!(dataset.voyages[0].ping_count, 3);
    assert_eq!(dataset.port_call_counts.len(), 2);
    assert_eq!(
        dataset
            .observations
            .iter()
            .filter(|o| o.voyage_id == Some(VoyageId::new(0)))
            .count(),
        3
    );
}

#[test]
fn test_run_writes_csv_files() {
    let helper = TestHelper::new();
    let ais = helper.write_file("ais.csv", &voyage_csv());
    let ports = helper.write_file("ports.csv", PORTS_CSV);

    App::build(helper.settings(vec![ais], ports))
        .unwrap()
        .run()
        .unwrap();

    let (_, observations) = helper.read_output(OBSERVATIONS_FILE);
    assert_eq!(observations.len(), 9);

    let (headers, voyages) = helper.read_output(VOYAGES_FILE);
    assert_eq!(voyages.len(), 1);
    let column = |name: &str| headers.iter().position(|h| h == name).unwrap();
    assert_eq!(&voyages[0][column("departure_port_name")], "NewYorkPort");
    assert_eq!(&voyages[0][column("arrival_port_name")], "LosAngelesPort");
    assert_eq!(&voyages[0][column("duration_hours")], "4.0");
    assert_eq!(&voyages[0][column("delay_hours")], "");

    let (_, visits) = helper.read_output(PORT_VISITS_FILE);
    assert_eq!(visits.len(), 2);

    let (_, calls) = helper.read_output(PORT_CALLS_FILE);
    assert_eq!(calls.len(), 2);

    let (headers, counts) = helper.read_output(PORT_CALL_COUNTS_FILE);
    let call_count = headers.iter().position(|h| h == "call_count").unwrap();
    assert!(counts.iter().all(|c| &c[call_count] == "1"));
}

#[test]
fn test_rerun_replaces_previous_output() {
    let helper = TestHelper::new();
    let ais = helper.write_file("ais.csv", &voyage_csv());
    let ports = helper.write_file("ports.csv", PORTS_CSV);

    let app = App::build(helper.settings(vec![ais], ports)).unwrap();
    app.run().unwrap();
    app.run().unwrap();

    let (_, observations) = helper.read_output(OBSERVATIONS_FILE);
    assert_eq!(observations.len(), 9);
}

#[test]
fn test_run_reads_zipped_inputs_across_files() {
    let helper = TestHelper::new();
    let first = helper.write_archive("first.zip", "ais.csv", &voyage_csv());
    let second = helper.write_file(
        "second.csv",
        &format!("{AIS_HEADER}\n{}", ais_rows(2, 40.7, -74.0, 0.5, &[0, 1])),
    );
    let ports = helper.write_file("ports.csv", PORTS_CSV);

    let app = App::build(helper.settings(vec![first, second], ports)).unwrap();
    let mut dataset = MemoryDataset::default();
    let summary = app.run_with(&mut dataset).unwrap();

    assert_eq!(summary.ais_stats.read, 13);
    assert_eq!(summary.ais_stats.joined, 11);
    assert_eq!(summary.num_port_visits, 3);
    assert_eq!(summary.num_voyages, 1);
}

#[test]
fn test_missing_input_file_is_fatal() {
    let helper = TestHelper::new();
    let ports = helper.write_file("ports.csv", PORTS_CSV);

    let app = App::build(helper.settings(vec![helper.path().join("missing.csv")], ports)).unwrap();
    let result = app.run_with(&mut MemoryDataset::default());

    assert!(matches!(result, Err(Error::Source { .. })));
}

#[test]
fn test_empty_datasets_keep_their_header() {
    let helper = TestHelper::new();
    let ais = helper.write_file(
        "ais.csv",
        &format!("{AIS_HEADER}\n{}", ais_rows(1, 40.7, -74.0, 0.5, &[0, 1, 2])),
    );
    let ports = helper.write_file("ports.csv", PORTS_CSV);

    App::build(helper.settings(vec![ais], ports))
        .unwrap()
        .run()
        .unwrap();

    let (headers, voyages) = helper.read_output(VOYAGES_FILE);
    assert!(voyages.is_empty());
    assert_eq!(headers.len(), 11);
    assert_eq!(&headers[0], "voyage_id");
    assert_eq!(&headers[10], "delay_hours");

    let (headers, calls) = helper.read_output(PORT_CALLS_FILE);
    assert_eq!(calls.len(), 1);
    assert_eq!(&headers[0], "mmsi");
}
