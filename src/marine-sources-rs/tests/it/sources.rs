use crate::helper::{TestHelper, test_data};
use chrono::{TimeZone, Utc};
use marine_sources_rs::{AisRecord, DataFile, Error, WorldPortIndexRecord, deserialize_reader};

#[test]
fn read_ais_extract_yields_records_and_row_errors() {
    let helper = TestHelper::new();
    let datafile = DataFile::open(&test_data("ais.csv"), helper.path()).unwrap();

    let result: Vec<_> = datafile
        .into_deserialize::<AisRecord>()
        .unwrap()
        .collect();

    assert_eq!(result.len(), 6);
    assert_eq!(result.iter().filter(|r| r.is_ok()).count(), 5);

    let error = result.into_iter().find_map(|r| r.err()).unwrap();
    assert!(error.is_malformed_row());
}

#[test]
fn read_ais_extract_maps_sentinels_and_empty_fields() {
    let records: Vec<AisRecord> = DataFile::new(test_data("ais.csv"))
        .into_deserialize::<AisRecord>()
        .unwrap()
        .filter_map(|r| r.ok())
        .collect();

    let first = &records[0];
    assert_eq!(first.mmsi, 367000001);
    assert_eq!(
        first.timestamp,
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(first.latitude, Some(40.7));
    assert_eq!(first.longitude, Some(-74.0));
    assert_eq!(first.heading, None);
    assert_eq!(first.vessel_name.as_deref(), Some("HARBOR ONE"));

    let missing_coordinates = &records[2];
    assert_eq!(missing_coordinates.latitude, None);
    assert_eq!(missing_coordinates.longitude, None);

    let unavailable_speed = &records[4];
    assert_eq!(unavailable_speed.speed_over_ground, None);
    assert_eq!(unavailable_speed.vessel_name, None);
}

#[test]
fn read_lower_case_ais_layout() {
    let data = "mmsi,base_date_time,longitude,latitude,sog,cog,heading,vessel_name\n\
                111,2025-01-01 00:00:00,-74.0,40.7,0.5,10.0,90,TUG\n";

    let records: Vec<AisRecord> = deserialize_reader(data.as_bytes())
        .collect::<Result<_, Error>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].mmsi, 111);
    assert_eq!(records[0].latitude, Some(40.7));
    assert_eq!(records[0].longitude, Some(-74.0));
    assert_eq!(records[0].speed_over_ground, Some(0.5));
    assert_eq!(records[0].heading, Some(90.0));
}

#[test]
fn short_rows_are_reported_as_malformed() {
    let data = "MMSI,BaseDateTime,LAT,LON\n111,2025-01-01T00:00:00\n";

    let result: Vec<_> = deserialize_reader::<_, AisRecord>(data.as_bytes()).collect();

    assert_eq!(result.len(), 1);
    let error = result.into_iter().next().unwrap().unwrap_err();
    assert!(error.is_malformed_row());
}

#[test]
fn read_world_port_index_with_dms_coordinates() {
    let records: Vec<WorldPortIndexRecord> = DataFile::new(test_data("ports.csv"))
        .into_deserialize()
        .unwrap()
        .collect::<Result<_, Error>>()
        .unwrap();

    assert_eq!(records.len(), 3);

    let new_york = &records[0];
    assert_eq!(new_york.port_number, 8590);
    assert_eq!(new_york.name, "New York City");
    assert_eq!(new_york.country.as_deref(), Some("US"));
    assert!((new_york.latitude.unwrap() - 40.7).abs() < 1e-9);
    assert!((new_york.longitude.unwrap() + 74.0).abs() < 1e-9);

    assert_eq!(records[1].latitude, Some(33.7));
    assert_eq!(records[2].latitude, None);
    assert_eq!(records[2].longitude, None);
}

#[test]
fn read_csv_from_zip_archive() {
    let helper = TestHelper::new();
    let content = std::fs::read(test_data("ports.csv")).unwrap();
    let archive = helper.write_archive(
        "ports.zip",
        &[
            ("README.txt", b"not data".as_slice()),
            ("ports.csv", content.as_slice()),
        ],
    );

    let datafile = DataFile::open(&archive, helper.path()).unwrap();
    assert!(datafile.path().ends_with("ports/ports.csv"));
    assert!(!helper.path().join("ports/README.txt").exists());

    let records: Vec<WorldPortIndexRecord> = datafile
        .into_deserialize()
        .unwrap()
        .collect::<Result<_, Error>>()
        .unwrap();

    assert_eq!(records.len(), 3);
}

#[test]
fn zip_archive_with_several_csv_entries_uses_the_first_by_name() {
    let helper = TestHelper::new();
    let archive = helper.write_archive(
        "extract.zip",
        &[
            ("b.csv", b"MMSI,BaseDateTime,LAT,LON\n222,2025-01-01T00:00:00,1.0,1.0\n".as_slice()),
            ("a.csv", b"MMSI,BaseDateTime,LAT,LON\n111,2025-01-01T00:00:00,1.0,1.0\n".as_slice()),
        ],
    );

    let datafile = DataFile::open(&archive, helper.path()).unwrap();
    assert!(datafile.path().ends_with("extract/a.csv"));
    assert!(!helper.path().join("extract/b.csv").exists());

    let records: Vec<AisRecord> = datafile
        .into_deserialize()
        .unwrap()
        .collect::<Result<_, Error>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].mmsi, 111);
}

#[test]
fn zip_archive_without_csv_fails() {
    let helper = TestHelper::new();
    let archive = helper.write_archive(
        "empty.zip",
        &[("README.txt", b"not data".as_slice())],
    );

    let result = DataFile::open(&archive, helper.path());

    assert!(matches!(result, Err(Error::MissingCsvEntry { .. })));
}
