use std::path::PathBuf;

use districtview::{
    CityRegistry, Demographic, DirectorySink, FeatureSource, LoadOutcome, LocalSource, MapEvent,
    MapSession, MemorySink, SELECTED, UNSELECTED,
};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn raleigh_session() -> MapSession {
    let registry = CityRegistry::builtin();
    let mut session = MapSession::new();
    let request = session.select_city(registry.get("raleigh-nc").cloned()).unwrap();
    let features = LocalSource::new(fixtures()).load(&request.city).unwrap();
    assert_eq!(session.complete_load(request.token, Ok(features)), LoadOutcome::Applied);
    session
}

#[test]
fn export_fixture_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let session = raleigh_session();

    let mut sink = DirectorySink::new(dir.path());
    let filename = session.export(&mut sink).unwrap().unwrap();
    assert_eq!(filename, "Raleigh_NC_demographics.csv");

    let body = std::fs::read_to_string(dir.path().join(&filename)).unwrap();
    assert_eq!(body, concat!(
        "DISTRICT,TOTAL,WHITE,BLACK,HISPANIC,ASIAN\n",
        "\"North\",\"52340\",\"30120\",\"12040\",\"5230\",\"2890\"\n",
        "\"Downtown\",\"18875\",\"9100\",\"7600\",\"0\",\"0\"\n",
        "\"7\",\"1203\",\"0\",\"0\",\"0\",\"0\"\n",
        "\"North\",\"410\",\"0\",\"0\",\"0\",\"0\"\n",
    ));

    // A second export refuses to clobber the first unless forced.
    assert!(session.export(&mut sink).is_err());
    let mut sink = sink.with_force(true);
    assert!(session.export(&mut sink).unwrap().is_some());
}

#[test]
fn panel_prefers_shares_and_falls_back_to_counts() {
    let mut session = raleigh_session();

    session.handle_event(MapEvent::FeatureClick(0));
    let panel = session.detail_panel().unwrap();
    assert_eq!(panel.district, "North");
    assert_eq!(panel.total, "52,340");
    assert_eq!(panel.value(Demographic::Black), Some("23.0%"));

    session.handle_event(MapEvent::FeatureClick(1));
    let panel = session.detail_panel().unwrap();
    assert_eq!(panel.district, "Downtown");
    assert_eq!(panel.value(Demographic::White), Some("9100"));
    assert_eq!(panel.value(Demographic::Asian), Some("0"));
}

#[test]
fn duplicate_labels_highlight_together() {
    let mut session = raleigh_session();
    session.click_feature(3);

    let styles = session.styles();
    assert_eq!(styles, [SELECTED, UNSELECTED, UNSELECTED, SELECTED]);
    // The panel shows the clicked record, not the first one with that label.
    assert_eq!(session.detail_panel().unwrap().total, "410");
}

#[test]
fn table_groups_thousands_and_fills_zeroes() {
    let table = raleigh_session().table().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table.rows[0].total, "52,340");
    assert_eq!(table.rows[2].district, "7");
    assert_eq!(table.rows[2].total, "1,203");
    assert_eq!(table.rows[2].asian, "0");
}

#[test]
fn export_goes_to_memory_sink_unchanged() {
    let mut sink = MemorySink::default();
    raleigh_session().export(&mut sink).unwrap();
    let (name, bytes) = &sink.files[0];
    assert_eq!(name, "Raleigh_NC_demographics.csv");
    assert_eq!(String::from_utf8_lossy(bytes).lines().count(), 5);
}
