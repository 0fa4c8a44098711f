//! End-to-end tests over a small boundary fixture.

use std::io::Write;
use std::path::PathBuf;

use region_core::{Boundaries, BoundaryError, ClickEvent, ClickRouter, Navigation, RegionLinks};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/regions.geojson")
}

#[test]
fn test_fixture_regions_in_order() {
    let boundaries = Boundaries::load(fixture_path()).unwrap();
    let names: Vec<_> = boundaries.regions().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Slaskie", "Opolskie", "łódzkie", "Unknown"]);
}

#[test]
fn test_every_fixture_region_routes_per_table() {
    let boundaries = Boundaries::load(fixture_path()).unwrap();
    let router = ClickRouter::new(RegionLinks::builtin());

    for region in boundaries.regions() {
        let nav = router.handle(Some(&ClickEvent::single(region.name())));
        assert_eq!(nav.target(), router.links().lookup(region.name()));
    }
}

#[test]
fn test_slaskie_click_scenario() {
    let router = ClickRouter::new(RegionLinks::builtin());
    let nav = router.handle(Some(&ClickEvent::single("Slaskie")));
    assert_eq!(
        nav.target(),
        Some("https://slaskie.travel/article/1020330/wybrane-atrakcje-wojewodztwa-slaskiego-top-20")
    );
}

#[test]
fn test_accented_spelling_does_not_redirect() {
    // The table is keyed by ASCII names; "łódzkie" stays unlinked.
    let router = ClickRouter::new(RegionLinks::builtin());
    assert_eq!(router.handle(Some(&ClickEvent::single("łódzkie"))), Navigation::Idle);
}

#[test]
fn test_unlinked_keys_against_fixture() {
    let boundaries = Boundaries::load(fixture_path()).unwrap();
    let links = RegionLinks::builtin();

    let unlinked = links.unlinked_keys(&boundaries);
    assert_eq!(unlinked.len(), 14);
    assert!(unlinked.contains(&"Lodzkie"));
    assert!(!unlinked.contains(&"Slaskie"));
    assert!(!unlinked.contains(&"Opolskie"));
}

#[test]
fn test_feature_without_name_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"type":"FeatureCollection","features":[
            {{"type":"Feature","properties":{{"name":"Opolskie"}}}},
            {{"type":"Feature","properties":{{"NAME_1":"Lubuskie"}}}}
        ]}}"#
    )
    .unwrap();

    let err = Boundaries::load(file.path()).unwrap_err();
    assert!(matches!(err, BoundaryError::MissingProperty { index: 1, .. }));
}
