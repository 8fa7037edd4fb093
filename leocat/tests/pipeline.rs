use indoc::indoc;
use leocat_lib::classify::{filter_catalog, FilterCriteria};
use tletext::{scan_catalog, write_tle_set};
use tletypes::prelude::*;

const CATALOG: &str = indoc! {r#"ISS (ZARYA)
    1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
    2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537

    TDRS 3
    1 19548U 88091B   24010.50000000  .00000090  00000-0  00000+0 0  9996
    2 19548  13.8000  11.0000 0034000 340.0000  20.0000  1.00271000129995

    HST
    1 20580U 90037B   24010.25000000  .00001000  00000-0  00000+0 0  9993
    2 20580  28.4700  40.0000 0002700 100.0000 260.0000 15.09200000650001
    "#};

const EARTH: ReferenceBody = ReferenceBody::EARTH;

fn leo_criteria(name_contains: Option<&str>) -> FilterCriteria {
    FilterCriteria {
        max_perigee_km: 2000.0,
        name_contains: name_contains.map(String::from),
    }
}

#[test]
fn filter_keeps_the_low_orbits_in_input_order() {
    let records = scan_catalog(CATALOG);
    assert_eq!(records.len(), 3);

    let outcome = filter_catalog(records, &EARTH, &leo_criteria(None));
    assert_eq!(outcome.total, 3);
    let names: Vec<&str> = outcome.matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["ISS (ZARYA)", "HST"]);
}

#[test]
fn export_round_trips_through_the_scanner() {
    let filtered = filter_catalog(scan_catalog(CATALOG), &EARTH, &leo_criteria(None));
    let exported = write_tle_set(&filtered.matched);
    let reparsed = scan_catalog(&exported);
    assert_eq!(reparsed, filtered.matched);

    // And the re-filtered subset is a fixed point
    let refiltered = filter_catalog(reparsed, &EARTH, &leo_criteria(None));
    assert_eq!(refiltered.matched, filtered.matched);
}

#[test]
fn name_filter_composes_with_the_altitude_threshold() {
    let outcome = filter_catalog(scan_catalog(CATALOG), &EARTH, &leo_criteria(Some("zarya")));
    let names: Vec<&str> = outcome.matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["ISS (ZARYA)"]);

    let outcome = filter_catalog(scan_catalog(CATALOG), &EARTH, &leo_criteria(Some("hubble")));
    assert!(outcome.matched.is_empty());
    assert_eq!(outcome.total, 3);
}

#[test]
fn corrupted_line_in_the_middle_only_costs_its_own_block() {
    // Damage HST's line 1 marker; the scanner resynchronizes and the other
    // blocks still flow through the whole pipeline.
    let corrupted = CATALOG.replacen("1 20580U", "$ 20580U", 1);
    let outcome = filter_catalog(scan_catalog(&corrupted), &EARTH, &leo_criteria(None));
    assert_eq!(outcome.total, 2);
    let names: Vec<&str> = outcome.matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["ISS (ZARYA)"]);
}

#[test]
fn undecodable_record_does_not_leak_into_the_export() {
    let corrupted = CATALOG.replacen("0002700", "00027zz", 1);
    let outcome = filter_catalog(scan_catalog(&corrupted), &EARTH, &leo_criteria(None));
    assert_eq!(outcome.total, 3);
    let names: Vec<&str> = outcome.matched.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["ISS (ZARYA)"]);

    let exported = write_tle_set(&outcome.matched);
    assert!(!exported.contains("HST"));
}
