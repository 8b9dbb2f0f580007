mod common;

use lifeviz::{Dataset, LoadError, Session, VizConfig};

#[test]
fn header_with_trailing_space_is_required_verbatim() {
    let trimmed = common::CSV.replacen("Life expectancy ,", "Life expectancy,", 1);
    match Dataset::from_csv_str(&trimmed) {
        Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Life expectancy "),
        other => panic!("expected missing column, got {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn blank_life_expectancy_is_absent_not_zero() {
    let ds = Dataset::from_csv_str(common::CSV).unwrap();
    assert_eq!(ds.len(), 5);
    let niger_2001 = ds
        .records()
        .iter()
        .find(|r| r.country == "Niger" && r.year == 2001)
        .unwrap();
    assert_eq!(niger_2001.life_expectancy, None);
    assert_eq!(niger_2001.adult_mortality, 290.0);
}

#[test]
fn rows_with_unusable_years_are_skipped_not_fatal() {
    let csv = "\
Country,Year,Life expectancy ,Adult Mortality,infant deaths
Chad,2015,51.6,393,82
Chad,20x1,50.0,1,1
Chad,2016.5,50.0,1,1
Niger,,49.0,2,2
";
    let mut s = Session::new(VizConfig::default());
    s.load(csv, common::TOPOLOGY).unwrap();
    let ds = &s.loaded().unwrap().dataset;
    // blank reads as 0 the way unary plus does; the other two are dropped
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.years(), vec![0, 2015]);

    common::select(&mut s, "Chad", "2015");
    assert!(!s.render().is_empty());
    assert!(s.render_svg().contains(r#"class="country""#));
}

#[test]
fn failed_topology_leaves_session_unloaded() {
    let mut s = Session::new(VizConfig::default());
    let err = s.load(common::CSV, "{not json").unwrap_err();
    assert_eq!(err.code(), "topology");
    assert!(!s.is_loaded());
    assert!(s.render_detached().is_empty());
}

#[test]
fn missing_topology_object_is_named() {
    let mut cfg = VizConfig::default();
    cfg.topology_object = "land".to_string();
    let mut s = Session::new(cfg);
    match s.load(common::CSV, common::TOPOLOGY) {
        Err(LoadError::MissingObject(name)) => assert_eq!(name, "land"),
        other => panic!("expected missing object, got {:?}", other.map_err(|e| e.to_string())),
    }
    assert!(!s.is_loaded());
}
