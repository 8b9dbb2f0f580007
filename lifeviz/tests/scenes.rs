mod common;

use lifeviz::model::{Color, Paint};
use lifeviz::scene::{comparison, map, trend};
use lifeviz::{Dataset, Event, Mark, Record, Scene, Session, Surface, Topology};
use proptest::prelude::*;

fn fill_of(m: &Mark) -> &Paint {
    match m {
        Mark::Path { fill, .. } | Mark::Rect { fill, .. } | Mark::Circle { fill, .. } => fill,
        other => panic!("no fill on {:?}", other),
    }
}

fn circles(s: &Surface) -> usize {
    s.walk().iter().filter(|m| matches!(m, Mark::Circle { .. })).count()
}

fn tooltip_text(s: &Surface, m: &Mark) -> Option<String> {
    m.hover().and_then(|id| s.tooltip(id)).map(|t| t.text())
}

#[test]
fn map_draws_every_feature_and_colors_matches() {
    let mut s = common::loaded();
    let surface = s.render().clone();
    let features = surface.find_class(map::FEATURE_CLASS);
    assert_eq!(features.len(), 3);
    // domain [46.0, 50.2]: Chad's first row sits at the light end, Niger's at the dark end
    assert_eq!(fill_of(features[0]), &Paint::Rgb(Color::rgb(247, 251, 255)));
    assert_eq!(fill_of(features[1]), &Paint::Rgb(Color::rgb(8, 48, 107)));
    assert_eq!(fill_of(features[2]), &Paint::css("#ccc"));
    assert_eq!(features[2].hover(), None);
    assert!(tooltip_text(&surface, features[0])
        .unwrap()
        .contains("Life Expectancy: 46"));
    assert_eq!(surface.find_class(map::MESH_CLASS).len(), 1);
    assert_eq!(surface.find_class(map::LEGEND_CLASS).len(), 1);
}

#[test]
fn matched_feature_without_value_is_neutral_but_hoverable() {
    let mut s = common::loaded();
    common::select(&mut s, "Niger", "2001");
    let surface = s.render().clone();
    let features = surface.find_class(map::FEATURE_CLASS);
    assert_eq!(fill_of(features[1]), &Paint::css("#ccc"));
    assert_eq!(
        tooltip_text(&surface, features[1]).as_deref(),
        Some("Country: Niger\nLife Expectancy: N/A")
    );
    // no values at all: no color domain, so no legend
    assert!(surface.find_class(map::LEGEND_CLASS).is_empty());
}

#[test]
fn trend_ignores_the_year_filter() {
    let mut s = common::loaded();
    common::select(&mut s, "Chad", "2000");
    s.dispatch(Event::Next).unwrap();
    assert_eq!(s.state().scene, Scene::Trend);
    let first = s.render().clone();
    assert_eq!(circles(&first), 3);
    s.dispatch(Event::SelectYear("2002".into())).unwrap();
    let second = s.render().clone();
    assert_eq!(circles(&second), 3);
    assert_eq!(
        first.find_class(trend::MARKER_CLASS),
        second.find_class(trend::MARKER_CLASS)
    );
}

#[test]
fn trend_skips_rows_without_a_value_and_is_empty_for_all() {
    let mut s = common::loaded();
    s.dispatch(Event::Next).unwrap();
    assert!(s.render().is_empty());
    s.dispatch(Event::SelectCountry("Niger".into())).unwrap();
    let surface = s.render().clone();
    assert_eq!(circles(&surface), 1);
    let texts: Vec<_> = surface
        .walk()
        .into_iter()
        .filter_map(|m| match m {
            Mark::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(texts.contains(&trend::TITLE));
}

#[test]
fn comparison_shows_two_bars_for_an_exact_match() {
    let mut s = common::loaded();
    common::select(&mut s, "Chad", "2000");
    s.dispatch(Event::Next).unwrap();
    s.dispatch(Event::Next).unwrap();
    let surface = s.render().clone();
    let bars = surface.find_class(comparison::BAR_CLASS);
    assert_eq!(bars.len(), 2);
    assert_eq!(
        tooltip_text(&surface, bars[0]).as_deref(),
        Some("Adult Mortality: 393")
    );
    assert_eq!(
        tooltip_text(&surface, bars[1]).as_deref(),
        Some("Infant Deaths: 82")
    );
    // the taller value reaches the top of the plot
    match bars[0] {
        Mark::Rect { y, height, .. } => {
            assert!((y - 50.0).abs() < 1e-9);
            assert!((height - 500.0).abs() < 1e-9);
        }
        other => panic!("bar is {:?}", other),
    }
}

#[test]
fn comparison_is_empty_when_either_filter_is_all() {
    let mut s = common::loaded();
    s.dispatch(Event::Next).unwrap();
    s.dispatch(Event::Next).unwrap();
    assert!(s.render().is_empty());
    s.dispatch(Event::SelectCountry("Chad".into())).unwrap();
    assert!(s.render().is_empty());
    s.dispatch(Event::SelectYear("2001".into())).unwrap();
    assert_eq!(s.render().find_class(comparison::BAR_CLASS).len(), 2);
}

#[test]
fn svg_carries_hover_ids_and_country_paths() {
    let mut s = common::loaded();
    let svg = s.render_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"class="country""#));
    assert!(svg.contains(r#"data-mark="0""#));
    assert_eq!(s.tooltip(0).map(|t| t.lines[0].as_str()), Some("Country: Chad"));
}

#[test]
fn single_record_shows_both_bars() {
    let ds = Dataset::from_records(vec![Record::new("Chad", 2015, 51.6, 393.0, 82.0)]);
    let topo = Topology::from_json_str(common::TOPOLOGY, "countries").unwrap();
    let mut s = Session::default();
    s.install(ds, topo);
    common::select(&mut s, "Chad", "2015");
    s.dispatch(Event::Next).unwrap();
    s.dispatch(Event::Next).unwrap();
    let surface = s.render().clone();
    let labels: Vec<_> = surface
        .find_class(comparison::BAR_CLASS)
        .into_iter()
        .filter_map(|m| tooltip_text(&surface, m))
        .collect();
    assert_eq!(labels, vec!["Adult Mortality: 393", "Infant Deaths: 82"]);
    // one matched feature on the map, so one tooltip
    s.dispatch(Event::Prev).unwrap();
    s.dispatch(Event::Prev).unwrap();
    assert_eq!(s.render().tooltip_count(), 1);
}

const COUNTRIES: [&str; 3] = ["All", "Chad", "Niger"];
const YEARS: [&str; 4] = ["All", "2000", "2001", "2002"];

proptest! {
    #[test]
    fn map_draws_every_feature_for_any_filter(c in 0usize..3, y in 0usize..4) {
        let mut s = common::loaded();
        common::select(&mut s, COUNTRIES[c], YEARS[y]);
        let matched = match s.loaded() {
            Some(l) => s.state().filters.apply(&l.dataset).len(),
            None => 0,
        };
        let surface = s.render().clone();
        if matched > 0 {
            prop_assert_eq!(surface.find_class(map::FEATURE_CLASS).len(), 3);
        } else {
            prop_assert!(surface.is_empty());
        }
    }
}

#[test]
fn color_domain_follows_the_selected_year() {
    // Chad 2001 sits far outside the year-2000 range
    let ds = Dataset::from_records(vec![
        Record::new("Chad", 2000, 40.0, 1.0, 1.0),
        Record::new("Niger", 2000, 60.0, 1.0, 1.0),
        Record::new("Chad", 2001, 90.0, 1.0, 1.0),
    ]);
    let topo = Topology::from_json_str(common::TOPOLOGY, "countries").unwrap();
    let mut s = Session::default();
    s.install(ds, topo);
    common::select(&mut s, "All", "2000");
    let surface = s.render().clone();
    let features = surface.find_class(map::FEATURE_CLASS);
    assert_eq!(fill_of(features[0]), &Paint::Rgb(Color::rgb(247, 251, 255)));
    assert_eq!(fill_of(features[1]), &Paint::Rgb(Color::rgb(8, 48, 107)));
    assert_eq!(fill_of(features[2]), &Paint::css("#ccc"));
    assert_eq!(surface.find_class(map::LEGEND_CLASS).len(), 1);
}

#[test]
fn comparison_is_empty_without_a_matching_row() {
    let mut s = common::loaded();
    // both values exist as options, the pair does not
    common::select(&mut s, "Niger", "2002");
    s.dispatch(Event::Next).unwrap();
    s.dispatch(Event::Next).unwrap();
    assert_eq!(s.state().scene, Scene::Comparison);
    assert!(s.render().is_empty());
}
