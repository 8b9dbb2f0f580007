mod common;

use lifeviz::{Controls, Event, Scene, Session};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Next,
    Prev,
    Country(u8),
    Year(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        (0u8..4).prop_map(Op::Country),
        (0u8..5).prop_map(Op::Year),
    ]
}

const COUNTRIES: [&str; 4] = ["All", "Chad", "Niger", "Mali"];
const YEARS: [&str; 5] = ["All", "2000", "2001", "2002", "1999"];

fn to_event(op: &Op) -> Event {
    match op {
        Op::Next => Event::Next,
        Op::Prev => Event::Prev,
        Op::Country(i) => Event::SelectCountry(COUNTRIES[*i as usize].to_string()),
        Op::Year(i) => Event::SelectYear(YEARS[*i as usize].to_string()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn scene_stays_in_range_and_buttons_track_it(
        ops in proptest::collection::vec(op_strategy(), 1..40)
    ) {
        let mut s = common::loaded();
        for op in &ops {
            let before = s.state().scene;
            let result = s.dispatch(to_event(op));
            let after = s.state().scene;
            prop_assert!((1..=3).contains(&after.index()));
            match op {
                Op::Next => {
                    prop_assert_eq!(result.clone().ok(), Some(before != Scene::LAST));
                    prop_assert_eq!(after.index(), (before.index() + 1).min(3));
                }
                Op::Prev => {
                    prop_assert_eq!(result.clone().ok(), Some(before != Scene::FIRST));
                    prop_assert_eq!(after.index(), before.index().saturating_sub(1).max(1));
                }
                // filter changes never move the scene
                _ => {
                    prop_assert_eq!(after, before);
                }
            }
            let c = s.controls();
            prop_assert_eq!(c.prev, after != Scene::FIRST);
            prop_assert_eq!(c.next, after != Scene::LAST);
        }
    }
}

#[test]
fn presses_at_the_ends_do_not_redraw() {
    let mut s = Session::default();
    assert_eq!(s.state().scene, Scene::Map);
    assert_eq!(s.dispatch(Event::Prev), Ok(false));
    assert_eq!(s.dispatch(Event::Next), Ok(true));
    assert_eq!(s.dispatch(Event::Next), Ok(true));
    assert_eq!(s.state().scene, Scene::Comparison);
    assert_eq!(s.dispatch(Event::Next), Ok(false));
    assert_eq!(s.state().scene, Scene::Comparison);
}

#[test]
fn button_display_values() {
    let c = Scene::Map.controls();
    assert_eq!(Controls::display(c.prev), "none");
    assert_eq!(Controls::display(c.next), "inline-block");
    let c = Scene::Trend.controls();
    assert!(c.prev && c.next);
    let c = Scene::Comparison.controls();
    assert!(c.prev && !c.next);
}

#[test]
fn filters_survive_navigation() {
    let mut s = common::loaded();
    common::select(&mut s, "Niger", "2000");
    s.dispatch(Event::Next).unwrap();
    s.dispatch(Event::Next).unwrap();
    s.dispatch(Event::Prev).unwrap();
    assert_eq!(s.state().filters.country.value().map(String::as_str), Some("Niger"));
    assert_eq!(s.state().filters.year.value(), Some(&2000));
}
