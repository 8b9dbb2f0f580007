mod common;

use lifeviz::filters::ALL;
use lifeviz::{Control, Dataset, DispatchError, Event, FilterOptions, Filters, Selection};

#[test]
fn options_are_sorted_unique_with_all_first() {
    let ds = Dataset::from_csv_str(common::CSV).unwrap();
    let opts = FilterOptions::from_dataset(&ds);
    assert_eq!(opts.country_labels(), vec![ALL, "Chad", "Niger"]);
    assert_eq!(opts.year_labels(), vec![ALL, "2000", "2001", "2002"]);
}

#[test]
fn all_sentinel_is_a_wildcard_only_for_the_map() {
    let ds = Dataset::from_csv_str(common::CSV).unwrap();
    let f = Filters::default();
    assert_eq!(f.apply(&ds).len(), 5);
    // the trend and comparison filters never match the sentinel
    assert!(f.apply_country_only(&ds).is_empty());
    assert!(f.apply_exact(&ds).is_empty());
}

#[test]
fn year_filter_is_ignored_by_country_only() {
    let ds = Dataset::from_csv_str(common::CSV).unwrap();
    let f = Filters::new(Selection::Only("Chad".into()), Selection::Only(2000));
    assert_eq!(f.apply(&ds).len(), 1);
    assert_eq!(f.apply_country_only(&ds).len(), 3);
    assert_eq!(f.apply_exact(&ds).len(), 1);
}

#[test]
fn unknown_option_is_rejected_without_state_change() {
    let mut s = common::loaded();
    common::select(&mut s, "Chad", "2001");
    let before = s.state().clone();
    let err = s.dispatch(Event::SelectCountry("Chadd".into())).unwrap_err();
    assert_eq!(
        err,
        DispatchError::UnknownOption {
            control: Control::Country,
            value: "Chadd".into()
        }
    );
    assert!(s.dispatch(Event::SelectYear("1999".into())).is_err());
    assert!(s.dispatch(Event::SelectYear("2001.5".into())).is_err());
    assert_eq!(s.state(), &before);
}

#[test]
fn selection_display_uses_sentinel() {
    assert_eq!(Selection::<i32>::All.to_string(), "All");
    assert_eq!(Selection::Only(2001).to_string(), "2001");
}
