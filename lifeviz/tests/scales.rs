use lifeviz::scales::{format_tick, tick_step, ticks, BandScale, LinearScale};
use proptest::prelude::*;

#[test]
fn year_axis_ticks() {
    let t = ticks(2000.0, 2020.0, 10);
    assert_eq!(t, (0..=10).map(|i| 2000.0 + 2.0 * i as f64).collect::<Vec<_>>());
    let s = LinearScale::new((2000.0, 2020.0), (50.0, 1150.0));
    let labels = s.tick_labels(10);
    assert_eq!(labels[0], (2000.0, "2,000".to_string()));
    assert_eq!(labels[10].1, "2,020");
}

#[test]
fn fractional_ticks_get_matching_precision() {
    assert_eq!(ticks(46.0, 50.2, 6), (0..=8).map(|i| 46.0 + 0.5 * i as f64).collect::<Vec<_>>());
    assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(format_tick(0.2, tick_step(0.0, 1.0, 5)), "0.2");
    assert_eq!(format_tick(46.5, 0.5), "46.5");
}

#[test]
fn reversed_and_degenerate_domains() {
    assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert!(ticks(f64::NAN, 1.0, 10).is_empty());
}

#[test]
fn band_scale_with_padding() {
    let b = BandScale::new(vec!["a".into(), "b".into()], (50.0, 1150.0), 0.1);
    // step = 1100 / (2 - 0.1 + 0.2) ; outer padding 0.1 step on each side
    let step = 1100.0 / 2.1;
    assert!((b.bandwidth() - step * 0.9).abs() < 1e-9);
    assert!((b.map("a").unwrap() - (50.0 + step * 0.1)).abs() < 1e-9);
    assert!((b.map("b").unwrap() - (50.0 + step * 1.1)).abs() < 1e-9);
    assert_eq!(b.map("c"), None);
}

proptest! {
    #[test]
    fn ticks_stay_inside_the_domain(
        a in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        n in 1usize..20,
    ) {
        let t = ticks(a, a + span, n);
        prop_assert!(!t.is_empty());
        for w in t.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
        for v in &t {
            prop_assert!(*v >= a - span * 1e-9 && *v <= a + span + span * 1e-9);
        }
    }
}
