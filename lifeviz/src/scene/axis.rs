//! Axis groups: a domain line, then one translated tick group per tick
//! holding a 6px tick line and its label.

use crate::geometry::limits::{AXIS_FONT_SIZE, TICK_PADDING, TICK_SIZE};
use crate::model::{Mark, Paint, TextAnchor};
use crate::scales::{BandScale, LinearScale};
use crate::svg::fmt_num;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
    Right,
}

impl Orient {
    fn vertical(self) -> bool {
        !matches!(self, Orient::Bottom)
    }

    // which side of the domain line ticks point to
    fn k(self) -> f64 {
        match self {
            Orient::Left => -1.0,
            Orient::Bottom | Orient::Right => 1.0,
        }
    }

    fn anchor(self) -> TextAnchor {
        match self {
            Orient::Bottom => TextAnchor::Middle,
            Orient::Left => TextAnchor::End,
            Orient::Right => TextAnchor::Start,
        }
    }
}

/// Axis for a linear scale with about `count` ticks, placed at `at`.
pub fn linear(scale: &LinearScale, orient: Orient, count: usize, at: (f64, f64)) -> Mark {
    let ticks = scale
        .tick_labels(count)
        .into_iter()
        .map(|(v, label)| (scale.map(v), label))
        .collect();
    build(orient, scale.range, ticks, at)
}

/// Axis for a band scale: one tick at the center of each band.
pub fn band(scale: &BandScale, orient: Orient, at: (f64, f64)) -> Mark {
    let half = scale.bandwidth() / 2.0;
    let ticks = scale
        .domain()
        .iter()
        .filter_map(|d| scale.map(d).map(|x| (x + half, d.clone())))
        .collect();
    build(orient, scale.range(), ticks, at)
}

fn build(orient: Orient, range: (f64, f64), ticks: Vec<(f64, String)>, at: (f64, f64)) -> Mark {
    let k = orient.k();
    let outer = k * TICK_SIZE;
    let (r0, r1) = (fmt_num(range.0), fmt_num(range.1));
    let domain_d = if orient.vertical() {
        format!("M{},{}H0V{}H{}", fmt_num(outer), r0, r1, fmt_num(outer))
    } else {
        format!("M{},{}V0H{}V{}", r0, fmt_num(outer), r1, fmt_num(outer))
    };
    let mut children = vec![Mark::Path {
        class: Some("domain".to_string()),
        d: domain_d,
        fill: Paint::None,
        stroke: Paint::css("currentColor"),
        stroke_width: None,
        hover: None,
    }];
    let label_offset = k * (TICK_SIZE + TICK_PADDING);
    for (pos, label) in ticks {
        let (translate, line, text) = if orient.vertical() {
            (
                (0.0, pos),
                (0.0, 0.0, outer, 0.0),
                (label_offset, 0.0, 0.32),
            )
        } else {
            (
                (pos, 0.0),
                (0.0, 0.0, 0.0, outer),
                (0.0, label_offset, 0.71),
            )
        };
        children.push(Mark::group(
            Some("tick"),
            Some(translate),
            vec![
                Mark::Line {
                    x1: line.0,
                    y1: line.1,
                    x2: line.2,
                    y2: line.3,
                    stroke: Paint::css("currentColor"),
                },
                Mark::Text {
                    class: None,
                    x: text.0,
                    y: text.1,
                    dy: text.2,
                    text: label,
                    fill: Paint::css("currentColor"),
                    anchor: None,
                    bold: false,
                },
            ],
        ));
    }
    Mark::Group {
        class: Some("axis".to_string()),
        translate: Some(at),
        font_size: Some(AXIS_FONT_SIZE),
        anchor: Some(orient.anchor()),
        children,
    }
}
