use super::projection::Mercator;
use crate::svg::fmt_num;
use crate::topology::{Polygon, Position};
use std::fmt::Write;

/// Closed `M…L…Z` subpaths for every ring of every polygon. Rings with
/// fewer than two points are dropped.
pub fn polygons_d(projection: &Mercator, polygons: &[Polygon]) -> String {
    let mut d = String::new();
    for ring in polygons.iter().flatten() {
        if ring.len() < 2 {
            continue;
        }
        // the closing point repeats the first; Z takes care of it
        let open = if ring.first() == ring.last() { &ring[..ring.len() - 1] } else { &ring[..] };
        push_line(&mut d, projection, open);
        d.push('Z');
    }
    d
}

/// Open `M…L…` subpaths, one per line.
pub fn lines_d<'a, I>(projection: &Mercator, lines: I) -> String
where
    I: IntoIterator<Item = &'a [Position]>,
{
    let mut d = String::new();
    for line in lines {
        if line.len() < 2 {
            continue;
        }
        push_line(&mut d, projection, line);
    }
    d
}

fn push_line(d: &mut String, projection: &Mercator, points: &[Position]) {
    for (i, p) in points.iter().enumerate() {
        let (x, y) = projection.project(p[0], p[1]);
        let _ = write!(d, "{}{},{}", if i == 0 { 'M' } else { 'L' }, fmt_num(x), fmt_num(y));
    }
}
