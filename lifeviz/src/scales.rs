//! Scales, extents and tick generation for the chart scenes.
//!
//! Tick placement uses the usual 1/2/5 progression: the raw step
//! `(stop - start) / count` is rounded to a power of ten times 1, 2, 5 or 10.

use crate::model::Color;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(min, max)` of the finite values, or `None` when there are none.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn normalize(x: f64, (d0, d1): (f64, f64)) -> f64 {
    let span = d1 - d0;
    if span == 0.0 || span.is_nan() {
        0.5
    } else {
        (x - d0) / span
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Unclamped; a degenerate domain maps everything to the middle of the range.
    pub fn map(&self, x: f64) -> f64 {
        let t = normalize(x, self.domain);
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Labels for `ticks(count)`, with as many decimals as the tick step needs.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let step = tick_step(self.domain.0, self.domain.1, count);
        self.ticks(count)
            .into_iter()
            .map(|v| (v, format_tick(v, step)))
            .collect()
    }
}

/// Evenly spaced bands over a categorical domain.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Inner and outer padding both set to `padding`, bands centered in the range.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let (inner, outer, align) = (padding, padding, 0.5);
        let n = domain.len() as f64;
        let (r0, r1) = if range.1 < range.0 { (range.1, range.0) } else { range };
        let step = (r1 - r0) / f64::max(1.0, n - inner + outer * 2.0);
        let start = r0 + (r1 - r0 - step * (n - inner)) * align;
        let bandwidth = step * (1.0 - inner);
        BandScale {
            domain,
            range,
            start,
            step,
            bandwidth,
        }
    }

    pub fn map(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Maps a numeric domain onto a color ramp.
#[derive(Clone, Copy)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    interpolator: fn(f64) -> Color,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: fn(f64) -> Color) -> Self {
        SequentialScale {
            domain,
            interpolator,
        }
    }

    pub fn map(&self, x: f64) -> Color {
        (self.interpolator)(normalize(x, self.domain))
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let f = 10f64.powf(-power) / factor;
        i1 = (start * f).round();
        i2 = (stop * f).round();
        if i1 / f < start {
            i1 += 1.0;
        }
        if i2 / f > stop {
            i2 -= 1.0;
        }
        inc = -f;
    } else {
        let f = 10f64.powf(power) * factor;
        i1 = (start / f).round();
        i2 = (stop / f).round();
        if i1 * f < start {
            i1 += 1.0;
        }
        if i2 * f > stop {
            i2 -= 1.0;
        }
        inc = f;
    }
    if !inc.is_finite() {
        return None;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Round tick values covering `[start, stop]`, about `count` of them.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let spec = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    let Some((i1, i2, inc)) = spec else {
        return Vec::new();
    };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            if reverse {
                value(i2 - i as f64)
            } else {
                value(i1 + i as f64)
            }
        })
        .collect()
}

/// Signed spacing between the ticks `ticks(start, stop, count)` would return.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step0 = (hi - lo) / (count.max(1) as f64);
    let mut step1 = 10f64.powf(step0.log10().floor());
    let error = step0 / step1;
    if error >= E10 {
        step1 *= 10.0;
    } else if error >= E5 {
        step1 *= 5.0;
    } else if error >= E2 {
        step1 *= 2.0;
    }
    if reverse {
        -step1
    } else {
        step1
    }
}

/// Fixed-point label with thousands separators, precision taken from the step.
pub fn format_tick(v: f64, step: f64) -> String {
    if step == 0.0 || !step.is_finite() {
        return format!("{}", v);
    }
    let precision = (-step.abs().log10().floor()).max(0.0) as usize;
    format_grouped(v, precision)
}

/// `1234.5` with precision 1 becomes `1,234.5`; negatives use a minus sign.
pub fn format_grouped(v: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = text.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero {
        format!("\u{2212}{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_nan() {
        assert_eq!(extent([3.0, f64::NAN, 1.0, 2.0]), Some((1.0, 3.0)));
        assert_eq!(extent(Vec::<f64>::new()), None);
        assert_eq!(extent([f64::NAN]), None);
    }

    #[test]
    fn grouped_formatting() {
        assert_eq!(format_grouped(2000.0, 0), "2,000");
        assert_eq!(format_grouped(1234567.25, 2), "1,234,567.25");
        assert_eq!(format_grouped(-5.0, 0), "\u{2212}5");
        assert_eq!(format_grouped(-0.0, 0), "0");
        assert_eq!(format_grouped(999.0, 0), "999");
    }

    #[test]
    fn degenerate_linear_domain_maps_to_middle() {
        let s = LinearScale::new((51.6, 51.6), (550.0, 50.0));
        assert_eq!(s.map(51.6), 300.0);
    }
}
