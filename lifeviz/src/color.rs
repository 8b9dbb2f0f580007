use crate::model::Color;

/// ColorBrewer sequential "Blues", 9 classes, light to dark.
pub const BLUES: [Color; 9] = [
    Color::rgb(0xf7, 0xfb, 0xff),
    Color::rgb(0xde, 0xeb, 0xf7),
    Color::rgb(0xc6, 0xdb, 0xef),
    Color::rgb(0x9e, 0xca, 0xe1),
    Color::rgb(0x6b, 0xae, 0xd6),
    Color::rgb(0x42, 0x92, 0xc6),
    Color::rgb(0x21, 0x71, 0xb5),
    Color::rgb(0x08, 0x51, 0x9c),
    Color::rgb(0x08, 0x30, 0x6b),
];

/// Continuous Blues ramp for t in [0, 1]; t outside is clamped, NaN maps to the light end.
pub fn interpolate_blues(t: f64) -> Color {
    interpolate_rgb_basis(&BLUES, t)
}

/// Uniform cubic B-spline through `stops`, per channel. Passes exactly through
/// the first and last stop.
pub fn interpolate_rgb_basis(stops: &[Color], t: f64) -> Color {
    match stops {
        [] => Color::rgb(0, 0, 0),
        [only] => *only,
        _ => {
            let r: Vec<f64> = stops.iter().map(|c| c.r as f64).collect();
            let g: Vec<f64> = stops.iter().map(|c| c.g as f64).collect();
            let b: Vec<f64> = stops.iter().map(|c| c.b as f64).collect();
            Color::rgb(
                channel(basis_at(&r, t)),
                channel(basis_at(&g, t)),
                channel(basis_at(&b, t)),
            )
        }
    }
}

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

fn basis_at(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if !(t > 0.0) {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn channel(v: f64) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.round().clamp(0.0, 255.0) as u8
    }
}
