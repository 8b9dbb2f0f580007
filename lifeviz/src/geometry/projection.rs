use super::limits::{clamp_lat, mercator_y, wrap_lon};

/// Spherical Mercator with d3-style scale and translate: `x = k·λ + tx`,
/// `y = ty − k·ln tan(π/4 + φ/2)`, angles in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Mercator {
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        Mercator { scale, translate }
    }

    /// Project a `[lon, lat]` pair in degrees to surface pixels.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lambda = wrap_lon(lon.to_radians());
        let phi = clamp_lat(lat.to_radians());
        (
            self.translate.0 + self.scale * lambda,
            self.translate.1 - self.scale * mercator_y(phi),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_lands_on_translate() {
        let m = Mercator::new(150.0, (600.0, 400.0));
        let (x, y) = m.project(0.0, 0.0);
        assert!((x - 600.0).abs() < 1e-9);
        assert!((y - 400.0).abs() < 1e-9);
    }

    #[test]
    fn poles_are_clamped_to_square() {
        let m = Mercator::new(150.0, (600.0, 400.0));
        let (_, top) = m.project(0.0, 90.0);
        assert!((top - (400.0 - 150.0 * std::f64::consts::PI)).abs() < 1e-6);
        let (east, _) = m.project(180.0, 0.0);
        assert!((east - (600.0 + 150.0 * std::f64::consts::PI)).abs() < 1e-9);
    }
}
