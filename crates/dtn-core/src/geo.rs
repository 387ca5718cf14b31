//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64`.  Contact radii in the traces of interest are on the
//! order of ten metres, where `f32` rounding (~1 m at the equator) would move
//! pairs in and out of range.

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric in its arguments.  The `min(1.0)` clamp guards `asin`
    /// against rounding just above 1 for antipodal points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
    }

    /// A point `metres` due north of `self`.  Handy for building synthetic
    /// traces with known separations.
    pub fn north_by(self, metres: f64) -> GeoPoint {
        GeoPoint::new(self.lat + (metres / EARTH_RADIUS_M).to_degrees(), self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
