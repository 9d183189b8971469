//! Reference ellipsoid

/// Reference ellipsoid used for all geodetic solutions (kilometers)
pub struct ReferenceEllipsoid;

impl ReferenceEllipsoid {
    /// Semi-major axis (equatorial radius) in kilometers
    pub const A_KM: f64 = 6378.1363;

    /// First eccentricity
    pub const E: f64 = 0.081819221456;

    /// First eccentricity squared
    pub const E2: f64 = Self::E * Self::E;

    /// Radius of curvature in the prime vertical at the given geodetic latitude (km)
    pub fn prime_vertical_radius(lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        Self::A_KM / (1.0 - Self::E2 * sin_lat * sin_lat).sqrt()
    }
}
