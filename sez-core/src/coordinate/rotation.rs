use nalgebra::{Matrix3, Vector3};

use super::transforms::{EcefCoord, SezCoord};

/// Rotation about Z by longitude, bringing the displacement into the
/// meridian plane of the observer
pub fn rotation_z(lon: f64) -> Matrix3<f64> {
    let (sin_lon, cos_lon) = lon.sin_cos();

    Matrix3::new(
        cos_lon, sin_lon, 0.0,
        -sin_lon, cos_lon, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Rotation about Y tilting the meridian frame into South-East-Zenith
pub fn rotation_y(lat: f64) -> Matrix3<f64> {
    let (sin_lat, cos_lat) = lat.sin_cos();

    Matrix3::new(
        sin_lat, 0.0, -cos_lat,
        0.0, 1.0, 0.0,
        cos_lat, 0.0, sin_lat,
    )
}

/// Express an ECEF displacement (km) in the SEZ frame of an observer at
/// geodetic `lat`, `lon` (radians)
pub fn rotate_to_sez(lat: f64, lon: f64, displacement: &EcefCoord) -> SezCoord {
    let meridian: Vector3<f64> = rotation_z(lon) * displacement;
    SezCoord::from(rotation_y(lat) * meridian)
}
