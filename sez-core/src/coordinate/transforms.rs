use nalgebra::Vector3;

use super::geodetic::{solve_geodetic, GeodeticState};
use super::rotation::rotate_to_sez;
use crate::error::SezError;

/// ECEF coordinates (Earth-Centered, Earth-Fixed), kilometers
pub type EcefCoord = Vector3<f64>;

/// SEZ coordinates (South, East, Zenith) relative to an observer, kilometers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SezCoord {
    pub s: f64,
    pub e: f64,
    pub z: f64,
}

impl SezCoord {
    pub fn new(s: f64, e: f64, z: f64) -> Self {
        Self { s, e, z }
    }

    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.s, self.e, self.z)
    }

    /// Range from the observer (km)
    pub fn norm(&self) -> f64 {
        self.as_vector().norm()
    }
}

impl From<Vector3<f64>> for SezCoord {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// SEZ vector together with the geodetic solution of its origin
#[derive(Debug, Clone, Copy)]
pub struct SezSolution {
    pub sez: SezCoord,
    pub geodetic: GeodeticState,
}

/// Observer origin and target point, both ECEF
#[derive(Debug, Clone, Copy)]
pub struct ObserverTarget {
    pub origin: EcefCoord,
    pub target: EcefCoord,
}

impl ObserverTarget {
    /// Number of scalar values needed to build an observer/target pair
    pub const VALUE_COUNT: usize = 6;

    pub fn new(origin: EcefCoord, target: EcefCoord) -> Self {
        Self { origin, target }
    }

    pub fn solve(&self) -> SezSolution {
        ecef_to_sez_solution(&self.origin, &self.target)
    }
}

impl TryFrom<&[f64]> for ObserverTarget {
    type Error = SezError;

    /// Build from `[o_x, o_y, o_z, x, y, z]`
    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            &[o_x, o_y, o_z, x, y, z] => Ok(Self::new(
                Vector3::new(o_x, o_y, o_z),
                Vector3::new(x, y, z),
            )),
            _ => Err(SezError::ArgumentCount {
                expected: Self::VALUE_COUNT,
                found: values.len(),
            }),
        }
    }
}

/// Convert an ECEF target to SEZ relative to an ECEF origin
pub fn ecef_to_sez(origin: &EcefCoord, target: &EcefCoord) -> SezCoord {
    ecef_to_sez_solution(origin, target).sez
}

/// Convert an ECEF target to SEZ, keeping the origin's geodetic solution
pub fn ecef_to_sez_solution(origin: &EcefCoord, target: &EcefCoord) -> SezSolution {
    let geodetic = solve_geodetic(origin);
    let displacement = target - origin;

    SezSolution {
        sez: rotate_to_sez(geodetic.lat, geodetic.lon, &displacement),
        geodetic,
    }
}
