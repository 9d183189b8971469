use tracing::{debug, warn};

use super::ellipsoid::ReferenceEllipsoid;
use super::transforms::EcefCoord;
use crate::error::{Result, SezError};

/// Upper bound on latitude refinement rounds
pub const MAX_ITERATIONS: usize = 5;

/// Latitude step (radians) below which the solver stops refining
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// Geodetic solution for an ECEF point, with solver diagnostics
#[derive(Debug, Clone, Copy)]
pub struct GeodeticState {
    pub lat: f64,                 // radians
    pub lon: f64,                 // radians
    pub radius_of_curvature: f64, // km, prime vertical
    pub hae: f64,                 // km above the reference ellipsoid
    pub iterations: usize,
    pub converged: bool,
    /// Magnitude of the final latitude update (radians)
    pub last_step: f64,
}

impl GeodeticState {
    pub fn lat_deg(&self) -> f64 {
        self.lat.to_degrees()
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon.to_degrees()
    }

    /// Fail if the iteration budget ran out before the latitude settled
    pub fn ensure_converged(&self) -> Result<&Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(SezError::NoConvergence {
                iterations: self.iterations,
                last_step: self.last_step,
            })
        }
    }
}

/// Solve geodetic latitude, longitude and height for an ECEF point (km)
///
/// Latitude is seeded with the geocentric value and refined by fixed-point
/// iteration on the prime vertical radius of curvature. The last computed
/// value is returned whether or not it converged; check
/// [`GeodeticState::converged`] when that matters.
///
/// The point must not lie on the polar axis or at the center of the Earth.
/// The refinement divides by the horizontal range and the seed by the full
/// radius; neither case is checked and the returned state is meaningless.
pub fn solve_geodetic(ecef: &EcefCoord) -> GeodeticState {
    let x = ecef.x;
    let y = ecef.y;
    let z = ecef.z;

    let lon = y.atan2(x);
    let r_lon = (x * x + y * y).sqrt();

    let mut lat = (z / ecef.norm()).asin();
    let mut c_e = f64::NAN;
    let mut last_step = f64::NAN;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        c_e = ReferenceEllipsoid::prime_vertical_radius(lat);
        let next = ((z + c_e * ReferenceEllipsoid::E2 * lat.sin()) / r_lon).atan();

        last_step = (next - lat).abs();
        lat = next;
        iterations += 1;

        if last_step <= CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }
    }

    let hae = r_lon / lat.cos() - c_e;

    let state = GeodeticState {
        lat,
        lon,
        radius_of_curvature: c_e,
        hae,
        iterations,
        converged,
        last_step,
    };

    if converged {
        debug!(
            lat_deg = state.lat_deg(),
            lon_deg = state.lon_deg(),
            hae_km = hae,
            iterations,
            "Solved geodetic origin"
        );
    } else {
        warn!(
            iterations,
            last_step,
            "Latitude did not converge, using last iterate"
        );
    }

    state
}
