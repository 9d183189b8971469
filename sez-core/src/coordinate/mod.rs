//! ECEF to topocentric SEZ conversion

mod ellipsoid;
mod geodetic;
mod rotation;
mod transforms;

pub use ellipsoid::ReferenceEllipsoid;
pub use geodetic::{solve_geodetic, GeodeticState, CONVERGENCE_TOLERANCE, MAX_ITERATIONS};
pub use rotation::{rotate_to_sez, rotation_y, rotation_z};
pub use transforms::{
    ecef_to_sez, ecef_to_sez_solution,
    EcefCoord, ObserverTarget, SezCoord, SezSolution,
};
