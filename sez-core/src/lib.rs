pub mod coordinate;
pub mod error;

pub use coordinate::{
    ecef_to_sez, ecef_to_sez_solution, solve_geodetic, EcefCoord, GeodeticState,
    ObserverTarget, ReferenceEllipsoid, SezCoord, SezSolution,
};
pub use error::{Result, SezError};
