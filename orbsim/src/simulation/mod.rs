pub mod error;
pub mod states;
pub mod params;
pub mod forces;
pub mod orbit;
pub mod integrator;
pub mod time_axis;
pub mod analysis;
pub mod scenario;
