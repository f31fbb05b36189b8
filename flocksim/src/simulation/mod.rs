pub mod states;
pub mod vector;
pub mod error;
pub mod agents;
pub mod driving;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod engine;
pub mod simulator;
pub mod scenario;
