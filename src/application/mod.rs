pub mod chart_service;
pub mod simulation;

pub use chart_service::*;
pub use simulation::*;
