pub mod info;
pub mod phase;

pub use info::{PhaseInfo, PHASE_INFO};
pub use phase::{illumination, phase_angle, PhaseName};
