//! Game module - per-frame exercise evaluation
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod bicep_curl;
mod classified;
pub mod pose;
mod session;
mod tracker;

pub use angles::joint_angle;
pub use bicep_curl::{BicepCurlTracker, CurlPhase, MIN_KEYPOINT_CONFIDENCE};
pub use classified::{ClassifiedTracker, RepPhase, MIN_LABEL_CONFIDENCE};
pub use session::{SessionState, ENERGY_MAX, REP_SCORE};
pub use tracker::{ExerciseTracker, FrameSignal};
