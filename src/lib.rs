//! Workout Web - Gamified Pose Workout Tracker
//!
//! Counts exercise repetitions, scores form quality and tracks a decaying
//! energy resource from webcam pose estimates. Pose inference and exercise
//! classification run in JavaScript; this module owns the game logic.
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - The panic hook installed at module load

pub mod bridge;
pub mod classifier;
pub mod game;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    classifier_frame, clear_keypoints, get_active_exercise, get_current_angle, get_energy,
    get_feedback, get_flare_angle, get_phase, get_reps, get_score, is_form_correct,
    no_person_frame, pose_features, pose_frame, reset_active_session, skeleton_connections,
    start_bicep_curl, update_keypoints,
};

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
