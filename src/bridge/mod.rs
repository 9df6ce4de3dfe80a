//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod keypoints;
mod workout;

pub use keypoints::{
    // WASM entry points
    update_keypoints,
    clear_keypoints,
    skeleton_connections,
    // Internal API
    get_keypoints,
    has_keypoints,
};

pub use workout::{
    start_bicep_curl,
    reset_active_session,
    pose_frame,
    no_person_frame,
    classifier_frame,
    pose_features,
    get_reps,
    get_score,
    get_energy,
    get_feedback,
    is_form_correct,
    get_phase,
    get_current_angle,
    get_flare_angle,
    get_active_exercise,
};
