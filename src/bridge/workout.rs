//! Workout session - connects frame input to the exercise trackers
//!
//! Owns one persistent tracker per classifier exercise plus the angle-driven
//! bicep curl, so reps and score survive the player drifting between
//! exercises mid-session. Exactly one tracker is active per frame; switching
//! hands the whole session over as a unit.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::classifier::{exercise_for_label, extract_features, EXERCISE_LABELS};
use crate::game::{BicepCurlTracker, ClassifiedTracker, ExerciseTracker, FrameSignal};

use super::keypoints::get_keypoints;

/// Classifier confidence needed to switch the active exercise
const SWITCH_CONFIDENCE: f32 = 0.6;

/// Mode name for the angle-driven tracker
const BICEP_CURL: &str = "bicep_curl";

/// All trackers for the session, keyed by exercise name
struct WorkoutSession {
    games: Vec<(&'static str, ExerciseTracker)>,
    active: Option<&'static str>,
}

impl Default for WorkoutSession {
    fn default() -> Self {
        let mut games: Vec<(&'static str, ExerciseTracker)> = EXERCISE_LABELS
            .iter()
            .map(|&(name, labels)| {
                (name, ExerciseTracker::Classified(ClassifiedTracker::new(name, labels)))
            })
            .collect();
        games.push((BICEP_CURL, ExerciseTracker::BicepCurl(BicepCurlTracker::new())));

        Self { games, active: None }
    }
}

impl WorkoutSession {
    fn tracker_mut(&mut self, name: &str) -> Option<&mut ExerciseTracker> {
        self.games
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, t)| t)
    }

    fn active_mut(&mut self) -> Option<&mut ExerciseTracker> {
        let name = self.active?;
        self.tracker_mut(name)
    }

    fn active_ref(&self) -> Option<&ExerciseTracker> {
        let name = self.active?;
        self.games.iter().find(|(n, _)| *n == name).map(|(_, t)| t)
    }
}

thread_local! {
    static SESSION: RefCell<WorkoutSession> = RefCell::new(WorkoutSession::default());
}

// ============================================================================
// WASM ENTRY POINTS - mode control
// ============================================================================

/// Switch to the angle-driven bicep curl with a fresh session
#[wasm_bindgen]
pub fn start_bicep_curl() {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        if let Some(tracker) = session.tracker_mut(BICEP_CURL) {
            tracker.reset();
        }
        session.active = Some(BICEP_CURL);
    });
    web_sys::console::log_1(&"Bicep curl mode started".into());
}

/// Reset the active tracker's session (counters, energy, phase)
#[wasm_bindgen]
pub fn reset_active_session() {
    SESSION.with(|cell| {
        if let Some(tracker) = cell.borrow_mut().active_mut() {
            tracker.reset();
        }
    });
}

// ============================================================================
// WASM ENTRY POINTS - per-frame input
// ============================================================================

/// Process one frame of pose keypoints (51 floats from JS)
///
/// Stores the keypoints and, if the active exercise is pose-driven, runs its
/// per-frame update.
#[wasm_bindgen]
pub fn pose_frame(data: &[f32]) {
    super::keypoints::update_keypoints(data);

    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        if let (Some(tracker), Some(keypoints)) = (session.active_mut(), get_keypoints()) {
            tracker.update(FrameSignal::Pose(&keypoints));
        }
    });
}

/// Process a frame where no person was detected
#[wasm_bindgen]
pub fn no_person_frame() {
    super::keypoints::clear_keypoints();

    SESSION.with(|cell| {
        if let Some(tracker) = cell.borrow_mut().active_mut() {
            tracker.session_mut().feedback = "Looking for Player...".to_string();
        }
    });
}

/// Process one frame of classifier output
///
/// A confident label for a known exercise switches the active game to that
/// exercise (its accumulated session is kept); the label is then fed to the
/// active tracker.
#[wasm_bindgen]
pub fn classifier_frame(label: &str, confidence: f32) {
    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();

        if confidence > SWITCH_CONFIDENCE {
            if let Some(exercise) = exercise_for_label(label) {
                session.active = Some(exercise);
            }
        }

        if let Some(tracker) = session.active_mut() {
            tracker.update(FrameSignal::Classified { label, confidence });
        }
    });
}

/// Classifier feature vector for the current frame, for JS inference
///
/// Returns None when no person is in frame.
#[wasm_bindgen]
pub fn pose_features() -> Option<Vec<f32>> {
    get_keypoints().map(|kp| extract_features(&kp).to_vec())
}

// ============================================================================
// WASM ENTRY POINTS - HUD readouts
// ============================================================================

#[wasm_bindgen]
pub fn get_reps() -> u32 {
    SESSION.with(|cell| {
        cell.borrow().active_ref().map_or(0, |t| t.session().reps)
    })
}

#[wasm_bindgen]
pub fn get_score() -> u32 {
    SESSION.with(|cell| {
        cell.borrow().active_ref().map_or(0, |t| t.session().score)
    })
}

#[wasm_bindgen]
pub fn get_energy() -> f32 {
    SESSION.with(|cell| {
        cell.borrow()
            .active_ref()
            .map_or(crate::game::ENERGY_MAX, |t| t.session().energy)
    })
}

#[wasm_bindgen]
pub fn get_feedback() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .active_ref()
            .map_or_else(|| "Get Ready".to_string(), |t| t.session().feedback.clone())
    })
}

#[wasm_bindgen]
pub fn is_form_correct() -> bool {
    SESSION.with(|cell| {
        cell.borrow()
            .active_ref()
            .map_or(true, |t| t.session().form_correct)
    })
}

/// Current repetition phase name ("extension", "rest", ...)
#[wasm_bindgen]
pub fn get_phase() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .active_ref()
            .map_or_else(|| "start".to_string(), |t| t.phase_name().to_string())
    })
}

/// Current flexion angle, or NaN for classifier-driven exercises
#[wasm_bindgen]
pub fn get_current_angle() -> f32 {
    SESSION.with(|cell| {
        cell.borrow()
            .active_ref()
            .and_then(|t| t.current_angle())
            .unwrap_or(f32::NAN)
    })
}

/// Current flare angle, or NaN for classifier-driven exercises
#[wasm_bindgen]
pub fn get_flare_angle() -> f32 {
    SESSION.with(|cell| {
        cell.borrow()
            .active_ref()
            .and_then(|t| t.flare_angle())
            .unwrap_or(f32::NAN)
    })
}

/// Name of the active exercise, or empty string before the first switch
#[wasm_bindgen]
pub fn get_active_exercise() -> String {
    SESSION.with(|cell| {
        cell.borrow().active.unwrap_or("").to_string()
    })
}
