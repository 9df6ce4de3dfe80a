//! Tracker dispatch
//!
//! One active tracker at a time, over a closed set of variants. Each variant
//! consumes its own input kind; the per-frame signal is a matching closed
//! enum so a pose frame can never be forced through the classifier tracker's
//! signature or vice versa.

use super::bicep_curl::BicepCurlTracker;
use super::classified::ClassifiedTracker;
use super::pose::Pose;
use super::session::SessionState;

/// Per-frame input to a tracker
pub enum FrameSignal<'a> {
    /// A full-body pose estimate
    Pose(&'a Pose),
    /// External classifier output
    Classified { label: &'a str, confidence: f32 },
}

/// The closed set of exercise tracker variants
pub enum ExerciseTracker {
    BicepCurl(BicepCurlTracker),
    Classified(ClassifiedTracker),
}

impl ExerciseTracker {
    /// Feed one frame's signal to the tracker.
    ///
    /// A signal kind that does not match the variant is silently ignored,
    /// the same tolerance applied to unrecognized classifier labels.
    pub fn update(&mut self, signal: FrameSignal<'_>) {
        match (self, signal) {
            (ExerciseTracker::BicepCurl(t), FrameSignal::Pose(keypoints)) => {
                t.update(keypoints);
            }
            (ExerciseTracker::Classified(t), FrameSignal::Classified { label, confidence }) => {
                t.update(label, confidence);
            }
            _ => {}
        }
    }

    pub fn session(&self) -> &SessionState {
        match self {
            ExerciseTracker::BicepCurl(t) => t.session(),
            ExerciseTracker::Classified(t) => t.session(),
        }
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        match self {
            ExerciseTracker::BicepCurl(t) => t.session_mut(),
            ExerciseTracker::Classified(t) => t.session_mut(),
        }
    }

    /// Current repetition phase, for the HUD
    pub fn phase_name(&self) -> &'static str {
        match self {
            ExerciseTracker::BicepCurl(t) => t.phase().name(),
            ExerciseTracker::Classified(t) => t.phase().name(),
        }
    }

    /// Last computed flexion angle, where the variant has one
    pub fn current_angle(&self) -> Option<f32> {
        match self {
            ExerciseTracker::BicepCurl(t) => Some(t.current_angle()),
            ExerciseTracker::Classified(_) => None,
        }
    }

    /// Last computed flare angle, where the variant has one
    pub fn flare_angle(&self) -> Option<f32> {
        match self {
            ExerciseTracker::BicepCurl(t) => Some(t.flare_angle()),
            ExerciseTracker::Classified(_) => None,
        }
    }

    /// Fresh session for this tracker, as a unit (no partial hand-off)
    pub fn reset(&mut self) {
        match self {
            ExerciseTracker::BicepCurl(t) => t.reset(),
            ExerciseTracker::Classified(t) => t.reset(),
        }
    }
}
