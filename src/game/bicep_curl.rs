//! Angle-driven bicep curl tracker
//!
//! Derives form (elbow flare at the shoulder) and repetition phase (elbow
//! flexion) from joint angles every frame. The 40°/160° hysteresis band
//! between the curl-up and curl-down triggers is what prevents jitter near a
//! single boundary from double-counting reps.

use super::angles::joint_angle;
use super::pose::{Pose, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST};
use super::session::SessionState;

/// Minimum keypoint confidence to trust a frame
pub const MIN_KEYPOINT_CONFIDENCE: f32 = 0.5;

/// Elbow flare beyond this is bad form
const FLARE_LIMIT_DEG: f32 = 20.0;
/// Elbow angle below this counts as fully curled
const CURL_UP_DEG: f32 = 40.0;
/// Elbow angle above this counts as fully extended
const CURL_DOWN_DEG: f32 = 160.0;
/// Energy drained per bad-form frame
const FORM_DRAIN: f32 = 0.5;
/// Energy regained per good-form frame
const FORM_REGEN: f32 = 0.2;

/// Repetition phase for angle-driven exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurlPhase {
    /// Arm extended, waiting for the curl up
    Extension,
    /// Arm curled, waiting for the return stroke
    Flexion,
}

impl CurlPhase {
    pub fn name(&self) -> &'static str {
        match self {
            CurlPhase::Extension => "extension",
            CurlPhase::Flexion => "flexion",
        }
    }
}

/// Bicep curl game state, one instance per session
pub struct BicepCurlTracker {
    session: SessionState,
    phase: CurlPhase,
    /// Last computed elbow flexion angle (HUD display only)
    current_angle: f32,
    /// Last computed shoulder flare angle (HUD display only)
    flare_angle: f32,
}

impl BicepCurlTracker {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            phase: CurlPhase::Extension,
            current_angle: 0.0,
            flare_angle: 0.0,
        }
    }

    /// Process one frame of pose keypoints
    pub fn update(&mut self, keypoints: &Pose) {
        const NEEDED: [usize; 4] = [RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, RIGHT_HIP];

        // 1. Visibility gate: without all required joints there is no
        //    evidence to act on, so the frame changes nothing but feedback.
        for &idx in &NEEDED {
            if keypoints[idx].confidence < MIN_KEYPOINT_CONFIDENCE {
                self.session.feedback = "Camera Obstructed".to_string();
                self.session.form_correct = false;
                return;
            }
        }

        let shoulder = keypoints[RIGHT_SHOULDER].pos();
        let elbow = keypoints[RIGHT_ELBOW].pos();
        let wrist = keypoints[RIGHT_WRIST].pos();
        let hip = keypoints[RIGHT_HIP].pos();

        // 2. Form check: flare angle at the shoulder between hip and elbow
        self.flare_angle = joint_angle(hip, shoulder, elbow);

        if self.flare_angle > FLARE_LIMIT_DEG {
            self.session.form_correct = false;
            self.session.feedback = "Tuck Your Elbow!".to_string();
            // May transiently go negative; floored in step 4
            self.session.energy -= FORM_DRAIN;
        } else {
            self.session.form_correct = true;
            self.session.feedback = "Good Form".to_string();
            self.session.regen_energy(FORM_REGEN);
        }

        // 3. Repetition check: flexion angle at the elbow
        self.current_angle = joint_angle(shoulder, elbow, wrist);

        match self.phase {
            CurlPhase::Extension => {
                // Only a well-formed curl earns the rep
                if self.current_angle < CURL_UP_DEG && self.session.form_correct {
                    self.phase = CurlPhase::Flexion;
                    self.session.credit_rep();
                }
            }
            CurlPhase::Flexion => {
                // Return stroke is unconditional
                if self.current_angle > CURL_DOWN_DEG {
                    self.phase = CurlPhase::Extension;
                }
            }
        }

        // 4. Energy floor
        if self.session.energy < 0.0 {
            self.session.energy = 0.0;
            self.session.feedback = "FATIGUE / BAD FORM".to_string();
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn phase(&self) -> CurlPhase {
        self.phase
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn flare_angle(&self) -> f32 {
        self.flare_angle
    }

    /// Fresh session: counters, energy and phase back to initial
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for BicepCurlTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pose::{Keypoint, KEYPOINT_COUNT};
    use crate::game::session::REP_SCORE;

    /// Pose with the right arm at a given elbow angle, elbow tucked
    /// (flare ≈ 0°: hip, shoulder and elbow collinear on the y axis).
    fn curl_pose(elbow_deg: f32) -> Pose {
        let mut kp = [Keypoint::new(0.0, 0.0, 0.9); KEYPOINT_COUNT];
        kp[RIGHT_HIP] = Keypoint::new(100.0, 300.0, 0.9);
        kp[RIGHT_SHOULDER] = Keypoint::new(100.0, 100.0, 0.9);
        kp[RIGHT_ELBOW] = Keypoint::new(100.0, 200.0, 0.9);
        // Forearm rotated elbow_deg away from the straight-down continuation
        let rad = (180.0 - elbow_deg).to_radians();
        kp[RIGHT_WRIST] = Keypoint::new(
            100.0 + 80.0 * rad.sin(),
            200.0 + 80.0 * rad.cos(),
            0.9,
        );
        kp
    }

    /// Pose with the elbow flared out sideways past the form limit
    fn flared_pose() -> Pose {
        let mut kp = [Keypoint::new(0.0, 0.0, 0.9); KEYPOINT_COUNT];
        kp[RIGHT_HIP] = Keypoint::new(100.0, 300.0, 0.9);
        kp[RIGHT_SHOULDER] = Keypoint::new(100.0, 100.0, 0.9);
        // ~35° off the hip-shoulder line
        kp[RIGHT_ELBOW] = Keypoint::new(100.0 + 100.0 * 35.0_f32.to_radians().sin(),
                                        100.0 + 100.0 * 35.0_f32.to_radians().cos(),
                                        0.9);
        // Wrist curled back up toward the shoulder (elbow angle well under 40°)
        kp[RIGHT_WRIST] = Keypoint::new(120.0, 130.0, 0.9);
        kp
    }

    #[test]
    fn test_full_cycle_credits_one_rep() {
        let mut t = BicepCurlTracker::new();
        let expected_reps = [0, 0, 1, 1, 1];
        for (pose_deg, want) in [170.0, 170.0, 35.0, 35.0, 170.0].iter().zip(expected_reps) {
            t.update(&curl_pose(*pose_deg));
            assert_eq!(t.session().reps, want);
        }
        assert_eq!(t.session().score, REP_SCORE);
        assert_eq!(t.phase(), CurlPhase::Extension);
    }

    #[test]
    fn test_no_double_count_within_flexion() {
        let mut t = BicepCurlTracker::new();
        t.update(&curl_pose(170.0));
        // Hold the curl; hover around the threshold without extending
        for _ in 0..20 {
            t.update(&curl_pose(35.0));
            t.update(&curl_pose(45.0));
        }
        assert_eq!(t.session().reps, 1);
    }

    #[test]
    fn test_obstructed_frame_changes_nothing_but_feedback() {
        let mut t = BicepCurlTracker::new();
        t.update(&curl_pose(170.0));
        let energy_before = t.session().energy;
        let phase_before = t.phase();

        let mut blind = curl_pose(35.0);
        blind[RIGHT_WRIST].confidence = 0.2;
        t.update(&blind);

        assert_eq!(t.session().feedback, "Camera Obstructed");
        assert!(!t.session().form_correct);
        assert_eq!(t.session().reps, 0);
        assert_eq!(t.session().energy, energy_before);
        assert_eq!(t.phase(), phase_before);
    }

    #[test]
    fn test_flare_drains_energy_and_blocks_reps() {
        let mut t = BicepCurlTracker::new();
        for _ in 0..10 {
            t.update(&flared_pose());
        }
        assert!((t.session().energy - 95.0).abs() < 1e-4);
        assert!(!t.session().form_correct);
        assert_eq!(t.session().feedback, "Tuck Your Elbow!");
        // Even if the elbow angle crossed the curl-up threshold while
        // flared, no rep may be credited
        assert_eq!(t.session().reps, 0);
    }

    #[test]
    fn test_energy_floor_and_fatigue_message() {
        let mut t = BicepCurlTracker::new();
        // 100 / 0.5 = 200 frames to empty, then keep draining
        for _ in 0..220 {
            t.update(&flared_pose());
        }
        assert_eq!(t.session().energy, 0.0);
        assert_eq!(t.session().feedback, "FATIGUE / BAD FORM");
    }

    #[test]
    fn test_energy_never_leaves_bounds() {
        let mut t = BicepCurlTracker::new();
        for i in 0..500 {
            if i % 3 == 0 {
                t.update(&flared_pose());
            } else {
                t.update(&curl_pose(if i % 2 == 0 { 35.0 } else { 170.0 }));
            }
            let e = t.session().energy;
            assert!((0.0..=100.0).contains(&e), "energy {} out of bounds", e);
        }
    }

    #[test]
    fn test_good_form_regen_caps_at_max() {
        let mut t = BicepCurlTracker::new();
        for _ in 0..50 {
            t.update(&curl_pose(170.0));
        }
        assert_eq!(t.session().energy, 100.0);
        assert_eq!(t.session().feedback, "Good Form");
    }

    #[test]
    fn test_reset_gives_fresh_session() {
        let mut t = BicepCurlTracker::new();
        t.update(&curl_pose(170.0));
        t.update(&curl_pose(35.0));
        assert_eq!(t.session().reps, 1);
        t.reset();
        assert_eq!(t.session().reps, 0);
        assert_eq!(t.phase(), CurlPhase::Extension);
        assert_eq!(t.session().feedback, "Get Ready");
    }
}
