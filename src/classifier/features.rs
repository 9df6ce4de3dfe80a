//! Feature extraction for exercise classification
//!
//! Extracts the 7 joint-angle features the external classifier was trained
//! on. Rust computes the features each frame; inference runs host-side.

use crate::game::joint_angle;
use crate::game::pose::{
    Pose, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Number of features per frame
pub const FEATURE_COUNT: usize = 7;

/// Extract the 7 classifier features from one pose estimate
///
/// Order matches the training columns exactly:
/// - 0: right_elbow_right_shoulder_right_hip
/// - 1: left_elbow_left_shoulder_left_hip
/// - 2: right_knee_mid_hip_left_knee
/// - 3: right_hip_right_knee_right_ankle
/// - 4: left_hip_left_knee_left_ankle
/// - 5: right_wrist_right_elbow_right_shoulder
/// - 6: left_wrist_left_elbow_left_shoulder
pub fn extract_features(kp: &Pose) -> [f32; FEATURE_COUNT] {
    let mid_hip = (
        (kp[LEFT_HIP].x + kp[RIGHT_HIP].x) / 2.0,
        (kp[LEFT_HIP].y + kp[RIGHT_HIP].y) / 2.0,
    );

    [
        joint_angle(kp[RIGHT_ELBOW].pos(), kp[RIGHT_SHOULDER].pos(), kp[RIGHT_HIP].pos()),
        joint_angle(kp[LEFT_ELBOW].pos(), kp[LEFT_SHOULDER].pos(), kp[LEFT_HIP].pos()),
        joint_angle(kp[RIGHT_KNEE].pos(), mid_hip, kp[LEFT_KNEE].pos()),
        joint_angle(kp[RIGHT_HIP].pos(), kp[RIGHT_KNEE].pos(), kp[RIGHT_ANKLE].pos()),
        joint_angle(kp[LEFT_HIP].pos(), kp[LEFT_KNEE].pos(), kp[LEFT_ANKLE].pos()),
        joint_angle(kp[RIGHT_WRIST].pos(), kp[RIGHT_ELBOW].pos(), kp[RIGHT_SHOULDER].pos()),
        joint_angle(kp[LEFT_WRIST].pos(), kp[LEFT_ELBOW].pos(), kp[LEFT_SHOULDER].pos()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::pose::{Keypoint, KEYPOINT_COUNT};

    /// Standing pose: straight legs, arms hanging down
    fn standing_pose() -> Pose {
        let mut kp = [Keypoint::new(0.0, 0.0, 0.9); KEYPOINT_COUNT];
        kp[LEFT_SHOULDER] = Keypoint::new(90.0, 100.0, 0.9);
        kp[RIGHT_SHOULDER] = Keypoint::new(110.0, 100.0, 0.9);
        kp[LEFT_ELBOW] = Keypoint::new(90.0, 150.0, 0.9);
        kp[RIGHT_ELBOW] = Keypoint::new(110.0, 150.0, 0.9);
        kp[LEFT_WRIST] = Keypoint::new(90.0, 200.0, 0.9);
        kp[RIGHT_WRIST] = Keypoint::new(110.0, 200.0, 0.9);
        kp[LEFT_HIP] = Keypoint::new(92.0, 220.0, 0.9);
        kp[RIGHT_HIP] = Keypoint::new(108.0, 220.0, 0.9);
        kp[LEFT_KNEE] = Keypoint::new(92.0, 300.0, 0.9);
        kp[RIGHT_KNEE] = Keypoint::new(108.0, 300.0, 0.9);
        kp[LEFT_ANKLE] = Keypoint::new(92.0, 380.0, 0.9);
        kp[RIGHT_ANKLE] = Keypoint::new(108.0, 380.0, 0.9);
        kp
    }

    #[test]
    fn test_standing_pose_features() {
        let feats = extract_features(&standing_pose());

        // Straight legs: hip-knee-ankle near 180° on both sides
        assert!((feats[3] - 180.0).abs() < 1.0);
        assert!((feats[4] - 180.0).abs() < 1.0);
        // Straight hanging arms: wrist-elbow-shoulder near 180°
        assert!((feats[5] - 180.0).abs() < 1.0);
        assert!((feats[6] - 180.0).abs() < 1.0);
        // Everything in valid angle range
        for f in feats {
            assert!((0.0..=180.0).contains(&f));
        }
    }

    #[test]
    fn test_knee_spread_angle_uses_mid_hip() {
        let mut kp = standing_pose();
        // Spread the knees symmetrically around the hip midpoint
        kp[LEFT_KNEE] = Keypoint::new(40.0, 300.0, 0.9);
        kp[RIGHT_KNEE] = Keypoint::new(160.0, 300.0, 0.9);
        let narrow = extract_features(&standing_pose())[2];
        let wide = extract_features(&kp)[2];
        assert!(wide > narrow);
    }
}
