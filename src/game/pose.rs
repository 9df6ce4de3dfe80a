//! COCO-17 keypoint model
//!
//! One pose estimate per frame: 17 keypoints, each (x, y) in frame pixel
//! space plus a detection confidence in [0, 1]. Index is joint identity.

// ============================================================================
// KEYPOINT INDICES (COCO layout - 17 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const RIGHT_EYE: usize = 2;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_ELBOW: usize = 7;
pub const RIGHT_ELBOW: usize = 8;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;
pub const LEFT_HIP: usize = 11;
pub const RIGHT_HIP: usize = 12;
pub const LEFT_KNEE: usize = 13;
pub const RIGHT_KNEE: usize = 14;
pub const LEFT_ANKLE: usize = 15;
pub const RIGHT_ANKLE: usize = 16;

/// Keypoints per pose estimate
pub const KEYPOINT_COUNT: usize = 17;

/// Skeleton connections (pairs of keypoint indices) for the JS overlay
pub const SKELETON: [(usize, usize); 12] = [
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_HIP, RIGHT_HIP),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
];

/// A single detected keypoint
#[derive(Clone, Copy, Debug, Default)]
pub struct Keypoint {
    /// Frame pixel space
    pub x: f32,
    pub y: f32,
    /// Detection confidence, 0-1
    pub confidence: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }

    /// Position only, for angle math (confidence is the caller's concern)
    pub fn pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// A full-body pose estimate for one frame
pub type Pose = [Keypoint; KEYPOINT_COUNT];
