//! Joint angle calculation using dot product
//!
//! Calculates the angle at a vertex joint from the positions of two
//! neighbouring joints, e.g. the elbow angle from shoulder→elbow (upper arm)
//! and elbow→wrist (forearm).

/// Rays shorter than this are treated as zero-length
const MIN_RAY_LENGTH: f32 = 1e-6;

/// Calculate the angle at vertex `b` formed by points `a` and `c`, in degrees
///
/// Uses dot product formula: cos(θ) = (ba · bc) / (|ba| × |bc|)
///
/// Returns angle in degrees [0, 180]:
/// - 0°   = rays overlap (fully folded)
/// - 180° = rays opposed (fully straight)
///
/// If either ray is zero-length (a == b or c == b) the angle is undefined;
/// 0.0 is returned so callers can stay branch-free on noisy input.
pub fn joint_angle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    // Rays from the vertex out to each neighbour
    let ba = (a.0 - b.0, a.1 - b.1);
    let bc = (c.0 - b.0, c.1 - b.1);

    let dot = ba.0 * bc.0 + ba.1 * bc.1;

    let mag_ba = (ba.0 * ba.0 + ba.1 * ba.1).sqrt();
    let mag_bc = (bc.0 * bc.0 + bc.1 * bc.1).sqrt();

    // Degenerate case: coincident points
    if mag_ba < MIN_RAY_LENGTH || mag_bc < MIN_RAY_LENGTH {
        return 0.0;
    }

    // Clamp absorbs floating-point drift that would push acos out of domain
    let cos_angle = (dot / (mag_ba * mag_bc)).clamp(-1.0, 1.0);

    cos_angle.acos().to_degrees()
}
