//! Session state shared by all exercise trackers
//!
//! Reps, score, energy and feedback accumulate across frames until the
//! tracker is reset or discarded. Nothing resets implicitly mid-session.

/// Points awarded per completed repetition
pub const REP_SCORE: u32 = 100;

/// Energy ceiling (energy is clamped to [0, ENERGY_MAX])
pub const ENERGY_MAX: f32 = 100.0;

/// Mutable game state for one exercise session
///
/// Owned by exactly one tracker; the renderer reads it, never writes it.
/// Invariants: `energy` in [0, 100] after every update, `reps` and `score`
/// never decrease within a session.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub reps: u32,
    pub score: u32,
    pub energy: f32,
    pub form_correct: bool,
    pub feedback: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            reps: 0,
            score: 0,
            energy: ENERGY_MAX,
            form_correct: true,
            feedback: "Get Ready".to_string(),
        }
    }

    /// Start over: counters, energy and feedback back to initial values
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Credit one completed repetition
    pub fn credit_rep(&mut self) {
        self.reps += 1;
        self.score += REP_SCORE;
    }

    /// Add energy, capped at the ceiling (floor handling is tracker-specific)
    pub fn regen_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).min(ENERGY_MAX);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = SessionState::new();
        assert_eq!(s.reps, 0);
        assert_eq!(s.score, 0);
        assert_eq!(s.energy, ENERGY_MAX);
        assert!(s.form_correct);
        assert_eq!(s.feedback, "Get Ready");
    }

    #[test]
    fn test_credit_rep() {
        let mut s = SessionState::new();
        s.credit_rep();
        s.credit_rep();
        assert_eq!(s.reps, 2);
        assert_eq!(s.score, 2 * REP_SCORE);
    }

    #[test]
    fn test_regen_caps_at_max() {
        let mut s = SessionState::new();
        s.energy = 99.9;
        s.regen_energy(5.0);
        assert_eq!(s.energy, ENERGY_MAX);
    }

    #[test]
    fn test_reset_returns_to_initial() {
        let mut s = SessionState::new();
        s.credit_rep();
        s.energy = 12.5;
        s.form_correct = false;
        s.feedback = "Tuck Your Elbow!".to_string();
        s.reset();
        assert_eq!(s.reps, 0);
        assert_eq!(s.score, 0);
        assert_eq!(s.energy, ENERGY_MAX);
        assert_eq!(s.feedback, "Get Ready");
    }
}
