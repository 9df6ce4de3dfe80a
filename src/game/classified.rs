//! Classifier-driven exercise tracker
//!
//! Generic tracker for exercises recognized by the external pose classifier
//! (squats, pushups, ...). No geometry here: the repetition state machine is
//! driven by (label, confidence) pairs, debounced against label flicker.

use crate::classifier::labels::LabelPair;

use super::session::SessionState;

/// Classifier outputs below this confidence are ignored entirely
pub const MIN_LABEL_CONFIDENCE: f32 = 0.4;

/// Energy regained per frame the classifier recognizes the exercise
const PASSIVE_REGEN: f32 = 0.1;
/// Energy bonus for a completed repetition
const REP_BONUS: f32 = 5.0;

/// Repetition phase for classifier-driven exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepPhase {
    /// No accepted label yet
    Start,
    /// In the recovered pose, waiting for the working phase
    Rest,
    /// In the working phase, waiting for the recovery
    Active,
}

impl RepPhase {
    pub fn name(&self) -> &'static str {
        match self {
            RepPhase::Start => "start",
            RepPhase::Rest => "rest",
            RepPhase::Active => "active",
        }
    }
}

/// Exercise game state driven by external classification
pub struct ClassifiedTracker {
    session: SessionState,
    phase: RepPhase,
    labels: LabelPair,
    /// Feedback shown while the classifier recognizes the exercise
    exercising_feedback: String,
    /// Last accepted label, for debouncing
    last_label: String,
}

impl ClassifiedTracker {
    pub fn new(exercise: &str, labels: LabelPair) -> Self {
        Self {
            session: SessionState::new(),
            phase: RepPhase::Start,
            labels,
            exercising_feedback: format!("Doing {}...", exercise),
            last_label: String::new(),
        }
    }

    /// Process one frame of classifier output
    pub fn update(&mut self, label: &str, confidence: f32) {
        // Low-confidence frames are invisible to the state machine:
        // neither phase nor debounce memory moves.
        if confidence < MIN_LABEL_CONFIDENCE {
            self.session.feedback = "Uncertain...".to_string();
            return;
        }

        // Debounce: a repeated label is a stable state, not a transition
        if label != self.last_label {
            self.handle_transition(label);
            self.last_label = label.to_string();
        }

        // Form here is a proxy: the classifier recognizing either phase of
        // the target exercise at all counts as correct form. Any other
        // label (standing, a different exercise) changes nothing.
        if label == self.labels.active || label == self.labels.rest {
            self.session.form_correct = true;
            self.session.feedback = self.exercising_feedback.clone();
            self.session.regen_energy(PASSIVE_REGEN);
        }
    }

    fn handle_transition(&mut self, label: &str) {
        match self.phase {
            RepPhase::Rest if label == self.labels.active => {
                self.phase = RepPhase::Active;
                self.session.feedback = "GO!".to_string();
            }
            // Active back to rest completes the repetition
            RepPhase::Active if label == self.labels.rest => {
                self.phase = RepPhase::Rest;
                self.session.credit_rep();
                self.session.regen_energy(REP_BONUS);
                self.session.feedback = "GOOD REP!".to_string();
            }
            RepPhase::Start => {
                if label == self.labels.rest {
                    self.phase = RepPhase::Rest;
                } else if label == self.labels.active {
                    self.phase = RepPhase::Active;
                }
            }
            // Mid-transition noise or some other exercise's label
            _ => {}
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    pub fn labels(&self) -> LabelPair {
        self.labels
    }

    /// Fresh session: counters, phase and debounce memory back to initial
    pub fn reset(&mut self) {
        self.session.reset();
        self.phase = RepPhase::Start;
        self.last_label.clear();
    }
}
