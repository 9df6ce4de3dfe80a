//! Classifier label vocabulary
//!
//! The external exercise classifier emits labels like "squats_down". Each
//! supported exercise maps to an explicit (active, rest) label pair instead
//! of synthesising the pair from the exercise name, so direction-inverted
//! exercises are just another table row.

/// The two labels that drive one exercise's repetition cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelPair {
    /// The working phase of the movement
    pub active: &'static str,
    /// The recovered phase of the movement
    pub rest: &'static str,
}

/// All supported classifier exercises, with their label pairs.
///
/// Pull-ups invert the usual direction: hanging ("down") is the rest pose
/// and chin-over-bar ("up") is the work.
pub const EXERCISE_LABELS: [(&str, LabelPair); 5] = [
    ("squats", LabelPair { active: "squats_down", rest: "squats_up" }),
    ("pushups", LabelPair { active: "pushups_down", rest: "pushups_up" }),
    (
        "jumping_jacks",
        LabelPair { active: "jumping_jacks_down", rest: "jumping_jacks_up" },
    ),
    ("pullups", LabelPair { active: "pullups_up", rest: "pullups_down" }),
    ("situp", LabelPair { active: "situp_down", rest: "situp_up" }),
];

/// Look up the label pair for an exercise name (case-sensitive)
pub fn labels_for(exercise: &str) -> Option<LabelPair> {
    EXERCISE_LABELS
        .iter()
        .find(|(name, _)| *name == exercise)
        .map(|(_, pair)| *pair)
}

/// Reverse lookup: which exercise does a classifier label belong to?
///
/// Used to auto-switch the active game when the player changes exercise.
pub fn exercise_for_label(label: &str) -> Option<&'static str> {
    EXERCISE_LABELS
        .iter()
        .find(|(_, pair)| pair.active == label || pair.rest == label)
        .map(|(name, _)| *name)
}
