//! Classifier module - exercise classification support
//!
//! Note: the classifier model itself runs in JavaScript (onnxruntime-web).
//! Rust owns the feature extraction and the label vocabulary.

mod features;
pub mod labels;

pub use features::{extract_features, FEATURE_COUNT};
pub use labels::{exercise_for_label, labels_for, LabelPair, EXERCISE_LABELS};
