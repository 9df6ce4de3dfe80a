//! Keypoint storage and JS bridge
//!
//! Receives COCO-17 pose keypoints from JavaScript and stores them for the
//! game logic and the canvas overlay to read. A frame with no detected
//! person is signalled explicitly with `clear_keypoints`; the store is never
//! fed a garbage estimate.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::game::pose::{Keypoint, Pose, KEYPOINT_COUNT, SKELETON};

/// Floats per frame from JS: 17 keypoints × (x, y, confidence)
const FRAME_LEN: usize = KEYPOINT_COUNT * 3;

/// Internal storage for the current frame's keypoints
struct KeypointStore {
    keypoints: Pose,
    has_data: bool,
}

impl Default for KeypointStore {
    fn default() -> Self {
        Self {
            keypoints: [Keypoint::default(); KEYPOINT_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static KEYPOINTS: RefCell<KeypointStore> = RefCell::new(KeypointStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 51 values
/// (17 keypoints × 3: x, y, confidence)
#[wasm_bindgen]
pub fn update_keypoints(data: &[f32]) {
    if data.len() != FRAME_LEN {
        web_sys::console::warn_1(
            &format!(
                "Invalid keypoint data length: {} (expected {})",
                data.len(),
                FRAME_LEN
            )
            .into(),
        );
        return;
    }

    KEYPOINTS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();

        for i in 0..KEYPOINT_COUNT {
            store.keypoints[i] = Keypoint {
                x: data[i * 3],
                y: data[i * 3 + 1],
                confidence: data[i * 3 + 2],
            };
        }
        store.has_data = true;
    });
}

/// Called from JavaScript on frames where no person was detected
#[wasm_bindgen]
pub fn clear_keypoints() {
    KEYPOINTS.with(|store_cell| {
        store_cell.borrow_mut().has_data = false;
    });
}

/// Skeleton connections as flat index pairs, for the JS overlay renderer
#[wasm_bindgen]
pub fn skeleton_connections() -> Vec<u32> {
    SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Get the current pose estimate, if a person is in frame
pub fn get_keypoints() -> Option<Pose> {
    KEYPOINTS.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.keypoints)
        } else {
            None
        }
    })
}

/// Check whether the current frame has a person in it
pub fn has_keypoints() -> bool {
    KEYPOINTS.with(|store_cell| store_cell.borrow().has_data)
}
