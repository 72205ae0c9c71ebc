use std::path::PathBuf;

use crate::consts::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, INITIAL_WINDOW_SCALE};

/// Fixed session parameters: where to read the image, where to write the
/// mask, and how large the window opens.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Fraction of the source size used for the initial window.
    pub window_scale: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            window_scale: INITIAL_WINDOW_SCALE,
        }
    }
}

impl SessionConfig {
    /// Initial image area for a source of `width` x `height`, in logical
    /// points. On a scaled display the area in physical pixels is larger by
    /// the display's pixels-per-point.
    pub fn initial_window_size(&self, width: u32, height: u32) -> [f32; 2] {
        [
            (width as f32 * self.window_scale).floor(),
            (height as f32 * self.window_scale).floor(),
        ]
    }
}
