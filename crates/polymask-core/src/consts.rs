/// Source image read at startup, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "test.png";

/// Mask written on save, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "mask.png";

/// Smallest viewport extent (in pixels, per axis) the sizer will lay out.
pub const MIN_VIEWPORT_EXTENT: u32 = 100;

/// Initial window size as a fraction of the source image size.
pub const INITIAL_WINDOW_SCALE: f32 = 0.6;

/// Fewest vertices that still enclose an area.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Radius of the filled vertex marker, in source pixels.
pub const MARKER_RADIUS: i32 = 5;

/// Width of the edges drawn between consecutive vertices, in source pixels.
pub const EDGE_THICKNESS: u32 = 2;

/// Horizontal offset of a vertex label from its vertex, in source pixels.
pub const LABEL_OFFSET_X: u32 = 5;

/// Height of vertex label text, in source pixels.
pub const LABEL_FONT_SIZE: f64 = 14.0;

/// Vertex marker colour (RGB).
pub const MARKER_COLOR: [u8; 3] = [255, 0, 0];

/// Edge colour (RGB).
pub const EDGE_COLOR: [u8; 3] = [0, 255, 0];

/// Vertex label colour (RGB).
pub const LABEL_COLOR: [u8; 3] = [255, 255, 255];

/// Value written to every channel of a pixel inside the polygon.
pub const MASK_VALUE: u8 = 255;

/// Value written to every channel of a pixel outside the polygon.
pub const BACKGROUND_VALUE: u8 = 0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Slack added before flooring scaled extents so that `W * (vw / W)` lands
/// on `vw` despite floating-point rounding.
pub const SCALE_EPSILON: f64 = 1e-9;
