/// Globe tuning constants.
///
/// Plain values only (no crate imports) so host tests can `include!` this
/// file directly. `GlobeConfig::default()` is assembled from these.

// Projection
pub const SCALE_DIVISOR: f64 = 2.2; // scale = min(width, height) / SCALE_DIVISOR
pub const CLIP_EPSILON_RAD: f64 = 1e-6; // horizon is at 90° + epsilon
pub const RESAMPLE_MAX_STEP_DEG: f64 = 4.0; // max great-circle step between path vertices

// Rotation (degrees)
pub const DEFAULT_ROTATION: [f64; 3] = [-105.0, -25.0, 0.0];
pub const DRAG_SENSITIVITY: f64 = 75.0; // k = DRAG_SENSITIVITY / scale
pub const CLICK_DISTANCE_PX: f64 = 0.0; // any movement beyond this turns a click into a drag

// Palette
pub const OCEAN_FILL: &str = "#0F45A4";
pub const HIGHLIGHT_FILL: &str = "#92B4F1"; // fixed highlighted country
pub const SELECTED_FILL: &str = "#4b85e0";
pub const LAND_FILL: &str = "#366BC7";
pub const HOVER_OPACITY: f64 = 0.8;

// Highlighted country
pub const HIGHLIGHT_ID: &str = "156";
pub const HIGHLIGHT_NAME: &str = "China";

// Marker
pub const MARKER_LON_LAT: [f64; 2] = [120.1551, 30.2741];
pub const MARKER_LABEL: &str = "中国 • 杭州";
pub const MARKER_ICON_HREF: &str = "assets/dot.svg";
pub const MARKER_EDGE_MARGIN: f64 = 150.0;

// Marker layout (pixels, relative to the projected marker point)
pub const ICON_SIZE: f64 = 36.0;
pub const ICON_OFFSET_X: f64 = -10.0; // +right / -left
pub const ICON_OFFSET_Y: f64 = ICON_SIZE / 2.0; // +down / -up
pub const LABEL_GAP: f64 = 8.0;
pub const LABEL_PADDING_X: f64 = 12.0;
pub const LABEL_PADDING_Y: f64 = 8.0;
pub const LABEL_TEXT_WIDTH: f64 = 80.0;
pub const LABEL_TEXT_HEIGHT: f64 = 28.0;
pub const LABEL_OFFSET_Y: f64 = 10.0;
pub const LABEL_CORNER_RADIUS: f64 = 18.0;
pub const LABEL_FILL: &str = "white";
pub const LABEL_TEXT_FILL: &str = "#333";
pub const LABEL_FONT: &str = "400 12px -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

// Geometry source
pub const GEOMETRY_URL: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";
pub const TOPOLOGY_OBJECT: &str = "countries";

// DOM
pub const CAPTION_ID: &str = "globe-caption";
pub const CAPTION_TEXT: &str = "Drag to Rotate Globe";
