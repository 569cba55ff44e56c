//! Platform-agnostic globe core: geometry, rotation, projection and marker
//! placement. Nothing in here touches `web_sys`, so it builds and tests on
//! the host.

pub mod bounds;
pub mod clip;
pub mod geo;
pub mod geojson;
pub mod marker;
pub mod projection;
pub mod rotation;
pub mod topojson;

pub use bounds::GeoBounds;
pub use geo::{GeoCollection, GeoError, GeoFeature, Polygon, Ring};
pub use marker::{Marker, MarkerLayout, MarkerPlacement, Rect};
pub use projection::{Projector, ScreenRings, Viewport};
pub use rotation::RotationState;
