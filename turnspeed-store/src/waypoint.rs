use math::{GeoPosition, Speed};
use serde::{Deserialize, Serialize};

/// Value of [`Key::LastGpsPosition`](crate::Key::LastGpsPosition).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPosition {
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GpsPosition {
    /// Converts the fix into a position in radians.
    #[must_use]
    pub const fn to_geo(self) -> GeoPosition { GeoPosition::from_degrees(self.latitude, self.longitude) }
}

/// An element of [`Key::MapTargetVelocities`](crate::Key::MapTargetVelocities).
///
/// The velocity is the highest speed at which the vehicle should pass the point,
/// already derived from the road curvature by the map daemon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetVelocity {
    /// Latitude in degrees.
    pub latitude:  f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Target velocity at this point, in m/s.
    pub velocity:  Speed<f64>,
}

impl TargetVelocity {
    /// Location of the point in radians.
    #[must_use]
    pub const fn position(&self) -> GeoPosition {
        GeoPosition::from_degrees(self.latitude, self.longitude)
    }
}
