//! Great-circle geometry on a spherical Earth.

use serde::{Deserialize, Serialize};

use crate::{Angle, Length};


/// Approximate radius of Earth.
///
/// This is not the WGS-84 mean radius.
/// Waypoint velocities were tuned against distances computed with this value.
pub const EARTH_RADIUS: Length<f64> = Length::from_meters(6_373_000.0);

/// A point on the surface of Earth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude:  Angle,
    pub longitude: Angle,
}

impl GeoPosition {
    #[must_use]
    pub const fn new(latitude: Angle, longitude: Angle) -> Self { Self { latitude, longitude } }

    #[must_use]
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(Angle::from_degrees(latitude), Angle::from_degrees(longitude))
    }

    /// Great-circle distance to `other` by the haversine formula.
    ///
    /// The result is symmetric and exactly zero for identical positions.
    #[must_use]
    pub fn distance(self, other: Self) -> Length<f64> {
        let half_lat = (other.latitude - self.latitude) / 2.;
        let half_lon = (other.longitude - self.longitude) / 2.;

        let a = half_lat.sin().powi(2)
            + self.latitude.cos() * other.latitude.cos() * half_lon.sin().powi(2);
        let central = 2. * a.sqrt().atan2((1. - a).sqrt());
        EARTH_RADIUS * central
    }
}
