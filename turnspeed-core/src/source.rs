//! Inputs owned by other processes.

use math::{GeoPosition, Speed};
use store::Params;

/// A speed-restricted point ahead of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub position: GeoPosition,
    /// Highest speed at which the vehicle should pass `position`.
    pub velocity: Speed<f64>,
}

/// Provides the current position and the upcoming waypoints for one cycle.
///
/// Implementations must not block.
/// An input that is not ready yet is reported as an error,
/// and the next cycle reads again.
pub trait Source {
    /// The current position of the vehicle.
    fn position(&self) -> Result<GeoPosition, store::Error>;

    /// The upcoming waypoints, in the order supplied by the producer.
    fn waypoints(&self) -> Result<Vec<Waypoint>, store::Error>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn position(&self) -> Result<GeoPosition, store::Error> { S::position(self) }

    fn waypoints(&self) -> Result<Vec<Waypoint>, store::Error> { S::waypoints(self) }
}

/// Reads the inputs as JSON documents from a params store.
#[derive(Debug, Clone)]
pub struct ParamsSource<P>(pub P);

impl<P: Params> Source for ParamsSource<P> {
    fn position(&self) -> Result<GeoPosition, store::Error> {
        store::read_position(&self.0).map(store::GpsPosition::to_geo)
    }

    fn waypoints(&self) -> Result<Vec<Waypoint>, store::Error> {
        let velocities = store::read_target_velocities(&self.0)?;
        Ok(velocities
            .iter()
            .map(|tv| Waypoint { position: tv.position(), velocity: tv.velocity })
            .collect())
    }
}
