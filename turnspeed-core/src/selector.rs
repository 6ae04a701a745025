//! Reduces the candidates of a cycle to the governing speed.
//!
//! Once a waypoint governs the advisory, the selector commits to it.
//! When the governing speed of a later cycle is higher than the committed velocity,
//! the commitment is kept as long as its waypoint is still a candidate,
//! and released otherwise, letting the higher governing speed apply immediately.

use math::{GeoPosition, Speed};
use ordered_float::OrderedFloat;

use crate::Candidate;


/// The waypoint the advisory has committed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commitment {
    pub velocity: Speed<f64>,
    pub position: GeoPosition,
}

impl Commitment {
    fn matches(&self, candidate: &Candidate) -> bool {
        self.velocity == candidate.velocity && self.position == candidate.position
    }
}

/// Target selection state of one vehicle.
#[derive(Debug, Default, Clone)]
pub struct Selector {
    committed: Option<Commitment>,
}

impl Selector {
    /// The current commitment, if any.
    #[must_use]
    pub fn committed(&self) -> Option<&Commitment> { self.committed.as_ref() }

    /// The commitment in the `(velocity, latitude, longitude)` layout
    /// used by the historical advisory state,
    /// with `(0, 0, 0)` meaning no commitment.
    /// Velocity is in m/s and coordinates in radians.
    #[must_use]
    pub fn legacy_triple(&self) -> (f64, f64, f64) {
        self.committed.map_or((0., 0., 0.), |committed| {
            (
                committed.velocity.into_meters_per_sec(),
                committed.position.latitude.into_radians(),
                committed.position.longitude.into_radians(),
            )
        })
    }

    /// Selects the governing speed among `candidates`,
    /// returning `None` if no candidate restricts the vehicle.
    ///
    /// `candidates` must be in the order the waypoints were supplied;
    /// ties are committed to the first candidate.
    pub fn select(&mut self, candidates: &[Candidate]) -> Option<Speed<f64>> {
        let governing = candidates
            .iter()
            .map(|candidate| candidate.velocity)
            .min_by_key(|velocity| OrderedFloat(velocity.into_meters_per_sec()));

        if let Some(committed) = self.committed
            && governing.is_none_or(|governing| committed.velocity < governing)
        {
            if candidates.iter().any(|candidate| committed.matches(candidate)) {
                bevy::log::debug!(
                    "Holding committed restriction {:?} over {governing:?}",
                    committed.velocity
                );
                return Some(committed.velocity);
            }

            bevy::log::debug!(
                "Committed waypoint at {:?} is no longer a candidate",
                committed.position
            );
            self.committed = None;
        }

        self.committed = governing.and_then(|governing| {
            candidates
                .iter()
                .find(|candidate| candidate.velocity == governing)
                .map(|candidate| Commitment {
                    velocity: candidate.velocity,
                    position: candidate.position,
                })
        });
        governing
    }
}
