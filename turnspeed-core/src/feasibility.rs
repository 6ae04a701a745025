//! Decides which waypoints the vehicle can still slow down for.
//!
//! Braking is modelled as a jerk ramp from the current acceleration
//! to [`BrakingLimits::target_accel`], followed by steady deceleration.
//! A waypoint is feasible if the distance to it is shorter than
//! the distance needed to reach its velocity under this model plus a margin.
//! Waypoints further away are not binding yet.

use std::time::Duration;

use itertools::Itertools;
use math::{Accel, AccelRate, GeoPosition, JerkProfile, Length, Sign, Speed};
use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use store::BrakingLimits;

use crate::Waypoint;

#[cfg(test)]
mod tests;

/// Kinematic state of the vehicle at the start of a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub v_ego: Speed<f64>,
    pub a_ego: Accel<f64>,
}

/// A waypoint that passed the feasibility check in the current cycle.
pub type Candidate = Waypoint;

/// Candidates of one cycle, in the order the waypoints were supplied.
pub type Candidates = SmallVec<[Candidate; 8]>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LimitsError {
    #[error("Target acceleration must be finite and negative, got {0:?}")]
    Accel(Accel<f64>),
    #[error("Target jerk must be finite and negative, got {0:?}")]
    Jerk(AccelRate<f64>),
}

/// Evaluates waypoints against validated [`BrakingLimits`].
#[derive(Debug, Clone)]
pub struct Evaluator {
    limits: BrakingLimits,
}

impl Evaluator {
    pub fn new(limits: BrakingLimits) -> Result<Self, LimitsError> {
        if !limits.target_accel.is_finite() || limits.target_accel.sign() != Sign::Negative {
            return Err(LimitsError::Accel(limits.target_accel));
        }
        if !limits.target_jerk.is_finite() || limits.target_jerk.sign() != Sign::Negative {
            return Err(LimitsError::Jerk(limits.target_jerk));
        }
        Ok(Self { limits })
    }

    /// Computes the jerk ramp for this cycle.
    ///
    /// The ramp only depends on the vehicle state,
    /// so it is shared by all waypoints evaluated in the same cycle.
    #[must_use]
    pub fn ramp(&self, state: VehicleState) -> BrakingRamp {
        let profile =
            JerkProfile { speed: state.v_ego, accel: state.a_ego, jerk: self.limits.target_jerk };
        let duration = profile.time_to_accel(self.limits.target_accel).unwrap_or_default();
        BrakingRamp {
            profile,
            limits: self.limits,
            duration,
            end_speed: profile.speed_at(duration),
            distance: profile.distance_at(duration),
        }
    }

    /// Filters `waypoints` down to the candidates of this cycle.
    ///
    /// Waypoints supplied before the one nearest to `here` are considered passed and skipped.
    /// The remaining candidates keep their relative order.
    #[must_use]
    pub fn candidates(
        &self,
        state: VehicleState,
        here: GeoPosition,
        waypoints: &[Waypoint],
    ) -> Candidates {
        let distances: Vec<Length<f64>> =
            waypoints.iter().map(|waypoint| here.distance(waypoint.position)).collect();
        let Some(nearest) =
            distances.iter().position_min_by_key(|distance| OrderedFloat(distance.into_meters()))
        else {
            return Candidates::new();
        };

        let ramp = self.ramp(state);
        waypoints[nearest..]
            .iter()
            .zip(&distances[nearest..])
            .filter(|&(waypoint, &distance)| ramp.is_feasible(distance, waypoint.velocity))
            .map(|(waypoint, _)| *waypoint)
            .collect()
    }
}

/// The jerk ramp from the current acceleration to the target deceleration.
#[derive(Debug, Clone, Copy)]
pub struct BrakingRamp {
    profile:       JerkProfile,
    limits:        BrakingLimits,
    /// Time to reach the target deceleration.
    pub duration:  Duration,
    /// Speed when the target deceleration is reached.
    pub end_speed: Speed<f64>,
    /// Distance travelled until the target deceleration is reached.
    pub distance:  Length<f64>,
}

impl BrakingRamp {
    /// Distance needed to slow down to `target`, including the offset margin.
    #[must_use]
    pub fn braking_distance(&self, target: Speed<f64>) -> Length<f64> {
        let distance = if target > self.end_speed {
            // reached before the ramp completes
            match self.profile.time_to_speed(target) {
                Some(time) => self.profile.distance_at(time),
                None => self.distance,
            }
        } else {
            let steady = JerkProfile {
                speed: self.end_speed,
                accel: self.limits.target_accel,
                jerk:  AccelRate::<f64>::ZERO,
            };
            let steady_distance = (self.end_speed - target)
                .try_div(self.limits.target_accel.abs())
                .map_or(Length::<f64>::ZERO, |time| steady.distance_at(time));
            self.distance + steady_distance
        };

        distance + target * self.limits.target_offset
    }

    /// Whether a waypoint at `distance` with velocity `target` is binding in this cycle.
    ///
    /// Waypoints at or above the current speed never restrict.
    #[must_use]
    pub fn is_feasible(&self, distance: Length<f64>, target: Speed<f64>) -> bool {
        target < self.profile.speed && distance < self.braking_distance(target)
    }
}
