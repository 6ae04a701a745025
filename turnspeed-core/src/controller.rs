use math::Speed;
use store::BrakingLimits;

use crate::{Evaluator, LimitsError, Selector, Source, VehicleState, try_log};


/// Outcome of one advisory cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// The vehicle should not exceed this speed.
    Restricted(Speed<f64>),
    /// No upcoming waypoint restricts the vehicle.
    Unrestricted,
    /// The inputs could not be read in this cycle.
    Unavailable,
}

impl Advisory {
    /// Sentinel used by legacy consumers for [`Advisory::Unrestricted`], in m/s.
    pub const LEGACY_UNRESTRICTED: f64 = 100.0;
    /// Sentinel used by legacy consumers for [`Advisory::Unavailable`], in m/s.
    pub const LEGACY_UNAVAILABLE: f64 = 0.0;

    /// The speed limit to apply, if any.
    #[must_use]
    pub fn limit(self) -> Option<Speed<f64>> {
        match self {
            Self::Restricted(speed) => Some(speed),
            Self::Unrestricted | Self::Unavailable => None,
        }
    }

    /// Encodes the advisory as a single velocity for consumers of the legacy format.
    ///
    /// Both sentinels mean "no restriction";
    /// they must not be used as speed limits.
    #[must_use]
    pub fn legacy_value(self) -> f64 {
        match self {
            Self::Restricted(speed) => speed.into_meters_per_sec(),
            Self::Unrestricted => Self::LEGACY_UNRESTRICTED,
            Self::Unavailable => Self::LEGACY_UNAVAILABLE,
        }
    }
}

/// Computes the curve speed advisory of one vehicle every cycle.
pub struct Controller<S> {
    source:    S,
    evaluator: Evaluator,
    selector:  Selector,
}

impl<S: Source> Controller<S> {
    pub fn new(source: S, limits: BrakingLimits) -> Result<Self, LimitsError> {
        Ok(Self { source, evaluator: Evaluator::new(limits)?, selector: Selector::default() })
    }

    pub fn source_mut(&mut self) -> &mut S { &mut self.source }

    #[must_use]
    pub fn selector(&self) -> &Selector { &self.selector }

    /// Runs one cycle.
    ///
    /// If the inputs are unavailable,
    /// the selector state is left untouched and [`Advisory::Unavailable`] is returned.
    pub fn target_speed(&mut self, state: VehicleState) -> Advisory {
        let here = try_log!(
            self.source.position(),
            expect "Cannot read vehicle position"
            or return Advisory::Unavailable
        );
        let waypoints = try_log!(
            self.source.waypoints(),
            expect "Cannot read target velocities"
            or return Advisory::Unavailable
        );

        let candidates = self.evaluator.candidates(state, here, &waypoints);
        let governing = self.selector.select(&candidates);
        bevy::log::debug!(
            "{} of {} waypoints feasible at {:?}, governing speed {governing:?}",
            candidates.len(),
            waypoints.len(),
            state.v_ego,
        );

        match governing {
            Some(speed) => Advisory::Restricted(speed),
            None => Advisory::Unrestricted,
        }
    }
}
