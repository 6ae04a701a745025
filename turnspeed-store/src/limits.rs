use std::time::Duration;

use math::{Accel, AccelRate};
use serde::{Deserialize, Serialize};

/// Deceleration assumed by the longitudinal planner when approaching a restriction.
pub const DEFAULT_TARGET_ACCEL: Accel<f64> = Accel::from_meters_per_sec2(-1.2);
/// Jerk assumed by the longitudinal planner when entering the deceleration.
pub const DEFAULT_TARGET_JERK: AccelRate<f64> = AccelRate::from_meters_per_sec3(-0.6);
/// Time margin before a restricted point.
pub const DEFAULT_TARGET_OFFSET: Duration = Duration::from_secs(1);

/// Braking capability shared with the longitudinal planner.
///
/// These values must match the limits the planner actually applies,
/// otherwise the advisory brakes too late or too early.
#[serde_with::serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrakingLimits {
    /// Steady deceleration reached after the jerk ramp. Negative.
    pub target_accel:  Accel<f64>,
    /// Rate at which deceleration builds up. Negative.
    pub target_jerk:   AccelRate<f64>,
    /// The target velocity is to be reached this long before the restricted point.
    ///
    /// The margin is applied as `target_velocity * target_offset`,
    /// so the actual lead time is shorter than this value
    /// when the vehicle is still decelerating towards the target velocity.
    #[serde_as(as = "serde_with::DurationSecondsWithFrac<f64>")]
    pub target_offset: Duration,
}

impl Default for BrakingLimits {
    fn default() -> Self {
        Self {
            target_accel:  DEFAULT_TARGET_ACCEL,
            target_jerk:   DEFAULT_TARGET_JERK,
            target_offset: DEFAULT_TARGET_OFFSET,
        }
    }
}

impl BrakingLimits {
    /// Parses limits from a JSON document.
    ///
    /// Omitted fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(json) }
}
