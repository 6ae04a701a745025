//! Closed-form constant-jerk motion.

use std::time::Duration;

use crate::{Accel, AccelRate, Length, Speed};


/// Motion under constant jerk, starting from `speed` and `accel` at `t = 0`.
#[derive(Debug, Clone, Copy)]
pub struct JerkProfile {
    /// Initial speed.
    pub speed: Speed<f64>,
    /// Initial acceleration.
    pub accel: Accel<f64>,
    /// Constant rate of acceleration change.
    pub jerk:  AccelRate<f64>,
}

impl JerkProfile {
    /// Acceleration after `t`.
    #[must_use]
    pub fn accel_at(&self, t: Duration) -> Accel<f64> { self.accel + self.jerk * t }

    /// Speed after `t`.
    #[must_use]
    pub fn speed_at(&self, t: Duration) -> Speed<f64> {
        self.speed + self.accel * t + self.jerk * t * t / 2.
    }

    /// Distance travelled after `t`.
    #[must_use]
    pub fn distance_at(&self, t: Duration) -> Length<f64> {
        self.speed * t + self.accel * t * t / 2. + self.jerk * t * t * t / 6.
    }

    /// Time for the acceleration to ramp from the initial value to `target`.
    ///
    /// The direction of `jerk` is ignored;
    /// only its magnitude determines how fast the ramp completes.
    /// Returns `None` if `jerk` is zero.
    #[must_use]
    pub fn time_to_accel(&self, target: Accel<f64>) -> Option<Duration> {
        (self.accel - target).abs().try_div(self.jerk.abs())
    }

    /// Time at which the speed reaches `target`.
    ///
    /// If the speed curve crosses `target` twice, the later crossing is taken.
    /// Returns `None` if there is no real crossing or the later crossing is not in the future.
    #[must_use]
    pub fn time_to_speed(&self, target: Speed<f64>) -> Option<Duration> {
        let jerk = self.jerk.into_meters_per_sec3();
        let accel = self.accel.into_meters_per_sec2();
        let speed_diff = (self.speed - target).into_meters_per_sec();

        let secs = if jerk == 0. {
            -speed_diff / accel
        } else {
            // jerk/2 * t^2 + accel * t + speed_diff = 0
            let discriminant = accel.powi(2) - 2. * jerk * speed_diff;
            if discriminant < 0. {
                return None;
            }
            let sqrt = discriminant.sqrt();
            ((-accel + sqrt) / jerk).max((-accel - sqrt) / jerk)
        };

        if secs > 0. { Duration::try_from_secs_f64(secs).ok() } else { None }
    }
}
