use std::time::Duration;

use math::{Accel, AccelRate, EARTH_RADIUS, GeoPosition, Length, Speed};
use store::BrakingLimits;

use super::{Evaluator, LimitsError, VehicleState};
use crate::Waypoint;

const HERE: GeoPosition = GeoPosition::from_degrees(37.0, -122.0);

const CRUISE: VehicleState = VehicleState {
    v_ego: Speed::from_meters_per_sec(20.0),
    a_ego: Accel::from_meters_per_sec2(0.0),
};

/// A waypoint `meters` north of [`HERE`]; negative values are south.
fn north(meters: f64, velocity: f64) -> Waypoint {
    let delta = (meters / EARTH_RADIUS.into_meters()).to_degrees();
    Waypoint {
        position: GeoPosition::from_degrees(37.0 + delta, -122.0),
        velocity: Speed::from_meters_per_sec(velocity),
    }
}

fn evaluator() -> Evaluator { Evaluator::new(BrakingLimits::default()).unwrap() }

#[test]
fn reject_non_braking_limits() {
    let zero_accel = BrakingLimits { target_accel: Accel::<f64>::ZERO, ..Default::default() };
    assert_eq!(Evaluator::new(zero_accel).unwrap_err(), LimitsError::Accel(Accel::<f64>::ZERO));

    let positive_jerk = BrakingLimits {
        target_jerk: AccelRate::from_meters_per_sec3(0.6),
        ..Default::default()
    };
    assert!(matches!(Evaluator::new(positive_jerk), Err(LimitsError::Jerk(_))));

    let nan_jerk = BrakingLimits {
        target_jerk: AccelRate::from_meters_per_sec3(f64::NAN),
        ..Default::default()
    };
    assert!(matches!(Evaluator::new(nan_jerk), Err(LimitsError::Jerk(_))));
}

#[test]
fn ramp_from_cruise() {
    let ramp = evaluator().ramp(CRUISE);
    assert_eq!(ramp.duration, Duration::from_secs(2));
    ramp.end_speed
        .assert_approx(Speed::from_meters_per_sec(18.8), Speed::from_meters_per_sec(1e-9))
        .unwrap();
    ramp.distance.assert_approx(Length::from_meters(39.2), Length::from_meters(1e-9)).unwrap();
}

#[test]
fn braking_distance_after_ramp() {
    // 39.2m ramp + 136.85m steady deceleration from 18.8 m/s + 5m offset
    evaluator()
        .ramp(CRUISE)
        .braking_distance(Speed::from_meters_per_sec(5.0))
        .assert_approx(Length::from_meters(181.05), Length::from_meters(1e-6))
        .unwrap();
}

#[test]
fn braking_distance_within_ramp() {
    // -0.3 t^2 + 1 = 0, so t = sqrt(1 / 0.3) and d = 20t - 0.1t^3, plus 19m offset
    let time = (1.0f64 / 0.3).sqrt();
    let expect = 20.0 * time - 0.1 * time.powi(3) + 19.0;
    evaluator()
        .ramp(CRUISE)
        .braking_distance(Speed::from_meters_per_sec(19.0))
        .assert_approx(Length::from_meters(expect), Length::from_meters(1e-6))
        .unwrap();
}

const BRAKING_HARD: VehicleState = VehicleState {
    v_ego: Speed::from_meters_per_sec(20.0),
    a_ego: Accel::from_meters_per_sec2(-2.4),
};

#[test]
fn ramp_overshoots_when_already_braking_harder() {
    // the ramp lasts |(-2.4 + 1.2) / 0.6| = 2s with jerk still pushing towards -3.6 m/s2
    let ramp = evaluator().ramp(BRAKING_HARD);
    assert_eq!(ramp.duration, Duration::from_secs(2));
    ramp.end_speed
        .assert_approx(Speed::from_meters_per_sec(14.0), Speed::from_meters_per_sec(1e-9))
        .unwrap();
    ramp.distance.assert_approx(Length::from_meters(34.4), Length::from_meters(1e-9)).unwrap();

    // 34.4m ramp + (14^2 - 5^2) / 2.4 = 71.25m steady + 5m offset
    ramp.braking_distance(Speed::from_meters_per_sec(5.0))
        .assert_approx(Length::from_meters(110.65), Length::from_meters(1e-6))
        .unwrap();

    // 17.3 m/s is reached after exactly 1s: 20 - 2.4 - 0.3 = 17.3, 20 - 1.2 - 0.1 = 18.7m
    ramp.braking_distance(Speed::from_meters_per_sec(17.3))
        .assert_approx(Length::from_meters(18.7 + 17.3), Length::from_meters(1e-6))
        .unwrap();
}

#[test]
fn braking_distance_while_accelerating() {
    // the ramp lasts (1 + 1.2) / 0.6 = 11/3 s
    let state = VehicleState { a_ego: Accel::from_meters_per_sec2(1.0), ..CRUISE };
    let ramp = evaluator().ramp(state);
    ramp.end_speed
        .assert_approx(Speed::from_meters_per_sec(589.0 / 30.0), Speed::from_meters_per_sec(1e-6))
        .unwrap();
    ramp.distance
        .assert_approx(Length::from_meters(75.125_926), Length::from_meters(1e-5))
        .unwrap();
    ramp.braking_distance(Speed::from_meters_per_sec(5.0))
        .assert_approx(Length::from_meters(230.320_833), Length::from_meters(1e-5))
        .unwrap();
}

#[test]
fn ramp_ends_above_current_speed() {
    // (2.4 + 1.2) / 0.6 = 6s: 20 + 14.4 - 10.8 = 23.6 m/s after 120 + 43.2 - 21.6 = 141.6m
    let state = VehicleState { a_ego: Accel::from_meters_per_sec2(2.4), ..CRUISE };
    let ramp = evaluator().ramp(state);
    assert!(ramp.end_speed > state.v_ego);
    ramp.end_speed
        .assert_approx(Speed::from_meters_per_sec(23.6), Speed::from_meters_per_sec(1e-6))
        .unwrap();
    // 141.6m ramp + (23.6^2 - 5^2) / 2.4 = 221.65m steady + 5m offset
    ramp.braking_distance(Speed::from_meters_per_sec(5.0))
        .assert_approx(Length::from_meters(368.25), Length::from_meters(1e-6))
        .unwrap();
}

#[test]
fn current_acceleration_shifts_binding_distance() {
    let waypoints = [north(150.0, 5.0)];
    assert_eq!(evaluator().candidates(CRUISE, HERE, &waypoints).as_slice(), &waypoints);
    assert!(evaluator().candidates(BRAKING_HARD, HERE, &waypoints).is_empty());

    let far = [north(300.0, 5.0)];
    assert!(evaluator().candidates(CRUISE, HERE, &far).is_empty());
    let accelerating = VehicleState { a_ego: Accel::from_meters_per_sec2(2.4), ..CRUISE };
    assert_eq!(evaluator().candidates(accelerating, HERE, &far).as_slice(), &far);
}

#[test]
fn offset_scales_with_target_velocity() {
    let limits = BrakingLimits { target_offset: Duration::from_secs(3), ..Default::default() };
    Evaluator::new(limits)
        .unwrap()
        .ramp(CRUISE)
        .braking_distance(Speed::from_meters_per_sec(5.0))
        .assert_approx(Length::from_meters(191.05), Length::from_meters(1e-6))
        .unwrap();
}

#[test]
fn waypoint_within_braking_distance() {
    let waypoints = [north(150.0, 5.0)];
    let candidates = evaluator().candidates(CRUISE, HERE, &waypoints);
    assert_eq!(candidates.as_slice(), &waypoints);
}

#[test]
fn waypoint_beyond_braking_distance() {
    let candidates = evaluator().candidates(CRUISE, HERE, &[north(200.0, 5.0)]);
    assert!(candidates.is_empty());
}

#[test]
fn never_restrict_at_or_above_current_speed() {
    let candidates =
        evaluator().candidates(CRUISE, HERE, &[north(10.0, 20.0), north(20.0, 25.0)]);
    assert!(candidates.is_empty());
}

#[test]
fn skip_waypoints_before_nearest() {
    let passed = north(-100.0, 3.0);
    let near = north(20.0, 15.0);
    let far = north(150.0, 5.0);
    let candidates = evaluator().candidates(CRUISE, HERE, &[passed, near, far]);
    assert_eq!(candidates.as_slice(), &[near, far]);
}

#[test]
fn keep_supplied_order() {
    let far = north(150.0, 5.0);
    let near = north(20.0, 15.0);
    let farther = north(60.0, 10.0);
    // the nearest point is the second one, so the first is treated as passed
    let candidates = evaluator().candidates(CRUISE, HERE, &[far, near, farther]);
    assert_eq!(candidates.as_slice(), &[near, farther]);
}

#[test]
fn no_waypoints() {
    assert!(evaluator().candidates(CRUISE, HERE, &[]).is_empty());
}
