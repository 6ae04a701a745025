//! Runs the advisory of every vehicle entity once per frame.
//!
//! A vehicle entity carries [`Kinematics`] updated by the vehicle model
//! and a [`TurnSpeed`] controller owning its input source.
//! [`Advice`] is refreshed in [`AdviseSystemSet`],
//! so planner systems reading it should run after that set.

use bevy::app::{self, App, Plugin};
use bevy::ecs::component::Component;
use bevy::ecs::schedule::{IntoScheduleConfigs, SystemSet};
use bevy::ecs::system::Query;

use crate::{Advisory, Controller, Source, VehicleState};


pub struct Plug;

impl Plugin for Plug {
    fn build(&self, app: &mut App) {
        app.add_systems(app::Update, run_controllers_system.in_set(AdviseSystemSet));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub struct AdviseSystemSet;

/// Current kinematic state of the vehicle.
#[derive(Component, Debug, Clone, Copy)]
pub struct Kinematics(pub VehicleState);

/// The advisory controller of a vehicle.
#[derive(Component)]
#[require(Advice)]
pub struct TurnSpeed(pub Controller<Box<dyn Source + Send + Sync>>);

/// Latest advisory of a vehicle.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Advice(pub Advisory);

impl Default for Advice {
    fn default() -> Self { Self(Advisory::Unavailable) }
}

fn run_controllers_system(mut query: Query<(&Kinematics, &mut TurnSpeed, &mut Advice)>) {
    for (kinematics, mut turn_speed, mut advice) in &mut query {
        advice.0 = turn_speed.0.target_speed(kinematics.0);
    }
}
