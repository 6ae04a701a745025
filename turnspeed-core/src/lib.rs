//! Curve speed advisory.
//!
//! Each control cycle, the [`Controller`] reads the vehicle position and
//! the upcoming speed-restricted points from a [`Source`],
//! keeps the points the vehicle can still slow down for in time,
//! and advises the lowest of their velocities to the longitudinal planner.

#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

pub mod controller;
pub use controller::{Advisory, Controller};
pub mod feasibility;
pub use feasibility::{BrakingRamp, Candidate, Evaluator, LimitsError, VehicleState};
pub mod plugin;
pub mod selector;
pub use selector::{Commitment, Selector};
pub mod source;
pub use source::{ParamsSource, Source, Waypoint};
pub mod try_log;
pub use try_log::TryLog;
