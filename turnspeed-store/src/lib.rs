//! Schema of the params shared with the map daemon.
//!
//! The map daemon publishes the last GPS fix and the upcoming target velocities
//! as JSON documents under well-known [keys](Key).

#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]
#![forbid(missing_docs)]

use std::io;

mod limits;
pub use limits::*;

mod params;
pub use params::*;

mod waypoint;
pub use waypoint::*;


/// Errors reading a value from [`Params`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The key has never been written.
    #[error("No value stored for {0}")]
    Missing(Key),
    /// The backing storage could not be read.
    #[error("Cannot read {key}: {source}")]
    Io {
        /// The key being read.
        key:    Key,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The stored value is not a valid JSON document of the expected shape.
    #[error("Malformed {key}: {source}")]
    Json {
        /// The key being read.
        key:    Key,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// A target velocity is negative.
    #[error("Target velocity #{0} is negative")]
    NegativeVelocity(usize),
}

/// Reads the last GPS fix.
pub fn read_position(params: &(impl Params + ?Sized)) -> Result<GpsPosition, Error> {
    read_json(params, Key::LastGpsPosition)
}

/// Reads the upcoming target velocities in the order published by the map daemon.
pub fn read_target_velocities(
    params: &(impl Params + ?Sized),
) -> Result<Vec<TargetVelocity>, Error> {
    let velocities: Vec<TargetVelocity> = read_json(params, Key::MapTargetVelocities)?;
    if let Some(index) = velocities.iter().position(|tv| tv.velocity.is_negative()) {
        return Err(Error::NegativeVelocity(index));
    }
    Ok(velocities)
}

fn read_json<T: serde::de::DeserializeOwned>(
    params: &(impl Params + ?Sized),
    key: Key,
) -> Result<T, Error> {
    let value = params.get(key).map_err(|source| Error::Io { key, source })?;
    let value = value.ok_or(Error::Missing(key))?;
    serde_json::from_str(&value).map_err(|source| Error::Json { key, source })
}
