use std::collections::HashMap;
use std::path::PathBuf;
use std::{fs, io};

/// Keys read from the params store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter)]
pub enum Key {
    /// The last GPS fix, as a [`GpsPosition`](crate::GpsPosition).
    #[strum(serialize = "LastGPSPosition")]
    LastGpsPosition,
    /// The upcoming speed-restricted points, as a list of [`TargetVelocity`](crate::TargetVelocity).
    #[strum(serialize = "MapTargetVelocities")]
    MapTargetVelocities,
}

impl Key {
    /// The name of the key in the params store.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

/// A key-value store of JSON documents.
pub trait Params {
    /// Reads the raw value of `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: Key) -> io::Result<Option<String>>;
}

/// In-memory params, typically written directly by the producer in the same process.
#[derive(Debug, Default, Clone)]
pub struct MemoryParams {
    values: HashMap<Key, String>,
}

impl MemoryParams {
    /// Stores `value` under `key`, replacing any previous value.
    pub fn put(&mut self, key: Key, value: impl Into<String>) { self.values.insert(key, value.into()); }

    /// Removes the value of `key`.
    pub fn remove(&mut self, key: Key) { self.values.remove(&key); }
}

impl Params for MemoryParams {
    fn get(&self, key: Key) -> io::Result<Option<String>> { Ok(self.values.get(&key).cloned()) }
}

/// Params stored as one file per key under `<root>/d/`,
/// e.g. a tmpfs directory shared with the map daemon.
#[derive(Debug, Clone)]
pub struct DirParams {
    root: PathBuf,
}

impl DirParams {
    /// Opens the params directory at `root`.
    ///
    /// The directory is not required to exist yet;
    /// reads before the producer creates it report missing keys.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path(&self, key: Key) -> PathBuf { self.root.join("d").join(key.name()) }
}

impl Params for DirParams {
    fn get(&self, key: Key) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl<P: Params + ?Sized> Params for &P {
    fn get(&self, key: Key) -> io::Result<Option<String>> { P::get(self, key) }
}

impl<P: Params + ?Sized> Params for Box<P> {
    fn get(&self, key: Key) -> io::Result<Option<String>> { P::get(self, key) }
}
