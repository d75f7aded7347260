//! Persisted class registration records.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use parking_lot::RwLock;

use crate::types::{ComError, Guid, Result};

/// Threading model tag recorded for an in-process server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadingModel {
    /// Single-threaded apartment.
    Apartment,
    /// Multi-threaded apartment.
    Free,
    /// Either apartment kind.
    Both,
}

impl fmt::Display for ThreadingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Apartment => "Apartment",
            Self::Free => "Free",
            Self::Both => "Both",
        };
        f.write_str(tag)
    }
}

/// Registration record for one activatable class: what an installer
/// persists and the activation resolver consults. The object model never
/// reads these.
#[derive(Clone, Debug)]
pub struct ClassRegistration {
    pub clsid: Guid,
    /// Human-readable program identifier, e.g. `HelloWorldLib.HelloWorld`.
    pub prog_id: String,
    /// Display name of the class.
    pub description: String,
    /// Path to the hosting module.
    pub server_path: PathBuf,
    pub threading_model: ThreadingModel,
}

/// Name-indexed store of class registrations.
#[derive(Default)]
pub struct ClassRegistry {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    by_clsid: HashMap<Guid, ClassRegistration>,
    by_prog_id: HashMap<String, Guid>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a class. Re-registering a CLSID replaces its record.
    pub fn register(&self, registration: ClassRegistration) {
        let mut tables = self.tables.write();
        tables
            .by_prog_id
            .insert(registration.prog_id.clone(), registration.clsid);
        tables.by_clsid.insert(registration.clsid, registration);
    }

    /// Remove a class record and its ProgID mapping.
    pub fn unregister(&self, clsid: &Guid) {
        let mut tables = self.tables.write();
        if let Some(record) = tables.by_clsid.remove(clsid) {
            tables.by_prog_id.remove(&record.prog_id);
        }
    }

    /// Resolve a ProgID to its CLSID.
    pub fn clsid_from_prog_id(&self, prog_id: &str) -> Result<Guid> {
        self.tables
            .read()
            .by_prog_id
            .get(prog_id)
            .copied()
            .ok_or_else(|| ComError::ClassNotRegistered(prog_id.to_string()))
    }

    /// Look up the record for a CLSID.
    pub fn lookup(&self, clsid: &Guid) -> Option<ClassRegistration> {
        self.tables.read().by_clsid.get(clsid).cloned()
    }
}
