//! Late-bound invocation: member tables and the automation contract.

use std::fmt;

use crate::types::{ComError, Result, Variant};

use super::unknown::Unknown;

/// Dispatch identifier for a member of an automation interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DispId(pub i32);

impl DispId {
    /// Sentinel reported for names that do not resolve.
    pub const UNKNOWN: DispId = DispId(-1);
}

impl fmt::Display for DispId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placeholder for structured type information. No object in this crate
/// provides any, so values of this type cannot be produced.
#[derive(Debug)]
pub struct TypeInfo {
    _reserved: (),
}

/// Static table mapping member names to dispatch identifiers.
///
/// Lookups are ASCII case-insensitive. Ids are fixed per type: stable
/// across instances and for the life of the process.
pub struct MemberTable {
    entries: &'static [(&'static str, DispId)],
}

impl MemberTable {
    pub const fn new(entries: &'static [(&'static str, DispId)]) -> Self {
        Self { entries }
    }

    /// Resolve a single member name to its dispatch id.
    pub fn dispid(&self, name: &str) -> Result<DispId> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, id)| *id)
            .ok_or_else(|| ComError::UnknownName(name.to_string()))
    }
}

/// Automation contract: name resolution plus id-based invocation.
pub trait Dispatch: Unknown {
    /// Number of type information blocks available. None are.
    fn type_info_count(&self) -> u32 {
        0
    }

    /// Type information by index. With zero blocks available, every
    /// index is out of range.
    fn type_info(&self, index: u32) -> Result<TypeInfo> {
        Err(ComError::BadIndex(index))
    }

    /// Resolve one member name, case-insensitively, to its dispatch id.
    fn ids_of_names(&self, name: &str) -> Result<DispId>;

    /// Invoke the member with the given id. A returned string is freshly
    /// allocated and owned by the caller.
    fn invoke(&self, dispid: DispId, args: &[Variant]) -> Result<Variant>;
}
