//! Component error types and status codes.

use thiserror::Error;

use crate::object::DispId;

use super::guid::Guid;

/// Result type for component operations.
pub type Result<T> = std::result::Result<T, ComError>;

/// Errors surfaced at the component protocol boundary.
///
/// Every failure is returned from the operation that detected it; nothing
/// propagates implicitly across the query or invocation boundary, and no
/// failure is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComError {
    /// Capability query for an identifier the object does not support.
    #[error("no such interface: {0}")]
    NoSuchInterface(Guid),

    /// Activation requested for a class this module does not host.
    #[error("class not available: {0}")]
    ClassNotAvailable(Guid),

    /// ProgID or CLSID with no registration record.
    #[error("class not registered: {0}")]
    ClassNotRegistered(String),

    /// A non-null outer object was supplied to construction.
    #[error("aggregation is not supported")]
    AggregationNotSupported,

    /// Allocation failure while building a returned value.
    #[error("out of memory")]
    OutOfMemory,

    /// Wrong argument count or type on a dynamic invocation.
    #[error("type mismatch in dispatch arguments")]
    TypeMismatch,

    /// Member name that does not resolve to a dispatch id.
    #[error("unknown member name: {0}")]
    UnknownName(String),

    /// Dispatch id outside the fixed member table.
    #[error("member not found: dispid {0}")]
    MemberNotFound(DispId),

    /// Type information queried at any index; none is available.
    #[error("no type information at index {0}")]
    BadIndex(u32),

    /// Any other fault during value construction.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ComError {
    /// The status code a component boundary would report for this error.
    pub fn hresult(&self) -> u32 {
        use hresult::*;
        match self {
            Self::NoSuchInterface(_) => E_NOINTERFACE,
            Self::ClassNotAvailable(_) => CLASS_E_CLASSNOTAVAILABLE,
            Self::ClassNotRegistered(_) => REGDB_E_CLASSNOTREG,
            Self::AggregationNotSupported => CLASS_E_NOAGGREGATION,
            Self::OutOfMemory => E_OUTOFMEMORY,
            Self::TypeMismatch => DISP_E_TYPEMISMATCH,
            Self::UnknownName(_) => DISP_E_UNKNOWNNAME,
            Self::MemberNotFound(_) => DISP_E_MEMBERNOTFOUND,
            Self::BadIndex(_) => DISP_E_BADINDEX,
            Self::Unexpected(_) => E_FAIL,
        }
    }
}

/// Status codes used at the component boundary.
pub mod hresult {
    /// Operation successful.
    pub const S_OK: u32 = 0x0000_0000;
    /// Operation successful, returning false.
    pub const S_FALSE: u32 = 0x0000_0001;
    /// Unspecified error.
    pub const E_FAIL: u32 = 0x8000_4005;
    /// No such interface supported.
    pub const E_NOINTERFACE: u32 = 0x8000_4002;
    /// Out of memory.
    pub const E_OUTOFMEMORY: u32 = 0x8007_000E;
    /// Class not registered.
    pub const REGDB_E_CLASSNOTREG: u32 = 0x8004_0154;
    /// Class not available to requesters.
    pub const CLASS_E_CLASSNOTAVAILABLE: u32 = 0x8004_0111;
    /// Class does not support aggregation.
    pub const CLASS_E_NOAGGREGATION: u32 = 0x8004_0110;
    /// Unknown dispatch member name.
    pub const DISP_E_UNKNOWNNAME: u32 = 0x8002_0006;
    /// Dispatch member not found.
    pub const DISP_E_MEMBERNOTFOUND: u32 = 0x8002_0003;
    /// Argument type mismatch on dynamic invocation.
    pub const DISP_E_TYPEMISMATCH: u32 = 0x8002_0005;
    /// Invalid type information index.
    pub const DISP_E_BADINDEX: u32 = 0x8002_000B;
}
