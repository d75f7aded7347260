//! Core component types
//!
//! - Identifiers: 128-bit GUIDs naming interfaces, classes, and libraries
//! - Status codes: the error taxonomy and its numeric mapping
//! - Variant values: the loosely-typed slots of the late-bound call path

mod error;
mod guid;
mod variant;

pub use error::{hresult, ComError, Result};
pub use guid::Guid;
pub use variant::Variant;

/// Well-known interface identifiers.
pub mod iid {
    use super::Guid;

    /// IUnknown, the universal capability.
    pub const UNKNOWN: Guid = Guid::new(
        0x0000_0000,
        0x0000,
        0x0000,
        [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
    );

    /// IClassFactory.
    pub const CLASS_FACTORY: Guid = Guid::new(
        0x0000_0001,
        0x0000,
        0x0000,
        [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
    );

    /// IDispatch, the automation capability.
    pub const DISPATCH: Guid = Guid::new(
        0x0002_0400,
        0x0000,
        0x0000,
        [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
    );
}
