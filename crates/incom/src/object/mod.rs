//! The reference-counted object model and its dispatch protocol.
//!
//! Objects implement [`Unknown`] (capability set plus count cell) and are
//! held through [`ComRef`] counted handles. Automation-capable objects
//! additionally implement [`Dispatch`]; factories implement
//! [`ClassFactory`].

mod dispatch;
mod factory;
mod handle;
mod unknown;

pub use dispatch::{DispId, Dispatch, MemberTable, TypeInfo};
pub use factory::ClassFactory;
pub use handle::ComRef;
pub use unknown::{ComObject, RefCount, Unknown};
