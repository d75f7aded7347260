//! Class factories: object construction and server lock bookkeeping.

use crate::types::{Guid, Result};

use super::handle::ComRef;
use super::unknown::{ComObject, Unknown};

/// Factory contract for constructing component objects.
pub trait ClassFactory: Unknown {
    /// Construct a new object and return it queried as `iid`.
    ///
    /// `outer` requests aggregation, which no factory here supports; a
    /// non-null outer fails before anything is allocated. On success the
    /// caller holds the object's only reference; on a failed query the
    /// object is destroyed before this returns.
    fn create_instance(
        &self,
        outer: Option<&dyn Unknown>,
        iid: &Guid,
    ) -> Result<ComRef<dyn ComObject>>;

    /// Pin or unpin the hosting server. Liveness accounting lives with
    /// the hosting module, so this is bookkeeping only and always
    /// succeeds.
    fn lock_server(&self, lock: bool) -> Result<()>;
}
