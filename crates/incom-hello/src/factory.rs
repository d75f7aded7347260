//! Class factory for the HelloWorld class.

use tracing::{debug, warn};

use incom::{iid, ClassFactory, ComError, ComObject, ComRef, Guid, RefCount, Result, Unknown};

use crate::hello_world::HelloWorld;

const FACTORY_IIDS: &[Guid] = &[iid::UNKNOWN, iid::CLASS_FACTORY];

/// Factory producing HelloWorld instances.
pub struct HelloWorldFactory {
    refs: RefCount,
}

impl HelloWorldFactory {
    /// Construct with the creator's single reference.
    pub fn create() -> ComRef<HelloWorldFactory> {
        ComRef::new(HelloWorldFactory {
            refs: RefCount::new(),
        })
    }
}

impl Unknown for HelloWorldFactory {
    fn iids(&self) -> &[Guid] {
        FACTORY_IIDS
    }

    fn ref_count(&self) -> &RefCount {
        &self.refs
    }
}

impl ClassFactory for HelloWorldFactory {
    fn create_instance(
        &self,
        outer: Option<&dyn Unknown>,
        requested: &Guid,
    ) -> Result<ComRef<dyn ComObject>> {
        if outer.is_some() {
            warn!("aggregation requested but not supported");
            return Err(ComError::AggregationNotSupported);
        }

        debug!(iid = %requested, "creating HelloWorld instance");

        // The constructor reference is transient: the caller gets the
        // reference produced by the capability query and ours is
        // discharged. A failed query drops the only reference, so the
        // fresh object is destroyed before we return.
        let object = HelloWorld::create().into_object();
        let instance = object.query_interface(requested)?;
        object.release();
        Ok(instance)
    }

    fn lock_server(&self, _lock: bool) -> Result<()> {
        // Liveness accounting belongs to the hosting module.
        Ok(())
    }
}
