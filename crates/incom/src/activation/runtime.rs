//! Class activation: the resolver between clients and in-process servers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::object::{ClassFactory, ComObject, ComRef};
use crate::types::{iid, ComError, Guid, Result};

use super::registry::{ClassRegistration, ClassRegistry};

/// Entry points an in-process server module exports for activation.
pub trait InprocServer: Send + Sync {
    /// Produce the class object for `clsid`, queried as `iid`.
    fn get_class_object(&self, clsid: &Guid, iid: &Guid) -> Result<ComRef<dyn ClassFactory>>;

    /// Whether the module holds no outstanding activations and may be
    /// unloaded.
    fn can_unload_now(&self) -> bool;
}

/// Activation resolver: owns the class registry and the attached
/// in-process servers, and maps (CLSID, IID) requests onto them.
#[derive(Default)]
pub struct Runtime {
    registry: ClassRegistry,
    servers: RwLock<HashMap<Guid, Arc<dyn InprocServer>>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a class registration record.
    pub fn register_class(&self, registration: ClassRegistration) {
        info!(
            clsid = %registration.clsid,
            prog_id = %registration.prog_id,
            "registering class"
        );
        self.registry.register(registration);
    }

    /// Remove a class registration record.
    pub fn unregister_class(&self, clsid: &Guid) {
        info!(%clsid, "unregistering class");
        self.registry.unregister(clsid);
    }

    /// Resolve a ProgID to its CLSID.
    pub fn clsid_from_progid(&self, prog_id: &str) -> Result<Guid> {
        self.registry.clsid_from_prog_id(prog_id)
    }

    /// The registration record for a CLSID, if one is persisted.
    pub fn class_info(&self, clsid: &Guid) -> Option<ClassRegistration> {
        self.registry.lookup(clsid)
    }

    /// Make a server module's class activatable.
    pub fn attach_server(&self, clsid: Guid, server: Arc<dyn InprocServer>) {
        debug!(%clsid, "attaching in-process server");
        self.servers.write().insert(clsid, server);
    }

    /// Obtain the class object for `clsid`, queried as `iid`.
    pub fn get_class_object(&self, clsid: &Guid, iid: &Guid) -> Result<ComRef<dyn ClassFactory>> {
        let server = self
            .servers
            .read()
            .get(clsid)
            .cloned()
            .ok_or(ComError::ClassNotAvailable(*clsid))?;
        server.get_class_object(clsid, iid)
    }

    /// Construct an instance of `clsid` queried as `requested`, releasing
    /// the transient class object before returning.
    pub fn create_instance(
        &self,
        clsid: &Guid,
        requested: &Guid,
    ) -> Result<ComRef<dyn ComObject>> {
        let factory = self.get_class_object(clsid, &iid::CLASS_FACTORY)?;
        let instance = factory.create_instance(None, requested);
        factory.release();
        instance
    }

    /// Detach the server for `clsid` if it reports itself unloadable.
    /// Returns whether the server was detached.
    pub fn try_unload(&self, clsid: &Guid) -> bool {
        let mut servers = self.servers.write();
        match servers.get(clsid) {
            Some(server) if server.can_unload_now() => {
                debug!(%clsid, "unloading idle in-process server");
                servers.remove(clsid);
                true
            }
            Some(_) => {
                warn!(%clsid, "server busy, unload deferred");
                false
            }
            None => false,
        }
    }
}
