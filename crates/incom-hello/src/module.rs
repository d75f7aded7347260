//! The hosting-module activation surface for the HelloWorld class.

use std::env;
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, info};

use incom::{
    ClassFactory, ClassRegistration, ComError, ComRef, Guid, InprocServer, Result, ThreadingModel,
};

use crate::factory::HelloWorldFactory;
use crate::{CLSID_HELLO_WORLD, PROG_ID};

/// In-process server for the HelloWorld class: the entry points its
/// hosting module exports to the activation resolver.
pub struct HelloServer {
    /// Activations handed out so far. Nothing decrements this, so once a
    /// class object has been produced the module reports itself busy for
    /// the rest of its lifetime.
    /// TODO: decrement when the last factory reference is released.
    activations: AtomicU32,
}

impl HelloServer {
    pub fn new() -> Self {
        Self {
            activations: AtomicU32::new(0),
        }
    }

    /// Outstanding activation count.
    pub fn activations(&self) -> u32 {
        self.activations.load(Ordering::SeqCst)
    }
}

impl Default for HelloServer {
    fn default() -> Self {
        Self::new()
    }
}

impl InprocServer for HelloServer {
    fn get_class_object(&self, clsid: &Guid, iid: &Guid) -> Result<ComRef<dyn ClassFactory>> {
        if *clsid != CLSID_HELLO_WORLD {
            return Err(ComError::ClassNotAvailable(*clsid));
        }

        // One factory per activation, counted only when the query
        // succeeds; the constructor reference is discharged either way.
        let factory = HelloWorldFactory::create().into_factory();
        let handle = factory.query_interface(iid)?;
        self.activations.fetch_add(1, Ordering::SeqCst);
        factory.release();

        info!(%clsid, "class object produced");
        Ok(handle)
    }

    fn can_unload_now(&self) -> bool {
        let idle = self.activations() == 0;
        debug!(idle, "unload query");
        idle
    }
}

/// The registration record this module's installer persists.
pub fn registration() -> ClassRegistration {
    ClassRegistration {
        clsid: CLSID_HELLO_WORLD,
        prog_id: PROG_ID.to_string(),
        description: "HelloWorld".to_string(),
        server_path: env::current_exe().unwrap_or_default(),
        threading_model: ThreadingModel::Apartment,
    }
}
