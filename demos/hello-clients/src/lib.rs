//! Shared setup for the HelloWorld client demos.

use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use incom::Runtime;
use incom_hello::{module, HelloServer, CLSID_HELLO_WORLD};

/// Register the HelloWorld class and attach its in-process server, the
/// way an installer and the activation resolver would.
pub fn install() -> Runtime {
    let runtime = Runtime::new();
    runtime.register_class(module::registration());
    runtime.attach_server(CLSID_HELLO_WORLD, Arc::new(HelloServer::new()));
    runtime
}

/// Logging setup shared by the demo binaries.
pub fn init_tracing(quiet: bool) {
    let level = if quiet { Level::WARN } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
